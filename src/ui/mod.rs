//! Capabilities the screens need from their host: transient notifications, a blocking
//! confirmation prompt, the clipboard, navigation and dialogs. Injected as trait objects so the
//! terminal front end and tests can supply their own.

pub mod notify;
pub mod confirm;
pub mod clipboard;
pub mod navigation;
pub mod dialog;
pub mod terminal;

pub use notify::*;
pub use confirm::*;
pub use clipboard::*;
pub use navigation::*;
pub use dialog::*;

use std::sync::Arc;

/// Bundle of host capabilities shared by every screen
#[derive(Clone)]
pub struct Ui {
    pub notifier: Arc<dyn Notifier>,
    pub confirm: Arc<dyn ConfirmDialog>,
    pub clipboard: Arc<dyn Clipboard>,
    pub navigator: Arc<dyn Navigator>,
    pub dialogs: Arc<dyn DialogService>,
}
