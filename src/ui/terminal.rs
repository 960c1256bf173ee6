//! Terminal implementations of the host capabilities, used by the `zapflow` binary.

use super::{ConfirmDialog, DialogService, Navigator, Notification, Notifier};
use crate::routes::Route;
use crate::screens::AnalysisDialog;
use std::io::{BufRead, Write};
use std::sync::Mutex;

/// Prints notifications to stderr; the duration has no meaning on a terminal
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn open(&self, notification: Notification) {
        eprintln!("{}", notification.message);
    }
}

/// Asks on stdin; `assume_yes` answers every prompt with yes
#[derive(Debug, Default)]
pub struct TerminalConfirm {
    pub assume_yes: bool,
}

impl ConfirmDialog for TerminalConfirm {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [s/N] ", message);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "s" | "sim" | "y" | "yes")
    }
}

/// Remembers the last requested route so the caller can tell where a flow ended
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn last_route(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "navigate");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}

/// Writes the dialog body to stdout
#[derive(Debug, Default)]
pub struct TerminalDialogs;

impl DialogService for TerminalDialogs {
    fn open_analysis(&self, dialog: AnalysisDialog) {
        println!("{}", dialog.render());
    }
}
