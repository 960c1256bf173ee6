//! Screen controllers.
//!
//! Each screen owns short-lived local state (rows, form fields, loading/saving flags), calls the
//! API seams and answers every outcome by mutating that state and notifying the host. Screens
//! are built fresh per visit and dropped on navigation.

pub mod pagination;
pub mod analysis_dialog;
pub mod company_list;
pub mod company_form;
pub mod document_list;
pub mod document_form;

pub use pagination::*;
pub use analysis_dialog::*;
pub use company_list::*;
pub use company_form::*;
pub use document_list::*;
pub use document_form::*;
