/// Synchronous yes/no prompt shown before destructive actions
pub trait ConfirmDialog: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
