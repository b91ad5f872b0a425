/// Interactive yes/no question asked before destructive operations
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm` dialog
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(win) => win.confirm_with_message(message).unwrap_or(false),
            None => false,
        }
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
