//! Destructive-action confirmation seam.
//!
//! Deleting a resource asks the caller context for confirmation before any
//! state is touched. Interactive front ends prompt the user; non-interactive
//! callers and tests plug in a fixed answer.

/// Answers a destructive-action confirmation prompt.
pub trait ConfirmAction: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms every prompt.
pub struct AlwaysConfirm;

impl ConfirmAction for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
