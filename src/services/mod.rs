//! Widget controllers: validate, call the backend, then rebuild the listing.

pub mod instance_service;
pub mod memo_service;

// Re-export commonly used functions
pub use instance_service::{list_instances, add_instance, delete_instance, InstanceListing};
pub use memo_service::{fetch_memo_page, add_memo, delete_memo, show_memo, MemoListing};

/// Result of a successful create/delete: the backend's message and the reloaded listing
#[derive(Debug, Clone)]
pub struct Mutation<L> {
    pub message: String,
    pub listing: L,
}

#[derive(Debug, Clone)]
pub enum DeleteOutcome<L> {
    /// Confirmation was declined; nothing was sent
    Declined,
    Deleted(Mutation<L>),
}

impl<L> DeleteOutcome<L> {
    pub fn is_declined(&self) -> bool {
        matches!(self, DeleteOutcome::Declined)
    }
}
