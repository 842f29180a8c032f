//! Error types for the Inventory store.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(String),

    #[error("Inventory validation error: {0}")]
    ValidationError(String),

    /// The typed text did not name the item being deleted.
    #[error("Confirmation does not match item name")]
    ConfirmationMismatch,

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for InventoryError {
    fn from(msg: String) -> Self {
        InventoryError::ActorCommunicationError(msg)
    }
}
