//! Errors surfaced to the presentation layer by the tracker.

use crate::model::{OrderId, OrderStatus};
use crate::order_actor::OrderError;
use crate::tracker::draft::ValidationError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackerError {
    /// The draft was rejected before reaching the store.
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// The typed confirmation did not match the delete sentinel.
    #[error("Confirmation text does not match")]
    ConfirmationMismatch,

    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("Order {id} is {status} and can no longer be edited")]
    NotEditable { id: OrderId, status: OrderStatus },

    #[error("Unknown order: {0}")]
    UnknownOrder(OrderId),

    /// The store call failed. Local state was left as it was.
    #[error("Store request failed: {0}")]
    Store(#[from] OrderError),
}
