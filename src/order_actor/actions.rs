//! Custom actions for the Order store.
//!
//! Status changes do not go through `Update`: they have their own guard (the transition
//! table in [`OrderStatus::can_advance_to`]) and may only happen in one direction.

use crate::model::OrderStatus;

/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Moves the order one step forward.
    ///
    /// `payment_method` is recorded only when `status` is [`OrderStatus::Paid`].
    ///
    /// # Errors
    /// Fails with [`OrderError::InvalidTransition`](super::OrderError::InvalidTransition)
    /// when the step skips a stage or goes backwards.
    SetStatus {
        status: OrderStatus,
        payment_method: Option<String>,
    },
}
