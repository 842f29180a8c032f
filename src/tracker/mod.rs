//! # Order Lifecycle Tracking
//!
//! The logic behind the order board: which orders are where, how late they are, what today
//! brought in, and the commands that move orders along.
//!
//! - [`urgency`] - green/yellow/red classification and the elapsed-time label
//! - [`aggregates`] - today's earnings and courtesy totals
//! - [`draft`] - [`OrderDraft`], the order being composed or edited
//! - [`order_tracker`] - [`OrderLifecycleTracker`], local state plus store commands
//! - [`error`] - [`TrackerError`]

pub mod aggregates;
pub mod draft;
pub mod error;
pub mod order_tracker;
pub mod urgency;

pub use aggregates::*;
pub use draft::*;
pub use error::*;
pub use order_tracker::*;
pub use urgency::*;
