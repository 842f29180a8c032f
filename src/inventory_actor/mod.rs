//! # Inventory Store
//!
//! Kitchen supplies as a resource actor: name, current stock, minimum stock and provider.
//! Listings can be narrowed to one [`StockLevel`](crate::model::StockLevel), which is how
//! the low-stock view is built.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`InventoryItem`]
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction`] (empty)
//! - [`new()`] - Factory function that creates the store and its client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::InventoryItem;

/// Creates a new Inventory store and its client.
pub fn new() -> (ResourceActor<InventoryItem>, ResourceClient<InventoryItem>) {
    ResourceActor::new(32)
}
