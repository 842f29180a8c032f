//! # Product Catalog
//!
//! The menu as a resource actor. Orders copy a product's name and price into their line
//! items when they are built, so the catalog can change (or lose products) without touching
//! existing orders; [`Catalog::describe`](crate::model::Catalog::describe) is where the
//! difference becomes visible.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] (empty)
//! - [`new()`] - Factory function that creates the store and its client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new Product catalog store and its client.
pub fn new() -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(32)
}
