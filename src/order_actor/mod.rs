//! # Order Store
//!
//! The Order Store as a resource actor: order persistence, id assignment, `created_at`
//! stamping, authoritative totals and the status transition guard.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`actions`] - [`OrderAction`] (status changes)
//! - [`error`] - [`OrderError`]
//! - [`new()`] - Factory function that creates the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_tracker::clients::OrderClient;
//! use order_tracker::model::{LineItem, OrderCreate, OrderStatus, OrderType, ProductId};
//! use order_tracker::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new();
//!     let client = OrderClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let order = client
//!         .create_order(OrderCreate {
//!             client: "Ana".into(),
//!             order_type: OrderType::Pickup,
//!             line_items: vec![LineItem::new(ProductId::from(1), "Taco", 2.5)],
//!         })
//!         .await?;
//!     client.set_order_status(order.id.clone(), OrderStatus::PendingPayment).await?;
//!     assert_eq!(client.list_orders(OrderStatus::PendingPayment).await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order store and its client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
