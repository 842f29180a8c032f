//! Custom actions for the Product catalog.
//!
//! The menu only needs CRUD, so there are none. The empty enum keeps the
//! [`ActorEntity`](crate::framework::ActorEntity) contract satisfied and makes any
//! `perform_action` call on a product client impossible to construct.

#[derive(Debug, Clone)]
pub enum ProductAction {}
