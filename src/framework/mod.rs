//! Generic store framework.
//!
//! The Order Store and the Product Catalog are both built from these pieces: a
//! [`ResourceActor`] task that owns the entities, and a [`ResourceClient`] handle that turns
//! method calls into request/reply messages.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that stored resource types implement
//! - [`ResourceActor`] - Generic store task
//! - [`ResourceClient`] - Typed async handle to a store
//! - [`FrameworkError`] - Transport-level errors
//!
//! # Testing
//!
//! See the [`mock`] module for scripted stores.

pub mod core;
pub mod mock;

pub use self::core::*;
