//! Pure data structures (DTOs). [`Order`] and [`Product`] implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod catalog;
pub mod inventory;
pub mod order;

pub use catalog::*;
pub use inventory::*;
pub use order::*;
