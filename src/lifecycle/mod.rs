//! # System Lifecycle
//!
//! Starting and stopping everything that runs on its own task.
//!
//! - [`OrderSystem`] spawns the Order Store, the Product Catalog and the Inventory store,
//!   hands out their clients and builds trackers subscribed to its [`SettingsHandle`](crate::settings::SettingsHandle).
//! - [`RefreshTicker`] drives the once-a-second redraw of elapsed times.
//! - [`setup_tracing`] installs the log subscriber.
//!
//! ## Shutdown
//!
//! Stores have no stop message. Dropping the last client closes a store's channel, the store
//! drains what is queued and its task ends. [`OrderSystem::shutdown`] drops the system's own
//! clients and awaits the tasks, so any tracker still alive must be dropped first.
//! The ticker is cancelled explicitly through its `CancellationToken`, or on drop.

pub mod order_system;
pub mod ticker;
pub mod tracing;

pub use order_system::*;
pub use ticker::*;
pub use tracing::*;
