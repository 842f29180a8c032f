//! # Order Tracker
//!
//! > **The order board of a small restaurant, as a library.**
//!
//! Staff compose orders from a menu of products with extras, move them from the kitchen to
//! the till, and watch each order's card turn from green to yellow to red as it waits. At the
//! end of the day the board knows what came in and what was given away on the house.
//!
//! ## 🏗️ Design
//!
//! The Order Store, the Product Catalog and the Inventory run as resource actors: one Tokio
//! task each, owning their entities and answering typed requests over channels. Everything in
//! front of them ([`tracker`], [`settings`]) talks to the stores only through [`clients`],
//! exactly as it would talk to a remote backend: one request, one reply, success or failure,
//! no retry.
//!
//! ### Lifecycle of an order
//!
//! ```text
//! [submitted] -> in-progress -> pending-payment -> paid
//!                     |               |              |
//!                     +---------------+--------------+--> (deleted, typed confirmation)
//! ```
//!
//! Only single forward steps exist. The tracker rejects anything else before calling the
//! store, and the store rejects it again on its side.
//!
//! ### One source of truth
//!
//! The tracker keeps every known order once, keyed by id. The three columns are filtered
//! views over that map; refreshing a status replaces exactly that status's entries.
//!
//! ### Settings without globals
//!
//! Urgency thresholds and branding live behind a [`SettingsHandle`](settings::SettingsHandle)
//! (`tokio::sync::watch`). The tracker re-reads them on every classification, so a change is
//! visible on the next tick.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! - **Role**: the generic `ResourceActor<T>` request loop and its `MockClient` for tests.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Stores ([`order_actor`], [`product_actor`], [`inventory_actor`])
//! - **Role**: `ActorEntity` implementations: id assignment, `created_at` stamping, totals,
//!   the status transition guard, product validation, stock levels.
//!
//! ### 3. The Interface ([`clients`])
//! - **Key items**: [`OrderClient`](clients::OrderClient), [`ProductClient`](clients::ProductClient),
//!   [`InventoryClient`](clients::InventoryClient).
//!
//! ### 4. The Board ([`tracker`], [`settings`], [`model`])
//! - **Key items**: [`OrderLifecycleTracker`](tracker::OrderLifecycleTracker),
//!   [`OrderDraft`](tracker::OrderDraft), [`classify_urgency`](tracker::classify_urgency),
//!   [`compute_daily_aggregates`](tracker::compute_daily_aggregates).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! - **Key items**: [`OrderSystem`](lifecycle::OrderSystem),
//!   [`RefreshTicker`](lifecycle::RefreshTicker), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ORDER_TRACKER_THRESHOLDS__RED_LIMIT_MINUTES=30 cargo run -- settings.json
//! cargo test
//! ```

pub mod clients;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod settings;
pub mod tracker;
