//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run                     # one line per store operation and command
//! RUST_LOG=debug cargo run                    # full payloads at client entry points
//! RUST_LOG=order_tracker::tracker=debug cargo run
//! ```
//!
//! Clients log the full payload once with `debug!(?params, ...)`; everything after that is
//! structured fields (`entity_type`, `order_id`, `size`) inside `#[instrument]` spans, so
//! a status change reads like:
//!
//! ```text
//! INFO transition: Action ok entity_type="Order" id=order_1 order_id=order_1
//! INFO transition: Order advanced from=in-progress to=pending-payment order_id=order_1
//! INFO transition:refresh: Orders refreshed size=0 status=InProgress
//! ```

/// Installs the global subscriber. Call once, before the system starts.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
