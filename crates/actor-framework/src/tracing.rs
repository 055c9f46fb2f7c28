//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter used by every binary and by
//! tests that want log output.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` / `Shutdown` with the number of records left
//! - **Requests**: Create, Get, Update, Delete, Action and Query at `debug`, with the
//!   `entity_type` field and the full payload (`?params`, `?update`, `?query`)
//! - **Writes**: `Created`, `Updated`, `Deleted`, `Action ok` at `info`
//! - **Failures**: validation failures and rollbacks at `warn`, with the error
//!
//! ## Usage
//!
//! ```bash
//! # Write log only
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the framework's actor loop
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a rating write shows the recompute inline:
//!
//! ```text
//! INFO Created entity_type="User" id=user_1 size=1
//! INFO Created entity_type="Store" id=store_1 size=1
//! INFO Action ok entity_type="Store" id=store_1
//! INFO Created entity_type="StoreRating" id=rating_1 size=1
//! ```
//!
//! The `Action ok` line is the store's cached average being written from inside the rating
//! actor's `after_save` hook, before the rating create is acknowledged.

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber. Reads `RUST_LOG`, falling back to `info`.
///
/// Calling it more than once is harmless; only the first call installs a subscriber.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .try_init();
}
