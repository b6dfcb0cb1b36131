//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; actors tag their lines with `entity_type`
//! and the id they touched instead.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per stored change
//! RUST_LOG=debug cargo run    # request payloads and side effects
//! ```
//!
//! With `RUST_LOG=debug`, moving an order into production reads roughly:
//!
//! ```text
//! DEBUG update_order: update_order called update=ProcessOrderUpdate { status: Some(InProduction), .. }
//! DEBUG Update entity_type="ProcessOrder" id=order_1
//! DEBUG ensure_for_order: Sending request order_id=ProcessOrderId(1)
//!  INFO Created entity_type="ProcessTracking" id=tracking_1 size=1
//! DEBUG Tracking ensured order_id=order_1 tracking_id=tracking_1 created=true
//!  INFO Updated entity_type="ProcessOrder" id=order_1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
