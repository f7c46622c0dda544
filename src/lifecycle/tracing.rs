//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global subscriber used by the demo binary.
//!
//! The compact format hides the crate/module prefix (`with_target(false)`) and
//! shows spans inline, so a purchase through the service trait reads as
//! `purchase: Sending request` followed by the actor's own lines.
//!
//! ## Levels
//!
//! - `info`: actor start and shutdown, dispenses, refunds
//! - `warn`: failed selections, expired transactions, failed loads
//! - `debug`: every coin, every request, every reset
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the demo purchase prints:
//!
//! ```text
//! INFO Actor started machine_id=machine_1 shelves=10
//! INFO Dispensed code=102 item=COKE paid=30 change=18
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
