//! # System Lifecycle
//!
//! Starting, wiring and shutting down machine actors.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of each machine's channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors log final state** - machine state and whether any stock remains
//! 4. **Await completion** - [`VendingSystem::shutdown`] waits on every task
//!
//! Machines never hold each other's clients, so shutdown order does not matter.
//!
//! ## Observability
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`](self::tracing) module.

pub mod tracing;
pub mod vending_system;

pub use self::tracing::setup_tracing;
pub use vending_system::VendingSystem;
