//! Async access to machines.
//!
//! [`VendingService`] is the seam callers program against. Two implementations
//! ship with the crate:
//!
//! - [`MachineClient`](crate::actor::MachineClient) sends each request to a
//!   machine actor.
//! - [`SharedMachine`] locks an in-process machine behind a mutex.

pub mod service;
pub mod shared;

pub use service::VendingService;
pub use shared::SharedMachine;
