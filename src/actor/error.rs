//! # Client Errors
//!
//! Errors seen by callers talking to a machine through the async layer. Channel
//! failures are kept apart from the machine's own [`VendingError`]s so callers
//! can tell "the machine said no" from "the machine is gone".

use crate::machine::VendingError;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ClientError {
    #[error("Machine actor closed")]
    ActorClosed,
    #[error("Machine actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Vending(#[from] VendingError),
}

impl ClientError {
    /// The machine-level error, if the request reached the machine.
    pub fn vending(&self) -> Option<&VendingError> {
        match self {
            ClientError::Vending(e) => Some(e),
            _ => None,
        }
    }
}
