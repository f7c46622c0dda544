//! Error types for the vending machine core.

use crate::machine::MachineState;
use thiserror::Error;

/// Errors that can occur while operating the machine.
///
/// Every variant is recoverable: the controller resolves the transaction back
/// to [`MachineState::Idle`] before returning any of them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VendingError {
    /// The operation is not allowed from the machine's current state.
    #[error("Cannot {operation} while {state}")]
    InvalidStateTransition {
        operation: &'static str,
        state: MachineState,
    },

    /// No shelf has the requested code.
    #[error("Invalid shelf code: {code}")]
    InvalidShelfCode { code: u32 },

    /// The shelf exists but holds no items.
    #[error("Shelf {code} is sold out")]
    OutOfStock { code: u32 },

    /// The inserted coins do not cover the item price.
    #[error("Insufficient funds: price {price}, paid {paid}")]
    InsufficientFunds { price: u32, paid: u32 },

    /// Items must cost something.
    #[error("Invalid price: {price}")]
    InvalidPrice { price: u32 },

    /// Two shelves were declared with the same code.
    #[error("Duplicate shelf code: {code}")]
    DuplicateShelfCode { code: u32 },

    /// A dense range of shelf codes runs past `u32::MAX`.
    #[error("{count} shelves starting at {first} overflow the code range")]
    ShelfCodeOverflow { first: u32, count: u32 },
}
