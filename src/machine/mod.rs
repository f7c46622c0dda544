//! The vending machine state machine and its transaction bookkeeping.
//!
//! ## Structure
//!
//! - [`controller`] - [`VendingMachine`], the synchronous transaction controller
//! - [`state`] - [`MachineState`], the closed set of controller states
//! - [`transaction`] - [`Transaction`] plus the [`Dispense`] and [`Refund`] outcomes
//! - [`error`] - [`VendingError`] for type-safe error handling
//!
//! ## Usage
//!
//! ```rust
//! use vending_machine::machine::VendingMachine;
//! use vending_machine::model::{Coin, Inventory, Item, ItemType};
//!
//! let mut machine = VendingMachine::new(Inventory::with_range(101, 10).unwrap());
//! machine.load(101, Item::new(ItemType::Coke, 10).unwrap()).unwrap();
//!
//! machine.insert_coin(Coin::Dime).unwrap();
//! machine.insert_coin(Coin::Nickel).unwrap();
//! let dispense = machine.select_product(101).unwrap();
//! assert_eq!(dispense.change, 5);
//! ```

pub mod controller;
pub mod error;
pub mod state;
pub mod transaction;

pub use controller::*;
pub use error::*;
pub use state::*;
pub use transaction::*;
