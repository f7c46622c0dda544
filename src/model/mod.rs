//! Pure data structures for the machine: coins, items, shelves and the inventory.
//!
//! Nothing in this module knows about transactions or channels. The
//! [`VendingMachine`](crate::machine::VendingMachine) drives these types and the
//! actor layer wraps the machine.

pub mod coin;
pub mod inventory;
pub mod item;
pub mod machine_id;
pub mod shelf;

pub use coin::*;
pub use inventory::*;
pub use item::*;
pub use machine_id::*;
pub use shelf::*;
