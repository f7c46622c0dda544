//! # Transaction Controller
//!
//! [`VendingMachine`] is the synchronous state machine at the heart of the crate.
//! It accepts coins, resolves product selections against its [`Inventory`] and
//! always returns to [`MachineState::Idle`] once a transaction ends.
//!
//! ## Transitions
//!
//! | From       | Event            | To         | Outcome                              |
//! |------------|------------------|------------|--------------------------------------|
//! | `Idle`     | `insert_coin`    | `HasFunds` | running total                        |
//! | `HasFunds` | `insert_coin`    | `HasFunds` | running total                        |
//! | `HasFunds` | `select_product` | `Idle`     | [`Dispense`] or a [`VendingError`]   |
//! | `HasFunds` | `cancel`         | `Idle`     | [`Refund`] of every inserted coin    |
//! | `HasFunds` | `expire`         | `Idle`     | inserted coins are forfeited         |
//! | `Idle`     | `select_product` | `Idle`     | `InvalidStateTransition`             |
//! | `Idle`     | `cancel`         | `Idle`     | `InvalidStateTransition`             |
//!
//! ## Funds on a failed selection
//!
//! When the selected shelf is unknown or empty, or the funds fall short of the
//! price, the transaction is reset and the inserted coins stay in the machine.
//! Customers who change their mind before selecting use `cancel` instead.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::machine::{Dispense, MachineState, Refund, Transaction, VendingError};
use crate::model::{Coin, Inventory, Item, ShelfStatus};

/// Everything an operator panel or a test needs to see about a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    pub state: MachineState,
    pub inserted_total: u32,
    pub shelves: Vec<ShelfStatus>,
}

/// The vending machine transaction controller.
///
/// Each instance owns its inventory and the transaction in progress. There is
/// no process-wide machine; build one per physical unit.
#[derive(Debug, Clone)]
pub struct VendingMachine {
    state: MachineState,
    inventory: Inventory,
    transaction: Transaction,
}

impl VendingMachine {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            state: MachineState::Idle,
            inventory,
            transaction: Transaction::default(),
        }
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inserted_coins(&self) -> &[Coin] {
        &self.transaction.inserted_coins
    }

    pub fn inserted_total(&self) -> u32 {
        self.transaction.total()
    }

    /// Shelf code chosen in the transaction being resolved, if any.
    pub fn selected_code(&self) -> Option<u32> {
        self.transaction.selected_code
    }

    /// Accepts a coin and returns the running total of the transaction.
    pub fn insert_coin(&mut self, coin: Coin) -> Result<u32, VendingError> {
        match self.state {
            MachineState::Idle | MachineState::HasFunds => {
                self.transaction.inserted_coins.push(coin);
                self.state = MachineState::HasFunds;
                let total = self.transaction.total();
                debug!(%coin, total, "Accepted coin");
                Ok(total)
            }
        }
    }

    /// Resolves the transaction against the shelf with the given code.
    ///
    /// The machine is back in `Idle` with no coins recorded when this returns,
    /// whatever the outcome.
    ///
    /// # Errors
    /// - [`VendingError::InvalidStateTransition`] when no coin was inserted
    /// - [`VendingError::InvalidShelfCode`] / [`VendingError::OutOfStock`]
    /// - [`VendingError::InsufficientFunds`] carrying price and paid amount
    pub fn select_product(&mut self, code: u32) -> Result<Dispense, VendingError> {
        if self.state == MachineState::Idle {
            return Err(VendingError::InvalidStateTransition {
                operation: "select a product",
                state: self.state,
            });
        }

        self.transaction.selected_code = Some(code);
        let outcome = self.resolve_selection(code);
        match &outcome {
            Ok(dispense) => info!(
                code,
                item = %dispense.item.kind(),
                paid = dispense.paid,
                change = dispense.change,
                "Dispensed"
            ),
            Err(e) => warn!(code, error = %e, retained = self.inserted_total(), "Selection failed"),
        }
        self.reset();
        outcome
    }

    /// Runs a whole transaction: inserts `coins`, then selects `code`.
    ///
    /// Only starts from `Idle`, so it never spends coins that belong to a
    /// transaction already in progress.
    pub fn purchase(&mut self, coins: &[Coin], code: u32) -> Result<Dispense, VendingError> {
        if self.state != MachineState::Idle {
            return Err(VendingError::InvalidStateTransition {
                operation: "purchase",
                state: self.state,
            });
        }
        for &coin in coins {
            self.insert_coin(coin)?;
        }
        self.select_product(code)
    }

    fn resolve_selection(&mut self, code: u32) -> Result<Dispense, VendingError> {
        let paid = self.transaction.total();
        let price = self.inventory.peek_item(code)?.price();
        if paid < price {
            return Err(VendingError::InsufficientFunds { price, paid });
        }

        let item = self.inventory.get_item(code)?;
        Ok(Dispense {
            code,
            item,
            paid,
            change: paid - price,
        })
    }

    /// Ends the transaction and hands back every inserted coin.
    pub fn cancel(&mut self) -> Result<Refund, VendingError> {
        if self.state == MachineState::Idle {
            return Err(VendingError::InvalidStateTransition {
                operation: "cancel",
                state: self.state,
            });
        }

        let coins = std::mem::take(&mut self.transaction.inserted_coins);
        let amount = Coin::total(&coins);
        info!(amount, "Refunding full amount");
        self.reset();
        Ok(Refund { coins, amount })
    }

    /// Abandons a stale transaction, keeping the inserted coins.
    ///
    /// Returns the forfeited amount, or `None` when the machine was idle.
    pub fn expire(&mut self) -> Option<u32> {
        if self.state == MachineState::Idle {
            return None;
        }
        let forfeited = self.transaction.total();
        warn!(forfeited, "Transaction timed out");
        self.reset();
        Some(forfeited)
    }

    /// Stocks an item on a shelf. Restocking never touches the transaction.
    pub fn load(&mut self, code: u32, item: Item) -> Result<(), VendingError> {
        self.inventory.add_item(code, item)?;
        debug!(code, item = %item.kind(), "Loaded item");
        Ok(())
    }

    pub fn display(&self) -> Vec<ShelfStatus> {
        self.inventory.snapshot()
    }

    pub fn has_stock(&self) -> bool {
        self.inventory.has_stock()
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            state: self.state,
            inserted_total: self.inserted_total(),
            shelves: self.display(),
        }
    }

    /// Clears the transaction and returns to `Idle`.
    pub fn reset(&mut self) {
        self.transaction.clear();
        self.state = MachineState::Idle;
        debug!(state = %self.state, "Reset");
    }
}
