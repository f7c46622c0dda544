use serde::Serialize;

use crate::model::{Coin, Item};

/// Funds and selection accumulated between the first coin and the next reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub(crate) inserted_coins: Vec<Coin>,
    pub(crate) selected_code: Option<u32>,
}

impl Transaction {
    pub fn total(&self) -> u32 {
        Coin::total(&self.inserted_coins)
    }

    pub(crate) fn clear(&mut self) {
        self.inserted_coins.clear();
        self.selected_code = None;
    }
}

/// A successful sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispense {
    pub code: u32,
    pub item: Item,
    pub paid: u32,
    pub change: u32,
}

/// Coins handed back when the customer cancels before selecting.
///
/// Only the amount is computed; the coin return is not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Refund {
    pub coins: Vec<Coin>,
    pub amount: u32,
}
