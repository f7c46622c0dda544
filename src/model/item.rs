use serde::{Deserialize, Serialize};

use crate::machine::VendingError;
use std::fmt::Display;

/// The product lines the machine sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Coke,
    Pepsi,
    Juice,
    Soda,
}

impl Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ItemType::Coke => "COKE",
            ItemType::Pepsi => "PEPSI",
            ItemType::Juice => "JUICE",
            ItemType::Soda => "SODA",
        };
        write!(f, "{}", name)
    }
}

/// Represents a product that can sit on a shelf.
///
/// Items are immutable once built: the kind and price never change while the
/// item travels from the restocking crew to the dispenser tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    kind: ItemType,
    price: u32,
}

impl Item {
    /// Creates a new Item.
    ///
    /// # Arguments
    /// * `kind` - Product line
    /// * `price` - Price in cents; must be positive
    ///
    /// # Errors
    /// Returns [`VendingError::InvalidPrice`] when `price` is zero.
    pub fn new(kind: ItemType, price: u32) -> Result<Self, VendingError> {
        if price == 0 {
            return Err(VendingError::InvalidPrice { price });
        }
        Ok(Self { kind, price })
    }

    pub fn kind(&self) -> ItemType {
        self.kind
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}
