use crate::machine::VendingError;
use crate::model::{Item, Shelf, ShelfStatus};
use std::collections::BTreeMap;

/// Fixed collection of shelves, addressed by code.
///
/// The set of codes is decided at construction and never changes afterwards;
/// only the stock inside each shelf moves. Shelves are kept in ascending code
/// order so [`Inventory::snapshot`] reads like the front panel.
#[derive(Debug, Clone)]
pub struct Inventory {
    shelves: BTreeMap<u32, Shelf>,
}

impl Inventory {
    /// Builds an inventory with one empty shelf per code.
    ///
    /// # Errors
    /// [`VendingError::DuplicateShelfCode`] if a code appears twice.
    pub fn new(codes: impl IntoIterator<Item = u32>) -> Result<Self, VendingError> {
        let mut shelves = BTreeMap::new();
        for code in codes {
            if shelves.insert(code, Shelf::new(code)).is_some() {
                return Err(VendingError::DuplicateShelfCode { code });
            }
        }
        Ok(Self { shelves })
    }

    /// Builds `count` shelves with dense codes starting at `first_code`.
    ///
    /// # Errors
    /// [`VendingError::ShelfCodeOverflow`] if the last code would not fit in a `u32`.
    pub fn with_range(first_code: u32, count: u32) -> Result<Self, VendingError> {
        let end = first_code
            .checked_add(count)
            .ok_or(VendingError::ShelfCodeOverflow {
                first: first_code,
                count,
            })?;
        let shelves = (first_code..end)
            .map(|code| (code, Shelf::new(code)))
            .collect();
        Ok(Self { shelves })
    }

    /// Stocks `item` at the back of the shelf with the given code.
    pub fn add_item(&mut self, code: u32, item: Item) -> Result<(), VendingError> {
        self.shelf_mut(code)?.add(item);
        Ok(())
    }

    /// Removes and returns the next item from the shelf with the given code.
    pub fn get_item(&mut self, code: u32) -> Result<Item, VendingError> {
        self.shelf_mut(code)?.remove_head()
    }

    /// Looks at the next item of a shelf without dispensing it.
    pub fn peek_item(&self, code: u32) -> Result<&Item, VendingError> {
        self.shelf(code)
            .ok_or(VendingError::InvalidShelfCode { code })?
            .peek_head()
    }

    pub fn has_stock(&self) -> bool {
        self.shelves.values().any(|shelf| !shelf.is_sold_out())
    }

    pub fn shelf(&self, code: u32) -> Option<&Shelf> {
        self.shelves.get(&code)
    }

    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.shelves.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    /// One status row per shelf, in ascending code order.
    pub fn snapshot(&self) -> Vec<ShelfStatus> {
        self.shelves.values().map(Shelf::status).collect()
    }

    fn shelf_mut(&mut self, code: u32) -> Result<&mut Shelf, VendingError> {
        self.shelves
            .get_mut(&code)
            .ok_or(VendingError::InvalidShelfCode { code })
    }
}
