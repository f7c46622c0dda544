use serde::Serialize;

use crate::machine::VendingError;
use crate::model::{Item, ItemType};
use std::collections::VecDeque;

/// A single stock slot, addressed by its code.
///
/// Stock is dispensed first-in, first-out. `sold_out` is kept in step with the
/// stock after every mutation, including a failed `remove_head`.
#[derive(Debug, Clone)]
pub struct Shelf {
    code: u32,
    stock: VecDeque<Item>,
    sold_out: bool,
}

/// Read-only view of one shelf, as shown on the machine's display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShelfStatus {
    pub code: u32,
    /// Kind of the item that would be dispensed next.
    pub next_item: Option<ItemType>,
    pub stock_count: usize,
    pub sold_out: bool,
}

impl Shelf {
    /// Creates an empty shelf. Empty shelves start out sold out.
    pub fn new(code: u32) -> Self {
        Self {
            code,
            stock: VecDeque::new(),
            sold_out: true,
        }
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    /// Appends an item behind everything already stocked.
    pub fn add(&mut self, item: Item) {
        self.stock.push_back(item);
        self.sold_out = false;
    }

    /// Pops the earliest-stocked item.
    ///
    /// # Errors
    /// [`VendingError::OutOfStock`] when the shelf is empty.
    pub fn remove_head(&mut self) -> Result<Item, VendingError> {
        let item = self.stock.pop_front();
        self.sold_out = self.stock.is_empty();
        item.ok_or(VendingError::OutOfStock { code: self.code })
    }

    /// Returns the item `remove_head` would dispense, without removing it.
    pub fn peek_head(&self) -> Result<&Item, VendingError> {
        self.stock
            .front()
            .ok_or(VendingError::OutOfStock { code: self.code })
    }

    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    pub fn is_sold_out(&self) -> bool {
        self.sold_out
    }

    pub fn status(&self) -> ShelfStatus {
        ShelfStatus {
            code: self.code,
            next_item: self.stock.front().map(Item::kind),
            stock_count: self.stock.len(),
            sold_out: self.sold_out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemType;

    fn item(kind: ItemType, price: u32) -> Item {
        Item::new(kind, price).unwrap()
    }

    #[test]
    fn test_new_shelf_is_sold_out() {
        let shelf = Shelf::new(101);
        assert_eq!(shelf.code(), 101);
        assert!(shelf.is_sold_out());
        assert_eq!(shelf.stock_count(), 0);
    }

    #[test]
    fn test_fifo_order() {
        let mut shelf = Shelf::new(101);
        shelf.add(item(ItemType::Coke, 12));
        shelf.add(item(ItemType::Pepsi, 9));
        shelf.add(item(ItemType::Juice, 13));

        assert_eq!(shelf.remove_head().unwrap().kind(), ItemType::Coke);
        assert_eq!(shelf.remove_head().unwrap().kind(), ItemType::Pepsi);
        assert_eq!(shelf.remove_head().unwrap().kind(), ItemType::Juice);
    }

    #[test]
    fn test_sold_out_tracks_stock() {
        let mut shelf = Shelf::new(102);
        shelf.add(item(ItemType::Soda, 7));
        assert!(!shelf.is_sold_out());

        shelf.remove_head().unwrap();
        assert!(shelf.is_sold_out());
    }

    #[test]
    fn test_remove_from_empty_shelf_fails() {
        let mut shelf = Shelf::new(103);
        let result = shelf.remove_head();
        assert_eq!(result, Err(VendingError::OutOfStock { code: 103 }));
        assert!(shelf.is_sold_out());
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut shelf = Shelf::new(104);
        shelf.add(item(ItemType::Juice, 13));

        assert_eq!(shelf.peek_head().unwrap().kind(), ItemType::Juice);
        assert_eq!(shelf.stock_count(), 1);
    }

    #[test]
    fn test_status_reports_next_item() {
        let mut shelf = Shelf::new(105);
        assert_eq!(shelf.status().next_item, None);

        shelf.add(item(ItemType::Pepsi, 9));
        shelf.add(item(ItemType::Coke, 12));
        let status = shelf.status();
        assert_eq!(status.code, 105);
        assert_eq!(status.next_item, Some(ItemType::Pepsi));
        assert_eq!(status.stock_count, 2);
        assert!(!status.sold_out);
    }
}
