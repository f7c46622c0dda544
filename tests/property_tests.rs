//! Property-based tests for the shelf, inventory and transaction controller.
//!
//! These tests use proptest to check that the machine's rules hold across
//! many randomly generated coin sequences and stock layouts.

use proptest::prelude::*;
use vending_machine::machine::{MachineState, VendingError, VendingMachine};
use vending_machine::model::{Coin, Inventory, Item, ItemType, Shelf};

prop_compose! {
    fn arbitrary_coin()(variant in 0..4u8) -> Coin {
        match variant {
            0 => Coin::Penny,
            1 => Coin::Nickel,
            2 => Coin::Dime,
            _ => Coin::Quarter,
        }
    }
}

prop_compose! {
    fn arbitrary_item()(variant in 0..4u8, price in 1..100u32) -> Item {
        let kind = match variant {
            0 => ItemType::Coke,
            1 => ItemType::Pepsi,
            2 => ItemType::Juice,
            _ => ItemType::Soda,
        };
        Item::new(kind, price).unwrap()
    }
}

fn stocked_machine(code: u32, items: &[Item]) -> VendingMachine {
    let mut machine = VendingMachine::new(Inventory::with_range(101, 10).unwrap());
    for &item in items {
        machine.load(code, item).unwrap();
    }
    machine
}

fn stock_count(machine: &VendingMachine, code: u32) -> usize {
    machine.inventory().shelf(code).unwrap().stock_count()
}

proptest! {
    #[test]
    fn shelf_dispenses_in_stocking_order(items in prop::collection::vec(arbitrary_item(), 0..20)) {
        let mut shelf = Shelf::new(101);
        for &item in &items {
            shelf.add(item);
        }

        let mut dispensed = Vec::new();
        while let Ok(item) = shelf.remove_head() {
            dispensed.push(item);
        }
        prop_assert_eq!(dispensed, items);
    }

    #[test]
    fn sold_out_tracks_emptiness(ops in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut shelf = Shelf::new(101);
        let soda = Item::new(ItemType::Soda, 7).unwrap();
        for add in ops {
            if add {
                shelf.add(soda);
            } else {
                let _ = shelf.remove_head();
            }
            prop_assert_eq!(shelf.is_sold_out(), shelf.stock_count() == 0);
        }
    }

    #[test]
    fn inserted_total_is_sum_of_coins(coins in prop::collection::vec(arbitrary_coin(), 1..30)) {
        let mut machine = VendingMachine::new(Inventory::with_range(101, 10).unwrap());
        let mut last = 0;
        for &coin in &coins {
            let total = machine.insert_coin(coin).unwrap();
            prop_assert_eq!(total, last + coin.value());
            last = total;
        }
        prop_assert_eq!(machine.inserted_total(), coins.iter().map(|c| c.value()).sum::<u32>());
        prop_assert_eq!(machine.state(), MachineState::HasFunds);
    }

    #[test]
    fn sale_returns_exact_change(
        coins in prop::collection::vec(arbitrary_coin(), 1..20),
        item in arbitrary_item(),
        extra in 0..5usize,
    ) {
        let total: u32 = coins.iter().map(|c| c.value()).sum();
        prop_assume!(total >= item.price());

        let stock = vec![item; extra + 1];
        let mut machine = stocked_machine(103, &stock);
        for &coin in &coins {
            machine.insert_coin(coin).unwrap();
        }

        let dispense = machine.select_product(103).unwrap();
        prop_assert_eq!(dispense.change, total - item.price());
        prop_assert_eq!(dispense.paid, total);
        prop_assert_eq!(stock_count(&machine, 103), extra);
    }

    #[test]
    fn short_payment_leaves_stock(
        coins in prop::collection::vec(arbitrary_coin(), 1..5),
        item in arbitrary_item(),
    ) {
        let total: u32 = coins.iter().map(|c| c.value()).sum();
        prop_assume!(total < item.price());

        let mut machine = stocked_machine(104, &[item]);
        for &coin in &coins {
            machine.insert_coin(coin).unwrap();
        }

        let result = machine.select_product(104);
        prop_assert_eq!(
            result,
            Err(VendingError::InsufficientFunds { price: item.price(), paid: total })
        );
        prop_assert_eq!(stock_count(&machine, 104), 1);
    }

    #[test]
    fn every_selection_ends_idle(
        coins in prop::collection::vec(arbitrary_coin(), 1..10),
        items in prop::collection::vec(arbitrary_item(), 0..3),
        code in 95..115u32,
    ) {
        let mut machine = stocked_machine(105, &items);
        for &coin in &coins {
            machine.insert_coin(coin).unwrap();
        }

        let _ = machine.select_product(code);
        prop_assert_eq!(machine.state(), MachineState::Idle);
        prop_assert!(machine.inserted_coins().is_empty());
        prop_assert_eq!(machine.selected_code(), None);

        let idle = machine.select_product(code);
        let rejected_while_idle = matches!(
            idle,
            Err(VendingError::InvalidStateTransition { state: MachineState::Idle, .. })
        );
        prop_assert!(rejected_while_idle);
    }
}
