//! # Shared Machine
//!
//! The lock-based alternative to the actor: a machine behind one
//! `tokio::sync::Mutex`, shared by cloning the handle.

use crate::actor::ClientError;
use crate::clients::VendingService;
use crate::machine::{Dispense, MachineSnapshot, Refund, VendingMachine};
use crate::model::{Coin, Item};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A machine guarded by a single mutex.
///
/// Every operation holds the lock for its whole duration, so the machine
/// sees one request at a time exactly as it would behind an actor. No
/// channel sits in between, so the only `ClientError` variant produced is
/// `ClientError::Vending`.
#[derive(Clone)]
pub struct SharedMachine {
    inner: Arc<Mutex<VendingMachine>>,
}

impl SharedMachine {
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Runs `f` with exclusive access to the machine.
    pub async fn with_machine<R>(&self, f: impl FnOnce(&mut VendingMachine) -> R) -> R {
        let mut machine = self.inner.lock().await;
        f(&mut machine)
    }
}

impl From<VendingMachine> for SharedMachine {
    fn from(machine: VendingMachine) -> Self {
        Self::new(machine)
    }
}

#[async_trait]
impl VendingService for SharedMachine {
    async fn insert_coin(&self, coin: Coin) -> Result<u32, ClientError> {
        Ok(self.inner.lock().await.insert_coin(coin)?)
    }

    async fn select_product(&self, code: u32) -> Result<Dispense, ClientError> {
        Ok(self.inner.lock().await.select_product(code)?)
    }

    async fn cancel(&self) -> Result<Refund, ClientError> {
        Ok(self.inner.lock().await.cancel()?)
    }

    async fn load(&self, code: u32, item: Item) -> Result<(), ClientError> {
        Ok(self.inner.lock().await.load(code, item)?)
    }

    async fn snapshot(&self) -> Result<MachineSnapshot, ClientError> {
        Ok(self.inner.lock().await.snapshot())
    }

    #[tracing::instrument(skip(self))]
    async fn purchase(&self, coins: Vec<Coin>, code: u32) -> Result<Dispense, ClientError> {
        Ok(self.inner.lock().await.purchase(&coins, code)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{MachineState, VendingError};
    use crate::model::{Inventory, ItemType};

    fn shared() -> SharedMachine {
        SharedMachine::new(VendingMachine::new(Inventory::with_range(101, 10).unwrap()))
    }

    #[tokio::test]
    async fn test_purchase_through_lock() {
        let machine = shared();
        machine
            .load(104, Item::new(ItemType::Pepsi, 9).unwrap())
            .await
            .unwrap();

        let dispense = machine
            .purchase(vec![Coin::Dime, Coin::Penny], 104)
            .await
            .unwrap();
        assert_eq!(dispense.change, 2);
        assert_eq!(dispense.item.kind(), ItemType::Pepsi);

        let state = machine.with_machine(|m| m.state()).await;
        assert_eq!(state, MachineState::Idle);
    }

    #[tokio::test]
    async fn test_clones_share_one_machine() {
        let machine = shared();
        let other = machine.clone();

        machine.insert_coin(Coin::Quarter).await.unwrap();
        assert_eq!(other.insert_coin(Coin::Nickel).await.unwrap(), 30);

        let refund = other.cancel().await.unwrap();
        assert_eq!(refund.amount, 30);
        assert_eq!(
            machine.cancel().await.unwrap_err(),
            ClientError::Vending(VendingError::InvalidStateTransition {
                operation: "cancel",
                state: MachineState::Idle,
            })
        );
    }

    #[tokio::test]
    async fn test_purchase_cannot_spend_open_transaction() {
        let machine = shared();
        machine
            .load(101, Item::new(ItemType::Coke, 12).unwrap())
            .await
            .unwrap();
        let other = machine.clone();

        machine.insert_coin(Coin::Quarter).await.unwrap();
        assert_eq!(
            other.purchase(vec![Coin::Penny], 101).await,
            Err(ClientError::Vending(VendingError::InvalidStateTransition {
                operation: "purchase",
                state: MachineState::HasFunds,
            }))
        );

        let dispense = machine.select_product(101).await.unwrap();
        assert_eq!(dispense.paid, 25);
        assert_eq!(dispense.change, 13);
    }

    #[tokio::test]
    async fn test_concurrent_purchases_never_oversell() {
        let machine = shared();
        for _ in 0..3 {
            machine
                .load(108, Item::new(ItemType::Soda, 7).unwrap())
                .await
                .unwrap();
        }

        let mut tasks = Vec::new();
        for _ in 0..8 {
            let machine = machine.clone();
            tasks.push(tokio::spawn(async move {
                machine.purchase(vec![Coin::Dime], 108).await
            }));
        }

        let mut sold = 0;
        for task in tasks {
            match task.await.unwrap() {
                Ok(dispense) => {
                    assert_eq!(dispense.change, 3);
                    sold += 1;
                }
                Err(e) => assert_eq!(e.vending(), Some(&VendingError::OutOfStock { code: 108 })),
            }
        }
        assert_eq!(sold, 3);
        assert!(machine.snapshot().await.unwrap().shelves[7].next_item.is_none());
    }
}
