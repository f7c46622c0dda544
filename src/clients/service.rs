//! # Vending Service Trait
//!
//! Provides a common async interface over every way of reaching a machine,
//! adding default multi-step operations built on the required primitives.
use crate::actor::{ClientError, MachineClient};
use crate::machine::{Dispense, MachineSnapshot, MachineState, Refund, VendingError};
use crate::model::{Coin, Item, ShelfStatus};
use async_trait::async_trait;

/// Trait for anything that can serve vending requests.
///
/// Implemented by [`MachineClient`] (requests travel to an actor) and by
/// [`SharedMachine`](crate::clients::SharedMachine) (requests lock an
/// in-process machine).
///
/// # Example
///
/// ```rust
/// use vending_machine::clients::{SharedMachine, VendingService};
/// use vending_machine::machine::VendingMachine;
/// use vending_machine::model::{Coin, Inventory, Item, ItemType};
///
/// async fn buy_soda(service: &dyn VendingService) -> u32 {
///     service
///         .purchase(vec![Coin::Dime], 110)
///         .await
///         .map(|dispense| dispense.change)
///         .unwrap_or(0)
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let shared = SharedMachine::new(VendingMachine::new(Inventory::with_range(101, 10).unwrap()));
///     shared.load(110, Item::new(ItemType::Soda, 7).unwrap()).await.unwrap();
///     assert_eq!(buy_soda(&shared).await, 3);
/// }
/// ```
#[async_trait]
pub trait VendingService: Send + Sync {
    async fn insert_coin(&self, coin: Coin) -> Result<u32, ClientError>;

    async fn select_product(&self, code: u32) -> Result<Dispense, ClientError>;

    async fn cancel(&self) -> Result<Refund, ClientError>;

    async fn load(&self, code: u32, item: Item) -> Result<(), ClientError>;

    async fn snapshot(&self) -> Result<MachineSnapshot, ClientError>;

    /// Inserts each coin in order and returns the final running total.
    #[tracing::instrument(skip(self))]
    async fn insert_coins(&self, coins: &[Coin]) -> Result<u32, ClientError> {
        tracing::debug!("Sending request");
        let mut total = None;
        for &coin in coins {
            total = Some(self.insert_coin(coin).await?);
        }
        match total {
            Some(total) => Ok(total),
            None => Ok(self.snapshot().await?.inserted_total),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn display(&self) -> Result<Vec<ShelfStatus>, ClientError> {
        Ok(self.snapshot().await?.shelves)
    }

    /// Inserts `coins`, then selects `code`. Only starts from `Idle`.
    ///
    /// The default sends the steps one by one; implementations that can do
    /// better override it so no other caller's request lands in between.
    #[tracing::instrument(skip(self))]
    async fn purchase(&self, coins: Vec<Coin>, code: u32) -> Result<Dispense, ClientError> {
        tracing::debug!("Sending request");
        let state = self.snapshot().await?.state;
        if state != MachineState::Idle {
            return Err(VendingError::InvalidStateTransition {
                operation: "purchase",
                state,
            }
            .into());
        }
        self.insert_coins(&coins).await?;
        self.select_product(code).await
    }
}

#[async_trait]
impl VendingService for MachineClient {
    async fn insert_coin(&self, coin: Coin) -> Result<u32, ClientError> {
        MachineClient::insert_coin(self, coin).await
    }

    async fn select_product(&self, code: u32) -> Result<Dispense, ClientError> {
        MachineClient::select_product(self, code).await
    }

    async fn cancel(&self) -> Result<Refund, ClientError> {
        MachineClient::cancel(self).await
    }

    async fn load(&self, code: u32, item: Item) -> Result<(), ClientError> {
        MachineClient::load(self, code, item).await
    }

    async fn snapshot(&self) -> Result<MachineSnapshot, ClientError> {
        MachineClient::snapshot(self).await
    }

    #[tracing::instrument(skip(self))]
    async fn purchase(&self, coins: Vec<Coin>, code: u32) -> Result<Dispense, ClientError> {
        tracing::debug!("Sending request");
        MachineClient::purchase(self, coins, code).await
    }
}
