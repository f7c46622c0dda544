//! # Machine Client
//!
//! The cloneable handle callers use to talk to a [`MachineActor`](crate::actor::MachineActor).

use crate::actor::error::ClientError;
use crate::actor::message::MachineRequest;
use crate::machine::{Dispense, MachineSnapshot, Refund, VendingError};
use crate::model::{Coin, Item, MachineId, ShelfStatus};
use tokio::sync::{mpsc, oneshot};

/// ## MachineClient
///
/// Forwards machine operations over a Tokio mpsc channel and returns results
/// via oneshot channels. The client is cheap to clone and can be shared across
/// tasks; every clone talks to the same machine.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – all methods resolve to `Result<…, ClientError>`.
#[derive(Clone)]
pub struct MachineClient {
    id: MachineId,
    sender: mpsc::Sender<MachineRequest>,
}

impl MachineClient {
    pub fn new(id: MachineId, sender: mpsc::Sender<MachineRequest>) -> Self {
        Self { id, sender }
    }

    pub fn id(&self) -> MachineId {
        self.id
    }

    pub async fn insert_coin(&self, coin: Coin) -> Result<u32, ClientError> {
        self.request(|respond_to| MachineRequest::InsertCoin { coin, respond_to })
            .await
    }

    pub async fn select_product(&self, code: u32) -> Result<Dispense, ClientError> {
        self.request(|respond_to| MachineRequest::SelectProduct { code, respond_to })
            .await
    }

    /// Inserts `coins` and selects `code` without any other client's request
    /// landing in between. Fails with `InvalidStateTransition` if another
    /// customer's transaction is already open.
    pub async fn purchase(&self, coins: Vec<Coin>, code: u32) -> Result<Dispense, ClientError> {
        self.request(|respond_to| MachineRequest::Purchase {
            coins,
            code,
            respond_to,
        })
        .await
    }

    pub async fn cancel(&self) -> Result<Refund, ClientError> {
        self.request(|respond_to| MachineRequest::Cancel { respond_to })
            .await
    }

    pub async fn load(&self, code: u32, item: Item) -> Result<(), ClientError> {
        self.request(|respond_to| MachineRequest::Load {
            code,
            item,
            respond_to,
        })
        .await
    }

    pub async fn snapshot(&self) -> Result<MachineSnapshot, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(MachineRequest::Snapshot { respond_to })
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        response.await.map_err(|_| ClientError::ActorDropped)
    }

    pub async fn display(&self) -> Result<Vec<ShelfStatus>, ClientError> {
        Ok(self.snapshot().await?.shelves)
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, VendingError>>) -> MachineRequest,
    ) -> Result<T, ClientError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| ClientError::ActorClosed)?;
        let result = response.await.map_err(|_| ClientError::ActorDropped)?;
        Ok(result?)
    }
}
