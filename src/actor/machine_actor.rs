//! # Machine Actor
//!
//! This module defines the [`MachineActor`], the task that owns one
//! [`VendingMachine`] and applies every request to it in arrival order.

use crate::actor::client::MachineClient;
use crate::actor::message::MachineRequest;
use crate::machine::{MachineState, VendingMachine};
use crate::model::MachineId;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// The actor that owns a single machine.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the machine and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in one loop, so coin insertion,
/// selection and restocking are atomic with respect to each other without a
/// `Mutex`. Two machines never share an actor, an inventory or a coin box.
///
/// # Transaction timeout
///
/// With a timeout configured, the actor arms a deadline after every customer
/// request that leaves the machine in `HasFunds`. `Load` and `Snapshot` leave
/// the deadline where it is. If it passes before the next customer request,
/// the transaction is expired and the inserted coins are kept.
pub struct MachineActor {
    id: MachineId,
    receiver: mpsc::Receiver<MachineRequest>,
    machine: VendingMachine,
    transaction_timeout: Option<Duration>,
}

impl MachineActor {
    /// Creates a new `MachineActor` and its associated `MachineClient`.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier used in log lines
    /// * `machine` - The machine the actor takes ownership of
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(id: MachineId, machine: VendingMachine, buffer_size: usize) -> (Self, MachineClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            id,
            receiver,
            machine,
            transaction_timeout: None,
        };
        let client = MachineClient::new(id, sender);
        (actor, client)
    }

    pub fn with_transaction_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.transaction_timeout = timeout;
        self
    }

    /// Runs the actor's event loop, processing requests until the channel closes.
    pub async fn run(mut self) {
        let machine_id = self.id;
        info!(%machine_id, shelves = self.machine.inventory().len(), "Actor started");

        let mut deadline: Option<Instant> = None;
        loop {
            let msg = match deadline {
                Some(at) => tokio::select! {
                    msg = self.receiver.recv() => msg,
                    _ = tokio::time::sleep_until(at) => {
                        deadline = None;
                        if let Some(forfeited) = self.machine.expire() {
                            warn!(%machine_id, forfeited, "Transaction expired");
                        }
                        continue;
                    }
                },
                None => self.receiver.recv().await,
            };
            let Some(msg) = msg else {
                break;
            };

            let customer = msg.is_customer();
            self.handle(msg);

            if customer {
                deadline = match (self.machine.state(), self.transaction_timeout) {
                    (MachineState::HasFunds, Some(timeout)) => Some(Instant::now() + timeout),
                    _ => None,
                };
            }
        }

        info!(
            %machine_id,
            state = %self.machine.state(),
            in_stock = self.machine.has_stock(),
            "Shutdown"
        );
    }

    fn handle(&mut self, msg: MachineRequest) {
        let machine_id = self.id;
        debug!(%machine_id, request = msg.name(), "Request");

        match msg {
            MachineRequest::InsertCoin { coin, respond_to } => {
                let result = self.machine.insert_coin(coin);
                let _ = respond_to.send(result);
            }
            MachineRequest::SelectProduct { code, respond_to } => {
                let result = self.machine.select_product(code);
                let _ = respond_to.send(result);
            }
            MachineRequest::Purchase {
                coins,
                code,
                respond_to,
            } => {
                let result = self.machine.purchase(&coins, code);
                match &result {
                    Ok(dispense) => info!(%machine_id, code, change = dispense.change, "Purchase ok"),
                    Err(e) => warn!(%machine_id, code, error = %e, "Purchase failed"),
                }
                let _ = respond_to.send(result);
            }
            MachineRequest::Cancel { respond_to } => {
                let result = self.machine.cancel();
                let _ = respond_to.send(result);
            }
            MachineRequest::Load {
                code,
                item,
                respond_to,
            } => {
                let result = self.machine.load(code, item);
                if let Err(e) = &result {
                    warn!(%machine_id, code, error = %e, "Load failed");
                }
                let _ = respond_to.send(result);
            }
            MachineRequest::Snapshot { respond_to } => {
                let _ = respond_to.send(self.machine.snapshot());
            }
        }
    }
}
