//! # Machine Messages
//!
//! The requests a [`MachineClient`](crate::actor::MachineClient) sends to a
//! [`MachineActor`](crate::actor::MachineActor). Each variant mirrors one
//! operation of [`VendingMachine`](crate::machine::VendingMachine) and carries a
//! oneshot sender for the reply.

use crate::machine::{Dispense, MachineSnapshot, Refund, VendingError};
use crate::model::{Coin, Item};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the machine actor.
pub type Response<T> = oneshot::Sender<Result<T, VendingError>>;

#[derive(Debug)]
pub enum MachineRequest {
    InsertCoin {
        coin: Coin,
        respond_to: Response<u32>,
    },
    SelectProduct {
        code: u32,
        respond_to: Response<Dispense>,
    },
    /// Inserts every coin and selects `code` as one uninterrupted transaction.
    /// Rejected unless the machine is `Idle`.
    Purchase {
        coins: Vec<Coin>,
        code: u32,
        respond_to: Response<Dispense>,
    },
    Cancel {
        respond_to: Response<Refund>,
    },
    Load {
        code: u32,
        item: Item,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: oneshot::Sender<MachineSnapshot>,
    },
}

impl MachineRequest {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            MachineRequest::InsertCoin { .. } => "InsertCoin",
            MachineRequest::SelectProduct { .. } => "SelectProduct",
            MachineRequest::Purchase { .. } => "Purchase",
            MachineRequest::Cancel { .. } => "Cancel",
            MachineRequest::Load { .. } => "Load",
            MachineRequest::Snapshot { .. } => "Snapshot",
        }
    }

    /// Whether the request comes from a customer at the machine.
    ///
    /// Only customer requests count as activity for the transaction timeout;
    /// restocking and display polling do not.
    pub fn is_customer(&self) -> bool {
        match self {
            MachineRequest::InsertCoin { .. }
            | MachineRequest::SelectProduct { .. }
            | MachineRequest::Purchase { .. }
            | MachineRequest::Cancel { .. } => true,
            MachineRequest::Load { .. } | MachineRequest::Snapshot { .. } => false,
        }
    }
}
