use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Position of the machine in the customer interaction cycle.
///
/// Dispensing and error resolution are not states: they happen inside the
/// `HasFunds -> Idle` transition of `select_product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MachineState {
    /// Waiting for the first coin.
    #[default]
    Idle,
    /// At least one coin has been accepted for the current transaction.
    HasFunds,
}

impl MachineState {
    pub fn name(&self) -> &'static str {
        match self {
            MachineState::Idle => "IDLE",
            MachineState::HasFunds => "HAS_FUNDS",
        }
    }
}

impl Display for MachineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
