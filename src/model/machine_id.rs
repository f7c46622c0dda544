use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Type-safe identifier for a machine in a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineId(pub u32);

impl From<u32> for MachineId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MachineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "machine_{}", self.0)
    }
}
