use crate::actor::{MachineActor, MachineClient};
use crate::config::{ConfigError, MachineConfig};
use crate::machine::VendingMachine;
use crate::model::MachineId;
use tracing::{error, info};

/// Runtime orchestrator for a fleet of independent machines.
///
/// `VendingSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping one actor per machine
/// - **Isolation**: Every machine gets its own inventory, funds and queue
///
/// # Example
///
/// ```rust
/// use vending_machine::config::MachineConfig;
/// use vending_machine::lifecycle::VendingSystem;
/// use vending_machine::model::MachineId;
///
/// #[tokio::main]
/// async fn main() {
///     let system = VendingSystem::new(&MachineConfig::default(), 2).unwrap();
///     let lobby = system.machine(MachineId(1)).unwrap().clone();
///     assert!(!lobby.snapshot().await.unwrap().shelves.is_empty());
///
///     drop(lobby);
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct VendingSystem {
    machines: Vec<MachineClient>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl VendingSystem {
    /// Spawns `machine_count` machines built from `config`, numbered from 1.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &MachineConfig, machine_count: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let inventory = config.inventory()?;

        let mut machines = Vec::new();
        let mut handles = Vec::new();
        for id in 1..=machine_count {
            let machine = VendingMachine::new(inventory.clone());
            let (actor, client) =
                MachineActor::new(MachineId::from(id), machine, config.request_buffer);
            let actor = actor.with_transaction_timeout(config.transaction_timeout());

            handles.push(tokio::spawn(actor.run()));
            machines.push(client);
        }

        info!(machines = machine_count, "Vending system started");
        Ok(Self { machines, handles })
    }

    pub fn machine(&self, id: MachineId) -> Option<&MachineClient> {
        self.machines.iter().find(|client| client.id() == id)
    }

    pub fn machines(&self) -> &[MachineClient] {
        &self.machines
    }

    /// Gracefully shuts down every machine.
    ///
    /// Drops the system's clients, which closes each actor's channel once no
    /// other clone is alive, then waits for every actor task to finish.
    /// Callers must drop their own clones first or this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down vending system...");
        drop(self.machines);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Vending system shutdown complete.");
        Ok(())
    }
}
