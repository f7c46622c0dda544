//! # Machine Configuration
//!
//! [`MachineConfig`] describes how a machine is laid out and how its actor
//! behaves. Every field has a default, so an empty JSON object is a valid
//! configuration:
//!
//! ```json
//! {
//!   "first_shelf_code": 101,
//!   "shelf_count": 10,
//!   "request_buffer": 32,
//!   "transaction_timeout_ms": 30000
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::machine::VendingError;
use crate::model::Inventory;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid shelf layout: {0}")]
    Layout(#[from] VendingError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Code of the first shelf; the rest follow densely.
    pub first_shelf_code: u32,
    pub shelf_count: u32,
    /// Capacity of the actor's request queue.
    pub request_buffer: usize,
    /// Time after the last customer request before a transaction is abandoned.
    /// `None` keeps transactions open indefinitely.
    pub transaction_timeout_ms: Option<u64>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            first_shelf_code: 101,
            shelf_count: 10,
            request_buffer: 32,
            transaction_timeout_ms: None,
        }
    }
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shelf_count == 0 {
            return Err(ConfigError::Invalid("shelf_count must be positive".into()));
        }
        if self.request_buffer == 0 {
            return Err(ConfigError::Invalid("request_buffer must be positive".into()));
        }
        if self.first_shelf_code.checked_add(self.shelf_count).is_none() {
            return Err(ConfigError::Invalid(format!(
                "{} shelves starting at {} overflow the code range",
                self.shelf_count, self.first_shelf_code
            )));
        }
        if self.transaction_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "transaction_timeout_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn transaction_timeout(&self) -> Option<Duration> {
        self.transaction_timeout_ms.map(Duration::from_millis)
    }

    pub fn inventory(&self) -> Result<Inventory, ConfigError> {
        Ok(Inventory::with_range(
            self.first_shelf_code,
            self.shelf_count,
        )?)
    }
}
