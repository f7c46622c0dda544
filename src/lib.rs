#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Vending Machine
//!
//! > **The control core of a coin-operated vending machine.**
//!
//! A synchronous transaction controller with shelf-based FIFO inventory, plus
//! the async plumbing needed to share one machine between many callers.
//!
//! ## 🚀 Core Concepts
//!
//! ### A closed state machine
//! [`VendingMachine`](machine::VendingMachine) is either `Idle` or `HasFunds`.
//! Coins move it to `HasFunds`; selecting a product, cancelling or a
//! transaction timeout moves it back. Every selection ends in `Idle`, whether
//! it dispensed an item or failed.
//!
//! ### Explicit outcomes
//! Operations return `Result`s: a [`Dispense`](machine::Dispense) with the
//! computed change, a [`Refund`](machine::Refund), or a
//! [`VendingError`](machine::VendingError) carrying the shelf code or the
//! price and paid amount.
//!
//! ### One owner per machine
//! There is no global machine. Each instance is built explicitly and, for
//! concurrent use, owned by a single actor task (or guarded by a single mutex).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! Coins, items, shelves and the inventory. No transaction logic.
//!
//! ### 2. The Controller ([`machine`])
//! The state machine itself and its error type.
//!
//! ### 3. The Actor ([`actor`])
//! - **Role**: Serializes every request to one machine through an mpsc queue.
//! - **Key items**: [`MachineActor`](actor::MachineActor), [`MachineClient`](actor::MachineClient), [`mock`](actor::mock).
//!
//! ### 4. The Interface ([`clients`])
//! - **Role**: The [`VendingService`](clients::VendingService) trait, implemented by the
//!   actor client and by [`SharedMachine`](clients::SharedMachine).
//!
//! ### 5. The Orchestrator ([`lifecycle`]) and [`config`]
//! - **Role**: Spins up a fleet from a [`MachineConfig`](config::MachineConfig) and shuts it down.
//! - **Key items**: [`VendingSystem`](lifecycle::VendingSystem), [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Use a custom shelf layout
//! VENDING_CONFIG=machine.json cargo run
//! ```

pub mod actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod machine;
pub mod model;
