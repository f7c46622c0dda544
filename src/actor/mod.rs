//! # Machine Actor Layer
//!
//! Wraps one [`VendingMachine`](crate::machine::VendingMachine) in a Tokio task
//! so that any number of async callers can share it safely.
//!
//! ## Key Components
//!
//! - **[`MachineActor`]**: the "server" task. Owns the machine and processes
//!   [`MachineRequest`]s one at a time.
//! - **[`MachineClient`]**: the "client" handle. Cloneable; sends requests and
//!   awaits the reply on a oneshot channel.
//! - **[`mock`]**: an in-memory stand-in for testing callers.
//!
//! ## Usage
//!
//! ```rust
//! use vending_machine::actor::MachineActor;
//! use vending_machine::machine::VendingMachine;
//! use vending_machine::model::{Coin, Inventory, Item, ItemType, MachineId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let machine = VendingMachine::new(Inventory::with_range(101, 10).unwrap());
//!     let (actor, client) = MachineActor::new(MachineId(1), machine, 32);
//!     let handle = tokio::spawn(actor.run());
//!
//!     client.load(101, Item::new(ItemType::Soda, 7).unwrap()).await.unwrap();
//!     client.insert_coin(Coin::Dime).await.unwrap();
//!     let dispense = client.select_product(101).await.unwrap();
//!     assert_eq!(dispense.change, 3);
//!
//!     drop(client);
//!     handle.await.unwrap();
//! }
//! ```

pub mod client;
pub mod error;
pub mod machine_actor;
pub mod message;
pub mod mock;

pub use client::MachineClient;
pub use error::ClientError;
pub use machine_actor::MachineActor;
pub use message::{MachineRequest, Response};
