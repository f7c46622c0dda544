//! # Mock Machine & Testing Guide
//!
//! [`MockMachine`] hands out a real [`MachineClient`] whose requests are
//! answered from an in-memory expectation queue instead of a running
//! [`VendingMachine`](crate::machine::VendingMachine). Use it to test code that
//! drives a machine (a kiosk UI, a purchase workflow) without spawning actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockMachine | Real Actor |
//! |---------|-------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (expectations) | Real inventory and funds |
//! | **Use Case** | Logic *around* the client | The machine itself or the fleet |
//! | **Error Injection** | Easy (`return_err`) | Requires setting up stock and coins |
//!
//! ## Example
//!
//! ```rust
//! use vending_machine::actor::mock::MockMachine;
//! use vending_machine::machine::VendingError;
//! use vending_machine::model::Coin;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockMachine::new();
//!     mock.expect_insert_coin().return_ok(25);
//!     mock.expect_select(101).return_err(VendingError::OutOfStock { code: 101 });
//!
//!     let client = mock.client();
//!     assert_eq!(client.insert_coin(Coin::Quarter).await.unwrap(), 25);
//!     assert!(client.select_product(101).await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! For lower-level control, [`create_mock_client`] returns the receiving end of
//! the channel so a test can answer each request by hand.

use crate::actor::client::MachineClient;
use crate::actor::message::{MachineRequest, Response};
use crate::machine::{Dispense, MachineSnapshot, Refund, VendingError};
use crate::model::{Coin, Item, MachineId};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation {
    InsertCoin {
        response: Result<u32, VendingError>,
    },
    Select {
        code: u32,
        response: Result<Dispense, VendingError>,
    },
    Purchase {
        code: u32,
        response: Result<Dispense, VendingError>,
    },
    Cancel {
        response: Result<Refund, VendingError>,
    },
    Load {
        code: u32,
        response: Result<(), VendingError>,
    },
    Snapshot {
        response: MachineSnapshot,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

fn lock(expectations: &Expectations) -> MutexGuard<'_, VecDeque<Expectation>> {
    expectations.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock machine with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued; a request
/// that does not match the next expectation panics the responder task, which
/// the caller observes as [`ClientError::ActorDropped`](crate::actor::ClientError::ActorDropped).
pub struct MockMachine {
    client: MachineClient,
    expectations: Expectations,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMachine {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<MachineRequest>(100);
        let expectations: Expectations = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: MachineClient::new(MachineId(0), sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> MachineClient {
        self.client.clone()
    }

    pub fn expect_insert_coin(&mut self) -> ExpectationBuilder<u32> {
        self.builder(|response| Expectation::InsertCoin { response })
    }

    pub fn expect_select(&mut self, code: u32) -> ExpectationBuilder<Dispense> {
        self.builder(move |response| Expectation::Select { code, response })
    }

    pub fn expect_purchase(&mut self, code: u32) -> ExpectationBuilder<Dispense> {
        self.builder(move |response| Expectation::Purchase { code, response })
    }

    pub fn expect_cancel(&mut self) -> ExpectationBuilder<Refund> {
        self.builder(|response| Expectation::Cancel { response })
    }

    pub fn expect_load(&mut self, code: u32) -> ExpectationBuilder<()> {
        self.builder(move |response| Expectation::Load { code, response })
    }

    pub fn expect_snapshot(&mut self, snapshot: MachineSnapshot) {
        lock(&self.expectations).push_back(Expectation::Snapshot { response: snapshot });
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<T>(
        &self,
        make: impl FnOnce(Result<T, VendingError>) -> Expectation + Send + 'static,
    ) -> ExpectationBuilder<T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            make: Box::new(make),
        }
    }
}

fn answer(request: MachineRequest, expectation: Option<Expectation>) {
    match (request, expectation) {
        (MachineRequest::InsertCoin { respond_to, .. }, Some(Expectation::InsertCoin { response })) => {
            let _ = respond_to.send(response);
        }
        (
            MachineRequest::SelectProduct { code, respond_to },
            Some(Expectation::Select {
                code: expected,
                response,
            }),
        ) if code == expected => {
            let _ = respond_to.send(response);
        }
        (
            MachineRequest::Purchase {
                code, respond_to, ..
            },
            Some(Expectation::Purchase {
                code: expected,
                response,
            }),
        ) if code == expected => {
            let _ = respond_to.send(response);
        }
        (MachineRequest::Cancel { respond_to }, Some(Expectation::Cancel { response })) => {
            let _ = respond_to.send(response);
        }
        (
            MachineRequest::Load {
                code, respond_to, ..
            },
            Some(Expectation::Load {
                code: expected,
                response,
            }),
        ) if code == expected => {
            let _ = respond_to.send(response);
        }
        (MachineRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
            let _ = respond_to.send(response);
        }
        (request, _) => {
            panic!("Unexpected {} request or expectation mismatch", request.name());
        }
    }
}

/// Builder returned by the `expect_*` methods of [`MockMachine`].
pub struct ExpectationBuilder<T> {
    expectations: Expectations,
    make: Box<dyn FnOnce(Result<T, VendingError>) -> Expectation + Send>,
}

impl<T> ExpectationBuilder<T> {
    pub fn return_ok(self, value: T) {
        let expectation = (self.make)(Ok(value));
        lock(&self.expectations).push_back(expectation);
    }

    pub fn return_err(self, error: VendingError) {
        let expectation = (self.make)(Err(error));
        lock(&self.expectations).push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off the receiver with one of
/// the `expect_*_request` helpers, asserts on it and answers through the
/// enclosed sender.
pub fn create_mock_client(
    buffer_size: usize,
) -> (MachineClient, mpsc::Receiver<MachineRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MachineClient::new(MachineId(0), sender), receiver)
}

/// Helper to verify that the next message is an InsertCoin request
pub async fn expect_insert_coin_request(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(Coin, Response<u32>)> {
    match receiver.recv().await {
        Some(MachineRequest::InsertCoin { coin, respond_to }) => Some((coin, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SelectProduct request
pub async fn expect_select_request(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(u32, Response<Dispense>)> {
    match receiver.recv().await {
        Some(MachineRequest::SelectProduct { code, respond_to }) => Some((code, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Purchase request
pub async fn expect_purchase_request(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(Vec<Coin>, u32, Response<Dispense>)> {
    match receiver.recv().await {
        Some(MachineRequest::Purchase {
            coins,
            code,
            respond_to,
        }) => Some((coins, code, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Load request
pub async fn expect_load_request(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(u32, Item, Response<()>)> {
    match receiver.recv().await {
        Some(MachineRequest::Load {
            code,
            item,
            respond_to,
        }) => Some((code, item, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ClientError;
    use crate::model::ItemType;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let select_task = tokio::spawn(async move { client.select_product(104).await });

        let (code, responder) = expect_select_request(&mut receiver)
            .await
            .expect("Expected SelectProduct request");
        assert_eq!(code, 104);
        responder
            .send(Err(VendingError::InsufficientFunds { price: 9, paid: 5 }))
            .unwrap();

        let result = select_task.await.unwrap();
        assert_eq!(
            result,
            Err(ClientError::Vending(VendingError::InsufficientFunds {
                price: 9,
                paid: 5
            }))
        );
    }

    #[tokio::test]
    async fn test_mock_load_request() {
        let (client, mut receiver) = create_mock_client(10);
        let item = Item::new(ItemType::Juice, 13).unwrap();

        let load_task = tokio::spawn(async move { client.load(106, item).await });

        let (code, loaded, responder) = expect_load_request(&mut receiver).await.unwrap();
        assert_eq!(code, 106);
        assert_eq!(loaded.kind(), ItemType::Juice);
        responder.send(Ok(())).unwrap();

        assert!(load_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_mock_machine_with_expectations() {
        let mut mock = MockMachine::new();
        let coke = Item::new(ItemType::Coke, 12).unwrap();

        mock.expect_insert_coin().return_ok(5);
        mock.expect_insert_coin().return_ok(30);
        mock.expect_select(102).return_ok(Dispense {
            code: 102,
            item: coke,
            paid: 30,
            change: 18,
        });

        let client = mock.client();
        assert_eq!(client.insert_coin(Coin::Nickel).await.unwrap(), 5);
        assert_eq!(client.insert_coin(Coin::Quarter).await.unwrap(), 30);
        let dispense = client.select_product(102).await.unwrap();
        assert_eq!(dispense.change, 18);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_mismatch_drops_response() {
        let mut mock = MockMachine::new();
        mock.expect_cancel().return_ok(Refund {
            coins: vec![],
            amount: 0,
        });

        let client = mock.client();
        let result = client.select_product(101).await;
        assert_eq!(result, Err(ClientError::ActorDropped));
    }
}
