//! # Mock Framework
//!
//! Utilities for testing clients and observers without spawning real actors.
//!
//! ## Patterns
//!
//! 1. **Fluent mock** ([`MockClient`]): queue expected requests with canned responses,
//!    hand `mock.client()` to the code under test, then call `mock.verify()`.
//! 2. **Raw channel** ([`create_mock_client`] + `expect_*` helpers): receive the request
//!    yourself, assert on its payload, answer through the responder.
//! 3. **Recording observer** ([`RecordingObserver`]): run a real actor and inspect every
//!    snapshot it published.
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use record_framework::mock::MockClient;
//! use record_framework::{FrameworkError, RecordEntity};
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//! #[derive(Debug)] struct TagCreate;
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct TagError;
//!
//! impl RecordEntity for Tag {
//!     type Id = u32; type Create = TagCreate; type Error = TagError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: TagCreate, _: &[Self]) -> Result<Self, TagError> { Ok(Self { id }) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::RecordEntity;
use crate::error::{FrameworkError, ObserverError};
use crate::message::ResourceRequest;
use crate::observer::CollectionObserver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request with the response the mock should send back.
enum Expectation<T: RecordEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        response: Result<bool, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order; a request that does not match the next
/// expectation panics the background task, which surfaces as `ActorDropped` on the
/// client side.
pub struct MockClient<T: RecordEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RecordEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RecordEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Get {
            response,
        })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, bool> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Delete {
            response,
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues one expectation once a response is chosen.
pub struct ExpectationBuilder<T: RecordEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: RecordEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when the test needs to look at the request payload itself (e.g. to check
/// what an `OrderClient` put in a draft) before answering.
pub fn create_mock_client<T: RecordEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: RecordEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<bool, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

// =============================================================================
// RECORDING OBSERVER
// =============================================================================

/// Observer that keeps every published snapshot. Clones share the same log.
#[derive(Clone)]
pub struct RecordingObserver<T> {
    snapshots: Arc<Mutex<Vec<Vec<T>>>>,
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self {
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> RecordingObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// All snapshots seen so far, oldest first.
    pub fn snapshots(&self) -> Vec<Vec<T>> {
        self.snapshots.lock().unwrap().clone()
    }

    /// The most recent snapshot, if any mutation happened.
    pub fn last(&self) -> Option<Vec<T>> {
        self.snapshots.lock().unwrap().last().cloned()
    }
}

impl<T: RecordEntity> CollectionObserver<T> for RecordingObserver<T> {
    fn on_change(&mut self, records: &[T]) -> Result<(), ObserverError> {
        self.snapshots.lock().unwrap().push(records.to_vec());
        Ok(())
    }
}
