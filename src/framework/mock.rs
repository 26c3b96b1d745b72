//! # Mock Registry
//!
//! A scripted stand-in for a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Queue expectations in the order the code under test will send requests, hand the
//! [`MockClient::client`] to that code, then call [`MockClient::verify`].
//!
//! ```ignore
//! let mut mock = MockClient::<Order>::new();
//! mock.expect_action(OrderId(1)).return_ok(Status::Preparing);
//! mock.expect_action(OrderId(1)).return_err(FrameworkError::NotFound("order_1".into()));
//!
//! let orders = OrderClient::new(mock.client());
//! // drive the code under test...
//! mock.verify();
//! ```
//!
//! A request that does not match the next expectation panics the mock's background task,
//! which the caller then observes as [`FrameworkError::ActorDropped`].

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(expectation);
}

/// A mock client with expectation tracking.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "get sent for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: expected, response })) => {
                        assert_eq!(id, expected, "delete sent for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: expected, response })) => {
                        assert_eq!(id, expected, "action sent for an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        Expect::new(self.expectations.clone(), move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> Expect<T, T::Id> {
        Expect::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, ()> {
        Expect::new(self.expectations.clone(), move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        Expect::new(self.expectations.clone(), move |response| Expectation::Action { id, response })
    }

    /// Number of queued expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that finishes one queued expectation with its response.
pub struct Expect<T: ActorEntity, R> {
    queue: Queue<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
}

impl<T: ActorEntity, R> Expect<T, R> {
    fn new(
        queue: Queue<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'static,
    ) -> Self {
        Self {
            queue,
            build: Box::new(build),
        }
    }

    pub fn return_ok(self, value: R) {
        push(&self.queue, (self.build)(Ok(value)));
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.queue, (self.build)(Err(error)));
    }
}
