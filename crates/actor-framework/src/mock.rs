//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of an actor. Use it to test code that sits *around* a
//! client (services, entities whose context holds other clients) without spawning the
//! actors behind it.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real store, real hooks |
//! | **Error Injection** | `return_err` | Needs a failing repository or bad input |
//! | **Use Case** | Logic around the client | The actor itself, or the full system |
//!
//! Expectations are consumed in order. A request that does not match the next expectation
//! panics the mock task, which surfaces to the caller as [`FrameworkError::ActorDropped`].
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! #[derive(Clone, Debug)] struct Press { id: u32 }
//! #[derive(Debug)] struct PressCreate;
//! #[derive(Debug, thiserror::Error)] #[error("press error")] struct PressError;
//!
//! #[async_trait]
//! impl ActorEntity for Press {
//!     type Id = u32; type Create = PressCreate; type Update = Infallible;
//!     type Action = Infallible; type ActionResult = (); type Context = (); type Error = PressError;
//!     fn id(&self) -> u32 { self.id }
//!     fn from_create_params(id: u32, _: PressCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, u: Infallible, _: &()) -> Result<(), Self::Error> { match u {} }
//!     async fn handle_action(&mut self, a: Infallible, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Press>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the exact payload a client sends, use [`create_mock_client`] and
//! the `expect_*` receiver helpers, which hand back the request and its responder.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Ensured, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted answer to one request.
enum Expectation<T: ActorEntity> {
    Get(T::Id, Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Create(Result<T::Id, FrameworkError>),
    CreateUnless(Result<Ensured<T::Id>, FrameworkError>),
    Update(T::Id, Result<T, FrameworkError>),
    Upsert(T::Id, Result<T, FrameworkError>),
    Replace(Result<Vec<T::Id>, FrameworkError>),
    Delete(T::Id, Result<(), FrameworkError>),
    DeleteWhere(Result<usize, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Get(..) => "Get",
            Expectation::List(..) => "List",
            Expectation::Create(..) => "Create",
            Expectation::CreateUnless(..) => "CreateUnless",
            Expectation::Update(..) => "Update",
            Expectation::Upsert(..) => "Upsert",
            Expectation::Replace(..) => "Replace",
            Expectation::Delete(..) => "Delete",
            Expectation::DeleteWhere(..) => "DeleteWhere",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn reply<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

fn check_id<Id: PartialEq + std::fmt::Debug>(requested: Id, expected: Id) {
    assert_eq!(requested, expected, "request targeted an unexpected id");
}

/// A mock client with expectation tracking for fluent testing.
///
/// ```ignore
/// let mut mock = MockClient::<ProcessTracking>::new();
/// mock.expect_create_unless().return_ok(Ensured::Created(TrackingId(1)));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner)
                    .pop_front();
                Self::answer(request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    fn answer(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
        match (request, expectation) {
            (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
                check_id(id, expected);
                reply(respond_to, response);
            }
            (ResourceRequest::List { filter, respond_to }, Some(Expectation::List(response))) => {
                // Scripted rows still go through the caller's filter.
                let response = response.map(|rows| match filter {
                    Some(filter) => rows.into_iter().filter(|row| filter(row)).collect(),
                    None => rows,
                });
                reply(respond_to, response);
            }
            (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                reply(respond_to, response);
            }
            (
                ResourceRequest::CreateUnless { respond_to, .. },
                Some(Expectation::CreateUnless(response)),
            ) => {
                reply(respond_to, response);
            }
            (
                ResourceRequest::Update { id, respond_to, .. },
                Some(Expectation::Update(expected, response)),
            ) => {
                check_id(id, expected);
                reply(respond_to, response);
            }
            (
                ResourceRequest::Upsert { id, respond_to, .. },
                Some(Expectation::Upsert(expected, response)),
            ) => {
                check_id(id, expected);
                reply(respond_to, response);
            }
            (ResourceRequest::Replace { respond_to, .. }, Some(Expectation::Replace(response))) => {
                reply(respond_to, response);
            }
            (
                ResourceRequest::Delete { id, respond_to },
                Some(Expectation::Delete(expected, response)),
            ) => {
                check_id(id, expected);
                reply(respond_to, response);
            }
            (
                ResourceRequest::DeleteWhere { respond_to, .. },
                Some(Expectation::DeleteWhere(response)),
            ) => {
                reply(respond_to, response);
            }
            (request, expectation) => {
                panic!(
                    "Unexpected request {:?}, next expectation was {}",
                    request,
                    expectation.as_ref().map_or("none", Expectation::name)
                );
            }
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R: 'static>(
        &self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `get` of `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get(id, response))
    }

    /// Expects a `list` or `list_where`. Returned rows are filtered by the request's filter.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(Expectation::Create)
    }

    /// Expects a `create_unless` operation.
    pub fn expect_create_unless(&mut self) -> ExpectationBuilder<T, Ensured<T::Id>> {
        self.builder(Expectation::CreateUnless)
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update(id, response))
    }

    /// Expects an `upsert` of `id`.
    pub fn expect_upsert(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Upsert(id, response))
    }

    /// Expects a `replace` operation.
    pub fn expect_replace(&mut self) -> ExpectationBuilder<T, Vec<T::Id>> {
        self.builder(Expectation::Replace)
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete(id, response))
    }

    /// Expects a `delete_where` operation.
    pub fn expect_delete_where(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(Expectation::DeleteWhere)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Finishes an expectation with the answer the mock should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.expectations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(expectation);
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Tests drive the receiver themselves with the `expect_*` helpers below, which lets
/// them inspect payloads and filters before answering.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a CreateUnless request
#[allow(clippy::type_complexity)]
pub async fn expect_create_unless<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(crate::message::Filter<T>, T::Create, Response<Ensured<T::Id>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::CreateUnless {
            exists,
            params,
            respond_to,
        }) => Some((exists, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
#[allow(clippy::type_complexity)]
pub async fn expect_replace<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(crate::message::Filter<T>, Vec<T::Create>, Response<Vec<T::Id>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Replace {
            scope,
            params,
            respond_to,
        }) => Some((scope, params, respond_to)),
        _ => None,
    }
}
