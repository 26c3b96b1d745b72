//! # Core Registry Actor
//!
//! This module defines the building blocks of the order registry.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait a record type implements to live inside a registry.
//! - [`ResourceActor`]: The actor that owns the records and assigns identifiers.
//! - [`ResourceClient`]: The cloneable handle used to talk to the actor.
//! - [`FrameworkError`]: Plumbing errors (ActorClosed, NotFound, ...).
//!
//! ## Mutual Exclusion
//!
//! The actor owns its `HashMap` outright and handles one request at a time, so every
//! insert, read, status change and delete is linearizable with respect to the others.
//! No request is ever held across a suspension point of the caller: a caller that
//! sleeps between two requests simply sends two messages.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that a record type must implement to be managed by [`ResourceActor`].
///
/// # Architecture Note
/// The actor loop is written once against this contract. The associated types keep each
/// registry honest: an `Order` registry only accepts an `OrderCreate` payload and only
/// understands `OrderAction`s.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier handed out by the registry. Built from the internal `u64` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The validated data required to create a new record.
    type Create: Send + Sync + Debug;

    /// Record-specific mutations (e.g. `AdvanceStatus`).
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the record from its freshly assigned id and the payload.
    ///
    /// If this fails the id is **not** consumed; the next successful insert receives it.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply a record-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the registry plumbing itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Requests understood by a [`ResourceActor`].
///
/// There is no generic `Update`: records change only through their own `Action`s.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE ACTOR
// =============================================================================

/// The actor that owns a collection of records.
///
/// Identifiers come from a `u64` counter that starts at 1 and only moves forward when a
/// record is actually stored, so ids are strictly increasing and never reused, even
/// after a delete.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // "Order" instead of "pizza_intake::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        debug!(entity_type, %id, "Action on missing item");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action)
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE CLIENT
// =============================================================================

/// A type-safe, cheaply cloneable handle to a [`ResourceActor`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Test record: a ticket that can only be bumped upwards ---

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u64,
        label: String,
        level: u8,
    }

    #[derive(Debug)]
    struct TicketCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TicketAction {
        Raise(u8),
    }

    #[derive(Debug, thiserror::Error)]
    enum TicketError {
        #[error("empty label")]
        EmptyLabel,
        #[error("cannot lower level {from} to {to}")]
        Lowered { from: u8, to: u8 },
    }

    impl ActorEntity for Ticket {
        type Id = u64;
        type Create = TicketCreate;
        type Action = TicketAction;
        type ActionResult = u8;
        type Error = TicketError;

        fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, TicketError> {
            if params.label.is_empty() {
                return Err(TicketError::EmptyLabel);
            }
            Ok(Self {
                id,
                label: params.label,
                level: 0,
            })
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<u8, TicketError> {
            match action {
                TicketAction::Raise(level) if level < self.level => Err(TicketError::Lowered {
                    from: self.level,
                    to: level,
                }),
                TicketAction::Raise(level) => {
                    self.level = level;
                    Ok(level)
                }
            }
        }
    }

    fn start() -> ResourceClient<Ticket> {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());
        client
    }

    fn ticket(label: &str) -> TicketCreate {
        TicketCreate {
            label: label.into(),
        }
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let client = start();

        assert_eq!(client.create(ticket("a")).await.unwrap(), 1);
        assert_eq!(client.create(ticket("b")).await.unwrap(), 2);
        assert_eq!(client.create(ticket("c")).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn rejected_create_does_not_consume_an_id() {
        let client = start();

        assert_eq!(client.create(ticket("a")).await.unwrap(), 1);
        let err = client.create(ticket("")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert_eq!(client.create(ticket("b")).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let client = start();

        let first = client.create(ticket("a")).await.unwrap();
        client.delete(first).await.unwrap();
        assert!(client.get(first).await.unwrap().is_none());

        let second = client.create(ticket("b")).await.unwrap();
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn action_mutates_the_stored_record() {
        let client = start();
        let id = client.create(ticket("a")).await.unwrap();

        assert_eq!(client.perform_action(id, TicketAction::Raise(3)).await.unwrap(), 3);
        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored.level, 3);
        assert_eq!(stored.label, "a");

        // Entity errors come back boxed and leave the record untouched
        let err = client
            .perform_action(id, TicketAction::Raise(1))
            .await
            .unwrap_err();
        let FrameworkError::EntityError(inner) = err else {
            panic!("expected entity error, got {err:?}");
        };
        assert!(matches!(
            inner.downcast_ref::<TicketError>(),
            Some(TicketError::Lowered { from: 3, to: 1 })
        ));
        assert_eq!(client.get(id).await.unwrap().unwrap().level, 3);
    }

    #[tokio::test]
    async fn missing_ids_report_not_found() {
        let client = start();

        assert!(client.get(42).await.unwrap().is_none());
        assert!(matches!(
            client.perform_action(42, TicketAction::Raise(1)).await,
            Err(FrameworkError::NotFound(id)) if id == "42"
        ));
        assert!(matches!(
            client.delete(42).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn closed_actor_is_reported() {
        let (actor, client) = ResourceActor::<Ticket>::new(1);
        drop(actor);

        assert!(matches!(
            client.get(1).await,
            Err(FrameworkError::ActorClosed)
        ));
    }
}
