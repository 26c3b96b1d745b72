//! Error types for the Order registry.

use crate::framework::FrameworkError;
use crate::model::Status;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested menu item does not exist.
    #[error("Pizza not available: menu item {0}")]
    PizzaNotAvailable(i64),

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// A status change would move the order backwards.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: Status, to: Status },

    /// An error occurred while communicating with the registry actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
