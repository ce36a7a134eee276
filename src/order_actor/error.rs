//! Error types for the Order actor.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The draft is missing a required field.
    #[error("Order validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Every order number up to `u32::MAX` is taken.
    #[error("Order numbers exhausted")]
    SequenceExhausted,

    /// The change was applied but could not be written to storage.
    #[error("Order persistence error: {0}")]
    Persistence(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
