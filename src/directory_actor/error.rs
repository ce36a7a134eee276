//! Error types for the supplier and commercial actors.

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur while managing a directory list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// The name is blank.
    #[error("Directory validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The change was applied but could not be written to storage.
    #[error("Directory persistence error: {0}")]
    Persistence(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
