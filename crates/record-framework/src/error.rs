//! # Framework Errors
//!
//! This module defines the common error types used throughout the record framework.
//! By centralizing error definitions, we ensure consistent error handling across
//! all actors and clients.

/// Errors that can occur within the record framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
    /// The mutation was applied in memory but the observer could not mirror it.
    #[error(transparent)]
    ObserverFailed(ObserverError),
}

/// Error reported by a [`CollectionObserver`](crate::observer::CollectionObserver).
#[derive(Debug, thiserror::Error)]
#[error("Observer failed: {0}")]
pub struct ObserverError(pub String);
