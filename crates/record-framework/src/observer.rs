//! # Collection Observers
//!
//! A `ResourceActor` owns its collection exclusively. Anything that must mirror the
//! collection elsewhere (a persistence sink, a test recorder) subscribes through
//! [`CollectionObserver`] and receives the full collection after every mutation.
//!
//! The observer is injected at `run()` time, not at construction time, so the
//! actor and its client can be created before the sink exists.

use crate::entity::RecordEntity;
use crate::error::ObserverError;

/// Receives the full collection, in display order, after each mutation settles.
pub trait CollectionObserver<T: RecordEntity>: Send + 'static {
    fn on_change(&mut self, records: &[T]) -> Result<(), ObserverError>;
}

/// Observer that ignores every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<T: RecordEntity> CollectionObserver<T> for NoopObserver {
    fn on_change(&mut self, _records: &[T]) -> Result<(), ObserverError> {
        Ok(())
    }
}
