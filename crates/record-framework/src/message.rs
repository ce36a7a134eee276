//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::RecordEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Records in this system are never edited in place, so the request set is
/// create / read / list / delete. Each request is handled to completion before
/// the next one is taken from the mailbox.
///
/// - **Create**: Uses [`RecordEntity::Create`] to build and insert a new record.
/// - **Get**: Fetches one record by ID.
/// - **List**: Returns a snapshot of the whole collection in display order.
/// - **Delete**: Removes a record and runs [`RecordEntity::after_remove`].
///   Answers `false` when the ID was not present.
#[derive(Debug)]
pub enum ResourceRequest<T: RecordEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
