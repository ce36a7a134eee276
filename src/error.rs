//! Top-level error for desk operations that span several actors.

use crate::directory_actor::DirectoryError;
use crate::document::DocumentRenderError;
use crate::model::OrderId;
use crate::order_actor::OrderError;
use crate::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Export failed: {0}")]
    Document(#[from] DocumentRenderError),

    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
