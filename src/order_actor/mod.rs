//! Order-specific record logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Order, OrderId};
use record_framework::{ResourceActor, ResourceClient};
use uuid::Uuid;

/// Creates a new Order actor and its client. Ids are random UUIDs.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, || OrderId(Uuid::new_v4().to_string()))
}
