//! # Directory Actors
//!
//! Suppliers and commercials are simple `{ id, name }` lists edited from the settings
//! screen. They share one actor setup: new entries are appended (the list keeps the
//! order in which entries were added), removal needs no follow-up, and the entity
//! behaviour lives in the [`directory_entry!`](crate::model::directory) declarations.
//!
//! ```rust
//! use order_desk::clients::DirectoryClient;
//! use order_desk::directory_actor;
//! use order_desk::model::Supplier;
//! use record_framework::NoopObserver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = directory_actor::new::<Supplier>(8);
//!     let client = DirectoryClient::new(generic_client);
//!     tokio::spawn(actor.run(NoopObserver));
//!
//!     let added = client.add("Bofitel").await?;
//!     assert_eq!(added.name, "Bofitel");
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use crate::model::DirectoryEntry;
use record_framework::{ResourceActor, ResourceClient};
use uuid::Uuid;

/// Creates a new directory actor and its client. Ids are random UUIDs.
pub fn new<E: DirectoryEntry>(buffer_size: usize) -> (ResourceActor<E>, ResourceClient<E>) {
    ResourceActor::new(buffer_size, || E::make_id(Uuid::new_v4().to_string()))
}
