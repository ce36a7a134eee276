//! # Record Framework
//!
//! Building blocks for single-owner record collections. Each collection lives inside one
//! actor task that processes requests strictly one after another, so invariants that
//! span the whole collection (contiguous numbering, display order) are maintained without
//! locks and every mutation is atomic from the caller's point of view.
//!
//! ## Architecture Overview
//!
//! 1. **Record Layer** ([`RecordEntity`]) - the stored type and its collection hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and exclusive ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//! 4. **Observation** ([`CollectionObserver`]) - mirrors each settled collection elsewhere
//!
//! ## Observer Injection
//!
//! The observer is passed to `run()`, not to `new()`. Actors and clients can be created
//! first and the persistence sink attached when the actor is spawned:
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<Order>::new(32, next_id);
//! tokio::spawn(actor.with_records(stored).run(PersistenceSink::new(store, "orders")));
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a fluent [`mock::MockClient`], raw-channel helpers and a
//! [`mock::RecordingObserver`] for asserting on published snapshots.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod observer;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{Placement, RecordEntity};
pub use error::{FrameworkError, ObserverError};
pub use message::{ResourceRequest, Response};
pub use observer::{CollectionObserver, NoopObserver};
