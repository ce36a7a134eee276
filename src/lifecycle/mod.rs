//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the three collection actors.
//!
//! [`OrderDesk::start`] loads every collection from the store, spawns one actor per
//! collection with a [`PersistenceSink`](crate::storage::PersistenceSink) injected as its
//! observer, and hands out typed clients. [`OrderDesk::shutdown`] drops the clients,
//! which closes each actor's channel, then awaits the actor tasks.
//!
//! Observers are injected at `run()`, not at construction, so actors and clients exist
//! before the sinks are attached.

pub mod config;
pub mod order_desk;
pub mod tracing;

pub use config::*;
pub use order_desk::*;
pub use self::tracing::setup_tracing;
