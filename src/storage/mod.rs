//! # Storage
//!
//! Collections persist as one JSON array per key in a [`KeyValueStore`]. Actors never
//! touch the store directly: a [`PersistenceSink`] observes each collection and writes
//! the whole array after every mutation, and [`load_collection`] reads it back at
//! startup.

pub mod error;
pub mod kv;
pub mod persist;

pub use error::*;
pub use kv::*;
pub use persist::*;
