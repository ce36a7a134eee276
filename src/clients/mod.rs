//! Type-safe client wrappers around the generic `ResourceClient`.
//!
//! Domain code talks to [`OrderClient`] and [`DirectoryClient`]; message passing stays
//! hidden behind them.

pub mod directory_client;
pub mod order_client;

pub use directory_client::*;
pub use order_client::*;
pub use record_framework::ActorClient;
