//! Pure data structures (DTOs) implementing the [`RecordEntity`](record_framework::RecordEntity) trait.

pub mod directory;
pub mod order;

pub use directory::*;
pub use order::*;
