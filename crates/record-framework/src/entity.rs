//! # RecordEntity Trait
//!
//! The `RecordEntity` trait defines the contract every stored record (Order, Supplier,
//! Commercial, …) implements to be managed by the generic `ResourceActor`. It names the
//! identifier, creation payload and error types, and carries the collection-level hooks
//! that keep invariants spanning the whole collection (where new records go, what
//! happens to the survivors after a removal).
//!
//! # Why collection hooks?
//! Some invariants cannot be expressed on a single record. Order numbers must stay a
//! contiguous `1..N` run, so a removal has to touch every surviving order. The actor
//! owns the collection, so it hands the whole `Vec` to [`RecordEntity::after_remove`]
//! while it still holds exclusive access.
//!
//! # Provided Methods (Hooks)
//! - [`RecordEntity::placement`]: defaults to [`Placement::Back`]
//! - [`RecordEntity::after_remove`]: defaults to doing nothing

use std::fmt::{Debug, Display};

/// Where a freshly created record is inserted in the collection's display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Newest first (prepend).
    Front,
    /// Oldest first (append).
    Back,
}

/// Trait that any record type must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`RecordEntity`) that all record types (Order, Supplier,
/// Commercial) satisfy, the `ResourceActor` message loop is written *once* and reused
/// for every collection.
///
/// Associated types keep the operations type-safe: an `Order` collection only accepts an
/// `OrderDraft` payload and the compiler rejects a `SupplierCreate` sent to it.
pub trait RecordEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this record. Immutable for the record's lifetime.
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new record (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The error type for this record.
    /// Must implement std::error::Error for proper error propagation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from a fresh ID and the creation payload.
    ///
    /// `existing` is the collection as it stands before the insert, in display order.
    /// Records whose fields derive from their siblings (e.g. a sequence number) read
    /// them from here.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        existing: &[Self],
    ) -> Result<Self, Self::Error>;

    /// Where new records land in the collection.
    fn placement() -> Placement {
        Placement::Back
    }

    /// Called after a record was removed, with exclusive access to the survivors.
    /// Use this hook to restore invariants that span the collection.
    fn after_remove(_collection: &mut Vec<Self>) {}
}
