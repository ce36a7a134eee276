//! Persistence sink and fail-closed loading.

use super::{SharedStore, StorageError};
use crate::model::{seed_commercials, seed_suppliers, Commercial, Order, Supplier};
use crate::sequence;
use record_framework::{CollectionObserver, ObserverError, RecordEntity};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

pub const ORDERS_KEY: &str = "orders";
pub const SUPPLIERS_KEY: &str = "suppliers";
pub const COMMERCIALS_KEY: &str = "commercials";

/// Observer that writes the whole collection as a JSON array under one key.
pub struct PersistenceSink {
    store: SharedStore,
    key: &'static str,
}

impl PersistenceSink {
    pub fn new(store: SharedStore, key: &'static str) -> Self {
        Self { store, key }
    }

    fn write<T: Serialize>(&self, records: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records).map_err(|source| StorageError::Serialization {
            key: self.key.to_string(),
            source,
        })?;
        self.store.set(self.key, &json)
    }
}

impl<T: RecordEntity + Serialize> CollectionObserver<T> for PersistenceSink {
    fn on_change(&mut self, records: &[T]) -> Result<(), ObserverError> {
        self.write(records)
            .map_err(|e| ObserverError(e.to_string()))?;
        debug!(key = self.key, size = records.len(), "Persisted collection");
        Ok(())
    }
}

/// Reads the array under `key`.
///
/// Fails closed: `None` when the key is absent, unreadable or does not parse, so the
/// caller falls back to its default.
pub fn load_collection<T: DeserializeOwned>(store: &SharedStore, key: &str) -> Option<Vec<T>> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "Nothing stored");
            return None;
        }
        Err(e) => {
            warn!(key, error = %e, "Stored data unreadable, using defaults");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(records) => Some(records),
        Err(e) => {
            warn!(key, error = %e, "Stored data corrupt, using defaults");
            None
        }
    }
}

/// Stored orders, or an empty list. Numbering drift is reported, not repaired.
pub fn load_orders(store: &SharedStore) -> Vec<Order> {
    let orders: Vec<Order> = load_collection(store, ORDERS_KEY).unwrap_or_default();
    if !sequence::is_contiguous(&orders) {
        warn!(size = orders.len(), "Stored order numbers are not contiguous");
    }
    info!(size = orders.len(), "Loaded orders");
    orders
}

/// Stored suppliers, or the seed list.
pub fn load_suppliers(store: &SharedStore) -> Vec<Supplier> {
    load_collection(store, SUPPLIERS_KEY).unwrap_or_else(seed_suppliers)
}

/// Stored commercials, or the seed list.
pub fn load_commercials(store: &SharedStore) -> Vec<Commercial> {
    load_collection(store, COMMERCIALS_KEY).unwrap_or_else(seed_commercials)
}
