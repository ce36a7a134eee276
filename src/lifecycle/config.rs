//! Runtime configuration for the desk.

use crate::document::LabelPreset;
use crate::storage::{FileStore, SharedStore, StorageError};
use std::path::PathBuf;
use std::sync::Arc;

pub const DEFAULT_DATA_DIR: &str = ".order-desk";
pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct DeskConfig {
    /// Directory holding `orders.json`, `suppliers.json` and `commercials.json`.
    pub data_dir: PathBuf,
    /// Mailbox capacity of each actor.
    pub buffer_size: usize,
    /// Wording printed on exported documents.
    pub labels: LabelPreset,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            buffer_size: DEFAULT_BUFFER_SIZE,
            labels: LabelPreset::default(),
        }
    }
}

impl DeskConfig {
    /// Opens the file store under `data_dir`.
    pub fn open_store(&self) -> Result<SharedStore, StorageError> {
        Ok(Arc::new(FileStore::open(&self.data_dir)?))
    }
}
