use std::sync::Arc;

use crate::storage::FileStorage;

/// Shared state handed to every handler.
///
/// Holds only the storage handle; all data is re-read from disk per request,
/// so there is nothing else to share.
#[derive(Clone)]
pub struct AppState {
    storage: Arc<FileStorage>,
}

impl AppState {
    pub fn new(storage: FileStorage) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    pub fn storage(&self) -> &FileStorage {
        &self.storage
    }
}
