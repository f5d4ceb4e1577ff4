// src/remote/offline.rs

use super::{Collection, DocumentStore, FileStorage, ListQuery, RemoteError, UploadOptions};
use serde_json::Value;

/// Stands in for a backend that cannot be reached. Every call fails, so the
/// façade always serves the mock store.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineDocumentStore;

impl DocumentStore for OfflineDocumentStore {
    fn list(&self, collection: Collection, _query: &ListQuery) -> Result<Vec<Value>, RemoteError> {
        Err(RemoteError::Unavailable(format!(
            "{}: no backend configured",
            collection.name()
        )))
    }

    fn create(&self, collection: Collection, _record: Value) -> Result<(), RemoteError> {
        Err(RemoteError::Unavailable(format!(
            "{}: no backend configured",
            collection.name()
        )))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFileStorage;

impl FileStorage for OfflineFileStorage {
    fn upload(
        &self,
        _bytes: &[u8],
        path: &str,
        _options: &UploadOptions,
    ) -> Result<String, RemoteError> {
        Err(RemoteError::Unavailable(format!("{path}: no storage configured")))
    }
}
