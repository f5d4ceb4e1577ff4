// src/state.rs
use crate::config::{AppConfig, Backend};
use crate::data::DataAccess;
use crate::db::connection::Database;
use crate::remote::{
    AuthProvider, DocumentStore, FileStorage, HttpBackend, HttpDocumentStore, HttpFileStorage,
    LocalFileStorage, OfflineDocumentStore, OfflineFileStorage, RemoteError, SessionAuth,
    SqliteDocumentStore,
};
use crate::store::MockStore;
use std::sync::Arc;
use tracing::info;

/// Everything a request handler needs, built once in `main`.
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub data: DataAccess,
    /// Set when uploads live on local disk and are served by this process.
    pub local_files: Option<LocalFileStorage>,
}

impl AppState {
    /// Wires the collaborators the configured backend calls for.
    pub fn build(config: AppConfig, store: Arc<MockStore>) -> Result<Self, RemoteError> {
        let db = Database::new(config.db_path.clone());
        let auth: Arc<dyn AuthProvider> = Arc::new(SessionAuth::new(db.clone()));

        let mut local_files = None;
        let (docs, files): (Arc<dyn DocumentStore>, Arc<dyn FileStorage>) = match config.backend
        {
            Backend::Http => {
                let backend = HttpBackend::new(
                    &config.remote_base_url,
                    &config.remote_project_id,
                    config.remote_api_key.clone(),
                    config.remote_timeout,
                )?;
                (
                    Arc::new(HttpDocumentStore::new(backend.clone())),
                    Arc::new(HttpFileStorage::new(backend)),
                )
            }
            Backend::Sqlite => {
                let storage = LocalFileStorage::new(&config.storage_dir, &config.files_prefix);
                local_files = Some(storage.clone());
                (
                    Arc::new(SqliteDocumentStore::new(db.clone())),
                    Arc::new(storage),
                )
            }
            Backend::Offline => (Arc::new(OfflineDocumentStore), Arc::new(OfflineFileStorage)),
        };
        info!(backend = ?config.backend, "data backend ready");

        let data = DataAccess::new(store, docs, files, config.fallback_owner.clone());

        Ok(Self {
            auth,
            data,
            local_files,
        })
    }
}
