//! Boundaries to the hosted backend: authentication, document collections
//! and file storage. Each is a trait so the app can run against the hosted
//! service, the local SQLite file, or nothing at all.

pub mod auth;
pub mod http;
pub mod local_storage;
pub mod offline;
pub mod sqlite_docs;

pub use auth::{
    AuthEvent, AuthListener, AuthProvider, AuthUser, Session, SessionAuth, SubscriptionId,
};
pub use http::{HttpBackend, HttpDocumentStore, HttpFileStorage};
pub use local_storage::LocalFileStorage;
pub use offline::{OfflineDocumentStore, OfflineFileStorage};
pub use sqlite_docs::SqliteDocumentStore;

use crate::errors::ServerError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("remote unavailable: {0}")]
    Unavailable(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("remote returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode remote data: {0}")]
    Decode(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("not signed in")]
    Unauthenticated,
    #[error("storage error: {0}")]
    Io(String),
}

impl From<ServerError> for RemoteError {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::DbError(msg) => RemoteError::Db(msg),
            other => RemoteError::Db(other.to_string()),
        }
    }
}

impl From<RemoteError> for ServerError {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Unauthenticated => ServerError::Unauthorized(err.to_string()),
            RemoteError::Db(msg) => ServerError::DbError(msg),
            other => ServerError::Upstream(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            RemoteError::Unavailable(err.to_string())
        } else if err.is_decode() {
            RemoteError::Decode(err.to_string())
        } else {
            RemoteError::Http(err.to_string())
        }
    }
}

/// Entity kinds held by the document service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Denials,
    Appeals,
    Documents,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Collection::Denials => "denials",
            Collection::Appeals => "appeals",
            Collection::Documents => "documents",
        }
    }
}

/// `where userId = owner [and id in ids] order by createdAt desc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub owner: String,
    pub ids: Option<Vec<String>>,
}

impl ListQuery {
    pub fn owned_by(owner: &str) -> Self {
        Self {
            owner: owner.to_string(),
            ids: None,
        }
    }

    pub fn with_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = Some(ids);
        self
    }
}

/// Remote document collections.
pub trait DocumentStore: Send + Sync {
    fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Value>, RemoteError>;
    fn create(&self, collection: Collection, record: Value) -> Result<(), RemoteError>;
}

/// Typed read on top of the JSON rows a `DocumentStore` returns.
pub fn list_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: Collection,
    query: &ListQuery,
) -> Result<Vec<T>, RemoteError> {
    store
        .list(collection, query)?
        .into_iter()
        .map(|row| {
            serde_json::from_value(row)
                .map_err(|e| RemoteError::Decode(format!("{}: {e}", collection.name())))
        })
        .collect()
}

pub fn create_from<T: Serialize>(
    store: &dyn DocumentStore,
    collection: Collection,
    record: &T,
) -> Result<(), RemoteError> {
    let value = serde_json::to_value(record)
        .map_err(|e| RemoteError::Decode(format!("{}: {e}", collection.name())))?;
    store.create(collection, value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOptions {
    /// Replace an existing file at the same path.
    pub upsert: bool,
    pub content_type: String,
}

/// Remote file storage returning publicly resolvable URLs.
pub trait FileStorage: Send + Sync {
    fn upload(&self, bytes: &[u8], path: &str, options: &UploadOptions)
        -> Result<String, RemoteError>;
}

/// Rejects storage paths that could climb out of their root.
pub(crate) fn clean_storage_path(path: &str) -> Result<String, RemoteError> {
    let parts: Vec<&str> = path
        .split('/')
        .filter(|p| !p.is_empty() && *p != ".")
        .collect();
    if parts.is_empty() || parts.iter().any(|p| *p == ".." || p.contains('\\')) {
        return Err(RemoteError::Io(format!("invalid storage path: {path}")));
    }
    Ok(parts.join("/"))
}
