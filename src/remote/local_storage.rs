// src/remote/local_storage.rs
use super::{clean_storage_path, FileStorage, RemoteError, UploadOptions};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::debug;

/// Uploads written under a directory and served back at `{prefix}/{path}`.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
    prefix: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, prefix: &str) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Bytes and content type for a stored path; `None` when absent.
    pub fn read(&self, path: &str) -> Result<Option<(Vec<u8>, &'static str)>, RemoteError> {
        let clean = clean_storage_path(path)?;
        match fs::read(self.root.join(&clean)) {
            Ok(bytes) => Ok(Some((bytes, content_type_for(&clean)))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RemoteError::Io(format!("{clean}: {e}"))),
        }
    }
}

impl FileStorage for LocalFileStorage {
    fn upload(
        &self,
        bytes: &[u8],
        path: &str,
        options: &UploadOptions,
    ) -> Result<String, RemoteError> {
        let clean = clean_storage_path(path)?;
        let target = self.root.join(&clean);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| RemoteError::Io(format!("{clean}: {e}")))?;
        }

        let mut opts = OpenOptions::new();
        opts.write(true);
        if options.upsert {
            opts.create(true).truncate(true);
        } else {
            opts.create_new(true);
        }

        let mut file = opts.open(&target).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => RemoteError::Io(format!("{clean}: already exists")),
            _ => RemoteError::Io(format!("{clean}: {e}")),
        })?;
        file.write_all(bytes)
            .map_err(|e| RemoteError::Io(format!("{clean}: {e}")))?;

        debug!(path = %clean, size = bytes.len(), "stored upload");
        Ok(format!("{}/{}", self.prefix, clean))
    }
}

/// Content type from the file extension; unknown extensions are served as
/// octet streams.
pub fn content_type_for(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain; charset=utf-8",
        "csv" => "text/csv",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}
