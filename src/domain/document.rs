// src/domain/document.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file the user attached to a denial or appeal, before upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Keeps only the final path component and drops characters that would
    /// let a name escape its storage folder.
    pub fn safe_file_name(&self) -> String {
        let base = self
            .file_name
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or("")
            .trim();
        let cleaned: String = base
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' '))
            .collect();
        let cleaned = cleaned.trim_start_matches('.').trim().to_string();
        if cleaned.is_empty() {
            "upload.bin".to_string()
        } else {
            cleaned
        }
    }
}

/// What a stored document hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentTarget {
    Denial(String),
    Appeal(String),
}

impl DocumentTarget {
    /// Folder prefix in file storage, e.g. `denials/denial_001`.
    pub fn storage_folder(&self) -> String {
        match self {
            DocumentTarget::Denial(id) => format!("denials/{id}"),
            DocumentTarget::Appeal(id) => format!("appeals/{id}"),
        }
    }
}

/// Metadata row written to the `documents` collection after upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denial_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_id: Option<String>,
    pub user_id: String,
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: u64,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentRecord {
    pub fn new(
        id: String,
        target: &DocumentTarget,
        owner: &str,
        attachment: &Attachment,
        file_url: String,
        now: DateTime<Utc>,
    ) -> Self {
        let (denial_id, appeal_id) = match target {
            DocumentTarget::Denial(id) => (Some(id.clone()), None),
            DocumentTarget::Appeal(id) => (None, Some(id.clone())),
        };
        Self {
            id,
            denial_id,
            appeal_id,
            user_id: owner.to_string(),
            file_name: attachment.safe_file_name(),
            file_url,
            file_type: attachment.content_type.clone(),
            file_size: attachment.bytes.len() as u64,
            uploaded_at: now,
        }
    }
}
