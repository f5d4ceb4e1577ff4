// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Which implementation answers for the remote document collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Hosted backend reached over HTTP.
    Http,
    /// Documents kept in the local SQLite file.
    Sqlite,
    /// Every remote call fails; the app runs on the mock store.
    Offline,
}

impl Backend {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "http" => Some(Self::Http),
            "sqlite" => Some(Self::Sqlite),
            "offline" | "mock" => Some(Self::Offline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub db_path: String,
    pub schema_path: String,
    pub backend: Backend,
    /// Base URL of the hosted backend, e.g. "https://api.example.dev".
    pub remote_base_url: String,
    pub remote_project_id: String,
    pub remote_api_key: Option<String>,
    pub remote_timeout: Duration,
    /// Where `LocalFileStorage` writes uploads.
    pub storage_dir: PathBuf,
    /// URL prefix under which uploaded files are served.
    pub files_prefix: String,
    /// Owner used when the signed-in user cannot be resolved.
    pub fallback_owner: String,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            db_path: "denial_desk.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            backend: Backend::Offline,
            remote_base_url: "http://127.0.0.1:8787".to_string(),
            remote_project_id: "healthcare-denial-management".to_string(),
            remote_api_key: None,
            remote_timeout: Duration::from_secs(10),
            storage_dir: PathBuf::from("uploads"),
            files_prefix: "/files".to_string(),
            fallback_owner: crate::store::FALLBACK_OWNER.to_string(),
            log_json: false,
        }
    }
}

impl AppConfig {
    /// Reads `DENIAL_DESK_*` variables on top of the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("DENIAL_DESK_BIND") {
            match raw.parse() {
                Ok(addr) => cfg.bind_addr = addr,
                Err(e) => warn!(value = %raw, "invalid DENIAL_DESK_BIND: {e}"),
            }
        }
        if let Some(raw) = lookup("DENIAL_DESK_MAX_WORKERS") {
            match raw.parse::<usize>() {
                Ok(n) if n > 0 => cfg.max_workers = n,
                _ => warn!(value = %raw, "invalid DENIAL_DESK_MAX_WORKERS"),
            }
        }
        if let Some(path) = lookup("DENIAL_DESK_DB") {
            cfg.db_path = path;
        }
        if let Some(path) = lookup("DENIAL_DESK_SCHEMA") {
            cfg.schema_path = path;
        }
        if let Some(raw) = lookup("DENIAL_DESK_BACKEND") {
            match Backend::parse(&raw) {
                Some(b) => cfg.backend = b,
                None => warn!(value = %raw, "unknown DENIAL_DESK_BACKEND, keeping default"),
            }
        }
        if let Some(url) = lookup("DENIAL_DESK_REMOTE_URL") {
            cfg.remote_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(id) = lookup("DENIAL_DESK_PROJECT_ID") {
            cfg.remote_project_id = id;
        }
        cfg.remote_api_key = lookup("DENIAL_DESK_API_KEY").filter(|k| !k.trim().is_empty());
        if let Some(raw) = lookup("DENIAL_DESK_REMOTE_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => cfg.remote_timeout = Duration::from_secs(secs),
                Err(e) => warn!(value = %raw, "invalid DENIAL_DESK_REMOTE_TIMEOUT_SECS: {e}"),
            }
        }
        if let Some(dir) = lookup("DENIAL_DESK_STORAGE_DIR") {
            cfg.storage_dir = PathBuf::from(dir);
        }
        if let Some(prefix) = lookup("DENIAL_DESK_FILES_PREFIX") {
            cfg.files_prefix = prefix.trim_end_matches('/').to_string();
        }
        if let Some(owner) = lookup("DENIAL_DESK_FALLBACK_OWNER") {
            cfg.fallback_owner = owner;
        }
        cfg.log_json = env_bool(lookup("DENIAL_DESK_LOG_JSON"), cfg.log_json);

        cfg
    }
}

fn env_bool(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        Some("1") | Some("true") | Some("yes") | Some("on") => true,
        Some("0") | Some("false") | Some("no") | Some("off") => false,
        _ => default,
    }
}
