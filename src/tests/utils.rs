use crate::config::{AppConfig, Backend};
use crate::db::connection::{init_db, Database};
use crate::errors::ServerError;
use crate::responses::ResultResp;
use crate::state::AppState;
use crate::store::{new_id, MockStore};
use astra::{Body, Request, Response};
use chrono::Utc;
use http::Method;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Seeded account whose owner id matches the sample records.
pub const DEMO_EMAIL: &str = "demo@denialdesk.local";

pub fn temp_path(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(new_id(prefix, Utc::now()))
}

/// Fresh state over its own SQLite file, upload folder and seeded store.
pub fn test_state(backend: Backend) -> AppState {
    let mut config = AppConfig::default();
    config.backend = backend;
    config.db_path = temp_path("router_db").to_string_lossy().into_owned();
    config.storage_dir = temp_path("router_uploads");

    let db = Database::new(config.db_path.clone());
    init_db(&db, &config.schema_path)
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    AppState::build(config, Arc::new(MockStore::seeded())).expect("state should build")
}

pub fn offline_state() -> AppState {
    test_state(Backend::Offline)
}

/// Signs in and returns the session token.
pub fn login(state: &AppState, email: &str) -> String {
    state.auth.login(email).expect("login should succeed").token
}

fn request(method: Method, uri: &str, session: Option<&str>) -> http::request::Builder {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    builder
}

pub fn get(uri: &str, session: Option<&str>) -> Request {
    request(Method::GET, uri, session)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str, session: Option<&str>) -> Request {
    request(Method::POST, uri, session)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, bytes: Vec<u8>, content_type: &str, session: Option<&str>) -> Request {
    request(Method::POST, uri, session)
        .header("Content-Type", content_type)
        .body(Body::from(bytes))
        .unwrap()
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = resp.into_body();
    let mut bytes = Vec::new();
    body.reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// `unwrap_err` needs a `Debug` response; this only needs the error.
pub fn expect_err(result: ResultResp) -> ServerError {
    match result {
        Ok(resp) => panic!("expected an error, got status {}", resp.status()),
        Err(e) => e,
    }
}
