// src/remote/http.rs

use super::{
    clean_storage_path, Collection, DocumentStore, FileStorage, ListQuery, RemoteError,
    UploadOptions,
};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("denial-desk/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by the database and storage clients.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpBackend {
    pub fn new(
        base_url: &str,
        project_id: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            project_id: project_id.to_string(),
            api_key,
            client,
        })
    }

    fn url(&self, tail: &str) -> String {
        format!("{}/v1/{}/{}", self.base_url, self.project_id, tail)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    fn check(resp: Response) -> Result<Response, RemoteError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
        Err(RemoteError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

/// JSON document API: `GET|POST {base}/v1/{project}/db/{collection}`.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    backend: HttpBackend,
}

impl HttpDocumentStore {
    pub fn new(backend: HttpBackend) -> Self {
        Self { backend }
    }

    fn query_pairs(query: &ListQuery) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("userId", query.owner.clone()),
            ("orderBy", "createdAt".to_string()),
            ("order", "desc".to_string()),
        ];
        if let Some(ids) = &query.ids {
            pairs.extend(ids.iter().map(|id| ("id", id.clone())));
        }
        pairs
    }
}

impl DocumentStore for HttpDocumentStore {
    fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Value>, RemoteError> {
        if query.ids.as_ref().is_some_and(|ids| ids.is_empty()) {
            return Ok(Vec::new());
        }

        let url = self.backend.url(&format!("db/{}", collection.name()));
        debug!(%url, owner = %query.owner, "remote list");

        let req = self
            .backend
            .client
            .get(&url)
            .query(&Self::query_pairs(query));
        let resp = HttpBackend::check(self.backend.authorize(req).send()?)?;

        resp.json::<Vec<Value>>()
            .map_err(|e| RemoteError::Decode(format!("{}: {e}", collection.name())))
    }

    fn create(&self, collection: Collection, record: Value) -> Result<(), RemoteError> {
        let url = self.backend.url(&format!("db/{}", collection.name()));
        debug!(%url, "remote create");

        let req = self.backend.client.post(&url).json(&record);
        HttpBackend::check(self.backend.authorize(req).send()?)?;
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    public_url: String,
}

/// Blob API: `PUT {base}/v1/{project}/storage/{path}?upsert=…`.
#[derive(Debug, Clone)]
pub struct HttpFileStorage {
    backend: HttpBackend,
}

impl HttpFileStorage {
    pub fn new(backend: HttpBackend) -> Self {
        Self { backend }
    }
}

impl FileStorage for HttpFileStorage {
    fn upload(
        &self,
        bytes: &[u8],
        path: &str,
        options: &UploadOptions,
    ) -> Result<String, RemoteError> {
        let path = clean_storage_path(path)?;
        let url = self.backend.url(&format!("storage/{path}"));
        debug!(%url, size = bytes.len(), "remote upload");

        let req = self
            .backend
            .client
            .put(&url)
            .query(&[("upsert", options.upsert.to_string())])
            .header(reqwest::header::CONTENT_TYPE, options.content_type.as_str())
            .body(bytes.to_vec());
        let resp = HttpBackend::check(self.backend.authorize(req).send()?)?;

        let parsed: UploadResponse = resp
            .json()
            .map_err(|e| RemoteError::Decode(format!("upload response: {e}")))?;
        Ok(parsed.public_url)
    }
}
