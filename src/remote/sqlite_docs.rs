// src/remote/sqlite_docs.rs
use super::{Collection, DocumentStore, ListQuery, RemoteError};
use crate::db::connection::Database;
use crate::errors::ServerError;
use chrono::{SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, types::Value as SqlValue};
use serde_json::Value;
use tracing::debug;

/// Document collections kept in the local SQLite file, one JSON payload per
/// row. Owner and creation time are lifted into columns for filtering.
#[derive(Debug, Clone)]
pub struct SqliteDocumentStore {
    db: Database,
}

impl SqliteDocumentStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

fn str_field<'a>(record: &'a Value, key: &str) -> Option<&'a str> {
    record.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

impl DocumentStore for SqliteDocumentStore {
    fn list(&self, collection: Collection, query: &ListQuery) -> Result<Vec<Value>, RemoteError> {
        let mut sql = String::from(
            "select payload from documents_store where collection = ? and user_id = ?",
        );
        let mut args: Vec<SqlValue> = vec![
            SqlValue::Text(collection.name().to_string()),
            SqlValue::Text(query.owner.clone()),
        ];

        if let Some(ids) = &query.ids {
            if ids.is_empty() {
                return Ok(Vec::new());
            }
            let marks = vec!["?"; ids.len()].join(", ");
            sql.push_str(&format!(" and id in ({marks})"));
            args.extend(ids.iter().cloned().map(SqlValue::Text));
        }

        sql.push_str(" order by created_at desc, rowid desc");

        let payloads: Vec<String> = self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(&sql)
                .map_err(|e| ServerError::DbError(format!("prepare list failed: {e}")))?;
            let rows = stmt
                .query_map(params_from_iter(args.iter()), |r| r.get(0))
                .map_err(|e| ServerError::DbError(format!("list query failed: {e}")))?;
            rows.collect::<Result<Vec<String>, _>>()
                .map_err(|e| ServerError::DbError(format!("read row failed: {e}")))
        })?;

        debug!(collection = collection.name(), rows = payloads.len(), "sqlite list");

        payloads
            .iter()
            .map(|p| {
                serde_json::from_str(p)
                    .map_err(|e| RemoteError::Decode(format!("{}: {e}", collection.name())))
            })
            .collect()
    }

    fn create(&self, collection: Collection, record: Value) -> Result<(), RemoteError> {
        let id = str_field(&record, "id")
            .ok_or_else(|| RemoteError::Decode("record without id".into()))?
            .to_string();
        let owner = str_field(&record, "userId")
            .ok_or_else(|| RemoteError::Decode("record without userId".into()))?
            .to_string();
        let created_at = str_field(&record, "createdAt")
            .or_else(|| str_field(&record, "uploadedAt"))
            .map(str::to_string)
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        let payload = record.to_string();

        self.db.with_conn(|conn| {
            conn.execute(
                "insert into documents_store (collection, id, user_id, created_at, payload)
                 values (?, ?, ?, ?, ?)",
                params![collection.name(), id, owner, created_at, payload],
            )
            .map_err(|e| ServerError::DbError(format!("insert document failed: {e}")))?;
            Ok(())
        })?;
        Ok(())
    }
}
