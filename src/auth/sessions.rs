// src/auth/sessions.rs
use crate::auth::token::{generate_token_default, hash_token};
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7;

/// Returns the raw token for the cookie and its expiry (unix seconds).
pub fn create_session(
    conn: &Connection,
    user_id: i64,
    now: i64,
) -> Result<(String, i64), ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        r#"
        insert into sessions (user_id, token_hash, created_at, expires_at)
        values (?, ?, ?, ?)
        "#,
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok((raw_token, expires_at))
}

pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<(i64, String)>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.email
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Marks the session revoked. Returns false when nothing was active.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<bool, ServerError> {
    let hash = hash_token(raw_token);
    let n = conn
        .execute(
            "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
            params![now, hash.as_slice()],
        )
        .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::users::get_or_create_user;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&std::fs::read_to_string("sql/schema.sql").unwrap())
            .unwrap();
        conn
    }

    #[test]
    fn session_resolves_until_expiry() {
        let conn = conn();
        let uid = get_or_create_user(&conn, "a@b.com", 100).unwrap();
        let (token, expires_at) = create_session(&conn, uid, 100).unwrap();
        assert_eq!(expires_at, 100 + SESSION_TTL_SECS);

        let found = load_user_from_session(&conn, &token, 101).unwrap();
        assert_eq!(found, Some((uid, "a@b.com".to_string())));
        assert_eq!(load_user_from_session(&conn, &token, expires_at).unwrap(), None);
    }

    #[test]
    fn revoked_sessions_stop_resolving() {
        let conn = conn();
        let uid = get_or_create_user(&conn, "a@b.com", 100).unwrap();
        let (token, _) = create_session(&conn, uid, 100).unwrap();

        assert!(revoke_session(&conn, &token, 150).unwrap());
        assert!(!revoke_session(&conn, &token, 151).unwrap());
        assert_eq!(load_user_from_session(&conn, &token, 152).unwrap(), None);
    }

    #[test]
    fn unknown_token_is_none() {
        let conn = conn();
        assert_eq!(load_user_from_session(&conn, "nope", 1).unwrap(), None);
    }
}
