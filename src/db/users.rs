// src/db/users.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// Insert a user if they don't exist, then return the user id.
/// Email should already be normalized by caller (trim/lowercase).
pub fn get_or_create_user(conn: &Connection, email: &str, now: i64) -> Result<i64, ServerError> {
    conn.execute(
        "insert or ignore into users (email, created_at) values (?, ?)",
        params![email, now],
    )
    .map_err(|e| ServerError::DbError(format!("insert user failed: {e}")))?;

    conn.query_row(
        "select id from users where email = ?",
        params![email],
        |row| row.get(0),
    )
    .map_err(|e| ServerError::DbError(format!("select user id failed: {e}")))
}

pub fn touch_last_login(conn: &Connection, user_id: i64, now: i64) -> Result<(), ServerError> {
    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, user_id],
    )
    .map_err(|e| ServerError::DbError(format!("update last login failed: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(&std::fs::read_to_string("sql/schema.sql").unwrap())
            .unwrap();
        conn
    }

    #[test]
    fn get_or_create_user_is_idempotent() {
        let conn = conn();
        let id1 = get_or_create_user(&conn, "test@example.com", 1000).unwrap();
        let id2 = get_or_create_user(&conn, "test@example.com", 1001).unwrap();
        assert_eq!(id1, id2);
    }

    #[test]
    fn demo_user_is_seeded() {
        let conn = conn();
        assert_eq!(
            get_or_create_user(&conn, "demo@denialdesk.local", 5).unwrap(),
            123
        );
        touch_last_login(&conn, 123, 5).unwrap();
        let last: Option<i64> = conn
            .query_row("select last_login_at from users where id = 123", [], |r| r.get(0))
            .unwrap();
        assert_eq!(last, Some(5));
    }
}
