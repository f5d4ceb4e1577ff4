// src/remote/auth.rs
use super::RemoteError;
use crate::auth::{create_session, load_user_from_session, revoke_session};
use crate::db::connection::Database;
use crate::db::users::{get_or_create_user, touch_last_login};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    /// Owner id stamped on records, e.g. `user_123`.
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
    pub expires_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    Loading,
    SignedIn(AuthUser),
    SignedOut,
}

pub type AuthListener = Box<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub trait AuthProvider: Send + Sync {
    /// Resolves the user behind a session token. No token, or a token that
    /// no longer resolves, is `RemoteError::Unauthenticated`.
    fn current_user(&self, token: Option<&str>) -> Result<AuthUser, RemoteError>;
    fn login(&self, email: &str) -> Result<Session, RemoteError>;
    fn logout(&self, token: &str) -> Result<(), RemoteError>;
    fn subscribe(&self, listener: AuthListener) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

pub(crate) fn owner_id(user_id: i64) -> String {
    format!("user_{user_id}")
}

/// Email sign-in with server-side sessions in SQLite.
pub struct SessionAuth {
    db: Database,
    listeners: Mutex<Vec<(SubscriptionId, AuthListener)>>,
    next_id: AtomicU64,
}

impl SessionAuth {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn emit(&self, event: AuthEvent) {
        let listeners = self.listeners.lock().unwrap_or_else(|p| p.into_inner());
        debug!(?event, listeners = listeners.len(), "auth event");
        for (_, listener) in listeners.iter() {
            listener(&event);
        }
    }
}

impl AuthProvider for SessionAuth {
    fn current_user(&self, token: Option<&str>) -> Result<AuthUser, RemoteError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(RemoteError::Unauthenticated)?;
        let now = Utc::now().timestamp();

        let found = self
            .db
            .with_conn(|conn| load_user_from_session(conn, token, now))?;

        found
            .map(|(id, email)| AuthUser {
                id: owner_id(id),
                email,
            })
            .ok_or(RemoteError::Unauthenticated)
    }

    fn login(&self, email: &str) -> Result<Session, RemoteError> {
        let email = email.trim().to_ascii_lowercase();
        if email.is_empty() || !email.contains('@') {
            return Err(RemoteError::Unauthenticated);
        }
        self.emit(AuthEvent::Loading);

        let now = Utc::now().timestamp();
        let (user_id, token, expires_at) = self.db.with_conn(|conn| {
            let user_id = get_or_create_user(conn, &email, now)?;
            touch_last_login(conn, user_id, now)?;
            let (token, expires_at) = create_session(conn, user_id, now)?;
            Ok((user_id, token, expires_at))
        })?;

        let user = AuthUser {
            id: owner_id(user_id),
            email,
        };
        info!(user = %user.id, "signed in");
        self.emit(AuthEvent::SignedIn(user.clone()));

        Ok(Session {
            token,
            user,
            expires_at,
        })
    }

    fn logout(&self, token: &str) -> Result<(), RemoteError> {
        let now = Utc::now().timestamp();
        let revoked = self
            .db
            .with_conn(|conn| revoke_session(conn, token, now))?;
        if revoked {
            info!("signed out");
        }
        self.emit(AuthEvent::SignedOut);
        Ok(())
    }

    fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(|p| p.into_inner());
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }
}
