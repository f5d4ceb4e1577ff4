pub mod sessions;
pub mod token;

pub use sessions::{create_session, load_user_from_session, revoke_session, SESSION_TTL_SECS};
