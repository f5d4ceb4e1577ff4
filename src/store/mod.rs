pub mod clock;
pub mod mock;
pub mod seed;

#[cfg(test)]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use mock::MockStore;

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Owner used for the seed data and whenever the signed-in user is unknown.
pub const FALLBACK_OWNER: &str = "user_123";

/// `denial_1705314600000_k3v9x2`: millisecond timestamp plus a short random
/// suffix. Unique enough for one office; collisions are not checked.
pub fn new_id(prefix: &str, now: DateTime<Utc>) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("{prefix}_{}_{suffix}", now.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_carry_prefix_and_time() {
        let now = Utc::now();
        let id = new_id("denial", now);
        let parts: Vec<_> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "denial");
        assert_eq!(parts[1], now.timestamp_millis().to_string());
        assert_eq!(parts[2].len(), 6);
    }

    #[test]
    fn ids_in_the_same_millisecond_usually_differ() {
        let now = Utc::now();
        assert_ne!(new_id("appeal", now), new_id("appeal", now));
    }
}
