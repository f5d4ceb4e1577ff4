// src/store/mock.rs

use crate::domain::{
    Appeal, AppealPatch, Denial, DenialPatch, DenialStats, NewAppeal, NewDenial,
};
use crate::store::{new_id, seed, Clock, SystemClock};
use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Default)]
struct Collections {
    denials: Vec<Denial>,
    appeals: Vec<Appeal>,
}

/// In-process stand-in for the hosted database.
///
/// Holds denials and appeals in insertion order and scopes reads by owner id.
/// Nothing is persisted; a restart brings back the seed data. Every method
/// takes the lock exactly once, so calls never observe a half-applied change.
pub struct MockStore {
    inner: Mutex<Collections>,
    clock: Arc<dyn Clock>,
}

impl MockStore {
    pub fn empty() -> Self {
        Self {
            inner: Mutex::new(Collections::default()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Six denials and two appeals belonging to `user_123`.
    pub fn seeded() -> Self {
        Self {
            inner: Mutex::new(Collections {
                denials: seed::denials(),
                appeals: seed::appeals(),
            }),
            clock: Arc::new(SystemClock),
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        // Plain data: a panic elsewhere cannot leave it inconsistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ---- denials ----

    pub fn list_denials(&self, owner: &str) -> Vec<Denial> {
        self.lock()
            .denials
            .iter()
            .filter(|d| d.user_id == owner)
            .cloned()
            .collect()
    }

    pub fn get_denial(&self, id: &str) -> Option<Denial> {
        self.lock().denials.iter().find(|d| d.id == id).cloned()
    }

    pub fn create_denial(&self, owner: &str, fields: NewDenial) -> Denial {
        let now = self.clock.now();
        let denial = fields.into_denial(new_id("denial", now), owner, now);
        self.insert_denial(denial.clone());
        denial
    }

    fn insert_denial(&self, denial: Denial) {
        debug!(id = %denial.id, owner = %denial.user_id, "mock store: insert denial");
        self.lock().denials.push(denial);
    }

    pub fn update_denial(&self, id: &str, patch: DenialPatch) -> Option<Denial> {
        let now = self.clock.now();
        let mut guard = self.lock();
        let denial = guard.denials.iter_mut().find(|d| d.id == id)?;
        patch.apply(denial);
        denial.updated_at = later_than(now, denial.updated_at);
        Some(denial.clone())
    }

    /// Appeals pointing at the removed denial are left alone.
    pub fn delete_denial(&self, id: &str) -> bool {
        let mut guard = self.lock();
        match guard.denials.iter().position(|d| d.id == id) {
            Some(index) => {
                guard.denials.remove(index);
                true
            }
            None => false,
        }
    }

    // ---- appeals ----

    pub fn list_appeals(&self, owner: &str) -> Vec<Appeal> {
        self.lock()
            .appeals
            .iter()
            .filter(|a| a.user_id == owner)
            .cloned()
            .collect()
    }

    pub fn get_appeal(&self, id: &str) -> Option<Appeal> {
        self.lock().appeals.iter().find(|a| a.id == id).cloned()
    }

    /// `denial_id` is stored as given; it need not name an existing denial.
    pub fn create_appeal(&self, owner: &str, fields: NewAppeal) -> Appeal {
        let now = self.clock.now();
        let appeal = fields.into_appeal(new_id("appeal", now), owner, now);
        self.insert_appeal(appeal.clone());
        appeal
    }

    fn insert_appeal(&self, appeal: Appeal) {
        debug!(id = %appeal.id, owner = %appeal.user_id, "mock store: insert appeal");
        self.lock().appeals.push(appeal);
    }

    pub fn update_appeal(&self, id: &str, patch: AppealPatch) -> Option<Appeal> {
        let mut guard = self.lock();
        let appeal = guard.appeals.iter_mut().find(|a| a.id == id)?;
        patch.apply(appeal);
        Some(appeal.clone())
    }

    pub fn delete_appeal(&self, id: &str) -> bool {
        let mut guard = self.lock();
        match guard.appeals.iter().position(|a| a.id == id) {
            Some(index) => {
                guard.appeals.remove(index);
                true
            }
            None => false,
        }
    }

    // ---- analytics ----

    pub fn get_stats(&self, owner: &str) -> DenialStats {
        let guard = self.lock();
        DenialStats::compute(
            guard.denials.iter().filter(|d| d.user_id == owner),
            guard.appeals.iter().filter(|a| a.user_id == owner),
        )
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Update stamps must move forward even if the clock has not.
fn later_than(now: DateTime<Utc>, previous: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::milliseconds(1)
    }
}
