//! Who already used their single evaluation attempt.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

pub trait AttemptLedger: Send + Sync {
    fn has_attempt(&self, user_id: &str, unit: &str, exercise: &str) -> bool;
    fn record_attempt(&self, user_id: &str, unit: &str, exercise: &str);
    /// Records the attempt unless one already exists. Returns `true` only for
    /// the caller that recorded it; check and record happen atomically.
    fn try_claim(&self, user_id: &str, unit: &str, exercise: &str) -> bool;
    /// Gives the user a fresh attempt (administrator action).
    fn reset(&self, user_id: &str, unit: &str, exercise: &str);
}

type AttemptKey = (String, String, String);

fn key(user_id: &str, unit: &str, exercise: &str) -> AttemptKey {
    (user_id.to_string(), unit.to_string(), exercise.to_string())
}

#[derive(Debug, Default)]
pub struct InMemoryAttemptLedger {
    attempts: Mutex<HashSet<AttemptKey>>,
}

impl InMemoryAttemptLedger {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the set half-updated.
    fn attempts(&self) -> MutexGuard<'_, HashSet<AttemptKey>> {
        self.attempts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AttemptLedger for InMemoryAttemptLedger {
    fn has_attempt(&self, user_id: &str, unit: &str, exercise: &str) -> bool {
        self.attempts().contains(&key(user_id, unit, exercise))
    }

    fn record_attempt(&self, user_id: &str, unit: &str, exercise: &str) {
        self.attempts().insert(key(user_id, unit, exercise));
    }

    fn try_claim(&self, user_id: &str, unit: &str, exercise: &str) -> bool {
        self.attempts().insert(key(user_id, unit, exercise))
    }

    fn reset(&self, user_id: &str, unit: &str, exercise: &str) {
        self.attempts().remove(&key(user_id, unit, exercise));
    }
}
