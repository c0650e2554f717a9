//! Audit trail of submissions.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditEntry {
    pub user_id: String,
    pub unit: String,
    pub exercise: String,
    pub success: bool,
    pub score: u32,
    pub at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn now(user_id: &str, unit: &str, exercise: &str, success: bool, score: u32) -> Self {
        Self {
            user_id: user_id.to_string(),
            unit: unit.to_string(),
            exercise: exercise.to_string(),
            success,
            score,
            at: Utc::now(),
        }
    }
}

pub trait AuditLog: Send + Sync {
    fn record(&self, entry: AuditEntry);
}

/// Writes each entry through the `log` facade under the `audit` target.
#[derive(Debug, Default)]
pub struct LogAuditLog;

impl AuditLog for LogAuditLog {
    fn record(&self, entry: AuditEntry) {
        log::info!(
            target: "audit",
            "user={} unit={} exercise={} success={} score={} at={}",
            entry.user_id,
            entry.unit,
            entry.exercise,
            entry.success,
            entry.score,
            entry.at.to_rfc3339()
        );
    }
}

/// Keeps entries in memory; used by tests.
#[derive(Debug, Default)]
pub struct InMemoryAuditLog {
    entries: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .to_vec()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn record(&self, entry: AuditEntry) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_keeps_order() {
        let log = InMemoryAuditLog::new();
        log.record(AuditEntry::now("a", "1", "x", true, 90));
        log.record(AuditEntry::now("b", "1", "x", false, 10));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user_id, "a");
        assert_eq!(entries[1].score, 10);
    }

    #[test]
    fn entry_serializes_timestamp() {
        let entry = AuditEntry::now("a", "1", "x", true, 90);
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json["at"].is_string());
        assert_eq!(json["score"], 90);
    }
}
