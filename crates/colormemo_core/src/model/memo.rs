//! Memo record domain model.
//!
//! # Responsibility
//! - Define the canonical persisted memo shape.
//!
//! # Invariants
//! - `id` is unique across all records in the store and never reused.
//! - `record_date` is set once at creation; edits do not refresh it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a memo record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemoId = Uuid;

/// Canonical persisted memo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    /// Stable unique ID, generated at creation, immutable thereafter.
    pub id: MemoId,
    /// Freeform content. Mutable, defaults to empty.
    pub text: String,
    /// Creation timestamp in Unix epoch milliseconds.
    pub record_date: i64,
}

impl Memo {
    /// Creates a new memo with a generated stable ID and a creation
    /// timestamp of "now".
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text, Utc::now().timestamp_millis())
    }

    /// Creates a memo with caller-provided identity and timestamp.
    ///
    /// Used when hydrating rows from storage and by deterministic tests.
    pub fn with_id(id: MemoId, text: impl Into<String>, record_date: i64) -> Self {
        Self {
            id,
            text: text.into(),
            record_date,
        }
    }

    /// Returns the record date as a UTC datetime for display formatting.
    ///
    /// Out-of-range values (pre-1677 or post-2262 epoch ms) fall back to the
    /// Unix epoch instead of failing a render.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(self.record_date).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Memo;
    use uuid::Uuid;

    #[test]
    fn new_memos_get_distinct_ids() {
        let a = Memo::new("a");
        let b = Memo::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let memo = Memo::with_id(
            Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
            "hello",
            1_700_000_000_000,
        );
        let json = serde_json::to_string(&memo).unwrap();
        let back: Memo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, memo);
    }

    #[test]
    fn recorded_at_tolerates_out_of_range_timestamps() {
        let memo = Memo::with_id(Uuid::new_v4(), "x", i64::MAX);
        assert_eq!(memo.recorded_at().timestamp_millis(), 0);
    }
}
