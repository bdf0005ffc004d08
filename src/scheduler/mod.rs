//! Scheduling engine: decides when a card is next due after a review.

pub mod sm2;

use crate::types::{CardId, Outcome, ReviewRecord, StudentId};
use chrono::{DateTime, Utc};

pub use sm2::Sm2Scheduler;

/// Seam for spaced-repetition policies.
///
/// Implementations are pure: `advance` computes the successor record
/// from its arguments alone, never touches storage, and is total over
/// the documented input domain. Persisting the result is the caller's
/// responsibility.
pub trait ReviewScheduler: Send + Sync {
    /// Policy identifier.
    fn name(&self) -> &'static str;

    /// Fresh record for a card that has never been reviewed.
    fn seed_record(
        &self,
        student: StudentId,
        card: CardId,
        now: DateTime<Utc>,
    ) -> ReviewRecord;

    /// Successor record after one graded presentation. The returned
    /// record has `last_reviewed = now` and `due = now + interval`; its
    /// version is carried over unchanged (the store bumps it on save).
    fn advance(&self, record: &ReviewRecord, outcome: Outcome, now: DateTime<Utc>)
        -> ReviewRecord;
}
