//! Error types for the practice core.

use crate::types::CardId;
use thiserror::Error;

/// Result type alias using CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the core to its callers.
///
/// Scheduling computations are total over their input domain and never
/// fail; everything here originates at the session or store boundary.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A requested deck, card or review record is absent. Surfaced to
    /// the caller, never retried internally.
    #[error("not found: {0}")]
    NotFound(String),

    /// An outcome was submitted for a card that is not currently
    /// presented, or resubmitted for an already-graded presentation.
    /// Rejected without any state change.
    #[error("invalid outcome: {0}")]
    InvalidOutcome(String),

    /// A save raced with another writer of the same review record. The
    /// caller should reload and retry the single outcome, not the whole
    /// session.
    #[error("concurrent modification of review record for card {card}: submitted version {expected}, store has {found}")]
    ConcurrentModification {
        card: CardId,
        expected: u64,
        found: u64,
    },
}
