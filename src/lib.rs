//! Spaced-repetition core for vocabulary deck practice.
//!
//! Provides:
//! - Domain types (Student, Deck, Card, ReviewRecord, Outcome)
//! - SM-2 style scheduling engine behind an algorithm trait
//! - Due-set selection (oldest overdue first)
//! - Review session coordinator with sequential persist-then-advance
//! - Repository traits plus an in-memory reference store
//! - Deck/card catalog operations and typed-answer matching
//!
//! Identity and "now" are explicit parameters everywhere; the crate
//! holds no ambient session state and performs no authorization.
//! Callers pass a [`StudentId`] they are already authorized for.

pub mod catalog;
pub mod error;
pub mod matching;
pub mod scheduler;
pub mod selector;
pub mod session;
pub mod settings;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use error::{CoreError, Result};
pub use matching::{compare_answers, grade_answer, MatchResult};
pub use scheduler::{ReviewScheduler, Sm2Scheduler};
pub use selector::{due_cards, DueCard};
pub use session::{ReviewSession, SessionState};
pub use settings::{DeckOverrides, EffectiveSettings, SchedulerSettings};
pub use store::{CardStore, DeckStore, MemoryStore, ReviewStore};
pub use types::{
    Card, CardFields, CardId, Deck, DeckId, MatchingMode, Outcome, ReviewRecord, StudentId,
};
