//! Repository seam between the practice core and storage engines.
//!
//! The core consumes these traits; the crate ships one reference
//! implementation, [`MemoryStore`]. Durable engines live outside the
//! core and only have to honor the contracts documented here.

pub mod memory;

use crate::error::Result;
use crate::types::{Card, CardId, Deck, DeckId, ReviewRecord, StudentId};
use chrono::{DateTime, Utc};

pub use memory::MemoryStore;

/// Deck persistence.
pub trait DeckStore: Send + Sync {
    fn insert_deck(&self, deck: &Deck) -> Result<()>;
    fn get_deck(&self, id: DeckId) -> Result<Option<Deck>>;
    fn update_deck(&self, deck: &Deck) -> Result<()>;
    /// Removes the deck row only; cascading its cards and records is the
    /// catalog's job.
    fn delete_deck(&self, id: DeckId) -> Result<()>;
    fn decks_for_student(&self, student: StudentId) -> Result<Vec<Deck>>;
}

/// Card persistence.
pub trait CardStore: Send + Sync {
    fn insert_card(&self, card: &Card) -> Result<()>;
    fn get_card(&self, id: CardId) -> Result<Option<Card>>;
    fn update_card(&self, card: &Card) -> Result<()>;
    fn delete_card(&self, id: CardId) -> Result<()>;
    fn cards_in_deck(&self, deck: DeckId) -> Result<Vec<Card>>;
}

/// Review-record persistence.
pub trait ReviewStore: Send + Sync {
    /// Insert the seed record created alongside a new card.
    fn insert_record(&self, record: &ReviewRecord) -> Result<()>;

    /// Load the record for one (student, card) pair.
    /// Errors with `NotFound` when absent.
    fn load(&self, student: StudentId, card: CardId) -> Result<ReviewRecord>;

    /// Persist an advanced record.
    ///
    /// The submitted record's `version` must equal the stored one;
    /// otherwise the write is rejected with `ConcurrentModification`
    /// and nothing changes. On success the stored version is bumped and
    /// the record as stored is returned.
    fn save(&self, record: &ReviewRecord) -> Result<ReviewRecord>;

    /// Remove the record for one (student, card) pair, if present.
    fn delete_record(&self, student: StudentId, card: CardId) -> Result<()>;

    /// All (card, record) pairs for the student with `record.due <=
    /// before`, optionally restricted to one deck. Order is
    /// unspecified; the due-set selector sorts.
    fn query_due(
        &self,
        student: StudentId,
        deck: Option<DeckId>,
        before: DateTime<Utc>,
    ) -> Result<Vec<(Card, ReviewRecord)>>;
}
