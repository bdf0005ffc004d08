//! In-memory store, the reference implementation of the repository
//! traits. Backs the test suite and small single-process deployments.

use super::{CardStore, DeckStore, ReviewStore};
use crate::error::{CoreError, Result};
use crate::types::{Card, CardId, Deck, DeckId, ReviewRecord, StudentId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    decks: HashMap<DeckId, Deck>,
    cards: HashMap<CardId, Card>,
    records: HashMap<(StudentId, CardId), ReviewRecord>,
}

/// Thread-safe in-memory storage.
///
/// A single lock guards all three maps; operations are short and never
/// call back into the core while holding it. Optimistic concurrency on
/// review records is enforced in [`ReviewStore::save`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeckStore for MemoryStore {
    fn insert_deck(&self, deck: &Deck) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.decks.insert(deck.id, deck.clone());
        Ok(())
    }

    fn get_deck(&self, id: DeckId) -> Result<Option<Deck>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.decks.get(&id).cloned())
    }

    fn update_deck(&self, deck: &Deck) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        match inner.decks.get_mut(&deck.id) {
            Some(stored) => {
                *stored = deck.clone();
                Ok(())
            }
            None => Err(CoreError::NotFound(format!("deck {}", deck.id))),
        }
    }

    fn delete_deck(&self, id: DeckId) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner
            .decks
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound(format!("deck {id}")))
    }

    fn decks_for_student(&self, student: StudentId) -> Result<Vec<Deck>> {
        let inner = self.inner.read().unwrap();
        let mut decks: Vec<Deck> = inner
            .decks
            .values()
            .filter(|d| d.student == student)
            .cloned()
            .collect();
        decks.sort_by(|a, b| a.category.cmp(&b.category).then(a.id.cmp(&b.id)));
        Ok(decks)
    }
}

impl CardStore for MemoryStore {
    fn insert_card(&self, card: &Card) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.cards.insert(card.id, card.clone());
        Ok(())
    }

    fn get_card(&self, id: CardId) -> Result<Option<Card>> {
        let inner = self.inner.read().unwrap();
        Ok(inner.cards.get(&id).cloned())
    }

    fn update_card(&self, card: &Card) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        match inner.cards.get_mut(&card.id) {
            Some(stored) => {
                *stored = card.clone();
                Ok(())
            }
            None => Err(CoreError::NotFound(format!("card {}", card.id))),
        }
    }

    fn delete_card(&self, id: CardId) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner
            .cards
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound(format!("card {id}")))
    }

    fn cards_in_deck(&self, deck: DeckId) -> Result<Vec<Card>> {
        let inner = self.inner.read().unwrap();
        let mut cards: Vec<Card> = inner
            .cards
            .values()
            .filter(|c| c.deck == deck)
            .cloned()
            .collect();
        cards.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(cards)
    }
}

impl ReviewStore for MemoryStore {
    fn insert_record(&self, record: &ReviewRecord) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner
            .records
            .insert((record.student, record.card), record.clone());
        Ok(())
    }

    fn load(&self, student: StudentId, card: CardId) -> Result<ReviewRecord> {
        let inner = self.inner.read().unwrap();
        inner
            .records
            .get(&(student, card))
            .cloned()
            .ok_or_else(|| CoreError::NotFound(format!("review record for card {card}")))
    }

    fn save(&self, record: &ReviewRecord) -> Result<ReviewRecord> {
        let mut inner = self.inner.write().unwrap();
        let stored = inner
            .records
            .get_mut(&(record.student, record.card))
            .ok_or_else(|| {
                CoreError::NotFound(format!("review record for card {}", record.card))
            })?;

        if stored.version != record.version {
            return Err(CoreError::ConcurrentModification {
                card: record.card,
                expected: record.version,
                found: stored.version,
            });
        }

        *stored = ReviewRecord {
            version: record.version + 1,
            ..record.clone()
        };
        Ok(stored.clone())
    }

    fn delete_record(&self, student: StudentId, card: CardId) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        inner.records.remove(&(student, card));
        Ok(())
    }

    fn query_due(
        &self,
        student: StudentId,
        deck: Option<DeckId>,
        before: DateTime<Utc>,
    ) -> Result<Vec<(Card, ReviewRecord)>> {
        let inner = self.inner.read().unwrap();
        let mut due = Vec::new();
        for record in inner.records.values() {
            if record.student != student || !record.is_due(before) {
                continue;
            }
            // Records whose card row is gone are unreachable garbage; a
            // catalog cascade removes both together.
            let Some(card) = inner.cards.get(&record.card) else {
                continue;
            };
            if deck.is_some_and(|d| card.deck != d) {
                continue;
            }
            due.push((card.clone(), record.clone()));
        }
        Ok(due)
    }
}
