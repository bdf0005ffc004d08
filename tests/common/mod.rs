//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext bundling an in-memory store, a scheduler and
//! one student identity, plus helpers for seeding decks of cards.

pub mod fixtures;

use chrono::{DateTime, Utc};

use memorise::{
    Card, Catalog, Deck, DeckId, MemoryStore, ReviewSession, Sm2Scheduler, StudentId,
};

/// Test context: one student practicing against an in-memory store.
pub struct TestContext {
    pub store: MemoryStore,
    pub scheduler: Sm2Scheduler,
    pub student: StudentId,
}

impl TestContext {
    pub fn new() -> Self {
        fixtures::init_tracing();
        Self {
            store: MemoryStore::new(),
            scheduler: Sm2Scheduler::default(),
            student: StudentId::new(),
        }
    }

    pub fn catalog(&self) -> Catalog<'_, MemoryStore> {
        Catalog::new(&self.store, &self.scheduler)
    }

    /// Create a deck with `count` sample cards, all due immediately.
    pub fn deck_with_cards(&self, count: usize, now: DateTime<Utc>) -> (Deck, Vec<Card>) {
        let catalog = self.catalog();
        let deck = catalog
            .create_deck(self.student, "Nouns", "teal", now)
            .expect("create deck");
        let cards = (0..count)
            .map(|i| {
                catalog
                    .add_card(deck.id, fixtures::sample_fields(i), now)
                    .expect("add card")
            })
            .collect();
        (deck, cards)
    }

    /// Start a review session over the whole collection.
    pub fn begin_session(&self, now: DateTime<Utc>) -> ReviewSession<'_> {
        self.begin_session_for_deck(None, now)
    }

    pub fn begin_session_for_deck(
        &self,
        deck: Option<DeckId>,
        now: DateTime<Utc>,
    ) -> ReviewSession<'_> {
        ReviewSession::begin(&self.store, &self.scheduler, self.student, deck, now)
            .expect("begin session")
    }
}
