//! Deck and card management.
//!
//! Every card gets its review record the moment it is created, and the
//! record never outlives the card: removals cascade through here, not
//! through the stores directly.

use crate::error::{CoreError, Result};
use crate::scheduler::ReviewScheduler;
use crate::store::{CardStore, DeckStore, ReviewStore};
use crate::types::{Card, CardFields, CardId, Deck, DeckId, StudentId};
use chrono::{DateTime, Utc};

/// Catalog operations over one store.
pub struct Catalog<'a, S: ?Sized> {
    store: &'a S,
    scheduler: &'a dyn ReviewScheduler,
}

impl<'a, S> Catalog<'a, S>
where
    S: DeckStore + CardStore + ReviewStore + ?Sized,
{
    pub fn new(store: &'a S, scheduler: &'a dyn ReviewScheduler) -> Self {
        Self { store, scheduler }
    }

    pub fn create_deck(
        &self,
        student: StudentId,
        category: &str,
        color: &str,
        now: DateTime<Utc>,
    ) -> Result<Deck> {
        let deck = Deck {
            id: DeckId::new(),
            student,
            category: category.to_string(),
            color: color.to_string(),
            created_at: now,
        };
        self.store.insert_deck(&deck)?;
        tracing::debug!(student = %student, deck = %deck.id, category, "deck created");
        Ok(deck)
    }

    pub fn rename_deck(&self, id: DeckId, category: &str, color: &str) -> Result<Deck> {
        let mut deck = self.require_deck(id)?;
        deck.category = category.to_string();
        deck.color = color.to_string();
        self.store.update_deck(&deck)?;
        Ok(deck)
    }

    pub fn decks_for_student(&self, student: StudentId) -> Result<Vec<Deck>> {
        self.store.decks_for_student(student)
    }

    /// Create a card and seed its review record in the same operation.
    /// The record belongs to the deck's owner and is due immediately.
    pub fn add_card(
        &self,
        deck: DeckId,
        fields: CardFields,
        now: DateTime<Utc>,
    ) -> Result<Card> {
        let owner = self.require_deck(deck)?.student;

        let card = Card {
            id: CardId::new(),
            deck,
            word: fields.word,
            translation: fields.translation,
            explanation: fields.explanation,
            synonyms: fields.synonyms,
            created_at: now,
        };
        self.store.insert_card(&card)?;

        let record = self.scheduler.seed_record(owner, card.id, now);
        self.store.insert_record(&record)?;

        tracing::debug!(student = %owner, card = %card.id, %deck, "card created with seed record");
        Ok(card)
    }

    /// Update a card's content fields. The review record is untouched:
    /// editing a card does not reschedule it.
    pub fn update_card(&self, id: CardId, fields: CardFields) -> Result<Card> {
        let mut card = self.require_card(id)?;
        card.word = fields.word;
        card.translation = fields.translation;
        card.explanation = fields.explanation;
        card.synonyms = fields.synonyms;
        self.store.update_card(&card)?;
        Ok(card)
    }

    pub fn cards_in_deck(&self, deck: DeckId) -> Result<Vec<Card>> {
        self.store.cards_in_deck(deck)
    }

    /// Delete a card and cascade its review record away.
    pub fn remove_card(&self, id: CardId) -> Result<()> {
        let card = self.require_card(id)?;
        let owner = self.require_deck(card.deck)?.student;

        self.store.delete_record(owner, id)?;
        self.store.delete_card(id)?;
        tracing::debug!(student = %owner, card = %id, "card removed");
        Ok(())
    }

    /// Delete a deck, cascading every card and review record in it.
    pub fn remove_deck(&self, id: DeckId) -> Result<()> {
        let deck = self.require_deck(id)?;

        for card in self.store.cards_in_deck(id)? {
            self.store.delete_record(deck.student, card.id)?;
            self.store.delete_card(card.id)?;
        }
        self.store.delete_deck(id)?;
        tracing::debug!(student = %deck.student, deck = %id, "deck removed");
        Ok(())
    }

    fn require_deck(&self, id: DeckId) -> Result<Deck> {
        self.store
            .get_deck(id)?
            .ok_or_else(|| CoreError::NotFound(format!("deck {id}")))
    }

    fn require_card(&self, id: CardId) -> Result<Card> {
        self.store
            .get_card(id)?
            .ok_or_else(|| CoreError::NotFound(format!("card {id}")))
    }
}
