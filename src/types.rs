//! Core domain types for vocabulary practice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque learner identity, supplied by an external identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(Uuid);

/// Identity of a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(Uuid);

/// Identity of a card. Immutable for the lifetime of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Uuid);

macro_rules! impl_id {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

impl_id!(StudentId);
impl_id!(DeckId);
impl_id!(CardId);

/// Graded result of a single review presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Again,
    Hard,
    Good,
    Easy,
}

impl Outcome {
    /// Convert to 4-point numeric value (1-4).
    pub fn to_value(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 4,
        }
    }

    /// Create from 4-point numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Again),
            2 => Some(Self::Hard),
            3 => Some(Self::Good),
            4 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Map a two-button presentation to the 4-point scale.
    /// Wrong -> Again, correct -> Good.
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Self::Good
        } else {
            Self::Again
        }
    }

    /// True for any outcome other than `Again`.
    pub fn is_correct(self) -> bool {
        !matches!(self, Self::Again)
    }
}

/// Named collection of cards owned by one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub student: StudentId,
    pub category: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// One learnable unit: a word, its translation and supporting content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub deck: DeckId,
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Content fields of a card, used when creating or updating one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardFields {
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

/// Spaced-repetition state for one (student, card) pair.
///
/// Exactly one record exists per pair. It is created alongside the card,
/// mutated only by persisting a scheduling result, and cascade-deleted
/// with the card. `version` is bumped by the store on every save and
/// guards against concurrent writers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub student: StudentId,
    pub card: CardId,
    pub ease_factor: f64,
    pub interval_days: f64,
    pub streak: u32,
    pub lapses: u32,
    pub due: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<DateTime<Utc>>,
    pub version: u64,
}

impl ReviewRecord {
    /// Fresh record for a card that has never been reviewed: due
    /// immediately, with the configured starting ease.
    pub fn seed(
        student: StudentId,
        card: CardId,
        initial_ease: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            student,
            card,
            ease_factor: initial_ease,
            interval_days: 0.0,
            streak: 0,
            lapses: 0,
            due: now,
            last_reviewed: None,
            version: 0,
        }
    }

    /// True once the record's due timestamp has passed.
    pub fn is_due(&self, as_of: DateTime<Utc>) -> bool {
        self.due <= as_of
    }
}

/// Matching mode for typed answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::Fuzzy
    }
}
