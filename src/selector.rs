//! Due-set selection: which cards a student should review now.

use crate::error::Result;
use crate::store::ReviewStore;
use crate::types::{Card, DeckId, ReviewRecord, StudentId};
use chrono::{DateTime, Utc};

/// A due card together with its review record.
#[derive(Debug, Clone)]
pub struct DueCard {
    pub card: Card,
    pub record: ReviewRecord,
}

/// All cards for the student whose record is due at `as_of`, oldest
/// overdue first so lapsed cards take priority. Ties on the due
/// timestamp are broken by card id, so two calls without intervening
/// writes return the identical sequence; each call re-queries the
/// store, so writes since the previous call are reflected.
pub fn due_cards(
    store: &dyn ReviewStore,
    student: StudentId,
    deck: Option<DeckId>,
    as_of: DateTime<Utc>,
) -> Result<Vec<DueCard>> {
    let mut due = store.query_due(student, deck, as_of)?;
    due.sort_by(|(a_card, a), (b_card, b)| a.due.cmp(&b.due).then(a_card.id.cmp(&b_card.id)));
    Ok(due
        .into_iter()
        .map(|(card, record)| DueCard { card, record })
        .collect())
}
