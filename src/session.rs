//! Review session coordinator.
//!
//! Sequences one student's due cards through presentation and grading:
//! the due set is pulled once at the start, each submitted outcome is
//! advanced through the scheduler and persisted before the next card is
//! presented, and the session ends in `Complete`, `Abandoned`, or
//! `Empty` (nothing was due).

use crate::error::{CoreError, Result};
use crate::scheduler::ReviewScheduler;
use crate::selector::{due_cards, DueCard};
use crate::store::ReviewStore;
use crate::types::{Card, CardId, DeckId, Outcome, ReviewRecord, StudentId};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;

/// Coordinator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The due set was empty at session start.
    Empty,
    /// A card is presented and its outcome has not been graded yet.
    AwaitingOutcome,
    /// Every due card was graded.
    Complete,
    /// The student walked away before grading every card.
    Abandoned,
}

/// One student's review session over their due set.
pub struct ReviewSession<'a> {
    store: &'a dyn ReviewStore,
    scheduler: &'a dyn ReviewScheduler,
    student: StudentId,
    queue: VecDeque<DueCard>,
    graded: usize,
    state: SessionState,
}

impl<'a> ReviewSession<'a> {
    /// Start a session by pulling the student's due set as of `now`,
    /// optionally restricted to one deck. An empty due set terminates
    /// immediately in [`SessionState::Empty`].
    pub fn begin(
        store: &'a dyn ReviewStore,
        scheduler: &'a dyn ReviewScheduler,
        student: StudentId,
        deck: Option<DeckId>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        let queue: VecDeque<DueCard> = due_cards(store, student, deck, now)?.into();
        let state = if queue.is_empty() {
            SessionState::Empty
        } else {
            SessionState::AwaitingOutcome
        };

        tracing::debug!(
            student = %student,
            due = queue.len(),
            policy = scheduler.name(),
            "review session started"
        );

        Ok(Self {
            store,
            scheduler,
            student,
            queue,
            graded: 0,
            state,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn student(&self) -> StudentId {
        self.student
    }

    /// The card currently presented, if any.
    pub fn current_card(&self) -> Option<&Card> {
        match self.state {
            SessionState::AwaitingOutcome => self.queue.front().map(|due| &due.card),
            _ => None,
        }
    }

    /// Cards graded so far in this session.
    pub fn graded_count(&self) -> usize {
        self.graded
    }

    /// Cards still waiting for an outcome, the presented one included.
    pub fn remaining_count(&self) -> usize {
        match self.state {
            SessionState::AwaitingOutcome => self.queue.len(),
            _ => 0,
        }
    }

    /// Grade the presented card.
    ///
    /// `card` must be the currently presented card; anything else
    /// (a card elsewhere in the queue, an already-graded one, or a
    /// submission after the session ended) is rejected with
    /// `InvalidOutcome` and mutates nothing. On success the advanced
    /// record is persisted before the next card is presented, and the
    /// stored record is returned.
    ///
    /// A `ConcurrentModification` from the store leaves the session
    /// presenting the same card with its record reloaded, so retrying
    /// the same submission applies the outcome to the fresh state.
    pub fn submit(
        &mut self,
        card: CardId,
        outcome: Outcome,
        now: DateTime<Utc>,
    ) -> Result<ReviewRecord> {
        if self.state != SessionState::AwaitingOutcome {
            tracing::warn!(student = %self.student, %card, "outcome submitted to a finished session");
            return Err(CoreError::InvalidOutcome(format!(
                "no card is awaiting an outcome (session is {:?})",
                self.state
            )));
        }

        let Some(presented) = self.queue.front_mut() else {
            return Err(CoreError::InvalidOutcome(
                "no card is awaiting an outcome".to_string(),
            ));
        };
        if presented.card.id != card {
            tracing::warn!(
                student = %self.student,
                submitted = %card,
                presented = %presented.card.id,
                "outcome submitted for a card that is not presented"
            );
            return Err(CoreError::InvalidOutcome(format!(
                "card {card} is not the presented card"
            )));
        }

        let advanced = self.scheduler.advance(&presented.record, outcome, now);
        let saved = match self.store.save(&advanced) {
            Ok(saved) => saved,
            Err(err @ CoreError::ConcurrentModification { .. }) => {
                tracing::warn!(student = %self.student, %card, "review record changed under the session");
                // Refresh the presented record so one retry can succeed.
                presented.record = self.store.load(self.student, card)?;
                return Err(err);
            }
            Err(err) => return Err(err),
        };

        self.queue.pop_front();
        self.graded += 1;
        if self.queue.is_empty() {
            self.state = SessionState::Complete;
        }

        tracing::debug!(
            student = %self.student,
            %card,
            outcome = ?outcome,
            interval_days = saved.interval_days,
            remaining = self.queue.len(),
            "outcome recorded"
        );

        Ok(saved)
    }

    /// Walk away from the session. Cards not yet graded keep their
    /// records untouched. A no-op once the session already ended.
    pub fn abandon(&mut self) {
        if self.state == SessionState::AwaitingOutcome {
            tracing::debug!(
                student = %self.student,
                graded = self.graded,
                remaining = self.queue.len(),
                "review session abandoned"
            );
            self.queue.clear();
            self.state = SessionState::Abandoned;
        }
    }
}
