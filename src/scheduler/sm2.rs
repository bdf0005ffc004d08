//! SM-2 style scheduling policy.
//!
//! Lapses reset the streak and shrink the interval to a floor; correct
//! reviews grow the interval multiplicatively, with the ease factor
//! drifting up on Easy and down on Hard inside configured bounds.

use super::ReviewScheduler;
use crate::settings::EffectiveSettings;
use crate::types::{CardId, Outcome, ReviewRecord, StudentId};
use chrono::{DateTime, Duration, Utc};

/// SM-2 policy parameterized by [`EffectiveSettings`].
#[derive(Debug, Clone, Default)]
pub struct Sm2Scheduler {
    settings: EffectiveSettings,
}

impl Sm2Scheduler {
    pub fn new(settings: EffectiveSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EffectiveSettings {
        &self.settings
    }

    fn clamp_ease(&self, ease: f64) -> f64 {
        ease.clamp(self.settings.min_ease, self.settings.max_ease)
    }

    fn clamp_interval(&self, interval: f64) -> f64 {
        interval.clamp(
            self.settings.min_interval_days,
            self.settings.max_interval_days,
        )
    }
}

impl ReviewScheduler for Sm2Scheduler {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn seed_record(
        &self,
        student: StudentId,
        card: CardId,
        now: DateTime<Utc>,
    ) -> ReviewRecord {
        ReviewRecord::seed(student, card, self.settings.initial_ease, now)
    }

    fn advance(
        &self,
        record: &ReviewRecord,
        outcome: Outcome,
        now: DateTime<Utc>,
    ) -> ReviewRecord {
        let s = &self.settings;

        let (ease_factor, interval_days, streak, lapses) = match outcome {
            Outcome::Again => (
                self.clamp_ease(record.ease_factor - s.ease_step_lapse),
                s.min_interval_days,
                0,
                record.lapses + 1,
            ),
            correct => {
                // The interval grows from the pre-adjustment ease; the
                // adjusted ease takes effect from the next review on.
                let multiplier = match correct {
                    Outcome::Hard => s.hard_multiplier,
                    _ => record.ease_factor,
                };
                let interval = if record.last_reviewed.is_none() {
                    s.seed_interval_days
                } else {
                    self.clamp_interval(record.interval_days * multiplier)
                };
                let ease_step = match correct {
                    Outcome::Hard => -s.ease_step_hard,
                    Outcome::Easy => s.ease_step_easy,
                    _ => 0.0,
                };
                (
                    self.clamp_ease(record.ease_factor + ease_step),
                    interval,
                    record.streak + 1,
                    record.lapses,
                )
            }
        };

        let due = now + Duration::seconds((interval_days * 86400.0).round() as i64);

        ReviewRecord {
            student: record.student,
            card: record.card,
            ease_factor,
            interval_days,
            streak,
            lapses,
            due,
            last_reviewed: Some(now),
            version: record.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, h, 0, 0).unwrap()
    }

    fn seeded(scheduler: &Sm2Scheduler) -> ReviewRecord {
        scheduler.seed_record(StudentId::new(), CardId::new(), at(9))
    }

    #[test]
    fn first_review_good_uses_seed_interval() {
        let scheduler = Sm2Scheduler::default();
        let record = seeded(&scheduler);

        let next = scheduler.advance(&record, Outcome::Good, at(9));

        assert_eq!(next.interval_days, 1.0);
        assert_eq!(next.streak, 1);
        assert_eq!(next.ease_factor, record.ease_factor);
        assert_eq!(next.due, at(9) + Duration::days(1));
        assert_eq!(next.last_reviewed, Some(at(9)));
    }

    #[test]
    fn first_review_again_drops_to_floor_not_seed() {
        let scheduler = Sm2Scheduler::default();
        let record = seeded(&scheduler);

        let next = scheduler.advance(&record, Outcome::Again, at(9));

        assert_eq!(next.interval_days, scheduler.settings().min_interval_days);
        assert_eq!(next.streak, 0);
        assert_eq!(next.lapses, 1);
        assert!(next.ease_factor < record.ease_factor);
    }

    #[test]
    fn good_reviews_strictly_increase_interval() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);
        let mut previous = 0.0;

        for round in 0..3 {
            record = scheduler.advance(&record, Outcome::Good, at(9 + round));
            assert!(record.interval_days > previous);
            previous = record.interval_days;
        }
        assert_eq!(record.streak, 3);
    }

    #[test]
    fn again_after_streak_resets_streak_interval_and_ease() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);
        for _ in 0..5 {
            record = scheduler.advance(&record, Outcome::Good, at(9));
        }
        assert_eq!(record.streak, 5);
        let ease_before = record.ease_factor;

        let next = scheduler.advance(&record, Outcome::Again, at(10));

        assert_eq!(next.streak, 0);
        assert_eq!(next.lapses, 1);
        assert_eq!(next.interval_days, scheduler.settings().min_interval_days);
        assert_eq!(
            next.ease_factor,
            ease_before - scheduler.settings().ease_step_lapse
        );
    }

    #[test]
    fn easy_raises_ease_hard_lowers_it() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);
        record = scheduler.advance(&record, Outcome::Good, at(9));
        let ease = record.ease_factor;

        let easy = scheduler.advance(&record, Outcome::Easy, at(10));
        let hard = scheduler.advance(&record, Outcome::Hard, at(10));

        assert!(easy.ease_factor > ease);
        assert!(hard.ease_factor < ease);
    }

    #[test]
    fn hard_still_grows_the_interval() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);
        record = scheduler.advance(&record, Outcome::Good, at(9));

        let next = scheduler.advance(&record, Outcome::Hard, at(10));

        assert!(next.interval_days >= record.interval_days);
        assert_eq!(next.streak, record.streak + 1);
    }

    #[test]
    fn ease_never_leaves_configured_bounds() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);

        for _ in 0..20 {
            record = scheduler.advance(&record, Outcome::Again, at(9));
        }
        assert_eq!(record.ease_factor, scheduler.settings().min_ease);

        for _ in 0..20 {
            record = scheduler.advance(&record, Outcome::Easy, at(9));
        }
        assert_eq!(record.ease_factor, scheduler.settings().max_ease);
    }

    #[test]
    fn interval_respects_maximum() {
        let mut settings = EffectiveSettings::default();
        settings.max_interval_days = 10.0;
        let scheduler = Sm2Scheduler::new(settings);
        let mut record = seeded(&scheduler);

        for _ in 0..10 {
            record = scheduler.advance(&record, Outcome::Good, at(9));
        }

        assert_eq!(record.interval_days, 10.0);
    }

    #[test]
    fn due_is_never_before_last_reviewed() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);

        for outcome in [
            Outcome::Good,
            Outcome::Again,
            Outcome::Hard,
            Outcome::Easy,
            Outcome::Again,
        ] {
            record = scheduler.advance(&record, outcome, at(12));
            assert!(record.due >= record.last_reviewed.unwrap());
        }
    }

    #[test]
    fn advance_carries_identity_and_version() {
        let scheduler = Sm2Scheduler::default();
        let mut record = seeded(&scheduler);
        record.version = 7;

        let next = scheduler.advance(&record, Outcome::Good, at(9));

        assert_eq!(next.student, record.student);
        assert_eq!(next.card, record.card);
        assert_eq!(next.version, 7);
    }
}
