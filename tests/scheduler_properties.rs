//! Property-style checks on the scheduling engine: invariants must
//! hold for arbitrary outcome sequences, not just the happy paths.

use chrono::{Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use memorise::{CardId, Outcome, ReviewScheduler, Sm2Scheduler, StudentId};

fn random_outcome(rng: &mut StdRng) -> Outcome {
    Outcome::from_value(rng.gen_range(1..=4)).unwrap()
}

/// Ease stays within configured bounds and due never precedes the last
/// review, over long random outcome sequences.
#[test]
fn test_invariants_hold_for_random_sequences() {
    let scheduler = Sm2Scheduler::default();
    let settings = scheduler.settings().clone();

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut record = scheduler.seed_record(StudentId::new(), CardId::new(), now);

        for _ in 0..200 {
            now += Duration::hours(rng.gen_range(1..48));
            record = scheduler.advance(&record, random_outcome(&mut rng), now);

            assert!(record.ease_factor >= settings.min_ease);
            assert!(record.ease_factor <= settings.max_ease);
            assert!(record.interval_days >= settings.min_interval_days);
            assert!(record.interval_days <= settings.max_interval_days);
            assert!(record.due >= record.last_reviewed.unwrap());
        }
    }
}

/// Correct outcomes never shrink the interval; Again always resets it
/// to the floor.
#[test]
fn test_interval_monotonicity_per_outcome() {
    let scheduler = Sm2Scheduler::default();
    let settings = scheduler.settings().clone();
    let mut rng = StdRng::seed_from_u64(42);
    let mut now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let mut record = scheduler.seed_record(StudentId::new(), CardId::new(), now);

    for _ in 0..200 {
        now += Duration::hours(rng.gen_range(1..48));
        let outcome = random_outcome(&mut rng);
        let previous_interval = record.interval_days;
        let first_review = record.last_reviewed.is_none();
        record = scheduler.advance(&record, outcome, now);

        if outcome == Outcome::Again {
            assert_eq!(record.interval_days, settings.min_interval_days);
            assert_eq!(record.streak, 0);
        } else if !first_review {
            assert!(record.interval_days >= previous_interval);
        }
    }
}

/// The streak counts consecutive correct outcomes exactly.
#[test]
fn test_streak_tracks_consecutive_correct_outcomes() {
    let scheduler = Sm2Scheduler::default();
    let mut rng = StdRng::seed_from_u64(7);
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
    let mut record = scheduler.seed_record(StudentId::new(), CardId::new(), now);
    let mut expected: u32 = 0;

    for _ in 0..200 {
        let outcome = random_outcome(&mut rng);
        record = scheduler.advance(&record, outcome, now);
        expected = if outcome.is_correct() { expected + 1 } else { 0 };
        assert_eq!(record.streak, expected);
    }
}
