//! Test data builders.

use chrono::{DateTime, TimeZone, Utc};

use memorise::{CardFields, CardId, MemoryStore, ReviewStore, StudentId};

/// Install a fmt subscriber once so RUST_LOG=debug shows core events.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixed timestamp inside the test day.
pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

/// Content for the i-th sample card.
pub fn sample_fields(i: usize) -> CardFields {
    CardFields {
        word: format!("слово-{i}"),
        translation: format!("word-{i}"),
        explanation: (i % 2 == 0).then(|| format!("sample explanation {i}")),
        synonyms: if i % 3 == 0 {
            vec![format!("term-{i}")]
        } else {
            Vec::new()
        },
    }
}

pub fn card_fields(word: &str, translation: &str) -> CardFields {
    CardFields {
        word: word.to_string(),
        translation: translation.to_string(),
        explanation: None,
        synonyms: Vec::new(),
    }
}

/// Move a record's due timestamp, going through the store's versioned
/// save so the invariants stay honest.
pub fn set_due(store: &MemoryStore, student: StudentId, card: CardId, due: DateTime<Utc>) {
    let mut record = store.load(student, card).expect("record exists");
    record.due = due;
    store.save(&record).expect("stage due timestamp");
}
