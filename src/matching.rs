//! Typed-answer grading for presentation layers.
//!
//! A typed answer is compared against every accepted answer of a card
//! (its translation and each synonym); the best-scoring candidate wins.

use crate::types::{Card, MatchingMode, Outcome};
use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer against a card's accepted answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Similarity score between 0.0 and 1.0 against the best candidate.
    pub similarity: f64,
    /// The matching mode used.
    pub matching_mode: MatchingMode,
    /// Normalized typed answer (for display).
    pub typed_normalized: String,
    /// The accepted answer the typed one scored best against.
    pub matched_against: String,
}

impl MatchResult {
    /// Outcome a presentation layer may pre-select from this grade.
    /// Correct -> Good, incorrect -> Again; anything finer (Hard/Easy)
    /// stays a student decision.
    pub fn suggested_outcome(&self) -> Outcome {
        Outcome::from_correct(self.is_correct)
    }
}

/// Grade a typed answer against a card under the given mode.
pub fn grade_answer(
    typed: &str,
    card: &Card,
    mode: MatchingMode,
    fuzzy_threshold: f64,
) -> MatchResult {
    let candidates = std::iter::once(card.translation.as_str())
        .chain(card.synonyms.iter().map(String::as_str));
    compare_answers(typed, candidates, mode, fuzzy_threshold)
}

/// Compare a typed answer to a set of accepted answers, keeping the
/// best-scoring candidate. The candidate iterator must be non-empty;
/// cards always have at least a translation.
pub fn compare_answers<'a>(
    typed: &str,
    accepted: impl IntoIterator<Item = &'a str>,
    mode: MatchingMode,
    fuzzy_threshold: f64,
) -> MatchResult {
    let typed_normalized = normalize_whitespace(typed);

    let mut best: Option<(f64, String)> = None;
    for candidate in accepted {
        let candidate_normalized = normalize_whitespace(candidate);
        let similarity = match mode {
            MatchingMode::Exact => {
                if typed_normalized == candidate_normalized {
                    1.0
                } else {
                    0.0
                }
            }
            MatchingMode::CaseInsensitive => {
                if typed_normalized.to_lowercase() == candidate_normalized.to_lowercase() {
                    1.0
                } else {
                    0.0
                }
            }
            MatchingMode::Fuzzy => normalized_similarity(
                &typed_normalized.to_lowercase(),
                &candidate_normalized.to_lowercase(),
            ),
        };

        if best.as_ref().map_or(true, |(s, _)| similarity > *s) {
            best = Some((similarity, candidate_normalized));
        }
    }

    let (similarity, matched_against) = best.unwrap_or((0.0, String::new()));
    let is_correct = match mode {
        MatchingMode::Fuzzy => similarity >= fuzzy_threshold,
        _ => similarity == 1.0,
    };

    MatchResult {
        is_correct,
        similarity,
        matching_mode: mode,
        typed_normalized,
        matched_against,
    }
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Two rows instead of the full matrix.
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized similarity (0.0 to 1.0) based on Levenshtein distance.
pub fn normalized_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(a, b);
    1.0 - (distance as f64 / max_len as f64)
}
