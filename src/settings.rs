//! Scheduler and matching configuration, global with per-deck overrides.

use crate::types::{DeckId, MatchingMode};
use serde::{Deserialize, Serialize};

/// Global scheduling and answer-matching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerSettings {
    pub seed_interval_days: f64,
    pub min_interval_days: f64,
    pub max_interval_days: f64,
    pub initial_ease: f64,
    pub min_ease: f64,
    pub max_ease: f64,
    pub ease_step_easy: f64,
    pub ease_step_hard: f64,
    pub ease_step_lapse: f64,
    pub hard_multiplier: f64,
    pub matching_mode: MatchingMode,
    pub fuzzy_threshold: f64,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            seed_interval_days: 1.0,
            min_interval_days: 1.0,
            max_interval_days: 36500.0,
            initial_ease: 2.5,
            min_ease: 1.3,
            max_ease: 3.0,
            ease_step_easy: 0.15,
            ease_step_hard: 0.15,
            ease_step_lapse: 0.20,
            hard_multiplier: 1.2,
            matching_mode: MatchingMode::default(),
            fuzzy_threshold: 0.8,
        }
    }
}

/// Per-deck settings (all fields optional overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckOverrides {
    pub deck: DeckId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed_interval_days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval_days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_ease: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching_mode: Option<MatchingMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuzzy_threshold: Option<f64>,
}

impl DeckOverrides {
    /// Overrides for a deck with nothing overridden yet.
    pub fn new(deck: DeckId) -> Self {
        Self {
            deck,
            seed_interval_days: None,
            max_interval_days: None,
            initial_ease: None,
            hard_multiplier: None,
            matching_mode: None,
            fuzzy_threshold: None,
        }
    }
}

/// Settings a session actually runs with: global merged with one deck's
/// overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveSettings {
    pub seed_interval_days: f64,
    pub min_interval_days: f64,
    pub max_interval_days: f64,
    pub initial_ease: f64,
    pub min_ease: f64,
    pub max_ease: f64,
    pub ease_step_easy: f64,
    pub ease_step_hard: f64,
    pub ease_step_lapse: f64,
    pub hard_multiplier: f64,
    pub matching_mode: MatchingMode,
    pub fuzzy_threshold: f64,
}

impl EffectiveSettings {
    /// Merge global settings with optional deck overrides. Bounds and
    /// ease steps are global-only; overriding them per deck would let a
    /// single deck escape the configured invariants.
    pub fn merge(global: &SchedulerSettings, deck: Option<&DeckOverrides>) -> Self {
        let base = Self {
            seed_interval_days: global.seed_interval_days,
            min_interval_days: global.min_interval_days,
            max_interval_days: global.max_interval_days,
            initial_ease: global.initial_ease,
            min_ease: global.min_ease,
            max_ease: global.max_ease,
            ease_step_easy: global.ease_step_easy,
            ease_step_hard: global.ease_step_hard,
            ease_step_lapse: global.ease_step_lapse,
            hard_multiplier: global.hard_multiplier,
            matching_mode: global.matching_mode,
            fuzzy_threshold: global.fuzzy_threshold,
        };

        match deck {
            Some(d) => Self {
                seed_interval_days: d.seed_interval_days.unwrap_or(base.seed_interval_days),
                max_interval_days: d.max_interval_days.unwrap_or(base.max_interval_days),
                initial_ease: d.initial_ease.unwrap_or(base.initial_ease),
                hard_multiplier: d.hard_multiplier.unwrap_or(base.hard_multiplier),
                matching_mode: d.matching_mode.unwrap_or(base.matching_mode),
                fuzzy_threshold: d.fuzzy_threshold.unwrap_or(base.fuzzy_threshold),
                ..base
            },
            None => base,
        }
    }
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        Self::merge(&SchedulerSettings::default(), None)
    }
}
