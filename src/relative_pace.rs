// ABOUTME: Classifies a run's pace against the runner's own rolling baseline
// ABOUTME: Produces effort categories, encouragement text, and long-term improvement signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Relative Pace Analyzer
//!
//! Everything here is relative to the runner's own history, never to
//! external standards: the baseline is a distance-weighted average pace over
//! a trailing multi-week window, and a run is "fast" or "easy" only compared
//! to that. The analyzer feeds post-run feedback and the level-up
//! suggestion; it runs on a separate path from the session recommendation
//! and never gates it.

use crate::constants::relative_pace;
use crate::models::RunSummary;
use crate::pace::Pace;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a run's pace compares to the runner's personal baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelativePaceCategory {
    /// More than 15% faster than baseline
    VeryFast,
    /// 5-15% faster than baseline
    Fast,
    /// Within 5% of baseline
    Normal,
    /// 5-15% slower than baseline
    Easy,
    /// At least 15% slower than baseline
    Recovery,
}

impl RelativePaceCategory {
    /// Human-readable category name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VeryFast => "Very Fast",
            Self::Fast => "Fast",
            Self::Normal => "Normal",
            Self::Easy => "Easy",
            Self::Recovery => "Recovery",
        }
    }

    /// One-line description of the effort
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::VeryFast => "This was a hard effort for you",
            Self::Fast => "This was faster than your usual pace",
            Self::Normal => "This was your typical training pace",
            Self::Easy => "This was an easy effort for you",
            Self::Recovery => "This was a nice recovery pace",
        }
    }

    /// Default per-category advice
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::VeryFast => "Great work! Make sure to balance hard efforts with easy days.",
            Self::Fast => "Nice pickup! Remember to recover properly before your next hard run.",
            Self::Normal => "Solid run at your comfortable pace. Perfect for building fitness.",
            Self::Easy => "Perfect! Easy runs build your aerobic base safely.",
            Self::Recovery => "Smart pacing! Recovery runs help you adapt and improve.",
        }
    }
}

/// Analyzer for pace relative to the runner's own history
#[derive(Debug, Clone, Copy)]
pub struct RelativePaceAnalyzer {
    baseline_window_weeks: i64,
    min_runs_for_baseline: usize,
}

impl Default for RelativePaceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl RelativePaceAnalyzer {
    /// Create an analyzer with the standard 8-week baseline window
    #[must_use]
    pub const fn new() -> Self {
        Self {
            baseline_window_weeks: relative_pace::BASELINE_WINDOW_WEEKS,
            min_runs_for_baseline: relative_pace::MIN_RUNS_FOR_BASELINE,
        }
    }

    /// Create an analyzer with a custom baseline window
    #[must_use]
    pub const fn with_window(weeks: i64, min_runs: usize) -> Self {
        Self {
            baseline_window_weeks: weeks,
            min_runs_for_baseline: min_runs,
        }
    }

    /// Distance-weighted average pace over the trailing baseline window
    ///
    /// Requires at least the configured minimum run count; returns `None`
    /// when history is too thin, the window is empty, or total distance is
    /// zero. Weighting by distance (total distance over total duration)
    /// keeps short jogs from skewing the baseline.
    #[must_use]
    pub fn average_pace(&self, runs: &[RunSummary], now: DateTime<Utc>) -> Option<Pace> {
        if runs.len() < self.min_runs_for_baseline {
            return None;
        }

        let window_start = now - Duration::weeks(self.baseline_window_weeks);
        let relevant: Vec<&RunSummary> = runs.iter().filter(|r| r.date >= window_start).collect();
        if relevant.is_empty() {
            return None;
        }

        weighted_pace(relevant.into_iter())
    }

    /// Classify a pace against a baseline by percent difference
    #[must_use]
    pub fn categorize(pace: Pace, baseline: Pace) -> RelativePaceCategory {
        Self::categorize_percent(pace.percent_difference_from(baseline))
    }

    /// Classify a precomputed percent difference (negative means faster)
    ///
    /// The five buckets partition the axis exactly: -15% is `Fast`, not
    /// `VeryFast`; both -5% and 5% are `Normal`; 15% is `Recovery`.
    #[must_use]
    pub fn categorize_percent(diff: f64) -> RelativePaceCategory {
        if diff < relative_pace::VERY_FAST_PERCENT {
            RelativePaceCategory::VeryFast
        } else if diff < relative_pace::FAST_PERCENT {
            RelativePaceCategory::Fast
        } else if diff <= relative_pace::NORMAL_PERCENT {
            RelativePaceCategory::Normal
        } else if diff < relative_pace::EASY_PERCENT {
            RelativePaceCategory::Easy
        } else {
            RelativePaceCategory::Recovery
        }
    }

    /// Encouragement text for a categorized run
    ///
    /// Reported pain at or above the override level takes precedence over
    /// every pace-based message. Otherwise a few pace-versus-effort
    /// combinations get special messages, falling back to the category's
    /// default advice.
    #[must_use]
    pub fn encouragement(
        category: RelativePaceCategory,
        difficulty_rating: Option<u8>,
        pain_level: Option<u8>,
    ) -> String {
        if let Some(pain) = pain_level {
            if pain >= relative_pace::PAIN_OVERRIDE_LEVEL {
                return "Listen to your body. Rest and recovery are part of training!".to_owned();
            }
        }

        if let Some(difficulty) = difficulty_rating {
            let faster = matches!(
                category,
                RelativePaceCategory::Fast | RelativePaceCategory::VeryFast
            );
            let slower = matches!(
                category,
                RelativePaceCategory::Easy | RelativePaceCategory::Recovery
            );

            if faster && difficulty <= 2 {
                return "Amazing! You're getting stronger - this pace felt easier than before!"
                    .to_owned();
            }
            if slower && difficulty >= 4 {
                return "This felt harder than usual. Make sure you're getting enough rest and recovery."
                    .to_owned();
            }
            if category == RelativePaceCategory::Normal && difficulty == 3 {
                return "Perfect balance! This is exactly the kind of sustainable training that builds fitness."
                    .to_owned();
            }
        }

        category.advice().to_owned()
    }

    /// Whether sustained pace improvement warrants a level-up suggestion
    ///
    /// Compares the distance-weighted average pace of the earliest five runs
    /// against the latest five, chronologically. The latest average being
    /// more than 10% faster returns true.
    #[must_use]
    pub fn should_suggest_upgrade(&self, runs: &[RunSummary]) -> bool {
        if runs.len() < relative_pace::MIN_RUNS_FOR_UPGRADE_SUGGESTION {
            return false;
        }

        let mut sorted: Vec<&RunSummary> = runs.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));

        let half = relative_pace::UPGRADE_COMPARISON_RUNS;
        let earliest = weighted_pace(sorted.iter().take(half).copied());
        let latest = weighted_pace(sorted.iter().rev().take(half).copied());

        let (Some(early_avg), Some(late_avg)) = (earliest, latest) else {
            return false;
        };

        let improvement = late_avg.percent_difference_from(early_avg);
        let suggest = improvement < relative_pace::UPGRADE_IMPROVEMENT_PERCENT;
        if suggest {
            debug!(
                improvement_percent = improvement,
                early_sec_per_km = early_avg.seconds_per_km(),
                late_sec_per_km = late_avg.seconds_per_km(),
                "Sustained pace improvement detected"
            );
        }
        suggest
    }
}

/// Distance-weighted mean pace over a set of runs
fn weighted_pace<'a, I>(runs: I) -> Option<Pace>
where
    I: Iterator<Item = &'a RunSummary>,
{
    let mut total_distance = 0.0;
    let mut total_duration = 0.0;
    for run in runs {
        total_distance += run.distance_km;
        total_duration += run.duration_minutes * 60.0;
    }
    if total_distance <= 0.0 {
        return None;
    }
    Some(Pace::from_km(total_distance, total_duration))
}
