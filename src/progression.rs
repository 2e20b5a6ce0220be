// ABOUTME: Consistency progress over ISO-week buckets and the experience auto-upgrade
// ABOUTME: Models the pending suggestion as an explicit two-state machine with pure transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression and Auto-Upgrade
//!
//! Two independent pieces. Consistency progress counts distinct ISO
//! (year, week) buckets containing at least one run inside a trailing
//! window, feeding a progress bar toward a level-up goal. The auto-upgrade
//! evaluator watches a beginner's history for sustained distance growth and
//! raises a pending "suggest intermediate" flag the caller may accept or
//! dismiss.
//!
//! The pending flag is the only session state in the whole engine, so it is
//! an explicit state machine rather than an implicitly-mutated field:
//! `{None, Pending(level)}` with transitions `evaluate`, `accept`, and
//! `dismiss`. Each transition fully overwrites the state under a single
//! writer, so a racing accept and dismiss resolve to whichever wrote last —
//! deterministic, never undefined.

use crate::config::ProgressionRules;
use crate::models::{ExperienceLevel, LevelProgress, RunSummary, RunnerProfile};
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Weeks with at least one run inside the trailing `required_weeks` window
///
/// A "week" is an ISO (year, week-of-year) bucket, so runs on Sunday and
/// the following Monday count as two weeks of activity. The window starts
/// `required_weeks - 1` weeks back so the current week counts as the last
/// bucket.
#[must_use]
pub fn consistency_progress(
    runs: &[RunSummary],
    required_weeks: u32,
    now: DateTime<Utc>,
) -> LevelProgress {
    if runs.is_empty() || required_weeks == 0 {
        return LevelProgress {
            required_weeks,
            completed_weeks: 0,
        };
    }

    let window_start = now - Duration::weeks(i64::from(required_weeks) - 1);
    let week_buckets: HashSet<(i32, u32)> = runs
        .iter()
        .filter(|r| r.date >= window_start && r.date <= now)
        .map(|r| {
            let week = r.date.iso_week();
            (week.year(), week.week())
        })
        .collect();

    LevelProgress {
        required_weeks,
        completed_weeks: (week_buckets.len() as u32).min(required_weeks),
    }
}

/// Lifecycle of the auto-upgrade suggestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "state", content = "level")]
pub enum PendingUpgrade {
    /// No suggestion outstanding
    #[default]
    None,
    /// A level-up to the carried level awaits the runner's decision
    Pending(ExperienceLevel),
}

/// Evaluates run history for a level-up suggestion and owns its lifecycle
#[derive(Debug, Clone)]
pub struct UpgradeEvaluator {
    rules: ProgressionRules,
    state: PendingUpgrade,
}

impl Default for UpgradeEvaluator {
    fn default() -> Self {
        Self::new(ProgressionRules::default())
    }
}

impl UpgradeEvaluator {
    /// Create an evaluator with the given rules and no pending suggestion
    #[must_use]
    pub const fn new(rules: ProgressionRules) -> Self {
        Self {
            rules,
            state: PendingUpgrade::None,
        }
    }

    /// The currently pending suggestion, if any
    #[must_use]
    pub const fn pending(&self) -> PendingUpgrade {
        self.state
    }

    /// Re-evaluate the history and raise a pending suggestion when warranted
    ///
    /// Fires only for beginners with enough history: at least the minimum
    /// run count, at least the minimum day span between the earliest and
    /// latest run, and the latest run's distance at least the configured
    /// multiple of the earliest (which must be positive). When the
    /// conditions do not hold the existing state is left untouched.
    ///
    /// Returns the state after evaluation.
    pub fn evaluate(&mut self, profile: &RunnerProfile, runs: &[RunSummary]) -> PendingUpgrade {
        if profile.experience_level != ExperienceLevel::Beginner {
            return self.state;
        }
        if runs.len() < self.rules.auto_upgrade_min_runs {
            return self.state;
        }

        let mut sorted: Vec<&RunSummary> = runs.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return self.state;
        };

        let day_span = (last.date.date_naive() - first.date.date_naive()).num_days();
        if day_span < self.rules.auto_upgrade_min_days {
            return self.state;
        }

        if first.distance_km <= 0.0 {
            return self.state;
        }
        if last.distance_km < first.distance_km * self.rules.auto_upgrade_distance_multiplier {
            return self.state;
        }

        debug!(
            day_span,
            first_distance_km = first.distance_km,
            last_distance_km = last.distance_km,
            "Suggesting experience level upgrade"
        );
        self.state = PendingUpgrade::Pending(ExperienceLevel::Intermediate);
        self.state
    }

    /// Accept the pending suggestion, returning the level to promote to
    ///
    /// Clears the state; accepting with nothing pending is a no-op.
    pub fn accept(&mut self) -> Option<ExperienceLevel> {
        match self.state {
            PendingUpgrade::None => None,
            PendingUpgrade::Pending(level) => {
                self.state = PendingUpgrade::None;
                Some(level)
            }
        }
    }

    /// Dismiss the pending suggestion. Idempotent.
    pub fn dismiss(&mut self) {
        self.state = PendingUpgrade::None;
    }
}
