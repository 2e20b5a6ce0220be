// ABOUTME: Composite 0-100 readiness score from rest, load, pain, and same-day inputs
// ABOUTME: Clamps the day count and the final score; no other coercion anywhere
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Readiness Calculator
//!
//! Combines rest interval, last-session load, subjective same-day inputs,
//! and experience level into a single 0-100 score. A missing check-in
//! contributes nothing; it is not defaulted and evaluated. Rest days count
//! as whole calendar days between start-of-day marks, so an evening run
//! followed by a morning invocation still counts one day of rest.

use crate::config::{ExperienceFactors, ReadinessWeights};
use crate::models::{RunSummary, RunnerProfile, TodayCheckIn};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Whole calendar days from `earlier` to `later`, floored at zero
#[must_use]
pub fn whole_days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    (later.date_naive() - earlier.date_naive()).num_days().max(0)
}

/// Calculator for the composite readiness score
#[derive(Debug, Clone)]
pub struct ReadinessCalculator {
    weights: ReadinessWeights,
    factors: ExperienceFactors,
}

impl Default for ReadinessCalculator {
    fn default() -> Self {
        Self::new(ReadinessWeights::default(), ExperienceFactors::default())
    }
}

impl ReadinessCalculator {
    /// Create a calculator with the given component weights
    #[must_use]
    pub const fn new(weights: ReadinessWeights, factors: ExperienceFactors) -> Self {
        Self { weights, factors }
    }

    /// Readiness score in [0, 100] for a session today
    #[must_use]
    pub fn readiness(
        &self,
        profile: &RunnerProfile,
        last_run: &RunSummary,
        today: Option<&TodayCheckIn>,
        now: DateTime<Utc>,
    ) -> f64 {
        let days_since_last_run = whole_days_between(last_run.date, now);

        let session_load = f64::from(last_run.difficulty_rating) * last_run.duration_minutes;
        let pain_penalty = f64::from(last_run.pain_level) * self.weights.pain_penalty_per_point;

        let experience_factor = self.factors.for_level(profile.experience_level);
        let rest_bonus = days_since_last_run as f64 * self.weights.rest_day_bonus;

        let today_modifier = today.map_or(0.0, |check_in| {
            f64::from(check_in.sleep_quality) * self.weights.sleep_quality_bonus
                - f64::from(check_in.soreness) * self.weights.soreness_impact
                - f64::from(check_in.pain_now_level) * self.weights.pain_impact
        });

        let raw = self.weights.baseline
            + rest_bonus * experience_factor
            + today_modifier
            - session_load * self.weights.session_load_factor
            - pain_penalty * self.weights.pain_penalty_factor;

        let score = raw.clamp(0.0, 100.0);
        debug!(
            days_since_last_run,
            session_load, today_modifier, score, "Computed session readiness"
        );
        score
    }
}
