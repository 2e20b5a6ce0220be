// ABOUTME: Rolling 7-day volume statistics and the safe weekly maximum ceiling
// ABOUTME: Guards every mean against empty run sets instead of propagating errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Load Analyzer
//!
//! Aggregates run history into trailing 7-calendar-day volume statistics and
//! derives the safe weekly maximum: a heuristic ceiling on weekly distance
//! built from typical historical volume and recent average session size,
//! guarding against sudden training-load spikes. The ceiling is derived on
//! every call and never stored.

use crate::config::DistanceProgression;
use crate::models::{RunSummary, RunnerProfile, WeeklyStats};
use chrono::{DateTime, Duration, Utc};

/// Window for weekly statistics, in trailing calendar days
const WEEK_WINDOW_DAYS: i64 = 7;

/// Calculator for rolling weekly volume and the safe weekly ceiling
#[derive(Debug, Clone)]
pub struct WeeklyLoadCalculator {
    window_days: i64,
    progression: DistanceProgression,
}

impl Default for WeeklyLoadCalculator {
    fn default() -> Self {
        Self::new(DistanceProgression::default())
    }
}

impl WeeklyLoadCalculator {
    /// Create a calculator over the standard 7-day window
    #[must_use]
    pub const fn new(progression: DistanceProgression) -> Self {
        Self {
            window_days: WEEK_WINDOW_DAYS,
            progression,
        }
    }

    /// Create a calculator with a custom trailing window
    #[must_use]
    pub const fn with_window(window_days: i64, progression: DistanceProgression) -> Self {
        Self {
            window_days,
            progression,
        }
    }

    /// Volume statistics over the trailing window ending at `now`, inclusive
    ///
    /// Means are 0 when the window holds no runs.
    #[must_use]
    pub fn weekly_stats(&self, runs: &[RunSummary], now: DateTime<Utc>) -> WeeklyStats {
        let window_start = now - Duration::days(self.window_days);
        let this_week: Vec<&RunSummary> = runs
            .iter()
            .filter(|r| r.date >= window_start && r.date <= now)
            .collect();

        let run_count = this_week.len() as u32;
        let total_distance_km: f64 = this_week.iter().map(|r| r.distance_km).sum();
        let (avg_distance_km, avg_difficulty) = if run_count == 0 {
            (0.0, 0.0)
        } else {
            let difficulty_sum: f64 = this_week
                .iter()
                .map(|r| f64::from(r.difficulty_rating))
                .sum();
            (
                total_distance_km / f64::from(run_count),
                difficulty_sum / f64::from(run_count),
            )
        };

        WeeklyStats {
            total_distance_km,
            run_count,
            avg_distance_km,
            avg_difficulty,
        }
    }

    /// Safe weekly maximum distance for this runner
    ///
    /// The greater of typical historical volume scaled up, and the recent
    /// average session size times the weekly run target with a margin.
    #[must_use]
    pub fn safe_weekly_max(&self, profile: &RunnerProfile, avg_recent_distance_km: f64) -> f64 {
        let from_typical =
            profile.typical_weekly_km * self.progression.safe_weekly_volume_multiplier;
        let from_recent = avg_recent_distance_km
            * f64::from(profile.runs_per_week)
            * self.progression.weekly_frequency_margin;
        from_typical.max(from_recent)
    }

    /// Distance remaining under the safe weekly maximum, floored at zero
    #[must_use]
    pub fn remaining_weekly_budget(safe_weekly_max: f64, week_total_km: f64) -> f64 {
        (safe_weekly_max - week_total_km).max(0.0)
    }
}
