// ABOUTME: Engine configuration structures with validated, overridable thresholds
// ABOUTME: Injected into every calculator so tests can run with deterministic overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Engine Configuration
//!
//! Every threshold, weight, and increment the engine uses lives in one
//! immutable [`EngineConfig`] passed in at construction. Defaults carry the
//! canonical values from [`crate::constants`]; tests override individual
//! fields to exercise specific branches deterministically. Nothing in the
//! engine reads configuration from globals or the environment.

use crate::constants::{distance, experience, progression, readiness, safety};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A threshold ladder is out of order (e.g. full-rest above easy-run)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// A weight or factor that must be positive is not
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Weights applied to the readiness score components
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessWeights {
    /// Neutral starting score
    pub baseline: f64,
    /// Points gained per full rest day
    pub rest_day_bonus: f64,
    /// Penalty per point of same-day soreness
    pub soreness_impact: f64,
    /// Bonus per point of sleep quality
    pub sleep_quality_bonus: f64,
    /// Penalty per point of current pain
    pub pain_impact: f64,
    /// Factor applied to last-session load
    pub session_load_factor: f64,
    /// Factor applied to the last-run pain penalty
    pub pain_penalty_factor: f64,
    /// Raw pain penalty per reported pain point
    pub pain_penalty_per_point: f64,
}

impl Default for ReadinessWeights {
    fn default() -> Self {
        Self {
            baseline: readiness::BASELINE,
            rest_day_bonus: readiness::REST_DAY_BONUS,
            soreness_impact: readiness::SORENESS_IMPACT,
            sleep_quality_bonus: readiness::SLEEP_QUALITY_BONUS,
            pain_impact: readiness::PAIN_IMPACT,
            session_load_factor: readiness::SESSION_LOAD_FACTOR,
            pain_penalty_factor: readiness::PAIN_PENALTY_FACTOR,
            pain_penalty_per_point: readiness::PAIN_PENALTY_PER_POINT,
        }
    }
}

/// Readiness score bands driving the session classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessThresholds {
    /// Below this: complete rest
    pub full_rest: f64,
    /// Below this: light activity only
    pub light_activity: f64,
    /// At or above this: ready for a progression increment
    pub easy_run: f64,
    /// At or above this: normal run
    pub normal_run: f64,
    /// Minimum for a tempo session
    pub tempo: f64,
    /// At or above this: distance multiplier rewards freshness
    pub peak: f64,
}

impl Default for ReadinessThresholds {
    fn default() -> Self {
        Self {
            full_rest: readiness::FULL_REST_THRESHOLD,
            light_activity: readiness::LIGHT_ACTIVITY_THRESHOLD,
            easy_run: readiness::EASY_RUN_THRESHOLD,
            normal_run: readiness::NORMAL_RUN_THRESHOLD,
            tempo: readiness::TEMPO_THRESHOLD,
            peak: readiness::PEAK_THRESHOLD,
        }
    }
}

/// Recovery-rate multipliers by experience level
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceFactors {
    /// Beginner recovery multiplier
    pub beginner: f64,
    /// Intermediate recovery multiplier
    pub intermediate: f64,
    /// Advanced recovery multiplier
    pub advanced: f64,
}

impl ExperienceFactors {
    /// Factor for a specific experience level
    #[must_use]
    pub const fn for_level(&self, level: crate::models::ExperienceLevel) -> f64 {
        match level {
            crate::models::ExperienceLevel::Beginner => self.beginner,
            crate::models::ExperienceLevel::Intermediate => self.intermediate,
            crate::models::ExperienceLevel::Advanced => self.advanced,
        }
    }
}

impl Default for ExperienceFactors {
    fn default() -> Self {
        Self {
            beginner: experience::BEGINNER_FACTOR,
            intermediate: experience::INTERMEDIATE_FACTOR,
            advanced: experience::ADVANCED_FACTOR,
        }
    }
}

/// Pain gating thresholds and the high-risk body-area set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyThresholds {
    /// Pain level triggering complete rest and medical caution
    pub critical_pain: u8,
    /// Pain level triggering caution in high-risk areas
    pub moderate_pain: u8,
    /// Post-run pain level flagged for follow-up; no rule consumes it yet
    pub post_run_pain_concern: u8,
    /// Body areas where moderate pain already warrants rest
    pub high_risk_areas: Vec<String>,
}

impl SafetyThresholds {
    /// Whether any reported area is in the high-risk set
    #[must_use]
    pub fn any_high_risk(&self, areas: &[String]) -> bool {
        areas
            .iter()
            .any(|area| self.high_risk_areas.iter().any(|risk| risk == area))
    }
}

impl Default for SafetyThresholds {
    fn default() -> Self {
        Self {
            critical_pain: safety::CRITICAL_PAIN,
            moderate_pain: safety::MODERATE_PAIN,
            post_run_pain_concern: safety::POST_RUN_PAIN_CONCERN,
            high_risk_areas: safety::HIGH_RISK_AREAS
                .iter()
                .map(|area| (*area).to_owned())
                .collect(),
        }
    }
}

/// Distance progression increments, caps, and clamps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceProgression {
    /// Goal-less increment for beginners (km)
    pub beginner_increment_km: f64,
    /// Goal-less increment for everyone else (km)
    pub normal_increment_km: f64,
    /// Minimum prescribed run distance (km)
    pub min_run_distance_km: f64,
    /// Weekly increase fraction behind the anti-spike ceiling
    pub max_weekly_increase_percent: f64,
    /// Safe weekly volume multiple of typical volume
    pub safe_weekly_volume_multiplier: f64,
    /// Margin over recent-average x runs-per-week in the safe weekly max
    pub weekly_frequency_margin: f64,
    /// Runs averaged into the recent-distance baseline
    pub recent_run_window: usize,
    /// Cap on a low-readiness recovery run (km)
    pub recovery_run_cap_km: f64,
    /// Beginner cap floor when no long run is on record (km)
    pub beginner_cap_floor_km: f64,
    /// Beginner cap margin over the longest recorded run
    pub beginner_longest_run_margin: f64,
    /// Long-run classification margin over the recent average
    pub long_run_margin: f64,
}

impl Default for DistanceProgression {
    fn default() -> Self {
        Self {
            beginner_increment_km: distance::BEGINNER_INCREMENT_KM,
            normal_increment_km: distance::NORMAL_INCREMENT_KM,
            min_run_distance_km: distance::MIN_RUN_DISTANCE_KM,
            max_weekly_increase_percent: distance::MAX_WEEKLY_INCREASE_PERCENT,
            safe_weekly_volume_multiplier: distance::SAFE_WEEKLY_VOLUME_MULTIPLIER,
            weekly_frequency_margin: distance::WEEKLY_FREQUENCY_MARGIN,
            recent_run_window: distance::RECENT_RUN_WINDOW,
            recovery_run_cap_km: distance::RECOVERY_RUN_CAP_KM,
            beginner_cap_floor_km: distance::BEGINNER_CAP_FLOOR_KM,
            beginner_longest_run_margin: distance::BEGINNER_LONGEST_RUN_MARGIN,
            long_run_margin: distance::LONG_RUN_MARGIN,
        }
    }
}

/// Baseline-building and auto-upgrade rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionRules {
    /// Runs required before personalized recommendations unlock
    pub min_runs_for_recommendations: u32,
    /// Runs required before auto-upgrade is considered
    pub auto_upgrade_min_runs: usize,
    /// History span required for auto-upgrade (days)
    pub auto_upgrade_min_days: i64,
    /// Latest-vs-earliest distance ratio required for auto-upgrade
    pub auto_upgrade_distance_multiplier: f64,
    /// Consistent weeks required to progress beginner to intermediate
    pub weeks_to_intermediate: u32,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            min_runs_for_recommendations: progression::MIN_RUNS_FOR_RECOMMENDATIONS,
            auto_upgrade_min_runs: progression::AUTO_UPGRADE_MIN_RUNS,
            auto_upgrade_min_days: progression::AUTO_UPGRADE_MIN_DAYS,
            auto_upgrade_distance_multiplier: progression::AUTO_UPGRADE_DISTANCE_MULTIPLIER,
            weeks_to_intermediate: progression::WEEKS_TO_INTERMEDIATE,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Readiness score component weights
    pub readiness_weights: ReadinessWeights,
    /// Readiness classification bands
    pub readiness_thresholds: ReadinessThresholds,
    /// Recovery-rate multipliers by experience level
    pub experience_factors: ExperienceFactors,
    /// Pain gating thresholds
    pub safety: SafetyThresholds,
    /// Distance progression rules
    pub distance: DistanceProgression,
    /// Baseline-building and auto-upgrade rules
    pub progression: ProgressionRules,
}

impl EngineConfig {
    /// Validate internal consistency of an overridden configuration
    ///
    /// # Errors
    /// Returns `ConfigError` when a threshold ladder is out of order or a
    /// factor that must be positive is not.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bands = &self.readiness_thresholds;
        if !(bands.full_rest <= bands.light_activity
            && bands.light_activity <= bands.easy_run
            && bands.easy_run <= bands.normal_run
            && bands.normal_run <= bands.tempo
            && bands.tempo <= bands.peak)
        {
            return Err(ConfigError::InvalidRange(
                "readiness thresholds must be non-decreasing",
            ));
        }

        let factors = &self.experience_factors;
        if factors.beginner <= 0.0 || factors.intermediate <= 0.0 || factors.advanced <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "experience factors must be positive",
            ));
        }

        if self.distance.min_run_distance_km <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum run distance must be positive",
            ));
        }
        if self.distance.recent_run_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recent run window must be at least 1",
            ));
        }
        if self.distance.safe_weekly_volume_multiplier <= 0.0
            || self.distance.weekly_frequency_margin <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "weekly volume multipliers must be positive",
            ));
        }
        if self.distance.long_run_margin <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "long run margin must exceed 1.0",
            ));
        }

        if self.safety.moderate_pain > self.safety.critical_pain {
            return Err(ConfigError::InvalidRange(
                "moderate pain threshold must not exceed critical",
            ));
        }

        if self.progression.min_runs_for_recommendations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "minimum run count must be at least 1",
            ));
        }
        if self.progression.auto_upgrade_distance_multiplier <= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "auto-upgrade distance multiplier must exceed 1.0",
            ));
        }

        Ok(())
    }
}
