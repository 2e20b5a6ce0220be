// ABOUTME: Core data models for the training recommendation engine
// ABOUTME: Defines runner profile, run summaries, check-ins, and recommendation outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Input and output types shared by every component of the engine. Inputs
//! (`RunnerProfile`, `RunSummary`, `TodayCheckIn`) arrive as already-validated
//! snapshots from the profile, run-history, and check-in stores; the engine
//! never mutates them. Outputs (`SessionRecommendation`, `WeeklyStats`,
//! `LevelProgress`) are produced fresh on every invocation and cross to the
//! presentation layer as plain structured values.
//!
//! The session-type tag set is a closed, stable nine-value enumeration and
//! must not be narrowed without a version contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marathon distance in kilometers
const MARATHON_KM: f64 = 42.2;

/// Half marathon distance in kilometers
const HALF_MARATHON_KM: f64 = 21.1;

/// Runner experience level, set during onboarding and updated from settings
/// or through an accepted auto-upgrade suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceLevel {
    /// New to running or returning after a long break
    Beginner,
    /// Runs regularly and has a stable weekly routine
    Intermediate,
    /// Experienced runner with structured training history
    Advanced,
}

impl ExperienceLevel {
    /// Human-readable name for display surfaces
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// Preferred distance unit. Display-only: all internal math is kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistanceUnit {
    /// Metric kilometers
    Kilometers,
    /// Statute miles
    Miles,
}

impl DistanceUnit {
    /// Human-readable unit name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Kilometers => "kilometers",
            Self::Miles => "miles",
        }
    }

    /// Short unit label for interpolated strings
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }

    /// Convert an internal kilometer value into this display unit
    #[must_use]
    pub fn convert_km(self, km: f64) -> f64 {
        match self {
            Self::Kilometers => km,
            Self::Miles => km * crate::constants::distance::MILES_PER_KM,
        }
    }
}

/// Primary training goal selected by the runner
///
/// Race goals carry a fixed target distance; `PersonalBest` resolves against
/// a user-supplied custom distance stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryGoal {
    /// No specific goal selected
    None,
    /// Staying active and healthy
    GeneralFitness,
    /// Running primarily for weight management
    WeightLoss,
    /// Training toward a 5k race
    Race5k,
    /// Training toward a 10k race
    Race10k,
    /// Training toward a half marathon
    RaceHalfMarathon,
    /// Training toward a full marathon
    RaceMarathon,
    /// Chasing a personal best over a custom distance
    PersonalBest,
}

impl PrimaryGoal {
    /// Human-readable goal name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::GeneralFitness => "General Fitness",
            Self::WeightLoss => "Weight Loss",
            Self::Race5k => "5k Race",
            Self::Race10k => "10k Race",
            Self::RaceHalfMarathon => "Half Marathon",
            Self::RaceMarathon => "Marathon",
            Self::PersonalBest => "Personal Best",
        }
    }

    /// Numeric goal distance, when one exists
    ///
    /// Standard race goals resolve from the fixed race-distance table;
    /// `PersonalBest` resolves to the runner's custom distance. Fitness and
    /// weight-loss goals have no numeric distance.
    #[must_use]
    pub fn target_distance_km(self, custom_distance_km: Option<f64>) -> Option<f64> {
        match self {
            Self::Race5k => Some(5.0),
            Self::Race10k => Some(10.0),
            Self::RaceHalfMarathon => Some(HALF_MARATHON_KM),
            Self::RaceMarathon => Some(MARATHON_KM),
            Self::PersonalBest => custom_distance_km,
            Self::None | Self::GeneralFitness | Self::WeightLoss => None,
        }
    }

    /// Whether this goal is race- or personal-best-oriented
    #[must_use]
    pub const fn is_race_or_pr(self) -> bool {
        matches!(
            self,
            Self::Race5k
                | Self::Race10k
                | Self::RaceHalfMarathon
                | Self::RaceMarathon
                | Self::PersonalBest
        )
    }
}

/// Runner profile snapshot
///
/// Mutated only by explicit update operations from the settings surface;
/// the engine reads it and never writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerProfile {
    /// Identity reference into the user store
    pub user_id: Uuid,
    /// Display name chosen during onboarding
    pub display_name: String,
    /// Self-reported (or auto-upgraded) experience level
    pub experience_level: ExperienceLevel,
    /// Preferred display unit
    pub distance_unit: DistanceUnit,
    /// Primary training goal
    pub primary_goal: PrimaryGoal,
    /// Custom goal distance for `PersonalBest`, in kilometers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_goal_distance_km: Option<f64>,
    /// Weekly run-count target (positive)
    pub runs_per_week: u32,
    /// Longest recent run distance in kilometers
    pub longest_run_km: f64,
    /// Typical historical weekly distance in kilometers
    pub typical_weekly_km: f64,
    /// Free-text goal description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_description: Option<String>,
    /// Profile creation timestamp
    pub created_at: DateTime<Utc>,
}

impl RunnerProfile {
    /// Resolve the profile's numeric goal distance, if any
    #[must_use]
    pub fn goal_distance_km(&self) -> Option<f64> {
        self.primary_goal
            .target_distance_km(self.custom_goal_distance_km)
    }
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            user_id: Uuid::nil(),
            display_name: "Runner".to_owned(),
            experience_level: ExperienceLevel::Beginner,
            distance_unit: DistanceUnit::Kilometers,
            primary_goal: PrimaryGoal::None,
            custom_goal_distance_km: None,
            runs_per_week: 3,
            longest_run_km: 0.0,
            typical_weekly_km: 0.0,
            goal_description: None,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

fn default_difficulty() -> u8 {
    3
}

/// Immutable summary of one completed run, derived from the persisted record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// When the run took place
    pub date: DateTime<Utc>,
    /// Run duration in minutes (expected positive)
    pub duration_minutes: f64,
    /// Run distance in kilometers (expected positive)
    pub distance_km: f64,
    /// Perceived difficulty on a 1-5 scale; 3 when the runner skipped it
    #[serde(default = "default_difficulty")]
    pub difficulty_rating: u8,
    /// Pain reported after the run on a 0-10 scale
    #[serde(default)]
    pub pain_level: u8,
    /// Body-part labels where pain was reported
    #[serde(default)]
    pub pain_areas: Vec<String>,
}

impl RunSummary {
    /// Average pace over the run; the zero pace when distance is non-positive
    #[must_use]
    pub fn pace(&self) -> crate::pace::Pace {
        crate::pace::Pace::from_km(self.distance_km, self.duration_minutes * 60.0)
    }
}

/// Same-day subjective check-in
///
/// At most one exists per local calendar day; its absence is valid and every
/// consumer treats a missing check-in as "no same-day signal".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayCheckIn {
    /// Muscle soreness on a 0-10 scale
    pub soreness: u8,
    /// Sleep quality on a 1-5 scale
    pub sleep_quality: u8,
    /// Current pain level on a 0-10 scale
    pub pain_now_level: u8,
    /// Body-part labels where pain is felt right now
    #[serde(default)]
    pub pain_now_areas: Vec<String>,
}

/// Discrete category of the prescribed session
///
/// Closed enumeration consumed by the presentation layer; tags are stable
/// wire names. `Intervals` is a defined category with explanation support
/// that the current decision rules never produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionType {
    /// Complete rest day
    FullRest,
    /// Conversational-pace run
    EasyRun,
    /// Solid effort at a comfortable pace
    NormalRun,
    /// Endurance-building run beyond the recent average
    LongRun,
    /// Comfortably-hard sustained effort
    TempoRun,
    /// Alternating hard efforts and recovery
    Intervals,
    /// Stretching and mobility work instead of running
    StrengthAndMobility,
    /// Rest prompted by reported pain, with injury advice
    RestWithInjuryAdvice,
    /// Not enough history yet for personalized recommendations
    NeedsMoreRuns,
}

impl SessionType {
    /// Whether this session type prescribes a run with a numeric distance
    #[must_use]
    pub const fn carries_distance(self) -> bool {
        matches!(
            self,
            Self::EasyRun | Self::NormalRun | Self::LongRun | Self::TempoRun
        )
    }
}

/// The engine's single recommendation output
///
/// Produced fresh on every invocation and never mutated afterward. Rest-type
/// and baseline-building recommendations never carry a target distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecommendation {
    /// Prescribed session category
    pub session_type: SessionType,
    /// Target distance in kilometers, for session types that carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Human-readable rationale
    pub explanation: String,
    /// Safety or context warnings to surface alongside the recommendation
    #[serde(default)]
    pub warnings: Vec<String>,
}

/// Rolling weekly volume statistics over the trailing 7 calendar days
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    /// Total distance this week in kilometers
    pub total_distance_km: f64,
    /// Number of runs this week
    pub run_count: u32,
    /// Mean distance per run; 0 when no runs
    pub avg_distance_km: f64,
    /// Mean difficulty rating; 0 when no runs
    pub avg_difficulty: f64,
}

/// Progress toward a consistency-based level-up goal, for progress displays
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    /// Weeks of consistent activity required
    pub required_weeks: u32,
    /// Trailing-window weeks containing at least one run
    pub completed_weeks: u32,
}

impl LevelProgress {
    /// Completion fraction clamped into [0, 1]; 0 when nothing is required
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.required_weeks == 0 {
            return 0.0;
        }
        (f64::from(self.completed_weeks) / f64::from(self.required_weeks)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_distance_table() {
        assert_eq!(PrimaryGoal::Race5k.target_distance_km(None), Some(5.0));
        assert_eq!(PrimaryGoal::Race10k.target_distance_km(None), Some(10.0));
        assert_eq!(
            PrimaryGoal::RaceHalfMarathon.target_distance_km(None),
            Some(21.1)
        );
        assert_eq!(
            PrimaryGoal::RaceMarathon.target_distance_km(None),
            Some(42.2)
        );
        assert_eq!(PrimaryGoal::GeneralFitness.target_distance_km(None), None);
    }

    #[test]
    fn test_personal_best_uses_custom_distance() {
        assert_eq!(
            PrimaryGoal::PersonalBest.target_distance_km(Some(15.0)),
            Some(15.0)
        );
        assert_eq!(PrimaryGoal::PersonalBest.target_distance_km(None), None);
        // A custom distance never overrides the standard race table
        assert_eq!(
            PrimaryGoal::Race5k.target_distance_km(Some(15.0)),
            Some(5.0)
        );
    }

    #[test]
    fn test_race_or_pr_classification() {
        assert!(PrimaryGoal::Race5k.is_race_or_pr());
        assert!(PrimaryGoal::PersonalBest.is_race_or_pr());
        assert!(!PrimaryGoal::None.is_race_or_pr());
        assert!(!PrimaryGoal::WeightLoss.is_race_or_pr());
    }

    #[test]
    fn test_unit_conversion() {
        let miles = DistanceUnit::Miles.convert_km(10.0);
        assert!((miles - 6.213_71).abs() < 1e-9);
        assert!((DistanceUnit::Kilometers.convert_km(10.0) - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_level_progress_fraction_clamps() {
        let over = LevelProgress {
            required_weeks: 8,
            completed_weeks: 12,
        };
        assert!((over.fraction() - 1.0).abs() < f64::EPSILON);

        let zero = LevelProgress {
            required_weeks: 0,
            completed_weeks: 3,
        };
        assert!((zero.fraction()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_session_type_distance_carriers() {
        assert!(SessionType::LongRun.carries_distance());
        assert!(!SessionType::FullRest.carries_distance());
        assert!(!SessionType::RestWithInjuryAdvice.carries_distance());
        assert!(!SessionType::NeedsMoreRuns.carries_distance());
    }
}
