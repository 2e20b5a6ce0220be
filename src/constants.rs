// ABOUTME: Canonical constants for readiness scoring, safety gating, and progression
// ABOUTME: Single source for the tuned thresholds the default engine configuration carries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Canonical threshold, weight, and window constants.
//!
//! These are the tuned values behind [`crate::config::EngineConfig::default`].
//! Production code reads them through the injected configuration; the
//! constants exist so defaults and tests share one source of truth.

/// Readiness score anchors and factor weights
pub mod readiness {
    /// Neutral starting score before bonuses and penalties
    pub const BASELINE: f64 = 50.0;

    /// Points gained per full rest day since the last run
    pub const REST_DAY_BONUS: f64 = 10.0;

    /// Penalty per point of same-day soreness (0-10 scale)
    pub const SORENESS_IMPACT: f64 = 2.0;

    /// Bonus per point of sleep quality (1-5 scale)
    pub const SLEEP_QUALITY_BONUS: f64 = 3.0;

    /// Penalty per point of current pain (0-10 scale)
    pub const PAIN_IMPACT: f64 = 3.0;

    /// Factor applied to last-session load (difficulty x duration minutes)
    pub const SESSION_LOAD_FACTOR: f64 = 0.3;

    /// Factor applied to the last-run pain penalty
    pub const PAIN_PENALTY_FACTOR: f64 = 0.5;

    /// Multiplier on the pain level to form the raw pain penalty
    pub const PAIN_PENALTY_PER_POINT: f64 = 5.0;

    /// Below this score: complete rest day
    pub const FULL_REST_THRESHOLD: f64 = 20.0;

    /// Below this score: light activity only (easy run for non-beginners)
    pub const LIGHT_ACTIVITY_THRESHOLD: f64 = 40.0;

    /// At or above this score: ready for a progression increment
    pub const EASY_RUN_THRESHOLD: f64 = 60.0;

    /// At or above this score: normal run rather than easy run
    pub const NORMAL_RUN_THRESHOLD: f64 = 70.0;

    /// Minimum score for a tempo session to be considered
    pub const TEMPO_THRESHOLD: f64 = 75.0;

    /// At or above this score the distance multiplier rewards freshness
    pub const PEAK_THRESHOLD: f64 = 80.0;
}

/// Recovery-rate multipliers by experience level
pub mod experience {
    /// Beginners recover more slowly
    pub const BEGINNER_FACTOR: f64 = 0.7;

    /// Intermediate runners are the baseline
    pub const INTERMEDIATE_FACTOR: f64 = 1.0;

    /// Advanced runners recover faster
    pub const ADVANCED_FACTOR: f64 = 1.3;
}

/// Pain gating and input plausibility bounds
pub mod safety {
    /// Pain level that triggers complete rest and medical caution
    pub const CRITICAL_PAIN: u8 = 8;

    /// Pain level that triggers caution in high-risk body areas
    pub const MODERATE_PAIN: u8 = 6;

    /// Post-run pain level flagged for follow-up concern
    ///
    /// Defined for the check-in surface; no decision rule consumes it yet.
    pub const POST_RUN_PAIN_CONCERN: u8 = 6;

    /// Body areas where moderate pain already warrants rest
    pub const HIGH_RISK_AREAS: [&str; 3] = ["Knees", "Shins", "Achilles"];

    /// Upper plausibility bound for a single distance entry (km)
    pub const MAX_REASONABLE_DISTANCE_KM: f64 = 500.0;

    /// Upper plausibility bound for a weekly volume entry (km)
    pub const MAX_REASONABLE_WEEKLY_KM: f64 = 300.0;
}

/// Distance progression increments and clamps
pub mod distance {
    /// Kilometers per statute mile conversion divisor, as displayed
    pub const MILES_PER_KM: f64 = 0.621_371;

    /// Goal-less progression increment for beginners (km)
    pub const BEGINNER_INCREMENT_KM: f64 = 0.5;

    /// Goal-less progression increment for everyone else (km)
    pub const NORMAL_INCREMENT_KM: f64 = 1.0;

    /// Minimum safe distance for any prescribed run (km)
    pub const MIN_RUN_DISTANCE_KM: f64 = 2.0;

    /// Weekly increase fraction behind the anti-spike ceiling (10% rule)
    pub const MAX_WEEKLY_INCREASE_PERCENT: f64 = 0.10;

    /// Safe weekly volume as a multiple of typical historical volume
    pub const SAFE_WEEKLY_VOLUME_MULTIPLIER: f64 = 1.5;

    /// Margin over recent-average x runs-per-week in the safe weekly max
    pub const WEEKLY_FREQUENCY_MARGIN: f64 = 1.1;

    /// Runs averaged to form the recent-distance baseline
    pub const RECENT_RUN_WINDOW: usize = 5;

    /// Cap on a short recovery run when readiness is low (km)
    pub const RECOVERY_RUN_CAP_KM: f64 = 4.0;

    /// Beginner long-run cap floor when no long run is on record (km)
    pub const BEGINNER_CAP_FLOOR_KM: f64 = 5.0;

    /// Beginner cap margin over the longest recorded run
    pub const BEGINNER_LONGEST_RUN_MARGIN: f64 = 1.1;

    /// Goal progress fraction below which the small increment applies
    pub const GOAL_EARLY_PROGRESS: f64 = 0.5;

    /// Goal progress fraction below which the larger increment applies
    pub const GOAL_MID_PROGRESS: f64 = 0.8;

    /// Early-phase increments toward a goal (beginner, other) in km
    pub const GOAL_EARLY_INCREMENTS_KM: (f64, f64) = (0.3, 0.5);

    /// Mid-phase increments toward a goal (beginner, other) in km
    pub const GOAL_MID_INCREMENTS_KM: (f64, f64) = (0.5, 0.8);

    /// Early-phase cap as a fraction of the goal distance
    pub const GOAL_EARLY_CAP: f64 = 0.6;

    /// Mid-phase cap as a fraction of the goal distance
    pub const GOAL_MID_CAP: f64 = 0.9;

    /// Late-phase growth multiplier once progress is near the goal
    pub const GOAL_LATE_GROWTH: f64 = 1.05;

    /// Long-run classification margin over the recent average
    pub const LONG_RUN_MARGIN: f64 = 1.2;
}

/// Baseline-building and auto-upgrade rules
pub mod progression {
    /// Runs required before personalized recommendations unlock
    pub const MIN_RUNS_FOR_RECOMMENDATIONS: u32 = 3;

    /// Runs required before auto-upgrade is considered
    pub const AUTO_UPGRADE_MIN_RUNS: usize = 5;

    /// History span required for auto-upgrade consideration (days)
    pub const AUTO_UPGRADE_MIN_DAYS: i64 = 60;

    /// Latest-vs-earliest distance ratio required for auto-upgrade
    pub const AUTO_UPGRADE_DISTANCE_MULTIPLIER: f64 = 2.5;

    /// Consistent weeks required to progress from beginner to intermediate
    pub const WEEKS_TO_INTERMEDIATE: u32 = 8;
}

/// Pace plausibility bounds and training-zone offsets
pub mod pace_zones {
    /// Fastest plausible sustained human running pace (seconds per km)
    pub const MIN_PLAUSIBLE_SEC_PER_KM: f64 = 120.0;

    /// Slowest pace still treated as running (seconds per km)
    pub const MAX_PLAUSIBLE_SEC_PER_KM: f64 = 1500.0;

    /// Seconds-per-mile per seconds-per-km conversion factor
    pub const SECONDS_PER_MILE_FACTOR: f64 = 1.609_34;

    /// Easy zone multipliers over the baseline (fast end, slow end)
    pub const EASY_ZONE: (f64, f64) = (1.05, 1.15);

    /// Tempo zone multipliers over the baseline (fast end, slow end)
    pub const TEMPO_ZONE: (f64, f64) = (0.95, 1.05);

    /// Threshold zone multipliers over the baseline (fast end, slow end)
    pub const THRESHOLD_ZONE: (f64, f64) = (0.90, 0.95);

    /// Interval zone multipliers over the baseline (fast end, slow end)
    pub const INTERVAL_ZONE: (f64, f64) = (0.85, 0.90);
}

/// Relative-effort classification windows and thresholds
pub mod relative_pace {
    /// Trailing window for the personal baseline pace (weeks)
    pub const BASELINE_WINDOW_WEEKS: i64 = 8;

    /// Runs required before a baseline pace exists
    pub const MIN_RUNS_FOR_BASELINE: usize = 3;

    /// Percent difference below which a run is very fast
    pub const VERY_FAST_PERCENT: f64 = -15.0;

    /// Percent difference below which a run is fast
    pub const FAST_PERCENT: f64 = -5.0;

    /// Percent difference up to which a run is normal
    pub const NORMAL_PERCENT: f64 = 5.0;

    /// Percent difference up to which a run is easy; beyond is recovery
    pub const EASY_PERCENT: f64 = 15.0;

    /// Pain level at which encouragement defers to rest advice
    pub const PAIN_OVERRIDE_LEVEL: u8 = 6;

    /// Runs required before long-term improvement is measured
    pub const MIN_RUNS_FOR_UPGRADE_SUGGESTION: usize = 10;

    /// Runs in each comparison half when measuring improvement
    pub const UPGRADE_COMPARISON_RUNS: usize = 5;

    /// Pace improvement (percent, faster is negative) that suggests a level up
    pub const UPGRADE_IMPROVEMENT_PERCENT: f64 = -10.0;
}
