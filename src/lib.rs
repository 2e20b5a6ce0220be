// ABOUTME: Library entry point for the stride training-intelligence engine
// ABOUTME: Re-exports the recommendation engine, calculators, and core data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Intelligence
//!
//! A pure decision engine that advises an endurance-training runner what to
//! do in their next session, given their profile, recent run history, and an
//! optional same-day check-in.
//!
//! The crate owns the algorithmic core only: readiness scoring, injury-risk
//! gating, weekly-load accounting, target-distance progression, session-type
//! classification, and pace-relative feedback analysis. Authentication,
//! persistence, live tracking, and presentation are external collaborators —
//! the engine receives already-validated in-memory snapshots and returns
//! structured results. It performs no I/O and keeps no state beyond the
//! immutable configuration injected at construction.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use stride_intelligence::models::{RunnerProfile, RunSummary};
//! use stride_intelligence::recommendation_engine::RecommendationEngine;
//!
//! let engine = RecommendationEngine::new();
//! let profile = RunnerProfile::default();
//! let runs: Vec<RunSummary> = Vec::new();
//!
//! let recommendation = engine.next_session(&profile, &runs, None, Utc::now());
//! println!("{}", recommendation.explanation);
//! ```
//!
//! Every entry point takes `now` explicitly so that results are a
//! deterministic function of their inputs; callers pass `Utc::now()` in
//! production and a fixed timestamp in tests.

/// Engine configuration structures and validation
pub mod config;
/// Canonical threshold, weight, and window constants
pub mod constants;
/// Pre-session injury risk gating
pub mod injury_risk;
/// Core data models shared across the engine
pub mod models;
/// Pace value type and training pace zones
pub mod pace;
/// Consistency progress and experience auto-upgrade evaluation
pub mod progression;
/// Session readiness scoring
pub mod readiness;
/// Next-session orchestration, distance progression, and classification
pub mod recommendation_engine;
/// Run pace classification against a personal baseline
pub mod relative_pace;
/// Strict parsing helpers for profile and run entry surfaces
pub mod validation;
/// Rolling weekly volume statistics and safe-maximum accounting
pub mod weekly_load;

pub use config::{ConfigError, EngineConfig};
pub use injury_risk::InjuryRiskGuard;
pub use models::{
    DistanceUnit, ExperienceLevel, LevelProgress, PrimaryGoal, RunSummary, RunnerProfile,
    SessionRecommendation, SessionType, TodayCheckIn, WeeklyStats,
};
pub use pace::{Pace, PaceBand, PaceZoneCalculator};
pub use progression::{consistency_progress, PendingUpgrade, UpgradeEvaluator};
pub use readiness::ReadinessCalculator;
pub use recommendation_engine::RecommendationEngine;
pub use relative_pace::{RelativePaceAnalyzer, RelativePaceCategory};
pub use weekly_load::WeeklyLoadCalculator;
