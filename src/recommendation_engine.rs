// ABOUTME: Next-session orchestration combining gating, readiness, budget, and progression
// ABOUTME: Classifies the session type and renders the human-readable rationale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recommendation Engine
//!
//! The single entry point that turns a profile, run history, and optional
//! same-day check-in into one [`SessionRecommendation`]. Control flow:
//! minimum-run gate, injury gate (terminal), weekly load, readiness,
//! target-distance progression, session classification, explanation.
//!
//! Every decision degrades conservatively: thin history asks for more easy
//! runs, low readiness rests, and the weekly budget caps everything. The
//! engine never fails; there is no error path out of [`next_session`].
//!
//! [`next_session`]: RecommendationEngine::next_session

use crate::config::{ConfigError, EngineConfig};
use crate::injury_risk::InjuryRiskGuard;
use crate::models::{
    ExperienceLevel, RunSummary, RunnerProfile, SessionRecommendation, SessionType, TodayCheckIn,
    WeeklyStats,
};
use crate::readiness::{whole_days_between, ReadinessCalculator};
use crate::weekly_load::WeeklyLoadCalculator;
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

/// Weekly runs required before a tempo session is considered
const TEMPO_MIN_WEEK_RUNS: u32 = 2;

/// Average weekly difficulty above which tempo work is withheld
const TEMPO_MAX_AVG_DIFFICULTY: f64 = 3.5;

/// Training recommendation engine with injected configuration
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    config: EngineConfig,
    injury_guard: InjuryRiskGuard,
    weekly: WeeklyLoadCalculator,
    readiness: ReadinessCalculator,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    /// Create an engine with an overridden configuration
    ///
    /// # Errors
    /// Returns `ConfigError` when the configuration fails validation.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: EngineConfig) -> Self {
        let injury_guard = InjuryRiskGuard::new(config.safety.clone());
        let weekly = WeeklyLoadCalculator::new(config.distance.clone());
        let readiness = ReadinessCalculator::new(
            config.readiness_weights.clone(),
            config.experience_factors.clone(),
        );
        Self {
            config,
            injury_guard,
            weekly,
            readiness,
        }
    }

    /// Recommend the next training session
    ///
    /// `recent_runs` may arrive in any order; the engine sorts a working
    /// copy newest-first. A missing check-in means "no same-day signal".
    #[must_use]
    pub fn next_session(
        &self,
        profile: &RunnerProfile,
        recent_runs: &[RunSummary],
        today: Option<&TodayCheckIn>,
        now: DateTime<Utc>,
    ) -> SessionRecommendation {
        let min_runs = self.config.progression.min_runs_for_recommendations;
        if (recent_runs.len() as u32) < min_runs {
            return self.building_baseline(recent_runs.len() as u32);
        }

        let mut sorted: Vec<&RunSummary> = recent_runs.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        let Some(last_run) = sorted.first().copied() else {
            return self.building_baseline(0);
        };

        if let Some(injury_rec) = self.injury_guard.check(last_run, today) {
            return injury_rec;
        }

        let weekly_stats = self.weekly.weekly_stats(recent_runs, now);
        let readiness = self.readiness.readiness(profile, last_run, today, now);
        let days_since_last_run = whole_days_between(last_run.date, now);

        self.generate(
            profile,
            &sorted,
            &weekly_stats,
            readiness,
            days_since_last_run,
        )
    }

    /// Baseline-building message while history is too thin to personalize
    fn building_baseline(&self, runs_completed: u32) -> SessionRecommendation {
        let remaining = self
            .config
            .progression
            .min_runs_for_recommendations
            .saturating_sub(runs_completed);

        let explanation = match runs_completed {
            0 => "Welcome! Complete your first 3 runs at an easy pace so we can learn your fitness level and give you personalized recommendations.".to_owned(),
            1 => format!(
                "Great first run! Complete {remaining} more easy runs so we can personalize your training."
            ),
            2 => "One more run to go! After this, you'll unlock personalized recommendations."
                .to_owned(),
            _ => format!("Complete {remaining} more runs to unlock personalized recommendations."),
        };

        SessionRecommendation {
            session_type: SessionType::NeedsMoreRuns,
            distance_km: None,
            explanation,
            warnings: vec!["Run at a pace where you can hold a conversation".to_owned()],
        }
    }

    fn generate(
        &self,
        profile: &RunnerProfile,
        sorted_runs: &[&RunSummary],
        weekly_stats: &WeeklyStats,
        readiness: f64,
        days_since_last_run: i64,
    ) -> SessionRecommendation {
        let mut warnings = Vec::new();
        let bands = &self.config.readiness_thresholds;
        let rules = &self.config.distance;
        let is_beginner = profile.experience_level == ExperienceLevel::Beginner;

        let window = rules.recent_run_window.min(sorted_runs.len());
        let avg_recent_distance = sorted_runs
            .iter()
            .take(window)
            .map(|r| r.distance_km)
            .sum::<f64>()
            / window as f64;

        let safe_weekly_max = self.weekly.safe_weekly_max(profile, avg_recent_distance);
        let remaining_weekly_budget = WeeklyLoadCalculator::remaining_weekly_budget(
            safe_weekly_max,
            weekly_stats.total_distance_km,
        );
        let runs_remaining_this_week = profile.runs_per_week.saturating_sub(weekly_stats.run_count);

        if weekly_stats.total_distance_km > safe_weekly_max {
            warn!(
                week_total_km = weekly_stats.total_distance_km,
                safe_weekly_max, "Weekly volume exceeds the safe maximum"
            );
            warnings.push("You've exceeded your safe weekly volume".to_owned());
        }

        if readiness < bands.full_rest {
            return SessionRecommendation {
                session_type: SessionType::FullRest,
                distance_km: None,
                explanation: "Your body needs rest today. Recovery is when you get stronger!"
                    .to_owned(),
                warnings,
            };
        }

        if readiness < bands.light_activity {
            if is_beginner {
                return SessionRecommendation {
                    session_type: SessionType::StrengthAndMobility,
                    distance_km: None,
                    explanation: "Take it easy today. Light stretching or mobility work is ideal."
                        .to_owned(),
                    warnings,
                };
            }
            let distance = (avg_recent_distance * 0.5)
                .min(remaining_weekly_budget)
                .min(rules.recovery_run_cap_km)
                .max(rules.min_run_distance_km);
            return SessionRecommendation {
                session_type: SessionType::EasyRun,
                distance_km: Some(round_to_tenth(distance)),
                explanation: "A short recovery run if you feel up to it, otherwise rest."
                    .to_owned(),
                warnings,
            };
        }

        if days_since_last_run == 0 {
            return SessionRecommendation {
                session_type: SessionType::FullRest,
                distance_km: None,
                explanation: "You already ran today. Rest and recover for tomorrow!".to_owned(),
                warnings,
            };
        }

        if runs_remaining_this_week == 0 {
            return SessionRecommendation {
                session_type: SessionType::FullRest,
                distance_km: None,
                explanation: "You've hit your weekly run target. Take a rest day!".to_owned(),
                warnings,
            };
        }

        let target_distance = self.target_distance(
            profile,
            avg_recent_distance,
            remaining_weekly_budget,
            readiness,
        );

        let session_type =
            self.classify(profile, readiness, target_distance, avg_recent_distance, weekly_stats);

        debug!(
            readiness,
            target_distance,
            avg_recent_distance,
            remaining_weekly_budget,
            session_type = ?session_type,
            "Generated session recommendation"
        );

        let explanation = self.build_explanation(session_type, profile, target_distance);

        SessionRecommendation {
            session_type,
            distance_km: Some(target_distance),
            explanation,
            warnings,
        }
    }

    /// Next-session target distance in kilometers, rounded to one decimal
    ///
    /// Goal-aware progression steps toward the goal distance in phases;
    /// goal-less progression adds a flat per-level increment when readiness
    /// allows. The result is scaled by readiness and clamped by the weekly
    /// budget, the anti-spike ceiling, the beginner cap, and the floor.
    fn target_distance(
        &self,
        profile: &RunnerProfile,
        avg_recent_distance: f64,
        remaining_weekly_budget: f64,
        readiness: f64,
    ) -> f64 {
        use crate::constants::distance as d;

        let bands = &self.config.readiness_thresholds;
        let rules = &self.config.distance;
        let is_beginner = profile.experience_level == ExperienceLevel::Beginner;

        let base_distance = if let Some(goal_distance) = profile.goal_distance_km() {
            let progress = avg_recent_distance / goal_distance;
            if progress < d::GOAL_EARLY_PROGRESS {
                let increment = if is_beginner {
                    d::GOAL_EARLY_INCREMENTS_KM.0
                } else {
                    d::GOAL_EARLY_INCREMENTS_KM.1
                };
                (avg_recent_distance + increment).min(goal_distance * d::GOAL_EARLY_CAP)
            } else if progress < d::GOAL_MID_PROGRESS {
                let increment = if is_beginner {
                    d::GOAL_MID_INCREMENTS_KM.0
                } else {
                    d::GOAL_MID_INCREMENTS_KM.1
                };
                (avg_recent_distance + increment).min(goal_distance * d::GOAL_MID_CAP)
            } else {
                (avg_recent_distance * d::GOAL_LATE_GROWTH).min(goal_distance)
            }
        } else if readiness >= bands.easy_run {
            let increment = if is_beginner {
                rules.beginner_increment_km
            } else {
                rules.normal_increment_km
            };
            avg_recent_distance + increment
        } else {
            avg_recent_distance
        };

        let readiness_multiplier = if readiness >= bands.peak {
            1.1
        } else if readiness >= bands.easy_run {
            1.0
        } else if readiness >= bands.light_activity {
            0.7
        } else {
            0.5
        };

        let mut target = base_distance * readiness_multiplier;

        target = target.min(remaining_weekly_budget);

        // Hard ceiling against sudden jumps, double the weekly increase rule
        let max_safe_increase =
            avg_recent_distance * (1.0 + rules.max_weekly_increase_percent * 2.0);
        target = target.min(max_safe_increase);

        if is_beginner {
            let beginner_cap = (profile.longest_run_km * rules.beginner_longest_run_margin)
                .max(rules.beginner_cap_floor_km);
            target = target.min(beginner_cap);
        }

        target = target.max(rules.min_run_distance_km);

        round_to_tenth(target)
    }

    /// Session type from the classification ladder, first branch wins
    fn classify(
        &self,
        profile: &RunnerProfile,
        readiness: f64,
        target_distance: f64,
        avg_recent_distance: f64,
        weekly_stats: &WeeklyStats,
    ) -> SessionType {
        let bands = &self.config.readiness_thresholds;
        let is_beginner = profile.experience_level == ExperienceLevel::Beginner;

        if target_distance > avg_recent_distance * self.config.distance.long_run_margin {
            return SessionType::LongRun;
        }

        if profile.primary_goal.is_race_or_pr()
            && readiness >= bands.tempo
            && !is_beginner
            && weekly_stats.run_count >= TEMPO_MIN_WEEK_RUNS
            && weekly_stats.avg_difficulty < TEMPO_MAX_AVG_DIFFICULTY
        {
            return SessionType::TempoRun;
        }

        if readiness >= bands.normal_run {
            return SessionType::NormalRun;
        }

        SessionType::EasyRun
    }

    /// Canonical explanation per session type with interpolated numbers
    fn build_explanation(
        &self,
        session_type: SessionType,
        profile: &RunnerProfile,
        target_distance_km: f64,
    ) -> String {
        let display_distance = profile.distance_unit.convert_km(target_distance_km);
        let display = format!(
            "{display_distance:.1} {}",
            profile.distance_unit.abbreviation()
        );

        match session_type {
            SessionType::EasyRun => {
                if let Some(goal_distance) = profile.goal_distance_km() {
                    let progress = ((target_distance_km / goal_distance * 100.0) as i64).min(100);
                    format!(
                        "Easy run of {display}. You're {progress}% of the way to your {} goal distance. Keep it conversational!",
                        profile.primary_goal.display_name()
                    )
                } else {
                    format!(
                        "Easy run of {display}. Focus on keeping a comfortable pace where you can hold a conversation."
                    )
                }
            }
            SessionType::NormalRun => format!(
                "Normal run of {display}. You're feeling good today - enjoy a solid effort at your comfortable pace."
            ),
            SessionType::LongRun => format!(
                "Long run of {display}. This builds your endurance! Start slow and stay relaxed."
            ),
            SessionType::TempoRun => format!(
                "Tempo run of {display}. Push yourself to a comfortably hard pace - challenging but sustainable."
            ),
            SessionType::Intervals => {
                "Interval workout. Warm up, then alternate between hard efforts and recovery."
                    .to_owned()
            }
            SessionType::FullRest => {
                "Rest day. Your body builds fitness during recovery!".to_owned()
            }
            SessionType::StrengthAndMobility => {
                "Light stretching and mobility work today. Give your legs a break.".to_owned()
            }
            SessionType::RestWithInjuryAdvice => {
                "Rest and monitor your pain. If it persists, consider seeing a professional."
                    .to_owned()
            }
            SessionType::NeedsMoreRuns => {
                "Complete a few more runs so we can personalize your training.".to_owned()
            }
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
