// ABOUTME: Pre-recommendation injury gate that short-circuits to rest advice
// ABOUTME: Ordered pain rules over the same-day check-in and the most recent run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Injury Risk Guard
//!
//! Runs before any training suggestion is computed. When a rule matches,
//! the guard returns a terminal rest recommendation and nothing further is
//! evaluated for the invocation. Rules are ordered and the first match wins:
//! critical pain right now, moderate pain in a high-risk body area, then
//! critical pain recorded on the most recent run. Without a check-in the
//! same-day rules are skipped entirely rather than evaluated with defaults.

use crate::config::SafetyThresholds;
use crate::models::{RunSummary, SessionRecommendation, SessionType, TodayCheckIn};
use tracing::warn;

/// Gating check for injury risk ahead of any recommendation
#[derive(Debug, Clone)]
pub struct InjuryRiskGuard {
    safety: SafetyThresholds,
}

impl Default for InjuryRiskGuard {
    fn default() -> Self {
        Self::new(SafetyThresholds::default())
    }
}

impl InjuryRiskGuard {
    /// Create a guard with the given safety thresholds
    #[must_use]
    pub const fn new(safety: SafetyThresholds) -> Self {
        Self { safety }
    }

    /// Check for an injury-risk override
    ///
    /// Returns `None` when no rule applies; otherwise a terminal
    /// rest-with-injury-advice recommendation that callers must surface
    /// without computing anything further.
    #[must_use]
    pub fn check(
        &self,
        last_run: &RunSummary,
        today: Option<&TodayCheckIn>,
    ) -> Option<SessionRecommendation> {
        if let Some(check_in) = today {
            if check_in.pain_now_level >= self.safety.critical_pain {
                warn!(
                    pain_now_level = check_in.pain_now_level,
                    "Critical pain reported today, gating to rest"
                );
                return Some(SessionRecommendation {
                    session_type: SessionType::RestWithInjuryAdvice,
                    distance_km: None,
                    explanation: "You reported significant pain. Rest today and consider seeing a doctor if pain persists.".to_owned(),
                    warnings: vec!["High pain level - do not run".to_owned()],
                });
            }

            if check_in.pain_now_level >= self.safety.moderate_pain
                && self.safety.any_high_risk(&check_in.pain_now_areas)
            {
                warn!(
                    pain_now_level = check_in.pain_now_level,
                    areas = ?check_in.pain_now_areas,
                    "Moderate pain in high-risk area, gating to rest"
                );
                return Some(SessionRecommendation {
                    session_type: SessionType::RestWithInjuryAdvice,
                    distance_km: None,
                    explanation: "You have pain in a high-risk area. Rest today to prevent injury."
                        .to_owned(),
                    warnings: vec!["Pain in critical area - rest recommended".to_owned()],
                });
            }
        }

        if last_run.pain_level >= self.safety.critical_pain {
            warn!(
                pain_level = last_run.pain_level,
                "Previous run recorded critical pain, gating to rest"
            );
            return Some(SessionRecommendation {
                session_type: SessionType::RestWithInjuryAdvice,
                distance_km: None,
                explanation:
                    "Your last run caused significant pain. Take a rest day and monitor how you feel."
                        .to_owned(),
                warnings: vec!["Previous run caused pain".to_owned()],
            });
        }

        None
    }
}
