// ABOUTME: Strict parsing helpers for the profile and run entry surfaces
// ABOUTME: Rejects malformed or implausible input instead of silently coercing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Entry-surface validation
//!
//! The engine assumes already-validated inputs; these helpers are what the
//! entry surfaces use to produce them. Every function rejects (`None`)
//! rather than clamping or defaulting, so a typo never turns into a
//! plausible-looking record downstream.

use crate::constants::{distance, safety};
use crate::models::DistanceUnit;

/// Parse a distance entry into kilometers
///
/// Accepts a comma as the decimal separator. Rejects empty input,
/// non-numeric input, negatives, and anything above the plausibility bound.
#[must_use]
pub fn parse_distance_km(text: &str, unit: DistanceUnit) -> Option<f64> {
    let cleaned = text.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;

    let value_km = match unit {
        DistanceUnit::Kilometers => value,
        DistanceUnit::Miles => value / distance::MILES_PER_KM,
    };

    if !value_km.is_finite() || value_km < 0.0 || value_km > safety::MAX_REASONABLE_DISTANCE_KM {
        return None;
    }
    Some(value_km)
}

/// Parse a weekly volume entry into kilometers, with the tighter weekly bound
#[must_use]
pub fn parse_weekly_volume_km(text: &str, unit: DistanceUnit) -> Option<f64> {
    let value_km = parse_distance_km(text, unit)?;
    if value_km > safety::MAX_REASONABLE_WEEKLY_KM {
        return None;
    }
    Some(value_km)
}

/// Parse an `MM:SS` duration entry into minutes
///
/// Minutes must be below 1000 and seconds below 60.
#[must_use]
pub fn parse_duration_minutes(text: &str) -> Option<f64> {
    let mut parts = text.trim().split(':');
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    if minutes >= 1000 || seconds >= 60 {
        return None;
    }
    Some(f64::from(minutes) + f64::from(seconds) / 60.0)
}

/// Normalize a display name: trimmed, non-empty, at most 50 characters
#[must_use]
pub fn normalize_display_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 50 {
        return None;
    }
    Some(trimmed.to_owned())
}
