// ABOUTME: Pace value type (seconds per kilometer) with ordering and plausibility checks
// ABOUTME: Derives easy/tempo/threshold/interval training bands from a baseline pace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Model and Zone Calculator
//!
//! [`Pace`] is a single non-negative scalar, seconds per kilometer, always
//! derived from a distance and duration rather than constructed freely.
//! A non-positive distance yields the zero (invalid) pace instead of a
//! fault; implausible values format as `--:--` rather than being rejected.
//! Lower values are faster, and the ordering follows that.

use crate::constants::pace_zones;
use crate::models::DistanceUnit;
use serde::{Deserialize, Serialize};

/// A running pace in seconds per kilometer. Lower is faster.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pace {
    seconds_per_km: f64,
}

impl Pace {
    /// The zero sentinel pace, reported invalid by [`Pace::is_valid`]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            seconds_per_km: 0.0,
        }
    }

    /// Build a pace directly from seconds per kilometer, clamped at zero
    #[must_use]
    pub fn from_seconds_per_km(seconds_per_km: f64) -> Self {
        Self {
            seconds_per_km: seconds_per_km.max(0.0),
        }
    }

    /// Pace over a distance in kilometers; zero pace when distance is non-positive
    #[must_use]
    pub fn from_km(distance_km: f64, duration_seconds: f64) -> Self {
        if distance_km <= 0.0 {
            return Self::zero();
        }
        Self::from_seconds_per_km(duration_seconds / distance_km)
    }

    /// Pace over a distance in meters; zero pace when distance is non-positive
    #[must_use]
    pub fn from_meters(distance_meters: f64, duration_seconds: f64) -> Self {
        Self::from_km(distance_meters / 1000.0, duration_seconds)
    }

    /// Seconds per kilometer
    #[must_use]
    pub const fn seconds_per_km(self) -> f64 {
        self.seconds_per_km
    }

    /// Seconds per mile
    #[must_use]
    pub fn seconds_per_mile(self) -> f64 {
        self.seconds_per_km * pace_zones::SECONDS_PER_MILE_FACTOR
    }

    /// Minutes per kilometer
    #[must_use]
    pub fn minutes_per_km(self) -> f64 {
        self.seconds_per_km / 60.0
    }

    /// Minutes per mile
    #[must_use]
    pub fn minutes_per_mile(self) -> f64 {
        self.seconds_per_mile() / 60.0
    }

    /// Whether this is a plausible human running pace
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.seconds_per_km >= pace_zones::MIN_PLAUSIBLE_SEC_PER_KM
            && self.seconds_per_km <= pace_zones::MAX_PLAUSIBLE_SEC_PER_KM
    }

    /// Projected time in seconds to cover a distance at this pace
    #[must_use]
    pub fn projected_time_seconds(self, distance_km: f64) -> f64 {
        self.seconds_per_km * distance_km
    }

    /// Projected distance in kilometers covered in a duration at this pace
    #[must_use]
    pub fn projected_distance_km(self, duration_seconds: f64) -> f64 {
        if self.seconds_per_km <= 0.0 {
            return 0.0;
        }
        duration_seconds / self.seconds_per_km
    }

    /// Whether this pace is faster (fewer seconds per km) than another
    #[must_use]
    pub fn is_faster_than(self, other: Self) -> bool {
        self.seconds_per_km < other.seconds_per_km
    }

    /// Percent difference from a reference pace; negative means faster
    ///
    /// Returns 0 when the reference pace is the zero sentinel.
    #[must_use]
    pub fn percent_difference_from(self, other: Self) -> f64 {
        if other.seconds_per_km <= 0.0 {
            return 0.0;
        }
        (self.seconds_per_km - other.seconds_per_km) / other.seconds_per_km * 100.0
    }

    /// Format as `M:SS` with a unit suffix; `--:--` for implausible paces
    #[must_use]
    pub fn format(self, unit: DistanceUnit) -> String {
        let suffix = match unit {
            DistanceUnit::Kilometers => "/km",
            DistanceUnit::Miles => "/mi",
        };
        format!("{}{suffix}", self.format_bare(unit))
    }

    /// Format as `M:SS` without a unit suffix; `--:--` for implausible paces
    #[must_use]
    pub fn format_bare(self, unit: DistanceUnit) -> String {
        if !self.is_valid() {
            return "--:--".to_owned();
        }
        let seconds = match unit {
            DistanceUnit::Kilometers => self.seconds_per_km,
            DistanceUnit::Miles => self.seconds_per_mile(),
        };
        let total = seconds as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

/// One training band: a fast bound and a slow bound in seconds per km
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaceBand {
    /// Faster edge of the band (fewer seconds per km)
    pub fast: Pace,
    /// Slower edge of the band
    pub slow: Pace,
}

impl PaceBand {
    /// Whether a pace falls inside the band, bounds inclusive
    #[must_use]
    pub fn contains(&self, pace: Pace) -> bool {
        pace.seconds_per_km() >= self.fast.seconds_per_km()
            && pace.seconds_per_km() <= self.slow.seconds_per_km()
    }

    /// Format as `M:SS - M:SS` in the given unit
    #[must_use]
    pub fn format(&self, unit: DistanceUnit) -> String {
        format!(
            "{} - {}",
            self.fast.format_bare(unit),
            self.slow.format_bare(unit)
        )
    }
}

/// Derives relative-effort pace bands from a baseline average pace
#[derive(Debug, Clone, Copy)]
pub struct PaceZoneCalculator {
    baseline: Pace,
}

impl PaceZoneCalculator {
    /// Create a zone calculator around a baseline pace
    #[must_use]
    pub const fn new(baseline: Pace) -> Self {
        Self { baseline }
    }

    fn band(self, multipliers: (f64, f64)) -> PaceBand {
        let (fast, slow) = multipliers;
        PaceBand {
            fast: Pace::from_seconds_per_km(self.baseline.seconds_per_km() * fast),
            slow: Pace::from_seconds_per_km(self.baseline.seconds_per_km() * slow),
        }
    }

    /// Conversational aerobic band, slower than the baseline
    #[must_use]
    pub fn easy(self) -> PaceBand {
        self.band(pace_zones::EASY_ZONE)
    }

    /// Comfortably-hard band straddling the baseline
    #[must_use]
    pub fn tempo(self) -> PaceBand {
        self.band(pace_zones::TEMPO_ZONE)
    }

    /// Sustained-effort band faster than the baseline
    #[must_use]
    pub fn threshold(self) -> PaceBand {
        self.band(pace_zones::THRESHOLD_ZONE)
    }

    /// Repetition band, fastest of the four
    #[must_use]
    pub fn interval(self) -> PaceBand {
        self.band(pace_zones::INTERVAL_ZONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_distance_yields_zero_pace() {
        let zero = Pace::from_km(0.0, 1800.0);
        assert!((zero.seconds_per_km() - 0.0).abs() < f64::EPSILON);
        assert!(!zero.is_valid());

        let negative = Pace::from_km(-5.0, 1800.0);
        assert!((negative.seconds_per_km() - 0.0).abs() < f64::EPSILON);
        assert!(!negative.is_valid());

        let meters = Pace::from_meters(0.0, 600.0);
        assert!(!meters.is_valid());
    }

    #[test]
    fn test_pace_from_distance_and_duration() {
        // 5 km in 25 minutes is 5:00/km
        let pace = Pace::from_km(5.0, 1500.0);
        assert!((pace.seconds_per_km() - 300.0).abs() < f64::EPSILON);
        assert!(pace.is_valid());
        assert!((pace.minutes_per_km() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plausibility_bounds() {
        assert!(Pace::from_seconds_per_km(120.0).is_valid());
        assert!(Pace::from_seconds_per_km(1500.0).is_valid());
        assert!(!Pace::from_seconds_per_km(119.9).is_valid());
        assert!(!Pace::from_seconds_per_km(1500.1).is_valid());
    }

    #[test]
    fn test_ordering_lower_is_faster() {
        let fast = Pace::from_seconds_per_km(240.0);
        let slow = Pace::from_seconds_per_km(360.0);
        assert!(fast < slow);
        assert!(fast.is_faster_than(slow));
        assert!(!slow.is_faster_than(fast));
    }

    #[test]
    fn test_percent_difference() {
        let baseline = Pace::from_seconds_per_km(300.0);
        let faster = Pace::from_seconds_per_km(270.0);
        let slower = Pace::from_seconds_per_km(330.0);
        assert!((faster.percent_difference_from(baseline) + 10.0).abs() < 1e-9);
        assert!((slower.percent_difference_from(baseline) - 10.0).abs() < 1e-9);
        assert!((faster.percent_difference_from(Pace::zero())).abs() < f64::EPSILON);
    }

    #[test]
    fn test_projections() {
        let pace = Pace::from_seconds_per_km(300.0);
        assert!((pace.projected_time_seconds(10.0) - 3000.0).abs() < f64::EPSILON);
        assert!((pace.projected_distance_km(1500.0) - 5.0).abs() < f64::EPSILON);
        assert!((Pace::zero().projected_distance_km(1500.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_formatting() {
        let pace = Pace::from_seconds_per_km(305.0);
        assert_eq!(pace.format(DistanceUnit::Kilometers), "5:05/km");
        assert_eq!(pace.format_bare(DistanceUnit::Kilometers), "5:05");
        // 305 * 1.60934 = 490.8 -> 8:10/mi
        assert_eq!(pace.format(DistanceUnit::Miles), "8:10/mi");
        assert_eq!(Pace::zero().format(DistanceUnit::Kilometers), "--:--/km");
    }

    #[test]
    fn test_zone_bands_from_baseline() {
        let calculator = PaceZoneCalculator::new(Pace::from_seconds_per_km(300.0));

        let easy = calculator.easy();
        assert!((easy.fast.seconds_per_km() - 315.0).abs() < 1e-9);
        assert!((easy.slow.seconds_per_km() - 345.0).abs() < 1e-9);

        let tempo = calculator.tempo();
        assert!((tempo.fast.seconds_per_km() - 285.0).abs() < 1e-9);
        assert!((tempo.slow.seconds_per_km() - 315.0).abs() < 1e-9);

        let threshold = calculator.threshold();
        assert!((threshold.fast.seconds_per_km() - 270.0).abs() < 1e-9);
        assert!((threshold.slow.seconds_per_km() - 285.0).abs() < 1e-9);

        let interval = calculator.interval();
        assert!((interval.fast.seconds_per_km() - 255.0).abs() < 1e-9);
        assert!((interval.slow.seconds_per_km() - 270.0).abs() < 1e-9);

        assert!(tempo.contains(Pace::from_seconds_per_km(300.0)));
        assert!(!interval.contains(Pace::from_seconds_per_km(300.0)));
    }

    #[test]
    fn test_band_formatting() {
        let calculator = PaceZoneCalculator::new(Pace::from_seconds_per_km(300.0));
        assert_eq!(
            calculator.easy().format(DistanceUnit::Kilometers),
            "5:15 - 5:45"
        );
    }
}
