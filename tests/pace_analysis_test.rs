// ABOUTME: Integration tests for the pace model, training zones, and relative analysis
// ABOUTME: Covers pace validity, zone bands, category boundaries, and upgrade detection
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use stride_intelligence::models::{DistanceUnit, RunSummary};
use stride_intelligence::{Pace, PaceZoneCalculator, RelativePaceAnalyzer, RelativePaceCategory};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-15T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn run(days_ago: i64, distance_km: f64, duration_minutes: f64) -> RunSummary {
    RunSummary {
        date: now() - Duration::days(days_ago),
        duration_minutes,
        distance_km,
        difficulty_rating: 3,
        pain_level: 0,
        pain_areas: Vec::new(),
    }
}

#[test]
fn test_invalid_pace_from_bad_distance_formats_as_unknown() {
    let pace = Pace::from_km(0.0, 1800.0);
    assert!(!pace.is_valid());
    assert!((pace.seconds_per_km()).abs() < f64::EPSILON);
    assert_eq!(pace.format(DistanceUnit::Kilometers), "--:--/km");
    assert_eq!(pace.format(DistanceUnit::Miles), "--:--/mi");
}

#[test]
fn test_run_summary_pace_derivation() {
    let r = run(1, 5.0, 25.0);
    let pace = r.pace();
    assert!(pace.is_valid());
    assert!((pace.seconds_per_km() - 300.0).abs() < f64::EPSILON);
    assert_eq!(pace.format(DistanceUnit::Kilometers), "5:00/km");
}

#[test]
fn test_zone_bands_nest_around_baseline() {
    let baseline = Pace::from_seconds_per_km(330.0);
    let zones = PaceZoneCalculator::new(baseline);

    // Easy is the slowest band, interval the fastest; tempo straddles
    assert!(zones.easy().slow.seconds_per_km() > zones.tempo().slow.seconds_per_km());
    assert!(zones.interval().fast.seconds_per_km() < zones.threshold().fast.seconds_per_km());
    assert!(zones.tempo().contains(baseline));
    assert!(!zones.easy().contains(zones.interval().fast));
}

#[test]
fn test_baseline_pace_weighted_over_eight_weeks() {
    let analyzer = RelativePaceAnalyzer::new();
    // 5 km at 25 min, 10 km at 60 min, 5 km at 35 min inside the window,
    // plus an old run far outside it that would skew the mean if counted
    let runs = vec![
        run(3, 5.0, 25.0),
        run(10, 10.0, 60.0),
        run(20, 5.0, 35.0),
        run(90, 20.0, 200.0),
    ];

    let baseline = analyzer.average_pace(&runs, now()).unwrap();
    // 20 km in 120 min -> 360 s/km
    assert!((baseline.seconds_per_km() - 360.0).abs() < 1e-9);
}

#[test]
fn test_category_boundaries_partition_without_gaps() {
    assert_eq!(
        RelativePaceAnalyzer::categorize_percent(-15.0),
        RelativePaceCategory::Fast
    );
    assert_eq!(
        RelativePaceAnalyzer::categorize_percent(5.0),
        RelativePaceCategory::Normal
    );
    assert_eq!(
        RelativePaceAnalyzer::categorize_percent(-5.0),
        RelativePaceCategory::Normal
    );
    assert_eq!(
        RelativePaceAnalyzer::categorize_percent(15.0),
        RelativePaceCategory::Recovery
    );
}

#[test]
fn test_upgrade_scenario_sixteen_percent_improvement() {
    let analyzer = RelativePaceAnalyzer::new();
    // First five at 360 s/km (5 km in 30 min), last five at 300 s/km
    let mut runs = Vec::new();
    for i in 0..5 {
        runs.push(run(120 - i, 5.0, 30.0));
    }
    for i in 0..5 {
        runs.push(run(12 - i, 5.0, 25.0));
    }

    assert!(analyzer.should_suggest_upgrade(&runs));
}

#[test]
fn test_upgrade_not_suggested_when_pace_regresses() {
    let analyzer = RelativePaceAnalyzer::new();
    let mut runs = Vec::new();
    for i in 0..5 {
        runs.push(run(120 - i, 5.0, 25.0));
    }
    for i in 0..5 {
        runs.push(run(12 - i, 5.0, 30.0));
    }

    assert!(!analyzer.should_suggest_upgrade(&runs));
}

#[test]
fn test_encouragement_pain_override_beats_category() {
    for category in [
        RelativePaceCategory::VeryFast,
        RelativePaceCategory::Fast,
        RelativePaceCategory::Normal,
        RelativePaceCategory::Easy,
        RelativePaceCategory::Recovery,
    ] {
        let message = RelativePaceAnalyzer::encouragement(category, Some(3), Some(6));
        assert!(message.contains("Listen to your body"));
    }
}
