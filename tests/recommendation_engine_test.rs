// ABOUTME: Integration tests for the session recommendation engine decision flow
// ABOUTME: Covers gating precedence, budget properties, scenarios, and wire-tag stability
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use stride_intelligence::models::{
    DistanceUnit, ExperienceLevel, PrimaryGoal, RunSummary, RunnerProfile, SessionType,
    TodayCheckIn,
};
use stride_intelligence::RecommendationEngine;

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-15T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn run(days_ago: i64, distance_km: f64, difficulty: u8, duration_minutes: f64) -> RunSummary {
    RunSummary {
        date: now() - Duration::days(days_ago),
        duration_minutes,
        distance_km,
        difficulty_rating: difficulty,
        pain_level: 0,
        pain_areas: Vec::new(),
    }
}

fn profile(level: ExperienceLevel) -> RunnerProfile {
    RunnerProfile {
        experience_level: level,
        runs_per_week: 3,
        typical_weekly_km: 10.0,
        ..RunnerProfile::default()
    }
}

#[test]
fn test_needs_more_runs_for_thin_history() {
    let engine = RecommendationEngine::new();
    let p = profile(ExperienceLevel::Beginner);

    for count in 0..3 {
        let runs: Vec<RunSummary> = (0..count).map(|i| run(i + 1, 3.0, 3, 20.0)).collect();
        let rec = engine.next_session(&p, &runs, None, now());
        assert_eq!(rec.session_type, SessionType::NeedsMoreRuns);
        assert!(rec.distance_km.is_none());
        assert!(!rec.warnings.is_empty());
    }
}

#[test]
fn test_critical_pain_today_overrides_everything() {
    let engine = RecommendationEngine::new();
    // Fully rested advanced runner with a race goal: everything points to
    // training hard, but today's pain wins
    let p = RunnerProfile {
        experience_level: ExperienceLevel::Advanced,
        primary_goal: PrimaryGoal::RaceMarathon,
        runs_per_week: 6,
        typical_weekly_km: 60.0,
        ..RunnerProfile::default()
    };
    let runs = vec![
        run(3, 15.0, 2, 80.0),
        run(5, 15.0, 2, 80.0),
        run(8, 15.0, 2, 80.0),
    ];
    let check_in = TodayCheckIn {
        soreness: 0,
        sleep_quality: 5,
        pain_now_level: 9,
        pain_now_areas: Vec::new(),
    };

    let rec = engine.next_session(&p, &runs, Some(&check_in), now());
    assert_eq!(rec.session_type, SessionType::RestWithInjuryAdvice);
    assert!(rec.distance_km.is_none());
}

#[test]
fn test_previous_run_pain_gates_without_todays_check_in() {
    let engine = RecommendationEngine::new();
    let p = profile(ExperienceLevel::Intermediate);
    let mut runs = vec![
        run(2, 5.0, 3, 30.0),
        run(5, 5.0, 3, 30.0),
        run(8, 5.0, 3, 30.0),
    ];
    runs[0].pain_level = 8;

    let rec = engine.next_session(&p, &runs, None, now());
    assert_eq!(rec.session_type, SessionType::RestWithInjuryAdvice);
}

#[test]
fn test_beginner_progression_scenario() {
    // Beginner, four prior runs averaging 3.0 km, readiness exactly 75,
    // no goal: target is 3.0 + 0.5 at a x1.0 multiplier
    let engine = RecommendationEngine::new();
    let p = profile(ExperienceLevel::Beginner);
    let runs = vec![
        run(4, 3.0, 1, 10.0),
        run(9, 3.0, 3, 20.0),
        run(11, 3.0, 3, 20.0),
        run(13, 3.0, 3, 20.0),
    ];

    let rec = engine.next_session(&p, &runs, None, now());
    assert_eq!(rec.session_type, SessionType::NormalRun);
    assert_eq!(rec.distance_km, Some(3.5));
    assert!(rec.explanation.contains("3.5 km"));
}

#[test]
fn test_numeric_targets_respect_floor_and_budget() {
    let engine = RecommendationEngine::new();
    let candidates = [
        profile(ExperienceLevel::Beginner),
        profile(ExperienceLevel::Intermediate),
        profile(ExperienceLevel::Advanced),
    ];
    let histories: Vec<Vec<RunSummary>> = vec![
        vec![run(1, 2.0, 2, 15.0), run(4, 2.5, 3, 18.0), run(9, 3.0, 3, 20.0)],
        vec![run(2, 6.0, 1, 12.0), run(5, 7.0, 2, 40.0), run(10, 8.0, 3, 45.0)],
        vec![
            run(3, 4.0, 2, 24.0),
            run(6, 4.0, 2, 24.0),
            run(9, 4.0, 3, 24.0),
            run(12, 4.0, 3, 24.0),
            run(15, 4.0, 4, 24.0),
        ],
    ];

    for p in &candidates {
        for runs in &histories {
            let rec = engine.next_session(p, runs, None, now());
            if let Some(distance) = rec.distance_km {
                assert!(
                    distance >= 2.0,
                    "target {distance} below floor for {:?}",
                    rec.session_type
                );
                assert!(rec.session_type.carries_distance());
            }
        }
    }
}

#[test]
fn test_rest_outputs_never_carry_distance() {
    let engine = RecommendationEngine::new();
    let p = profile(ExperienceLevel::Intermediate);

    // Weekly target met: rest
    let runs = vec![
        run(1, 5.0, 1, 20.0),
        run(3, 5.0, 1, 20.0),
        run(5, 5.0, 1, 20.0),
    ];
    let rec = engine.next_session(&p, &runs, None, now());
    assert_eq!(rec.session_type, SessionType::FullRest);
    assert!(rec.distance_km.is_none());
}

#[test]
fn test_unsorted_history_is_handled() {
    let engine = RecommendationEngine::new();
    let p = profile(ExperienceLevel::Beginner);
    // Oldest first on purpose; the engine must still find the last run
    let runs = vec![
        run(13, 3.0, 3, 20.0),
        run(11, 3.0, 3, 20.0),
        run(9, 3.0, 3, 20.0),
        run(4, 3.0, 1, 10.0),
    ];

    let rec = engine.next_session(&p, &runs, None, now());
    assert_eq!(rec.session_type, SessionType::NormalRun);
    assert_eq!(rec.distance_km, Some(3.5));
}

#[test]
fn test_goal_progress_capped_at_hundred_percent() {
    let engine = RecommendationEngine::new();
    // Personal-best goal of 2 km while averaging more: progress caps at 100
    let p = RunnerProfile {
        experience_level: ExperienceLevel::Intermediate,
        primary_goal: PrimaryGoal::PersonalBest,
        custom_goal_distance_km: Some(2.0),
        runs_per_week: 4,
        typical_weekly_km: 15.0,
        ..RunnerProfile::default()
    };
    // Readiness 50 + 2*10 - (1*10)*0.3 = 67: easy run with goal context
    let runs = vec![
        run(2, 3.0, 1, 10.0),
        run(9, 3.0, 3, 20.0),
        run(11, 3.0, 3, 20.0),
    ];

    let rec = engine.next_session(&p, &runs, None, now());
    assert_eq!(rec.session_type, SessionType::EasyRun);
    assert!(rec.explanation.contains("100%"), "{}", rec.explanation);
}

#[test]
fn test_miles_profile_renders_miles() {
    let engine = RecommendationEngine::new();
    let p = RunnerProfile {
        distance_unit: DistanceUnit::Miles,
        ..profile(ExperienceLevel::Beginner)
    };
    let runs = vec![
        run(4, 3.0, 1, 10.0),
        run(9, 3.0, 3, 20.0),
        run(11, 3.0, 3, 20.0),
        run(13, 3.0, 3, 20.0),
    ];

    let rec = engine.next_session(&p, &runs, None, now());
    assert_eq!(rec.distance_km, Some(3.5));
    assert!(rec.explanation.contains("2.2 mi"));
}

#[test]
fn test_session_type_wire_tags_are_stable() {
    let tags = [
        (SessionType::FullRest, "\"fullRest\""),
        (SessionType::EasyRun, "\"easyRun\""),
        (SessionType::NormalRun, "\"normalRun\""),
        (SessionType::LongRun, "\"longRun\""),
        (SessionType::TempoRun, "\"tempoRun\""),
        (SessionType::Intervals, "\"intervals\""),
        (SessionType::StrengthAndMobility, "\"strengthAndMobility\""),
        (SessionType::RestWithInjuryAdvice, "\"restWithInjuryAdvice\""),
        (SessionType::NeedsMoreRuns, "\"needsMoreRuns\""),
    ];

    for (session_type, expected) in tags {
        let json = serde_json::to_string(&session_type).unwrap();
        assert_eq!(json, expected);
        let back: SessionType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session_type);
    }
}

#[test]
fn test_recommendation_serializes_for_presentation() {
    let engine = RecommendationEngine::new();
    let p = profile(ExperienceLevel::Beginner);
    let runs = vec![
        run(4, 3.0, 1, 10.0),
        run(9, 3.0, 3, 20.0),
        run(11, 3.0, 3, 20.0),
        run(13, 3.0, 3, 20.0),
    ];

    let rec = engine.next_session(&p, &runs, None, now());
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["sessionType"], "normalRun");
    assert!((json["distanceKm"].as_f64().unwrap() - 3.5).abs() < 1e-9);
    assert!(json["explanation"].as_str().unwrap().contains("3.5"));
}
