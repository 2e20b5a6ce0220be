// ABOUTME: Integration tests for consistency progress and the auto-upgrade lifecycle
// ABOUTME: Exercises the four-condition matrix and the pending-state transitions end to end
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, Utc};
use stride_intelligence::models::{ExperienceLevel, RunSummary, RunnerProfile};
use stride_intelligence::progression::consistency_progress;
use stride_intelligence::{PendingUpgrade, UpgradeEvaluator};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-15T08:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn run(days_ago: i64, distance_km: f64) -> RunSummary {
    RunSummary {
        date: now() - Duration::days(days_ago),
        duration_minutes: distance_km * 6.5,
        distance_km,
        difficulty_rating: 3,
        pain_level: 0,
        pain_areas: Vec::new(),
    }
}

fn beginner() -> RunnerProfile {
    RunnerProfile::default()
}

/// Five runs over 90 days tripling in distance: every condition satisfied
fn qualifying() -> Vec<RunSummary> {
    vec![
        run(90, 2.0),
        run(65, 2.5),
        run(45, 3.5),
        run(20, 4.5),
        run(2, 6.0),
    ]
}

#[test]
fn test_consistency_progress_for_weekly_runner() {
    // One run per week for four weeks inside an eight-week goal
    let runs = vec![run(2, 5.0), run(9, 5.0), run(16, 5.0), run(23, 5.0)];
    let progress = consistency_progress(&runs, 8, now());
    assert_eq!(progress.required_weeks, 8);
    assert_eq!(progress.completed_weeks, 4);
    assert!((progress.fraction() - 0.5).abs() < 1e-9);
}

#[test]
fn test_consistency_multiple_runs_one_week_count_once() {
    let runs = vec![run(1, 3.0), run(2, 3.0), run(3, 3.0)];
    let progress = consistency_progress(&runs, 8, now());
    assert_eq!(progress.completed_weeks, 1);
}

#[test]
fn test_upgrade_matrix() {
    // All four conditions hold
    let mut evaluator = UpgradeEvaluator::default();
    assert_eq!(
        evaluator.evaluate(&beginner(), &qualifying()),
        PendingUpgrade::Pending(ExperienceLevel::Intermediate)
    );

    // Not a beginner
    let mut evaluator = UpgradeEvaluator::default();
    let advanced = RunnerProfile {
        experience_level: ExperienceLevel::Advanced,
        ..RunnerProfile::default()
    };
    assert_eq!(
        evaluator.evaluate(&advanced, &qualifying()),
        PendingUpgrade::None
    );

    // Too few runs
    let mut evaluator = UpgradeEvaluator::default();
    let mut four = qualifying();
    four.remove(0);
    assert_eq!(evaluator.evaluate(&beginner(), &four), PendingUpgrade::None);

    // Span under 60 days
    let mut evaluator = UpgradeEvaluator::default();
    let compressed = vec![
        run(55, 2.0),
        run(40, 2.5),
        run(30, 3.5),
        run(15, 4.5),
        run(2, 6.0),
    ];
    assert_eq!(
        evaluator.evaluate(&beginner(), &compressed),
        PendingUpgrade::None
    );

    // Distance growth under 2.5x
    let mut evaluator = UpgradeEvaluator::default();
    let flat = vec![
        run(90, 3.0),
        run(65, 3.0),
        run(45, 3.5),
        run(20, 4.0),
        run(2, 5.0),
    ];
    assert_eq!(evaluator.evaluate(&beginner(), &flat), PendingUpgrade::None);
}

#[test]
fn test_accept_then_dismiss_lifecycle() {
    let mut evaluator = UpgradeEvaluator::default();
    evaluator.evaluate(&beginner(), &qualifying());
    assert_eq!(
        evaluator.pending(),
        PendingUpgrade::Pending(ExperienceLevel::Intermediate)
    );

    let promoted = evaluator.accept();
    assert_eq!(promoted, Some(ExperienceLevel::Intermediate));
    assert_eq!(evaluator.pending(), PendingUpgrade::None);

    // Dismiss after accept is a safe no-op
    evaluator.dismiss();
    assert_eq!(evaluator.pending(), PendingUpgrade::None);
}

#[test]
fn test_last_writer_wins_between_transitions() {
    let mut evaluator = UpgradeEvaluator::default();
    evaluator.evaluate(&beginner(), &qualifying());

    // A dismiss followed by a re-evaluation leaves the suggestion pending;
    // the reverse order leaves it cleared. Either order is deterministic.
    evaluator.dismiss();
    evaluator.evaluate(&beginner(), &qualifying());
    assert_eq!(
        evaluator.pending(),
        PendingUpgrade::Pending(ExperienceLevel::Intermediate)
    );

    evaluator.evaluate(&beginner(), &qualifying());
    evaluator.dismiss();
    assert_eq!(evaluator.pending(), PendingUpgrade::None);
}
