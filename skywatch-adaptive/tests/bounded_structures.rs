//! Long-run bounds on every internal structure, driven through the engine
//! and directly against the structures themselves.

use skywatch_adaptive::{
    AdaptiveEngine, DifficultyHistory, DifficultyLevel, PerformanceSample, SampleWindow,
    ScoreArchive, WorstTracker, aggregate, rank_by_goodness,
};

#[test]
fn window_never_exceeds_capacity_and_keeps_push_order() {
    let mut window = SampleWindow::new();
    for delta in 0..100 {
        window.push(PerformanceSample::new(2, 5, 0, delta));
    }
    assert_eq!(window.len(), 15);
    let deltas: Vec<i32> = window.snapshot().iter().map(|s| s.score_delta).collect();
    let expected: Vec<i32> = (85..100).collect();
    assert_eq!(deltas, expected);
}

#[test]
fn tracker_retains_the_true_worst_ten() {
    let mut tracker = WorstTracker::new();
    // Observe badness 0.01 * k for k in a scrambled 1..=60.
    let mut order: Vec<u32> = (1..=60).collect();
    order.rotate_left(23);
    order.swap(5, 40);
    for k in order {
        tracker.observe(f64::from(k) * 0.01);
    }
    assert_eq!(tracker.len(), 10);
    // Worst ten are 0.51..=0.60, so the retained minimum is 0.51.
    let min = tracker.worst_min().unwrap();
    assert!((min - 0.51).abs() < 1e-9, "min {min}");
    assert!(tracker.struggling());
}

#[test]
fn history_stays_within_bounds_through_churn() {
    let mut history = DifficultyHistory::new();
    for i in 0..200 {
        let level = match i % 3 {
            0 => DifficultyLevel::Easy,
            1 => DifficultyLevel::Medium,
            _ => DifficultyLevel::Hard,
        };
        history.push(level);
        assert!((1..=30).contains(&history.len()));
    }
    for _ in 0..200 {
        history.undo();
        assert!(!history.is_empty());
    }
    assert_eq!(history.current(), DifficultyLevel::Easy);
}

#[test]
fn archive_stays_logarithmic_under_adversarial_order() {
    let mut archive = ScoreArchive::new();
    for score in 0..2_048 {
        archive.record(score);
    }
    for score in (-2_048..0).rev() {
        archive.record(score);
    }
    assert_eq!(archive.len(), 4_096);
    // 1.44 * log2(4096) ~= 17.3.
    assert!(archive.height() <= 18, "height {}", archive.height());
    let scores = archive.ascending();
    assert!(scores.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn goodness_ranking_is_deterministic_for_equal_scores() {
    // Four distinct samples engineered onto two score values.
    let a = PerformanceSample::new(0, 0, 0, 70);
    let b = PerformanceSample::new(1, 2, 0, 10); // 10 + 10 + 50 = 70
    let c = PerformanceSample::new(0, 0, 0, 5);
    let d = PerformanceSample::new(0, 5, 1, 10); // 0 + 10 + 0 - 5 = 5
    let ranked = rank_by_goodness(&[a, c, b, d]);
    assert_eq!(ranked, vec![c, d, a, b]);
}

#[test]
fn engine_structures_stay_bounded_over_a_long_session() {
    let mut engine = AdaptiveEngine::new();
    for i in 0..500u32 {
        let kills = i % 10;
        let sample = PerformanceSample::new(kills, 10, i % 3, 4);
        engine.evaluate(sample);
    }
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.window_len, 15);
    assert!((1..=30).contains(&snapshot.history_depth));
    assert_eq!(snapshot.archive.unwrap().count, 500);
}

#[test]
fn empty_aggregate_matches_engine_boundary_behavior() {
    let stats = aggregate(&[]);
    assert_eq!(stats.kills, 0);
    assert_eq!(stats.shots, 0);
    assert!((stats.accuracy - 0.0).abs() < f64::EPSILON);
}
