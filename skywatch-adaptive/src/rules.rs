//! Difficulty transition rules: hysteresis plus the struggling override.

use crate::constants::{
    EASY_PROMOTE_ACCURACY, HARD_DEMOTE_ACCURACY, HARD_DEMOTE_STRUGGLING_ACCURACY,
    MEDIUM_DEMOTE_ACCURACY, MEDIUM_DEMOTE_STRUGGLING_ACCURACY, MEDIUM_PROMOTE_ACCURACY,
};
use crate::level::DifficultyLevel;
use crate::metrics::AggregateStats;

/// Decide the next difficulty from aggregated recent stats.
///
/// Promotion requires sustained precision; demotion bands widen when the
/// worst-performance tracker reports sustained sub-50% accuracy, giving
/// faster relief than the accuracy thresholds alone would. Any unmatched
/// condition keeps the current level. Threshold strictness (`>=` to promote,
/// `<` to demote) is part of the contract.
#[must_use]
pub fn next_level(
    stats: &AggregateStats,
    current: DifficultyLevel,
    struggling: bool,
) -> DifficultyLevel {
    let accuracy = stats.accuracy;
    match current {
        DifficultyLevel::Easy => {
            if accuracy >= EASY_PROMOTE_ACCURACY {
                DifficultyLevel::Medium
            } else {
                DifficultyLevel::Easy
            }
        }
        DifficultyLevel::Medium => {
            if accuracy >= MEDIUM_PROMOTE_ACCURACY {
                return DifficultyLevel::Hard;
            }
            if accuracy < MEDIUM_DEMOTE_ACCURACY
                || (struggling && accuracy < MEDIUM_DEMOTE_STRUGGLING_ACCURACY)
            {
                return DifficultyLevel::Easy;
            }
            DifficultyLevel::Medium
        }
        DifficultyLevel::Hard => {
            if accuracy < HARD_DEMOTE_ACCURACY
                || (struggling && accuracy < HARD_DEMOTE_STRUGGLING_ACCURACY)
            {
                DifficultyLevel::Medium
            } else {
                DifficultyLevel::Hard
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(accuracy: f64) -> AggregateStats {
        AggregateStats {
            accuracy,
            ..AggregateStats::default()
        }
    }

    #[test]
    fn easy_promotes_on_strong_accuracy() {
        assert_eq!(
            next_level(&stats(0.85), DifficultyLevel::Easy, false),
            DifficultyLevel::Medium
        );
        // Inclusive boundary.
        assert_eq!(
            next_level(&stats(0.80), DifficultyLevel::Easy, false),
            DifficultyLevel::Medium
        );
        assert_eq!(
            next_level(&stats(0.79), DifficultyLevel::Easy, false),
            DifficultyLevel::Easy
        );
    }

    #[test]
    fn easy_never_demotes() {
        assert_eq!(
            next_level(&stats(0.0), DifficultyLevel::Easy, true),
            DifficultyLevel::Easy
        );
    }

    #[test]
    fn medium_promotes_and_demotes() {
        assert_eq!(
            next_level(&stats(0.70), DifficultyLevel::Medium, false),
            DifficultyLevel::Hard
        );
        assert_eq!(
            next_level(&stats(0.25), DifficultyLevel::Medium, false),
            DifficultyLevel::Easy
        );
        // Strict demotion boundary.
        assert_eq!(
            next_level(&stats(0.30), DifficultyLevel::Medium, false),
            DifficultyLevel::Medium
        );
    }

    #[test]
    fn struggling_widens_medium_demotion() {
        assert_eq!(
            next_level(&stats(0.35), DifficultyLevel::Medium, true),
            DifficultyLevel::Easy
        );
        assert_eq!(
            next_level(&stats(0.35), DifficultyLevel::Medium, false),
            DifficultyLevel::Medium
        );
    }

    #[test]
    fn hard_holds_or_demotes() {
        assert_eq!(
            next_level(&stats(0.60), DifficultyLevel::Hard, false),
            DifficultyLevel::Hard
        );
        assert_eq!(
            next_level(&stats(0.54), DifficultyLevel::Hard, false),
            DifficultyLevel::Medium
        );
    }

    #[test]
    fn struggling_widens_hard_demotion() {
        assert_eq!(
            next_level(&stats(0.50), DifficultyLevel::Hard, true),
            DifficultyLevel::Medium
        );
        assert_eq!(
            next_level(&stats(0.60), DifficultyLevel::Hard, true),
            DifficultyLevel::Medium
        );
        // Widened boundary stays strict.
        assert_eq!(
            next_level(&stats(0.65), DifficultyLevel::Hard, true),
            DifficultyLevel::Hard
        );
    }

    #[test]
    fn hard_never_promotes() {
        assert_eq!(
            next_level(&stats(1.0), DifficultyLevel::Hard, false),
            DifficultyLevel::Hard
        );
    }
}
