//! Centralized tuning constants for the adaptive difficulty core.
//!
//! These values define the deterministic math for difficulty evaluation.
//! Keeping them together ensures the adaptation curve can only be adjusted
//! via code changes reviewed in version control, rather than through
//! external assets or runtime configuration.

// Bounded-structure capacities ---------------------------------------------
/// Samples retained in the sliding window.
pub const SAMPLE_WINDOW_CAPACITY: usize = 15;
/// Worst badness observations retained for the struggle signal.
pub const WORST_TRACKER_CAPACITY: usize = 10;
/// Difficulty transitions retained for undo.
pub const HISTORY_CAPACITY: usize = 30;

// Evaluation windowing -----------------------------------------------------
/// How many of the newest window entries feed each difficulty decision.
/// Recent regressions must dominate the decision instead of being diluted
/// by the full window.
pub const EVALUATION_SLICE: usize = 5;

// Promotion thresholds -----------------------------------------------------
pub(crate) const EASY_PROMOTE_ACCURACY: f64 = 0.80;
pub(crate) const MEDIUM_PROMOTE_ACCURACY: f64 = 0.70;

// Demotion thresholds ------------------------------------------------------
pub(crate) const MEDIUM_DEMOTE_ACCURACY: f64 = 0.30;
pub(crate) const MEDIUM_DEMOTE_STRUGGLING_ACCURACY: f64 = 0.40;
pub(crate) const HARD_DEMOTE_ACCURACY: f64 = 0.55;
pub(crate) const HARD_DEMOTE_STRUGGLING_ACCURACY: f64 = 0.65;

// Struggling signal --------------------------------------------------------
pub(crate) const STRUGGLING_MIN_OBSERVATIONS: usize = 3;
pub(crate) const STRUGGLING_BADNESS_FLOOR: f64 = 0.5;

// Archive scoring ----------------------------------------------------------
pub(crate) const SCORE_KILL_WEIGHT: i32 = 10;
pub(crate) const SCORE_BYPASS_PENALTY: i32 = 5;
pub(crate) const SCORE_ACCURACY_SCALE: f64 = 100.0;
