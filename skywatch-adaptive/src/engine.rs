//! Orchestrator owning the bounded structures and the evaluation cadence.
//!
//! One engine lives per game session. The gameplay loop calls
//! [`AdaptiveEngine::evaluate`] (or [`AdaptiveEngine::evaluate_batch`]) once
//! per evaluation interval and feeds the returned level to its spawner; the
//! presentation layer compares successive levels to trigger change cues.

use serde::{Deserialize, Serialize};

use crate::archive::{ArchiveSummary, ScoreArchive};
use crate::constants::EVALUATION_SLICE;
use crate::history::DifficultyHistory;
use crate::level::DifficultyLevel;
use crate::metrics::{AggregateStats, PerformanceSample};
use crate::rules::next_level;
use crate::stats::aggregate;
use crate::tracker::WorstTracker;
use crate::window::SampleWindow;

/// Per-session difficulty controller.
///
/// Owns the sliding window, worst-performance tracker, score archive and
/// difficulty history. All mutation funnels through the evaluation and undo
/// entry points; none of the internals are independently thread-safe, so a
/// concurrent host must wrap the whole engine in a single lock.
#[derive(Debug, Default)]
pub struct AdaptiveEngine {
    window: SampleWindow,
    tracker: WorstTracker,
    archive: ScoreArchive,
    history: DifficultyHistory,
}

impl AdaptiveEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one pre-aggregated interval (the incremental call site).
    ///
    /// The input joins the sliding window, the decision runs on the aggregate
    /// of the newest window entries, and the archive records the raw input's
    /// score.
    pub fn evaluate(&mut self, sample: PerformanceSample) -> DifficultyLevel {
        self.window.push(sample);
        self.apply(AggregateStats::from(sample))
    }

    /// Evaluate a batch of interval samples (the batch call site).
    ///
    /// An empty batch is recovered locally: no state changes, current level
    /// returned. Otherwise every sample joins the window and the archive
    /// records the score of the whole raw batch, not the windowed aggregate.
    pub fn evaluate_batch(&mut self, samples: &[PerformanceSample]) -> DifficultyLevel {
        if samples.is_empty() {
            return self.current_difficulty();
        }
        for sample in samples {
            self.window.push(*sample);
        }
        self.apply(aggregate(samples))
    }

    /// Revert the most recent difficulty change and return the active level.
    pub fn undo_difficulty(&mut self) -> DifficultyLevel {
        self.history.undo()
    }

    /// Active difficulty, no side effects.
    #[must_use]
    pub fn current_difficulty(&self) -> DifficultyLevel {
        self.history.current()
    }

    /// Read-only diagnostic view for HUD and QA consumers.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            difficulty: self.current_difficulty(),
            window_len: self.window.len(),
            worst_min: self.tracker.worst_min(),
            struggling: self.tracker.struggling(),
            history_depth: self.history.len(),
            archive: self.archive.summary(),
        }
    }

    /// Shared tail of both evaluation paths. `archive_stats` carries the raw
    /// input; the decision always runs on the smoothed recent trend.
    fn apply(&mut self, archive_stats: AggregateStats) -> DifficultyLevel {
        let recent = self.window.recent(EVALUATION_SLICE);
        let eval_stats = aggregate(&recent);

        self.tracker.observe(eval_stats.badness());
        let struggling = self.tracker.struggling();

        self.archive.record(archive_stats.archive_score());

        let current = self.history.current();
        let next = next_level(&eval_stats, current, struggling);
        log::debug!(
            "evaluated interval: accuracy {:.3} over {} samples, struggling {struggling}",
            eval_stats.accuracy,
            recent.len(),
        );
        if next != current {
            log::info!(
                "difficulty {current} -> {next} (accuracy {:.2}, struggling {struggling})",
                eval_stats.accuracy,
            );
            self.history.push(next);
        }
        self.history.current()
    }
}

/// Point-in-time view of engine internals, for reports and change cues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub difficulty: DifficultyLevel,
    pub window_len: usize,
    pub worst_min: Option<f64>,
    pub struggling: bool,
    pub history_depth: usize,
    pub archive: Option<ArchiveSummary>,
}
