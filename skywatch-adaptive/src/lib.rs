//! Skywatch Adaptive Difficulty Core
//!
//! Platform-agnostic decision logic for Skywatch's adaptive difficulty. The
//! gameplay loop reports performance samples on a fixed cadence and receives
//! back the difficulty level that drives enemy cadence and speed. No UI or
//! platform-specific dependencies live here.

pub mod archive;
pub mod constants;
pub mod engine;
pub mod history;
pub mod level;
pub mod metrics;
pub mod numbers;
pub mod rules;
pub mod stats;
pub mod tracker;
pub mod window;

// Re-export commonly used types
pub use archive::{ArchiveSummary, ScoreArchive};
pub use engine::{AdaptiveEngine, EngineSnapshot};
pub use history::{DifficultyHistory, HistoryError};
pub use level::DifficultyLevel;
pub use metrics::{AggregateStats, PerformanceSample};
pub use rules::next_level;
pub use stats::{aggregate, rank_by_goodness};
pub use tracker::WorstTracker;
pub use window::{RecentSamples, SampleWindow};
