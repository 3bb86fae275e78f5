//! Bounded sliding window over recent performance samples.
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::constants::{EVALUATION_SLICE, SAMPLE_WINDOW_CAPACITY};
use crate::metrics::PerformanceSample;

/// Evaluation slice drawn from the window, held inline without allocation.
pub type RecentSamples = SmallVec<[PerformanceSample; EVALUATION_SLICE]>;

/// Fixed-capacity ring of the most recent samples, oldest evicted first.
#[derive(Debug, Clone)]
pub struct SampleWindow {
    samples: VecDeque<PerformanceSample>,
}

impl SampleWindow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(SAMPLE_WINDOW_CAPACITY),
        }
    }

    /// Append at the back, evicting the oldest entry when full.
    pub fn push(&mut self, sample: PerformanceSample) {
        if self.samples.len() == SAMPLE_WINDOW_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Current contents oldest to newest.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PerformanceSample> {
        self.samples.iter().copied().collect()
    }

    /// The most recent `count` samples, oldest to newest; fewer when the
    /// window holds fewer.
    #[must_use]
    pub fn recent(&self, count: usize) -> RecentSamples {
        let skip = self.samples.len().saturating_sub(count);
        self.samples.iter().skip(skip).copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}
