//! Scripted player scenarios driving the adaptive engine headlessly.
//!
//! Scenarios synthesize per-interval performance samples directly instead of
//! simulating bullets and enemies; the harness cares about the decision core,
//! not the physics that feeds it.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use skywatch_adaptive::{AdaptiveEngine, DifficultyLevel, EngineSnapshot, PerformanceSample};

/// Scripted accuracy curve for a synthetic player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Weak start that steadily sharpens into strong play.
    SteadyImprovement,
    /// Strong start that falls apart, exercising the demotion bands.
    Collapse,
    /// Alternating hot and cold streaks around the hysteresis bands.
    Oscillation,
    /// Long mixed session: climb, plateau, slump, recovery.
    Marathon,
}

impl Scenario {
    pub const ALL: [Self; 4] = [
        Self::SteadyImprovement,
        Self::Collapse,
        Self::Oscillation,
        Self::Marathon,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SteadyImprovement => "steady_improvement",
            Self::Collapse => "collapse",
            Self::Oscillation => "oscillation",
            Self::Marathon => "marathon",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SteadyImprovement => "weak start sharpening into strong play",
            Self::Collapse => "strong start degrading into sustained struggle",
            Self::Oscillation => "hot and cold streaks around the thresholds",
            Self::Marathon => "climb, plateau, slump and recovery in one session",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(name))
    }

    /// Target accuracy for the given interval of the script.
    fn target_accuracy(self, tick: usize, total: usize) -> f64 {
        let progress = progress(tick, total);
        match self {
            Self::SteadyImprovement => 0.20 + 0.75 * progress,
            Self::Collapse => 0.85 - 0.70 * progress,
            Self::Oscillation => {
                if (tick / 5) % 2 == 0 {
                    0.80
                } else {
                    0.20
                }
            }
            Self::Marathon => {
                if progress < 0.25 {
                    0.85
                } else if progress < 0.50 {
                    0.60
                } else if progress < 0.75 {
                    0.15
                } else {
                    0.75
                }
            }
        }
    }

    fn sample(self, tick: usize, total: usize, rng: &mut ChaCha8Rng) -> PerformanceSample {
        let target = self.target_accuracy(tick, total).clamp(0.05, 0.95);
        let jitter = rng.gen_range(-0.08..=0.08);
        let accuracy = (target + jitter).clamp(0.0, 1.0);

        let shots = rng.gen_range(8..=14u32);
        let kills_f = (f64::from(shots) * accuracy)
            .round()
            .clamp(0.0, f64::from(shots));
        let kills = kills_f as u32;

        let bypassed = if accuracy < 0.4 {
            rng.gen_range(1..=3u32)
        } else if accuracy < 0.7 {
            rng.gen_range(0..=1u32)
        } else {
            0
        };

        // Mirror the gameplay scoring: +10 per kill, -2 per bypass.
        let score_delta = i32::try_from(kills)
            .unwrap_or(i32::MAX)
            .saturating_mul(10)
            .saturating_sub(i32::try_from(bypassed).unwrap_or(0).saturating_mul(2));

        PerformanceSample::new(kills, shots, bypassed, score_delta)
    }
}

fn progress(tick: usize, total: usize) -> f64 {
    if total <= 1 {
        return 0.0;
    }
    let tick = u32::try_from(tick).unwrap_or(u32::MAX);
    let span = u32::try_from(total - 1).unwrap_or(u32::MAX);
    f64::from(tick) / f64::from(span)
}

/// One recorded difficulty change during a run.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionRecord {
    pub interval: usize,
    pub from: DifficultyLevel,
    pub to: DifficultyLevel,
}

/// Full outcome of one scenario/seed run.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioRun {
    pub scenario: &'static str,
    pub seed: u64,
    pub intervals: usize,
    pub transitions: Vec<TransitionRecord>,
    pub final_difficulty: DifficultyLevel,
    pub snapshot: EngineSnapshot,
}

/// Drive a fresh engine through `intervals` evaluation ticks of the script.
#[must_use]
pub fn run_scenario(scenario: Scenario, seed: u64, intervals: usize) -> ScenarioRun {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut engine = AdaptiveEngine::new();
    let mut transitions = Vec::new();
    let mut current = engine.current_difficulty();

    for tick in 0..intervals {
        let sample = scenario.sample(tick, intervals, &mut rng);
        let next = engine.evaluate(sample);
        if next != current {
            log::debug!(
                "{} seed {seed}: {current} -> {next} at interval {tick}",
                scenario.name(),
            );
            transitions.push(TransitionRecord {
                interval: tick,
                from: current,
                to: next,
            });
            current = next;
        }
    }

    ScenarioRun {
        scenario: scenario.name(),
        seed,
        intervals,
        transitions,
        final_difficulty: current,
        snapshot: engine.snapshot(),
    }
}
