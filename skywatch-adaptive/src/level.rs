//! Difficulty levels exposed to the gameplay and presentation layers.
use serde::{Deserialize, Serialize};

/// Discrete difficulty setting driving enemy cadence and speed.
///
/// The derived ordering (`Easy < Medium < Hard`) exists for reporting and
/// assertions only; transitions between levels are rule-driven, never
/// arithmetic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyLevel {
    /// Stable identifier used in reports and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_for_reporting() {
        assert!(DifficultyLevel::Easy < DifficultyLevel::Medium);
        assert!(DifficultyLevel::Medium < DifficultyLevel::Hard);
        assert_eq!(DifficultyLevel::default(), DifficultyLevel::Easy);
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let encoded = serde_json::to_string(&DifficultyLevel::Medium).unwrap();
        assert_eq!(encoded, "\"medium\"");
        let decoded: DifficultyLevel = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(decoded, DifficultyLevel::Hard);
    }

    #[test]
    fn display_matches_identifier() {
        assert_eq!(DifficultyLevel::Hard.to_string(), "hard");
    }
}
