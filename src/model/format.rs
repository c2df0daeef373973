use serde::{Deserialize, Serialize};
use std::fmt;

/// Tournament scoring format, decoded from the format name stored with the tournament.
///
/// `"Stableford"` and `"Stroke Play"` are individual formats and apply handicap strokes.
/// Any other name (Scramble, Shotgun, ...) is a group format scored gross.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ScoringFormat {
    Stableford,
    StrokePlay,
    Group(String),
}

impl ScoringFormat {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "Stableford" => ScoringFormat::Stableford,
            "Stroke Play" => ScoringFormat::StrokePlay,
            other => ScoringFormat::Group(other.to_string()),
        }
    }

    #[must_use]
    pub fn is_individual(&self) -> bool {
        matches!(self, ScoringFormat::Stableford | ScoringFormat::StrokePlay)
    }

    #[must_use]
    pub fn applies_handicap(&self) -> bool {
        self.is_individual()
    }

    #[must_use]
    pub fn is_stableford(&self) -> bool {
        matches!(self, ScoringFormat::Stableford)
    }
}

impl Default for ScoringFormat {
    fn default() -> Self {
        ScoringFormat::Group("Scramble".to_string())
    }
}

impl From<String> for ScoringFormat {
    fn from(value: String) -> Self {
        Self::from_name(&value)
    }
}

impl From<&str> for ScoringFormat {
    fn from(value: &str) -> Self {
        Self::from_name(value)
    }
}

impl From<ScoringFormat> for String {
    fn from(value: ScoringFormat) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringFormat::Stableford => write!(f, "Stableford"),
            ScoringFormat::StrokePlay => write!(f, "Stroke Play"),
            ScoringFormat::Group(name) => write!(f, "{name}"),
        }
    }
}
