use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entrant::EntrantId;

/// One submitted hole score. Storage keeps at most one per `(entrant_id, hole_number)`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreRecord {
    #[serde(alias = "entrantId")]
    pub entrant_id: EntrantId,
    #[serde(alias = "holeNumber")]
    pub hole_number: i32,
    pub strokes: i32,
    #[serde(default, alias = "enteredBy")]
    pub entered_by: Option<String>,
    #[serde(alias = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Whether `self` supersedes `other` for the same entrant and hole.
    ///
    /// Later submissions win. Identical timestamps fall back to strokes and then the
    /// submitter so the choice never depends on input order.
    #[must_use]
    pub fn supersedes(&self, other: &ScoreRecord) -> bool {
        (self.submitted_at, self.strokes, &self.entered_by)
            > (other.submitted_at, other.strokes, &other.entered_by)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum ScoreDisplay {
    Condor,
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleBogeyOrWorse,
}

impl ScoreDisplay {
    /// Classify a score relative to par (`strokes - par`).
    #[must_use]
    pub fn from_relative_to_par(relative: i32) -> Self {
        match relative {
            i32::MIN..=-4 => ScoreDisplay::Condor,
            -3 => ScoreDisplay::Albatross,
            -2 => ScoreDisplay::Eagle,
            -1 => ScoreDisplay::Birdie,
            0 => ScoreDisplay::Par,
            1 => ScoreDisplay::Bogey,
            2 => ScoreDisplay::DoubleBogey,
            3 => ScoreDisplay::TripleBogey,
            _ => ScoreDisplay::QuadrupleBogeyOrWorse,
        }
    }
}

/// Per-hole line of an entrant's card after deduplication and handicap allocation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub hole: i32,
    pub par: i32,
    pub gross: i32,
    pub strokes_received: i32,
    pub net: i32,
    /// Stableford points for the hole, `None` outside Stableford.
    pub points: Option<i32>,
    /// Classification of the net score against par.
    pub score_display: ScoreDisplay,
}
