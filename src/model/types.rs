use serde::{Deserialize, Serialize};

use super::entrant::{EntrantId, GroupStatus};
use super::format::ScoringFormat;
use super::score::HoleScore;

/// Running totals for one entrant, as folded from its score records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EntrantAggregate {
    pub entrant_id: EntrantId,
    pub name: String,
    pub course_handicap: Option<i32>,
    pub group_status: Option<GroupStatus>,
    pub total_strokes: i32,
    pub score_to_par: i32,
    pub net_strokes: Option<i32>,
    pub net_score_to_par: Option<i32>,
    pub total_points: Option<i32>,
    pub holes_completed: usize,
    pub holes: Vec<HoleScore>,
}

impl EntrantAggregate {
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.holes_completed > 0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub entrant_id: EntrantId,
    pub name: String,
    pub rank: usize,
    pub is_tied: bool,
    /// "1", "T3", or "-" for entrants that have not completed a hole.
    pub position: String,
    pub total_strokes: i32,
    pub score_to_par: i32,
    /// "E", "+3", "-2".
    pub score_to_par_display: String,
    pub net_score_to_par: Option<i32>,
    pub total_points: Option<i32>,
    pub holes_completed: usize,
    pub course_handicap: Option<i32>,
    pub group_status: Option<GroupStatus>,
    pub holes: Vec<HoleScore>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Leaderboard {
    pub format: ScoringFormat,
    /// Effective Stableford table after validation and defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stableford_table: Option<serde_json::Value>,
    pub entries: Vec<LeaderboardEntry>,
}

/// Golf notation for a score relative to par.
#[must_use]
pub fn format_score_to_par(score_to_par: i32) -> String {
    match score_to_par {
        0 => "E".to_string(),
        s if s > 0 => format!("+{s}"),
        s => s.to_string(),
    }
}
