use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::entrant::Entrant;
use super::format::ScoringFormat;
use super::hole::Hole;
use super::score::ScoreRecord;
use crate::error::ScoringError;

pub const STANDARD_SLOPE_RATING: i32 = 113;

/// Slope and course rating for the tees in play. Tournaments commonly omit both.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct CourseRating {
    #[serde(default, alias = "slopeRating")]
    pub slope_rating: Option<i32>,
    #[serde(default, alias = "courseRating")]
    pub course_rating: Option<f64>,
}

impl CourseRating {
    #[must_use]
    pub fn slope(&self) -> i32 {
        self.slope_rating.unwrap_or(STANDARD_SLOPE_RATING)
    }

    /// Course rating, defaulting to par so an unrated course adds no adjustment.
    #[must_use]
    pub fn rating_or_par(&self, par: i32) -> f64 {
        self.course_rating.unwrap_or(f64::from(par))
    }
}

/// Everything a leaderboard computation needs, already fetched by the caller.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TournamentSnapshot {
    #[serde(default)]
    pub format: ScoringFormat,
    #[serde(default)]
    pub course: CourseRating,
    /// Raw points table as stored with the tournament; validated on use.
    #[serde(default, alias = "stablefordConfig")]
    pub stableford_config: Option<Value>,
    #[serde(default)]
    pub holes: Vec<Hole>,
    #[serde(default)]
    pub entrants: Vec<Entrant>,
    #[serde(default)]
    pub scores: Vec<ScoreRecord>,
}

impl TournamentSnapshot {
    /// # Errors
    ///
    /// Will return `Err` if the json does not describe a snapshot
    pub fn from_json_str(json: &str) -> Result<Self, ScoringError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if the value does not describe a snapshot
    pub fn from_json_value(json: Value) -> Result<Self, ScoringError> {
        Ok(serde_json::from_value(json)?)
    }

    /// Read a file and parse it as json, without checking that it describes a snapshot.
    ///
    /// # Errors
    ///
    /// Will return `ScoringError::Io` if the file cannot be read, `ScoringError::Parse`
    /// if it is not json
    pub fn read_json_file(path: &Path) -> Result<Value, ScoringError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
