use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: i32,
    pub par: i32,
    /// Difficulty rank, 1 is the hardest hole. Holes without one never receive handicap strokes.
    #[serde(default, alias = "strokeIndex")]
    pub stroke_index: Option<i32>,
    #[serde(default)]
    pub yardage: Option<i32>,
}

impl Hole {
    #[must_use]
    pub fn new(number: i32, par: i32, stroke_index: Option<i32>) -> Self {
        Self {
            number,
            par,
            stroke_index,
            yardage: None,
        }
    }
}

/// Par of the course, counting each hole number once (the last definition wins).
#[must_use]
pub fn total_par(holes: &[Hole]) -> i32 {
    let by_number: HashMap<i32, i32, RandomState> =
        holes.iter().map(|h| (h.number, h.par)).collect();
    by_number.into_values().fold(0, i32::saturating_add)
}
