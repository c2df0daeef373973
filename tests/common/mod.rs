#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use golf_scoring::model::{Entrant, Group, GroupStatus, Hole, Player, ScoreRecord};

/// 18 holes, all par 4 except hole 3 (par 3, stroke index 1). Par 71.
pub fn eighteen_holes() -> Vec<Hole> {
    (1..=18)
        .map(|n| {
            let stroke_index = match n {
                3 => 1,
                1 | 2 => n + 1,
                _ => n,
            };
            let par = if n == 3 { 3 } else { 4 };
            Hole::new(n, par, Some(stroke_index))
        })
        .collect()
}

/// Nine par-4 holes with stroke indexes 1..9.
pub fn nine_holes() -> Vec<Hole> {
    (1..=9).map(|n| Hole::new(n, 4, Some(n))).collect()
}

pub fn player(id: i64, name: &str, handicap_index: Option<f64>) -> Entrant {
    Entrant::Player(Player {
        id,
        name: name.to_string(),
        handicap_index,
        handicap: None,
    })
}

pub fn group(id: i64, name: &str) -> Entrant {
    Entrant::Group(Group {
        id,
        name: name.to_string(),
        current_hole: 1,
        status: GroupStatus::InProgress,
    })
}

pub fn at_minute(minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 10, 0, 0)
        .single()
        .expect("valid base timestamp")
        + Duration::minutes(minute)
}

pub fn score(entrant_id: i64, hole_number: i32, strokes: i32, minute: i64) -> ScoreRecord {
    ScoreRecord {
        entrant_id,
        hole_number,
        strokes,
        entered_by: Some("chaperone".to_string()),
        submitted_at: at_minute(minute),
    }
}

/// One score per hole for `holes`, strokes taken from `strokes` in order.
pub fn card(entrant_id: i64, strokes: &[i32]) -> Vec<ScoreRecord> {
    strokes
        .iter()
        .enumerate()
        .map(|(idx, &s)| {
            let hole = i32::try_from(idx).expect("small index") + 1;
            score(entrant_id, hole, s, i64::from(hole))
        })
        .collect()
}
