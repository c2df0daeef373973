use ahash::{HashSet, HashSetExt, RandomState};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::BuildHasher;
use tracing::{debug, warn};

use super::handicap::strokes_on_hole;
use super::stableford::StablefordConfig;
use crate::error::ScoringError;
use crate::model::{
    Entrant, EntrantAggregate, EntrantId, Hole, HoleScore, ScoreDisplay, ScoreRecord,
    ScoringFormat,
};

/// Keep one record per `(entrant, hole)`, dropping records that point at unknown holes
/// or entrants. The survivor for a pair does not depend on input order.
fn latest_records<'a>(
    records: &'a [ScoreRecord],
    holes: &HashMap<i32, &Hole, RandomState>,
    entrant_ids: &HashSet<EntrantId>,
) -> HashMap<(EntrantId, i32), &'a ScoreRecord, RandomState> {
    let mut latest: HashMap<(EntrantId, i32), &ScoreRecord, RandomState> = HashMap::default();

    for record in records {
        if !holes.contains_key(&record.hole_number) {
            debug!(
                "ignoring score for entrant {} on unknown hole {}",
                record.entrant_id, record.hole_number
            );
            continue;
        }
        if !entrant_ids.contains(&record.entrant_id) {
            debug!(
                "ignoring score for unknown entrant {} on hole {}",
                record.entrant_id, record.hole_number
            );
            continue;
        }

        match latest.entry((record.entrant_id, record.hole_number)) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.supersedes(slot.get()) {
                    slot.insert(record);
                }
            }
        }
    }

    latest
}

/// Holes keyed by number. A repeated number keeps the last definition.
fn unique_holes(holes: &[Hole]) -> HashMap<i32, &Hole, RandomState> {
    holes.iter().map(|h| (h.number, h)).collect()
}

/// Entrants of the kind the format plays with, first occurrence of each id only.
fn active_entrants<'a>(entrants: &'a [Entrant], format: &ScoringFormat) -> Vec<&'a Entrant> {
    let mut seen: HashSet<EntrantId> = HashSet::new();
    entrants
        .iter()
        .filter(|entrant| {
            if entrant.is_player() != format.is_individual() {
                warn!(
                    "skipping entrant {} ({}): wrong entrant kind for format {format}",
                    entrant.id(),
                    entrant.name()
                );
                return false;
            }
            if !seen.insert(entrant.id()) {
                warn!("skipping duplicate entrant id {}", entrant.id());
                return false;
            }
            true
        })
        .collect()
}

/// Fold score records into one running total per entrant.
///
/// Entrants without any score are still returned with zeroed totals. Handicap strokes
/// come from `course_handicaps` and are applied only for individual formats; a player
/// missing from the map plays off scratch.
///
/// # Errors
///
/// Will return `Err` if `holes` is empty
pub fn aggregate_scores<S: BuildHasher>(
    records: &[ScoreRecord],
    holes: &[Hole],
    entrants: &[Entrant],
    format: &ScoringFormat,
    course_handicaps: &HashMap<EntrantId, i32, S>,
    stableford: &StablefordConfig,
) -> Result<Vec<EntrantAggregate>, ScoringError> {
    if holes.is_empty() {
        return Err(ScoringError::MissingHoles);
    }

    let hole_map = unique_holes(holes);
    let total_holes = i32::try_from(hole_map.len()).unwrap_or(i32::MAX);

    let active = active_entrants(entrants, format);
    let entrant_ids: HashSet<EntrantId> = active.iter().map(|e| e.id()).collect();

    let mut cards: HashMap<EntrantId, Vec<&ScoreRecord>, RandomState> = HashMap::default();
    for ((entrant_id, _), record) in latest_records(records, &hole_map, &entrant_ids) {
        cards.entry(entrant_id).or_default().push(record);
    }

    let aggregates = active
        .into_iter()
        .map(|entrant| {
            let mut card = cards.remove(&entrant.id()).unwrap_or_default();
            card.sort_by_key(|record| record.hole_number);

            let course_handicap = match entrant {
                Entrant::Player(player) if format.applies_handicap() => {
                    Some(course_handicaps.get(&player.id).copied().unwrap_or(0))
                }
                _ => None,
            };

            let hole_scores: Vec<HoleScore> = card
                .iter()
                .filter_map(|record| {
                    let hole = hole_map.get(&record.hole_number)?;
                    Some(score_hole(
                        record,
                        hole,
                        course_handicap,
                        total_holes,
                        format,
                        stableford,
                    ))
                })
                .collect();

            build_aggregate(entrant, course_handicap, format, hole_scores)
        })
        .collect();

    Ok(aggregates)
}

fn score_hole(
    record: &ScoreRecord,
    hole: &Hole,
    course_handicap: Option<i32>,
    total_holes: i32,
    format: &ScoringFormat,
    stableford: &StablefordConfig,
) -> HoleScore {
    let strokes_received =
        course_handicap.map_or(0, |ch| strokes_on_hole(ch, hole.stroke_index, total_holes));
    let net = record.strokes.saturating_sub(strokes_received);
    let relative_to_par = net.saturating_sub(hole.par);

    HoleScore {
        hole: hole.number,
        par: hole.par,
        gross: record.strokes,
        strokes_received,
        net,
        points: format
            .is_stableford()
            .then(|| stableford.points_for(relative_to_par)),
        score_display: ScoreDisplay::from_relative_to_par(relative_to_par),
    }
}

fn build_aggregate(
    entrant: &Entrant,
    course_handicap: Option<i32>,
    format: &ScoringFormat,
    holes: Vec<HoleScore>,
) -> EntrantAggregate {
    // strokes and points are unvalidated input, totals saturate instead of wrapping
    let total_strokes = holes.iter().map(|h| h.gross).fold(0, i32::saturating_add);
    let par_played = holes.iter().map(|h| h.par).fold(0, i32::saturating_add);
    let net_strokes = holes.iter().map(|h| h.net).fold(0, i32::saturating_add);
    let points = holes
        .iter()
        .filter_map(|h| h.points)
        .fold(0, i32::saturating_add);

    EntrantAggregate {
        entrant_id: entrant.id(),
        name: entrant.name().to_string(),
        course_handicap,
        group_status: match entrant {
            Entrant::Group(group) => Some(group.status),
            Entrant::Player(_) => None,
        },
        total_strokes,
        score_to_par: total_strokes.saturating_sub(par_played),
        net_strokes: course_handicap.map(|_| net_strokes),
        net_score_to_par: course_handicap.map(|_| net_strokes.saturating_sub(par_played)),
        total_points: format.is_stableford().then_some(points),
        holes_completed: holes.len(),
        holes,
    }
}
