use ahash::RandomState;
use std::collections::HashMap;
use tracing::debug;

use super::handicap::course_handicaps;
use super::score_aggregators::aggregate_scores;
use super::sort_utils::rank_entrants;
use super::stableford::{StablefordConfig, parse_stableford_config};
use crate::error::ScoringError;
use crate::model::hole::total_par;
use crate::model::{Leaderboard, TournamentSnapshot};

/// Full recompute of a tournament leaderboard from a snapshot of its records.
///
/// Holds no state between calls; the same snapshot always yields the same leaderboard.
///
/// # Errors
///
/// Will return `Err` if the snapshot has no holes
pub fn compute_leaderboard(snapshot: &TournamentSnapshot) -> Result<Leaderboard, ScoringError> {
    if snapshot.holes.is_empty() {
        return Err(ScoringError::MissingHoles);
    }

    let format = &snapshot.format;
    let par = total_par(&snapshot.holes);

    let stableford = if format.is_stableford() {
        parse_stableford_config(snapshot.stableford_config.as_ref())
    } else {
        StablefordConfig::default()
    };

    let handicaps = if format.applies_handicap() {
        course_handicaps(&snapshot.entrants, &snapshot.course, par)
    } else {
        HashMap::<_, _, RandomState>::default()
    };

    let aggregates = aggregate_scores(
        &snapshot.scores,
        &snapshot.holes,
        &snapshot.entrants,
        format,
        &handicaps,
        &stableford,
    )?;

    debug!(
        "computed {} leaderboard: {} entrants from {} score records",
        format,
        aggregates.len(),
        snapshot.scores.len()
    );

    Ok(Leaderboard {
        format: format.clone(),
        stableford_table: format.is_stableford().then(|| stableford.to_json()),
        entries: rank_entrants(aggregates, format),
    })
}
