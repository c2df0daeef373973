use crate::model::types::format_score_to_par;
use crate::model::{EntrantAggregate, LeaderboardEntry, ScoringFormat};

/// Primary ranking key, lower is better.
fn ranking_key(aggregate: &EntrantAggregate, format: &ScoringFormat) -> i64 {
    if format.is_stableford() {
        -i64::from(aggregate.total_points.unwrap_or(0))
    } else {
        i64::from(aggregate.score_to_par)
    }
}

fn to_entry(aggregate: EntrantAggregate, rank: usize, is_tied: bool) -> LeaderboardEntry {
    let position = if !aggregate.has_started() {
        "-".to_string()
    } else if is_tied {
        format!("T{rank}")
    } else {
        rank.to_string()
    };

    LeaderboardEntry {
        entrant_id: aggregate.entrant_id,
        name: aggregate.name,
        rank,
        is_tied,
        position,
        total_strokes: aggregate.total_strokes,
        score_to_par: aggregate.score_to_par,
        score_to_par_display: format_score_to_par(aggregate.score_to_par),
        net_score_to_par: aggregate.net_score_to_par,
        total_points: aggregate.total_points,
        holes_completed: aggregate.holes_completed,
        course_handicap: aggregate.course_handicap,
        group_status: aggregate.group_status,
        holes: aggregate.holes,
    }
}

/// Rank aggregates into leaderboard order.
///
/// Stableford ranks by points (higher first), everything else by score to par (lower
/// first). Equal keys share a rank and the next rank skips (1, 1, 3); there is no
/// countback. Entrants that have not completed a hole come last, by name.
#[must_use]
pub fn rank_entrants(
    aggregates: Vec<EntrantAggregate>,
    format: &ScoringFormat,
) -> Vec<LeaderboardEntry> {
    let (mut started, mut not_started): (Vec<_>, Vec<_>) =
        aggregates.into_iter().partition(EntrantAggregate::has_started);

    started.sort_by(|a, b| {
        ranking_key(a, format)
            .cmp(&ranking_key(b, format))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.entrant_id.cmp(&b.entrant_id))
    });
    not_started.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.entrant_id.cmp(&b.entrant_id))
    });

    let keys: Vec<i64> = started.iter().map(|a| ranking_key(a, format)).collect();
    let mut entries = Vec::with_capacity(started.len() + not_started.len());
    let mut rank = 0;

    for (idx, aggregate) in started.into_iter().enumerate() {
        if idx == 0 || keys[idx] != keys[idx - 1] {
            rank = idx + 1;
        }
        let is_tied = (idx > 0 && keys[idx - 1] == keys[idx])
            || keys.get(idx + 1).is_some_and(|next| *next == keys[idx]);
        entries.push(to_entry(aggregate, rank, is_tied));
    }

    let trailing_rank = entries.len() + 1;
    let trailing_tied = not_started.len() > 1;
    entries.extend(
        not_started
            .into_iter()
            .map(|aggregate| to_entry(aggregate, trailing_rank, trailing_tied)),
    );

    entries
}
