mod common;

use golf_scoring::model::{CourseRating, Hole, ScoringFormat, TournamentSnapshot};
use golf_scoring::{ScoringError, compute_leaderboard};
use serde_json::json;

use common::{eighteen_holes, player, score};

#[test]
fn test_scramble_groups_tie_at_two_under() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = TournamentSnapshot::from_json_str(include_str!("test5_scramble_snapshot.json"))?;
    assert_eq!(snapshot.format, ScoringFormat::from_name("Scramble"));

    let board = compute_leaderboard(&snapshot)?;
    assert!(board.stableford_table.is_none());

    let summary: Vec<(&str, usize, bool, i32, usize)> = board
        .entries
        .iter()
        .map(|e| (e.name.as_str(), e.rank, e.is_tied, e.score_to_par, e.holes_completed))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Birdies", 1, true, -2, 9),
            ("Eagles", 1, true, -2, 9),
            ("Pars", 3, false, -1, 9),
            ("Late Starters", 4, false, 0, 0),
        ]
    );
    assert_eq!(board.entries[0].position, "T1");
    assert_eq!(board.entries[3].position, "-");
    assert_eq!(board.entries[1].total_strokes, 34);
    Ok(())
}

#[test]
fn test_group_status_serializes_in_snake_case() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = TournamentSnapshot::from_json_str(include_str!("test5_scramble_snapshot.json"))?;
    let board = serde_json::to_value(compute_leaderboard(&snapshot)?)?;

    assert_eq!(board["entries"][0]["group_status"], json!("completed"));
    assert_eq!(board["entries"][3]["group_status"], json!("not_started"));
    assert_eq!(board["entries"][3]["holes"], json!([]));
    Ok(())
}

#[test]
fn test_recompute_is_byte_identical() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = TournamentSnapshot::from_json_str(include_str!("test5_scramble_snapshot.json"))?;

    let first = serde_json::to_string(&compute_leaderboard(&snapshot)?)?;
    let second = serde_json::to_string(&compute_leaderboard(&snapshot)?)?;
    assert_eq!(first, second);

    let mut reversed = snapshot.clone();
    reversed.scores.reverse();
    let third = serde_json::to_string(&compute_leaderboard(&reversed)?)?;
    assert_eq!(first, third);
    Ok(())
}

#[test]
fn test_stableford_player_receives_stroke_on_hardest_hole() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = TournamentSnapshot {
        format: ScoringFormat::Stableford,
        course: CourseRating {
            slope_rating: Some(113),
            course_rating: None,
        },
        stableford_config: None,
        holes: eighteen_holes(),
        entrants: vec![player(1, "A", Some(14.6)), player(2, "B", Some(0.0))],
        scores: vec![score(1, 3, 5, 1), score(2, 3, 3, 1)],
    };

    let board = compute_leaderboard(&snapshot)?;
    let a = board
        .entries
        .iter()
        .find(|e| e.entrant_id == 1)
        .ok_or("player A missing")?;

    assert_eq!(a.course_handicap, Some(15));
    assert_eq!(a.holes.len(), 1);
    assert_eq!(a.holes[0].strokes_received, 1);
    assert_eq!(a.holes[0].net, 4);
    assert_eq!(a.holes[0].points, Some(2));
    assert_eq!(a.total_points, Some(2));
    assert_eq!(a.score_to_par, 2);
    assert_eq!(a.net_score_to_par, Some(1));

    // B: gross par with no strokes -> 3 points, ahead of A
    assert_eq!(board.entries[0].entrant_id, 2);
    assert_eq!(board.entries[0].total_points, Some(3));
    assert_eq!(board.entries[1].rank, 2);
    assert!(board.stableford_table.is_some());
    Ok(())
}

#[test]
fn test_stableford_config_override_from_snapshot() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = TournamentSnapshot::from_json_value(json!({
        "format": "Stableford",
        "stablefordConfig": "{\"bogey\": 1}",
        "holes": [{"number": 1, "par": 4, "strokeIndex": 1}],
        "entrants": [{"kind": "player", "id": 7, "name": "Lee", "handicapIndex": 0.0}],
        "scores": [{"entrant_id": 7, "hole_number": 1, "strokes": 5, "submitted_at": "2025-05-01T10:00:00Z"}]
    }))?;

    let board = compute_leaderboard(&snapshot)?;
    assert_eq!(board.entries[0].total_points, Some(1));
    assert_eq!(
        board.stableford_table.as_ref().and_then(|t| t.get("bogey")),
        Some(&json!(1))
    );
    Ok(())
}

#[test]
fn test_identity_course_handicap_when_slope_and_rating_omitted() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = TournamentSnapshot {
        format: ScoringFormat::StrokePlay,
        holes: eighteen_holes(),
        entrants: vec![player(1, "A", Some(18.4))],
        scores: vec![score(1, 1, 6, 1)],
        ..TournamentSnapshot::default()
    };
    let board = compute_leaderboard(&snapshot)?;
    assert_eq!(board.entries[0].course_handicap, Some(18));
    assert_eq!(board.entries[0].total_points, None);
    assert_eq!(board.entries[0].score_to_par_display, "+2");
    assert_eq!(board.entries[0].net_score_to_par, Some(1));
    Ok(())
}

#[test]
fn test_repeated_hole_number_counts_once_toward_par() -> Result<(), Box<dyn std::error::Error>> {
    // hole 18 is redefined as a par 5, so the course plays to 72 rather than 76
    let mut holes = eighteen_holes();
    holes.push(Hole::new(18, 5, Some(18)));

    let snapshot = TournamentSnapshot {
        format: ScoringFormat::StrokePlay,
        course: CourseRating {
            slope_rating: Some(113),
            course_rating: Some(72.0),
        },
        holes,
        entrants: vec![player(1, "A", Some(10.0))],
        scores: vec![score(1, 18, 5, 1)],
        ..TournamentSnapshot::default()
    };
    let board = compute_leaderboard(&snapshot)?;
    assert_eq!(board.entries[0].course_handicap, Some(10));
    assert_eq!(board.entries[0].score_to_par, 0);
    Ok(())
}

#[test]
fn test_snapshot_without_holes_is_rejected() {
    let snapshot = TournamentSnapshot {
        format: ScoringFormat::StrokePlay,
        entrants: vec![player(1, "A", None)],
        ..TournamentSnapshot::default()
    };
    assert_eq!(
        compute_leaderboard(&snapshot),
        Err(ScoringError::MissingHoles)
    );
}
