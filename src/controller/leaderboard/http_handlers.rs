use actix_web::http::StatusCode;
use actix_web::web::{self, Query};
use actix_web::{HttpResponse, Responder};
use serde_json::{Value, json};
use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::ScoringError;
use crate::model::TournamentSnapshot;
use crate::score::compute_leaderboard;

fn error_status(err: &ScoringError) -> StatusCode {
    match err {
        ScoringError::MissingHoles | ScoringError::Parse(_) => StatusCode::BAD_REQUEST,
        ScoringError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &ScoringError) -> HttpResponse {
    HttpResponse::build(error_status(err)).json(json!({"error": err.to_string()}))
}

/// `POST /leaderboard`: body is a tournament snapshot, response is the ranked leaderboard.
/// `?summary=1` drops the per-hole breakdown from each entry.
pub async fn leaderboard(
    query: Query<HashMap<String, String>>,
    body: web::Json<Value>,
) -> impl Responder {
    let summary = match query.get("summary").map(String::as_str) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    };

    let snapshot = match TournamentSnapshot::from_json_value(body.into_inner()) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!("rejecting leaderboard request: {e}");
            return error_response(&e);
        }
    };

    match compute_leaderboard(&snapshot) {
        Ok(mut board) => {
            if summary {
                for entry in &mut board.entries {
                    entry.holes.clear();
                }
            }
            info!(
                "leaderboard computed: format={}, entries={}",
                board.format,
                board.entries.len()
            );
            HttpResponse::Ok().json(board)
        }
        Err(e) => {
            warn!("leaderboard computation failed: {e}");
            error_response(&e)
        }
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().finish()
}
