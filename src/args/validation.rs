use serde_json::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ScoringError;
use crate::model::TournamentSnapshot;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable, is not valid json, or does not
/// describe a tournament snapshot
pub fn check_readable_file_and_json(file: &str) -> Result<TournamentSnapshot, String> {
    check_readable_file(file)?;
    let json = TournamentSnapshot::read_json_file(Path::new(file)).map_err(|e| match e {
        ScoringError::Parse(msg) => format!("The file '{file}' is not valid json: {msg}"),
        other => format!("The json file '{file}' is not readable: {other}"),
    })?;
    validate_json_format(&json)?;
    TournamentSnapshot::from_json_value(json).map_err(|e| e.to_string())
}

/// Validate the snapshot json shape before deserializing, so the user gets a message
/// naming the offending key. Format we expect:
/// { "format": "Stableford", "course": {...}, "stableford_config": {...},
///   "holes": [{"number": <int>, "par": <int>, "stroke_index": <int|null>}, ...],
///   "entrants": [{"kind": "player"|"group", "id": <int>, "name": "..."}, ...],
///   "scores": [{"entrant_id": <int>, "hole_number": <int>, "strokes": <int>, "submitted_at": "<rfc3339>"}, ...] }
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
pub fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The snapshot json must be an object.".to_string());
    };

    let expected_keys = [
        "format",
        "course",
        "stableford_config",
        "stablefordConfig",
        "holes",
        "entrants",
        "scores",
    ];
    for key in obj.keys() {
        if !expected_keys.contains(&key.as_str()) {
            return Err(format!(
                "The snapshot json is not in the correct format. Unexpected key '{key}', expected keys: {expected_keys:?}"
            ));
        }
    }

    if let Some(format) = obj.get("format") {
        if !format.is_string() {
            return Err(
                "The json key format is not in the correct format. Expected a string.".to_string(),
            );
        }
    }

    for key in ["holes", "entrants", "scores"] {
        if let Some(value) = obj.get(key) {
            if !value.is_array() {
                return Err(format!(
                    "The json key {key} is not in the correct format. Expected an array."
                ));
            }
        }
    }

    let holes = obj.get("holes").and_then(Value::as_array);
    for hole in holes.into_iter().flatten() {
        if !hole["number"].is_i64() || !hole["par"].is_i64() {
            return Err(
                "The json key holes is not in the correct format. Expected objects with integer keys number and par."
                    .to_string(),
            );
        }
    }

    let entrants = obj.get("entrants").and_then(Value::as_array);
    for entrant in entrants.into_iter().flatten() {
        if !entrant["id"].is_i64() || !entrant["name"].is_string() {
            return Err(
                "The json key entrants is not in the correct format. Expected objects with keys id and name."
                    .to_string(),
            );
        }
    }

    Ok(())
}
