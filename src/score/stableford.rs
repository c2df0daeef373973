use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ScoringError;

/// Net-score-relative-to-par bucket of a Stableford points table, best first.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StablefordBucket {
    EagleOrBetter,
    Birdie,
    Par,
    Bogey,
    DoubleBogeyOrWorse,
}

impl StablefordBucket {
    pub const ALL: [StablefordBucket; 5] = [
        StablefordBucket::EagleOrBetter,
        StablefordBucket::Birdie,
        StablefordBucket::Par,
        StablefordBucket::Bogey,
        StablefordBucket::DoubleBogeyOrWorse,
    ];

    /// Highest net-relative-to-par score that still falls in this bucket.
    #[must_use]
    pub fn upper_bound(self) -> i32 {
        match self {
            StablefordBucket::EagleOrBetter => -2,
            StablefordBucket::Birdie => -1,
            StablefordBucket::Par => 0,
            StablefordBucket::Bogey => 1,
            StablefordBucket::DoubleBogeyOrWorse => i32::MAX,
        }
    }

    #[must_use]
    pub fn default_points(self) -> i32 {
        match self {
            StablefordBucket::EagleOrBetter => 5,
            StablefordBucket::Birdie => 4,
            StablefordBucket::Par => 3,
            StablefordBucket::Bogey => 2,
            StablefordBucket::DoubleBogeyOrWorse => 0,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            StablefordBucket::EagleOrBetter => "eagle-or-better",
            StablefordBucket::Birdie => "birdie",
            StablefordBucket::Par => "par",
            StablefordBucket::Bogey => "bogey",
            StablefordBucket::DoubleBogeyOrWorse => "double-bogey-or-worse",
        }
    }

    /// Accepts kebab-case, snake_case and camelCase keys, plus `eagle` and `double-bogey`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "eagleorbetter" | "eagle" => Some(StablefordBucket::EagleOrBetter),
            "birdie" => Some(StablefordBucket::Birdie),
            "par" => Some(StablefordBucket::Par),
            "bogey" => Some(StablefordBucket::Bogey),
            "doublebogeyorworse" | "doublebogey" => Some(StablefordBucket::DoubleBogeyOrWorse),
            _ => None,
        }
    }

    #[must_use]
    pub fn for_relative_to_par(relative_to_par: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| relative_to_par <= bucket.upper_bound())
            .unwrap_or(StablefordBucket::DoubleBogeyOrWorse)
    }
}

/// Validated points table: `(upper_bound_inclusive, points)` pairs in ascending bound order.
///
/// The last bound is `i32::MAX`, so every relative score lands in exactly one bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StablefordConfig {
    table: Vec<(i32, i32)>,
}

impl Default for StablefordConfig {
    fn default() -> Self {
        Self {
            table: StablefordBucket::ALL
                .into_iter()
                .map(|b| (b.upper_bound(), b.default_points()))
                .collect(),
        }
    }
}

impl StablefordConfig {
    #[must_use]
    pub fn points_for(&self, relative_to_par: i32) -> i32 {
        self.table
            .iter()
            .find(|(upper, _)| relative_to_par <= *upper)
            .or_else(|| self.table.last())
            .map_or(0, |&(_, points)| points)
    }

    #[must_use]
    pub fn bucket_for(&self, relative_to_par: i32) -> StablefordBucket {
        StablefordBucket::for_relative_to_par(relative_to_par)
    }

    #[must_use]
    pub fn points(&self, bucket: StablefordBucket) -> i32 {
        self.points_for(bucket.upper_bound())
    }

    fn set(&mut self, bucket: StablefordBucket, points: i32) {
        if let Some(entry) = self
            .table
            .iter_mut()
            .find(|(upper, _)| *upper == bucket.upper_bound())
        {
            entry.1 = points;
        }
    }

    /// Effective table keyed by bucket name, for echoing back to callers.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = StablefordBucket::ALL
            .into_iter()
            .map(|b| (b.key().to_string(), Value::from(self.points(b))))
            .collect();
        Value::Object(map)
    }

    /// Strict parse: any bad value rejects the whole table.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the value is not an object (or a string holding one) or
    /// if a recognised bucket maps to something other than an integer
    pub fn try_from_value(raw: &Value) -> Result<Self, ScoringError> {
        match raw {
            Value::Object(map) => Self::from_map(map),
            Value::String(serialized) => {
                let inner: Value = serde_json::from_str(serialized)?;
                match inner {
                    Value::Object(map) => Self::from_map(&map),
                    _ => Err(ScoringError::Parse(
                        "stableford config must be a json object".to_string(),
                    )),
                }
            }
            _ => Err(ScoringError::Parse(
                "stableford config must be a json object".to_string(),
            )),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, ScoringError> {
        let mut config = Self::default();
        for (key, value) in map {
            let Some(bucket) = StablefordBucket::from_key(key) else {
                debug!("ignoring unknown stableford bucket '{key}'");
                continue;
            };
            let points = value
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| {
                    ScoringError::Parse(format!("points for '{key}' must be an integer"))
                })?;
            config.set(bucket, points);
        }
        Ok(config)
    }
}

/// Normalize a stored points table. Never fails: absent or malformed input yields the
/// standard table so a broken config cannot block score entry.
#[must_use]
pub fn parse_stableford_config(raw: Option<&Value>) -> StablefordConfig {
    match raw {
        None | Some(Value::Null) => StablefordConfig::default(),
        Some(value) => StablefordConfig::try_from_value(value).unwrap_or_else(|e| {
            warn!("invalid stableford config, using default table: {e}");
            StablefordConfig::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_keys_round_trip() {
        for bucket in StablefordBucket::ALL {
            assert_eq!(StablefordBucket::from_key(bucket.key()), Some(bucket));
        }
        assert_eq!(
            StablefordBucket::from_key("doubleBogeyOrWorse"),
            Some(StablefordBucket::DoubleBogeyOrWorse)
        );
        assert_eq!(
            StablefordBucket::from_key("eagle_or_better"),
            Some(StablefordBucket::EagleOrBetter)
        );
        assert_eq!(StablefordBucket::from_key("albatross"), None);
    }

    #[test]
    fn test_table_has_no_gaps() {
        let config = StablefordConfig::default();
        assert_eq!(config.table.len(), StablefordBucket::ALL.len());
        assert_eq!(config.table.last().map(|(upper, _)| *upper), Some(i32::MAX));
        assert!(config.table.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
