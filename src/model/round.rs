use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::rules::RankMode;

/// One player's submitted result for one event.
///
/// Records persisted under older schema versions used alternate key names
/// (`score`, `stableford`, `handicapDelta`, `holeInOnes`, `points`); those are
/// coalesced into the canonical fields here, at the deserialization boundary,
/// so the scoring core only ever sees one name per concept. Malformed numeric
/// or flag values degrade to absent/zero instead of failing the whole record.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Round {
    pub id: String,
    #[serde(alias = "playerId")]
    pub user_id: String,
    pub league_id: Option<String>,
    /// ISO-ish calendar date; only the first 10 characters take part in
    /// event grouping, so two tee times on the same day stay one event.
    pub date: Option<String>,
    pub course: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub holes: Option<i64>,
    #[serde(alias = "score", deserialize_with = "lenient_opt_f64")]
    pub gross_score: Option<f64>,
    #[serde(alias = "stableford", deserialize_with = "lenient_opt_f64")]
    pub stableford_points: Option<f64>,
    #[serde(alias = "handicapDelta", deserialize_with = "lenient_opt_f64")]
    pub vs_handicap: Option<f64>,
    #[serde(deserialize_with = "lenient_count")]
    pub birdies: u32,
    #[serde(deserialize_with = "lenient_count")]
    pub eagles: u32,
    #[serde(alias = "holeInOnes", deserialize_with = "lenient_count")]
    pub hio: u32,
    /// Tracked per round for display and aggregation; the points math does
    /// not apply a major multiplier.
    #[serde(deserialize_with = "lenient_bool")]
    pub is_major: bool,
    /// Precomputed total from before the league had scoring rules. Trusted
    /// verbatim, but only when no placement ranking is in effect.
    #[serde(alias = "points", deserialize_with = "lenient_opt_f64")]
    pub points_earned: Option<f64>,
}

impl Round {
    /// Ranking metric for the given mode, when this round carries a usable one.
    #[must_use]
    pub fn rank_value(&self, mode: RankMode) -> Option<f64> {
        let value = match mode {
            RankMode::Medal => self.gross_score,
            RankMode::Stableford => self.stableford_points,
            RankMode::Handicap => self.vs_handicap,
        };
        value.filter(|v| v.is_finite())
    }

    /// Calendar-date portion of the grouping key, or the sentinel bucket.
    #[must_use]
    pub fn date_key(&self) -> String {
        match self.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => date.chars().take(10).collect(),
            _ => "no_date".to_string(),
        }
    }

    /// Course portion of the grouping key: case/whitespace-insensitive.
    #[must_use]
    pub fn course_key(&self) -> String {
        match self.course.as_deref().map(str::trim) {
            Some(course) if !course.is_empty() => course.to_lowercase(),
            _ => "no_course".to_string(),
        }
    }

    #[must_use]
    pub fn league_key(&self) -> String {
        match self.league_id.as_deref().map(str::trim) {
            Some(league) if !league.is_empty() => league.to_string(),
            _ => "no_league".to_string(),
        }
    }

    #[must_use]
    pub fn holes_or_default(&self) -> i64 {
        self.holes.unwrap_or(18)
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

fn lenient_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value).map(|v| v.trunc() as i64))
}

/// Achievement counters must be non-negative integers; anything else is 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let count = coerce_f64(&value)
        .filter(|v| *v >= 0.0 && v.fract() == 0.0 && *v <= f64::from(u32::MAX))
        .map_or(0.0, f64::trunc);
    Ok(count as u32)
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}
