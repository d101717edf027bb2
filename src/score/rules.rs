use serde_json::Value;
use std::collections::BTreeMap;

use crate::model::rules::{
    BonusRule, BonusRules, ParticipationRule, RankMode, ScoringRules, default_placement_points,
};

/// Turn a league admin's loosely-shaped scoring config into a fully-populated
/// [`ScoringRules`].
///
/// Accepts `None`, JSON `null`, non-objects, partial objects, and the legacy
/// `placement`/`pointsTable` key names. Total and idempotent: every malformed
/// piece degrades to its default instead of erroring, so a half-finished
/// settings edit can never break the standings page for a whole league.
#[must_use]
pub fn normalize_rules(raw: Option<&Value>) -> ScoringRules {
    let obj = raw.and_then(Value::as_object);

    let placement_raw = obj.and_then(|o| {
        o.get("placementPoints")
            .or_else(|| o.get("placement"))
            .or_else(|| o.get("pointsTable"))
    });

    ScoringRules {
        placement_points: normalize_placement_table(placement_raw),
        participation: normalize_participation(obj.and_then(|o| o.get("participation"))),
        bonuses: normalize_bonuses(obj.and_then(|o| o.get("bonuses"))),
        mode: obj
            .and_then(|o| o.get("mode"))
            .and_then(Value::as_str)
            .map_or(RankMode::Medal, RankMode::parse),
    }
}

fn normalize_placement_table(raw: Option<&Value>) -> BTreeMap<u32, i64> {
    let mut table = BTreeMap::new();
    if let Some(entries) = raw.and_then(Value::as_object) {
        for (key, value) in entries {
            let Some(place) = coerce_place(key) else {
                continue;
            };
            table.insert(place, coerce_points(Some(value), 0));
        }
    }
    if table.is_empty() {
        return default_placement_points();
    }
    table
}

/// A place must coerce to a positive integer; `"2.5"` is dropped, not truncated.
fn coerce_place(key: &str) -> Option<u32> {
    let key = key.trim();
    if let Ok(place) = key.parse::<i64>() {
        return (place > 0 && place <= i64::from(u32::MAX)).then_some(place as u32);
    }
    let place = key.parse::<f64>().ok()?;
    (place.is_finite() && place > 0.0 && place.fract() == 0.0 && place <= f64::from(u32::MAX))
        .then_some(place as u32)
}

/// Point values truncate to integers; anything unparseable takes the default.
fn coerce_points(raw: Option<&Value>, default: i64) -> i64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .map_or(default, |v| v.trunc() as i64)
}

/// Flags are only true for a literal JSON `true`.
fn coerce_flag(raw: Option<&Value>) -> bool {
    matches!(raw, Some(Value::Bool(true)))
}

fn normalize_participation(raw: Option<&Value>) -> ParticipationRule {
    let obj = raw.and_then(Value::as_object);
    ParticipationRule {
        enabled: coerce_flag(obj.and_then(|o| o.get("enabled"))),
        points: coerce_points(obj.and_then(|o| o.get("points")), 1),
    }
}

fn normalize_bonuses(raw: Option<&Value>) -> BonusRules {
    let obj = raw.and_then(Value::as_object);
    BonusRules {
        enabled: coerce_flag(obj.and_then(|o| o.get("enabled"))),
        birdie: normalize_bonus(obj.and_then(|o| o.get("birdie")), 1),
        eagle: normalize_bonus(obj.and_then(|o| o.get("eagle")), 2),
        hio: normalize_bonus(obj.and_then(|o| o.get("hio")), 5),
    }
}

fn normalize_bonus(raw: Option<&Value>, default_points: i64) -> BonusRule {
    let obj = raw.and_then(Value::as_object);
    BonusRule {
        enabled: coerce_flag(obj.and_then(|o| o.get("enabled"))),
        points: coerce_points(obj.and_then(|o| o.get("points")), default_points),
    }
}
