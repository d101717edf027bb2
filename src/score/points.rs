use crate::model::round::Round;
use crate::model::rules::ScoringRules;

/// Placement component for a finishing place; places outside the table award 0.
#[must_use]
pub fn placement_points_for(rules: &ScoringRules, place: usize) -> i64 {
    u32::try_from(place)
        .ok()
        .and_then(|p| rules.placement_points.get(&p).copied())
        .unwrap_or(0)
}

/// Participation plus achievement bonuses for one round.
///
/// Bonuses fire on presence, not magnitude: a round with three birdies earns
/// the birdie bonus once. Each sub-bonus is gated by its own flag and the
/// parent `bonuses.enabled` switch.
#[must_use]
pub fn participation_and_bonus_points(rules: &ScoringRules, round: &Round) -> i64 {
    let mut points = 0;
    if rules.participation.enabled {
        points += rules.participation.points;
    }
    if rules.bonuses.enabled {
        if rules.bonuses.birdie.enabled && round.birdies > 0 {
            points += rules.bonuses.birdie.points;
        }
        if rules.bonuses.eagle.enabled && round.eagles > 0 {
            points += rules.bonuses.eagle.points;
        }
        if rules.bonuses.hio.enabled && round.hio > 0 {
            points += rules.bonuses.hio.points;
        }
    }
    points
}

/// Point total for a round that finished at `place` within its event.
#[must_use]
pub fn ranked_round_points(rules: &ScoringRules, round: &Round, place: usize) -> i64 {
    placement_points_for(rules, place) + participation_and_bonus_points(rules, round)
}

/// Point total for a round outside any placement ranking: a precomputed
/// legacy total wins, otherwise participation and bonuses only.
#[must_use]
pub fn unranked_round_points(rules: &ScoringRules, round: &Round) -> f64 {
    match round.points_earned.filter(|p| p.is_finite()) {
        Some(precomputed) => precomputed,
        None => participation_and_bonus_points(rules, round) as f64,
    }
}
