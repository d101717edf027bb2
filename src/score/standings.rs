use ahash::RandomState;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::round::Round;
use crate::model::rules::{RankMode, ScoringRules};
use crate::model::types::{Player, PlayerStats, RoundSnapshot, StandingsRow};
use crate::score::points::{
    participation_and_bonus_points, ranked_round_points, unranked_round_points,
};

/// Grouping key for one competitive event. Rounds sharing this key are ranked
/// against each other; missing pieces land in sentinel buckets instead of
/// being dropped, so malformed data still earns points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct EventKey {
    league: String,
    date: String,
    course: String,
    holes: i64,
}

impl EventKey {
    fn for_round(round: &Round) -> Self {
        Self {
            league: round.league_key(),
            date: round.date_key(),
            course: round.course_key(),
            holes: round.holes_or_default(),
        }
    }
}

/// Rank every round within its event and aggregate per-player season totals.
///
/// Output is sorted by points descending, then rounds played descending, then
/// name ascending (case-insensitive). Rounds from players missing in the
/// roster are dropped; roster players with no rounds still get a zeroed row.
#[must_use]
pub fn build_standings(
    players: &[Player],
    rounds: &[Round],
    rules: &ScoringRules,
) -> Vec<StandingsRow> {
    let per_round = score_rounds(rounds, rules);

    let mut row_index: HashMap<&str, usize, RandomState> = HashMap::default();
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(players.len());
    for player in players {
        row_index.insert(player.id.as_str(), rows.len());
        rows.push(StandingsRow::empty(player.id.clone(), player.name.clone()));
    }

    // Newest first, so the last5 strip falls out of plain iteration order.
    let mut order: Vec<usize> = (0..rounds.len()).collect();
    order.sort_by(|&a, &b| recency(&rounds[b]).cmp(&recency(&rounds[a])));

    for idx in order {
        let round = &rounds[idx];
        let Some(&row_idx) = row_index.get(round.user_id.as_str()) else {
            continue;
        };
        let row = &mut rows[row_idx];
        row.points += per_round[idx];
        row.rounds += 1;
        row.birdies += round.birdies;
        row.eagles += round.eagles;
        row.hio += round.hio;
        if round.is_major {
            row.majors += 1;
        }
        if row.last5.len() < 5 {
            row.last5.push(RoundSnapshot {
                points: per_round[idx],
                is_major: round.is_major,
                date: round.date_key(),
            });
        }
    }

    rows.sort_by(compare_rows);
    rows
}

/// Single-player view for the profile page: the player's standings row plus
/// their own rounds, newest first. `None` when the player is not on the roster.
#[must_use]
pub fn build_player_stats(
    players: &[Player],
    rounds: &[Round],
    rules: &ScoringRules,
    user_id: &str,
) -> Option<PlayerStats> {
    let standings = build_standings(players, rounds, rules);
    let row = standings.into_iter().find(|r| r.user_id == user_id)?;

    let mut recent_rounds: Vec<Round> = rounds
        .iter()
        .filter(|r| r.user_id == user_id)
        .cloned()
        .collect();
    recent_rounds.sort_by(|a, b| recency(b).cmp(&recency(a)));

    Some(PlayerStats { row, recent_rounds })
}

/// Per-round point contributions, index-aligned with `rounds`.
fn score_rounds(rounds: &[Round], rules: &ScoringRules) -> Vec<f64> {
    if !placement_ranking_usable(rounds, rules) {
        return rounds
            .iter()
            .map(|round| unranked_round_points(rules, round))
            .collect();
    }

    let mut events: HashMap<EventKey, Vec<usize>, RandomState> = HashMap::default();
    for (idx, round) in rounds.iter().enumerate() {
        events
            .entry(EventKey::for_round(round))
            .or_default()
            .push(idx);
    }

    let mut points = vec![0.0; rounds.len()];
    for indices in events.values() {
        score_event(rounds, rules, indices, &mut points);
    }
    points
}

/// Placement ranking needs a placement table and at least one round carrying
/// a usable metric for the configured mode. Otherwise every round goes down
/// the per-round fallback path, so a malformed dataset still earns points.
fn placement_ranking_usable(rounds: &[Round], rules: &ScoringRules) -> bool {
    !rules.placement_points.is_empty()
        && rounds
            .iter()
            .any(|round| round.rank_value(rules.mode).is_some())
}

/// Standard competition ranking within one event: tied rounds share a place
/// and the next distinct value resumes at one past the rounds counted so far
/// (1,1,3 — never 1,1,2).
fn score_event(rounds: &[Round], rules: &ScoringRules, indices: &[usize], points: &mut [f64]) {
    let mode = rules.mode;

    let mut ranked: Vec<(usize, f64)> = indices
        .iter()
        .filter_map(|&idx| rounds[idx].rank_value(mode).map(|value| (idx, value)))
        .collect();
    ranked.sort_by(|a, b| compare_rank_values(mode, a.1, b.1));

    let mut place = 1;
    let mut prev: Option<f64> = None;
    for (pos, &(idx, value)) in ranked.iter().enumerate() {
        if prev.is_some_and(|p| p != value) {
            place = pos + 1;
        }
        prev = Some(value);
        points[idx] = ranked_round_points(rules, &rounds[idx], place) as f64;
    }

    // Rounds with no usable metric get no place, but still collect
    // participation and bonuses.
    for &idx in indices {
        if rounds[idx].rank_value(mode).is_none() {
            points[idx] = participation_and_bonus_points(rules, &rounds[idx]) as f64;
        }
    }
}

fn compare_rank_values(mode: RankMode, a: f64, b: f64) -> Ordering {
    let ascending = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
    if mode.higher_is_better() {
        ascending.reverse()
    } else {
        ascending
    }
}

/// Recency key: dated rounds compare by date descending at the call sites;
/// undated rounds sort after every dated one.
fn recency(round: &Round) -> Option<&str> {
    round
        .date
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
}

fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .partial_cmp(&a.points)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.rounds.cmp(&a.rounds))
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}
