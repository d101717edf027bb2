use league_standings::model::{Player, Round, ScoringRules};
use league_standings::{build_player_stats, build_standings, normalize_rules};
use serde_json::json;
use std::collections::BTreeMap;

fn player(id: &str, name: &str) -> Player {
    Player {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn bare_round(id: &str, user: &str) -> Round {
    Round {
        id: id.to_string(),
        user_id: user.to_string(),
        ..Round::default()
    }
}

#[test]
fn test3_no_rankable_round_means_participation_only() {
    let players = vec![player("u1", "Ann")];
    let rules = normalize_rules(Some(&json!({
        "placementPoints": { "1": 3, "2": 2 },
        "participation": { "enabled": true, "points": 1 }
    })));

    // No round in the dataset carries a medal score, so placement ranking is
    // skipped entirely; a bare round nets exactly the participation point.
    let rounds = vec![bare_round("r1", "u1")];
    let standings = build_standings(&players, &rounds, &rules);
    assert_eq!(standings[0].points, 1.0);
}

#[test]
fn test3_empty_placement_table_disables_ranking() {
    let players = vec![player("u1", "Ann")];

    // Hand-built rules (the normalizer never emits an empty table).
    let rules = ScoringRules {
        placement_points: BTreeMap::new(),
        ..ScoringRules::default()
    };

    let mut round = bare_round("r1", "u1");
    round.gross_score = Some(70.0);
    round.points_earned = Some(6.5);

    let standings = build_standings(&players, &[round], &rules);
    assert_eq!(
        standings[0].points, 6.5,
        "no table means no ranking, so the precomputed total is trusted"
    );
}

#[test]
fn test3_precomputed_points_trusted_only_without_ranking() {
    let players = vec![player("u1", "Ann"), player("u2", "Ben")];
    let rules = normalize_rules(Some(&json!({
        "placementPoints": { "1": 3, "2": 1 }
    })));

    let mut ranked = bare_round("r1", "u1");
    ranked.league_id = Some("L1".to_string());
    ranked.date = Some("2024-05-01".to_string());
    ranked.course = Some("Pine Hill".to_string());
    ranked.gross_score = Some(70.0);
    ranked.points_earned = Some(99.0);

    let mut unrankable = bare_round("r2", "u2");
    unrankable.league_id = Some("L1".to_string());
    unrankable.date = Some("2024-05-01".to_string());
    unrankable.course = Some("Pine Hill".to_string());
    unrankable.points_earned = Some(99.0);

    let standings = build_standings(&players, &[ranked, unrankable], &rules);

    // The dataset has a rankable round, so placement ranking is in effect and
    // precomputed totals are ignored for everyone.
    assert_eq!(
        standings
            .iter()
            .find(|r| r.user_id == "u1")
            .expect("row for u1")
            .points,
        3.0,
        "ranked round scores its place, not its stored total"
    );
    assert_eq!(
        standings
            .iter()
            .find(|r| r.user_id == "u2")
            .expect("row for u2")
            .points,
        0.0,
        "unrankable round in a ranked dataset gets no placement and no stored total"
    );
}

#[test]
fn test3_fractional_legacy_totals_pass_through_verbatim() {
    let players = vec![player("u1", "Ann")];
    let rules = normalize_rules(None);

    let mut round = bare_round("r1", "u1");
    round.points_earned = Some(2.5);

    let standings = build_standings(&players, &[round], &rules);
    assert_eq!(standings[0].points, 2.5);
}

#[test]
fn test3_sentinel_buckets_still_compete() {
    let players = vec![player("u1", "Ann"), player("u2", "Ben")];
    let rules = normalize_rules(Some(&json!({
        "placementPoints": { "1": 3, "2": 1 }
    })));

    // Neither round has a league, date, or course; both fall into the same
    // degenerate bucket and are ranked against each other.
    let mut r1 = bare_round("r1", "u1");
    r1.gross_score = Some(70.0);
    let mut r2 = bare_round("r2", "u2");
    r2.gross_score = Some(72.0);

    let standings = build_standings(&players, &[r1, r2], &rules);
    assert_eq!(
        standings
            .iter()
            .find(|r| r.user_id == "u1")
            .expect("row for u1")
            .points,
        3.0
    );
    assert_eq!(
        standings
            .iter()
            .find(|r| r.user_id == "u2")
            .expect("row for u2")
            .points,
        1.0
    );
    assert_eq!(standings[0].last5[0].date, "no_date");
}

#[test]
fn test3_non_finite_metrics_are_unrankable() {
    let players = vec![player("u1", "Ann"), player("u2", "Ben")];
    let rules = normalize_rules(Some(&json!({
        "placementPoints": { "1": 3 },
        "participation": { "enabled": true, "points": 1 }
    })));

    let mut r1 = bare_round("r1", "u1");
    r1.gross_score = Some(70.0);
    let mut r2 = bare_round("r2", "u2");
    r2.gross_score = Some(f64::NAN);

    let standings = build_standings(&players, &[r1, r2], &rules);
    assert_eq!(
        standings
            .iter()
            .find(|r| r.user_id == "u1")
            .expect("row for u1")
            .points,
        4.0,
        "only finite metric in the event takes first"
    );
    assert_eq!(
        standings
            .iter()
            .find(|r| r.user_id == "u2")
            .expect("row for u2")
            .points,
        1.0,
        "NaN score is unrankable but still earns participation"
    );
}

#[test]
fn test3_lenient_round_deserialization() {
    let raw = json!({
        "id": "r1",
        "userId": "u1",
        "leagueId": "L1",
        "date": "2024-05-01",
        "course": "Pine Hill",
        "score": 72,
        "stableford": "31",
        "handicapDelta": "not a number",
        "birdies": -2,
        "eagles": "x",
        "holeInOnes": 1,
        "isMajor": "yes",
        "points": 2.5
    });
    let round: Round = serde_json::from_value(raw).expect("lenient deserialization never fails");

    assert_eq!(round.user_id, "u1");
    assert_eq!(round.gross_score, Some(72.0), "legacy `score` lands in gross_score");
    assert_eq!(round.stableford_points, Some(31.0), "numeric strings parse");
    assert_eq!(round.vs_handicap, None, "junk metric degrades to absent");
    assert_eq!(round.birdies, 0, "negative counter degrades to 0");
    assert_eq!(round.eagles, 0, "non-numeric counter degrades to 0");
    assert_eq!(round.hio, 1, "legacy `holeInOnes` lands in hio");
    assert!(!round.is_major, "non-boolean flag degrades to false");
    assert_eq!(round.points_earned, Some(2.5), "legacy `points` lands in points_earned");
    assert_eq!(round.holes_or_default(), 18);
}

#[test]
fn test3_player_stats_reuses_the_standings_row() {
    let players = vec![player("u1", "Ann"), player("u2", "Ben")];
    let rules = normalize_rules(Some(&json!({
        "placementPoints": { "1": 3, "2": 1 }
    })));

    let mut r1 = bare_round("r1", "u1");
    r1.date = Some("2024-05-01".to_string());
    r1.gross_score = Some(70.0);
    let mut r2 = bare_round("r2", "u1");
    r2.date = Some("2024-06-01".to_string());
    r2.gross_score = Some(68.0);
    let mut r3 = bare_round("r3", "u2");
    r3.date = Some("2024-05-01".to_string());
    r3.gross_score = Some(75.0);

    let rounds = vec![r1, r2, r3];
    let stats = build_player_stats(&players, &rounds, &rules, "u1").expect("u1 is on the roster");

    assert_eq!(stats.row.user_id, "u1");
    assert_eq!(stats.row.rounds, 2);
    assert_eq!(stats.recent_rounds.len(), 2, "only u1's rounds");
    assert_eq!(stats.recent_rounds[0].id, "r2", "newest first");

    assert!(
        build_player_stats(&players, &rounds, &rules, "stranger").is_none(),
        "players off the roster have no stats"
    );
}
