use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::round::Round;

/// League roster entry as supplied by the membership subsystem.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
}

/// One entry of a row's recent-form strip: a single round's contribution.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoundSnapshot {
    pub points: f64,
    pub is_major: bool,
    pub date: String,
}

/// One line of the standings table. Every roster member gets a row, even with
/// zero rounds logged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StandingsRow {
    pub user_id: String,
    pub name: String,
    pub points: f64,
    pub rounds: u32,
    pub majors: u32,
    pub birdies: u32,
    pub eagles: u32,
    pub hio: u32,
    /// The 5 most recent rounds by date, newest first.
    pub last5: Vec<RoundSnapshot>,
}

impl StandingsRow {
    #[must_use]
    pub fn empty(user_id: String, name: String) -> Self {
        Self {
            user_id,
            name,
            points: 0.0,
            rounds: 0,
            majors: 0,
            birdies: 0,
            eagles: 0,
            hio: 0,
            last5: Vec::new(),
        }
    }
}

/// Everything the standings page renders for one league.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StandingsData {
    pub league_id: String,
    pub standings: Vec<StandingsRow>,
    /// Humanized age of the round data, e.g. "4 minutes".
    pub last_refresh: String,
}

/// A single player's standings row plus their own rounds, newest first.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlayerStats {
    pub row: StandingsRow,
    pub recent_rounds: Vec<Round>,
}

/// Round fetch bundle from storage, stamped with when the data was written.
#[derive(Clone, Debug)]
pub struct RoundsAndLastRefresh {
    pub rounds: Vec<Round>,
    pub last_refresh: NaiveDateTime,
}
