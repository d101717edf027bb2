use async_trait::async_trait;
use std::error::Error;
use std::fmt;

use crate::error::CoreError;
use crate::model::{
    Player, PlayerStats, RoundsAndLastRefresh, StandingsData, format_time_ago_for_standings_view,
};
use crate::score::{build_player_stats, build_standings, normalize_rules};

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Supplier boundary for the scoring core. The membership, round-submission
/// and league-settings subsystems sit behind this trait; the core never
/// touches their persistence directly.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_league_players(&self, league_id: &str) -> Result<Vec<Player>, StorageError>;
    async fn get_league_rounds(
        &self,
        league_id: &str,
    ) -> Result<RoundsAndLastRefresh, StorageError>;
    /// Raw, possibly-partial scoring config as the league admin last saved it.
    async fn get_scoring_rules(
        &self,
        league_id: &str,
    ) -> Result<Option<serde_json::Value>, StorageError>;
}

/// Load everything the standings page needs and run the engine.
///
/// # Errors
/// Returns an error when a supplier fails; the scoring itself cannot fail.
pub async fn load_standings_data(
    storage: &dyn Storage,
    league_id: &str,
) -> Result<StandingsData, CoreError> {
    let players = storage.get_league_players(league_id).await?;
    let rounds_and_refresh = storage.get_league_rounds(league_id).await?;
    let raw_rules = storage.get_scoring_rules(league_id).await?;
    let rules = normalize_rules(raw_rules.as_ref());

    let standings = build_standings(&players, &rounds_and_refresh.rounds, &rules);
    let elapsed = chrono::Utc::now().naive_utc() - rounds_and_refresh.last_refresh;

    Ok(StandingsData {
        league_id: league_id.to_string(),
        standings,
        last_refresh: format_time_ago_for_standings_view(elapsed),
    })
}

/// Load a single player's standings row and recent rounds.
///
/// # Errors
/// Returns `CoreError::NotFound` when the player is not on the league roster.
pub async fn load_player_stats(
    storage: &dyn Storage,
    league_id: &str,
    user_id: &str,
) -> Result<PlayerStats, CoreError> {
    let players = storage.get_league_players(league_id).await?;
    let rounds_and_refresh = storage.get_league_rounds(league_id).await?;
    let raw_rules = storage.get_scoring_rules(league_id).await?;
    let rules = normalize_rules(raw_rules.as_ref());

    build_player_stats(&players, &rounds_and_refresh.rounds, &rules, user_id).ok_or_else(|| {
        CoreError::NotFound(format!("player {user_id} in league {league_id}"))
    })
}
