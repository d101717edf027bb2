pub mod error;
pub mod model;
pub mod score;
pub mod storage;

pub use error::CoreError;
pub use model::{
    Player, PlayerStats, Round, RoundSnapshot, RoundsAndLastRefresh, ScoringRules, StandingsData,
    StandingsRow,
};
pub use score::{build_player_stats, build_standings, normalize_rules};
pub use storage::{Storage, StorageError, load_player_stats, load_standings_data};
