use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully-populated scoring policy for a league.
///
/// Produced by [`crate::score::normalize_rules`]; by the time the standings
/// engine sees one of these, every field is present and the placement table
/// is non-empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringRules {
    /// Finishing place (1 = best) to points awarded. Places not listed award 0.
    pub placement_points: BTreeMap<u32, i64>,
    pub participation: ParticipationRule,
    pub bonuses: BonusRules,
    pub mode: RankMode,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            placement_points: default_placement_points(),
            participation: ParticipationRule::default(),
            bonuses: BonusRules::default(),
            mode: RankMode::Medal,
        }
    }
}

/// Fallback placement table when a league has none configured.
#[must_use]
pub fn default_placement_points() -> BTreeMap<u32, i64> {
    BTreeMap::from([(1, 3), (2, 2), (3, 0)])
}

/// Flat point for having played, independent of placement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipationRule {
    pub enabled: bool,
    pub points: i64,
}

impl Default for ParticipationRule {
    fn default() -> Self {
        Self {
            enabled: false,
            points: 1,
        }
    }
}

/// Per-achievement bonus switches. Each sub-bonus only fires when both its
/// own flag and the parent `enabled` flag are set.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusRules {
    pub enabled: bool,
    pub birdie: BonusRule,
    pub eagle: BonusRule,
    pub hio: BonusRule,
}

impl Default for BonusRules {
    fn default() -> Self {
        Self {
            enabled: false,
            birdie: BonusRule {
                enabled: false,
                points: 1,
            },
            eagle: BonusRule {
                enabled: false,
                points: 2,
            },
            hio: BonusRule {
                enabled: false,
                points: 5,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusRule {
    pub enabled: bool,
    pub points: i64,
}

/// Metric used to rank rounds within an event.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Lower gross score wins.
    #[default]
    Medal,
    /// Higher stableford points win.
    Stableford,
    /// Higher score-relative-to-handicap wins.
    Handicap,
}

impl RankMode {
    /// Parse a mode string; anything unrecognized falls back to medal play.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "stableford" => Self::Stableford,
            "handicap" => Self::Handicap,
            _ => Self::Medal,
        }
    }

    #[must_use]
    pub const fn higher_is_better(self) -> bool {
        !matches!(self, Self::Medal)
    }
}
