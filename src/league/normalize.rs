//! Boundary normalization for reference fields.
//!
//! The persistence layer hands over player and team references either as a
//! bare id or as an embedded (populated) object, depending on how the query
//! was made. Everything downstream works on resolved [`PlayerRef`] /
//! [`TeamRef`] values, so that ambiguity is collapsed exactly once, here.

use crate::league::{CleanSheets, GoalEvent, PlayerRef, TeamRef};
use serde::Deserialize;

const UNKNOWN_PLAYER: &str = "Unknown Player";
const UNKNOWN_TEAM: &str = "Unknown Team";

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPlayerField {
    Id(u32),
    Object(PlayerRef),
}

impl RawPlayerField {
    pub fn resolve(self) -> PlayerRef {
        match self {
            RawPlayerField::Id(id) => PlayerRef::new(id, String::from(UNKNOWN_PLAYER)),
            RawPlayerField::Object(player) => player,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTeamField {
    Id(u32),
    Object(TeamRef),
}

impl RawTeamField {
    pub fn resolve(self) -> TeamRef {
        match self {
            RawTeamField::Id(id) => TeamRef::new(id, String::from(UNKNOWN_TEAM)),
            RawTeamField::Object(team) => team,
        }
    }
}

/// A scorer or assist entry as it arrives from the API layer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGoalEvent {
    pub player: RawPlayerField,
    pub team: RawTeamField,
    pub score: u32,
}

impl RawGoalEvent {
    pub fn resolve(self) -> GoalEvent {
        GoalEvent {
            player: self.player.resolve(),
            team: self.team.resolve(),
            count: self.score,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCleanSheets {
    #[serde(default)]
    pub team_a: bool,
    #[serde(default)]
    pub team_b: bool,
    #[serde(default)]
    pub goalkeeper_a: Option<RawPlayerField>,
    #[serde(default)]
    pub goalkeeper_b: Option<RawPlayerField>,
}

impl RawCleanSheets {
    pub fn resolve(self) -> CleanSheets {
        CleanSheets {
            team_a: self.team_a,
            team_b: self.team_b,
            goalkeeper_a: self.goalkeeper_a.map(RawPlayerField::resolve),
            goalkeeper_b: self.goalkeeper_b.map(RawPlayerField::resolve),
        }
    }
}
