use std::fmt;

/// Structural problems in league data that indicate an upstream data-entry
/// bug. These are rejected outright; ordinary gaps (missing scores, teams
/// outside the league set) are skipped with a warning instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeagueDataError {
    /// A match references the same team on both sides.
    IdenticalTeams { league_id: u32, team_id: u32 },
    /// The requested team is not part of the league.
    UnknownTeam { league_id: u32, team_id: u32 },
}

impl fmt::Display for LeagueDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueDataError::IdenticalTeams { league_id, team_id } => {
                write!(
                    f,
                    "league {}: match lists team {} on both sides",
                    league_id, team_id
                )
            }
            LeagueDataError::UnknownTeam { league_id, team_id } => {
                write!(f, "league {}: team {} is not a participant", league_id, team_id)
            }
        }
    }
}

impl std::error::Error for LeagueDataError {}
