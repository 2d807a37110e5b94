use crate::league::{LeagueDataError, MatchRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resolved team reference, carried by matches and produced rows for
/// display. References are normalized before they reach the aggregators,
/// so names and logos are always available here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

impl TeamRef {
    pub fn new(id: u32, name: String) -> Self {
        TeamRef { id, name, logo: None }
    }
}

/// A resolved player reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub id: u32,
    pub name: String,
}

impl PlayerRef {
    pub fn new(id: u32, name: String) -> Self {
        PlayerRef { id, name }
    }
}

/// A full team record with its roster. The aggregators only need
/// [`TeamRef`]s; this is the shape the surrounding persistence layer
/// manages teams in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub players: Vec<PlayerRef>,
}

impl Team {
    pub fn new(id: u32, name: String, city: String) -> Self {
        Team {
            id,
            name,
            city,
            players: Vec::new(),
        }
    }

    pub fn as_ref(&self) -> TeamRef {
        TeamRef::new(self.id, self.name.clone())
    }
}

/// A league snapshot: the participating teams and every match recorded so
/// far. All standings and statistics are recomputed from this on every call,
/// never cached, so edits to matches are always reflected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub teams: Vec<TeamRef>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl League {
    pub fn new(id: u32, name: String) -> Self {
        League {
            id,
            name,
            start_date: None,
            end_date: None,
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn team(&self, team_id: u32) -> Option<&TeamRef> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn has_team(&self, team_id: u32) -> bool {
        self.team(team_id).is_some()
    }

    /// Reject matches that list the same team on both sides. That is a
    /// data-entry bug, not a tolerable gap, so aggregation refuses to run
    /// over it.
    pub fn validate(&self) -> Result<(), LeagueDataError> {
        for m in &self.matches {
            if m.team_a.id == m.team_b.id {
                return Err(LeagueDataError::IdenticalTeams {
                    league_id: self.id,
                    team_id: m.team_a.id,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::MatchRecord;

    #[test]
    fn test_identical_teams_rejected() {
        let mut league = League::new(1, String::from("Premier League"));
        let team = TeamRef::new(10, String::from("Lions"));
        league.teams.push(team.clone());

        league
            .matches
            .push(MatchRecord::new(team.clone(), team.clone()));

        assert_eq!(
            league.validate(),
            Err(LeagueDataError::IdenticalTeams {
                league_id: 1,
                team_id: 10
            })
        );
    }
}
