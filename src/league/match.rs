use crate::league::{PlayerRef, TeamRef};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub team_a: u32,
    pub team_b: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSide {
    Home,
    Away,
}

impl MatchSide {
    pub fn opposite(&self) -> MatchSide {
        match self {
            MatchSide::Home => MatchSide::Away,
            MatchSide::Away => MatchSide::Home,
        }
    }
}

/// A goal or assist credit: a player scored (or assisted) `count` times for
/// `team` in this match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    pub player: PlayerRef,
    pub team: TeamRef,
    #[serde(rename = "score")]
    pub count: u32,
}

/// Per-side clean-sheet flags with the credited goalkeeper. The flag for a
/// side is derived from the opponent scoring zero; a stored contradiction is
/// a data-integrity warning, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSheets {
    #[serde(default)]
    pub team_a: bool,
    #[serde(default)]
    pub team_b: bool,
    #[serde(default)]
    pub goalkeeper_a: Option<PlayerRef>,
    #[serde(default)]
    pub goalkeeper_b: Option<PlayerRef>,
}

/// A single recorded match of a league. `winner` absent means a draw;
/// `score` absent means the match has not been played (or entered) yet and
/// is excluded from aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team_a: TeamRef,
    pub team_b: TeamRef,
    #[serde(default)]
    pub score: Option<Score>,
    #[serde(default)]
    pub winner: Option<u32>,
    #[serde(default)]
    pub scorers: Vec<GoalEvent>,
    #[serde(default)]
    pub assists: Vec<GoalEvent>,
    #[serde(default)]
    pub clean_sheets: CleanSheets,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
}

impl MatchRecord {
    pub fn new(team_a: TeamRef, team_b: TeamRef) -> Self {
        MatchRecord {
            team_a,
            team_b,
            score: None,
            winner: None,
            scorers: Vec::new(),
            assists: Vec::new(),
            clean_sheets: CleanSheets::default(),
            date: None,
            time: None,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.team_a.id == team_id || self.team_b.id == team_id
    }

    pub fn side_of(&self, team_id: u32) -> Option<MatchSide> {
        if self.team_a.id == team_id {
            Some(MatchSide::Home)
        } else if self.team_b.id == team_id {
            Some(MatchSide::Away)
        } else {
            None
        }
    }

    pub fn team(&self, side: MatchSide) -> &TeamRef {
        match side {
            MatchSide::Home => &self.team_a,
            MatchSide::Away => &self.team_b,
        }
    }

    /// (own goals, opponent goals) from one side's perspective.
    pub fn goals_for(&self, side: MatchSide) -> Option<(u32, u32)> {
        let score = self.score?;
        Some(match side {
            MatchSide::Home => (score.team_a, score.team_b),
            MatchSide::Away => (score.team_b, score.team_a),
        })
    }

    /// The winner reference, if it actually names one of the two sides.
    pub fn winning_side(&self) -> Option<MatchSide> {
        self.winner.and_then(|id| self.side_of(id))
    }

    pub fn clean_sheet_flag(&self, side: MatchSide) -> bool {
        match side {
            MatchSide::Home => self.clean_sheets.team_a,
            MatchSide::Away => self.clean_sheets.team_b,
        }
    }

    pub fn goalkeeper(&self, side: MatchSide) -> Option<&PlayerRef> {
        match side {
            MatchSide::Home => self.clean_sheets.goalkeeper_a.as_ref(),
            MatchSide::Away => self.clean_sheets.goalkeeper_b.as_ref(),
        }
    }

    /// Whether the stored clean-sheet flag for a side agrees with the score:
    /// the flag must be true exactly when the opponent scored zero. Always
    /// true for unscored matches, where nothing can be derived yet.
    pub fn clean_sheet_consistent(&self, side: MatchSide) -> bool {
        match self.goals_for(side) {
            Some((_, conceded)) => self.clean_sheet_flag(side) == (conceded == 0),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: u32, name: &str) -> TeamRef {
        TeamRef::new(id, String::from(name))
    }

    #[test]
    fn test_perspective_helpers() {
        let mut m = MatchRecord::new(team(1, "Lions"), team(2, "Tigers"));
        m.score = Some(Score { team_a: 3, team_b: 1 });
        m.winner = Some(1);

        assert_eq!(m.side_of(2), Some(MatchSide::Away));
        assert_eq!(m.goals_for(MatchSide::Away), Some((1, 3)));
        assert_eq!(m.winning_side(), Some(MatchSide::Home));
        assert!(m.involves(1));
        assert!(!m.involves(3));
    }

    #[test]
    fn test_winner_outside_match_has_no_side() {
        let mut m = MatchRecord::new(team(1, "Lions"), team(2, "Tigers"));
        m.winner = Some(99);

        assert_eq!(m.winning_side(), None);
    }

    #[test]
    fn test_clean_sheet_consistency() {
        let mut m = MatchRecord::new(team(1, "Lions"), team(2, "Tigers"));
        m.score = Some(Score { team_a: 2, team_b: 0 });
        m.clean_sheets.team_a = true;

        assert!(m.clean_sheet_consistent(MatchSide::Home));
        assert!(m.clean_sheet_consistent(MatchSide::Away));

        // Flag claims a shutout the score contradicts.
        m.clean_sheets.team_b = true;
        assert!(!m.clean_sheet_consistent(MatchSide::Away));
    }
}
