//! League points table, recomputed from scratch on every call.

use crate::league::{League, LeagueDataError, TeamRef};
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

pub const POINTS_PER_WIN: u32 = 3;
pub const POINTS_PER_DRAW: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueTableRow {
    pub rank: u32,
    pub team: TeamRef,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl LeagueTableRow {
    fn zeroed(team: TeamRef) -> Self {
        LeagueTableRow {
            rank: 0,
            team,
            played: 0,
            win: 0,
            draw: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    /// Build the ranked standings for a league snapshot.
    ///
    /// Every participating team gets a row, zero-match teams included.
    /// Matches missing a score are skipped (early-season state); matches
    /// referencing teams outside the league set or a winner that is neither
    /// side are skipped with a data-integrity warning. Ties on points, goal
    /// difference and goals-for keep the teams' insertion order.
    pub fn compute(league: &League) -> Result<LeagueTable, LeagueDataError> {
        league.validate()?;

        let mut rows: Vec<LeagueTableRow> = league
            .teams
            .iter()
            .map(|team| LeagueTableRow::zeroed(team.clone()))
            .collect();

        let index: HashMap<u32, usize> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| (row.team.id, i))
            .collect();

        for m in &league.matches {
            let Some(score) = m.score else {
                debug!(
                    "league {}: match {} vs {} has no score yet, skipping",
                    league.id, m.team_a.id, m.team_b.id
                );
                continue;
            };

            let (Some(&ia), Some(&ib)) = (index.get(&m.team_a.id), index.get(&m.team_b.id))
            else {
                warn!(
                    "league {}: match {} vs {} references a team outside the league, skipping",
                    league.id, m.team_a.id, m.team_b.id
                );
                continue;
            };

            let result = match m.winner {
                None => None,
                Some(winner_id) if winner_id == m.team_a.id || winner_id == m.team_b.id => {
                    Some(winner_id)
                }
                Some(winner_id) => {
                    warn!(
                        "league {}: match {} vs {} names winner {} which is neither side, skipping",
                        league.id, m.team_a.id, m.team_b.id, winner_id
                    );
                    continue;
                }
            };

            rows[ia].played += 1;
            rows[ib].played += 1;

            rows[ia].goals_for += score.team_a;
            rows[ia].goals_against += score.team_b;
            rows[ib].goals_for += score.team_b;
            rows[ib].goals_against += score.team_a;

            match result {
                Some(winner_id) => {
                    let (iw, il) = if winner_id == m.team_a.id { (ia, ib) } else { (ib, ia) };
                    rows[iw].win += 1;
                    rows[iw].points += POINTS_PER_WIN;
                    rows[il].lost += 1;
                }
                None => {
                    rows[ia].draw += 1;
                    rows[ib].draw += 1;
                    rows[ia].points += POINTS_PER_DRAW;
                    rows[ib].points += POINTS_PER_DRAW;
                }
            }
        }

        for row in rows.iter_mut() {
            row.goal_difference = row.goals_for as i64 - row.goals_against as i64;
        }

        // Stable sort: equal-on-all-three teams keep their insertion order.
        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.goal_difference.cmp(&a.goal_difference))
                .then(b.goals_for.cmp(&a.goals_for))
        });

        for (position, row) in rows.iter_mut().enumerate() {
            row.rank = (position + 1) as u32;
        }

        Ok(LeagueTable { rows })
    }
}
