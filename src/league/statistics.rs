//! Per-team and per-player derived statistics for the detail views.

use crate::league::{
    League, LeagueDataError, MatchRecord, MatchSide, PlayerRef, TeamRef,
    table::{POINTS_PER_DRAW, POINTS_PER_WIN},
};
use chrono::NaiveDate;
use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

/// One match from a single team's perspective, for the match-history
/// drill-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMatchView {
    pub is_home: bool,
    pub opponent: TeamRef,
    pub goals_for: u32,
    pub goals_against: u32,
    pub outcome: MatchOutcome,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub team: TeamRef,
    pub matches_played: u32,
    pub win_count: u32,
    pub draw_count: u32,
    pub loss_count: u32,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i64,
    pub points: u32,
    pub clean_sheets: u32,
    pub assists_count: u32,
    pub win_percentage: f64,
    pub goals_per_match: f64,
    pub goals_conceded_per_match: f64,
    pub points_per_match: f64,
    pub matches: Vec<TeamMatchView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: PlayerRef,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub matches_played: u32,
    pub win_count: u32,
    pub draw_count: u32,
    pub loss_count: u32,
    pub win_percentage: f64,
    pub goals_per_match: f64,
    pub assists_per_match: f64,
}

/// Per-match average with the division guard: zero matches means zero, never
/// NaN or infinity.
fn per_match(value: f64, matches_played: u32) -> f64 {
    if matches_played == 0 {
        0.0
    } else {
        value / matches_played as f64
    }
}

/// Whether a match is usable for result accounting: scored, both teams in
/// the league set, winner (if any) one of the two sides. Mirrors the points
/// table's skip rules so the two views never disagree.
fn usable_for_results(league: &League, m: &MatchRecord) -> bool {
    if m.score.is_none() {
        return false;
    }

    if !league.has_team(m.team_a.id) || !league.has_team(m.team_b.id) {
        warn!(
            "league {}: match {} vs {} references a team outside the league, skipping",
            league.id, m.team_a.id, m.team_b.id
        );
        return false;
    }

    if let Some(winner_id) = m.winner {
        if m.side_of(winner_id).is_none() {
            warn!(
                "league {}: match {} vs {} names winner {} which is neither side, skipping",
                league.id, m.team_a.id, m.team_b.id, winner_id
            );
            return false;
        }
    }

    true
}

fn outcome_for(m: &MatchRecord, side: MatchSide) -> MatchOutcome {
    match m.winning_side() {
        Some(winning) if winning == side => MatchOutcome::Win,
        Some(_) => MatchOutcome::Loss,
        None => MatchOutcome::Draw,
    }
}

impl TeamStats {
    pub fn compute(team_id: u32, league: &League) -> Result<TeamStats, LeagueDataError> {
        league.validate()?;

        let team = league
            .team(team_id)
            .cloned()
            .ok_or(LeagueDataError::UnknownTeam {
                league_id: league.id,
                team_id,
            })?;

        let mut stats = TeamStats {
            team,
            matches_played: 0,
            win_count: 0,
            draw_count: 0,
            loss_count: 0,
            goals_scored: 0,
            goals_conceded: 0,
            goal_difference: 0,
            points: 0,
            clean_sheets: 0,
            assists_count: 0,
            win_percentage: 0.0,
            goals_per_match: 0.0,
            goals_conceded_per_match: 0.0,
            points_per_match: 0.0,
            matches: Vec::new(),
        };

        for m in &league.matches {
            let Some(side) = m.side_of(team_id) else {
                continue;
            };

            if !usable_for_results(league, m) {
                continue;
            }

            stats.assists_count += m
                .assists
                .iter()
                .filter(|event| event.team.id == team_id)
                .map(|event| event.count)
                .sum::<u32>();

            let (scored, conceded) = m.goals_for(side).unwrap_or((0, 0));
            let outcome = outcome_for(m, side);

            stats.matches_played += 1;
            stats.goals_scored += scored;
            stats.goals_conceded += conceded;

            match outcome {
                MatchOutcome::Win => {
                    stats.win_count += 1;
                    stats.points += POINTS_PER_WIN;
                }
                MatchOutcome::Draw => {
                    stats.draw_count += 1;
                    stats.points += POINTS_PER_DRAW;
                }
                MatchOutcome::Loss => stats.loss_count += 1,
            }

            if m.clean_sheet_flag(side) {
                stats.clean_sheets += 1;
            }

            stats.matches.push(TeamMatchView {
                is_home: side == MatchSide::Home,
                opponent: m.team(side.opposite()).clone(),
                goals_for: scored,
                goals_against: conceded,
                outcome,
                date: m.date,
            });
        }

        stats.goal_difference = stats.goals_scored as i64 - stats.goals_conceded as i64;
        stats.win_percentage = per_match(stats.win_count as f64 * 100.0, stats.matches_played);
        stats.goals_per_match = per_match(stats.goals_scored as f64, stats.matches_played);
        stats.goals_conceded_per_match =
            per_match(stats.goals_conceded as f64, stats.matches_played);
        stats.points_per_match = per_match(stats.points as f64, stats.matches_played);

        Ok(stats)
    }
}

impl PlayerStats {
    /// Aggregate a player's record across every league they appear in as a
    /// scorer, assist contributor or credited clean-sheet goalkeeper.
    ///
    /// No per-player appearance roster exists in the data model, so
    /// `matches_played` (and the mirrored win/draw/loss counts) are the
    /// player's team's totals in each league where the player was credited
    /// with any event.
    pub fn compute(player: &PlayerRef, leagues: &[League]) -> Result<PlayerStats, LeagueDataError> {
        let mut stats = PlayerStats {
            player: player.clone(),
            goals: 0,
            assists: 0,
            clean_sheets: 0,
            matches_played: 0,
            win_count: 0,
            draw_count: 0,
            loss_count: 0,
            win_percentage: 0.0,
            goals_per_match: 0.0,
            assists_per_match: 0.0,
        };

        for league in leagues {
            league.validate()?;

            // Last-seen team association within this league.
            let mut team_id: Option<u32> = None;

            for m in &league.matches {
                for event in m.scorers.iter().filter(|e| e.player.id == player.id) {
                    stats.goals += event.count;
                    team_id = Some(event.team.id);
                }

                for event in m.assists.iter().filter(|e| e.player.id == player.id) {
                    stats.assists += event.count;
                    team_id = Some(event.team.id);
                }

                for side in [MatchSide::Home, MatchSide::Away] {
                    if m.clean_sheet_flag(side)
                        && m.goalkeeper(side).is_some_and(|k| k.id == player.id)
                    {
                        stats.clean_sheets += 1;
                        team_id = Some(m.team(side).id);
                    }
                }
            }

            let Some(team_id) = team_id else {
                continue;
            };

            for m in &league.matches {
                let Some(side) = m.side_of(team_id) else {
                    continue;
                };

                if !usable_for_results(league, m) {
                    continue;
                }

                stats.matches_played += 1;
                match outcome_for(m, side) {
                    MatchOutcome::Win => stats.win_count += 1,
                    MatchOutcome::Draw => stats.draw_count += 1,
                    MatchOutcome::Loss => stats.loss_count += 1,
                }
            }
        }

        stats.win_percentage = per_match(stats.win_count as f64 * 100.0, stats.matches_played);
        stats.goals_per_match = per_match(stats.goals as f64, stats.matches_played);
        stats.assists_per_match = per_match(stats.assists as f64, stats.matches_played);

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::{CleanSheets, GoalEvent, Score};

    fn team(id: u32, name: &str) -> TeamRef {
        TeamRef::new(id, String::from(name))
    }

    fn player(id: u32, name: &str) -> PlayerRef {
        PlayerRef::new(id, String::from(name))
    }

    fn league_of(teams: &[(u32, &str)]) -> League {
        let mut league = League::new(1, String::from("Dream League"));
        league.teams = teams.iter().map(|(id, name)| team(*id, name)).collect();
        league
    }

    fn scored(league: &League, a: u32, b: u32, score: (u32, u32), winner: Option<u32>) -> MatchRecord {
        let mut m = MatchRecord::new(
            league.team(a).unwrap().clone(),
            league.team(b).unwrap().clone(),
        );
        m.score = Some(Score {
            team_a: score.0,
            team_b: score.1,
        });
        m.winner = winner;
        m
    }

    #[test]
    fn test_team_stats_counts_and_rates() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers"), (3, "Falcons")]);
        let m1 = scored(&league, 1, 2, (3, 1), Some(1));
        let m2 = scored(&league, 3, 1, (2, 2), None);
        let m3 = scored(&league, 1, 3, (0, 1), Some(3));
        league.matches.extend([m1, m2, m3]);

        let stats = TeamStats::compute(1, &league).unwrap();

        assert_eq!(stats.matches_played, 3);
        assert_eq!(stats.win_count, 1);
        assert_eq!(stats.draw_count, 1);
        assert_eq!(stats.loss_count, 1);
        assert_eq!(stats.goals_scored, 5);
        assert_eq!(stats.goals_conceded, 4);
        assert_eq!(stats.goal_difference, 1);
        assert_eq!(stats.points, 4);
        assert!((stats.win_percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((stats.goals_per_match - 5.0 / 3.0).abs() < 1e-9);
        assert!((stats.points_per_match - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_team_match_history_perspective() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers")]);
        let m = scored(&league, 2, 1, (0, 2), Some(1));
        league.matches.push(m);

        let stats = TeamStats::compute(1, &league).unwrap();

        assert_eq!(stats.matches.len(), 1);
        let view = &stats.matches[0];
        assert!(!view.is_home);
        assert_eq!(view.opponent.id, 2);
        assert_eq!(view.goals_for, 2);
        assert_eq!(view.goals_against, 0);
        assert_eq!(view.outcome, MatchOutcome::Win);
    }

    #[test]
    fn test_zero_match_team_rates_are_zero() {
        let league = league_of(&[(1, "Lions"), (2, "Tigers")]);

        let stats = TeamStats::compute(1, &league).unwrap();

        assert_eq!(stats.matches_played, 0);
        assert_eq!(stats.win_percentage, 0.0);
        assert_eq!(stats.goals_per_match, 0.0);
        assert_eq!(stats.points_per_match, 0.0);
    }

    #[test]
    fn test_unknown_team_is_an_error() {
        let league = league_of(&[(1, "Lions")]);

        assert_eq!(
            TeamStats::compute(42, &league).unwrap_err(),
            LeagueDataError::UnknownTeam {
                league_id: 1,
                team_id: 42
            }
        );
    }

    #[test]
    fn test_team_clean_sheets_and_assists() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers")]);
        let mut m = scored(&league, 1, 2, (2, 0), Some(1));
        m.clean_sheets = CleanSheets {
            team_a: true,
            team_b: false,
            goalkeeper_a: Some(player(30, "Hassan")),
            goalkeeper_b: None,
        };
        m.assists = vec![GoalEvent {
            player: player(10, "Ali"),
            team: team(1, "Lions"),
            count: 2,
        }];
        league.matches.push(m);

        let stats = TeamStats::compute(1, &league).unwrap();

        assert_eq!(stats.clean_sheets, 1);
        assert_eq!(stats.assists_count, 2);
    }

    #[test]
    fn test_bogus_winner_match_is_excluded() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers")]);
        let good = scored(&league, 1, 2, (2, 0), Some(1));
        let bogus = scored(&league, 1, 2, (3, 1), Some(99));
        league.matches.extend([good, bogus]);

        let stats = TeamStats::compute(1, &league).unwrap();

        assert_eq!(stats.matches_played, 1);
        assert_eq!(stats.goals_scored, 2);
        assert_eq!(stats.win_count, 1);
        assert_eq!(stats.matches.len(), 1);
    }

    #[test]
    fn test_unscored_match_assists_are_not_counted() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers")]);

        let mut pending = MatchRecord::new(
            league.team(1).unwrap().clone(),
            league.team(2).unwrap().clone(),
        );
        pending.assists = vec![GoalEvent {
            player: player(10, "Ali"),
            team: team(1, "Lions"),
            count: 1,
        }];

        let mut m = scored(&league, 1, 2, (1, 0), Some(1));
        m.assists = vec![GoalEvent {
            player: player(10, "Ali"),
            team: team(1, "Lions"),
            count: 2,
        }];

        league.matches.extend([pending, m]);

        let stats = TeamStats::compute(1, &league).unwrap();

        assert_eq!(stats.assists_count, 2);
    }

    #[test]
    fn test_player_stats_across_leagues() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers")]);

        let mut m1 = scored(&league, 1, 2, (2, 0), Some(1));
        m1.scorers = vec![GoalEvent {
            player: player(10, "Ali"),
            team: team(1, "Lions"),
            count: 2,
        }];
        let mut m2 = scored(&league, 2, 1, (1, 1), None);
        m2.assists = vec![GoalEvent {
            player: player(10, "Ali"),
            team: team(1, "Lions"),
            count: 1,
        }];
        league.matches.extend([m1, m2]);

        let stats = PlayerStats::compute(&player(10, "Ali"), &[league]).unwrap();

        assert_eq!(stats.goals, 2);
        assert_eq!(stats.assists, 1);
        // The player's team played both scored matches.
        assert_eq!(stats.matches_played, 2);
        assert_eq!(stats.win_count, 1);
        assert_eq!(stats.draw_count, 1);
        assert!((stats.win_percentage - 50.0).abs() < 1e-9);
        assert!((stats.goals_per_match - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_goalkeeper_clean_sheet_credit() {
        let mut league = league_of(&[(1, "Lions"), (2, "Tigers")]);
        let mut m = scored(&league, 1, 2, (0, 0), None);
        m.clean_sheets = CleanSheets {
            team_a: true,
            team_b: true,
            goalkeeper_a: Some(player(30, "Hassan")),
            goalkeeper_b: Some(player(31, "Usman")),
        };
        league.matches.push(m);

        let stats = PlayerStats::compute(&player(31, "Usman"), std::slice::from_ref(&league)).unwrap();

        assert_eq!(stats.clean_sheets, 1);
        assert_eq!(stats.matches_played, 1);
        assert_eq!(stats.draw_count, 1);
    }

    #[test]
    fn test_player_with_no_events_has_zeroed_stats() {
        let league = league_of(&[(1, "Lions"), (2, "Tigers")]);

        let stats = PlayerStats::compute(&player(99, "Nobody"), &[league]).unwrap();

        assert_eq!(stats.matches_played, 0);
        assert_eq!(stats.win_percentage, 0.0);
    }
}
