//! Top-scorer, top-assist and clean-sheet leaderboards.

use crate::league::{League, LeagueDataError, MatchRecord, MatchSide, GoalEvent, PlayerRef, TeamRef};
use itertools::Itertools;
use log::warn;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// One leaderboard row: a player's aggregated goal (or assist) total across
/// the league, with the team shown for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTally {
    pub player: PlayerRef,
    pub team: TeamRef,
    pub total: u32,
}

/// Goal leaderboard plus the league-wide goal count shown as a summary
/// figure next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerBoard {
    pub entries: Vec<PlayerTally>,
    pub total_goals: u32,
}

/// A team's clean-sheet record: totals per credited goalkeeper, since a team
/// may rotate keepers across the season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanSheetEntry {
    pub team: TeamRef,
    pub goalkeepers: BTreeMap<String, u32>,
    pub total: u32,
}

/// Group events by player identity. A player who changed teams mid-league
/// still aggregates into one row; the team shown is the last one seen in
/// iteration order. Sorting is stable, so equal totals keep encounter order.
fn tally_events<'l, F>(league: &'l League, events: F) -> (Vec<PlayerTally>, u32)
where
    F: Fn(&'l MatchRecord) -> &'l [GoalEvent],
{
    let mut entries: Vec<PlayerTally> = Vec::new();
    let mut by_player: HashMap<u32, usize> = HashMap::new();
    let mut grand_total = 0u32;

    for m in &league.matches {
        for event in events(m) {
            grand_total += event.count;

            match by_player.get(&event.player.id) {
                Some(&i) => {
                    entries[i].total += event.count;
                    entries[i].team = event.team.clone();
                }
                None => {
                    by_player.insert(event.player.id, entries.len());
                    entries.push(PlayerTally {
                        player: event.player.clone(),
                        team: event.team.clone(),
                        total: event.count,
                    });
                }
            }
        }
    }

    entries.sort_by(|a, b| b.total.cmp(&a.total));

    (entries, grand_total)
}

/// Goals per player across all matches, plus the league's total goal count.
pub fn compute_top_scorers(league: &League) -> Result<ScorerBoard, LeagueDataError> {
    league.validate()?;

    let (entries, total_goals) = tally_events(league, |m| m.scorers.as_slice());

    Ok(ScorerBoard {
        entries,
        total_goals,
    })
}

/// Assists per player, same grouping and ordering as the goal board.
pub fn compute_top_assists(league: &League) -> Result<Vec<PlayerTally>, LeagueDataError> {
    league.validate()?;

    let (entries, _) = tally_events(league, |m| m.assists.as_slice());

    Ok(entries)
}

/// Clean sheets per team, broken down by credited goalkeeper.
///
/// A side counts only when its flag is set and a goalkeeper is recorded.
/// Flags that contradict the stored score are taken as stored but logged as
/// a data-integrity warning.
pub fn compute_clean_sheet_leaders(
    league: &League,
) -> Result<Vec<CleanSheetEntry>, LeagueDataError> {
    league.validate()?;

    let mut entries: Vec<CleanSheetEntry> = Vec::new();
    let mut by_team: HashMap<u32, usize> = HashMap::new();

    for m in &league.matches {
        for side in [MatchSide::Home, MatchSide::Away] {
            if !m.clean_sheet_consistent(side) {
                warn!(
                    "league {}: clean-sheet flag for team {} disagrees with the score of {} vs {}",
                    league.id,
                    m.team(side).id,
                    m.team_a.id,
                    m.team_b.id
                );
            }

            if !m.clean_sheet_flag(side) {
                continue;
            }

            let Some(keeper) = m.goalkeeper(side) else {
                continue;
            };

            let team = m.team(side);
            let i = match by_team.get(&team.id) {
                Some(&i) => i,
                None => {
                    by_team.insert(team.id, entries.len());
                    entries.push(CleanSheetEntry {
                        team: team.clone(),
                        goalkeepers: BTreeMap::new(),
                        total: 0,
                    });
                    entries.len() - 1
                }
            };

            *entries[i].goalkeepers.entry(keeper.name.clone()).or_insert(0) += 1;
            entries[i].total += 1;
        }
    }

    Ok(entries
        .into_iter()
        .sorted_by(|a, b| b.total.cmp(&a.total))
        .collect())
}
