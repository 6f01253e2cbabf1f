// Opponent-adjusted splits: label player-weeks as offense produced by a team
// or as production allowed by that team's defense.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::schedule::normalize::NormalizedGame;
use crate::stats::record::{PlayerWeekRecord, StatKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitSide {
    /// The player's team is the searched team: stats it produced.
    Offense,
    /// The player's team is the searched team's opponent: stats it allowed.
    Defense,
}

pub fn offense_label(team: &str) -> String {
    format!("Offense {team}")
}

pub fn defense_label(team: &str) -> String {
    format!("Defense {team}")
}

/// A player-week joined to one normalized game.
#[derive(Debug, Clone)]
pub struct SplitRow<'a> {
    pub record: &'a PlayerWeekRecord,
    pub game: &'a NormalizedGame,
    pub side: SplitSide,
    /// `"Offense <searched_team>"` or `"Defense <searched_team>"`.
    pub team_category: String,
}

/// Join player-weeks against normalized games twice (inner joins on
/// year_week plus franchise) and concatenate offense rows then defense rows.
/// Records with no franchise name never match.
pub fn split_by_opponent<'a>(
    records: &'a [PlayerWeekRecord],
    normalized: &'a [NormalizedGame],
) -> Vec<SplitRow<'a>> {
    let mut by_searched: HashMap<(&str, &str), Vec<&NormalizedGame>> = HashMap::new();
    let mut by_opponent: HashMap<(&str, &str), Vec<&NormalizedGame>> = HashMap::new();
    for game in normalized {
        by_searched
            .entry((game.year_week.as_str(), game.searched_team.as_str()))
            .or_default()
            .push(game);
        by_opponent
            .entry((game.year_week.as_str(), game.opponent_team.as_str()))
            .or_default()
            .push(game);
    }

    let mut offense = Vec::new();
    let mut defense = Vec::new();
    for record in records {
        let Some(team) = record.real_team.as_deref() else {
            continue;
        };
        let key = (record.year_week.as_str(), team);
        for &game in by_searched.get(&key).into_iter().flatten() {
            offense.push(SplitRow {
                record,
                game,
                side: SplitSide::Offense,
                team_category: offense_label(&game.searched_team),
            });
        }
        for &game in by_opponent.get(&key).into_iter().flatten() {
            defense.push(SplitRow {
                record,
                game,
                side: SplitSide::Defense,
                team_category: defense_label(&game.searched_team),
            });
        }
    }

    offense.extend(defense);
    offense
}

/// Summed stat for one (year_week, player, team_category) group.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitTotal {
    pub year_week: String,
    pub player: String,
    pub team_category: String,
    pub value: f64,
}

/// Group split rows whose category is in `categories`, sum `stat`, and sort
/// by year_week ascending then value descending.
pub fn split_totals(rows: &[SplitRow<'_>], stat: StatKind, categories: &[String]) -> Vec<SplitTotal> {
    let mut groups: BTreeMap<(String, String, String), f64> = BTreeMap::new();
    for row in rows.iter().filter(|r| categories.contains(&r.team_category)) {
        *groups
            .entry((
                row.record.year_week.clone(),
                row.record.player.clone(),
                row.team_category.clone(),
            ))
            .or_insert(0.0) += row.record.stat(stat);
    }

    let mut totals: Vec<SplitTotal> = groups
        .into_iter()
        .map(|((year_week, player, team_category), value)| SplitTotal {
            year_week,
            player,
            team_category,
            value,
        })
        .collect();
    totals.sort_by(|a, b| {
        a.year_week
            .cmp(&b.year_week)
            .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
    });
    totals
}
