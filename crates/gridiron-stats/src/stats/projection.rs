// Full-season pace projections.

use std::collections::HashMap;

use crate::stats::record::{PlayerWeekRecord, StatKind};
use crate::stats::season::SeasonAggregate;

/// Games played so far per team code in `season`, approximated by the
/// highest week any of the team's players appears in.
pub fn games_played_by_team(records: &[PlayerWeekRecord], season: i32) -> HashMap<String, u32> {
    let mut max_week: HashMap<String, u32> = HashMap::new();
    for record in records.iter().filter(|r| r.season == season) {
        let Some(week) = record.week else { continue };
        let entry = max_week.entry(record.team.clone()).or_insert(0);
        *entry = (*entry).max(week);
    }
    max_week
}

/// Extrapolate `total` over `games_played` to a `games_per_season` season,
/// rounded to a whole number. `None` when no games have been played.
pub fn project(total: f64, games_played: u32, games_per_season: u32) -> Option<f64> {
    if games_played == 0 {
        return None;
    }
    Some((total / games_played as f64 * games_per_season as f64).round_ties_even())
}

/// Projected season totals for the leaderboard columns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectedStats {
    pub passing_yds: Option<f64>,
    pub rushing_yds: Option<f64>,
    pub receiving_yds: Option<f64>,
    pub touchdowns: Option<f64>,
}

/// Project a season aggregate using its team's games played.
pub fn project_season(
    agg: &SeasonAggregate,
    games_played: Option<u32>,
    games_per_season: u32,
) -> ProjectedStats {
    let games = games_played.unwrap_or(0);
    let p = |kind: StatKind| project(agg.total(kind), games, games_per_season);
    ProjectedStats {
        passing_yds: p(StatKind::PassingYds),
        rushing_yds: p(StatKind::RushingYds),
        receiving_yds: p(StatKind::ReceivingYds),
        touchdowns: p(StatKind::RushingReceivingTd),
    }
}
