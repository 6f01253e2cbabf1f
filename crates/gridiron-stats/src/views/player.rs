// Player page: season totals, weekly series and a latest-season snapshot.

use std::collections::{BTreeMap, BTreeSet};

use crate::context::DashboardContext;
use crate::stats::record::{DerivedStats, PlayerWeekRecord, StatLine, YardageKind};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonTotal {
    pub season: i32,
    pub games: u32,
    pub stats: StatLine,
    pub derived: DerivedStats,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyPoint {
    pub season: i32,
    pub week: Option<u32>,
    pub value: f64,
}

/// Headline numbers for the player's most recent season in the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatestSnapshot {
    pub season: i32,
    pub passing_yds: f64,
    pub passing_td: f64,
    pub interceptions: f64,
    pub rushing_yds: f64,
    pub rushing_td: f64,
    pub receiving_yds: f64,
    pub receiving_td: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPage {
    pub player: String,
    /// First franchise seen in the filtered rows, or `"Unknown"`.
    pub team_label: String,
    pub season_totals: Vec<PlayerSeasonTotal>,
    /// Weekly values per yardage type, only for types with a positive total.
    pub weekly: Vec<(YardageKind, Vec<WeeklyPoint>)>,
    pub latest: LatestSnapshot,
}

/// Sorted distinct player names.
pub fn players(ctx: &DashboardContext) -> Vec<String> {
    ctx.records
        .iter()
        .map(|r| r.player.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Build the page for `player`, optionally restricted to weeks played for
/// `team`. `None` when no rows match.
pub fn player_page(ctx: &DashboardContext, player: &str, team: Option<&str>) -> Option<PlayerPage> {
    let rows: Vec<&PlayerWeekRecord> = ctx
        .records
        .iter()
        .filter(|r| r.player == player)
        .filter(|r| team.map_or(true, |t| r.real_team.as_deref() == Some(t)))
        .collect();
    if rows.is_empty() {
        return None;
    }

    let team_label = rows
        .iter()
        .find_map(|r| r.real_team.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut by_season: BTreeMap<i32, PlayerSeasonTotal> = BTreeMap::new();
    for row in &rows {
        let total = by_season.entry(row.season).or_insert_with(|| PlayerSeasonTotal {
            season: row.season,
            games: 0,
            stats: StatLine::default(),
            derived: DerivedStats::default(),
        });
        total.games += 1;
        total.stats += &row.stats;
        total.derived += &row.derived;
    }
    let season_totals: Vec<PlayerSeasonTotal> = by_season.into_values().collect();

    let weekly = YardageKind::ALL
        .iter()
        .filter_map(|&kind| {
            let stat = kind.stat();
            let sum: f64 = rows.iter().map(|r| r.stat(stat)).sum();
            if sum <= 0.0 {
                return None;
            }
            let mut points: Vec<WeeklyPoint> = rows
                .iter()
                .map(|r| WeeklyPoint {
                    season: r.season,
                    week: r.week,
                    value: r.stat(stat),
                })
                .collect();
            points.sort_by_key(|p| (p.season, p.week));
            Some((kind, points))
        })
        .collect();

    // season_totals is non-empty because rows is.
    let last = season_totals.last()?;
    let latest = LatestSnapshot {
        season: last.season,
        passing_yds: last.stats.passing_yds,
        passing_td: last.stats.passing_td,
        interceptions: last.stats.passing_int,
        rushing_yds: last.stats.rushing_yds,
        rushing_td: last.stats.rushing_td,
        receiving_yds: last.stats.receiving_yds,
        receiving_td: last.stats.receiving_td,
    };

    Some(PlayerPage {
        player: player.to_string(),
        team_label,
        season_totals,
        weekly,
        latest,
    })
}
