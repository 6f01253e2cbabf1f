// Home page: current-season leaderboards, team record and cumulative race.

use std::collections::{BTreeMap, BTreeSet};

use crate::context::DashboardContext;
use crate::schedule::normalize::{team_record, TeamRecord};
use crate::stats::projection::{games_played_by_team, project_season, ProjectedStats};
use crate::stats::record::{StatKind, YardageKind};
use crate::stats::season::SeasonAggregate;
use crate::views::{desc, round_to};

pub const DEFAULT_TEAM_COLOR: &str = "#1f77b4";

// ---------------------------------------------------------------------------
// Leaderboards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardStat {
    PassingYds,
    RushingYds,
    ReceivingYds,
    Touchdowns,
}

impl LeaderboardStat {
    pub const ALL: [LeaderboardStat; 4] = [
        LeaderboardStat::PassingYds,
        LeaderboardStat::RushingYds,
        LeaderboardStat::ReceivingYds,
        LeaderboardStat::Touchdowns,
    ];

    pub fn stat(self) -> StatKind {
        match self {
            LeaderboardStat::PassingYds => StatKind::PassingYds,
            LeaderboardStat::RushingYds => StatKind::RushingYds,
            LeaderboardStat::ReceivingYds => StatKind::ReceivingYds,
            LeaderboardStat::Touchdowns => StatKind::RushingReceivingTd,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LeaderboardStat::PassingYds => "Passing Yards",
            LeaderboardStat::RushingYds => "Rushing Yards",
            LeaderboardStat::ReceivingYds => "Receiving Yards",
            LeaderboardStat::Touchdowns => "Rushing + Receiving TD",
        }
    }

    fn projected(self, p: &ProjectedStats) -> Option<f64> {
        match self {
            LeaderboardStat::PassingYds => p.passing_yds,
            LeaderboardStat::RushingYds => p.rushing_yds,
            LeaderboardStat::ReceivingYds => p.receiving_yds,
            LeaderboardStat::Touchdowns => p.touchdowns,
        }
    }
}

/// Per-game means for the season, rounded to one decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerGameAverages {
    pub passing_yds: f64,
    pub passer_rating: f64,
    pub rushing_yds: f64,
    pub receiving_yds: f64,
}

impl PerGameAverages {
    fn from_season(agg: &SeasonAggregate) -> Self {
        Self {
            passing_yds: round_to(agg.per_game(StatKind::PassingYds), 1),
            passer_rating: round_to(agg.per_game(StatKind::PassingRate), 1),
            rushing_yds: round_to(agg.per_game(StatKind::RushingYds), 1),
            receiving_yds: round_to(agg.per_game(StatKind::ReceivingYds), 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardRow {
    pub rank: usize,
    /// `"N: Player"`.
    pub rank_label: String,
    pub player: String,
    /// Team code on the player's latest week.
    pub team: String,
    pub real_team: Option<String>,
    pub total: f64,
    pub passing_td: f64,
    pub interceptions: f64,
    pub rushing_receiving_td: f64,
    pub averages: PerGameAverages,
    /// Full-season pace; `None` when the team has no games played.
    pub projected: Option<f64>,
}

impl LeaderboardRow {
    pub fn is_team(&self, team: &str) -> bool {
        self.real_team.as_deref() == Some(team)
    }
}

/// Players in `season` with a positive total for `stat`, highest first,
/// ranked 1..N. Ties keep player-name order.
pub fn leaderboard(ctx: &DashboardContext, stat: LeaderboardStat, season: i32) -> Vec<LeaderboardRow> {
    let kind = stat.stat();
    let games_played = games_played_by_team(&ctx.records, season);

    let mut aggs: Vec<&SeasonAggregate> = ctx
        .seasons
        .for_season(season)
        .filter(|agg| agg.total(kind) > 0.0)
        .collect();
    aggs.sort_by(|a, b| desc(a.total(kind), b.total(kind)));

    aggs.into_iter()
        .enumerate()
        .map(|(i, agg)| {
            let projected = project_season(
                agg,
                games_played.get(&agg.team).copied(),
                ctx.games_per_season(),
            );
            LeaderboardRow {
                rank: i + 1,
                rank_label: format!("{}: {}", i + 1, agg.player),
                player: agg.player.clone(),
                team: agg.team.clone(),
                real_team: agg.real_team.clone(),
                total: agg.total(kind),
                passing_td: agg.stats.passing_td,
                interceptions: agg.stats.passing_int,
                rushing_receiving_td: agg.derived.rushing_receiving_td,
                averages: PerGameAverages::from_season(agg),
                projected: stat.projected(&projected),
            }
        })
        .collect()
}

/// The first `top_n` rows plus any rows of `team` below the cut, in rank
/// order without duplicates.
pub fn top_with_team(rows: &[LeaderboardRow], top_n: usize, team: &str) -> Vec<LeaderboardRow> {
    rows.iter()
        .enumerate()
        .filter(|(i, row)| *i < top_n || row.is_team(team))
        .map(|(_, row)| row.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Cumulative race
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RacePoint {
    pub week: u32,
    /// Running total through `week`.
    pub cumulative: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RaceSeries {
    pub player: String,
    pub real_team: Option<String>,
    pub points: Vec<RacePoint>,
}

impl RaceSeries {
    pub fn final_total(&self) -> f64 {
        self.points.last().map(|p| p.cumulative).unwrap_or(0.0)
    }
}

/// Week-by-week running totals for the season's top `top_n` players in
/// `kind`, plus every player who appeared for `team`. Only weeks with a
/// positive value count. Series are ordered by final total, highest first.
pub fn cumulative_race(
    ctx: &DashboardContext,
    kind: YardageKind,
    season: i32,
    top_n: usize,
    team: &str,
) -> Vec<RaceSeries> {
    let stat = kind.stat();
    let rows: Vec<_> = ctx
        .records
        .iter()
        .filter(|r| r.season == season && r.week.is_some() && r.stat(stat) > 0.0)
        .collect();

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for row in &rows {
        *totals.entry(row.player.as_str()).or_insert(0.0) += row.stat(stat);
    }
    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| desc(a.1, b.1));

    let mut selected: BTreeSet<&str> = ranked.iter().take(top_n).map(|(p, _)| *p).collect();
    selected.extend(
        rows.iter()
            .filter(|r| r.real_team.as_deref() == Some(team))
            .map(|r| r.player.as_str()),
    );

    let mut series: Vec<RaceSeries> = selected
        .into_iter()
        .map(|player| {
            let mut weeks: Vec<_> = rows.iter().filter(|r| r.player == player).collect();
            weeks.sort_by_key(|r| r.week);
            let mut running = 0.0;
            let points = weeks
                .iter()
                .filter_map(|r| {
                    running += r.stat(stat);
                    r.week.map(|week| RacePoint {
                        week,
                        cumulative: running,
                    })
                })
                .collect();
            RaceSeries {
                player: player.to_string(),
                real_team: weeks.last().and_then(|r| r.real_team.clone()),
                points,
            }
        })
        .collect();
    series.sort_by(|a, b| desc(a.final_total(), b.final_total()));
    series
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct HomePage {
    pub season: i32,
    pub team: String,
    pub team_color: String,
    pub record: Option<TeamRecord>,
    /// Full leaderboards in `LeaderboardStat::ALL` order.
    pub leaderboards: Vec<(LeaderboardStat, Vec<LeaderboardRow>)>,
}

impl HomePage {
    /// `"W-L"`, or `"0-0"` before the team has played.
    pub fn record_label(&self) -> String {
        self.record
            .as_ref()
            .map(TeamRecord::label)
            .unwrap_or_else(|| "0-0".to_string())
    }
}

pub fn home_page(ctx: &DashboardContext, team: &str) -> HomePage {
    let season = ctx.current_season;
    HomePage {
        season,
        team: team.to_string(),
        team_color: ctx.colors.color_for(team, DEFAULT_TEAM_COLOR).to_string(),
        record: team_record(&ctx.normalized_games, team),
        leaderboards: LeaderboardStat::ALL
            .iter()
            .map(|&stat| (stat, leaderboard(ctx, stat, season)))
            .collect(),
    }
}
