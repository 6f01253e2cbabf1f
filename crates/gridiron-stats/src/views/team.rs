// Team page: rosters, position lists and weekly yardage per player.

use std::collections::BTreeSet;

use crate::context::DashboardContext;
use crate::stats::classify::PlayerCategory;
use crate::stats::record::YardageKind;

/// Every player who has appeared for `team` in any season, sorted.
pub fn roster(ctx: &DashboardContext, team: &str) -> Vec<String> {
    players_where(ctx, |_, real_team| real_team == Some(team))
}

/// Players who appeared for `team` in the current season, sorted.
pub fn active_roster(ctx: &DashboardContext, team: &str) -> Vec<String> {
    let current = ctx.current_season;
    players_where(ctx, |season, real_team| season == current && real_team == Some(team))
}

fn players_where(ctx: &DashboardContext, keep: impl Fn(i32, Option<&str>) -> bool) -> Vec<String> {
    ctx.records
        .iter()
        .filter(|r| keep(r.season, r.real_team.as_deref()))
        .map(|r| r.player.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Selected players split by role. A player is listed under a role only if
/// their career category matches it and they have a positive week in the
/// matching yardage type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionLists {
    pub quarterbacks: Vec<String>,
    pub running_backs: Vec<String>,
    pub receivers: Vec<String>,
}

pub fn position_lists(ctx: &DashboardContext, players: &[String]) -> PositionLists {
    let list = |kind: YardageKind, category: PlayerCategory| -> Vec<String> {
        let stat = kind.stat();
        ctx.records
            .iter()
            .filter(|r| r.stat(stat) > 0.0 && players.contains(&r.player))
            .filter(|r| ctx.category(&r.player) == category)
            .map(|r| r.player.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };
    PositionLists {
        quarterbacks: list(YardageKind::Passing, PlayerCategory::Quarterback),
        running_backs: list(YardageKind::Rushing, PlayerCategory::RunningBack),
        receivers: list(YardageKind::Receiving, PlayerCategory::Receiver),
    }
}

/// One player's positive yardage week, with their season total for ordering
/// stacked bars.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWeekRow {
    pub year_week: String,
    pub player: String,
    pub value: f64,
    pub season_total: f64,
}

/// Positive weeks of `kind` for the selected players, ordered by year_week
/// then season total descending.
pub fn weekly_yardage(ctx: &DashboardContext, kind: YardageKind, players: &[String]) -> Vec<TeamWeekRow> {
    let stat = kind.stat();
    let mut rows: Vec<TeamWeekRow> = ctx
        .records
        .iter()
        .filter(|r| r.stat(stat) > 0.0 && players.contains(&r.player))
        .map(|r| TeamWeekRow {
            year_week: r.year_week.clone(),
            player: r.player.clone(),
            value: r.stat(stat),
            season_total: ctx
                .seasons
                .get(&r.player, r.season)
                .map(|agg| agg.total(stat))
                .unwrap_or(0.0),
        })
        .collect();
    rows.sort_by(|a, b| {
        a.year_week
            .cmp(&b.year_week)
            .then_with(|| crate::views::desc(a.season_total, b.season_total))
    });
    rows
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamPage {
    pub team: String,
    pub roster: Vec<String>,
    pub active_roster: Vec<String>,
    /// Players the page is showing: the caller's selection, or the active
    /// roster when none is given.
    pub selected: Vec<String>,
    pub positions: PositionLists,
    pub passing: Vec<TeamWeekRow>,
    pub rushing: Vec<TeamWeekRow>,
    pub receiving: Vec<TeamWeekRow>,
}

pub fn team_page(ctx: &DashboardContext, team: &str, selection: Option<&[String]>) -> TeamPage {
    let roster = roster(ctx, team);
    let active = active_roster(ctx, team);
    let selected = selection.map(<[String]>::to_vec).unwrap_or_else(|| active.clone());
    TeamPage {
        team: team.to_string(),
        positions: position_lists(ctx, &selected),
        passing: weekly_yardage(ctx, YardageKind::Passing, &selected),
        rushing: weekly_yardage(ctx, YardageKind::Rushing, &selected),
        receiving: weekly_yardage(ctx, YardageKind::Receiving, &selected),
        roster,
        active_roster: active,
        selected,
    }
}
