// Upcoming-game preview: both teams' records, scoring and opponent-adjusted
// player splits.

use crate::context::DashboardContext;
use crate::schedule::games::UpcomingGame;
use crate::schedule::normalize::{normalize_for, team_records, NormalizedGame, TeamRecord};
use crate::schedule::splits::{defense_label, offense_label, split_by_opponent, split_totals, SplitTotal};
use crate::stats::record::YardageKind;
use crate::views::round_to;

pub const AWAY_FALLBACK_COLOR: &str = "#1f77b4";
pub const HOME_FALLBACK_COLOR: &str = "#d62728";

/// One team's header numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchupSide {
    pub team: String,
    pub color: String,
    pub record: Option<TeamRecord>,
    /// Mean points scored, one decimal.
    pub avg_scored: Option<f64>,
    /// Mean points scored minus allowed, one decimal.
    pub avg_differential: Option<f64>,
}

impl MatchupSide {
    fn new(ctx: &DashboardContext, team: &str, fallback: &str, record: Option<TeamRecord>) -> Self {
        Self {
            team: team.to_string(),
            color: ctx.colors.color_for(team, fallback).to_string(),
            avg_scored: record.as_ref().map(|r| round_to(r.avg_scored, 1)),
            avg_differential: record
                .as_ref()
                .map(|r| round_to(r.avg_scored, 1) - round_to(r.avg_allowed, 1)),
            record,
        }
    }
}

/// Split tables for one side of the preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideSplits {
    pub passing: Vec<SplitTotal>,
    pub rushing: Vec<SplitTotal>,
    pub receiving: Vec<SplitTotal>,
}

impl SideSplits {
    pub fn get(&self, kind: YardageKind) -> &[SplitTotal] {
        match kind {
            YardageKind::Passing => &self.passing,
            YardageKind::Rushing => &self.rushing,
            YardageKind::Receiving => &self.receiving,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchupPage {
    pub game: UpcomingGame,
    pub date_label: String,
    /// Completed games touching either team, from both perspectives.
    pub normalized: Vec<NormalizedGame>,
    pub away: MatchupSide,
    pub home: MatchupSide,
    /// `Offense <away>` and `Defense <home>` rows.
    pub away_splits: SideSplits,
    /// `Offense <home>` and `Defense <away>` rows.
    pub home_splits: SideSplits,
}

/// Selector labels for every upcoming game, in schedule order.
pub fn game_labels(ctx: &DashboardContext) -> Vec<String> {
    ctx.upcoming_games.iter().map(UpcomingGame::label).collect()
}

pub fn find_game<'a>(ctx: &'a DashboardContext, label: &str) -> Option<&'a UpcomingGame> {
    ctx.upcoming_games.iter().find(|g| g.label() == label)
}

pub fn matchup_page(ctx: &DashboardContext, game: &UpcomingGame) -> MatchupPage {
    let away = game.away_team.as_str();
    let home = game.home_team.as_str();

    let normalized = normalize_for(&ctx.completed_games, &[away, home]);
    let own: Vec<NormalizedGame> = normalized
        .iter()
        .filter(|g| g.searched_team == away || g.searched_team == home)
        .cloned()
        .collect();
    let mut records = team_records(&own);

    let rows = split_by_opponent(&ctx.records, &own);
    let side = |categories: [String; 2]| {
        let totals = |kind: YardageKind| {
            let stat = kind.stat();
            let positive: Vec<_> = rows
                .iter()
                .filter(|r| r.record.stat(stat) > 0.0)
                .cloned()
                .collect();
            split_totals(&positive, stat, &categories)
        };
        SideSplits {
            passing: totals(YardageKind::Passing),
            rushing: totals(YardageKind::Rushing),
            receiving: totals(YardageKind::Receiving),
        }
    };
    let away_splits = side([offense_label(away), defense_label(home)]);
    let home_splits = side([offense_label(home), defense_label(away)]);

    MatchupPage {
        game: game.clone(),
        date_label: game.formatted_date(),
        away: MatchupSide::new(ctx, away, AWAY_FALLBACK_COLOR, records.remove(away)),
        home: MatchupSide::new(ctx, home, HOME_FALLBACK_COLOR, records.remove(home)),
        normalized: own,
        away_splits,
        home_splits,
    }
}
