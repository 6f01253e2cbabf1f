// Fantasy scoring: weekly points, season totals, category rankings and
// per-season score distributions.

use std::collections::{BTreeMap, HashMap};

use crate::config::{FantasyConfig, ScoringWeights};
use crate::context::DashboardContext;
use crate::stats::classify::PlayerCategory;
use crate::stats::record::StatLine;
use crate::views::desc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringFormat {
    HalfPpr,
    Ppr,
}

impl ScoringFormat {
    pub fn weights(self, fantasy: &FantasyConfig) -> &ScoringWeights {
        match self {
            ScoringFormat::HalfPpr => &fantasy.half_ppr,
            ScoringFormat::Ppr => &fantasy.ppr,
        }
    }
}

/// Points for one stat line.
pub fn fantasy_points(s: &StatLine, w: &ScoringWeights) -> f64 {
    s.passing_yds / w.passing_yds_per_point
        + s.passing_td * w.passing_td
        + s.passing_int * w.interception
        + s.rushing_yds / w.rushing_yds_per_point
        + s.rushing_td * w.rushing_td
        + s.receiving_rec * w.reception
        + s.receiving_yds / w.receiving_yds_per_point
        + s.receiving_td * w.receiving_td
        + s.fumbles_lost * w.fumble_lost
}

// ---------------------------------------------------------------------------
// Weekly and season points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FantasyWeek {
    pub player: String,
    pub real_team: Option<String>,
    /// Opponent from the completed-games schedule, when the week is in it.
    pub opponent: Option<String>,
    pub category: PlayerCategory,
    pub season: i32,
    pub week: Option<u32>,
    pub points: f64,
}

/// Every week in `seasons` scored under `format`.
pub fn weekly_points(ctx: &DashboardContext, seasons: &[i32], format: ScoringFormat) -> Vec<FantasyWeek> {
    let weights = format.weights(&ctx.config.fantasy);
    let opponents: HashMap<(&str, &str), &str> = ctx
        .normalized_games
        .iter()
        .map(|g| {
            (
                (g.year_week.as_str(), g.searched_team.as_str()),
                g.opponent_team.as_str(),
            )
        })
        .collect();

    ctx.records
        .iter()
        .filter(|r| seasons.contains(&r.season))
        .map(|r| FantasyWeek {
            player: r.player.clone(),
            real_team: r.real_team.clone(),
            opponent: r
                .real_team
                .as_deref()
                .and_then(|team| opponents.get(&(r.year_week.as_str(), team)))
                .map(|o| o.to_string()),
            category: ctx.category(&r.player),
            season: r.season,
            week: r.week,
            points: fantasy_points(&r.stats, weights),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonPoints {
    pub player: String,
    pub real_team: Option<String>,
    pub category: PlayerCategory,
    pub season: i32,
    pub total: f64,
    /// Mean of this player's season totals over every season in the input.
    pub average: f64,
}

/// Season totals per (player, season), ordered by season ascending then
/// total descending.
pub fn season_totals(weeks: &[FantasyWeek]) -> Vec<SeasonPoints> {
    let mut totals: BTreeMap<(String, i32), SeasonPoints> = BTreeMap::new();
    for w in weeks {
        let entry = totals
            .entry((w.player.clone(), w.season))
            .or_insert_with(|| SeasonPoints {
                player: w.player.clone(),
                real_team: w.real_team.clone(),
                category: w.category,
                season: w.season,
                total: 0.0,
                average: 0.0,
            });
        entry.total += w.points;
    }

    let mut sums: HashMap<&str, (f64, u32)> = HashMap::new();
    for sp in totals.values() {
        let e = sums.entry(sp.player.as_str()).or_insert((0.0, 0));
        e.0 += sp.total;
        e.1 += 1;
    }
    let averages: HashMap<String, f64> = sums
        .into_iter()
        .map(|(p, (sum, n))| (p.to_string(), sum / n as f64))
        .collect();

    let mut rows: Vec<SeasonPoints> = totals.into_values().collect();
    for row in &mut rows {
        row.average = averages.get(&row.player).copied().unwrap_or(0.0);
    }
    rows.sort_by(|a, b| a.season.cmp(&b.season).then_with(|| desc(a.total, b.total)));
    rows
}

// ---------------------------------------------------------------------------
// Rankings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RankedPlayer {
    /// 1-based rank in the latest season, ties broken by input order.
    pub rank: usize,
    pub player: String,
    pub real_team: Option<String>,
    pub total: f64,
    pub average: f64,
}

/// Players of `category` ranked by their total in the latest season present
/// for that category, keeping ranks `top_rank..=bottom_rank` and dropping
/// `exclude`. Ranks are assigned before exclusion.
pub fn category_ranking(
    totals: &[SeasonPoints],
    category: PlayerCategory,
    top_rank: usize,
    bottom_rank: usize,
    exclude: &[String],
) -> Vec<RankedPlayer> {
    let in_category: Vec<&SeasonPoints> = totals.iter().filter(|t| t.category == category).collect();
    let Some(latest) = in_category.iter().map(|t| t.season).max() else {
        return Vec::new();
    };

    let mut latest_rows: Vec<&SeasonPoints> = in_category.into_iter().filter(|t| t.season == latest).collect();
    latest_rows.sort_by(|a, b| desc(a.total, b.total));

    latest_rows
        .into_iter()
        .enumerate()
        .map(|(i, t)| (i + 1, t))
        .filter(|(rank, t)| *rank >= top_rank && *rank <= bottom_rank && !exclude.contains(&t.player))
        .map(|(rank, t)| RankedPlayer {
            rank,
            player: t.player.clone(),
            real_team: t.real_team.clone(),
            total: t.total,
            average: t.average,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct GapPoint {
    pub season: i32,
    pub rank: usize,
    pub player: String,
    pub total: f64,
}

/// Per-season ranks of `players` over the `years` seasons ending at
/// `latest`, for comparing the point gaps between neighbours.
pub fn recent_gaps(totals: &[SeasonPoints], players: &[String], latest: i32, years: i32) -> Vec<GapPoint> {
    let first = latest - years + 1;
    let mut by_season: BTreeMap<i32, Vec<&SeasonPoints>> = BTreeMap::new();
    for t in totals
        .iter()
        .filter(|t| t.season >= first && t.season <= latest && players.contains(&t.player))
    {
        by_season.entry(t.season).or_default().push(t);
    }

    let mut gaps = Vec::new();
    for (season, mut rows) in by_season {
        rows.sort_by(|a, b| desc(a.total, b.total));
        gaps.extend(rows.into_iter().enumerate().map(|(i, t)| GapPoint {
            season,
            rank: i + 1,
            player: t.player.clone(),
            total: t.total,
        }));
    }
    gaps
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

/// Five-number summary of one player's weekly points in one season.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    pub season: i32,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Quantile of sorted data with linear interpolation between closest ranks.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

pub fn distribution(weeks: &[FantasyWeek], player: &str) -> Vec<Distribution> {
    let mut by_season: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for w in weeks.iter().filter(|w| w.player == player) {
        by_season.entry(w.season).or_default().push(w.points);
    }

    by_season
        .into_iter()
        .filter_map(|(season, mut points)| {
            points.sort_by(|a, b| a.total_cmp(b));
            Some(Distribution {
                season,
                count: points.len(),
                min: quantile(&points, 0.0)?,
                q1: quantile(&points, 0.25)?,
                median: quantile(&points, 0.5)?,
                q3: quantile(&points, 0.75)?,
                max: quantile(&points, 1.0)?,
            })
        })
        .collect()
}
