// Betting-line hit rates: how often each active player reached a target.

use std::collections::{BTreeMap, BTreeSet};

use crate::context::DashboardContext;
use crate::stats::record::StatKind;
use crate::views::{desc, round_to};

/// A stat line with the label the page shows above its table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetMarket {
    pub label: &'static str,
    pub stat: StatKind,
}

pub const MARKETS: [BetMarket; 8] = [
    BetMarket { label: "Passing Yards", stat: StatKind::PassingYds },
    BetMarket { label: "Rushing Yards", stat: StatKind::RushingYds },
    BetMarket { label: "Receiving Yards", stat: StatKind::ReceivingYds },
    BetMarket { label: "Rushing + Receiving Yards", stat: StatKind::RushingReceivingYds },
    BetMarket { label: "Receptions", stat: StatKind::ReceivingRec },
    BetMarket { label: "Passing Touchdowns", stat: StatKind::PassingTd },
    BetMarket { label: "Rushing + Receiving Touchdowns", stat: StatKind::RushingReceivingTd },
    BetMarket { label: "Longest Reception", stat: StatKind::ReceivingLng },
];

#[derive(Debug, Clone, PartialEq)]
pub struct HitRate {
    pub player: String,
    /// Weeks at or above the target.
    pub hit_games: u32,
    /// Weeks in the selected seasons.
    pub total_games: u32,
    /// `hit_games / total_games * 100`, one decimal.
    pub hit_pct: f64,
}

/// Hit rates over `seasons` for `stat >= target`. Only players whose latest
/// selected season is the current one and who hit at least once are listed,
/// ordered by hits then percentage, both descending.
pub fn hit_rates(ctx: &DashboardContext, seasons: &[i32], stat: StatKind, target: f64) -> Vec<HitRate> {
    struct Tally {
        hits: u32,
        total: u32,
        latest_season: i32,
    }

    let mut tallies: BTreeMap<&str, Tally> = BTreeMap::new();
    for record in ctx.records.iter().filter(|r| seasons.contains(&r.season)) {
        let tally = tallies.entry(record.player.as_str()).or_insert(Tally {
            hits: 0,
            total: 0,
            latest_season: record.season,
        });
        tally.total += 1;
        tally.latest_season = tally.latest_season.max(record.season);
        if record.stat(stat) >= target {
            tally.hits += 1;
        }
    }

    let mut rates: Vec<HitRate> = tallies
        .into_iter()
        .filter(|(_, t)| t.hits > 0 && t.latest_season == ctx.current_season)
        .map(|(player, t)| HitRate {
            player: player.to_string(),
            hit_games: t.hits,
            total_games: t.total,
            hit_pct: round_to(t.hits as f64 / t.total as f64 * 100.0, 1),
        })
        .collect();
    rates.sort_by(|a, b| {
        b.hit_games
            .cmp(&a.hit_games)
            .then_with(|| desc(a.hit_pct, b.hit_pct))
    });
    rates
}

/// Number of distinct season-weeks in the selected seasons.
pub fn weeks_in_selection(ctx: &DashboardContext, seasons: &[i32]) -> usize {
    ctx.records
        .iter()
        .filter(|r| seasons.contains(&r.season))
        .map(|r| r.year_week.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}
