// Season and career aggregation.
//
// Groups weekly records by (player, season) for season-to-date totals and by
// player for career totals. Originals are never modified; the aggregates are
// new tables that can be joined back onto the weekly rows by key.

use std::collections::{BTreeMap, HashMap};

use crate::stats::record::{DerivedStats, PlayerWeekRecord, StatKind, StatLine};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Summed passing/rushing/receiving yards, the input to role classification.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YardageTotals {
    pub passing: f64,
    pub rushing: f64,
    pub receiving: f64,
}

/// One player's summed stats for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonAggregate {
    pub player: String,
    pub season: i32,
    /// Team code on the player's latest week of the season.
    pub team: String,
    pub real_team: Option<String>,
    /// Number of weekly rows summed.
    pub games: u32,
    pub stats: StatLine,
    pub derived: DerivedStats,
}

impl SeasonAggregate {
    pub fn season_passing_yds(&self) -> f64 {
        self.stats.passing_yds
    }

    pub fn season_rushing_yds(&self) -> f64 {
        self.stats.rushing_yds
    }

    pub fn season_receiving_yds(&self) -> f64 {
        self.stats.receiving_yds
    }

    pub fn total(&self, kind: StatKind) -> f64 {
        kind.value(&self.stats, &self.derived)
    }

    /// Mean per weekly row, 0 when there are no rows.
    pub fn per_game(&self, kind: StatKind) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total(kind) / self.games as f64
    }

    pub fn yardage(&self) -> YardageTotals {
        YardageTotals {
            passing: self.stats.passing_yds,
            rushing: self.stats.rushing_yds,
            receiving: self.stats.receiving_yds,
        }
    }
}

/// One player's stats summed over every season in the data.
#[derive(Debug, Clone, PartialEq)]
pub struct CareerAggregate {
    pub player: String,
    pub games: u32,
    pub stats: StatLine,
    pub derived: DerivedStats,
}

impl CareerAggregate {
    pub fn total_passing_yds(&self) -> f64 {
        self.stats.passing_yds
    }

    pub fn total_rushing_yds(&self) -> f64 {
        self.stats.rushing_yds
    }

    pub fn total_receiving_yds(&self) -> f64 {
        self.stats.receiving_yds
    }

    pub fn yardage(&self) -> YardageTotals {
        YardageTotals {
            passing: self.stats.passing_yds,
            rushing: self.stats.rushing_yds,
            receiving: self.stats.receiving_yds,
        }
    }
}

/// Season aggregates with a (player, season) index.
#[derive(Debug, Clone, Default)]
pub struct SeasonTable {
    rows: Vec<SeasonAggregate>,
    index: HashMap<(String, i32), usize>,
}

impl SeasonTable {
    pub fn get(&self, player: &str, season: i32) -> Option<&SeasonAggregate> {
        self.index
            .get(&(player.to_string(), season))
            .map(|&i| &self.rows[i])
    }

    pub fn rows(&self) -> &[SeasonAggregate] {
        &self.rows
    }

    /// Aggregates for one season, in player order.
    pub fn for_season(&self, season: i32) -> impl Iterator<Item = &SeasonAggregate> {
        self.rows.iter().filter(move |r| r.season == season)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A weekly row with its season-to-date context attached (left join on
/// player and season).
#[derive(Debug, Clone, Copy)]
pub struct SeasonWeekView<'a> {
    pub record: &'a PlayerWeekRecord,
    pub season: Option<&'a SeasonAggregate>,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Group records by (player, season) and sum every stat column, including
/// the additive derived composites.
pub fn aggregate_seasons(records: &[PlayerWeekRecord]) -> SeasonTable {
    let mut groups: BTreeMap<(i32, String), SeasonAccumulator> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.season, record.player.clone()))
            .or_insert_with(|| SeasonAccumulator::new(record))
            .add(record);
    }

    let mut table = SeasonTable::default();
    for ((season, player), acc) in groups {
        table.index.insert((player.clone(), season), table.rows.len());
        table.rows.push(SeasonAggregate {
            player,
            season,
            team: acc.team,
            real_team: acc.real_team,
            games: acc.games,
            stats: acc.stats,
            derived: acc.derived,
        });
    }
    table
}

/// Group records by player across all seasons.
pub fn aggregate_careers(records: &[PlayerWeekRecord]) -> BTreeMap<String, CareerAggregate> {
    let mut careers: BTreeMap<String, CareerAggregate> = BTreeMap::new();
    for record in records {
        let career = careers
            .entry(record.player.clone())
            .or_insert_with(|| CareerAggregate {
                player: record.player.clone(),
                games: 0,
                stats: StatLine::default(),
                derived: DerivedStats::default(),
            });
        career.games += 1;
        career.stats += &record.stats;
        career.derived += &record.derived;
    }
    careers
}

/// Attach each weekly row's season aggregate.
pub fn with_season_context<'a>(
    records: &'a [PlayerWeekRecord],
    seasons: &'a SeasonTable,
) -> Vec<SeasonWeekView<'a>> {
    records
        .iter()
        .map(|record| SeasonWeekView {
            record,
            season: seasons.get(&record.player, record.season),
        })
        .collect()
}

struct SeasonAccumulator {
    team: String,
    real_team: Option<String>,
    latest_week: Option<u32>,
    games: u32,
    stats: StatLine,
    derived: DerivedStats,
}

impl SeasonAccumulator {
    fn new(first: &PlayerWeekRecord) -> Self {
        Self {
            team: first.team.clone(),
            real_team: first.real_team.clone(),
            latest_week: first.week,
            games: 0,
            stats: StatLine::default(),
            derived: DerivedStats::default(),
        }
    }

    fn add(&mut self, record: &PlayerWeekRecord) {
        if record.week >= self.latest_week {
            self.latest_week = record.week;
            self.team = record.team.clone();
            self.real_team = record.real_team.clone();
        }
        self.games += 1;
        self.stats += &record.stats;
        self.derived += &record.derived;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
