// Completed and upcoming game schedules.
//
// Raw rows carry a `tm_*` side and an `opp_*` side. For upcoming games the
// `tm_*` side is the away team and `opp_*` the home team.

use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::source::{lenient_opt_f64, lenient_opt_u32, open_optional, LoadError};
use crate::stats::derived::year_week;
use crate::stats::record::pad_week;
use crate::teams::franchise_name;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A finished game with both sides' franchise names and scores.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedGame {
    pub season: i32,
    pub week: u32,
    /// Franchise on the `tm_*` side.
    pub team1: String,
    /// Franchise on the `opp_*` side.
    pub team2: String,
    pub team1_score: f64,
    pub team2_score: f64,
    pub year_week: String,
}

impl CompletedGame {
    pub fn involves(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }
}

/// A scheduled game that has not been played yet.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingGame {
    pub away_team: String,
    pub home_team: String,
    pub week: Option<u32>,
    pub event_date: Option<NaiveDate>,
    /// The raw date cell, kept for display when it does not parse.
    pub event_date_raw: Option<String>,
}

impl UpcomingGame {
    /// `"Away @ Home"` selector label.
    pub fn label(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    /// Long-form date (`"September 07, 2025"`), the raw cell when it does not
    /// parse, or `"TBD"`.
    pub fn formatted_date(&self) -> String {
        match (&self.event_date, &self.event_date_raw) {
            (Some(date), _) => date.format("%B %d, %Y").to_string(),
            (None, Some(raw)) => raw.clone(),
            (None, None) => "TBD".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawCompletedGame {
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    season: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    week: Option<u32>,
    tm_market: String,
    tm_name: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    tm_score: Option<f64>,
    opp_market: String,
    opp_name: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    opp_score: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawUpcomingGame {
    tm_market: String,
    tm_name: String,
    opp_market: String,
    opp_name: String,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    week: Option<u32>,
    #[serde(default)]
    event_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Reader-based loaders
// ---------------------------------------------------------------------------

pub fn load_completed_from_reader<R: Read>(rdr: R) -> Result<Vec<CompletedGame>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut games = Vec::new();
    for result in reader.deserialize::<RawCompletedGame>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed completed game row: {}", e);
                continue;
            }
        };
        let (Some(season), Some(week)) = (raw.season, raw.week) else {
            warn!(
                "skipping completed game {} {} vs {} {}: missing season/week",
                raw.tm_market, raw.tm_name, raw.opp_market, raw.opp_name
            );
            continue;
        };
        let (Some(tm_score), Some(opp_score)) = (raw.tm_score, raw.opp_score) else {
            warn!(
                "skipping completed game {} {} vs {} {}: missing score",
                raw.tm_market, raw.tm_name, raw.opp_market, raw.opp_name
            );
            continue;
        };
        let season = season as i32;
        games.push(CompletedGame {
            season,
            week,
            team1: franchise_name(&raw.tm_market, &raw.tm_name),
            team2: franchise_name(&raw.opp_market, &raw.opp_name),
            team1_score: tm_score,
            team2_score: opp_score,
            year_week: year_week(season, &pad_week(Some(week))),
        });
    }
    Ok(games)
}

pub fn load_upcoming_from_reader<R: Read>(rdr: R) -> Result<Vec<UpcomingGame>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut games = Vec::new();
    for result in reader.deserialize::<RawUpcomingGame>() {
        match result {
            Ok(raw) => {
                let raw_date = raw
                    .event_date
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty());
                let event_date = raw_date
                    .as_deref()
                    .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
                games.push(UpcomingGame {
                    away_team: franchise_name(&raw.tm_market, &raw.tm_name),
                    home_team: franchise_name(&raw.opp_market, &raw.opp_name),
                    week: raw.week,
                    event_date,
                    event_date_raw: raw_date,
                });
            }
            Err(e) => {
                warn!("skipping malformed upcoming game row: {}", e);
            }
        }
    }
    Ok(games)
}

// ---------------------------------------------------------------------------
// Path-based loaders (missing files are empty schedules)
// ---------------------------------------------------------------------------

pub fn completed_games_path(games_dir: &Path, season: i32) -> std::path::PathBuf {
    games_dir.join(format!("completed_games_{season}.csv"))
}

pub fn upcoming_games_path(games_dir: &Path, season: i32) -> std::path::PathBuf {
    games_dir.join(format!("upcoming_games_{season}.csv"))
}

pub fn load_completed_games(path: &Path) -> Result<Vec<CompletedGame>, LoadError> {
    let Some(file) = open_optional(path)? else {
        return Ok(Vec::new());
    };
    let games = load_completed_from_reader(file).map_err(|e| LoadError::csv(path, e))?;
    info!("loaded {} completed games from {}", games.len(), path.display());
    Ok(games)
}

pub fn load_upcoming_games(path: &Path) -> Result<Vec<UpcomingGame>, LoadError> {
    let Some(file) = open_optional(path)? else {
        return Ok(Vec::new());
    };
    let games = load_upcoming_from_reader(file).map_err(|e| LoadError::csv(path, e))?;
    info!("loaded {} upcoming games from {}", games.len(), path.display());
    Ok(games)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
