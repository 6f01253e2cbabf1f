// Weekly player box-score loading.
//
// Reads every `<year>...csv` file in the players directory, tags each row
// with the season taken from the filename prefix, and concatenates them.

use crate::source::{lenient_f64, lenient_opt_u32, LoadError};
use crate::stats::record::{PlayerWeekRecord, StatLine};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// One box-score row. Every stat column is optional; unknown columns are
/// ignored.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawWeekRow {
    Player: String,
    #[serde(default)]
    Team: String,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    week: Option<u32>,
    #[serde(default, deserialize_with = "lenient_f64")]
    Passing_Cmp: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Passing_Att: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Passing_Yds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Passing_TD: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Passing_Int: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Passing_Rate: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Rushing_Att: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Rushing_Yds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Rushing_TD: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Rushing_Lng: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Receiving_Tgt: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Receiving_Rec: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Receiving_Yds: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Receiving_TD: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Receiving_Lng: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    Fumbles_FL: f64,
}

impl RawWeekRow {
    fn stat_line(&self) -> StatLine {
        StatLine {
            passing_cmp: self.Passing_Cmp,
            passing_att: self.Passing_Att,
            passing_yds: self.Passing_Yds,
            passing_td: self.Passing_TD,
            passing_int: self.Passing_Int,
            passing_rate: self.Passing_Rate,
            rushing_att: self.Rushing_Att,
            rushing_yds: self.Rushing_Yds,
            rushing_td: self.Rushing_TD,
            rushing_lng: self.Rushing_Lng,
            receiving_tgt: self.Receiving_Tgt,
            receiving_rec: self.Receiving_Rec,
            receiving_yds: self.Receiving_Yds,
            receiving_td: self.Receiving_TD,
            receiving_lng: self.Receiving_Lng,
            fumbles_lost: self.Fumbles_FL,
        }
    }
}

// ---------------------------------------------------------------------------
// Reader-based loader
// ---------------------------------------------------------------------------

/// Parse one weekly file's rows, tagging each with `season`.
pub fn load_week_rows_from_reader<R: Read>(
    rdr: R,
    season: i32,
) -> Result<Vec<PlayerWeekRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut rows = Vec::new();
    for result in reader.deserialize::<RawWeekRow>() {
        match result {
            Ok(raw) => {
                let player = raw.Player.trim();
                if player.is_empty() {
                    warn!("skipping box-score row with empty Player");
                    continue;
                }
                rows.push(PlayerWeekRecord::new(
                    player,
                    raw.Team.trim(),
                    season,
                    raw.week,
                    raw.stat_line(),
                ));
            }
            Err(e) => {
                warn!("skipping malformed box-score row: {}", e);
            }
        }
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Path-based loaders
// ---------------------------------------------------------------------------

/// Season encoded in the first four characters of a file name.
pub fn season_from_file_name(name: &str) -> Option<i32> {
    let prefix = name.get(..4)?;
    if !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

/// Load one weekly file; the season comes from its file name.
pub fn load_week_file(path: &Path) -> Result<Vec<PlayerWeekRecord>, LoadError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let Some(season) = season_from_file_name(name) else {
        warn!("skipping {}: file name has no 4-digit year prefix", path.display());
        return Ok(Vec::new());
    };
    let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e))?;
    load_week_rows_from_reader(file, season).map_err(|e| LoadError::csv(path, e))
}

/// Load and concatenate every `.csv` file in `dir`, in file-name order.
pub fn load_player_dir(dir: &Path) -> Result<Vec<PlayerWeekRecord>, LoadError> {
    let entries = std::fs::read_dir(dir).map_err(|e| LoadError::io(dir, e))?;

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| LoadError::io(dir, e))?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();

    let mut all = Vec::new();
    for path in &files {
        let rows = load_week_file(path)?;
        debug!("loaded {} rows from {}", rows.len(), path.display());
        all.extend(rows);
    }
    info!("loaded {} box-score rows from {} files", all.len(), files.len());
    Ok(all)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
