// Team metadata: colours, stadium locations and logo paths.

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::source::{lenient_opt_f64, open_optional, LoadError};

pub const TEAM_COLORS_FILE: &str = "team_colors.csv";
pub const TEAM_LOCATION_FILE: &str = "team_location.csv";

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Primary colour per franchise name.
#[derive(Debug, Clone, Default)]
pub struct TeamColors {
    colors: HashMap<String, String>,
}

impl TeamColors {
    /// Colour for `team`, or `fallback` when the team has no entry.
    pub fn color_for<'a>(&'a self, team: &str, fallback: &'a str) -> &'a str {
        self.colors.get(team).map(String::as_str).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Stadium location and logo for one franchise.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamLocation {
    /// `"<City> <Team>"`.
    pub city_team: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Logo file resolved against the logo directory, when the row names one.
    pub logo_path: Option<PathBuf>,
}

/// SVG logo for a franchise: `"Kansas City Chiefs"` becomes
/// `<logo_dir>/kansas-city-chiefs-logo.svg`.
pub fn logo_svg_path(logo_dir: &Path, team: &str) -> PathBuf {
    logo_dir.join(format!("{}-logo.svg", team.to_lowercase().replace(' ', "-")))
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawColorRow {
    #[serde(rename = "NFL Team Name")]
    team: String,
    #[serde(rename = "Color 1")]
    color: String,
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawLocationRow {
    #[serde(default)]
    City: String,
    #[serde(default)]
    Team: String,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    longitude: Option<f64>,
    #[serde(default)]
    logo: Option<String>,
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

pub fn load_colors_from_reader<R: Read>(rdr: R) -> Result<TeamColors, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut colors = HashMap::new();
    for result in reader.deserialize::<RawColorRow>() {
        match result {
            Ok(row) => {
                colors.insert(row.team.trim().to_string(), row.color.trim().to_string());
            }
            Err(e) => warn!("skipping malformed team colour row: {}", e),
        }
    }
    Ok(TeamColors { colors })
}

pub fn load_locations_from_reader<R: Read>(
    rdr: R,
    logo_dir: &Path,
) -> Result<Vec<TeamLocation>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut locations = Vec::new();
    for result in reader.deserialize::<RawLocationRow>() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                warn!("skipping malformed team location row: {}", e);
                continue;
            }
        };
        let logo_path = row
            .logo
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .map(|l| logo_dir.join(l));
        locations.push(TeamLocation {
            city_team: format!("{} {}", row.City.trim(), row.Team.trim()),
            latitude: row.latitude,
            longitude: row.longitude,
            logo_path,
        });
    }
    Ok(locations)
}

/// `team_colors.csv` under `metadata_dir`; empty when the file is absent.
pub fn load_team_colors(metadata_dir: &Path) -> Result<TeamColors, LoadError> {
    let path = metadata_dir.join(TEAM_COLORS_FILE);
    let Some(file) = open_optional(&path)? else {
        return Ok(TeamColors::default());
    };
    let colors = load_colors_from_reader(file).map_err(|e| LoadError::csv(&path, e))?;
    info!("loaded {} team colours", colors.len());
    Ok(colors)
}

/// `team_location.csv` under `metadata_dir`; empty when the file is absent.
pub fn load_team_locations(
    metadata_dir: &Path,
    logo_dir: &Path,
) -> Result<Vec<TeamLocation>, LoadError> {
    let path = metadata_dir.join(TEAM_LOCATION_FILE);
    let Some(file) = open_optional(&path)? else {
        return Ok(Vec::new());
    };
    let locations = load_locations_from_reader(file, logo_dir).map_err(|e| LoadError::csv(&path, e))?;
    info!("loaded {} team locations", locations.len());
    Ok(locations)
}
