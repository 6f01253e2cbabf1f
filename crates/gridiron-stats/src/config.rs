// Configuration loading and parsing (dashboard.toml).

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the single configuration file, under `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config at {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("{base} has neither defaults/ nor config/; run from the crate root")]
    NoConfigSource { base: PathBuf },

    #[error("copying defaults into {path}: {source}")]
    CopyError {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: DataPaths,
    pub season: SeasonConfig,
    pub leaderboard: LeaderboardConfig,
    pub fantasy: FantasyConfig,
}

/// Input directories, relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct DataPaths {
    pub players_dir: String,
    pub games_dir: String,
    pub metadata_dir: String,
    pub logo_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonConfig {
    /// First calendar month that belongs to a new season. Months before it
    /// are the tail of the previous season.
    pub rollover_month: u32,
    /// Pins the current season instead of deriving it from the date.
    #[serde(default)]
    pub current_year: Option<i32>,
    #[serde(default = "default_games_per_season")]
    pub games_per_season: u32,
}

fn default_games_per_season() -> u32 {
    17
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeaderboardConfig {
    pub top_n: usize,
    pub cumulative_top_n: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FantasyConfig {
    pub half_ppr: ScoringWeights,
    pub ppr: ScoringWeights,
}

/// Fantasy scoring weights. Yardage is scored per `*_per_point` yards,
/// everything else is points per event (negative for turnovers).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScoringWeights {
    pub passing_yds_per_point: f64,
    pub passing_td: f64,
    pub interception: f64,
    pub rushing_yds_per_point: f64,
    pub rushing_td: f64,
    pub reception: f64,
    pub receiving_yds_per_point: f64,
    pub receiving_td: f64,
    pub fumble_lost: f64,
}

impl ScoringWeights {
    pub fn half_ppr() -> Self {
        Self {
            passing_yds_per_point: 25.0,
            passing_td: 4.0,
            interception: -2.0,
            rushing_yds_per_point: 10.0,
            rushing_td: 6.0,
            reception: 0.5,
            receiving_yds_per_point: 10.0,
            receiving_td: 6.0,
            fumble_lost: -2.0,
        }
    }

    pub fn ppr() -> Self {
        Self {
            reception: 1.0,
            ..Self::half_ppr()
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/dashboard.toml` relative to `base_dir`.
///
/// Does not copy defaults; prefer `load_config()` for normal startup.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Parse a config document without touching the filesystem.
pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

/// Copy every file in `defaults/` that is not yet in `config/`.
/// Returns the paths written; files already in `config/` are never touched.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults = base_dir.join("defaults");
    let config = base_dir.join("config");

    if !defaults.is_dir() {
        return if config.is_dir() {
            Ok(Vec::new())
        } else {
            Err(ConfigError::NoConfigSource {
                base: base_dir.to_path_buf(),
            })
        };
    }

    let copy_err = |path: &Path| {
        let path = path.to_path_buf();
        move |source: std::io::Error| ConfigError::CopyError { path, source }
    };
    std::fs::create_dir_all(&config).map_err(copy_err(&config))?;

    let mut sources = Vec::new();
    for entry in std::fs::read_dir(&defaults).map_err(copy_err(&defaults))? {
        let path = entry.map_err(copy_err(&defaults))?.path();
        if path.is_file() {
            sources.push(path);
        }
    }
    sources.sort();

    let mut written = Vec::new();
    for source in sources {
        let Some(name) = source.file_name() else { continue };
        let target = config.join(name);
        if copy_if_missing(&source, &target).map_err(copy_err(&target))? {
            written.push(target);
        }
    }
    Ok(written)
}

/// `create_new` so a file that appears between the check and the write is
/// left alone. `Ok(false)` when `target` already exists.
fn copy_if_missing(source: &Path, target: &Path) -> std::io::Result<bool> {
    use std::io::Write;

    let mut dest = match std::fs::OpenOptions::new().write(true).create_new(true).open(target) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(e),
    };
    dest.write_all(&std::fs::read(source)?)?;
    Ok(true)
}

/// Convenience wrapper: loads config relative to the current working directory,
/// copying defaults first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|source| ConfigError::CopyError {
        path: PathBuf::from("."),
        source,
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

/// Season that `today` falls in.
///
/// An explicit `current_year` wins. Otherwise a date on or after
/// `rollover_month` belongs to the season of its calendar year, and earlier
/// months belong to the previous season (January playoffs are last season).
pub fn resolve_current_season(today: NaiveDate, season: &SeasonConfig) -> i32 {
    if let Some(year) = season.current_year {
        return year;
    }
    if today.month() >= season.rollover_month {
        today.year()
    } else {
        today.year() - 1
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let month = config.season.rollover_month;
    if !(1..=12).contains(&month) {
        return Err(ConfigError::ValidationError {
            field: "season.rollover_month".into(),
            message: format!("must be between 1 and 12 inclusive, got {month}"),
        });
    }

    if config.season.games_per_season == 0 {
        return Err(ConfigError::ValidationError {
            field: "season.games_per_season".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.leaderboard.top_n == 0 {
        return Err(ConfigError::ValidationError {
            field: "leaderboard.top_n".into(),
            message: "must be greater than 0".into(),
        });
    }

    let per_point_fields: &[(&str, f64)] = &[
        ("fantasy.half_ppr.passing_yds_per_point", config.fantasy.half_ppr.passing_yds_per_point),
        ("fantasy.half_ppr.rushing_yds_per_point", config.fantasy.half_ppr.rushing_yds_per_point),
        ("fantasy.half_ppr.receiving_yds_per_point", config.fantasy.half_ppr.receiving_yds_per_point),
        ("fantasy.ppr.passing_yds_per_point", config.fantasy.ppr.passing_yds_per_point),
        ("fantasy.ppr.rushing_yds_per_point", config.fantasy.ppr.rushing_yds_per_point),
        ("fantasy.ppr.receiving_yds_per_point", config.fantasy.ppr.receiving_yds_per_point),
    ];
    for (name, val) in per_point_fields {
        if *val <= 0.0 {
            return Err(ConfigError::ValidationError {
                field: name.to_string(),
                message: format!("must be > 0, got {val}"),
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    fn season(rollover_month: u32, current_year: Option<i32>) -> SeasonConfig {
        SeasonConfig {
            rollover_month,
            current_year,
            games_per_season: 17,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_file_parses_and_validates() {
        let root = project_root();
        let text = fs::read_to_string(root.join("defaults").join(CONFIG_FILE)).unwrap();
        let config = parse_config(&text).expect("defaults should parse");
        validate(&config).expect("defaults should validate");

        assert_eq!(config.paths.players_dir, "data");
        assert_eq!(config.paths.games_dir, "games");
        assert_eq!(config.season.rollover_month, 3);
        assert_eq!(config.season.games_per_season, 17);
        assert!(config.season.current_year.is_none());
        assert_eq!(config.leaderboard.top_n, 10);
        assert_eq!(config.fantasy.half_ppr, ScoringWeights::half_ppr());
        assert_eq!(config.fantasy.ppr, ScoringWeights::ppr());
    }

    #[test]
    fn load_from_temp_dir_copies_defaults() {
        let tmp = std::env::temp_dir().join("gridiron_config_copy_test");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::copy(
            project_root().join("defaults").join(CONFIG_FILE),
            tmp.join("defaults").join(CONFIG_FILE),
        )
        .unwrap();

        let copied = ensure_config_files(&tmp).unwrap();
        assert_eq!(copied.len(), 1);
        assert!(tmp.join("config").join(CONFIG_FILE).exists());

        // Second run copies nothing.
        let copied = ensure_config_files(&tmp).unwrap();
        assert!(copied.is_empty());

        let config = load_config_from(&tmp).unwrap();
        assert_eq!(config.leaderboard.cumulative_top_n, 5);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_config_dir_and_defaults_is_error() {
        let tmp = std::env::temp_dir().join("gridiron_config_missing_test");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();

        let err = ensure_config_files(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::NoConfigSource { .. }));

        let err = load_config_from(&tmp).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn games_per_season_defaults_to_17() {
        let text = r#"
[paths]
players_dir = "data"
games_dir = "games"
metadata_dir = "metadata"
logo_dir = "logo"

[season]
rollover_month = 5

[leaderboard]
top_n = 3
cumulative_top_n = 2

[fantasy.half_ppr]
passing_yds_per_point = 25.0
passing_td = 4.0
interception = -2.0
rushing_yds_per_point = 10.0
rushing_td = 6.0
reception = 0.5
receiving_yds_per_point = 10.0
receiving_td = 6.0
fumble_lost = -2.0

[fantasy.ppr]
passing_yds_per_point = 25.0
passing_td = 4.0
interception = -2.0
rushing_yds_per_point = 10.0
rushing_td = 6.0
reception = 1.0
receiving_yds_per_point = 10.0
receiving_td = 6.0
fumble_lost = -2.0
"#;
        let config = parse_config(text).unwrap();
        assert_eq!(config.season.games_per_season, 17);
        assert_eq!(config.season.rollover_month, 5);
    }

    #[test]
    fn invalid_rollover_month_rejected() {
        let root = project_root();
        let text = fs::read_to_string(root.join("defaults").join(CONFIG_FILE)).unwrap();
        let mut config = parse_config(&text).unwrap();
        config.season.rollover_month = 13;
        let err = validate(&config).unwrap_err();
        match err {
            ConfigError::ValidationError { field, .. } => {
                assert_eq!(field, "season.rollover_month");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_games_per_season_rejected() {
        let root = project_root();
        let text = fs::read_to_string(root.join("defaults").join(CONFIG_FILE)).unwrap();
        let mut config = parse_config(&text).unwrap();
        config.season.games_per_season = 0;
        assert!(validate(&config).is_err());
    }

    // -- Season rollover --

    #[test]
    fn months_before_rollover_belong_to_previous_season() {
        let cfg = season(3, None);
        assert_eq!(resolve_current_season(date(2025, 1, 15), &cfg), 2024);
        assert_eq!(resolve_current_season(date(2025, 2, 28), &cfg), 2024);
        assert_eq!(resolve_current_season(date(2025, 3, 1), &cfg), 2025);
        assert_eq!(resolve_current_season(date(2025, 10, 19), &cfg), 2025);
    }

    #[test]
    fn rollover_month_is_configurable() {
        let cfg = season(5, None);
        assert_eq!(resolve_current_season(date(2025, 4, 30), &cfg), 2024);
        assert_eq!(resolve_current_season(date(2025, 5, 1), &cfg), 2025);
    }

    #[test]
    fn explicit_current_year_wins() {
        let cfg = season(3, Some(2023));
        assert_eq!(resolve_current_season(date(2026, 10, 1), &cfg), 2023);
    }
}
