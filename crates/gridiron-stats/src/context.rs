// Shared, read-only dashboard state.
//
// Everything the views need is loaded and derived once here. Views borrow
// the context and never mutate it.

use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{resolve_current_season, Config};
use crate::metadata::{self, TeamColors, TeamLocation};
use crate::schedule::games::{self, CompletedGame, UpcomingGame};
use crate::schedule::normalize::{normalize_all, NormalizedGame};
use crate::source::LoadError;
use crate::stats::classify::{classify_careers, PlayerCategory};
use crate::stats::derived::apply_derived_fields;
use crate::stats::loader::load_player_dir;
use crate::stats::record::PlayerWeekRecord;
use crate::stats::season::{aggregate_careers, aggregate_seasons, CareerAggregate, SeasonTable};

/// Input directories resolved against a base directory.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPaths {
    pub players_dir: PathBuf,
    pub games_dir: PathBuf,
    pub metadata_dir: PathBuf,
    pub logo_dir: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(base_dir: &Path, config: &Config) -> Self {
        Self {
            players_dir: base_dir.join(&config.paths.players_dir),
            games_dir: base_dir.join(&config.paths.games_dir),
            metadata_dir: base_dir.join(&config.paths.metadata_dir),
            logo_dir: base_dir.join(&config.paths.logo_dir),
        }
    }
}

pub struct DashboardContext {
    pub config: Config,
    pub paths: ResolvedPaths,
    pub current_season: i32,
    /// Weekly rows with derived fields applied.
    pub records: Vec<PlayerWeekRecord>,
    pub seasons: SeasonTable,
    pub careers: BTreeMap<String, CareerAggregate>,
    pub categories: BTreeMap<String, PlayerCategory>,
    pub completed_games: Vec<CompletedGame>,
    pub upcoming_games: Vec<UpcomingGame>,
    /// Both perspectives of every completed game.
    pub normalized_games: Vec<NormalizedGame>,
    pub colors: TeamColors,
    pub locations: Vec<TeamLocation>,
    /// Sorted distinct franchise names present in the box scores.
    pub teams: Vec<String>,
}

impl DashboardContext {
    /// Load everything relative to the current working directory.
    pub fn load(config: &Config, today: NaiveDate) -> Result<Self, LoadError> {
        let cwd = std::env::current_dir().map_err(|e| LoadError::io(Path::new("."), e))?;
        Self::load_from(&cwd, config, today)
    }

    /// Load everything relative to `base_dir`. Schedule files are read for
    /// the season `today` falls in.
    pub fn load_from(base_dir: &Path, config: &Config, today: NaiveDate) -> Result<Self, LoadError> {
        let paths = ResolvedPaths::resolve(base_dir, config);
        let current_season = resolve_current_season(today, &config.season);

        let records = load_player_dir(&paths.players_dir)?;
        let completed = games::load_completed_games(&games::completed_games_path(&paths.games_dir, current_season))?;
        let upcoming = games::load_upcoming_games(&games::upcoming_games_path(&paths.games_dir, current_season))?;
        let colors = metadata::load_team_colors(&paths.metadata_dir)?;
        let locations = metadata::load_team_locations(&paths.metadata_dir, &paths.logo_dir)?;

        let context = Self::from_parts(
            config.clone(),
            paths,
            current_season,
            records,
            completed,
            upcoming,
            colors,
            locations,
        );
        info!(
            "dashboard ready: season {}, {} rows, {} players, {} teams, {} completed / {} upcoming games",
            context.current_season,
            context.records.len(),
            context.careers.len(),
            context.teams.len(),
            context.completed_games.len(),
            context.upcoming_games.len()
        );
        Ok(context)
    }

    /// Build the context from already-loaded inputs.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        config: Config,
        paths: ResolvedPaths,
        current_season: i32,
        mut records: Vec<PlayerWeekRecord>,
        completed_games: Vec<CompletedGame>,
        upcoming_games: Vec<UpcomingGame>,
        colors: TeamColors,
        locations: Vec<TeamLocation>,
    ) -> Self {
        apply_derived_fields(&mut records);
        let seasons = aggregate_seasons(&records);
        let careers = aggregate_careers(&records);
        let categories = classify_careers(&careers);
        let normalized_games = normalize_all(&completed_games);
        let teams = records
            .iter()
            .filter_map(|r| r.real_team.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            config,
            paths,
            current_season,
            records,
            seasons,
            careers,
            categories,
            completed_games,
            upcoming_games,
            normalized_games,
            colors,
            locations,
            teams,
        }
    }

    /// Career-based role; players with no rows default to `Receiver`.
    pub fn category(&self, player: &str) -> PlayerCategory {
        self.categories
            .get(player)
            .copied()
            .unwrap_or(PlayerCategory::Receiver)
    }

    /// Sorted distinct seasons present in the box scores.
    pub fn seasons_present(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.season)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn games_per_season(&self) -> u32 {
        self.config.season.games_per_season
    }

    pub fn logo_svg_path(&self, team: &str) -> PathBuf {
        metadata::logo_svg_path(&self.paths.logo_dir, team)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn from_parts_derives_everything() {
        let ctx = context(
            vec![
                week("QB1", "KAN", 2023, 1, line(300.0, 10.0, 0.0)),
                week("QB1", "KAN", 2024, 1, line(280.0, 0.0, 0.0)),
                week("RB1", "OAK", 2023, 1, line(0.0, 90.0, 10.0)),
                week("X", "ZZZ", 2024, 1, line(0.0, 0.0, 5.0)),
            ],
            vec![game(2024, 1, "Kansas City Chiefs", 31.0, "Las Vegas Raiders", 17.0)],
        );
        assert!(ctx.records.iter().all(|r| !r.year_week.is_empty()));
        assert_eq!(ctx.seasons.len(), 4);
        assert_eq!(ctx.careers["QB1"].total_passing_yds(), 580.0);
        assert_eq!(ctx.category("QB1"), PlayerCategory::Quarterback);
        assert_eq!(ctx.category("RB1"), PlayerCategory::RunningBack);
        assert_eq!(ctx.category("nobody"), PlayerCategory::Receiver);
        assert_eq!(ctx.teams, vec!["Kansas City Chiefs", "Las Vegas Raiders"]);
        assert_eq!(ctx.normalized_games.len(), 2);
        assert_eq!(ctx.seasons_present(), vec![2023, 2024]);
    }

    #[test]
    fn paths_resolve_against_base() {
        let config = crate::config::parse_config(CONFIG).unwrap();
        let paths = ResolvedPaths::resolve(Path::new("/srv/nfl"), &config);
        assert_eq!(paths.players_dir, Path::new("/srv/nfl/data"));
        assert_eq!(paths.logo_dir, Path::new("/srv/nfl/logo"));
    }
}
