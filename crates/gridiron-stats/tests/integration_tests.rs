// Integration tests for the gridiron stats library.
//
// These tests load the CSV fixtures under tests/fixtures through the public
// API and check that the loaders, the derived tables and every page view
// agree with hand-computed values.

use std::path::PathBuf;

use chrono::NaiveDate;

use gridiron_stats::config::{self, Config};
use gridiron_stats::context::DashboardContext;
use gridiron_stats::stats::classify::PlayerCategory;
use gridiron_stats::stats::record::{StatKind, YardageKind};
use gridiron_stats::views::{bets, fantasy, home, matchup, player, team};

// ===========================================================================
// Test helpers
// ===========================================================================

const KC: &str = "Kansas City Chiefs";
const LV: &str = "Las Vegas Raiders";

fn crate_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn fixtures() -> PathBuf {
    crate_root().join("tests").join("fixtures")
}

/// The shipped defaults with the season pinned to the fixture year.
fn fixture_config() -> Config {
    let text = std::fs::read_to_string(crate_root().join("defaults").join(config::CONFIG_FILE))
        .expect("defaults/dashboard.toml should exist");
    let mut config = config::parse_config(&text).expect("defaults should parse");
    config.season.current_year = Some(2024);
    config
}

fn load_fixture_context() -> DashboardContext {
    let today = NaiveDate::from_ymd_opt(2024, 9, 20).unwrap();
    DashboardContext::load_from(&fixtures(), &fixture_config(), today)
        .expect("fixtures should load")
}

// ===========================================================================
// Config
// ===========================================================================

#[test]
fn defaults_copy_then_load() {
    let base = std::env::temp_dir().join(format!("gridiron_cfg_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(base.join("defaults")).unwrap();
    std::fs::copy(
        crate_root().join("defaults").join(config::CONFIG_FILE),
        base.join("defaults").join(config::CONFIG_FILE),
    )
    .unwrap();

    let copied = config::ensure_config_files(&base).unwrap();
    assert_eq!(copied.len(), 1);
    // Second run leaves the existing file alone.
    assert!(config::ensure_config_files(&base).unwrap().is_empty());

    let config = config::load_config_from(&base).unwrap();
    assert_eq!(config.paths.players_dir, "data");
    assert_eq!(config.season.games_per_season, 17);
    assert_eq!(config.fantasy.ppr.reception, 1.0);

    let _ = std::fs::remove_dir_all(&base);
}

// ===========================================================================
// Loading and derived tables
// ===========================================================================

#[test]
fn context_loads_all_fixture_files() {
    let ctx = load_fixture_context();
    assert_eq!(ctx.current_season, 2024);
    // 5 rows from 2023, 11 from 2024; the blank-player row and notes.csv are skipped.
    assert_eq!(ctx.records.len(), 16);
    assert_eq!(ctx.completed_games.len(), 4);
    assert_eq!(ctx.normalized_games.len(), 8);
    assert_eq!(ctx.upcoming_games.len(), 2);
    assert_eq!(ctx.colors.color_for(KC, "#fff"), "#E31837");
    assert_eq!(ctx.locations.len(), 3);
    assert_eq!(ctx.teams, vec!["Buffalo Bills", KC, LV]);
    assert_eq!(ctx.seasons_present(), vec![2023, 2024]);
}

#[test]
fn derived_fields_and_season_context() {
    let ctx = load_fixture_context();
    let allen_wk2 = ctx
        .records
        .iter()
        .find(|r| r.player == "Josh Allen" && r.week == Some(2))
        .unwrap();
    // Empty rushing cell reads as zero.
    assert_eq!(allen_wk2.stats.rushing_yds, 0.0);
    assert_eq!(allen_wk2.year_week, "2024_02");
    assert_eq!(allen_wk2.real_team.as_deref(), Some("Buffalo Bills"));
    assert_eq!(allen_wk2.stat(StatKind::PassingRushingYds), 230.0);

    let mahomes_2023 = ctx.seasons.get("Patrick Mahomes", 2023).unwrap();
    assert_eq!(mahomes_2023.season_passing_yds(), 550.0);
    assert_eq!(ctx.careers["Patrick Mahomes"].total_passing_yds(), 1140.0);
}

#[test]
fn categories_from_career_totals() {
    let ctx = load_fixture_context();
    assert_eq!(ctx.category("Patrick Mahomes"), PlayerCategory::Quarterback);
    assert_eq!(ctx.category("Isiah Pacheco"), PlayerCategory::RunningBack);
    assert_eq!(ctx.category("Travis Kelce"), PlayerCategory::Receiver);
    assert_eq!(ctx.category("Josh Allen"), PlayerCategory::Quarterback);
}

// ===========================================================================
// Views
// ===========================================================================

#[test]
fn home_leaderboards_and_projection() {
    let ctx = load_fixture_context();
    let page = home::home_page(&ctx, KC);
    assert_eq!(page.record_label(), "2-0");
    assert_eq!(page.team_color, "#E31837");

    let passing = &page.leaderboards[0].1;
    let order: Vec<&str> = passing.iter().map(|r| r.rank_label.as_str()).collect();
    assert_eq!(order, vec!["1: Patrick Mahomes", "2: Josh Allen", "3: Gardner Minshew"]);
    assert_eq!(passing[0].total, 590.0);
    assert_eq!(passing[0].projected, Some(5015.0));
    assert_eq!(passing[0].averages.passing_yds, 295.0);
    assert_eq!(passing[0].averages.passer_rating, 107.0);
    assert_eq!(passing[0].passing_td, 5.0);

    let rushing = home::leaderboard(&ctx, home::LeaderboardStat::RushingYds, 2024);
    assert_eq!(rushing[0].player, "Isiah Pacheco");
    assert_eq!(rushing[0].total, 125.0);
    assert_eq!(rushing[0].projected, Some(1062.0));

    let race = home::cumulative_race(&ctx, YardageKind::Receiving, 2024, 1, LV);
    let names: Vec<&str> = race.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(names, vec!["Travis Kelce", "Davante Adams"]);
    assert_eq!(race[0].final_total(), 165.0);
}

#[test]
fn team_page_rosters_and_positions() {
    let ctx = load_fixture_context();
    let page = team::team_page(&ctx, KC, None);
    assert_eq!(page.roster, vec!["Isiah Pacheco", "Patrick Mahomes", "Travis Kelce"]);
    assert_eq!(page.active_roster, page.roster);
    assert_eq!(page.positions.quarterbacks, vec!["Patrick Mahomes"]);
    assert_eq!(page.positions.running_backs, vec!["Isiah Pacheco"]);
    assert_eq!(page.positions.receivers, vec!["Travis Kelce"]);
    assert!(page.passing.iter().all(|r| r.player == "Patrick Mahomes"));
}

#[test]
fn player_page_totals_and_filter() {
    let ctx = load_fixture_context();
    let page = player::player_page(&ctx, "Travis Kelce", None).unwrap();
    assert_eq!(page.team_label, KC);
    assert_eq!(page.season_totals.len(), 2);
    assert_eq!(page.latest.season, 2024);
    assert_eq!(page.latest.receiving_yds, 165.0);
    assert_eq!(page.latest.receiving_td, 1.0);

    assert!(player::player_page(&ctx, "Travis Kelce", Some(LV)).is_none());
}

#[test]
fn matchup_splits_for_upcoming_game() {
    let ctx = load_fixture_context();
    let game = matchup::find_game(&ctx, "Las Vegas Raiders @ Kansas City Chiefs").unwrap();
    let page = matchup::matchup_page(&ctx, game);

    assert_eq!(page.date_label, "September 22, 2024");
    assert_eq!(page.away.record.as_ref().unwrap().label(), "0-2");
    assert_eq!(page.home.record.as_ref().unwrap().label(), "2-0");
    assert_eq!(page.home.avg_scored, Some(25.5));
    assert_eq!(page.home.color, "#E31837");

    let away: Vec<(&str, &str, f64)> = page
        .away_splits
        .get(YardageKind::Passing)
        .iter()
        .map(|t| (t.year_week.as_str(), t.player.as_str(), t.value))
        .collect();
    assert_eq!(
        away,
        vec![
            ("2024_01", "Josh Allen", 260.0),
            ("2024_01", "Gardner Minshew", 210.0),
            ("2024_02", "Gardner Minshew", 240.0),
        ]
    );

    let home: Vec<(&str, &str)> = page
        .home_splits
        .get(YardageKind::Passing)
        .iter()
        .map(|t| (t.player.as_str(), t.team_category.as_str()))
        .collect();
    assert_eq!(
        home,
        vec![
            ("Patrick Mahomes", "Offense Kansas City Chiefs"),
            ("Patrick Mahomes", "Offense Kansas City Chiefs"),
            ("Josh Allen", "Defense Las Vegas Raiders"),
        ]
    );

    let other = matchup::find_game(&ctx, "Buffalo Bills @ Miami Dolphins").unwrap();
    assert_eq!(other.formatted_date(), "TBD");
}

#[test]
fn bets_hit_rates_over_both_seasons() {
    let ctx = load_fixture_context();
    let rates = bets::hit_rates(&ctx, &[2023, 2024], StatKind::PassingYds, 250.0);
    let view: Vec<(&str, u32, u32, f64)> = rates
        .iter()
        .map(|r| (r.player.as_str(), r.hit_games, r.total_games, r.hit_pct))
        .collect();
    assert_eq!(
        view,
        vec![("Patrick Mahomes", 4, 4, 100.0), ("Josh Allen", 1, 2, 50.0)]
    );
}

#[test]
fn fantasy_receiver_ranking() {
    let ctx = load_fixture_context();
    let weeks = fantasy::weekly_points(&ctx, &[2023, 2024], fantasy::ScoringFormat::HalfPpr);
    let totals = fantasy::season_totals(&weeks);
    let ranked = fantasy::category_ranking(&totals, PlayerCategory::Receiver, 1, 30, &[]);
    let view: Vec<(usize, &str, f64)> = ranked.iter().map(|r| (r.rank, r.player.as_str(), r.total)).collect();
    assert_eq!(view, vec![(1, "Travis Kelce", 29.5), (2, "Davante Adams", 18.0)]);

    let dist = fantasy::distribution(&weeks, "Travis Kelce");
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[1].min, 10.0);
    assert_eq!(dist[1].max, 19.5);
}

#[test]
fn missing_optional_inputs_are_empty() {
    let base = std::env::temp_dir().join(format!("gridiron_bare_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(base.join("data")).unwrap();
    std::fs::copy(
        fixtures().join("data").join("2024_week_data.csv"),
        base.join("data").join("2024_week_data.csv"),
    )
    .unwrap();

    let today = NaiveDate::from_ymd_opt(2024, 9, 20).unwrap();
    let ctx = DashboardContext::load_from(&base, &fixture_config(), today).unwrap();
    assert_eq!(ctx.records.len(), 11);
    assert!(ctx.completed_games.is_empty());
    assert!(ctx.upcoming_games.is_empty());
    assert!(ctx.colors.is_empty());
    assert!(ctx.locations.is_empty());
    assert!(home::home_page(&ctx, KC).record.is_none());

    let _ = std::fs::remove_dir_all(&base);
}

#[test]
fn missing_players_dir_is_an_error() {
    let base = std::env::temp_dir().join(format!("gridiron_empty_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&base);
    std::fs::create_dir_all(&base).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 9, 20).unwrap();
    assert!(DashboardContext::load_from(&base, &fixture_config(), today).is_err());
    let _ = std::fs::remove_dir_all(&base);
}
