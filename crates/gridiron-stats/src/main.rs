// Gridiron stats entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, stdout is the report)
// 2. Load config
// 3. Load and derive the dashboard context
// 4. Print the current-season home leaderboards
//
// An optional first argument names the franchise whose record and players
// are highlighted; it defaults to the first team in the data.

use gridiron_stats::config;
use gridiron_stats::context::DashboardContext;
use gridiron_stats::views::home::{home_page, top_with_team, LeaderboardRow, LeaderboardStat};

use anyhow::Context;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;
    info!("Gridiron stats starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: players from {}, games from {}, rollover month {}",
        config.paths.players_dir, config.paths.games_dir, config.season.rollover_month
    );

    // 3. Build the context
    let today = chrono::Local::now().date_naive();
    let ctx = DashboardContext::load(&config, today).context("failed to load dashboard data")?;

    let team = match std::env::args().nth(1) {
        Some(team) => team,
        None => ctx.teams.first().cloned().unwrap_or_default(),
    };
    if !team.is_empty() && !ctx.teams.contains(&team) {
        warn!("team {} not found in box scores", team);
    }

    // 4. Report
    let page = home_page(&ctx, &team);
    println!("Season {}", page.season);
    if !team.is_empty() {
        println!("{} ({})", team, page.record_label());
    }
    for (stat, rows) in &page.leaderboards {
        println!();
        println!("{}", stat.title());
        let shown = top_with_team(rows, config.leaderboard.top_n, &team);
        if shown.is_empty() {
            println!("  (no data)");
        }
        for row in &shown {
            println!("  {}", format_row(row, &team));
        }
    }

    info!("Gridiron stats finished");
    Ok(())
}

fn format_row(row: &LeaderboardRow, team: &str) -> String {
    let marker = if row.is_team(team) { "*" } else { " " };
    let projected = row
        .projected
        .map(|p| format!("{p:.0}"))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{marker} {:<28} {:<4} {:>7.0}  proj {:>6}",
        row.rank_label, row.team, row.total, projected
    )
}

/// Initialize tracing to log to a file so stdout carries only the report.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("gridiron.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gridiron=info,gridiron_stats=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
