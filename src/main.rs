// Scorebook entry point.
//
// Startup sequence:
// 1. Initialize tracing
// 2. Load config (config/settings.toml, defaults if absent)
// 3. Load roster and stat-line CSVs, falling back to the built-in sample
//    data when the files are missing
// 4. Build the application state
// 5. Print the roster, batting/pitching/fielding reports, and team summary

use scorebook::app::AppState;
use scorebook::config;
use scorebook::data;
use scorebook::sample;

use anyhow::Context;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Scorebook starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: team={}, season={}",
        config.team.name, config.team.season
    );

    let all_data = match data::load_all(&config) {
        Ok(d) => {
            info!(
                "Loaded {} players, {} batting / {} pitching / {} fielding lines",
                d.players.len(),
                d.batting.len(),
                d.pitching.len(),
                d.fielding.len()
            );
            d
        }
        Err(e) => {
            warn!("data files unavailable ({e}); using built-in sample data");
            sample::sample_data()
        }
    };

    let state = AppState::new(config, all_data);

    print_header(&state);
    print_roster(&state);
    print_batting(&state);
    print_pitching(&state);
    print_fielding(&state);
    print_summary(&state);

    info!("Scorebook done");
    Ok(())
}

/// Initialize tracing to stderr so stdout carries only the reports.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scorebook=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Plain-text report printing
// ---------------------------------------------------------------------------

fn print_header(state: &AppState) {
    println!(
        "{} - {} season",
        state.config.team.name, state.config.team.season
    );
    println!();
}

fn print_roster(state: &AppState) {
    println!("ROSTER");
    println!(
        "{:>3}  {:<22} {:<4} {:<10} {:<4} {:<8}",
        "#", "Player", "Pos", "Year", "B/T", "Status"
    );
    for p in &state.players {
        println!(
            "{:>3}  {:<22} {:<4} {:<10} {:<4} {:<8}",
            p.jersey,
            p.full_name(),
            p.position.abbrev(),
            p.year,
            format!("{}/{}", p.bats, p.throws),
            p.status
        );
    }
    println!();
}

fn print_batting(state: &AppState) {
    println!("BATTING");
    println!(
        "{:<22} {:>3} {:>4} {:>4} {:>4} {:>3} {:>4} {:>3}  {:>5} {:>5} {:>5}",
        "Player", "G", "AB", "R", "H", "HR", "RBI", "SB", "AVG", "OBP", "SLG"
    );
    for row in state.batting_report() {
        println!(
            "{:<22} {:>3} {:>4} {:>4} {:>4} {:>3} {:>4} {:>3}  {:>5} {:>5} {:>5}",
            row.name,
            row.games,
            row.at_bats,
            row.runs,
            row.hits,
            row.home_runs,
            row.runs_batted_in,
            row.stolen_bases,
            row.avg,
            row.obp,
            row.slg
        );
    }
    println!();
}

fn print_pitching(state: &AppState) {
    println!("PITCHING");
    println!(
        "{:<22} {:>3} {:>6} {:>3} {:>3} {:>3} {:>4}  {:>5} {:>5}",
        "Player", "G", "IP", "W", "L", "SV", "SO", "ERA", "WHIP"
    );
    for row in state.pitching_report() {
        println!(
            "{:<22} {:>3} {:>6} {:>3} {:>3} {:>3} {:>4}  {:>5} {:>5}",
            row.name,
            row.games,
            row.innings,
            row.wins,
            row.losses,
            row.saves,
            row.strikeouts,
            row.era,
            row.whip
        );
    }
    println!();
}

fn print_fielding(state: &AppState) {
    println!("FIELDING");
    println!(
        "{:<22} {:>3} {:>4} {:>4} {:>3} {:>3}  {:>5}",
        "Player", "G", "PO", "A", "E", "DP", "FPCT"
    );
    for row in state.fielding_report() {
        println!(
            "{:<22} {:>3} {:>4} {:>4} {:>3} {:>3}  {:>5}",
            row.name,
            row.games,
            row.putouts,
            row.assists,
            row.errors,
            row.double_plays,
            row.pct
        );
    }
    println!();
}

fn print_summary(state: &AppState) {
    let batting = state.team_batting_summary();
    let pitching = state.team_pitching_summary();
    let fielding = state.team_fielding_summary();

    println!("TEAM TOTALS");
    println!(
        "Batting:  {} AB, {} H, {} R, {} HR - AVG {}, OBP {}, SLG {}",
        batting.at_bats,
        batting.hits,
        batting.runs,
        batting.home_runs,
        batting.avg,
        batting.obp,
        batting.slg
    );
    println!(
        "Pitching: {} IP, {} ER, {} SO - ERA {}, WHIP {}",
        pitching.innings, pitching.earned_runs, pitching.strikeouts, pitching.era, pitching.whip
    );
    println!(
        "Fielding: {} TC, {} E - FPCT {}",
        fielding.chances, fielding.errors, fielding.pct
    );
}
