// Integration tests for the scorebook.
//
// These tests exercise the public API end to end: the statistics engine's
// formatting contract, CSV fixture loading, and the application state
// operations (search, add/remove player, reports, team summaries).

use scorebook::app::{AppError, AppState};
use scorebook::config::{Config, DataPaths};
use scorebook::data;
use scorebook::roster::{NewPlayer, PlayerStatus, Position};
use scorebook::sample;
use scorebook::stats::batting::{batting_average, on_base_percentage, slugging_percentage};
use scorebook::stats::fielding::fielding_percentage;
use scorebook::stats::pitching::{earned_run_average, innings_from_box_score, whip};

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to project root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn fixture_paths() -> DataPaths {
    DataPaths {
        roster: format!("{FIXTURES}/roster.csv"),
        batting: format!("{FIXTURES}/batting.csv"),
        pitching: format!("{FIXTURES}/pitching.csv"),
        fielding: format!("{FIXTURES}/fielding.csv"),
    }
}

fn fixture_state() -> AppState {
    let data = data::load_all_from_paths(&fixture_paths()).expect("fixtures load");
    AppState::new(Config::default(), data)
}

// ===========================================================================
// Statistics engine contract
// ===========================================================================

#[test]
fn batting_average_zero_at_bats_is_placeholder_regardless_of_hits() {
    for hits in [0, 1, 54, 1000] {
        assert_eq!(batting_average(hits, 0), ".000");
    }
}

#[test]
fn batting_average_sample_fixture() {
    assert_eq!(batting_average(54, 168), ".321");
}

#[test]
fn on_base_percentage_formula_value() {
    // 76 / 190 = .400 exactly.
    assert_eq!(on_base_percentage(54, 22, 0, 168, 0), ".400");
}

#[test]
fn on_base_percentage_sample_card_regression() {
    // Marcus Webb's sample line: HBP and sacrifice flies push OBP to .402.
    assert_eq!(on_base_percentage(54, 22, 4, 168, 5), ".402");
}

#[test]
fn slugging_percentage_keeps_leading_digit() {
    // TB = 34 + 24 + 6 + 32 = 96; 96 / 168 = .5714
    assert_eq!(slugging_percentage(34, 12, 2, 8, 168), "0.571");
}

#[test]
fn era_zero_innings_placeholder() {
    assert_eq!(earned_run_average(0, 0.0), "0.00");
}

#[test]
fn whip_zero_innings_placeholder() {
    assert_eq!(whip(5, 10, 0.0), "0.00");
}

#[test]
fn fielding_percentage_zero_chances_placeholder() {
    assert_eq!(fielding_percentage(0, 0, 0), ".000");
}

#[test]
fn formatting_asymmetry_is_preserved() {
    // Stripped leading zero for AVG/OBP/FPCT, kept for SLG/ERA/WHIP.
    assert_eq!(batting_average(1, 4), ".250");
    assert_eq!(on_base_percentage(1, 1, 0, 4, 0), ".400");
    assert_eq!(fielding_percentage(3, 0, 1), ".750");
    assert_eq!(slugging_percentage(1, 0, 0, 0, 4), "0.250");
    assert_eq!(earned_run_average(1, 9.0), "1.00");
    assert_eq!(whip(1, 1, 2.0), "1.00");
}

#[test]
fn formatting_is_idempotent() {
    // No hidden state: identical inputs give identical strings, every time.
    for _ in 0..3 {
        assert_eq!(batting_average(54, 168), ".321");
        assert_eq!(whip(15, 55, 60.0), "1.17");
    }
}

#[test]
fn batting_average_monotone_in_hits() {
    let mut last = batting_average(0, 200);
    for hits in 1..=200 {
        let current = batting_average(hits, 200);
        // String compare works here because the values share the ".NNN"
        // shape until 1.000; check the numeric prefix instead.
        let last_v: f64 = format!("0{last}").parse().unwrap();
        let cur_v: f64 = if current.starts_with('.') {
            format!("0{current}").parse().unwrap()
        } else {
            current.parse().unwrap()
        };
        assert!(cur_v >= last_v, "average decreased at {hits} hits");
        last = current;
    }
}

// ===========================================================================
// CSV loading
// ===========================================================================

#[test]
fn load_all_from_fixture_paths() {
    let data = data::load_all_from_paths(&fixture_paths()).unwrap();
    assert_eq!(data.players.len(), 3);
    assert_eq!(data.batting.len(), 2);
    assert_eq!(data.pitching.len(), 1);
    assert_eq!(data.fielding.len(), 2);

    let keller = &data.pitching[0];
    assert_eq!(keller.name, "Ben Keller");
    assert!((keller.innings_pitched - 60.0).abs() < 1e-9);
}

#[test]
fn load_all_missing_file_is_an_error() {
    let mut paths = fixture_paths();
    paths.roster = format!("{FIXTURES}/does-not-exist.csv");
    assert!(data::load_all_from_paths(&paths).is_err());
}

// ===========================================================================
// Application state
// ===========================================================================

#[test]
fn reports_over_fixture_data() {
    let state = fixture_state();

    let batting = state.batting_report();
    let holloway = batting.iter().find(|r| r.name == "Sam Holloway").unwrap();
    assert_eq!(holloway.hits, 44);
    assert_eq!(holloway.avg, ".314");
    assert_eq!(holloway.obp, ".393");
    assert_eq!(holloway.slg, "0.493");

    let pitching = state.pitching_report();
    assert_eq!(pitching.len(), 1);
    assert_eq!(pitching[0].era, "3.00");
    assert_eq!(pitching[0].whip, "1.17");
    assert_eq!(pitching[0].innings, "60.0");

    let fielding = state.fielding_report();
    let vargas = fielding.iter().find(|r| r.name == "Rico Vargas").unwrap();
    assert_eq!(vargas.pct, ".958");
}

#[test]
fn team_summary_aggregates_before_dividing() {
    let state = fixture_state();
    let summary = state.team_batting_summary();
    // 44 + 41 hits over 140 + 145 at-bats = 85 / 285 = .298
    assert_eq!(summary.hits, 85);
    assert_eq!(summary.at_bats, 285);
    assert_eq!(summary.avg, ".298");
}

#[test]
fn search_add_remove_flow() {
    let mut state = fixture_state();

    assert_eq!(state.search_players("vargas").len(), 1);
    assert_eq!(state.search_players("3b").len(), 1);
    assert_eq!(state.search_players("").len(), 3);

    state
        .add_player(NewPlayer {
            jersey: "2".into(),
            first_name: "Ade".into(),
            last_name: "Okafor".into(),
            position: "CF".into(),
            year: "Freshman".into(),
            bats: "R".into(),
            throws: "R".into(),
            status: "Active".into(),
        })
        .unwrap();
    assert_eq!(state.players[0].last_name, "Okafor");
    assert_eq!(state.players[0].position, Position::CenterField);
    assert_eq!(state.players[0].status, PlayerStatus::Active);
    assert_eq!(state.search_players("").len(), 4);

    assert!(state.remove_player(2));
    assert_eq!(state.search_players("").len(), 3);
}

#[test]
fn add_player_validation_errors() {
    let mut state = fixture_state();

    let empty = NewPlayer::default();
    assert!(matches!(
        state.add_player(empty),
        Err(AppError::MissingField("jersey"))
    ));

    let bad_jersey = NewPlayer {
        jersey: "abc".into(),
        first_name: "A".into(),
        last_name: "B".into(),
        position: "C".into(),
        year: "Senior".into(),
        bats: "R".into(),
        throws: "R".into(),
        status: "Active".into(),
    };
    assert!(matches!(
        state.add_player(bad_jersey),
        Err(AppError::InvalidField { field: "jersey", .. })
    ));
}

// ===========================================================================
// Sample data path
// ===========================================================================

#[test]
fn sample_data_builds_a_working_state() {
    let state = AppState::new(Config::default(), sample::sample_data());

    let batting = state.batting_report();
    let webb = batting.iter().find(|r| r.name == "Marcus Webb").unwrap();
    assert_eq!(webb.avg, ".321");
    assert_eq!(webb.obp, ".402");

    let pitching = state.pitching_report();
    let thompson = pitching.iter().find(|r| r.name == "Jake Thompson").unwrap();
    assert_eq!(thompson.innings, "45.1");
    assert_eq!(thompson.era, "3.38");
}

#[test]
fn shipped_data_files_match_the_sample_data() {
    // data/*.csv is the sample data written out; loading it must agree with
    // the built-in fallback.
    let paths = DataPaths {
        roster: "data/roster.csv".into(),
        batting: "data/batting.csv".into(),
        pitching: "data/pitching.csv".into(),
        fielding: "data/fielding.csv".into(),
    };
    let loaded = data::load_all_from_paths(&paths).unwrap();
    let built_in = sample::sample_data();

    assert_eq!(loaded.players, built_in.players);
    assert_eq!(loaded.batting, built_in.batting);
    assert_eq!(loaded.fielding, built_in.fielding);
    assert_eq!(loaded.pitching.len(), built_in.pitching.len());
    for (a, b) in loaded.pitching.iter().zip(&built_in.pitching) {
        assert_eq!(a.name, b.name);
        assert!((a.innings_pitched - b.innings_pitched).abs() < 1e-9);
        assert_eq!(a.earned_runs, b.earned_runs);
    }
}

#[test]
fn box_score_innings_are_true_thirds_after_load() {
    let ip = innings_from_box_score(38.2);
    assert!((ip - (38.0 + 2.0 / 3.0)).abs() < 1e-9);
}
