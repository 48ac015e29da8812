// Application state and operations.
//
// All mutable state lives in one explicit struct instead of ambient globals.
// The display layer is an external collaborator: it hands raw form strings
// in and prints report rows verbatim.

use crate::config::Config;
use crate::data::AllData;
use crate::roster::{Handedness, NewPlayer, Player, PlayerStatus, Position};
use crate::stats::batting::{self, BattingLine};
use crate::stats::fielding::{self, FieldingLine};
use crate::stats::pitching::{self, format_innings, PitchingLine};
use tracing::info;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required form field was empty. The only validation in scope; any
    /// richer checking belongs to the display layer.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("invalid value `{value}` for field `{field}`")]
    InvalidField { field: &'static str, value: String },

    #[error("jersey number {0} is already taken")]
    DuplicateJersey(u32),
}

// ---------------------------------------------------------------------------
// Report rows (formatted for verbatim display)
// ---------------------------------------------------------------------------

/// One batting table row: counting stats plus formatted rate stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattingReportRow {
    pub name: String,
    pub games: u32,
    pub at_bats: u32,
    pub runs: u32,
    pub hits: u32,
    pub home_runs: u32,
    pub runs_batted_in: u32,
    pub stolen_bases: u32,
    pub avg: String,
    pub obp: String,
    pub slg: String,
}

/// One pitching table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchingReportRow {
    pub name: String,
    pub games: u32,
    pub innings: String,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub strikeouts: u32,
    pub era: String,
    pub whip: String,
}

/// One fielding table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldingReportRow {
    pub name: String,
    pub games: u32,
    pub putouts: u32,
    pub assists: u32,
    pub errors: u32,
    pub double_plays: u32,
    pub pct: String,
}

// ---------------------------------------------------------------------------
// Team summaries (the stat cards)
// ---------------------------------------------------------------------------

/// Team-wide batting totals with the derived rate stats recomputed over the
/// aggregate counting stats (not averaged per player).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattingSummary {
    pub players: usize,
    pub at_bats: u32,
    pub hits: u32,
    pub runs: u32,
    pub home_runs: u32,
    pub avg: String,
    pub obp: String,
    pub slg: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchingSummary {
    pub players: usize,
    pub innings: String,
    pub earned_runs: u32,
    pub strikeouts: u32,
    pub era: String,
    pub whip: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldingSummary {
    pub players: usize,
    pub chances: u32,
    pub errors: u32,
    pub pct: String,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state: config, roster, and stat lines.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub players: Vec<Player>,
    pub batting: Vec<BattingLine>,
    pub pitching: Vec<PitchingLine>,
    pub fielding: Vec<FieldingLine>,
}

impl AppState {
    pub fn new(config: Config, data: AllData) -> Self {
        AppState {
            config,
            players: data.players,
            batting: data.batting,
            pitching: data.pitching,
            fielding: data.fielding,
        }
    }

    // -- Roster operations --

    /// Players matching the search box query (name, position, or jersey,
    /// case-insensitive substring). An empty query returns everyone.
    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }

    /// Validate and add a player from raw form fields.
    ///
    /// Every field is required (non-empty); jersey must parse and be free;
    /// position, handedness, and status must be known abbreviations. The new
    /// player is inserted at the front of the roster so the latest addition
    /// lists first.
    pub fn add_player(&mut self, form: NewPlayer) -> Result<(), AppError> {
        let required: [(&'static str, &str); 8] = [
            ("jersey", &form.jersey),
            ("first_name", &form.first_name),
            ("last_name", &form.last_name),
            ("position", &form.position),
            ("year", &form.year),
            ("bats", &form.bats),
            ("throws", &form.throws),
            ("status", &form.status),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::MissingField(field));
            }
        }

        let jersey: u32 = form.jersey.trim().parse().map_err(|_| AppError::InvalidField {
            field: "jersey",
            value: form.jersey.clone(),
        })?;
        if self.players.iter().any(|p| p.jersey == jersey) {
            return Err(AppError::DuplicateJersey(jersey));
        }

        let position = Position::from_abbrev(&form.position).ok_or_else(|| AppError::InvalidField {
            field: "position",
            value: form.position.clone(),
        })?;
        let bats = Handedness::from_abbrev(&form.bats).ok_or_else(|| AppError::InvalidField {
            field: "bats",
            value: form.bats.clone(),
        })?;
        let throws = Handedness::from_abbrev(&form.throws).ok_or_else(|| AppError::InvalidField {
            field: "throws",
            value: form.throws.clone(),
        })?;
        let status = PlayerStatus::from_label(&form.status).ok_or_else(|| AppError::InvalidField {
            field: "status",
            value: form.status.clone(),
        })?;

        let player = Player {
            jersey,
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            position,
            year: form.year.trim().to_string(),
            bats,
            throws,
            status,
        };
        info!("adding player #{} {}", player.jersey, player.full_name());
        self.players.insert(0, player);
        Ok(())
    }

    /// Remove a player by jersey number. Returns whether a player was
    /// removed. Stat lines are kept; historical stats outlive roster moves.
    pub fn remove_player(&mut self, jersey: u32) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.jersey != jersey);
        let removed = self.players.len() < before;
        if removed {
            info!("removed player #{jersey}");
        }
        removed
    }

    // -- Reports --

    pub fn batting_report(&self) -> Vec<BattingReportRow> {
        self.batting
            .iter()
            .map(|line| BattingReportRow {
                name: line.name.clone(),
                games: line.games,
                at_bats: line.at_bats,
                runs: line.runs,
                hits: line.hits(),
                home_runs: line.home_runs,
                runs_batted_in: line.runs_batted_in,
                stolen_bases: line.stolen_bases,
                avg: line.average(),
                obp: line.on_base(),
                slg: line.slugging(),
            })
            .collect()
    }

    pub fn pitching_report(&self) -> Vec<PitchingReportRow> {
        self.pitching
            .iter()
            .map(|line| PitchingReportRow {
                name: line.name.clone(),
                games: line.games,
                innings: line.innings_display(),
                wins: line.wins,
                losses: line.losses,
                saves: line.saves,
                strikeouts: line.strikeouts,
                era: line.era(),
                whip: line.whip(),
            })
            .collect()
    }

    pub fn fielding_report(&self) -> Vec<FieldingReportRow> {
        self.fielding
            .iter()
            .map(|line| FieldingReportRow {
                name: line.name.clone(),
                games: line.games,
                putouts: line.putouts,
                assists: line.assists,
                errors: line.errors,
                double_plays: line.double_plays,
                pct: line.percentage(),
            })
            .collect()
    }

    // -- Summaries --

    pub fn team_batting_summary(&self) -> BattingSummary {
        let at_bats: u32 = self.batting.iter().map(|l| l.at_bats).sum();
        let hits: u32 = self.batting.iter().map(|l| l.hits()).sum();
        let runs: u32 = self.batting.iter().map(|l| l.runs).sum();
        let singles: u32 = self.batting.iter().map(|l| l.singles).sum();
        let doubles: u32 = self.batting.iter().map(|l| l.doubles).sum();
        let triples: u32 = self.batting.iter().map(|l| l.triples).sum();
        let home_runs: u32 = self.batting.iter().map(|l| l.home_runs).sum();
        let walks: u32 = self.batting.iter().map(|l| l.walks).sum();
        let hit_by_pitch: u32 = self.batting.iter().map(|l| l.hit_by_pitch).sum();
        let sacrifice_flies: u32 = self.batting.iter().map(|l| l.sacrifice_flies).sum();

        BattingSummary {
            players: self.batting.len(),
            at_bats,
            hits,
            runs,
            home_runs,
            avg: batting::batting_average(hits, at_bats),
            obp: batting::on_base_percentage(hits, walks, hit_by_pitch, at_bats, sacrifice_flies),
            slg: batting::slugging_percentage(singles, doubles, triples, home_runs, at_bats),
        }
    }

    pub fn team_pitching_summary(&self) -> PitchingSummary {
        let innings: f64 = self.pitching.iter().map(|l| l.innings_pitched).sum();
        let earned_runs: u32 = self.pitching.iter().map(|l| l.earned_runs).sum();
        let strikeouts: u32 = self.pitching.iter().map(|l| l.strikeouts).sum();
        let walks: u32 = self.pitching.iter().map(|l| l.walks).sum();
        let hits_allowed: u32 = self.pitching.iter().map(|l| l.hits_allowed).sum();

        PitchingSummary {
            players: self.pitching.len(),
            innings: format_innings(innings),
            earned_runs,
            strikeouts,
            era: pitching::earned_run_average(earned_runs, innings),
            whip: pitching::whip(walks, hits_allowed, innings),
        }
    }

    pub fn team_fielding_summary(&self) -> FieldingSummary {
        let putouts: u32 = self.fielding.iter().map(|l| l.putouts).sum();
        let assists: u32 = self.fielding.iter().map(|l| l.assists).sum();
        let errors: u32 = self.fielding.iter().map(|l| l.errors).sum();

        FieldingSummary {
            players: self.fielding.len(),
            chances: fielding::total_chances(putouts, assists, errors),
            errors,
            pct: fielding::fielding_percentage(putouts, assists, errors),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sample::sample_data;

    fn test_state() -> AppState {
        AppState::new(Config::default(), sample_data())
    }

    fn valid_form() -> NewPlayer {
        NewPlayer {
            jersey: "55".into(),
            first_name: "Omar".into(),
            last_name: "Reyes".into(),
            position: "RF".into(),
            year: "Freshman".into(),
            bats: "R".into(),
            throws: "R".into(),
            status: "Active".into(),
        }
    }

    #[test]
    fn search_empty_query_returns_everyone() {
        let state = test_state();
        assert_eq!(state.search_players("").len(), state.players.len());
    }

    #[test]
    fn search_matches_name_position_and_jersey() {
        let state = test_state();
        assert_eq!(state.search_players("webb").len(), 1);
        let pitchers = state.search_players("p");
        assert!(pitchers.iter().all(|p| {
            p.position.abbrev().to_lowercase().contains('p')
                || p.full_name().to_lowercase().contains('p')
        }));
        assert_eq!(state.search_players("23").len(), 1);
        assert!(state.search_players("zzz").is_empty());
    }

    #[test]
    fn add_player_inserts_at_front() {
        let mut state = test_state();
        state.add_player(valid_form()).unwrap();
        assert_eq!(state.players[0].jersey, 55);
        assert_eq!(state.players[0].full_name(), "Omar Reyes");
    }

    #[test]
    fn add_player_rejects_empty_required_field() {
        let mut state = test_state();
        let mut form = valid_form();
        form.last_name = "   ".into();
        let err = state.add_player(form).unwrap_err();
        assert!(matches!(err, AppError::MissingField("last_name")));
    }

    #[test]
    fn add_player_rejects_duplicate_jersey() {
        let mut state = test_state();
        let mut form = valid_form();
        form.jersey = "12".into(); // Webb
        let err = state.add_player(form).unwrap_err();
        assert!(matches!(err, AppError::DuplicateJersey(12)));
    }

    #[test]
    fn add_player_rejects_bad_position() {
        let mut state = test_state();
        let mut form = valid_form();
        form.position = "QB".into();
        let err = state.add_player(form).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidField { field: "position", .. }
        ));
    }

    #[test]
    fn remove_player_by_jersey() {
        let mut state = test_state();
        let before = state.players.len();
        assert!(state.remove_player(18));
        assert_eq!(state.players.len(), before - 1);
        assert!(!state.remove_player(18));
    }

    #[test]
    fn batting_report_formats_rate_stats() {
        let state = test_state();
        let report = state.batting_report();
        let webb = report.iter().find(|r| r.name == "Marcus Webb").unwrap();
        assert_eq!(webb.hits, 54);
        assert_eq!(webb.avg, ".321");
        assert_eq!(webb.obp, ".402");
        assert_eq!(webb.slg, "0.560");
    }

    #[test]
    fn pitching_report_formats_rate_stats() {
        let state = test_state();
        let report = state.pitching_report();
        let thompson = report.iter().find(|r| r.name == "Jake Thompson").unwrap();
        assert_eq!(thompson.innings, "45.1");
        assert_eq!(thompson.era, "3.38");
        assert_eq!(thompson.whip, "1.21");
    }

    #[test]
    fn fielding_report_formats_percentage() {
        let state = test_state();
        let report = state.fielding_report();
        let cano = report.iter().find(|r| r.name == "Luis Cano").unwrap();
        assert_eq!(cano.errors, 0);
        assert_eq!(cano.pct, "1.000");
    }

    #[test]
    fn team_summaries_recompute_over_aggregates() {
        let state = test_state();

        let batting = state.team_batting_summary();
        assert_eq!(batting.players, 5);
        let at_bats: u32 = state.batting.iter().map(|l| l.at_bats).sum();
        assert_eq!(batting.at_bats, at_bats);
        assert_eq!(
            batting.avg,
            crate::stats::batting::batting_average(batting.hits, batting.at_bats)
        );

        let pitching = state.team_pitching_summary();
        assert_eq!(pitching.players, 2);
        assert_eq!(pitching.earned_runs, 29);

        let fielding = state.team_fielding_summary();
        assert_eq!(fielding.players, 3);
        assert_eq!(fielding.errors, 9);
    }

    #[test]
    fn summaries_on_empty_state_use_placeholders() {
        let state = AppState::new(
            Config::default(),
            AllData {
                players: vec![],
                batting: vec![],
                pitching: vec![],
                fielding: vec![],
            },
        );
        assert_eq!(state.team_batting_summary().avg, ".000");
        assert_eq!(state.team_batting_summary().slg, ".000");
        assert_eq!(state.team_pitching_summary().era, "0.00");
        assert_eq!(state.team_pitching_summary().whip, "0.00");
        assert_eq!(state.team_fielding_summary().pct, ".000");
    }
}
