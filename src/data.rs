// Roster and stat-line loading from CSV sample-data files.
//
// Rows that fail to parse are logged and skipped rather than failing the
// whole load; the files are hand-maintained sample data, not a trusted feed.

use crate::config::{Config, DataPaths};
use crate::roster::{Handedness, Player, PlayerStatus, Position};
use crate::stats::batting::BattingLine;
use crate::stats::fielding::FieldingLine;
use crate::stats::pitching::{innings_from_box_score, PitchingLine};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// Assembled data set
// ---------------------------------------------------------------------------

/// Everything the application state needs, loaded and ready.
#[derive(Debug, Clone)]
pub struct AllData {
    pub players: Vec<Player>,
    pub batting: Vec<BattingLine>,
    pub pitching: Vec<PitchingLine>,
    pub fielding: Vec<FieldingLine>,
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

/// Roster CSV row. Extra columns are silently absorbed via `#[serde(flatten)]`.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawRosterRow {
    Jersey: u32,
    First: String,
    Last: String,
    Position: String,
    #[serde(default)]
    Year: String,
    Bats: String,
    Throws: String,
    #[serde(default = "default_status")]
    Status: String,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

fn default_status() -> String {
    "Active".to_string()
}

/// Batting CSV row. Hits arrive broken out by type; the H column, when
/// present, lands in `_extra` and is ignored.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawBattingRow {
    Name: String,
    #[serde(default)]
    G: u32,
    AB: u32,
    #[serde(default)]
    R: u32,
    #[serde(rename = "1B")]
    singles: u32,
    #[serde(rename = "2B")]
    doubles: u32,
    #[serde(rename = "3B")]
    triples: u32,
    HR: u32,
    #[serde(default)]
    RBI: u32,
    #[serde(default)]
    BB: u32,
    #[serde(default)]
    HBP: u32,
    #[serde(default)]
    SF: u32,
    #[serde(default)]
    SB: u32,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

/// Pitching CSV row. IP uses box-score notation (45.1 = 45⅓) and is
/// converted to true thirds on load.
#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawPitchingRow {
    Name: String,
    #[serde(default)]
    G: u32,
    #[serde(default)]
    GS: u32,
    IP: f64,
    #[serde(default)]
    W: u32,
    #[serde(default)]
    L: u32,
    #[serde(default)]
    SV: u32,
    #[serde(default)]
    SO: u32,
    BB: u32,
    H: u32,
    ER: u32,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code, non_snake_case)]
struct RawFieldingRow {
    Name: String,
    #[serde(default)]
    G: u32,
    PO: u32,
    A: u32,
    E: u32,
    #[serde(default)]
    DP: u32,
    #[serde(flatten)]
    _extra: HashMap<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

fn load_roster_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawRosterRow>() {
        match result {
            Ok(raw) => {
                let Some(position) = Position::from_abbrev(&raw.Position) else {
                    warn!(
                        "skipping player '{} {}': unknown position '{}'",
                        raw.First.trim(),
                        raw.Last.trim(),
                        raw.Position
                    );
                    continue;
                };
                let Some(bats) = Handedness::from_abbrev(&raw.Bats) else {
                    warn!("skipping player #{}: unknown bats '{}'", raw.Jersey, raw.Bats);
                    continue;
                };
                let Some(throws) = Handedness::from_abbrev(&raw.Throws) else {
                    warn!("skipping player #{}: unknown throws '{}'", raw.Jersey, raw.Throws);
                    continue;
                };
                let Some(status) = PlayerStatus::from_label(&raw.Status) else {
                    warn!("skipping player #{}: unknown status '{}'", raw.Jersey, raw.Status);
                    continue;
                };
                players.push(Player {
                    jersey: raw.Jersey,
                    first_name: raw.First.trim().to_string(),
                    last_name: raw.Last.trim().to_string(),
                    position,
                    year: raw.Year.trim().to_string(),
                    bats,
                    throws,
                    status,
                });
            }
            Err(e) => {
                warn!("skipping malformed roster row: {}", e);
            }
        }
    }
    Ok(players)
}

fn load_batting_from_reader<R: Read>(rdr: R) -> Result<Vec<BattingLine>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut lines = Vec::new();
    for result in reader.deserialize::<RawBattingRow>() {
        match result {
            Ok(raw) => {
                lines.push(BattingLine {
                    name: raw.Name.trim().to_string(),
                    games: raw.G,
                    at_bats: raw.AB,
                    runs: raw.R,
                    singles: raw.singles,
                    doubles: raw.doubles,
                    triples: raw.triples,
                    home_runs: raw.HR,
                    runs_batted_in: raw.RBI,
                    walks: raw.BB,
                    hit_by_pitch: raw.HBP,
                    sacrifice_flies: raw.SF,
                    stolen_bases: raw.SB,
                });
            }
            Err(e) => {
                warn!("skipping malformed batting row: {}", e);
            }
        }
    }
    Ok(lines)
}

fn load_pitching_from_reader<R: Read>(rdr: R) -> Result<Vec<PitchingLine>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut lines = Vec::new();
    for result in reader.deserialize::<RawPitchingRow>() {
        match result {
            Ok(raw) => {
                if !raw.IP.is_finite() || raw.IP < 0.0 {
                    warn!("skipping pitcher '{}': bad IP value", raw.Name.trim());
                    continue;
                }
                lines.push(PitchingLine {
                    name: raw.Name.trim().to_string(),
                    games: raw.G,
                    games_started: raw.GS,
                    innings_pitched: innings_from_box_score(raw.IP),
                    wins: raw.W,
                    losses: raw.L,
                    saves: raw.SV,
                    strikeouts: raw.SO,
                    walks: raw.BB,
                    hits_allowed: raw.H,
                    earned_runs: raw.ER,
                });
            }
            Err(e) => {
                warn!("skipping malformed pitching row: {}", e);
            }
        }
    }
    Ok(lines)
}

fn load_fielding_from_reader<R: Read>(rdr: R) -> Result<Vec<FieldingLine>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut lines = Vec::new();
    for result in reader.deserialize::<RawFieldingRow>() {
        match result {
            Ok(raw) => {
                lines.push(FieldingLine {
                    name: raw.Name.trim().to_string(),
                    games: raw.G,
                    putouts: raw.PO,
                    assists: raw.A,
                    errors: raw.E,
                    double_plays: raw.DP,
                });
            }
            Err(e) => {
                warn!("skipping malformed fielding row: {}", e);
            }
        }
    }
    Ok(lines)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

fn open(path: &Path) -> Result<std::fs::File, DataError> {
    std::fs::File::open(path).map_err(|e| DataError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

fn csv_err(path: &Path, e: csv::Error) -> DataError {
    DataError::Csv {
        path: path.display().to_string(),
        source: e,
    }
}

/// Load the roster from a CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<Player>, DataError> {
    load_roster_from_reader(open(path)?).map_err(|e| csv_err(path, e))
}

/// Load batting lines from a CSV file.
pub fn load_batting(path: &Path) -> Result<Vec<BattingLine>, DataError> {
    load_batting_from_reader(open(path)?).map_err(|e| csv_err(path, e))
}

/// Load pitching lines from a CSV file.
pub fn load_pitching(path: &Path) -> Result<Vec<PitchingLine>, DataError> {
    load_pitching_from_reader(open(path)?).map_err(|e| csv_err(path, e))
}

/// Load fielding lines from a CSV file.
pub fn load_fielding(path: &Path) -> Result<Vec<FieldingLine>, DataError> {
    load_fielding_from_reader(open(path)?).map_err(|e| csv_err(path, e))
}

/// Load everything using the paths from the config.
pub fn load_all(config: &Config) -> Result<AllData, DataError> {
    load_all_from_paths(&config.data_paths)
}

/// Load everything from explicit paths. Exposed for testing and flexibility.
pub fn load_all_from_paths(paths: &DataPaths) -> Result<AllData, DataError> {
    let players = load_roster(Path::new(&paths.roster))?;
    let batting = load_batting(Path::new(&paths.batting))?;
    let pitching = load_pitching(Path::new(&paths.pitching))?;
    let fielding = load_fielding(Path::new(&paths.fielding))?;

    if players.is_empty() {
        return Err(DataError::Validation(
            "roster CSV produced zero valid rows".into(),
        ));
    }

    Ok(AllData {
        players,
        batting,
        pitching,
        fielding,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
