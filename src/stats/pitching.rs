// Pitching rate stats: earned run average and WHIP.
//
// Innings pitched are carried as true decimal thirds (45.333... for 45⅓).
// Box-score notation (45.1, 45.2) is converted at the data boundary with
// `innings_from_box_score` and rendered back with `format_innings`.

use crate::stats::format::hundredths;
use crate::stats::rate::Rate;

// ---------------------------------------------------------------------------
// Innings notation
// ---------------------------------------------------------------------------

/// Convert box-score innings notation to true thirds: 45.1 -> 45⅓,
/// 45.2 -> 45⅔. Any other fractional part passes through unchanged, so
/// already-converted values are a fixed point.
pub fn innings_from_box_score(ip: f64) -> f64 {
    if !ip.is_finite() || ip < 0.0 {
        return ip;
    }
    let whole = ip.trunc();
    let tenths = ((ip - whole) * 10.0).round() as u32;
    match tenths {
        1 => whole + 1.0 / 3.0,
        2 => whole + 2.0 / 3.0,
        _ => ip,
    }
}

/// Render innings in box-score notation: 45⅓ -> "45.1", whole innings as
/// "45.0".
pub fn format_innings(ip: f64) -> String {
    if !ip.is_finite() || ip < 0.0 {
        return "0.0".to_string();
    }
    let mut whole = ip.trunc() as u64;
    let mut thirds = ((ip - ip.trunc()) * 3.0).round() as u64;
    if thirds >= 3 {
        whole += 1;
        thirds = 0;
    }
    format!("{whole}.{thirds}")
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// ERA as a raw rate: 9 * earned runs / innings pitched.
pub fn earned_run_average_rate(earned_runs: u32, innings_pitched: f64) -> Rate {
    Rate::from_ratio(9.0 * earned_runs as f64, innings_pitched)
}

/// WHIP as a raw rate: (walks + hits allowed) / innings pitched.
pub fn whip_rate(walks: u32, hits_allowed: u32, innings_pitched: f64) -> Rate {
    Rate::from_ratio((walks + hits_allowed) as f64, innings_pitched)
}

// ---------------------------------------------------------------------------
// Formatted operations
// ---------------------------------------------------------------------------

/// ERA formatted for the scorebook: "3.42", or "0.00" with no innings.
pub fn earned_run_average(earned_runs: u32, innings_pitched: f64) -> String {
    hundredths(earned_run_average_rate(earned_runs, innings_pitched))
}

/// WHIP formatted for the scorebook: "1.18", or "0.00" with no innings.
pub fn whip(walks: u32, hits_allowed: u32, innings_pitched: f64) -> String {
    hundredths(whip_rate(walks, hits_allowed, innings_pitched))
}

// ---------------------------------------------------------------------------
// Pitching line
// ---------------------------------------------------------------------------

/// A season pitching line of raw counting stats for one player.
/// `innings_pitched` is stored as true thirds.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchingLine {
    pub name: String,
    pub games: u32,
    pub games_started: u32,
    pub innings_pitched: f64,
    pub wins: u32,
    pub losses: u32,
    pub saves: u32,
    pub strikeouts: u32,
    pub walks: u32,
    pub hits_allowed: u32,
    pub earned_runs: u32,
}

impl PitchingLine {
    pub fn era(&self) -> String {
        earned_run_average(self.earned_runs, self.innings_pitched)
    }

    pub fn whip(&self) -> String {
        whip(self.walks, self.hits_allowed, self.innings_pitched)
    }

    /// Innings in box-score notation for display ("45.1").
    pub fn innings_display(&self) -> String {
        format_innings(self.innings_pitched)
    }
}
