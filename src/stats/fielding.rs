// Fielding rate stats: fielding percentage over total chances.

use crate::stats::format::thousandths_stripped;
use crate::stats::rate::Rate;

/// Total chances: putouts + assists + errors.
pub fn total_chances(putouts: u32, assists: u32, errors: u32) -> u32 {
    putouts + assists + errors
}

/// Fielding percentage as a raw rate: (putouts + assists) / total chances.
pub fn fielding_percentage_rate(putouts: u32, assists: u32, errors: u32) -> Rate {
    Rate::from_ratio(
        (putouts + assists) as f64,
        total_chances(putouts, assists, errors) as f64,
    )
}

/// Fielding percentage formatted for the scorebook: ".985", "1.000" for a
/// clean season, ".000" with no chances.
pub fn fielding_percentage(putouts: u32, assists: u32, errors: u32) -> String {
    thousandths_stripped(fielding_percentage_rate(putouts, assists, errors))
}

/// A season fielding line of raw counting stats for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldingLine {
    pub name: String,
    pub games: u32,
    pub putouts: u32,
    pub assists: u32,
    pub errors: u32,
    pub double_plays: u32,
}

impl FieldingLine {
    pub fn chances(&self) -> u32 {
        total_chances(self.putouts, self.assists, self.errors)
    }

    pub fn percentage(&self) -> String {
        fielding_percentage(self.putouts, self.assists, self.errors)
    }
}
