// Batting rate stats: batting average, on-base percentage, slugging.

use crate::stats::format::{thousandths, thousandths_stripped};
use crate::stats::rate::Rate;

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

/// Total bases: singles count 1, doubles 2, triples 3, home runs 4.
pub fn total_bases(singles: u32, doubles: u32, triples: u32, home_runs: u32) -> u32 {
    singles + 2 * doubles + 3 * triples + 4 * home_runs
}

/// Batting average as a raw rate: hits / at-bats.
pub fn batting_average_rate(hits: u32, at_bats: u32) -> Rate {
    Rate::from_ratio(hits as f64, at_bats as f64)
}

/// On-base percentage as a raw rate:
/// (hits + walks + HBP) / (at-bats + walks + HBP + sacrifice flies).
pub fn on_base_rate(
    hits: u32,
    walks: u32,
    hit_by_pitch: u32,
    at_bats: u32,
    sacrifice_flies: u32,
) -> Rate {
    let reached = hits + walks + hit_by_pitch;
    let opportunities = at_bats + walks + hit_by_pitch + sacrifice_flies;
    Rate::from_ratio(reached as f64, opportunities as f64)
}

/// Slugging percentage as a raw rate: total bases / at-bats.
pub fn slugging_rate(
    singles: u32,
    doubles: u32,
    triples: u32,
    home_runs: u32,
    at_bats: u32,
) -> Rate {
    Rate::from_ratio(
        total_bases(singles, doubles, triples, home_runs) as f64,
        at_bats as f64,
    )
}

// ---------------------------------------------------------------------------
// Formatted operations
// ---------------------------------------------------------------------------

/// Batting average formatted for the scorebook: ".321", or ".000" with no
/// at-bats.
pub fn batting_average(hits: u32, at_bats: u32) -> String {
    thousandths_stripped(batting_average_rate(hits, at_bats))
}

/// On-base percentage formatted for the scorebook: ".402", or ".000" when
/// the player has no plate-appearance denominator.
pub fn on_base_percentage(
    hits: u32,
    walks: u32,
    hit_by_pitch: u32,
    at_bats: u32,
    sacrifice_flies: u32,
) -> String {
    thousandths_stripped(on_base_rate(
        hits,
        walks,
        hit_by_pitch,
        at_bats,
        sacrifice_flies,
    ))
}

/// Slugging percentage formatted for the scorebook. Unlike AVG and OBP the
/// leading digit is kept ("0.571"); the no-at-bats placeholder is still
/// ".000".
pub fn slugging_percentage(
    singles: u32,
    doubles: u32,
    triples: u32,
    home_runs: u32,
    at_bats: u32,
) -> String {
    thousandths(slugging_rate(singles, doubles, triples, home_runs, at_bats))
}

// ---------------------------------------------------------------------------
// Batting line
// ---------------------------------------------------------------------------

/// A season batting line of raw counting stats for one player.
///
/// Hits are derived from the hit-type breakdown rather than stored, so the
/// line cannot carry an inconsistent H column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattingLine {
    pub name: String,
    pub games: u32,
    pub at_bats: u32,
    pub runs: u32,
    pub singles: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub runs_batted_in: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub sacrifice_flies: u32,
    pub stolen_bases: u32,
}

impl BattingLine {
    /// Total hits: singles + doubles + triples + home runs.
    pub fn hits(&self) -> u32 {
        self.singles + self.doubles + self.triples + self.home_runs
    }

    pub fn total_bases(&self) -> u32 {
        total_bases(self.singles, self.doubles, self.triples, self.home_runs)
    }

    pub fn average(&self) -> String {
        batting_average(self.hits(), self.at_bats)
    }

    pub fn on_base(&self) -> String {
        on_base_percentage(
            self.hits(),
            self.walks,
            self.hit_by_pitch,
            self.at_bats,
            self.sacrifice_flies,
        )
    }

    pub fn slugging(&self) -> String {
        slugging_percentage(
            self.singles,
            self.doubles,
            self.triples,
            self.home_runs,
            self.at_bats,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_line() -> BattingLine {
        BattingLine {
            name: "Sample Hitter".into(),
            games: 42,
            at_bats: 168,
            runs: 30,
            singles: 34,
            doubles: 12,
            triples: 2,
            home_runs: 8,
            runs_batted_in: 38,
            walks: 22,
            hit_by_pitch: 0,
            sacrifice_flies: 0,
            stolen_bases: 5,
        }
    }

    #[test]
    fn batting_average_sample_fixture() {
        // 54 / 168 = .3214... -> .321
        assert_eq!(batting_average(54, 168), ".321");
    }

    #[test]
    fn batting_average_no_at_bats() {
        assert_eq!(batting_average(0, 0), ".000");
        assert_eq!(batting_average(10, 0), ".000");
    }

    #[test]
    fn on_base_percentage_formula() {
        // (54 + 22 + 0) / (168 + 22 + 0 + 0) = 76 / 190 = .400
        assert_eq!(on_base_percentage(54, 22, 0, 168, 0), ".400");
    }

    #[test]
    fn on_base_percentage_counts_hbp_and_sf() {
        // (50 + 20 + 5) / (180 + 20 + 5 + 5) = 75 / 210 = .3571 -> .357
        assert_eq!(on_base_percentage(50, 20, 5, 180, 5), ".357");
    }

    #[test]
    fn on_base_percentage_zero_denominator() {
        assert_eq!(on_base_percentage(0, 0, 0, 0, 0), ".000");
    }

    #[test]
    fn slugging_percentage_keeps_leading_digit() {
        // TB = 34 + 24 + 6 + 32 = 96; 96 / 168 = .5714 -> "0.571"
        assert_eq!(slugging_percentage(34, 12, 2, 8, 168), "0.571");
    }

    #[test]
    fn slugging_percentage_above_one() {
        // 5 HR in 10 AB: 20 / 10 = 2.000
        assert_eq!(slugging_percentage(0, 0, 0, 5, 10), "2.000");
    }

    #[test]
    fn slugging_percentage_no_at_bats_placeholder() {
        assert_eq!(slugging_percentage(3, 2, 1, 1, 0), ".000");
    }

    #[test]
    fn total_bases_weighting() {
        assert_eq!(total_bases(1, 1, 1, 1), 10);
        assert_eq!(total_bases(0, 0, 0, 0), 0);
    }

    #[test]
    fn line_hits_and_rates_agree_with_free_functions() {
        let line = sample_line();
        assert_eq!(line.hits(), 56);
        assert_eq!(line.total_bases(), 96);
        assert_eq!(
            line.average(),
            batting_average(line.hits(), line.at_bats)
        );
        assert_eq!(line.slugging(), "0.571");
    }

    #[test]
    fn average_is_monotone_in_hits() {
        // More hits with the same at-bats never lowers the average.
        let at_bats = 150;
        let mut previous = batting_average_rate(0, at_bats).value().unwrap();
        for hits in 1..=at_bats {
            let current = batting_average_rate(hits, at_bats).value().unwrap();
            assert!(current >= previous, "average decreased at {hits} hits");
            previous = current;
        }
    }

    #[test]
    fn formatting_is_deterministic() {
        let a = batting_average(54, 168);
        let b = batting_average(54, 168);
        assert_eq!(a, b);
    }
}
