// Built-in sample data, shown until real data files are supplied.

use crate::data::AllData;
use crate::roster::{Handedness, Player, PlayerStatus, Position};
use crate::stats::batting::BattingLine;
use crate::stats::fielding::FieldingLine;
use crate::stats::pitching::{innings_from_box_score, PitchingLine};

fn player(
    jersey: u32,
    first: &str,
    last: &str,
    position: Position,
    year: &str,
    bats: Handedness,
    throws: Handedness,
    status: PlayerStatus,
) -> Player {
    Player {
        jersey,
        first_name: first.into(),
        last_name: last.into(),
        position,
        year: year.into(),
        bats,
        throws,
        status,
    }
}

/// The demo roster and stat lines.
pub fn sample_data() -> AllData {
    use Handedness::{Left, Right, Switch};
    use PlayerStatus::{Active, Inactive, Injured};

    let players = vec![
        player(12, "Marcus", "Webb", Position::ShortStop, "Junior", Right, Right, Active),
        player(7, "Danny", "Ortiz", Position::Catcher, "Senior", Switch, Right, Active),
        player(23, "Jake", "Thompson", Position::Pitcher, "Sophomore", Left, Left, Active),
        player(3, "Luis", "Cano", Position::SecondBase, "Sophomore", Left, Right, Active),
        player(18, "Tyler", "Brooks", Position::CenterField, "Freshman", Right, Right, Injured),
        player(31, "Evan", "Price", Position::Pitcher, "Junior", Right, Right, Active),
        player(44, "Chris", "Delgado", Position::FirstBase, "Senior", Left, Left, Inactive),
    ];

    let batting = vec![
        // 54 hits in 168 AB: renders as .321 / .402 / 0.560.
        BattingLine {
            name: "Marcus Webb".into(),
            games: 42,
            at_bats: 168,
            runs: 30,
            singles: 32,
            doubles: 12,
            triples: 2,
            home_runs: 8,
            runs_batted_in: 38,
            walks: 22,
            hit_by_pitch: 4,
            sacrifice_flies: 5,
            stolen_bases: 5,
        },
        BattingLine {
            name: "Danny Ortiz".into(),
            games: 40,
            at_bats: 151,
            runs: 22,
            singles: 28,
            doubles: 9,
            triples: 0,
            home_runs: 6,
            runs_batted_in: 31,
            walks: 17,
            hit_by_pitch: 2,
            sacrifice_flies: 3,
            stolen_bases: 1,
        },
        BattingLine {
            name: "Luis Cano".into(),
            games: 41,
            at_bats: 160,
            runs: 27,
            singles: 36,
            doubles: 7,
            triples: 3,
            home_runs: 1,
            runs_batted_in: 18,
            walks: 14,
            hit_by_pitch: 1,
            sacrifice_flies: 2,
            stolen_bases: 12,
        },
        BattingLine {
            name: "Tyler Brooks".into(),
            games: 28,
            at_bats: 97,
            runs: 16,
            singles: 19,
            doubles: 4,
            triples: 2,
            home_runs: 2,
            runs_batted_in: 12,
            walks: 9,
            hit_by_pitch: 0,
            sacrifice_flies: 1,
            stolen_bases: 8,
        },
        BattingLine {
            name: "Chris Delgado".into(),
            games: 35,
            at_bats: 129,
            runs: 19,
            singles: 22,
            doubles: 8,
            triples: 0,
            home_runs: 7,
            runs_batted_in: 29,
            walks: 20,
            hit_by_pitch: 1,
            sacrifice_flies: 2,
            stolen_bases: 0,
        },
    ];

    let pitching = vec![
        PitchingLine {
            name: "Jake Thompson".into(),
            games: 14,
            games_started: 14,
            innings_pitched: innings_from_box_score(45.1),
            wins: 6,
            losses: 2,
            saves: 0,
            strikeouts: 52,
            walks: 15,
            hits_allowed: 40,
            earned_runs: 17,
        },
        PitchingLine {
            name: "Evan Price".into(),
            games: 18,
            games_started: 5,
            innings_pitched: innings_from_box_score(38.2),
            wins: 3,
            losses: 1,
            saves: 4,
            strikeouts: 44,
            walks: 12,
            hits_allowed: 33,
            earned_runs: 12,
        },
    ];

    let fielding = vec![
        FieldingLine {
            name: "Marcus Webb".into(),
            games: 42,
            putouts: 88,
            assists: 102,
            errors: 6,
            double_plays: 21,
        },
        FieldingLine {
            name: "Danny Ortiz".into(),
            games: 40,
            putouts: 270,
            assists: 32,
            errors: 3,
            double_plays: 2,
        },
        FieldingLine {
            name: "Luis Cano".into(),
            games: 41,
            putouts: 74,
            assists: 96,
            errors: 0,
            double_plays: 18,
        },
    ];

    AllData {
        players,
        batting,
        pitching,
        fielding,
    }
}
