// Player representation: the entity behind the roster table and the
// add-player form.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Defensive positions used on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    ShortStop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
}

impl Position {
    /// Parse a position abbreviation ("1B", "ss", "DH") into a Position.
    pub fn from_abbrev(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "P" => Some(Position::Pitcher),
            "C" => Some(Position::Catcher),
            "1B" => Some(Position::FirstBase),
            "2B" => Some(Position::SecondBase),
            "3B" => Some(Position::ThirdBase),
            "SS" => Some(Position::ShortStop),
            "LF" => Some(Position::LeftField),
            "CF" => Some(Position::CenterField),
            "RF" => Some(Position::RightField),
            "DH" => Some(Position::DesignatedHitter),
            _ => None,
        }
    }

    /// The display abbreviation for this position.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
        }
    }

    /// Whether the position is a pitching role.
    pub fn is_pitcher(&self) -> bool {
        matches!(self, Position::Pitcher)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

// ---------------------------------------------------------------------------
// Handedness
// ---------------------------------------------------------------------------

/// Batting or throwing hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
    Switch,
}

impl Handedness {
    pub fn from_abbrev(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "L" => Some(Handedness::Left),
            "R" => Some(Handedness::Right),
            "S" | "B" => Some(Handedness::Switch),
            _ => None,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Handedness::Left => "L",
            Handedness::Right => "R",
            Handedness::Switch => "S",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Roster availability, matching the status badge on the player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerStatus {
    Active,
    Injured,
    Inactive,
}

impl PlayerStatus {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(PlayerStatus::Active),
            "injured" => Some(PlayerStatus::Injured),
            "inactive" => Some(PlayerStatus::Inactive),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerStatus::Active => "Active",
            PlayerStatus::Injured => "Injured",
            PlayerStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub jersey: u32,
    pub first_name: String,
    pub last_name: String,
    pub position: Position,
    /// Class year or roster year label ("Freshman", "Senior", ...).
    pub year: String,
    pub bats: Handedness,
    pub throws: Handedness,
    pub status: PlayerStatus,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against name, position abbreviation,
    /// or jersey number, the roster search box semantics. An empty query
    /// matches every player.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.full_name().to_lowercase().contains(&query)
            || self.position.abbrev().to_lowercase().contains(&query)
            || self.jersey.to_string().contains(&query)
    }
}

// ---------------------------------------------------------------------------
// NewPlayer (form payload)
// ---------------------------------------------------------------------------

/// Raw add-player form fields, all strings as captured from input widgets.
/// Validated and parsed by `AppState::add_player`.
#[derive(Debug, Clone, Default)]
pub struct NewPlayer {
    pub jersey: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub year: String,
    pub bats: String,
    pub throws: String,
    pub status: String,
}
