// Roster domain: players, positions, handedness, status.

pub mod player;

pub use player::{Handedness, NewPlayer, Player, PlayerStatus, Position};
