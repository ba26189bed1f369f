//! Player commands sent from the input driver to the simulation.
//!
//! Input arrives as single tokens and is parsed case-insensitively.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::types::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Move the ship one cell (W/A/S/D).
    Move { direction: Direction },
    /// Fire a bullet from the ship's cell (F).
    Fire,
    /// Toggle between running and paused (P).
    TogglePause,
}

impl PlayerCommand {
    pub fn parse(token: &str) -> Result<Self, CommandError> {
        let command = match token.trim().to_ascii_uppercase().as_str() {
            "W" => PlayerCommand::Move {
                direction: Direction::Up,
            },
            "A" => PlayerCommand::Move {
                direction: Direction::Left,
            },
            "S" => PlayerCommand::Move {
                direction: Direction::Down,
            },
            "D" => PlayerCommand::Move {
                direction: Direction::Right,
            },
            "F" => PlayerCommand::Fire,
            "P" => PlayerCommand::TogglePause,
            _ => return Err(CommandError::Invalid(token.to_string())),
        };
        Ok(command)
    }
}

impl FromStr for PlayerCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
