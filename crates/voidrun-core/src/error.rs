//! Error types shared by the simulation crates.

use thiserror::Error;

use crate::types::Direction;

/// A ship move that would leave the grid. Recoverable: the move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot move {direction}. Out of bounds!")]
pub struct BoundaryError {
    pub direction: Direction,
}

/// A player token that does not map to any command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid input. Use W, A, S, D, F, or P.")]
    Invalid(String),
}

/// Achievement wiring mistakes. These indicate a programming error and are
/// never swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AchievementError {
    #[error("achievement name must be non-empty")]
    EmptyName,
    #[error("achievement description must be non-empty")]
    EmptyDescription,
    #[error("achievement '{0}' is already registered")]
    Duplicate(String),
    #[error("no achievement registered under '{0}'")]
    Unknown(String),
}
