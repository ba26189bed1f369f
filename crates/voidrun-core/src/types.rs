//! Fundamental grid and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{GRID_HEIGHT, GRID_WIDTH};

/// Integer cell on the play field. x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// One-cell step a ship can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Tick number supplied by the driver for the most recent advance.
    pub tick: u64,
    /// Number of ticks that actually ran gameplay (paused ticks excluded).
    pub ticks_run: u64,
    /// Whole seconds since the run started.
    pub elapsed_secs: u64,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether this cell lies on the play field.
    pub fn in_bounds(&self) -> bool {
        (0..GRID_WIDTH).contains(&self.x) && (0..GRID_HEIGHT).contains(&self.y)
    }

    /// The neighbouring cell in `direction`, which may be off the grid.
    pub fn step(&self, direction: Direction) -> GridPos {
        let (dx, dy) = direction.delta();
        GridPos::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Direction {
    /// Column/row offset of a single step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
