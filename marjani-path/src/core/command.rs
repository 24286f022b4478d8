//! Move commands: a direction plus a step count.

use crate::error::{CoverageError, Result};
use std::fmt;
use std::str::FromStr;

/// Compass direction of one move.
///
/// East/West travel along the x axis, North/South along the y axis. The
/// enum is closed, so code past the wire boundary never sees an
/// unrecognized direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x
    East,
    /// -x
    West,
    /// +y
    North,
    /// -y
    South,
}

impl Direction {
    /// All four directions, for test and simulation loops.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Canonical text tag, as carried in request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East => "East",
            Direction::West => "West",
            Direction::North => "North",
            Direction::South => "South",
        }
    }
}

impl FromStr for Direction {
    type Err = CoverageError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "East" => Ok(Direction::East),
            "West" => Ok(Direction::West),
            "North" => Ok(Direction::North),
            "South" => Ok(Direction::South),
            other => Err(CoverageError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One move command: travel `steps` cells in `direction`.
///
/// A step count of zero is a valid no-op move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Travel direction
    pub direction: Direction,
    /// Number of unit steps, each covering one cell
    pub steps: u64,
}

impl Move {
    /// Create a move from already-validated parts.
    #[inline]
    pub const fn new(direction: Direction, steps: u64) -> Self {
        Self { direction, steps }
    }

    /// Build a move from untrusted wire values.
    ///
    /// Rejects unrecognized direction tags and negative step counts before
    /// any computation runs.
    pub fn parse(direction: &str, steps: i64) -> Result<Self> {
        let direction = direction.parse()?;
        if steps < 0 {
            return Err(CoverageError::InvalidStepCount(steps));
        }
        Ok(Self::new(direction, steps as u64))
    }
}
