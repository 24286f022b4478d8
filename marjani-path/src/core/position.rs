//! Grid cell position.

use serde::{Deserialize, Serialize};

/// A grid cell, addressed by unbounded signed coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column index
    pub x: i64,
    /// Row index
    pub y: i64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}
