//! # Marjani-Path: Path Coverage Calculator
//!
//! Computes how many distinct grid cells a cleaning robot occupies while
//! executing an ordered sequence of axis-aligned moves. Moves can be
//! arbitrarily long (100,000+ steps), so the calculator never enumerates
//! individual cells: every move becomes a line segment, and previously
//! visited ground is subtracted with 1D interval arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use marjani_path::{unique_visited_cells, Direction, Move, Position};
//!
//! let start = Position::new(0, 0);
//! let moves = [
//!     Move::new(Direction::East, 2),
//!     Move::new(Direction::North, 1),
//! ];
//! // start cell + 2 eastward cells + 1 northward cell
//! assert_eq!(unique_visited_cells(start, &moves), 4);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental value types (positions, spans, segments, move
//!   commands)
//! - [`coverage`]: The coverage index, the overlap resolver, and the
//!   per-move calculation loop
//! - [`error`]: Input validation errors for the wire boundary
//!
//! Per move the calculator runs a strict four-step sequence: build the
//! segment, resolve its overlap against everything traversed so far,
//! accumulate the newly covered cells, then append the segment to the
//! index. Cost per move is proportional to the number of prior moves, not
//! to the step count.

pub mod core;
pub mod coverage;
pub mod error;

pub use self::core::{build_segment, Direction, Move, Orientation, Position, Segment, Span};
pub use self::coverage::{unique_visited_cells, CoverageIndex};
pub use self::error::{CoverageError, Result};
