//! Axis-aligned segments traversed by single moves.

use super::{Direction, Move, Position, Span};

/// Axis of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Along the x axis, at a fixed row (y)
    Horizontal,
    /// Along the y axis, at a fixed column (x)
    Vertical,
}

/// All cells traversed by one move, excluding the cell the move started
/// from (that cell was covered by an earlier move or by the launch seed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Which axis the segment runs along
    pub orientation: Orientation,
    /// The fixed coordinate: row for horizontal segments, column for
    /// vertical ones
    pub coordinate: i64,
    /// Covered cells along the moving axis
    pub span: Span,
}

impl Segment {
    /// Horizontal segment on row `coordinate`.
    #[inline]
    pub fn horizontal(coordinate: i64, span: Span) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            coordinate,
            span,
        }
    }

    /// Vertical segment on column `coordinate`.
    #[inline]
    pub fn vertical(coordinate: i64, span: Span) -> Self {
        Self {
            orientation: Orientation::Vertical,
            coordinate,
            span,
        }
    }

    /// Number of cells the segment covers.
    #[inline]
    pub fn cells(&self) -> i64 {
        self.span.cells()
    }
}

/// Turn one move into the segment it traverses plus the position it ends
/// at.
///
/// A zero-step move traverses nothing: the segment is `None` and the
/// position is unchanged.
pub fn build_segment(from: Position, mv: Move) -> (Option<Segment>, Position) {
    let steps = mv.steps as i64;
    if steps == 0 {
        return (None, from);
    }
    match mv.direction {
        Direction::East => (
            Some(Segment::horizontal(
                from.y,
                Span::new(from.x + 1, from.x + steps),
            )),
            Position::new(from.x + steps, from.y),
        ),
        Direction::West => (
            Some(Segment::horizontal(
                from.y,
                Span::new(from.x - steps, from.x - 1),
            )),
            Position::new(from.x - steps, from.y),
        ),
        Direction::North => (
            Some(Segment::vertical(
                from.x,
                Span::new(from.y + 1, from.y + steps),
            )),
            Position::new(from.x, from.y + steps),
        ),
        Direction::South => (
            Some(Segment::vertical(
                from.x,
                Span::new(from.y - steps, from.y - 1),
            )),
            Position::new(from.x, from.y - steps),
        ),
    }
}
