//! The per-move calculation loop.

use crate::core::{build_segment, Move, Position};
use crate::coverage::{resolver, CoverageIndex};

/// Number of distinct cells occupied while executing `moves` from `start`.
///
/// The starting cell counts as visited immediately, so the result is at
/// least 1. Each move runs the same strict sequence: build the segment,
/// resolve its overlap against the index (which does not yet contain it),
/// credit the newly covered cells, insert the segment, advance the
/// position.
pub fn unique_visited_cells(start: Position, moves: &[Move]) -> i64 {
    let mut index = CoverageIndex::seeded(start);
    let mut position = start;
    let mut visited: i64 = 1;

    for mv in moves {
        let (segment, next) = build_segment(position, *mv);
        if let Some(segment) = segment {
            let overlap = resolver::resolve(&segment, &index);
            visited += segment.cells() - overlap;
            index.insert(&segment);
        }
        position = next;
    }
    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_no_moves_counts_the_start_cell() {
        assert_eq!(unique_visited_cells(Position::new(7, -7), &[]), 1);
    }

    #[test]
    fn test_zero_step_moves_change_nothing() {
        let moves = [
            Move::new(Direction::East, 0),
            Move::new(Direction::North, 0),
        ];
        assert_eq!(unique_visited_cells(Position::new(0, 0), &moves), 1);
    }

    #[test]
    fn test_square_loop_returns_to_start() {
        let side = 4;
        let moves = [
            Move::new(Direction::North, side),
            Move::new(Direction::East, side),
            Move::new(Direction::South, side),
            Move::new(Direction::West, side),
        ];
        // the final westward leg ends on the already-counted start cell
        assert_eq!(
            unique_visited_cells(Position::new(0, 0), &moves),
            4 * side as i64
        );
    }

    #[test]
    fn test_start_position_does_not_affect_count() {
        let moves = [
            Move::new(Direction::East, 9),
            Move::new(Direction::South, 3),
            Move::new(Direction::West, 5),
        ];
        let at_origin = unique_visited_cells(Position::new(0, 0), &moves);
        let far_away = unique_visited_cells(Position::new(-40_000, 77_777), &moves);
        assert_eq!(at_origin, far_away);
    }
}
