//! Overlap resolution: how much of a new segment is already-visited
//! ground?
//!
//! A naive check walks every cell of the move and tests membership against
//! everything visited before, which is hopeless for 100,000-step moves.
//! The resolver instead gathers 1D intervals: collinear intersections with
//! spans on the same row/column, plus single-cell crossings with
//! perpendicular spans, then counts their union with one sorted sweep.

use crate::core::{Segment, Span};
use crate::coverage::CoverageIndex;

/// Number of cells in `segment` that coincide with any already-visited
/// cell. The index must not yet contain `segment` itself.
pub fn resolve(segment: &Segment, index: &CoverageIndex) -> i64 {
    let mut intervals = collinear_overlaps(segment, index);
    intervals.extend(crossings(segment, index));
    covered_cells(segment.span, intervals)
}

/// Intersections with stored spans on the same row/column, clipped to the
/// new segment's span.
fn collinear_overlaps(segment: &Segment, index: &CoverageIndex) -> Vec<Span> {
    index
        .spans_on(segment.orientation, segment.coordinate)
        .iter()
        .filter_map(|stored| segment.span.intersect(stored))
        .collect()
}

/// Single-cell crossings with stored spans of the other orientation.
///
/// A stored perpendicular span crosses the new segment when its fixed
/// coordinate falls inside the new span and it covers the new segment's
/// fixed coordinate; the shared cell sits at the stored coordinate on the
/// moving axis.
fn crossings<'a>(
    segment: &'a Segment,
    index: &'a CoverageIndex,
) -> impl Iterator<Item = Span> + 'a {
    index
        .perpendicular(segment.orientation, segment.span)
        .filter(|(_, stored)| stored.contains(segment.coordinate))
        .map(|(coordinate, _)| Span::point(coordinate))
}

/// Count the cells of `span` covered by the union of `intervals`.
///
/// The gathered intervals routinely overlap each other (a retraced line
/// also crosses old perpendicular lines), so summing their lengths would
/// double-count. Sorting by start and sweeping a cursor over `span` counts
/// every covered cell exactly once.
fn covered_cells(span: Span, mut intervals: Vec<Span>) -> i64 {
    intervals.sort_unstable_by_key(|interval| interval.start);

    let mut covered = 0;
    let mut cursor = span.start;
    for interval in intervals {
        if interval.end < cursor {
            continue;
        }
        covered += interval.end.min(span.end) - interval.start.max(cursor) + 1;
        cursor = interval.end + 1;
    }
    covered
}
