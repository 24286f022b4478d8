//! Append-only store of traversed segments.

use crate::core::{Orientation, Position, Segment, Span};
use std::collections::HashMap;

/// Every span the robot has traversed so far, bucketed by orientation and
/// fixed coordinate: horizontal spans by row, vertical spans by column.
///
/// Entries are append-only and spans within a bucket may overlap each
/// other; deduplication happens at query time in the overlap resolver,
/// never at insert time. The index lives exactly as long as one
/// computation.
#[derive(Debug, Clone, Default)]
pub struct CoverageIndex {
    /// Horizontal spans, keyed by row (y)
    rows: HashMap<i64, Vec<Span>>,
    /// Vertical spans, keyed by column (x)
    cols: HashMap<i64, Vec<Span>>,
}

impl CoverageIndex {
    /// Index holding only the launch cell, stored as a single-cell span on
    /// both axes so the starting square counts as visited.
    pub fn seeded(start: Position) -> Self {
        let mut index = Self::default();
        index.rows.insert(start.y, vec![Span::point(start.x)]);
        index.cols.insert(start.x, vec![Span::point(start.y)]);
        index
    }

    /// Spans stored for `orientation` at the given fixed coordinate.
    pub fn spans_on(&self, orientation: Orientation, coordinate: i64) -> &[Span] {
        self.axis(orientation)
            .get(&coordinate)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Stored spans of the *other* orientation whose fixed coordinate lies
    /// inside `range`, as `(coordinate, span)` pairs.
    ///
    /// Scans the perpendicular buckets in full; the bucket count is
    /// bounded by the number of prior moves, not by step magnitudes.
    pub fn perpendicular(
        &self,
        orientation: Orientation,
        range: Span,
    ) -> impl Iterator<Item = (i64, Span)> + '_ {
        let buckets = match orientation {
            Orientation::Horizontal => &self.cols,
            Orientation::Vertical => &self.rows,
        };
        buckets
            .iter()
            .filter(move |(coordinate, _)| range.contains(**coordinate))
            .flat_map(|(coordinate, spans)| spans.iter().map(move |span| (*coordinate, *span)))
    }

    /// Append a segment's span to its bucket. Never merges or deduplicates.
    pub fn insert(&mut self, segment: &Segment) {
        match segment.orientation {
            Orientation::Horizontal => &mut self.rows,
            Orientation::Vertical => &mut self.cols,
        }
        .entry(segment.coordinate)
        .or_default()
        .push(segment.span);
    }

    fn axis(&self, orientation: Orientation) -> &HashMap<i64, Vec<Span>> {
        match orientation {
            Orientation::Horizontal => &self.rows,
            Orientation::Vertical => &self.cols,
        }
    }
}
