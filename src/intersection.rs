//! Crossing detection between axis-aligned path segments.
//!
//! Paths only ever move one cell horizontally or vertically at a time, so every segment is horizontal or vertical.
//! Two horizontal (or two vertical) segments never count as crossing; a horizontal and a vertical segment cross when
//! each one's fixed coordinate falls within the other's span, bounds included.
//!
//! Segments touching the start or end of their path are exempt. That is what lets several paths meet at one mixer or
//! receiver without being flagged, while a path that wanders across another's track still is.

use itertools::Itertools;

use crate::location::Location;
use crate::path::Path;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Orientation {
    Horizontal,
    Vertical,
    // zero length, or diagonal; neither can cross anything
    Degenerate,
}

/// A straight piece of path between two cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Segment {
    /// Where the segment starts.
    pub from: Location,
    /// Where the segment ends.
    pub to: Location,
}

impl Segment {
    /// The segment from `from` to `to`.
    pub fn new(from: Location, to: Location) -> Self {
        Self { from, to }
    }

    fn orientation(&self) -> Orientation {
        match (self.from.0 == self.to.0, self.from.1 == self.to.1) {
            (false, true) => Orientation::Horizontal,
            (true, false) => Orientation::Vertical,
            _ => Orientation::Degenerate,
        }
    }

    fn x_span(&self) -> (usize, usize) {
        (self.from.0.min(self.to.0), self.from.0.max(self.to.0))
    }

    fn y_span(&self) -> (usize, usize) {
        (self.from.1.min(self.to.1), self.from.1.max(self.to.1))
    }

    /// Whether this segment touches the start or end of the path it belongs to.
    fn is_anchored(&self, start: Location, end: Location) -> bool {
        self.from == start || self.to == end
    }
}

fn segments_of(points: &[Location]) -> Vec<Segment> {
    points.iter()
        .tuple_windows()
        .map(|(from, to)| Segment::new(*from, *to))
        .collect_vec()
}

/// Whether a horizontal segment and a vertical one cross, touching endpoints included.
pub fn segments_intersect(a: &Segment, b: &Segment) -> bool {
    let (horizontal, vertical) = match (a.orientation(), b.orientation()) {
        (Orientation::Horizontal, Orientation::Vertical) => (a, b),
        (Orientation::Vertical, Orientation::Horizontal) => (b, a),
        _ => return false,
    };

    let (min_x, max_x) = horizontal.x_span();
    let (min_y, max_y) = vertical.y_span();
    let x = vertical.from.0;
    let y = horizontal.from.1;

    (min_x..=max_x).contains(&x) && (min_y..=max_y).contains(&y)
}

/// Whether the path through `candidate` crosses any of `committed`.
///
/// Segments touching either path's own start or end are exempt.
pub fn path_intersects_any(candidate: &[Location], committed: &[Path]) -> bool {
    let (Some(start), Some(end)) = (candidate.first(), candidate.last()) else {
        return false;
    };

    let own = segments_of(candidate)
        .into_iter()
        .filter(|segment| !segment.is_anchored(*start, *end))
        .collect_vec();

    committed.iter().any(|path| {
        let (other_start, other_end) = (path.first(), path.last());
        segments_of(path.points())
            .iter()
            .filter(|segment| !segment.is_anchored(other_start, other_end))
            .cartesian_product(own.iter())
            .any(|(theirs, ours)| segments_intersect(ours, theirs))
    })
}

/// Whether the path through `candidate` crosses its own track.
///
/// Adjacent segments share a point by construction and are never compared; segments touching the path's start or end are exempt.
pub fn has_self_intersection(candidate: &[Location]) -> bool {
    if candidate.len() <= 2 {
        return false;
    }
    let (start, end) = (candidate[0], candidate[candidate.len() - 1]);

    segments_of(candidate)
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter(|((i, _), (j, _))| j - i >= 2)
        .filter(|((_, a), (_, b))| !a.is_anchored(start, end) && !b.is_anchored(start, end))
        .any(|((_, a), (_, b))| segments_intersect(a, b))
}

/// Whether stepping from `from` to `to` would cross a committed path's interior or an earlier part of `in_progress`.
///
/// Steps leaving a source or arriving at a destination (mixer or receiver) are never considered crossing.
/// The most recent segment of `in_progress` is skipped since the step continues from it.
pub fn step_would_cross(
    from: Location,
    to: Location,
    committed: &[Path],
    in_progress: &[Location],
    leaves_source: bool,
    reaches_destination: bool,
) -> bool {
    if leaves_source || reaches_destination {
        return false;
    }
    let step = Segment::new(from, to);

    let crosses_committed = committed.iter().any(|path| {
        let (start, end) = (path.first(), path.last());
        segments_of(path.points())
            .iter()
            .filter(|segment| !segment.is_anchored(start, end))
            .any(|segment| segments_intersect(&step, segment))
    });

    let earlier = &in_progress[..in_progress.len().saturating_sub(1)];
    crosses_committed || segments_of(earlier).iter().any(|segment| segments_intersect(&step, segment))
}
