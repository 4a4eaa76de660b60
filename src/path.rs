use itertools::Itertools;

use crate::color::Color;
use crate::grid::{GridSpec, Point};
use crate::location::Location;

/// A path being drawn: anchored at its start cell and only ever extended at the end.
///
/// Freeze it with [`DrawnPath::freeze`] once it is finished.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnPath {
    color: Color,
    points: Vec<Location>,
}

impl DrawnPath {
    /// Start a path of `color` at `start`. The start is the path's first point.
    pub fn new(start: Location, color: Color) -> Self {
        Self { color, points: vec![start] }
    }

    /// Append a cell. Legality of the step is up to the caller.
    pub fn push(&mut self, location: Location) {
        self.points.push(location);
    }

    /// Finish drawing, producing an immutable [`Path`].
    pub fn freeze(self) -> Path {
        Path { color: self.color, points: self.points }
    }

    /// The color this path carries.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Every cell visited, in order.
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// The cell the path started from.
    pub fn first(&self) -> Location {
        self.points[0]
    }

    /// The most recent cell.
    pub fn last(&self) -> Location {
        // never empty; the start is pushed on construction
        self.points[self.points.len() - 1]
    }

    /// Number of cells, start included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path visits `location`.
    pub fn contains(&self, location: Location) -> bool {
        self.points.contains(&location)
    }
}

/// A committed path. Immutable: there is no way to change its points once frozen.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    color: Color,
    points: Vec<Location>,
}

impl Path {
    /// Build a finished path directly from its cells.
    ///
    /// Returns [`None`] for an empty list, since every path has at least its start.
    pub fn from_points(color: Color, points: Vec<Location>) -> Option<Self> {
        (!points.is_empty()).then_some(Self { color, points })
    }

    /// The color this path carries.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Every cell visited, in order.
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// The cell the path started from.
    pub fn first(&self) -> Location {
        self.points[0]
    }

    /// The most recent cell.
    pub fn last(&self) -> Location {
        self.points[self.points.len() - 1]
    }

    /// Number of cells, start included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the path visits `location`.
    pub fn contains(&self, location: Location) -> bool {
        self.points.contains(&location)
    }

    /// Whether this path ends on `location`, i.e. feeds whatever sits there.
    pub fn terminates_at(&self, location: Location) -> bool {
        self.last() == location
    }

    /// The render-space centers of this path's cells on `grid`.
    pub fn centers(&self, grid: &GridSpec) -> Vec<Point> {
        self.points.iter()
            .filter_map(|location| grid.center_of(*location))
            .collect_vec()
    }
}
