use std::num::NonZero;

use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;

use crate::error::ConfigError;
use crate::location::{Dimension, Location};
use crate::shape::SquareStep;

/// The largest number of cells per side a grid may have.
pub const MAX_GRID_SIZE: usize = 64;

/// A position in continuous render space, e.g. a pointer position or the center of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Horizontal position, growing rightwards.
    pub x: f32,
    /// Vertical position, growing downwards.
    pub y: f32,
}

impl Point {
    /// A point at (`x`, `y`).
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Maps the cells of an N×N grid onto a square board of a given render size.
///
/// Centers are computed once per board size and stored, so repeated lookups return bitwise-identical values.
/// Adjacency is answered from a lattice graph with one edge per pair of orthogonal neighbors.
#[derive(Clone, Debug)]
pub struct GridSpec {
    dim: Dimension,
    board_size: f32,
    cell_size: f32,
    centers: Array2<Point>,
    lattice: UnGraphMap<Location, SquareStep>,
}

impl GridSpec {
    /// Lay out a `grid_size`×`grid_size` grid over a board `board_size` units wide.
    pub fn new(grid_size: usize, board_size: f32) -> Result<Self, ConfigError> {
        let dim = NonZero::new(grid_size).ok_or(ConfigError::ZeroGridSize)?;
        if grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(grid_size));
        }
        check_board_size(board_size)?;

        let mut grid = Self {
            dim,
            board_size,
            cell_size: 0.0,
            centers: Array2::default((0, 0)),
            lattice: build_lattice(dim),
        };
        grid.layout();

        Ok(grid)
    }

    /// Resize the board, regenerating every center.
    ///
    /// Does nothing if `board_size` is unchanged.
    pub fn set_board_size(&mut self, board_size: f32) -> Result<(), ConfigError> {
        if board_size == self.board_size {
            return Ok(());
        }
        check_board_size(board_size)?;

        self.board_size = board_size;
        self.layout();
        Ok(())
    }

    fn layout(&mut self) {
        let n = self.dim.get();
        let cell_size = self.board_size / n as f32;

        self.cell_size = cell_size;
        self.centers = Array2::from_shape_fn((n, n), |(row, col)| Point {
            x: col as f32 * cell_size + cell_size / 2.0,
            y: row as f32 * cell_size + cell_size / 2.0,
        });
    }

    /// Cells per side.
    pub fn grid_size(&self) -> Dimension {
        self.dim
    }

    /// Render width (and height) of the whole board.
    pub fn board_size(&self) -> f32 {
        self.board_size
    }

    /// Render width (and height) of one cell.
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Whether `location` lies on the grid.
    pub fn contains(&self, location: Location) -> bool {
        location.within(self.dim)
    }

    /// The render-space center of `location`, or [`None`] if it is off the grid.
    pub fn center_of(&self, location: Location) -> Option<Point> {
        self.centers.get(location.as_index()).copied()
    }

    /// Recover the cell whose center is exactly `center`.
    ///
    /// Only points previously produced by this grid match; anything else yields [`None`].
    pub fn cell_of(&self, center: Point) -> Option<Location> {
        let col = ((center.x - self.cell_size / 2.0) / self.cell_size).round();
        let row = ((center.y - self.cell_size / 2.0) / self.cell_size).round();
        if !(col >= 0.0 && row >= 0.0) {
            return None;
        }

        let location = Location(col as usize, row as usize);
        (self.center_of(location)? == center).then_some(location)
    }

    /// Every center with its cell, in row-major order.
    pub fn centers(&self) -> impl Iterator<Item = (Location, Point)> + '_ {
        self.centers.indexed_iter().map(|(index, center)| (Location::from(index), *center))
    }

    /// The cell whose center is closest to `point`.
    ///
    /// Ties go to the first cell in row-major order.
    pub fn nearest_cell(&self, point: Point) -> Location {
        self.centers()
            .map(|(location, center)| (location, center.distance_squared(&point)))
            // min_by keeps the first of equal elements
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(location, _)| location)
            .unwrap_or(Location(0, 0))
    }

    /// The center closest to `point`.
    pub fn nearest_center(&self, point: Point) -> Point {
        let location = self.nearest_cell(point);
        self.centers[location.as_index()]
    }

    /// Whether `a` and `b` are orthogonal neighbors on this grid.
    pub fn are_adjacent(&self, a: Location, b: Location) -> bool {
        self.lattice.contains_edge(a, b)
    }

    /// Whether moving between the centers `a` and `b` is a single horizontal or vertical step.
    ///
    /// False if either point is not a center of this grid.
    pub fn is_orthogonal_adjacent_move(&self, a: Point, b: Point) -> bool {
        match (self.cell_of(a), self.cell_of(b)) {
            (Some(a), Some(b)) => self.are_adjacent(a, b),
            _ => false,
        }
    }
}

fn check_board_size(board_size: f32) -> Result<(), ConfigError> {
    if board_size.is_finite() && board_size > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveBoardSize(board_size))
    }
}

fn build_lattice(dim: Dimension) -> UnGraphMap<Location, SquareStep> {
    let n = dim.get();
    let mut lattice = UnGraphMap::with_capacity(
        n * n,
        // horizontal plus vertical edges
        2 * (n - 1) * n,
    );

    for x in 0..n {
        for y in 0..n {
            let location = Location(x, y);
            lattice.add_node(location);

            // add edges down and to the right, if possible
            for direction in SquareStep::FORWARD_VARIANTS {
                let neighbor = direction.attempt_from(location);
                if neighbor.within(dim) {
                    lattice.add_edge(location, neighbor, *direction);
                }
            }
        }
    }

    lattice
}
