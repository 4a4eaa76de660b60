use std::num::NonZero;

use ndarray::Ix;
use serde::{Deserialize, Serialize};

/// One coordinate of a [`Location`].
pub type Coord = usize;
/// Side length of a square grid, in cells.
pub type Dimension = NonZero<Coord>;

/// A cell on the grid, as `(column, row)`.
///
/// Locations are the identity of a cell everywhere in this crate; render-space [`Point`](crate::Point)s are derived from them by a [`GridSpec`](crate::GridSpec).
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
// x, y
pub struct Location(pub Coord, pub Coord);

impl Location {
    // ndarray wants (row, column)
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1, self.0)
    }

    /// Offset this location by `rhs`, wrapping on underflow so that stepping off the top or left edge lands far out of bounds.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }

    /// Whether this location lies on a square grid of side `dim`.
    pub fn within(&self, dim: Dimension) -> bool {
        self.0 < dim.get() && self.1 < dim.get()
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1, value.0)
    }
}
