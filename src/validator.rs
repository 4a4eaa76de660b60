//! Legality of individual drawing steps.

use thiserror::Error;

use crate::grid::GridSpec;
use crate::level::Level;
use crate::location::Location;
use crate::path::{DrawnPath, Path};

/// Why a single drawing step was refused.
///
/// These are routine while drawing and are reported for diagnostics only; a refused step simply does not happen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum IllegalMove {
    /// The destination is not one horizontal or vertical step away.
    #[error("{to:?} is not orthogonally adjacent to {from:?}")]
    NotAdjacent {
        /// The end of the path being drawn.
        from: Location,
        /// The cell the step tried to reach.
        to: Location,
    },
    /// A committed path already runs through the destination, which is not a mixer.
    #[error("{0:?} is already occupied")]
    Occupied(Location),
    /// Paths may not run through a second source.
    #[error("{0:?} is a source")]
    ThroughSource(Location),
    /// The path being drawn already visits the destination.
    #[error("{0:?} would close a loop")]
    Loop(Location),
}

/// Judges each step of a path being drawn against the level layout and the paths already on the board.
pub struct MoveValidator<'a> {
    grid: &'a GridSpec,
    level: &'a Level,
}

impl<'a> MoveValidator<'a> {
    /// Check moves on `grid` for `level`.
    pub fn new(grid: &'a GridSpec, level: &'a Level) -> Self {
        Self { grid, level }
    }

    /// Check the step from `from` to `to`.
    ///
    /// All of the following must hold:
    /// 1. `to` is an orthogonal neighbor of `from`.
    /// 2. Unless `to` is a mixer, no committed path visits it.
    /// 3. `to` is not a source once drawing has begun.
    /// 4. `in_progress` does not already visit `to`.
    pub fn check(&self, from: Location, to: Location, committed: &[Path], in_progress: Option<&DrawnPath>) -> Result<(), IllegalMove> {
        if !self.grid.are_adjacent(from, to) {
            return Err(IllegalMove::NotAdjacent { from, to });
        }

        if !self.level.is_mixer(to) && committed.iter().any(|path| path.contains(to)) {
            return Err(IllegalMove::Occupied(to));
        }

        let drawn = in_progress.map_or(0, DrawnPath::len);
        if self.level.is_source(to) && drawn > 0 {
            return Err(IllegalMove::ThroughSource(to));
        }

        if in_progress.is_some_and(|path| path.contains(to)) {
            return Err(IllegalMove::Loop(to));
        }

        Ok(())
    }

    /// Whether stepping from `from` to `to` is legal; see [`check`](Self::check).
    pub fn is_valid_move(&self, from: Location, to: Location, committed: &[Path], in_progress: Option<&DrawnPath>) -> bool {
        self.check(from, to, committed, in_progress).is_ok()
    }
}
