use thiserror::Error;

use crate::builder::LevelInvalidReason;

/// Failures constructing a grid, a level or a level catalog.
///
/// These indicate bad content or a programming mistake in the host; illegal moves during play are never reported this way.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A grid must have at least one cell per side.
    #[error("grid size must be at least 1")]
    ZeroGridSize,
    /// A grid may have at most [`MAX_GRID_SIZE`](crate::MAX_GRID_SIZE) cells per side.
    #[error("grid size {0} exceeds the maximum of {max}", max = crate::MAX_GRID_SIZE)]
    GridTooLarge(usize),
    /// The render-space board must have a positive, finite size.
    #[error("board size must be positive and finite, got {0}")]
    NonPositiveBoardSize(f32),
    /// The level definition placed features illegally.
    #[error("level {number} is malformed: {reasons:?}")]
    InvalidLevel {
        /// Number of the offending level.
        number: u32,
        /// Everything the builder objected to.
        reasons: Vec<LevelInvalidReason>,
    },
    /// No level with this number exists in the catalog.
    #[error("no level numbered {0}")]
    UnknownLevel(u32),
    /// The level data could not be parsed.
    #[error("malformed level data: {0}")]
    Json(#[from] serde_json::Error),
}
