#![warn(missing_docs)]

//! # `chromaflow`
//!
//! The rules engine for a grid puzzle in which colored power is routed from sources, optionally through mixers that blend colors, into receivers expecting a particular color.
//! Paths are drawn cell by cell and may never cross.
//!
//! Begin by building a [`Level`] with a [`LevelBuilder`](builder::LevelBuilder), or load one from a [`LevelCatalog`].
//! Hand it to a [`PuzzleSession`] together with the render size of the board, then feed the session pointer positions as the player drags.
//! The session snaps positions to cells, refuses illegal steps, commits finished paths and keeps track of which receivers are satisfied.
//!
//! Nothing here renders, plays sound or persists anything beyond the two counters kept by [`Progress`].
//!
//! # Internals
//! Cells are identified by integer [`Location`]s throughout; render-space [`Point`]s are derived from them by a [`GridSpec`] only when snapping pointer input.
//!
//! A drawing step is legal when:
//! 1. it moves exactly one cell horizontally or vertically,
//! 2. it does not enter a cell used by a committed path, unless that cell is a mixer,
//! 3. it does not enter a source once drawing has begun,
//! 4. it does not revisit the path being drawn.
//!
//! A finished path is committed if it has left its start, ends on a mixer or receiver, and crosses neither a committed path nor itself.
//! Crossing tests ignore segments touching a path's own start or end, so several paths may converge on one mixer.
//!
//! Mixer outputs are never stored: a path leaving a mixer carries the [`mix`](mixing::mix) of every committed path ending there at the moment it starts.
//! Receiver satisfaction is recomputed from the committed paths after every change.

pub use catalog::LevelCatalog;
pub use color::Color;
pub use error::ConfigError;
pub use grid::{GridSpec, Point, MAX_GRID_SIZE};
pub use level::{Level, LevelDefinition, Mixer, PowerSource, Receiver};
pub use location::{Dimension, Location};
pub use path::{DrawnPath, Path};
pub use progress::{MemoryStore, Progress, ProgressStore};
pub use session::{DiscardReason, DrawState, PathOutcome, PuzzleSession};

mod tests;
pub mod builder;
pub(crate) mod catalog;
pub mod color;
pub(crate) mod error;
pub(crate) mod grid;
pub mod intersection;
pub(crate) mod level;
pub(crate) mod location;
pub mod mixing;
pub(crate) mod path;
pub(crate) mod progress;
pub(crate) mod session;
pub mod shape;
pub mod validator;
