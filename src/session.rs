use itertools::Itertools;
use log::{debug, info, trace};

use crate::color::{Color, MATCH_TOLERANCE};
use crate::error::ConfigError;
use crate::grid::{GridSpec, Point};
use crate::intersection::{has_self_intersection, path_intersects_any, step_would_cross};
use crate::level::{Level, Receiver};
use crate::location::Location;
use crate::mixing::mix;
use crate::path::{DrawnPath, Path};
use crate::shape::SquareStep;
use crate::validator::MoveValidator;

/// Whether a path is currently being drawn.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DrawState {
    /// Waiting for a drag to start.
    Idle,
    /// A path is being drawn.
    Drawing,
}

/// Why a finished drag did not produce a committed path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DiscardReason {
    /// The path never left its start.
    TooShort,
    /// The path ended somewhere other than a mixer or receiver.
    DanglingEnd,
    /// The path crossed a committed path or itself.
    Crossing,
}

/// The result of [`PuzzleSession::end_path`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PathOutcome {
    /// No path was being drawn.
    NotDrawing,
    /// The path was thrown away.
    Discarded(DiscardReason),
    /// The path was added to the committed paths.
    Committed {
        /// Set only when this commit is what completed the level.
        level_completed: bool,
    },
}

/// One attempt at a level: the committed paths, the path being drawn, and which receivers are satisfied.
///
/// Drive it from pointer events: [`begin_path`](Self::begin_path) on press, [`extend_path`](Self::extend_path) on move and [`end_path`](Self::end_path) on release.
/// Illegal input is ignored rather than reported as an error; the return values only say whether anything changed.
pub struct PuzzleSession {
    level: Level,
    grid: GridSpec,
    committed: Vec<Path>,
    drawing: Option<DrawnPath>,
    drag_position: Option<Point>,
    // parallel to level.receivers
    satisfaction: Vec<bool>,
    complete: bool,
}

impl PuzzleSession {
    /// Start a fresh attempt at `level` on a board `board_size` units wide.
    pub fn new(level: Level, board_size: f32) -> Result<Self, ConfigError> {
        let grid = GridSpec::new(level.grid_size().get(), board_size)?;
        let satisfaction = vec![false; level.receivers().len()];

        Ok(Self {
            level,
            grid,
            committed: Vec::new(),
            drawing: None,
            drag_position: None,
            satisfaction,
            complete: false,
        })
    }

    /// The level being played.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The current board layout.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// Resize the board. Paths are kept in cell coordinates, so nothing drawn is lost.
    pub fn set_board_size(&mut self, board_size: f32) -> Result<(), ConfigError> {
        self.grid.set_board_size(board_size)
    }

    /// Whether a path is being drawn.
    pub fn state(&self) -> DrawState {
        match self.drawing {
            Some(_) => DrawState::Drawing,
            None => DrawState::Idle,
        }
    }

    /// Committed paths, oldest first.
    pub fn committed_paths(&self) -> &[Path] {
        &self.committed
    }

    /// The path being drawn, if any.
    pub fn in_progress_path(&self) -> Option<&DrawnPath> {
        self.drawing.as_ref()
    }

    /// The raw pointer position of the current drag, for drawing a preview line.
    pub fn drag_position(&self) -> Option<Point> {
        self.drag_position
    }

    /// Start drawing from the cell nearest `pointer`.
    ///
    /// Only a source, or a mixer fed by at least one committed path, can start a path.
    /// Ignored while another path is being drawn. Returns whether a path was started.
    pub fn begin_path(&mut self, pointer: Point) -> bool {
        if self.drawing.is_some() {
            debug!("Ignoring drag start at {pointer:?}: already drawing");
            return false;
        }

        let location = self.grid.nearest_cell(pointer);
        debug!("Drag start at {pointer:?}, nearest cell {location:?}");

        let color = match self.level.source_at(location) {
            Some(source) => Some(source.color),
            None if self.level.is_mixer(location) => self.fed_mixer_output(location),
            None => None,
        };

        let Some(color) = color else {
            return false;
        };

        debug!("Started {color} path at {location:?}");
        self.drawing = Some(DrawnPath::new(location, color));
        self.drag_position = Some(pointer);
        true
    }

    /// Continue the current path towards the cell nearest `pointer`.
    ///
    /// The step is dropped if the cell is unchanged or the move is illegal. Returns whether a cell was added.
    pub fn extend_path(&mut self, pointer: Point) -> bool {
        let Some(drawing) = self.drawing.as_ref() else {
            return false;
        };
        self.drag_position = Some(pointer);

        let from = drawing.last();
        let to = self.grid.nearest_cell(pointer);
        if to == from {
            trace!("Still on {from:?}");
            return false;
        }

        let validator = MoveValidator::new(&self.grid, &self.level);
        if let Err(reason) = validator.check(from, to, &self.committed, Some(drawing)) {
            debug!("Rejected step: {reason}");
            return false;
        }

        debug!("Step {:?} to {to:?}", SquareStep::direction_to(from, to));
        if let Some(drawing) = self.drawing.as_mut() {
            drawing.push(to);
        }
        true
    }

    /// Finish the current path, committing it if it ends on a mixer or receiver without crossing anything.
    ///
    /// The path being drawn is cleared either way.
    pub fn end_path(&mut self) -> PathOutcome {
        self.drag_position = None;
        let Some(drawing) = self.drawing.take() else {
            return PathOutcome::NotDrawing;
        };

        let outcome = if drawing.len() < 2 {
            PathOutcome::Discarded(DiscardReason::TooShort)
        } else if !self.level.is_destination(drawing.last()) {
            PathOutcome::Discarded(DiscardReason::DanglingEnd)
        } else if path_intersects_any(drawing.points(), &self.committed) || has_self_intersection(drawing.points()) {
            PathOutcome::Discarded(DiscardReason::Crossing)
        } else {
            self.committed.push(drawing.freeze());
            PathOutcome::Committed { level_completed: self.refresh() }
        };

        debug!("Drag end: {outcome:?}");
        outcome
    }

    /// Remove the most recently committed path.
    pub fn undo(&mut self) -> Option<Path> {
        let removed = self.committed.pop();
        self.refresh();
        removed
    }

    /// Remove every committed path. A path being drawn is left alone.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.refresh();
    }

    /// Return to the state the session started in.
    pub fn reset(&mut self) {
        self.drawing = None;
        self.drag_position = None;
        self.clear();
    }

    /// Whether every receiver is satisfied.
    pub fn is_level_complete(&self) -> bool {
        self.satisfaction.iter().all(|satisfied| *satisfied)
    }

    /// Each receiver with whether it is currently satisfied.
    pub fn receiver_satisfaction(&self) -> impl Iterator<Item = (&Receiver, bool)> + '_ {
        self.level.receivers().iter().zip(self.satisfaction.iter().copied())
    }

    /// Whether the receiver at `location` is satisfied.
    pub fn is_receiver_satisfied(&self, location: Location) -> bool {
        self.receiver_satisfaction()
            .any(|(receiver, satisfied)| receiver.location == location && satisfied)
    }

    /// Committed paths ending on `location`.
    pub fn mixer_inputs(&self, location: Location) -> Vec<&Path> {
        self.committed.iter()
            .filter(|path| path.terminates_at(location))
            .collect_vec()
    }

    /// The blend of every committed path ending on the mixer at `location`.
    ///
    /// [`None`] if there is no mixer there; [`Color::TRANSPARENT`] if nothing feeds it yet.
    pub fn mixer_output(&self, location: Location) -> Option<Color> {
        if !self.level.is_mixer(location) {
            return None;
        }

        let colors = self.mixer_inputs(location).iter().map(|path| path.color()).collect_vec();
        Some(mix(&colors))
    }

    fn fed_mixer_output(&self, location: Location) -> Option<Color> {
        let inputs = self.mixer_inputs(location).iter().map(|path| path.color()).collect_vec();
        if inputs.is_empty() {
            return None;
        }

        let mixed = mix(&inputs);
        debug!("Mixer at {location:?}: {} => {mixed}", inputs.iter().join(", "));
        Some(mixed)
    }

    /// Whether stepping from `from` to `to` would run across an existing track.
    ///
    /// A hint for highlighting blocked directions; [`extend_path`](Self::extend_path) does not consult it.
    pub fn would_step_cross(&self, from: Location, to: Location) -> bool {
        let in_progress = self.drawing.as_ref().map_or(&[][..], DrawnPath::points);

        step_would_cross(
            from,
            to,
            &self.committed,
            in_progress,
            self.level.is_source(from),
            self.level.is_destination(to),
        )
    }

    // recompute satisfaction from scratch; true on the incomplete -> complete transition
    fn refresh(&mut self) -> bool {
        self.satisfaction = self.level.receivers().iter()
            .map(|receiver| {
                self.committed.iter()
                    .find(|path| path.terminates_at(receiver.location))
                    .is_some_and(|path| path.color().matches(&receiver.target, MATCH_TOLERANCE))
            })
            .collect();

        let was_complete = self.complete;
        self.complete = self.is_level_complete();

        let completed = self.complete && !was_complete;
        if completed {
            info!("Level {} complete", self.level.number());
        }
        completed
    }
}
