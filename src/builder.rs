//! Validating construction of [`Level`]s.

use std::collections::HashSet;

use thiserror::Error;

use crate::color::Color;
use crate::grid::MAX_GRID_SIZE;
use crate::level::{Level, Mixer, PowerSource, Receiver};
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum LevelInvalidReason {
    /// A source, mixer or receiver was placed outside the grid.
    #[error("feature at {0:?} lies outside the grid")]
    FeatureOutOfBounds(Location),
    /// Two features were placed on the same cell.
    #[error("more than one feature at {0:?}")]
    FeatureOverlap(Location),
    /// The grid has more cells per side than [`MAX_GRID_SIZE`].
    #[error("grid size {0} exceeds the maximum of {max}", max = MAX_GRID_SIZE)]
    GridTooLarge(usize),
}

/// A builder for [`Level`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once a builder becomes invalid, every further call leaves it untouched and [`build`](Self::build) reports why.
#[derive(Clone)]
pub struct LevelBuilder {
    number: u32,
    dim: Dimension,
    sources: Vec<PowerSource>,
    receivers: Vec<Receiver>,
    mixers: Vec<Mixer>,
    tutorial: Option<String>,
    occupied: HashSet<Location>,
    invalid_reasons: Vec<LevelInvalidReason>,
}

impl LevelBuilder {
    /// Start level `number` on a `grid_size`×`grid_size` grid.
    ///
    /// The builder starts out invalid if `grid_size` exceeds [`MAX_GRID_SIZE`].
    pub fn with_size(number: u32, grid_size: Dimension) -> Self {
        let mut invalid_reasons = Vec::new();
        if grid_size.get() > MAX_GRID_SIZE {
            invalid_reasons.push(LevelInvalidReason::GridTooLarge(grid_size.get()));
        }

        Self {
            number,
            dim: grid_size,
            sources: Default::default(),
            receivers: Default::default(),
            mixers: Default::default(),
            tutorial: None,
            occupied: Default::default(),
            invalid_reasons,
        }
    }

    // claims `location` for a new feature, or invalidates the builder
    fn claim(&mut self, location: Location) -> bool {
        if !self.invalid_reasons.is_empty() {
            return false;
        }

        if !location.within(self.dim) {
            self.invalid_reasons.push(LevelInvalidReason::FeatureOutOfBounds(location));
            return false;
        }

        if !self.occupied.insert(location) {
            self.invalid_reasons.push(LevelInvalidReason::FeatureOverlap(location));
            return false;
        }

        true
    }

    /// Add a power source of `color` at `location`.
    ///
    /// May cause the builder to enter an invalid state if `location` is out of bounds or already holds a feature.
    pub fn add_source(&mut self, location: Location, color: Color) -> &mut Self {
        if self.claim(location) {
            self.sources.push(PowerSource { location, color });
        }

        self
    }

    /// Add a receiver expecting `target` at `location`.
    ///
    /// May cause the builder to enter an invalid state if `location` is out of bounds or already holds a feature.
    pub fn add_receiver(&mut self, location: Location, target: Color) -> &mut Self {
        if self.claim(location) {
            self.receivers.push(Receiver { location, target });
        }

        self
    }

    /// Add a mixer at `location`.
    ///
    /// May cause the builder to enter an invalid state if `location` is out of bounds or already holds a feature.
    pub fn add_mixer(&mut self, location: Location) -> &mut Self {
        if self.claim(location) {
            self.mixers.push(Mixer { location });
        }

        self
    }

    /// Remove whatever feature sits at `location`, if any.
    ///
    /// If the builder is in an invalid state, this function does nothing.
    pub fn clear_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.sources.retain(|source| source.location != location);
        self.receivers.retain(|receiver| receiver.location != location);
        self.mixers.retain(|mixer| mixer.location != location);
        self.occupied.remove(&location);

        self
    }

    /// Attach the hint text shown when the level opens.
    pub fn tutorial(&mut self, text: impl Into<String>) -> &mut Self {
        self.tutorial = Some(text.into());
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<LevelInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<LevelInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Level`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`LevelInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Level, &Vec<LevelInvalidReason>> {
        if let Some(reasons) = self.is_valid() {
            return Err(reasons);
        }

        Ok(Level {
            number: self.number,
            grid_size: self.dim,
            sources: self.sources.clone(),
            receivers: self.receivers.clone(),
            mixers: self.mixers.clone(),
            tutorial: self.tutorial.clone(),
        })
    }
}
