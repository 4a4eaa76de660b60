use std::num::NonZero;

use serde::{Deserialize, Serialize};

use crate::builder::LevelBuilder;
use crate::color::Color;
use crate::error::ConfigError;
use crate::location::{Dimension, Location};

/// Where a path of a fixed color may begin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerSource {
    /// The source's cell.
    pub location: Location,
    /// Color of every path started here.
    pub color: Color,
}

/// A cell where incoming paths are blended; paths may also leave from it once fed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Mixer {
    /// The mixer's cell.
    pub location: Location,
}

/// A cell expecting a path of (roughly) its target color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    /// The receiver's cell.
    pub location: Location,
    /// The color that satisfies this receiver.
    pub target: Color,
}

/// A puzzle layout. Immutable once built; construct one with a [`LevelBuilder`] or deserialize a [`LevelDefinition`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelDefinition", into = "LevelDefinition")]
pub struct Level {
    pub(crate) number: u32,
    pub(crate) grid_size: Dimension,
    pub(crate) sources: Vec<PowerSource>,
    pub(crate) receivers: Vec<Receiver>,
    pub(crate) mixers: Vec<Mixer>,
    pub(crate) tutorial: Option<String>,
}

impl Level {
    /// Position in the campaign, from 1.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Cells per side.
    pub fn grid_size(&self) -> Dimension {
        self.grid_size
    }

    /// Every power source.
    pub fn sources(&self) -> &[PowerSource] {
        &self.sources
    }

    /// Every receiver.
    pub fn receivers(&self) -> &[Receiver] {
        &self.receivers
    }

    /// Every mixer.
    pub fn mixers(&self) -> &[Mixer] {
        &self.mixers
    }

    /// Hint text shown when the level opens, if any.
    pub fn tutorial(&self) -> Option<&str> {
        self.tutorial.as_deref()
    }

    /// The source at `location`, if any.
    pub fn source_at(&self, location: Location) -> Option<&PowerSource> {
        self.sources.iter().find(|source| source.location == location)
    }

    /// Whether a source sits at `location`.
    pub fn is_source(&self, location: Location) -> bool {
        self.source_at(location).is_some()
    }

    /// Whether a mixer sits at `location`.
    pub fn is_mixer(&self, location: Location) -> bool {
        self.mixers.iter().any(|mixer| mixer.location == location)
    }

    /// Whether a receiver sits at `location`.
    pub fn is_receiver(&self, location: Location) -> bool {
        self.receivers.iter().any(|receiver| receiver.location == location)
    }

    /// Whether a path may be committed ending on `location`.
    pub fn is_destination(&self, location: Location) -> bool {
        self.is_receiver(location) || self.is_mixer(location)
    }
}

/// The serialized form of a [`Level`], before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Position in the campaign, from 1.
    pub number: u32,
    /// Cells per side.
    pub grid_size: usize,
    /// Power sources.
    pub sources: Vec<PowerSource>,
    /// Receivers.
    pub receivers: Vec<Receiver>,
    /// Mixers; may be omitted.
    #[serde(default)]
    pub mixers: Vec<Mixer>,
    /// Hint text shown when the level opens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tutorial: Option<String>,
}

impl TryFrom<LevelDefinition> for Level {
    type Error = ConfigError;

    fn try_from(value: LevelDefinition) -> Result<Self, Self::Error> {
        let grid_size = NonZero::new(value.grid_size).ok_or(ConfigError::ZeroGridSize)?;

        let mut builder = LevelBuilder::with_size(value.number, grid_size);
        value.sources.iter().for_each(|source| { builder.add_source(source.location, source.color); });
        value.mixers.iter().for_each(|mixer| { builder.add_mixer(mixer.location); });
        value.receivers.iter().for_each(|receiver| { builder.add_receiver(receiver.location, receiver.target); });
        if let Some(text) = value.tutorial {
            builder.tutorial(text);
        }

        builder.build().map_err(|reasons| ConfigError::InvalidLevel {
            number: value.number,
            reasons: reasons.clone(),
        })
    }
}

impl From<Level> for LevelDefinition {
    fn from(value: Level) -> Self {
        Self {
            number: value.number,
            grid_size: value.grid_size.get(),
            sources: value.sources,
            receivers: value.receivers,
            mixers: value.mixers,
            tutorial: value.tutorial,
        }
    }
}
