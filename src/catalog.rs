use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::level::Level;

const BUILTIN: &str = include_str!("../levels/builtin.json");

/// An ordered list of levels, numbered from 1.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// The ten-level campaign bundled with the crate.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN)
    }

    /// Parse a catalog of the form `{"levels": [...]}`, validating every level.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let catalog: Self = serde_json::from_str(json)?;
        debug!("Loaded {} levels", catalog.levels.len());
        Ok(catalog)
    }

    /// Level `number`, or [`ConfigError::UnknownLevel`].
    pub fn get(&self, number: u32) -> Result<&Level, ConfigError> {
        self.levels.iter()
            .find(|level| level.number() == number)
            .ok_or(ConfigError::UnknownLevel(number))
    }

    /// Number of levels in the catalog.
    pub fn total(&self) -> u32 {
        self.levels.len() as u32
    }

    /// Every level, in order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }
}
