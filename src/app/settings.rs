//! Validated run settings
//!
//! `Settings` is the whole configuration surface of the automaton: rule,
//! speed and cell size. It is built once from a validated [`Config`] and then
//! owned by the animation driver; nothing reads these values from global
//! state.
//!
//! [`Config`]: super::Config

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use crate::core::Rule;
use crate::raster::Geometry;

/// Animation speed in generations per second (1-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Speed(u8);

impl Speed {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self, ConfigError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ConfigError::SpeedOutOfRange(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    /// Time between ticks: 1000 / speed milliseconds
    pub fn interval(self) -> Duration {
        Duration::from_micros(1_000_000 / self.0 as u64)
    }

    /// One step faster, saturating at the maximum
    pub fn faster(self) -> Self {
        Self((self.get() + 1).min(Self::MAX) as u8)
    }

    /// One step slower, saturating at the minimum
    pub fn slower(self) -> Self {
        Self((self.get() - 1).max(Self::MIN) as u8)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(24)
    }
}

impl TryFrom<u32> for Speed {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Speed> for u32 {
    fn from(speed: Speed) -> Self {
        speed.get()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pixel dimensions of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    640
}
fn default_height() -> u32 {
    480
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl SurfaceSize {
    /// Largest accepted width or height in pixels
    pub const MAX_SIDE: u32 = 16_384;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both sides must be in 1..=MAX_SIDE
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side = 1..=Self::MAX_SIDE;
        if side.contains(&self.width) && side.contains(&self.height) {
            Ok(())
        } else {
            Err(ConfigError::SurfaceSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cell sizes that divide the width evenly and fit the height
    pub fn allowed_cell_sizes(&self) -> Vec<u32> {
        (1..=self.width.min(self.height))
            .filter(|&size| self.width % size == 0)
            .collect()
    }

    /// The nearest allowed cell size above (or below) `current`
    pub fn step_cell_size(&self, current: u32, larger: bool) -> Option<u32> {
        let sizes = self.allowed_cell_sizes();
        if larger {
            sizes.into_iter().find(|&size| size > current)
        } else {
            sizes.into_iter().rev().find(|&size| size < current)
        }
    }

    /// Check a cell size against this surface
    pub fn check_cell_size(&self, cell_size: u32) -> Result<Geometry, ConfigError> {
        Geometry::new(cell_size, self.width, self.height).map_err(ConfigError::CellSize)
    }
}

/// The validated configuration of one automaton run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub rule: Rule,
    pub speed: Speed,
    pub cell_size: u32,
}

impl Settings {
    /// Validate raw values against a surface
    pub fn new(
        rule: Rule,
        speed: Speed,
        cell_size: u32,
        surface: SurfaceSize,
    ) -> Result<Self, ConfigError> {
        surface.validate()?;
        surface.check_cell_size(cell_size)?;
        Ok(Self {
            rule,
            speed,
            cell_size,
        })
    }
}
