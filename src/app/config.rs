//! Configuration for the automaton viewer
//!
//! This module provides the configuration system with:
//! - Config file location under the platform config directory
//! - Environment variable support
//! - Shareable preset query strings
//! - CLI argument overrides
//! - Config precedence: CLI > preset > env > file > defaults
//! - Validation that rejects out-of-range values instead of clamping them

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::preset::Preset;
use super::settings::{Settings, Speed, SurfaceSize};
use crate::core::{Rule, RuleError};
use crate::raster::GeometryError;

/// Automaton options shared by every front-end
#[derive(Args, Debug, Clone, Default)]
pub struct CliArgs {
    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rule number: decimal (90), binary (0b01011010) or hex (0x5A)
    #[arg(short, long, value_name = "RULE")]
    pub rule: Option<String>,

    /// Generations per second (1-100)
    #[arg(short, long, value_name = "SPEED")]
    pub speed: Option<u32>,

    /// Cell edge length in pixels; must divide the surface width
    #[arg(long, value_name = "PX")]
    pub cell_size: Option<u32>,

    /// Preset query string or link, e.g. "rule=90&cellSize=10&speed=24"
    #[arg(short, long, value_name = "QUERY")]
    pub preset: Option<String>,

    /// Surface width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Surface height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Start from a single live cell instead of random noise
    #[arg(long)]
    pub single_cell: bool,

    /// Seed for the random generator (random rule and random rows)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the effective configuration to FILE as TOML and exit
    #[arg(long, value_name = "FILE")]
    pub write_config: Option<PathBuf>,
}

/// How the first generation of a run is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartMode {
    /// Uniformly random cells
    #[default]
    Random,
    /// One live cell just left of center
    SingleCell,
}

/// Color scheme configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Live cell color (hex)
    #[serde(default = "default_ink")]
    pub ink: String,
    /// Background color (hex)
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_ink() -> String {
    "#000000".to_string()
}
fn default_background() -> String {
    "#ffffff".to_string()
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            ink: default_ink(),
            background: default_background(),
        }
    }
}

impl ColorScheme {
    /// Parse a hex color string to RGB
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some((r, g, b))
    }

    /// Get ink color as RGB
    pub fn ink_rgb(&self) -> (u8, u8, u8) {
        Self::parse_hex(&self.ink).unwrap_or((0, 0, 0))
    }

    /// Get background color as RGB
    pub fn background_rgb(&self) -> (u8, u8, u8) {
        Self::parse_hex(&self.background).unwrap_or((255, 255, 255))
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid rule: {0}")]
    Rule(#[from] RuleError),

    #[error("speed {0} is out of range (1-100)")]
    SpeedOutOfRange(u32),

    #[error("invalid cell size: {0}")]
    CellSize(#[source] GeometryError),

    #[error("invalid surface size {width}x{height}")]
    SurfaceSize { width: u32, height: u32 },

    #[error("invalid preset parameter '{key}={value}'")]
    Preset { key: String, value: String },

    #[error("invalid hex color '{value}' in '{field}', expected #RRGGBB")]
    Color { field: String, value: String },

    #[error("invalid value '{value}' for {name}")]
    Env { name: String, value: String },

    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rule number (None = pick one at random)
    #[serde(default)]
    pub rule: Option<u32>,

    /// Generations per second
    #[serde(default = "default_speed")]
    pub speed: u32,

    /// Cell edge length in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// First generation of each run
    #[serde(default)]
    pub start: StartMode,

    /// Random seed (None = seeded from the OS)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Start animating immediately
    #[serde(default = "default_true")]
    pub autostart: bool,

    /// Page the copied preset link points at (None = copy just the query)
    #[serde(default)]
    pub share_base: Option<String>,

    /// Drawing surface dimensions
    #[serde(default)]
    pub surface: SurfaceSize,

    /// Colors
    #[serde(default)]
    pub colors: ColorScheme,
}

fn default_speed() -> u32 {
    Speed::default().get()
}
fn default_cell_size() -> u32 {
    10
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rule: None,
            speed: default_speed(),
            cell_size: default_cell_size(),
            start: StartMode::default(),
            seed: None,
            autostart: true,
            share_base: None,
            surface: SurfaceSize::default(),
            colors: ColorScheme::default(),
        }
    }
}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > preset > environment variables > config file > defaults
    ///
    /// A file named with `--config` must load; a broken file at the default
    /// location is logged and skipped.
    pub fn load_with_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default_config_path()
                .filter(|path| path.exists())
                .and_then(|path| match Self::load_from_file(&path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {:?}: {}", path, e);
                        None
                    }
                })
                .unwrap_or_default(),
        };

        config.apply_env_vars()?;
        config.apply_cli_args(args)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment variables to config
    fn apply_env_vars(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|name| env::var(name).ok())
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ECA_RULE") {
            self.rule = Some(val.parse::<Rule>()?.number() as u32);
        }
        if let Some(val) = lookup("ECA_SPEED") {
            self.speed = parse_env("ECA_SPEED", &val)?;
        }
        if let Some(val) = lookup("ECA_CELL_SIZE") {
            self.cell_size = parse_env("ECA_CELL_SIZE", &val)?;
        }
        Ok(())
    }

    /// Apply CLI arguments (and the preset they carry) to config
    fn apply_cli_args(&mut self, args: &CliArgs) -> Result<(), ConfigError> {
        if let Some(width) = args.width {
            self.surface.width = width;
        }
        if let Some(height) = args.height {
            self.surface.height = height;
        }
        self.surface.validate()?;
        if let Some(query) = &args.preset {
            let preset = Preset::parse(query, self.surface)?;
            self.apply_preset(&preset);
        }
        if let Some(rule) = &args.rule {
            self.rule = Some(rule.parse::<Rule>()?.number() as u32);
        }
        if let Some(speed) = args.speed {
            self.speed = speed;
        }
        if let Some(cell_size) = args.cell_size {
            self.cell_size = cell_size;
        }
        if args.single_cell {
            self.start = StartMode::SingleCell;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        Ok(())
    }

    /// Overlay the values a preset carries
    pub fn apply_preset(&mut self, preset: &Preset) {
        if let Some(rule) = preset.rule {
            self.rule = Some(rule.number() as u32);
        }
        if let Some(speed) = preset.speed {
            self.speed = speed.get();
        }
        if let Some(cell_size) = preset.cell_size {
            self.cell_size = cell_size;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.surface.validate()?;
        if let Some(rule) = self.rule {
            Rule::try_from(rule)?;
        }
        Speed::new(self.speed)?;
        self.surface.check_cell_size(self.cell_size)?;

        self.validate_color(&self.colors.ink, "colors.ink")?;
        self.validate_color(&self.colors.background, "colors.background")?;
        Ok(())
    }

    /// Validate a hex color string
    fn validate_color(&self, color: &str, field: &str) -> Result<(), ConfigError> {
        if ColorScheme::parse_hex(color).is_none() {
            return Err(ConfigError::Color {
                field: field.to_string(),
                value: color.to_string(),
            });
        }
        Ok(())
    }

    /// Build run settings, choosing a random rule when none is configured
    pub fn settings<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Settings, ConfigError> {
        self.validate()?;
        let rule = match self.rule {
            Some(rule) => Rule::try_from(rule)?,
            None => Rule::new(rng.random::<u8>()),
        };
        Settings::new(rule, Speed::new(self.speed)?, self.cell_size, self.surface)
    }

    /// Random source for a run: seeded when configured, else from the OS
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Link (or bare query) to hand out for `preset`
    pub fn share_link(&self, preset: &Preset) -> String {
        match &self.share_base {
            Some(base) => preset.share_link(base),
            None => preset.to_string(),
        }
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("eca-scroll").join("config.toml"))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        name: name.to_string(),
        value: value.to_string(),
    })
}
