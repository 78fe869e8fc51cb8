//! Application Module
//!
//! Everything between the automaton core and a front-end:
//! - Layered configuration (file, environment, preset, CLI)
//! - Validated run settings
//! - Shareable preset query strings
//! - The ticker and the animation driver built on it

mod config;
mod driver;
mod preset;
mod settings;
mod ticker;

pub use config::{CliArgs, ColorScheme, Config, ConfigError, StartMode};
pub use driver::{Animation, AnimationError};
pub use preset::Preset;
pub use settings::{Settings, Speed, SurfaceSize};
pub use ticker::Ticker;
