//! Scrolling elementary cellular automaton
//!
//! A one-dimensional, two-state automaton drawn one generation per row on a
//! fixed-size pixel surface that scrolls up once it is full.
//!
//! - `core`: Rules, generations and the transition function
//! - `raster`: Pixel surface, history buffer and the scrolling renderer
//! - `app`: Configuration, presets and the animation driver
//! - `gui`: Windowed viewer (optional feature)

pub mod app;
pub mod core;
pub mod raster;

#[cfg(feature = "gui")]
pub mod gui;
