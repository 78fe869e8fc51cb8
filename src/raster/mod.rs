//! Raster Module
//!
//! Turns generations into pixels. This module contains:
//! - A fixed-size ARGB pixel surface
//! - The bounded history of generations shown on it
//! - The scrolling renderer that paints rows and scrolls once full
//! - Serializable snapshots of the renderer state

mod history;
mod renderer;
mod snapshot;
mod surface;

pub use history::{History, HistoryIter};
pub use renderer::{Geometry, GeometryError, ScrollRenderer, Submitted};
pub use snapshot::Snapshot;
pub use surface::{pixel_to_rgb, rgb_to_pixel, Surface, TRANSPARENT};
