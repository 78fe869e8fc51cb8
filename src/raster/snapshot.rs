//! Renderer snapshot for testing and debugging
//!
//! Snapshots capture the renderer's history and cursor in a serializable
//! form, so runs can be compared deterministically without looking at pixels.

use serde::{Deserialize, Serialize};

use super::renderer::ScrollRenderer;

/// A snapshot of the renderer state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cell edge length in pixels (0 when unconfigured)
    pub cell_size: u32,
    /// Cells per row
    pub columns: usize,
    /// Row capacity of the surface
    pub capacity: usize,
    /// Next row to be drawn
    pub cursor: usize,
    /// Stored rows, oldest first, as `#` / `.` strings
    pub rows: Vec<String>,
}

impl Snapshot {
    /// Capture the renderer's current state
    pub fn from_renderer(renderer: &ScrollRenderer) -> Self {
        Self {
            cell_size: renderer.geometry().map_or(0, |g| g.cell_size),
            columns: renderer.columns(),
            capacity: renderer.capacity(),
            cursor: renderer.cursor(),
            rows: renderer
                .history()
                .iter()
                .map(|g| g.render('#', '.'))
                .collect(),
        }
    }

    /// The rows joined by newlines
    pub fn text(&self) -> String {
        self.rows.join("\n")
    }
}
