//! Scrolling raster renderer
//!
//! Paints each submitted generation as one row of cells. Rows fill the
//! surface from the top; once the surface is full every new row scrolls the
//! picture up by one: the oldest generation leaves the history and the whole
//! surface is redrawn from what remains.

use log::{debug, trace};

use super::history::History;
use super::surface::{rgb_to_pixel, Surface};
use crate::core::Generation;

/// Misuse of the renderer's geometry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("renderer used before configure")]
    NotConfigured,
    #[error("cell size must be greater than zero")]
    ZeroCellSize,
    #[error("cell size {cell_size} does not evenly divide surface width {width}")]
    UnevenCellSize { cell_size: u32, width: u32 },
    #[error("cell size {cell_size} is taller than the surface ({height}px)")]
    CellTallerThanSurface { cell_size: u32, height: u32 },
    #[error("generation has {actual} cells, renderer expects {expected}")]
    WidthMismatch { expected: usize, actual: usize },
}

/// Row geometry derived from the cell size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Cell edge length in pixels
    pub cell_size: u32,
    /// Cells per row
    pub columns: usize,
    /// Rows that fit on the surface
    pub rows: usize,
}

impl Geometry {
    /// Compute the geometry of `cell_size` cells on a `width`×`height` surface
    pub fn new(cell_size: u32, width: u32, height: u32) -> Result<Self, GeometryError> {
        if cell_size == 0 {
            return Err(GeometryError::ZeroCellSize);
        }
        if cell_size > width || width % cell_size != 0 {
            return Err(GeometryError::UnevenCellSize { cell_size, width });
        }
        if cell_size > height {
            return Err(GeometryError::CellTallerThanSurface { cell_size, height });
        }
        Ok(Self {
            cell_size,
            columns: (width / cell_size) as usize,
            rows: (height / cell_size) as usize,
        })
    }
}

/// What a submission did to the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    /// Only the new row was painted, at this row index
    Painted { row: usize },
    /// The oldest row was evicted and the whole surface redrawn
    Scrolled,
}

/// Renderer owning the history buffer, the cursor and the surface
#[derive(Debug, Clone)]
pub struct ScrollRenderer {
    surface: Surface,
    geometry: Option<Geometry>,
    history: History,
    /// Next unfilled row, clamped at capacity
    cursor: usize,
    ink: u32,
}

impl ScrollRenderer {
    /// Create an unconfigured renderer over a `width`×`height` surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height),
            geometry: None,
            history: History::new(0),
            cursor: 0,
            ink: rgb_to_pixel(0, 0, 0),
        }
    }

    /// Set the color used for live cells
    pub fn with_ink(mut self, rgb: (u8, u8, u8)) -> Self {
        self.ink = rgb_to_pixel(rgb.0, rgb.1, rgb.2);
        self
    }

    /// Set the cell size and recompute how many rows fit
    ///
    /// Existing content is left alone; callers changing the size follow up
    /// with [`reset`](Self::reset) so rows drawn at the old size are not
    /// mixed with new ones.
    pub fn configure(&mut self, cell_size: u32) -> Result<(), GeometryError> {
        let geometry = Geometry::new(cell_size, self.surface.width(), self.surface.height())?;
        if self.geometry == Some(geometry) {
            return Ok(());
        }

        debug!(
            "Configured cell size {}px: {} columns x {} rows",
            geometry.cell_size, geometry.columns, geometry.rows
        );
        self.history.set_capacity(geometry.rows);
        self.cursor = self.cursor.min(geometry.rows);
        self.geometry = Some(geometry);
        Ok(())
    }

    /// Empty the history, rewind the cursor and erase the surface
    pub fn reset(&mut self) {
        self.history.clear();
        self.cursor = 0;
        self.surface.clear();
    }

    /// Append a generation and paint it
    pub fn submit(&mut self, generation: Generation) -> Result<Submitted, GeometryError> {
        let geometry = self.geometry.ok_or(GeometryError::NotConfigured)?;
        if generation.len() != geometry.columns {
            return Err(GeometryError::WidthMismatch {
                expected: geometry.columns,
                actual: generation.len(),
            });
        }

        let row = self.cursor;
        let outcome = match self.history.push(generation) {
            Some(_) => {
                self.redraw(geometry);
                Submitted::Scrolled
            }
            None => {
                if let Some(newest) = self.history.newest() {
                    Self::paint_row(&mut self.surface, geometry, self.ink, newest, row);
                }
                Submitted::Painted { row }
            }
        };
        self.cursor = (self.cursor + 1).min(geometry.rows);

        trace!("Submitted row {:?}, cursor now {}", outcome, self.cursor);
        Ok(outcome)
    }

    /// Erase the surface and paint every stored row, oldest at the top
    fn redraw(&mut self, geometry: Geometry) {
        self.surface.clear();
        for (row, generation) in self.history.iter().enumerate() {
            Self::paint_row(&mut self.surface, geometry, self.ink, generation, row);
        }
    }

    /// Paint the live cells of `generation` at `row`, inset by one pixel
    ///
    /// Cells of 1 or 2 pixels have no room for an inset and fill their slot.
    fn paint_row(
        surface: &mut Surface,
        geometry: Geometry,
        ink: u32,
        generation: &Generation,
        row: usize,
    ) {
        let size = geometry.cell_size as i32;
        let inset = if size > 2 { 1 } else { 0 };
        let y = row as i32 * size;
        for (col, _) in generation.cells().iter().enumerate().filter(|(_, &c)| c) {
            let x = col as i32 * size;
            surface.fill_rect(x + inset, y + inset, size - 2 * inset, size - 2 * inset, ink);
        }
    }

    pub fn geometry(&self) -> Option<Geometry> {
        self.geometry
    }

    /// Row capacity, zero before configure
    pub fn capacity(&self) -> usize {
        self.geometry.map_or(0, |g| g.rows)
    }

    /// Cells per row, zero before configure
    pub fn columns(&self) -> usize {
        self.geometry.map_or(0, |g| g.columns)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
