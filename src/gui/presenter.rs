//! Window presenter using softbuffer (CPU rendering)
//!
//! Copies the raster surface into the window buffer, filling transparent
//! pixels and any area outside the surface with the background color.

use std::num::NonZeroU32;
use std::rc::Rc;

use softbuffer::{Context, Surface as WindowSurface};
use winit::window::Window;

use crate::raster::{rgb_to_pixel, Surface, TRANSPARENT};

pub struct Presenter {
    #[allow(dead_code)]
    context: Context<Rc<Window>>,
    target: WindowSurface<Rc<Window>, Rc<Window>>,
    background: u32,
}

impl Presenter {
    pub fn new(
        window: Rc<Window>,
        background: (u8, u8, u8),
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let context = Context::new(window.clone())?;
        let target = WindowSurface::new(&context, window)?;
        Ok(Self {
            context,
            target,
            background: rgb_to_pixel(background.0, background.1, background.2),
        })
    }

    /// Draw `surface` into a `width`x`height` window
    pub fn present(
        &mut self,
        surface: &Surface,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };
        self.target.resize(w, h)?;

        let mut buffer = self.target.buffer_mut()?;
        compose(&mut buffer, width, surface, self.background);
        buffer.present()?;
        Ok(())
    }
}

/// Blit `surface` at the top-left of a `width`-wide buffer
fn compose(buffer: &mut [u32], width: u32, surface: &Surface, background: u32) {
    buffer.fill(background);
    let width = width as usize;
    for (y, src) in surface.rows().enumerate() {
        let start = y * width;
        if start >= buffer.len() {
            break;
        }
        let end = (start + width.min(src.len())).min(buffer.len());
        for (dst, &pixel) in buffer[start..end].iter_mut().zip(src) {
            if pixel != TRANSPARENT {
                *dst = pixel;
            }
        }
    }
}
