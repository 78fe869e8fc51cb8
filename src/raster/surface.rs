//! Fixed-size pixel surface
//!
//! Pixels are stored row-major as `0xAARRGGBB`, the layout softbuffer
//! presents. Erased pixels are fully transparent (`0`), so a front-end can
//! compose the surface over any background.

use std::io::{self, Write};

/// Pixel value of an erased pixel
pub const TRANSPARENT: u32 = 0;

/// Convert RGB to an opaque pixel value (ARGB format)
pub fn rgb_to_pixel(r: u8, g: u8, b: u8) -> u32 {
    0xFF000000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Split a pixel into its RGB components, ignoring alpha
pub fn pixel_to_rgb(pixel: u32) -> (u8, u8, u8) {
    ((pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8)
}

/// In-memory drawing surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Surface {
    /// Create a fully erased surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at (x, y), or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }

    /// Erase every pixel
    pub fn clear(&mut self) {
        self.pixels.fill(TRANSPARENT);
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == TRANSPARENT)
    }

    /// Fill a rectangle, clipped to the surface bounds
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, pixel: u32) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(self.width as i32);
        let y1 = y.saturating_add(h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for py in y0 as usize..y1 as usize {
            let start = py * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(pixel);
        }
    }

    /// Iterate over pixel rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Write the surface as a binary PPM (P6), composing erased pixels over
    /// `background`
    pub fn write_ppm<W: Write>(&self, mut out: W, background: (u8, u8, u8)) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &pixel in &self.pixels {
            let (r, g, b) = if pixel >> 24 == 0 {
                background
            } else {
                pixel_to_rgb(pixel)
            };
            bytes.extend_from_slice(&[r, g, b]);
        }
        out.write_all(&bytes)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_surface_is_blank() {
        let surface = Surface::new(4, 3);
        assert_eq!(surface.pixels().len(), 12);
        assert!(surface.is_blank());
        assert_eq!(surface.pixel(4, 0), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut surface = Surface::new(4, 4);
        let ink = rgb_to_pixel(1, 2, 3);
        surface.fill_rect(-1, 2, 3, 5, ink);

        assert_eq!(surface.pixel(0, 2), Some(ink));
        assert_eq!(surface.pixel(1, 3), Some(ink));
        assert_eq!(surface.pixel(2, 2), Some(TRANSPARENT));
        assert_eq!(surface.pixel(0, 1), Some(TRANSPARENT));
        assert_eq!(surface.pixels().iter().filter(|&&p| p == ink).count(), 4);
    }

    #[test]
    fn test_fill_rect_empty_is_noop() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(1, 1, 0, 2, rgb_to_pixel(9, 9, 9));
        surface.fill_rect(5, 5, 2, 2, rgb_to_pixel(9, 9, 9));
        assert!(surface.is_blank());
    }

    #[test]
    fn test_clear() {
        let mut surface = Surface::new(2, 2);
        surface.fill_rect(0, 0, 2, 2, rgb_to_pixel(0, 0, 0));
        assert!(!surface.is_blank());
        surface.clear();
        assert!(surface.is_blank());
    }

    #[test]
    fn test_pixel_roundtrip() {
        let pixel = rgb_to_pixel(0x12, 0x34, 0x56);
        assert_eq!(pixel, 0xFF123456);
        assert_eq!(pixel_to_rgb(pixel), (0x12, 0x34, 0x56));
    }

    #[test]
    fn test_write_ppm() {
        let mut surface = Surface::new(2, 1);
        surface.fill_rect(1, 0, 1, 1, rgb_to_pixel(0, 0, 0));
        let mut out = Vec::new();
        surface.write_ppm(&mut out, (255, 255, 255)).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[255, 255, 255, 0, 0, 0]);
    }
}
