//! Indexed-color raster surface.
//!
//! A `Surface` is a 2D grid of small integer color indices with a fixed
//! bits-per-pixel depth. The depth bounds the color range and determines
//! how many pixels one tile-pattern byte covers (see [`crate::pattern`]).

use std::collections::HashSet;
use thiserror::Error;

/// Error type for surface construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Width or height was zero.
    #[error("surface dimensions must be nonzero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    /// Depth not in {1, 2, 4, 8}.
    #[error("bits per pixel must be 1, 2, 4, or 8, got {0}")]
    InvalidDepth(u8),
}

/// A raster of color indices, row-major, (0, 0) at the top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    bpp: u8,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface filled with color 0.
    ///
    /// `bpp` must be 1, 2, 4, or 8 so that a whole number of pixels fits
    /// in one pattern byte.
    pub fn new(width: u32, height: u32, bpp: u8) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::EmptyDimensions { width, height });
        }
        if !matches!(bpp, 1 | 2 | 4 | 8) {
            return Err(SurfaceError::InvalidDepth(bpp));
        }
        Ok(Surface {
            width,
            height,
            bpp,
            pixels: vec![0; (width as usize) * (height as usize)],
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bits per pixel.
    pub fn bpp(&self) -> u8 {
        self.bpp
    }

    /// Largest color index representable at this depth.
    pub fn max_color(&self) -> u8 {
        (((1u16) << self.bpp) - 1) as u8
    }

    /// Get the color at (x, y). Returns `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.width as usize) + x as usize])
    }

    /// Set the color at (x, y), masking it to the surface depth.
    ///
    /// Out-of-bounds writes are clipped (silently dropped), matching the
    /// drawing convention: shapes may extend past the surface edge and only
    /// the visible part lands.
    pub fn set(&mut self, x: i32, y: i32, color: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let masked = color & self.max_color();
        self.pixels[(y as usize) * (self.width as usize) + x as usize] = masked;
    }

    /// Apply a rasterized pixel set with a single color, clipping at edges.
    pub fn draw(&mut self, pixels: &HashSet<(i32, i32)>, color: u8) {
        for &(x, y) in pixels {
            self.set(x, y, color);
        }
    }

    /// Raw pixel storage, row-major. Used by the fill engine's atomicity
    /// tests and the capture/render paths.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
