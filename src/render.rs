//! Surface rendering and PNG output.
//!
//! Maps surface color indices through a display palette to an RGBA image.
//! Indices without a palette entry fall back to an evenly spaced grey ramp
//! so any surface renders inspectably without palette setup.

use crate::color::{parse_color, ColorError};
use crate::surface::Surface;
use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Bad palette color string
    #[error("palette color: {0}")]
    Color(#[from] ColorError),
}

/// Resolve palette hex strings to RGBA colors, index for index.
pub fn resolve_palette(colors: &[String]) -> Result<Vec<Rgba<u8>>, OutputError> {
    colors
        .iter()
        .map(|c| parse_color(c).map_err(OutputError::from))
        .collect()
}

/// Fallback display color for an index with no palette entry: a grey ramp
/// spread over the surface's color range.
pub fn default_color(index: u8, max_color: u8) -> Rgba<u8> {
    let level = (index as u32 * 255 / max_color.max(1) as u32) as u8;
    Rgba([level, level, level, 255])
}

/// Render a surface to an RGBA image through a display palette.
pub fn render_surface(surface: &Surface, palette: &[Rgba<u8>]) -> RgbaImage {
    let mut image = RgbaImage::new(surface.width(), surface.height());
    let max = surface.max_color();
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let index = surface.get(x as i32, y as i32).unwrap_or(0);
            let color = palette
                .get(index as usize)
                .copied()
                .unwrap_or_else(|| default_color(index, max));
            image.put_pixel(x, y, color);
        }
    }
    image
}

/// Save an RGBA image to a PNG file, creating parent directories if needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges for indexed-color output.
pub fn scale_image(image: RgbaImage, factor: u8) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    let new_w = w * factor as u32;
    let new_h = h * factor as u32;
    image::imageops::resize(&image, new_w, new_h, FilterType::Nearest)
}
