//! Shape rasterization primitives for setting up fill geometry.
//!
//! This module converts line and box specifications into sets of integer
//! pixel coordinates using standard rasterization algorithms. Boxes are
//! spanned by two inclusive corners, matching the coordinate convention of
//! the capture primitive.

use std::collections::HashSet;

/// Rasterize a line using Bresenham's line algorithm.
///
/// Returns all pixels that form a line between two points.
///
/// # Examples
///
/// ```
/// use tilefill::shapes::rasterize_line;
///
/// let pixels = rasterize_line((0, 0), (3, 3));
/// assert_eq!(pixels.len(), 4);
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 3)));
/// ```
pub fn rasterize_line(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let mut pixels = HashSet::new();

    let (mut x0, mut y0) = p0;
    let (x1, y1) = p1;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pixels.insert((x0, y0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    pixels
}

/// Rasterize the outline of the axis-aligned box spanned by two corners.
///
/// Corners are inclusive and may be given in any order.
///
/// # Examples
///
/// ```
/// use tilefill::shapes::rasterize_box;
///
/// let pixels = rasterize_box((0, 0), (3, 3));
/// assert!(pixels.contains(&(0, 0)));
/// assert!(pixels.contains(&(3, 0)));
/// assert!(!pixels.contains(&(1, 1))); // Interior stays empty
/// ```
pub fn rasterize_box(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let (x0, x1) = (p0.0.min(p1.0), p0.0.max(p1.0));
    let (y0, y1) = (p0.1.min(p1.1), p0.1.max(p1.1));

    let mut pixels = HashSet::new();
    for x in x0..=x1 {
        pixels.insert((x, y0));
        pixels.insert((x, y1));
    }
    for y in y0..=y1 {
        pixels.insert((x0, y));
        pixels.insert((x1, y));
    }
    pixels
}

/// Rasterize every pixel of the axis-aligned box spanned by two corners.
///
/// Corners are inclusive and may be given in any order.
///
/// # Examples
///
/// ```
/// use tilefill::shapes::rasterize_filled_box;
///
/// let pixels = rasterize_filled_box((0, 0), (2, 1));
/// assert_eq!(pixels.len(), 6);
/// assert!(pixels.contains(&(2, 1)));
/// ```
pub fn rasterize_filled_box(p0: (i32, i32), p1: (i32, i32)) -> HashSet<(i32, i32)> {
    let (x0, x1) = (p0.0.min(p1.0), p0.0.max(p1.0));
    let (y0, y1) = (p0.1.min(p1.1), p0.1.max(p1.1));

    let mut pixels = HashSet::new();
    for y in y0..=y1 {
        for x in x0..=x1 {
            pixels.insert((x, y));
        }
    }
    pixels
}
