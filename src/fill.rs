//! Tiled flood fill: the core paint engine.
//!
//! Paints the connected region around a seed point with a repeating tile
//! pattern, stopping at a border color. An optional background pattern turns
//! the call transactional: the existing content of the region's consulted
//! rows must match the background tile, otherwise the call fails and the
//! surface is left untouched. Verification runs over the whole region before
//! the first pixel is written, so a failing call never partially paints.

use crate::pattern::Pattern;
use crate::surface::Surface;
use std::collections::VecDeque;
use thiserror::Error;

/// Error type for fill operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// Existing surface content does not match the background pattern.
    #[error("surface content does not match background pattern at ({x}, {y})")]
    PatternConflict { x: u32, y: u32 },
    /// The fill pattern has no rows.
    #[error("fill pattern has no rows")]
    EmptyPattern,
    /// Seed point outside the surface.
    #[error("seed ({x}, {y}) out of bounds for {width}x{height} surface")]
    SeedOutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

impl FillError {
    /// Stable numeric code for the error channel: failures are reported
    /// upward as (code, source line) integer pairs.
    pub fn code(&self) -> u16 {
        match self {
            FillError::PatternConflict { .. } => 1,
            FillError::EmptyPattern => 2,
            FillError::SeedOutOfBounds { .. } => 3,
        }
    }
}

/// One fill operation.
#[derive(Debug, Clone)]
pub struct FillRequest {
    /// Starting point of the flood.
    pub seed: (i32, i32),
    /// Stop color: never overwritten, never crossed.
    pub border: u8,
    /// Tile painted over the region, phase-anchored at the surface origin.
    pub tile: Pattern,
    /// When present, the region's existing content must match this tile
    /// (wrapping on its own height) before anything is painted.
    pub background: Option<Pattern>,
}

/// Result of a successful fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillResult {
    /// Number of pixels painted. Zero when the seed sat on a border pixel.
    pub painted: usize,
}

/// Flood-fill the region around `request.seed` with `request.tile`.
///
/// The region is the set of 4-connected pixels reachable from the seed
/// without crossing a pixel equal to `request.border`, clipped at the
/// surface edges. Every region pixel is painted with the tile value at its
/// own global coordinate, so re-running an identical fill is idempotent.
///
/// With a background pattern, the first `background.height()` rows of the
/// region are verified against it before painting: for a region pixel at
/// global (gx, gy), the expected color is `background[gy mod height]` at
/// bit position `gx mod tile_width`. Rows below that window are never
/// consulted, so a background longer than the region tolerates trailing
/// content. Any mismatch aborts with [`FillError::PatternConflict`] and no
/// pixel is written.
pub fn fill(surface: &mut Surface, request: &FillRequest) -> Result<FillResult, FillError> {
    if request.tile.is_empty() {
        return Err(FillError::EmptyPattern);
    }

    let (sx, sy) = request.seed;
    let seed_color = match surface.get(sx, sy) {
        Some(c) => c,
        None => {
            return Err(FillError::SeedOutOfBounds {
                x: sx,
                y: sy,
                width: surface.width(),
                height: surface.height(),
            })
        }
    };

    let border = request.border & surface.max_color();
    if seed_color == border {
        // Seeded directly on the border: nothing to paint.
        return Ok(FillResult { painted: 0 });
    }

    let width = surface.width();
    let height = surface.height();
    let bpp = surface.bpp();

    // Pass 1: discover the region. Iterative BFS with a visited bitmap
    // scoped to this call; membership doubles as the frontier guard.
    let mut visited = vec![false; (width as usize) * (height as usize)];
    let idx = |x: u32, y: u32| (y as usize) * (width as usize) + x as usize;

    let mut region: Vec<(u32, u32)> = Vec::new();
    let mut queue = VecDeque::new();
    visited[idx(sx as u32, sy as u32)] = true;
    queue.push_back((sx as u32, sy as u32));

    while let Some((x, y)) = queue.pop_front() {
        region.push((x, y));

        let neighbors: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        for (dx, dy) in neighbors {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx as u32 >= width || ny as u32 >= height {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            if !visited[idx(nx, ny)] && surface.get(nx as i32, ny as i32) != Some(border) {
                visited[idx(nx, ny)] = true;
                queue.push_back((nx, ny));
            }
        }
    }

    // Pass 2: verify the background window. Only the first
    // `background.height()` rows of the region are consulted; an empty
    // background consults nothing and is equivalent to no background.
    if let Some(bg) = request.background.as_ref().filter(|p| !p.is_empty()) {
        let top = region.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let window = bg.height() as u32;
        for &(x, y) in &region {
            if y - top >= window {
                continue;
            }
            let expected = bg.pixel_at(x, y, bpp);
            if surface.get(x as i32, y as i32) != Some(expected) {
                return Err(FillError::PatternConflict { x, y });
            }
        }
    }

    // Pass 3: paint. The tile phase is anchored at the surface origin.
    for &(x, y) in &region {
        surface.set(x as i32, y as i32, request.tile.pixel_at(x, y, bpp));
    }

    Ok(FillResult {
        painted: region.len(),
    })
}
