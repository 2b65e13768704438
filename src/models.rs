//! Data models for scene objects (surfaces, palettes, draw ops).
//!
//! A scene is a stream of tagged JSON objects executed in order: one
//! surface definition, optional display palettes, then draw, paint, and
//! capture operations. Patterns travel as hex strings (two digits per tile
//! row) and are decoded when the operation runs.

use serde::{Deserialize, Serialize};

/// How a line op rasterizes between its two points.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    /// A straight segment between the points.
    #[default]
    Segment,
    /// Outline of the box spanned by the points.
    Box,
    /// Every pixel of the box spanned by the points.
    Filled,
}

/// The target surface: dimensions and color depth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurfaceDef {
    pub width: u32,
    pub height: u32,
    pub bpp: u8,
}

/// A named display palette: color index -> hex color string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaletteDef {
    pub name: String,
    pub colors: Vec<String>,
}

/// Draw a line or box between two points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineOp {
    pub from: [i32; 2],
    pub to: [i32; 2],
    pub color: u8,
    #[serde(default)]
    pub style: LineStyle,
}

/// Flood-fill with a tile pattern from a seed point.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaintOp {
    pub at: [i32; 2],
    pub border: u8,
    /// Fill tile, hex-encoded, one byte per row.
    pub tile: String,
    /// Optional background tile the existing content must match.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub background: Option<String>,
}

/// Capture a region as packed words and dump them to a text file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaptureOp {
    pub from: [i32; 2],
    pub to: [i32; 2],
    pub out: String,
}

/// A scene object - surface, palette, or an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneObject {
    Surface(SurfaceDef),
    Palette(PaletteDef),
    Line(LineOp),
    Paint(PaintOp),
    Capture(CaptureOp),
}

/// A warning message from parsing or execution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}
