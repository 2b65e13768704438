//! tilefill - Tiled flood fill for indexed-color raster surfaces
//!
//! This library provides functionality to:
//! - Flood-fill enclosed regions with repeating tile patterns, stopping at
//!   a border color, with optional transactional background matching
//! - Rasterize lines and boxes to set up fill geometry
//! - Capture pixel regions as packed words and dump them as hex text
//! - Parse JSONL/JSON5 scene files and execute them with a resumable
//!   error channel
//! - Render surfaces to PNG through display palettes

pub mod capture;
pub mod cli;
pub mod color;
pub mod fill;
pub mod models;
pub mod parser;
pub mod pattern;
pub mod render;
pub mod runner;
pub mod shapes;
pub mod surface;
