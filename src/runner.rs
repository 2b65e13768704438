//! Scene execution: sequential operations over one surface.
//!
//! The runner walks parsed scene items in stream order. A failing operation
//! is recorded as a (code, line) pair and execution resumes at the next
//! item, so one bad paint never aborts the scene. Recovery policy beyond
//! that (halt on first error, strict mode) belongs to the caller.

use crate::capture::{capture_region, hex_dump, write_dump, CaptureError};
use crate::fill::{fill, FillError, FillRequest};
use crate::models::{LineStyle, PaletteDef, SceneObject, Warning};
use crate::parser::SceneItem;
use crate::pattern::{Pattern, PatternError};
use crate::shapes::{rasterize_box, rasterize_filled_box, rasterize_line};
use crate::surface::{Surface, SurfaceError};
use std::path::Path;
use thiserror::Error;

/// Error from a single scene operation.
#[derive(Debug, Error)]
pub enum OpError {
    /// Fill engine failure (conflict, empty pattern, bad seed).
    #[error(transparent)]
    Fill(#[from] FillError),
    /// Malformed hex pattern on a paint op.
    #[error("bad pattern: {0}")]
    Pattern(#[from] PatternError),
    /// Capture failure (bad corners or I/O).
    #[error(transparent)]
    Capture(#[from] CaptureError),
    /// A drawing op appeared before any surface definition.
    #[error("no surface defined before this op")]
    NoSurface,
    /// Bad surface definition.
    #[error("surface: {0}")]
    Surface(#[from] SurfaceError),
}

impl OpError {
    /// Stable numeric code for the error channel. Fill and capture codes
    /// come from their own enums; runner-level conditions follow after.
    pub fn code(&self) -> u16 {
        match self {
            OpError::Fill(e) => e.code(),
            OpError::Capture(e) => e.code(),
            OpError::Pattern(_) => 6,
            OpError::NoSurface => 7,
            OpError::Surface(_) => 8,
        }
    }
}

/// One recorded failure: stable code plus the scene line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub code: u16,
    pub line: usize,
    pub message: String,
}

/// Result of executing a scene.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Final surface state, if the scene defined one.
    pub surface: Option<Surface>,
    /// Display palettes collected along the way, in order.
    pub palettes: Vec<PaletteDef>,
    /// Capture dumps keyed by their declared output path.
    pub captures: Vec<(String, String)>,
    /// Failures, in execution order.
    pub errors: Vec<ErrorRecord>,
    /// Non-fatal conditions.
    pub warnings: Vec<Warning>,
}

impl RunResult {
    /// Error report for the text sink: one `code line` integer pair per
    /// record, in execution order.
    pub fn error_report(&self) -> String {
        let mut out = String::new();
        for record in &self.errors {
            out.push_str(&format!("{} {}\n", record.code, record.line));
        }
        out
    }

    /// Write every capture dump, resolving relative paths against `base`.
    pub fn write_captures(&self, base: &Path) -> Result<(), CaptureError> {
        for (out, dump) in &self.captures {
            let path = base.join(out);
            write_dump(&path, dump)?;
        }
        Ok(())
    }

    /// Find a collected palette by name.
    pub fn palette(&self, name: &str) -> Option<&PaletteDef> {
        self.palettes.iter().find(|p| p.name == name)
    }
}

/// Execute parsed scene items in order.
pub fn run_scene(items: &[SceneItem]) -> RunResult {
    let mut result = RunResult::default();

    for item in items {
        match apply(item, &mut result) {
            Ok(()) => {}
            Err(e) => result.errors.push(ErrorRecord {
                code: e.code(),
                line: item.line,
                message: e.to_string(),
            }),
        }
    }

    result
}

fn apply(item: &SceneItem, result: &mut RunResult) -> Result<(), OpError> {
    match &item.object {
        SceneObject::Surface(def) => {
            let surface = Surface::new(def.width, def.height, def.bpp)?;
            if result.surface.is_some() {
                result.warnings.push(Warning {
                    message: "surface redefined, replacing".to_string(),
                    line: item.line,
                });
            }
            result.surface = Some(surface);
            Ok(())
        }
        SceneObject::Palette(def) => {
            result.palettes.push(def.clone());
            Ok(())
        }
        SceneObject::Line(op) => {
            let surface = result.surface.as_mut().ok_or(OpError::NoSurface)?;
            let p0 = (op.from[0], op.from[1]);
            let p1 = (op.to[0], op.to[1]);
            let pixels = match op.style {
                LineStyle::Segment => rasterize_line(p0, p1),
                LineStyle::Box => rasterize_box(p0, p1),
                LineStyle::Filled => rasterize_filled_box(p0, p1),
            };
            surface.draw(&pixels, op.color);
            Ok(())
        }
        SceneObject::Paint(op) => {
            let tile = Pattern::from_hex(&op.tile)?;
            let background = match &op.background {
                Some(hex) => Some(Pattern::from_hex(hex)?),
                None => None,
            };
            let surface = result.surface.as_mut().ok_or(OpError::NoSurface)?;
            fill(
                surface,
                &FillRequest {
                    seed: (op.at[0], op.at[1]),
                    border: op.border,
                    tile,
                    background,
                },
            )?;
            Ok(())
        }
        SceneObject::Capture(op) => {
            let surface = result.surface.as_ref().ok_or(OpError::NoSurface)?;
            let words = capture_region(surface, (op.from[0], op.from[1]), (op.to[0], op.to[1]))?;
            result.captures.push((op.out.clone(), hex_dump(&words)));
            Ok(())
        }
    }
}
