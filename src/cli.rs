//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::capture::write_dump;
use crate::parser::parse_stream;
use crate::render::{render_surface, resolve_palette, save_png, scale_image};
use crate::runner::{run_scene, RunResult};

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// tilefill - execute tiled flood-fill scenes on indexed raster surfaces
#[derive(Parser)]
#[command(name = "tfl")]
#[command(about = "tilefill - execute tiled flood-fill scenes on indexed raster surfaces")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a scene: draw, paint, and capture ops in stream order
    Run {
        /// Input scene file (JSONL / JSON5 objects)
        scene: PathBuf,

        /// Write the error report (one "code line" pair per failure) here
        #[arg(long)]
        error_report: Option<PathBuf>,

        /// Directory capture dumps resolve against.
        /// Defaults to the scene file's directory.
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Strict mode: parse warnings and op errors fail the run
        #[arg(long)]
        strict: bool,
    },

    /// Execute a scene, then render the final surface to PNG
    Render {
        /// Input scene file (JSONL / JSON5 objects)
        scene: PathBuf,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,

        /// Palette name to render with (default: first palette in the scene,
        /// falling back to a grey ramp)
        #[arg(long)]
        palette: Option<String>,

        /// Scale output by integer factor (1-16, default: 1)
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=16))]
        scale: u8,

        /// Strict mode: parse warnings and op errors fail the run
        #[arg(long)]
        strict: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scene,
            error_report,
            out_dir,
            strict,
        } => run_run(&scene, error_report.as_deref(), out_dir.as_deref(), strict),
        Commands::Render {
            scene,
            output,
            palette,
            scale,
            strict,
        } => run_render(&scene, &output, palette.as_deref(), scale, strict),
    }
}

/// Parse and execute a scene file. Returns the run result, or an exit code
/// when the scene cannot be loaded (or strict mode tripped on the way).
fn execute_scene(scene: &Path, strict: bool) -> Result<RunResult, ExitCode> {
    let file = match File::open(scene) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error: Cannot open scene file '{}': {}", scene.display(), e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    let parse_result = parse_stream(BufReader::new(file));
    for warning in &parse_result.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }
    if strict && !parse_result.warnings.is_empty() {
        return Err(ExitCode::from(EXIT_ERROR));
    }

    let result = run_scene(&parse_result.items);
    for warning in &result.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }
    for record in &result.errors {
        eprintln!("Error: line {}: {}", record.line, record.message);
    }

    Ok(result)
}

/// Execute the run command
fn run_run(
    scene: &Path,
    error_report: Option<&Path>,
    out_dir: Option<&Path>,
    strict: bool,
) -> ExitCode {
    let result = match execute_scene(scene, strict) {
        Ok(r) => r,
        Err(code) => return code,
    };

    let base = out_dir
        .map(Path::to_path_buf)
        .or_else(|| scene.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    if let Err(e) = result.write_captures(&base) {
        eprintln!("Error: Failed to write capture: {}", e);
        return ExitCode::from(EXIT_ERROR);
    }

    if let Some(report_path) = error_report {
        if let Err(e) = write_dump(report_path, &result.error_report()) {
            eprintln!(
                "Error: Failed to write error report '{}': {}",
                report_path.display(),
                e
            );
            return ExitCode::from(EXIT_ERROR);
        }
    }

    if strict && !result.errors.is_empty() {
        return ExitCode::from(EXIT_ERROR);
    }
    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the render command
fn run_render(
    scene: &Path,
    output: &Path,
    palette_name: Option<&str>,
    scale: u8,
    strict: bool,
) -> ExitCode {
    let result = match execute_scene(scene, strict) {
        Ok(r) => r,
        Err(code) => return code,
    };

    if strict && !result.errors.is_empty() {
        return ExitCode::from(EXIT_ERROR);
    }

    let surface = match &result.surface {
        Some(s) => s,
        None => {
            eprintln!("Error: scene defines no surface");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let palette_def = match palette_name {
        Some(name) => match result.palette(name) {
            Some(p) => Some(p),
            None => {
                eprintln!("Error: palette '{}' not found in scene", name);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => result.palettes.first(),
    };

    let colors = match palette_def {
        Some(def) => match resolve_palette(&def.colors) {
            Ok(colors) => colors,
            Err(e) => {
                eprintln!("Error: palette '{}': {}", def.name, e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => Vec::new(),
    };

    let image = scale_image(render_surface(surface, &colors), scale);
    if let Err(e) = save_png(&image, output) {
        eprintln!("Error: Failed to save '{}': {}", output.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    println!("Saved: {}", output.display());
    ExitCode::from(EXIT_SUCCESS)
}
