//! Streaming JSON5 parsing for scene objects
//!
//! Supports both single-line JSONL and multi-line JSON5 formats.
//! JSON5 adds support for comments, trailing commas, and unquoted keys.
//! Each parsed object keeps the line it started on, so execution errors
//! can be reported against scene source locations.

use crate::models::{SceneObject, Warning};
use std::io::Read;
use thiserror::Error;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A parsed scene object together with the line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub object: SceneObject,
    pub line: usize,
}

/// Result of parsing a scene stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub items: Vec<SceneItem>,
    pub warnings: Vec<Warning>,
}

/// Parse a single JSON5 string into a SceneObject.
///
/// Returns `Ok(SceneObject)` on success, or `Err(ParseError)` if parsing
/// fails. Supports JSON5 features: comments, trailing commas, and unquoted
/// keys.
pub fn parse_line(line: &str, line_number: usize) -> Result<SceneObject, ParseError> {
    json5::from_str(line).map_err(|e| ParseError {
        message: e.to_string(),
        line: line_number,
    })
}

/// Parse a stream of JSON5 scene objects.
///
/// Supports both formats:
/// - Single-line JSONL (one JSON5 object per line)
/// - Multi-line JSON5 (objects can span multiple lines, separated by whitespace)
///
/// Collects warnings for malformed objects. A syntax error stops parsing,
/// since the next object boundary cannot be found reliably after one.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    use std::io::BufRead;

    let mut result = ParseResult::default();
    let buf_reader = std::io::BufReader::new(reader);
    let mut lines = buf_reader.lines();

    let mut accumulator = String::new();
    let mut start_line = 1;
    let mut current_line = 1;
    let mut brace_depth = 0;
    let mut bracket_depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    while let Some(Ok(line)) = lines.next() {
        // Skip empty lines when not accumulating
        if accumulator.is_empty() && line.trim().is_empty() {
            current_line += 1;
            continue;
        }

        if accumulator.is_empty() {
            start_line = current_line;
        } else {
            accumulator.push('\n');
        }
        accumulator.push_str(&line);

        // Track brace/bracket depth to detect complete objects
        for ch in line.chars() {
            if escape_next {
                escape_next = false;
                continue;
            }

            match ch {
                '\\' if in_string => escape_next = true,
                '"' if !in_string => in_string = true,
                '"' if in_string => in_string = false,
                '{' if !in_string => brace_depth += 1,
                '}' if !in_string => brace_depth -= 1,
                '[' if !in_string => bracket_depth += 1,
                ']' if !in_string => bracket_depth -= 1,
                _ => {}
            }
        }

        // Try to parse when braces are balanced
        if brace_depth == 0 && bracket_depth == 0 && !accumulator.trim().is_empty() {
            match json5::from_str::<SceneObject>(&accumulator) {
                Ok(obj) => result.items.push(SceneItem {
                    object: obj,
                    line: start_line,
                }),
                Err(e) => {
                    result.warnings.push(Warning {
                        message: e.to_string(),
                        line: start_line,
                    });
                    // Stop parsing after error - can't reliably find next object boundary
                    return result;
                }
            }

            accumulator.clear();
            in_string = false;
            escape_next = false;
        }

        current_line += 1;
    }

    // Handle any remaining accumulated content
    if !accumulator.trim().is_empty() {
        match json5::from_str::<SceneObject>(&accumulator) {
            Ok(obj) => result.items.push(SceneItem {
                object: obj,
                line: start_line,
            }),
            Err(e) => {
                result.warnings.push(Warning {
                    message: e.to_string(),
                    line: start_line,
                });
            }
        }
    }

    result
}
