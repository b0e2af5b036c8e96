//! Life 1.06 reading and writing

use super::{Cell, Grid};
use crate::config::OutputFormat;
use crate::error::{LifeError, LIFE_106_HEADER};
use anyhow::{Context, Result};
use std::io::{IsTerminal, Read, Write};
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prompt shown when reading a pattern from an interactive terminal
pub const STDIN_PROMPT: &str = "Specify state in Life 1.06 format. Use Ctrl d to stop the input.";

/// How coordinate tokens on a cell line are separated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Exactly one space between `x` and `y`
    #[default]
    Strict,
    /// Any run of whitespace between `x` and `y`
    Lenient,
}

/// Parse a Life 1.06 document.
///
/// Blank lines are skipped. Out-of-range coordinates are reported only once
/// every line has been read; a bad header or a malformed line fails at once.
pub fn parse_life106(content: &str, whitespace: Whitespace) -> Result<Grid, LifeError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    match lines.next() {
        Some((_, header)) if header == LIFE_106_HEADER => {}
        Some((_, header)) => {
            return Err(LifeError::MissingHeader { found: header.to_string() });
        }
        None => return Err(LifeError::MissingHeader { found: String::new() }),
    }

    let mut cells = Vec::new();
    let mut out_of_range = None;

    for (line_no, line) in lines {
        let tokens: Vec<&str> = match whitespace {
            Whitespace::Strict => line.split(' ').collect(),
            Whitespace::Lenient => line.split_whitespace().collect(),
        };
        let [x, y] = tokens.as_slice() else {
            return Err(LifeError::MalformedLine { line: line_no, content: line.to_string() });
        };

        let mut coords = [0i64; 2];
        for (slot, token) in coords.iter_mut().zip([x, y]) {
            match token.parse::<i64>() {
                Ok(value) => *slot = value,
                Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                    if out_of_range.is_none() {
                        out_of_range = Some(LifeError::OutOfRange {
                            line: line_no,
                            value: token.to_string(),
                        });
                    }
                }
                Err(_) => {
                    return Err(LifeError::MalformedLine { line: line_no, content: line.to_string() });
                }
            }
        }
        cells.push(Cell::new(coords[0], coords[1]));
    }

    match out_of_range {
        Some(err) => Err(err),
        None => Ok(Grid::from_cells(cells)),
    }
}

/// Serialize a grid as Life 1.06, cells sorted by `(x, y)`
pub fn grid_to_life106(grid: &Grid) -> String {
    let mut result = String::with_capacity(LIFE_106_HEADER.len() + 1 + grid.living_count() * 8);
    result.push_str(LIFE_106_HEADER);
    result.push('\n');
    for cell in grid.living_cells() {
        result.push_str(&cell.to_string());
        result.push('\n');
    }
    result
}

/// Serialize a grid as a JSON array of cells
pub fn grid_to_json(grid: &Grid) -> Result<String> {
    let mut json = serde_json::to_string_pretty(grid).context("Failed to serialize grid as JSON")?;
    json.push('\n');
    Ok(json)
}

/// Render a grid in the requested output format
pub fn render_grid(grid: &Grid, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Life106 => Ok(grid_to_life106(grid)),
        OutputFormat::Json => grid_to_json(grid),
    }
}

/// Load a grid from a Life 1.06 file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P, whitespace: Whitespace) -> Result<Grid> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pattern file: {}", path.display()))?;

    let grid = parse_life106(&content, whitespace)
        .with_context(|| format!("Failed to parse pattern file: {}", path.display()))?;

    info!(path = %path.display(), cells = grid.living_count(), "loaded pattern");
    Ok(grid)
}

/// Load a grid from any reader, consuming it to EOF
pub fn load_grid_from_reader<R: Read>(mut reader: R, whitespace: Whitespace) -> Result<Grid> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read pattern from input")?;

    let grid = parse_life106(&content, whitespace).context("Failed to parse pattern from input")?;

    info!(cells = grid.living_count(), "loaded pattern from stream");
    Ok(grid)
}

/// Load a grid from standard input, prompting on an interactive terminal
pub fn load_grid_from_stdin(whitespace: Whitespace) -> Result<Grid> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprintln!("{STDIN_PROMPT}");
    }
    load_grid_from_reader(stdin.lock(), whitespace)
}

/// Save a grid to a file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let content = render_grid(grid, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.display()))?;

    info!(path = %path.display(), cells = grid.living_count(), "saved pattern");
    Ok(())
}

/// Write a grid to any writer
pub fn write_grid<W: Write>(grid: &Grid, mut writer: W, format: OutputFormat) -> Result<()> {
    let content = render_grid(grid, format)?;
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .context("Failed to write pattern to output")
}

/// Output path next to `input`: the file name up to its first `.`, plus `suffix`
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    let stem = name.split('.').next().unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}"))
}
