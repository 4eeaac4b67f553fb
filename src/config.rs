//! The `asciigol` configuration file format.
//!
//! ```text
//! asciigol
//! <width>,<height>
//! <height lines of width characters, each '0' or '1'>
//! ```
//!
//! Every line, including the last row, ends with `\n`. Decoding is strict:
//! the cell section is read byte by byte so that short rows, long rows and
//! missing or extra rows are all reported precisely. The header and
//! dimension lines are read with a length limit.

use crate::error::{ConfigError, DimensionError};
use crate::grid::{Grid, check_dimensions};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// First line of every configuration document, without its newline.
pub const HEADER: &str = "asciigol";

/// Longest dimension line read before giving up, newline included.
const MAX_DIMENSION_LINE: u64 = 32;

const DEAD: u8 = b'0';
const ALIVE: u8 = b'1';

/// Decode a configuration document.
///
/// Nothing partially decoded escapes on failure.
///
/// # Errors
///
/// - [`ConfigError::BadFile`] if reading fails.
/// - [`ConfigError::BadHeader`] if the first line is not exactly `asciigol`.
/// - [`ConfigError::BadDimension`] if the dimension line is malformed or out
///   of range, or the rows do not match it.
/// - [`ConfigError::BadCell`] for any character other than `0`, `1`, `\n`.
pub fn parse<R: Read>(reader: R) -> Result<Grid, ConfigError> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();

    reader.by_ref().take(HEADER.len() as u64 + 1).read_until(b'\n', &mut line)?;
    if line.strip_suffix(b"\n") != Some(HEADER.as_bytes()) {
        return Err(ConfigError::BadHeader);
    }

    line.clear();
    reader.by_ref().take(MAX_DIMENSION_LINE).read_until(b'\n', &mut line)?;
    let (width, height) = parse_dimensions(&line)?;

    let cells = parse_cells(reader, width, height)?;
    let grid = Grid::from_cells(width, height, cells)?;
    tracing::debug!(width, height, population = grid.population(), "parsed configuration");
    Ok(grid)
}

/// Parse `"<width>,<height>\n"`.
fn parse_dimensions(line: &[u8]) -> Result<(u16, u16), ConfigError> {
    let text = line
        .strip_suffix(b"\n")
        .and_then(|l| std::str::from_utf8(l).ok())
        .ok_or(DimensionError::Malformed)?;
    let (width, height) = text.split_once(',').ok_or(DimensionError::Malformed)?;
    let width: u32 = width.parse().map_err(|_| DimensionError::Malformed)?;
    let height: u32 = height.parse().map_err(|_| DimensionError::Malformed)?;
    check_dimensions(width, height)?;

    // check_dimensions bounds both values well below u16::MAX
    let width = u16::try_from(width).map_err(|_| DimensionError::Malformed)?;
    let height = u16::try_from(height).map_err(|_| DimensionError::Malformed)?;
    Ok((width, height))
}

/// Read exactly `height` newline-terminated rows of `width` cells.
fn parse_cells<R: Read>(reader: R, width: u16, height: u16) -> Result<Vec<bool>, ConfigError> {
    let mut cells = Vec::with_capacity(usize::from(width) * usize::from(height));
    let (mut row, mut col) = (0u16, 0u16);

    for byte in reader.bytes() {
        let byte = byte?;

        if row >= height {
            return Err(DimensionError::ExtraRows { expected: height }.into());
        }

        if byte == b'\n' {
            if col < width {
                return Err(DimensionError::ShortRow { row, found: col, width }.into());
            }
            row += 1;
            col = 0;
            continue;
        }

        if byte != DEAD && byte != ALIVE {
            return Err(ConfigError::BadCell {
                row,
                col,
                found: char::from(byte),
            });
        }

        if col >= width {
            return Err(DimensionError::LongRow { row, width }.into());
        }
        col += 1;
        cells.push(byte == ALIVE);
    }

    if row < height {
        return Err(DimensionError::MissingRows {
            expected: height,
            found: row,
        }
        .into());
    }
    Ok(cells)
}

/// Open and decode a configuration file.
///
/// # Errors
///
/// [`ConfigError::BadFile`] if the file cannot be opened, otherwise the
/// same errors as [`parse`]. The file is closed before returning.
pub fn load(path: &Path) -> Result<Grid, ConfigError> {
    let result = File::open(path).map_err(ConfigError::from).and_then(parse);
    if let Err(e) = &result {
        tracing::debug!(path = %path.display(), error = %e, "rejected configuration");
    }
    result
}

/// Encode a grid as a configuration document.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn serialize<W: Write>(grid: &Grid, writer: W) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    writeln!(writer, "{HEADER}")?;
    writeln!(writer, "{},{}", grid.width(), grid.height())?;

    let mut line = Vec::with_capacity(usize::from(grid.width()) + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
        line.push(b'\n');
        writer.write_all(&line)?;
    }
    writer.flush()
}

/// Encode a grid to a string.
#[must_use]
pub fn to_string(grid: &Grid) -> String {
    let mut out = String::with_capacity(HEADER.len() + 12 + grid.len() + usize::from(grid.height()));
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&format!("{},{}\n", grid.width(), grid.height()));
    for row in grid.rows() {
        out.extend(row.iter().map(|&alive| if alive { '1' } else { '0' }));
        out.push('\n');
    }
    out
}

/// Write a grid to a configuration file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save(path: &Path, grid: &Grid) -> io::Result<()> {
    let file = File::create(path)?;
    serialize(grid, file)?;
    tracing::info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "saved configuration"
    );
    Ok(())
}
