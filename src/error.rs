//! Error types and logical result codes.
//!
//! Every failure a caller can see is an input error detected before the
//! simulation starts. Once a [`Grid`](crate::Grid) exists, stepping it
//! cannot fail.

use crate::grid::{MAX_HEIGHT, MAX_WIDTH};
use std::fmt;
use std::io;
use thiserror::Error;

/// Grid dimensions outside `1..=MAX_WIDTH` x `1..=MAX_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("grid dimensions {width}x{height} are outside 1..={} x 1..={}", MAX_WIDTH, MAX_HEIGHT)]
pub struct InvalidDimension {
    /// Requested width.
    pub width: u32,
    /// Requested height.
    pub height: u32,
}

/// Why a configuration document was rejected as `BadDimension`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The second line is not `<width>,<height>`.
    #[error("dimension line is not of the form `<width>,<height>`")]
    Malformed,
    /// The declared dimensions are out of range.
    #[error(transparent)]
    OutOfRange(#[from] InvalidDimension),
    /// A row ended before reaching the declared width.
    #[error("row {row} has {found} cells, expected {width}")]
    ShortRow {
        /// Zero-based row index.
        row: u16,
        /// Cells seen before the newline.
        found: u16,
        /// Declared width.
        width: u16,
    },
    /// A row carried more cells than the declared width.
    #[error("row {row} is longer than the declared width {width}")]
    LongRow {
        /// Zero-based row index.
        row: u16,
        /// Declared width.
        width: u16,
    },
    /// The document ended before the declared number of rows.
    #[error("expected {expected} rows, found {found}")]
    MissingRows {
        /// Declared height.
        expected: u16,
        /// Complete rows read.
        found: u16,
    },
    /// Content continued after the declared number of rows.
    #[error("content continues past the declared {expected} rows")]
    ExtraRows {
        /// Declared height.
        expected: u16,
    },
}

/// Errors produced while decoding a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("cannot read configuration: {0}")]
    BadFile(#[from] io::Error),
    /// The first line is not exactly `asciigol`.
    #[error("missing `asciigol` header line")]
    BadHeader,
    /// Dimension line or row/column counts are wrong.
    #[error("bad dimension: {0}")]
    BadDimension(#[from] DimensionError),
    /// A data character other than `0`, `1` or a row terminator.
    #[error("bad cell {found:?} at row {row}, column {col}")]
    BadCell {
        /// Zero-based row index.
        row: u16,
        /// Zero-based column index.
        col: u16,
        /// The offending character.
        found: char,
    },
}

impl From<InvalidDimension> for ConfigError {
    fn from(e: InvalidDimension) -> Self {
        Self::BadDimension(DimensionError::OutOfRange(e))
    }
}

/// Errors that end a run before or during iteration.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configuration file was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Random initialization was asked for an unsupported size.
    #[error(transparent)]
    Dimension(#[from] InvalidDimension),
    /// The renderer or waiter failed to talk to the terminal.
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

impl RunError {
    /// The logical result code for this error, if it belongs to the
    /// input-error taxonomy.
    #[must_use]
    pub fn code(&self) -> Option<ResultCode> {
        match self {
            Self::Config(e) => Some(ResultCode::from(e)),
            Self::Dimension(_) => Some(ResultCode::BadDimension),
            Self::Terminal(_) => None,
        }
    }
}

/// The complete set of outcomes a caller must handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ResultCode {
    /// The loop ended without converging (external interruption).
    Ok = 0,
    /// The grid reached a fixed point.
    Converged = 1,
    /// The configuration file could not be read.
    BadFile = 2,
    /// The configuration header is wrong.
    BadHeader = 3,
    /// Dimensions are malformed, out of range, or inconsistent with the rows.
    BadDimension = 4,
    /// A cell character is not `0` or `1`.
    BadCell = 5,
}

impl ResultCode {
    /// Numeric value of the code.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Whether the run ended normally.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Converged)
    }

    /// Upper-case name of the code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Converged => "CONVERGED",
            Self::BadFile => "BAD_FILE",
            Self::BadHeader => "BAD_HEADER",
            Self::BadDimension => "BAD_DIMENSION",
            Self::BadCell => "BAD_CELL",
        }
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

impl From<&ConfigError> for ResultCode {
    fn from(e: &ConfigError) -> Self {
        match e {
            ConfigError::BadFile(_) => Self::BadFile,
            ConfigError::BadHeader => Self::BadHeader,
            ConfigError::BadDimension(_) => Self::BadDimension,
            ConfigError::BadCell { .. } => Self::BadCell,
        }
    }
}
