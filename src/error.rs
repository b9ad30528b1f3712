//! Error types surfaced by the steering core and its loaders.
use thiserror::Error;

/// Failure of a fallible vector operation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VectorError {
    /// An input component or limit was NaN or infinite.
    #[error("vector operation received a non-finite value")]
    NonFinite,
    /// The length limit was negative.
    #[error("length limit {0} is negative")]
    NegativeLimit(f32),
    /// The vector could not be normalised.
    #[error("cannot normalise a degenerate vector")]
    Degenerate,
}

/// Rejected avoidance configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field that must be strictly positive and finite was not.
    #[error("`{field}` must be positive and finite, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value supplied for it.
        value: f32,
    },
    /// The default tolerance exceeds the maximum tolerance.
    #[error("default tolerance {default} exceeds maximum tolerance {max}")]
    ToleranceOrder {
        /// Configured default tolerance.
        default: f32,
        /// Configured maximum tolerance.
        max: f32,
    },
    /// The maximum tolerance exceeds a full turn.
    #[error("maximum tolerance {0} exceeds a full turn")]
    ToleranceTooWide(f32),
    /// The braking ratio falls outside `(0, 1]`.
    #[error("braking ratio {0} must lie in (0, 1]")]
    BrakingRatio(f32),
    /// The terrain sampling radius is negative.
    #[error("sample radius {0} must not be negative")]
    SampleRadius(i32),
}

/// Failure while building a [`crate::map::TileMap`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// The map text contained no rows.
    #[error("map has no rows")]
    Empty,
    /// A row's width differs from the first row's.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        /// Zero-based row index, counted from the top of the text.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A glyph other than `.` or `#` was found.
    #[error("unknown terrain glyph {glyph:?} at column {column}, row {row}")]
    UnknownGlyph {
        /// The unexpected character.
        glyph: char,
        /// Zero-based column.
        column: usize,
        /// Zero-based row, counted from the top of the text.
        row: usize,
    },
    /// The map dimensions do not fit the tile coordinate type.
    #[error("map dimension {0} is too large")]
    TooLarge(usize),
}
