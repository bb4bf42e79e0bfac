//! Error types for the board engine.
//!
//! Rule violations during play (occupied cell, inactive game, bad position)
//! are not errors; they come back as [`crate::PlayOutcome`] sentinels.

use crate::Marker;

/// A marker string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MarkerError {
    /// Markers must contain at least one character.
    #[display("Marker must not be empty")]
    Empty,
}

/// A coordinate fell outside the 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CoordError {
    /// At least one axis is 3 or more.
    #[display("Coordinate ({}, {}) is off the board", x, y)]
    OffBoard {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

/// A textual grid could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    CellCount(#[error(not(source))] usize),
}

/// Two players cannot share a game with these markers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// Both players picked the same marker.
    #[display("Both players chose marker {}; markers must differ", _0)]
    DuplicateMarker(#[error(not(source))] Marker),
}
