//! Cell addressing: Cartesian coordinates and linear positions.
//!
//! ```text
//!     x |     0    |     1    |    2
//!   y   |          |          |
//! ------+----------+----------+----------
//!   0   | 0: (0, 0)| 1: (1, 0)| 2: (2, 0)
//!   1   | 3: (0, 1)| 4: (1, 1)| 5: (2, 1)
//!   2   | 6: (0, 2)| 7: (1, 2)| 8: (2, 2)
//! ```
//!
//! Positions are what players click on; the search works in coordinates.

use crate::CoordError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Maps a Cartesian coordinate to its linear position (`x + 3y`).
pub fn xy_to_position(x: usize, y: usize) -> usize {
    x + 3 * y
}

/// Maps a linear position to its Cartesian coordinate `(x, y)`.
pub fn position_to_xy(position: usize) -> (usize, usize) {
    (position % 3, position / 3)
}

/// A Cartesian cell address: `x` is the column, `y` the row.
///
/// Both axes are always on the board. The only ways to build one are
/// [`Coord::new`], [`Coord::from_position`] and [`Position::coord`]:
///
/// ```compile_fail
/// let off_board = noughts_board::Coord { x: 3, y: 0 };
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Getters, Serialize, Deserialize,
)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    /// Column, 0-2.
    x: usize,
    /// Row, 0-2.
    y: usize,
}

impl Coord {
    /// Creates a coordinate if both axes are on the board.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        (x < 3 && y < 3).then_some(Self { x, y })
    }

    /// Creates a coordinate from a linear position (0-8).
    pub fn from_position(position: usize) -> Option<Self> {
        if position >= 9 {
            return None;
        }
        let (x, y) = position_to_xy(position);
        Some(Self { x, y })
    }

    /// Linear position of this coordinate.
    pub fn position(self) -> usize {
        xy_to_position(self.x, self.y)
    }

    /// Whether the cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.x == self.y
    }

    /// Whether the cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.x + self.y == 2
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(x, y).ok_or(CoordError::OffBoard { x, y })
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named cell on the board (position 0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates a position from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Cartesian coordinate of this cell.
    pub fn coord(self) -> Coord {
        let (x, y) = position_to_xy(self.to_index());
        Coord { x, y }
    }

    /// Named position for a coordinate.
    pub fn from_coord(coord: Coord) -> Self {
        Self::ALL[coord.position()]
    }

    /// Parses a label ("center", "top-left") or a position number (0-8).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl From<Position> for Coord {
    fn from(position: Position) -> Self {
        position.coord()
    }
}

impl From<Coord> for Position {
    fn from(coord: Coord) -> Self {
        Position::from_coord(coord)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
