//! The 3x3 grid and its cells.

use crate::{Coord, GridParseError, Marker};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the nine grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Stamped with a player's marker.
    Occupied(Marker),
}

impl Cell {
    /// Whether the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The marker in this cell, if any.
    pub fn marker(&self) -> Option<&Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

/// 3x3 board of cells, stored row-major (`position = x + 3y`).
///
/// A `Grid` is a plain value: cloning it yields an independent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; 9],
}

impl Grid {
    /// Creates an all-empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Cell at a coordinate.
    pub fn get(&self, coord: Coord) -> &Cell {
        &self.cells[coord.position()]
    }

    /// Cell at a linear position, or `None` when out of range.
    pub fn cell_at(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Whether the cell at a coordinate is empty.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Writes a cell. Rule checks are the caller's job.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.position()] = cell;
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Iterates `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells.iter().enumerate().filter_map(|(position, cell)| {
            Coord::from_position(position).map(|coord| (coord, cell))
        })
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Number of cells holding `marker`.
    pub fn count_of(&self, marker: &Marker) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.marker() == Some(marker))
            .count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match &self.cells[pos] {
                    Cell::Empty => write!(f, "{}", pos + 1)?,
                    Cell::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// A blank token is an empty cell; anything else is a marker.
fn cell_from_token(token: &str) -> Cell {
    Marker::new(token.trim()).map_or(Cell::Empty, Cell::Occupied)
}

/// Parses nine one-character symbols.
///
/// `.` and `_` are empty cells; whitespace, `/` and `|` separate rows and are
/// skipped. Anything else becomes a one-character marker.
impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();
        let symbols: [char; 9] = symbols
            .try_into()
            .map_err(|rest: Vec<char>| GridParseError::CellCount(rest.len()))?;

        Ok(Grid::from_cells(symbols.map(|symbol| match symbol {
            '.' | '_' => Cell::Empty,
            other => cell_from_token(other.encode_utf8(&mut [0; 4])),
        })))
    }
}

/// Builds a grid from nine strings, `" "` or `""` meaning empty.
impl From<[&str; 9]> for Grid {
    fn from(tokens: [&str; 9]) -> Self {
        Grid::from_cells(tokens.map(cell_from_token))
    }
}
