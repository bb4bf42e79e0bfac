//! Winning lines and per-player line counters.

use crate::{Coord, Grid, Marker};
use serde::{Deserialize, Serialize};

/// One of the eight three-cell lines, in counter order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Line {
    /// Left column (x = 0).
    Column0,
    /// Middle column (x = 1).
    Column1,
    /// Right column (x = 2).
    Column2,
    /// Top row (y = 0).
    Row0,
    /// Middle row (y = 1).
    Row1,
    /// Bottom row (y = 2).
    Row2,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Counter slot for this line.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the cell at `coord` belongs to this line.
    pub fn contains(self, coord: Coord) -> bool {
        match self {
            Line::Column0 => *coord.x() == 0,
            Line::Column1 => *coord.x() == 1,
            Line::Column2 => *coord.x() == 2,
            Line::Row0 => *coord.y() == 0,
            Line::Row1 => *coord.y() == 1,
            Line::Row2 => *coord.y() == 2,
            Line::MainDiagonal => coord.on_main_diagonal(),
            Line::AntiDiagonal => coord.on_anti_diagonal(),
        }
    }
}

/// Eight counters, one per [`Line`], counting cells a player holds on it.
///
/// A counter reaching 3 means the player owns the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineScores([u8; 8]);

impl LineScores {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a newly held cell: its column, its row, and any diagonal it lies on.
    pub fn record(&mut self, coord: Coord) {
        for line in <Line as strum::IntoEnumIterator>::iter().filter(|line| line.contains(coord)) {
            self.0[line.index()] += 1;
        }
    }

    /// Rebuilds the counters for `marker` by scanning every cell of `grid`.
    pub fn from_grid(grid: &Grid, marker: &Marker) -> Self {
        let mut scores = Self::new();
        for (coord, cell) in grid.iter() {
            if cell.marker() == Some(marker) {
                scores.record(coord);
            }
        }
        scores
    }

    /// Count for a single line.
    pub fn get(&self, line: Line) -> u8 {
        self.0[line.index()]
    }

    /// Whether any line is complete.
    pub fn has_line(&self) -> bool {
        self.0.contains(&3)
    }

    /// The first completed line, if any.
    pub fn completed_line(&self) -> Option<Line> {
        <Line as strum::IntoEnumIterator>::iter().find(|line| self.get(*line) == 3)
    }

    /// Raw counters in [`Line`] order.
    pub fn as_array(&self) -> &[u8; 8] {
        &self.0
    }
}
