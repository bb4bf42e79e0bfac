//! Terminal-state detection for arbitrary grids.

use crate::{Grid, LineScores, Marker};
use serde::{Deserialize, Serialize};

/// Status of a grid as seen by [`is_game_complete`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardStatus {
    /// This marker owns a complete line.
    Won(Marker),
    /// Every cell is occupied and nobody owns a line.
    Draw,
    /// Empty cells remain and nobody owns a line.
    Incomplete,
}

impl BoardStatus {
    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BoardStatus::Incomplete)
    }
}

impl std::fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardStatus::Won(marker) => write!(f, "{}", marker),
            BoardStatus::Draw => write!(f, "DRAW"),
            BoardStatus::Incomplete => write!(f, "INCOMPLETE"),
        }
    }
}

/// Classifies any grid as won, drawn or incomplete.
///
/// Up to two distinct markers are picked up in row-major order of first
/// appearance and their line counters are rebuilt from scratch; cells holding
/// a third marker are ignored. If both markers somehow own a line, the second
/// one reported wins.
pub fn is_game_complete(grid: &Grid) -> BoardStatus {
    let mut tallies: Vec<(&Marker, LineScores)> = Vec::with_capacity(2);
    let mut filled = true;

    for (coord, cell) in grid.iter() {
        let Some(marker) = cell.marker() else {
            filled = false;
            continue;
        };

        if let Some((_, scores)) = tallies.iter_mut().find(|(seen, _)| *seen == marker) {
            scores.record(coord);
        } else if tallies.len() < 2 {
            let mut scores = LineScores::new();
            scores.record(coord);
            tallies.push((marker, scores));
        }
    }

    let winner = tallies
        .iter()
        .rev()
        .find(|(_, scores)| scores.has_line())
        .map(|(marker, _)| (*marker).clone());

    match winner {
        Some(marker) => BoardStatus::Won(marker),
        None if filled => BoardStatus::Draw,
        None => BoardStatus::Incomplete,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(s: &str) -> BoardStatus {
        is_game_complete(&s.parse().unwrap())
    }

    #[test]
    fn test_blank_grid_incomplete() {
        assert_eq!(is_game_complete(&Grid::new()), BoardStatus::Incomplete);
    }

    #[test]
    fn test_single_marker_win() {
        assert_eq!(status("XXX/.../..."), BoardStatus::Won(Marker::x()));
    }

    #[test]
    fn test_column_win() {
        assert_eq!(status("XO./XO./.O."), BoardStatus::Won(Marker::o()));
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        assert_eq!(status("XOX/OXO/OXX"), BoardStatus::Won(Marker::x()));
    }

    #[test]
    fn test_full_board_draw() {
        assert_eq!(status("XOX/OXX/OXO"), BoardStatus::Draw);
    }

    #[test]
    fn test_partial_board_incomplete() {
        assert_eq!(status("XO./.X./..O"), BoardStatus::Incomplete);
    }

    #[test]
    fn test_arbitrary_markers() {
        let grid = Grid::from(["@", "#", "@", "#", "@", " ", " ", " ", "@"]);
        assert_eq!(
            is_game_complete(&grid),
            BoardStatus::Won(Marker::new("@").unwrap())
        );
    }

    #[test]
    fn test_display_sentinels() {
        assert_eq!(BoardStatus::Draw.to_string(), "DRAW");
        assert_eq!(BoardStatus::Incomplete.to_string(), "INCOMPLETE");
        assert_eq!(BoardStatus::Won(Marker::o()).to_string(), "O");
    }
}
