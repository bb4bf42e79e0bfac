//! Move generation and hypothetical play.

use crate::{Cell, Coord, Grid, Marker};

/// Coordinates of every empty cell, scanning rows top to bottom and each
/// row left to right.
///
/// The order is part of the contract: search tie-breaks pick the first of
/// equally scored moves in this order.
pub fn available_moves(grid: &Grid) -> Vec<Coord> {
    grid.iter()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(coord, _)| coord)
        .collect()
}

/// Returns a copy of `grid` with `marker` written at `coord`.
///
/// The input is never modified. Legality is not checked: an occupied target
/// is simply overwritten in the copy.
pub fn simulate(grid: &Grid, coord: Coord, marker: &Marker) -> Grid {
    let mut next = grid.clone();
    next.set(coord, Cell::Occupied(marker.clone()));
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_all_moves_on_empty_grid() {
        let moves = available_moves(&Grid::new());
        let positions: Vec<usize> = moves.iter().map(|c| c.position()).collect();
        assert_eq!(positions, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_moves_skip_occupied_in_row_major_order() {
        let grid: Grid = "X.O/.X./O..".parse().unwrap();
        let positions: Vec<usize> = available_moves(&grid).iter().map(|c| c.position()).collect();
        assert_eq!(positions, vec![1, 3, 5, 7, 8]);
        assert_eq!(positions.len() + grid.occupied_count(), 9);
    }

    #[test]
    fn test_no_moves_on_full_grid() {
        let grid: Grid = "XOX/OXX/OXO".parse().unwrap();
        assert!(available_moves(&grid).is_empty());
    }

    #[test]
    fn test_simulate_leaves_input_alone() {
        let grid: Grid = "X........".parse().unwrap();
        let before = grid.clone();
        let next = simulate(&grid, Position::Center.coord(), &Marker::o());

        assert_eq!(grid, before);
        for (coord, cell) in next.iter() {
            if coord == Position::Center.coord() {
                assert_eq!(cell, &Cell::Occupied(Marker::o()));
            } else {
                assert_eq!(cell, grid.get(coord));
            }
        }
    }
}
