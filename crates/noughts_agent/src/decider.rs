//! The capability every move-choosing strategy offers.

use noughts_board::Grid;

/// Picks a position (0-8) to play on a grid snapshot.
pub trait MoveDecider {
    /// Chooses a move, or `None` when there is nothing sensible to play.
    ///
    /// `is_opening_move` is true only for the very first move of a game.
    fn decide_move(&self, grid: &Grid, is_opening_move: bool) -> Option<usize>;
}
