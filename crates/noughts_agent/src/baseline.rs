//! A deliberately naive strategy, useful as a sparring partner.

use crate::MoveDecider;
use noughts_board::{Grid, available_moves};
use tracing::debug;

/// Always plays the first empty cell in row-major order.
///
/// It never looks for wins or blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveDecider for FirstAvailable {
    fn decide_move(&self, grid: &Grid, _is_opening_move: bool) -> Option<usize> {
        let position = available_moves(grid).first().map(|coord| coord.position());
        debug!(?position, "Baseline chose first empty cell");
        position
    }
}
