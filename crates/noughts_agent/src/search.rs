//! Exhaustive minimax over grid snapshots.
//!
//! Scores are from the agent's point of view: `WIN_SCORE - depth` for an
//! agent win, `depth - WIN_SCORE` for a loss, `0` for a draw. Faster wins and
//! slower losses therefore score better.
//!
//! Ply parity: `depth` is 0 on the grid the agent is asked about and each
//! simulated move adds one. Odd plies place the agent's own marker, even plies
//! the opponent's, so the search is only meaningful when the agent is the side
//! to move on the grid it receives.

use crate::Sides;
use noughts_board::{BoardStatus, Coord, Grid, available_moves, is_game_complete, simulate};

/// Score magnitude of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// What one search frame found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Backed-up minimax score of the grid.
    pub score: i32,
    /// The child move that achieves `score`; `None` on a terminal grid.
    pub best_move: Option<Coord>,
}

impl Evaluation {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Scores `grid` at recursion depth `depth` and reports the best child move.
///
/// Call with `depth = 0` on the real position. Ties go to the first move in
/// row-major order.
pub fn minimax(grid: &Grid, sides: &Sides, depth: i32) -> Evaluation {
    if let Some(score) = terminal_score(grid, sides, depth) {
        return Evaluation::leaf(score);
    }

    let depth = depth + 1;
    let own_turn = depth % 2 == 1;
    select(scored_children(grid, sides, depth, own_turn), own_turn)
}

/// Scores of every legal move on `grid` for the agent, in row-major order.
///
/// Empty when the grid is already decided.
pub fn score_moves(grid: &Grid, sides: &Sides) -> Vec<(Coord, i32)> {
    if is_game_complete(grid).is_terminal() {
        return Vec::new();
    }
    scored_children(grid, sides, 1, true)
}

fn terminal_score(grid: &Grid, sides: &Sides, depth: i32) -> Option<i32> {
    match is_game_complete(grid) {
        BoardStatus::Incomplete => None,
        BoardStatus::Won(marker) if &marker == sides.own() => Some(WIN_SCORE - depth),
        BoardStatus::Won(marker) if &marker == sides.opponent() => Some(depth - WIN_SCORE),
        BoardStatus::Won(_) | BoardStatus::Draw => Some(0),
    }
}

// Each child gets its own snapshot, so siblings never see each other's moves.
fn scored_children(grid: &Grid, sides: &Sides, depth: i32, own_turn: bool) -> Vec<(Coord, i32)> {
    let marker = if own_turn { sides.own() } else { sides.opponent() };
    available_moves(grid)
        .into_iter()
        .map(|coord| {
            let child = simulate(grid, coord, marker);
            (coord, minimax(&child, sides, depth).score)
        })
        .collect()
}

fn select(children: Vec<(Coord, i32)>, maximizing: bool) -> Evaluation {
    let mut best: Option<(Coord, i32)> = None;
    for (coord, score) in children {
        let better = match best {
            None => true,
            Some((_, current)) if maximizing => score > current,
            Some((_, current)) => score < current,
        };
        if better {
            best = Some((coord, score));
        }
    }

    match best {
        Some((coord, score)) => Evaluation {
            score,
            best_move: Some(coord),
        },
        None => Evaluation::leaf(0),
    }
}
