//! Unbeatable tic-tac-toe agent.
//!
//! [`MinimaxAgent`] searches the full remaining game tree with plain minimax
//! (no pruning, no caching) over snapshots built with the board engine's pure
//! API, and returns the move with the best guaranteed outcome.
//!
//! ```
//! use noughts_agent::{MinimaxAgent, MoveDecider};
//! use noughts_board::{Grid, Marker};
//!
//! let mut agent = MinimaxAgent::new();
//! agent.configure(true, Marker::x(), Marker::o());
//!
//! let grid: Grid = "XX./OO./...".parse().unwrap();
//! assert_eq!(agent.decide_move(&grid, false), Some(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod agent;
mod baseline;
mod decider;
mod search;

pub use agent::{MinimaxAgent, OPENING_POSITION, Sides};
pub use baseline::FirstAvailable;
pub use decider::MoveDecider;
pub use search::{Evaluation, WIN_SCORE, minimax, score_moves};
