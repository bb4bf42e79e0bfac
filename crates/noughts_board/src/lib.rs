//! Tic-tac-toe board engine.
//!
//! Two surfaces live here:
//!
//! - **Live play**: [`GameSession`] owns two [`Player`]s, the grid, the turn
//!   pointer and the `can_play` flag. Moves go through
//!   [`GameSession::play_at`] and come back as a [`PlayOutcome`] sentinel.
//! - **Pure evaluation**: [`is_game_complete`], [`available_moves`] and
//!   [`simulate`] work on any [`Grid`] snapshot and never touch a session.
//!   The search agent builds on these alone.
//!
//! ```
//! use noughts_board::{GameSession, Marker, PlayOutcome};
//!
//! let mut session = GameSession::new();
//! session.setup("Nadya", Marker::o(), "DOM", Marker::x());
//! assert_eq!(session.current_turn(), 2);
//! assert_eq!(session.play_at(4), PlayOutcome::Placed(Marker::x()));
//! assert_eq!(session.play_at(4), PlayOutcome::Illegal);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod invariants;
mod lines;
mod marker;
mod player;
mod position;
mod rules;
mod session;

pub use error::{CoordError, GridParseError, MarkerError, SetupError};
pub use grid::{Cell, Grid};
pub use invariants::{
    CanPlayMatchesStatus, Invariant, InvariantSet, InvariantViolation, ScoresMatchGrid,
    SessionInvariants, TurnsAlternate,
};
pub use lines::{Line, LineScores};
pub use marker::{MARKER_CATALOG, Marker};
pub use player::Player;
pub use position::{Coord, Position, position_to_xy, xy_to_position};
pub use rules::{BoardStatus, available_moves, is_game_complete, simulate, validate_markers};
pub use session::{GameOutcome, GameSession, PlayOutcome};
