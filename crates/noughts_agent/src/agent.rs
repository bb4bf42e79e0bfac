//! The minimax agent and its configuration.

use crate::{MoveDecider, minimax};
use derive_getters::Getters;
use derive_new::new;
use noughts_board::{Grid, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Position the agent opens with when it moves first (top-left).
///
/// Any first move holds the draw; this one skips a full-tree search.
pub const OPENING_POSITION: usize = 0;

/// The marker the agent plays for and the one it plays against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, new, Serialize, Deserialize)]
pub struct Sides {
    /// Maximizing side: the agent's own marker.
    own: Marker,
    /// Minimizing side: the opponent's marker.
    opponent: Marker,
}

/// Plays perfect tic-tac-toe by exhaustive minimax.
///
/// The agent holds no game state of its own beyond its [`Sides`]; every call
/// searches the snapshot it is handed.
#[derive(Debug, Clone, Default)]
pub struct MinimaxAgent {
    sides: Option<Sides>,
}

impl MinimaxAgent {
    /// Creates a disabled agent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the agent with a fresh pair of markers, or disables it.
    ///
    /// The markers stay fixed until the next call; there is no other way to
    /// change them.
    #[instrument(skip(self))]
    pub fn configure(&mut self, enabled: bool, own: Marker, opponent: Marker) {
        if enabled {
            self.enable(own, opponent);
        } else {
            self.disable();
        }
    }

    /// Enables the agent for `own` against `opponent`.
    #[instrument(skip(self))]
    pub fn enable(&mut self, own: Marker, opponent: Marker) {
        info!(%own, %opponent, "Agent enabled");
        self.sides = Some(Sides::new(own, opponent));
    }

    /// Disables the agent. A disabled agent must not be asked for moves.
    #[instrument(skip(self))]
    pub fn disable(&mut self) {
        debug!("Agent disabled");
        self.sides = None;
    }

    /// Whether the agent is enabled.
    pub fn is_enabled(&self) -> bool {
        self.sides.is_some()
    }

    /// The configured markers while enabled.
    pub fn sides(&self) -> Option<&Sides> {
        self.sides.as_ref()
    }
}

impl MoveDecider for MinimaxAgent {
    /// Returns the position of the best move for the agent's marker.
    ///
    /// The agent must be the side to move on `grid`. On the opening move it
    /// answers [`OPENING_POSITION`] without searching. Yields `None` when
    /// disabled or when the grid is already decided.
    #[instrument(skip(self, grid), fields(occupied = grid.occupied_count()))]
    fn decide_move(&self, grid: &Grid, is_opening_move: bool) -> Option<usize> {
        let Some(sides) = &self.sides else {
            warn!("Disabled agent was asked for a move");
            return None;
        };

        if is_opening_move {
            debug!(position = OPENING_POSITION, "Playing the canonical opening");
            return Some(OPENING_POSITION);
        }

        let evaluation = minimax(grid, sides, 0);
        match evaluation.best_move {
            Some(coord) => {
                info!(
                    marker = %sides.own(),
                    position = coord.position(),
                    score = evaluation.score,
                    "Agent chose move"
                );
                Some(coord.position())
            }
            None => {
                warn!("No move available; grid is already decided");
                None
            }
        }
    }
}
