//! The live game session.

use crate::{Cell, Coord, Grid, Marker, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of asking the session to play a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// The move was accepted; this marker now occupies the cell.
    Placed(Marker),
    /// The cell is already occupied. Nothing changed.
    Illegal,
    /// The game is not active or the position is off the board. Nothing changed.
    Ignored,
}

impl PlayOutcome {
    /// Whether the move changed the grid.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayOutcome::Placed(_))
    }
}

impl std::fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayOutcome::Placed(marker) => write!(f, "{}", marker),
            PlayOutcome::Illegal => write!(f, "ILLEGAL"),
            PlayOutcome::Ignored => Ok(()),
        }
    }
}

/// Result of [`GameSession::winner`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The named player completed a line.
    Winner(String),
    /// The grid filled up without a line.
    Draw,
    /// Nothing decided yet.
    Ongoing,
}

impl GameOutcome {
    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Winner(name) => write!(f, "{}", name),
            GameOutcome::Draw => write!(f, "DRAW"),
            GameOutcome::Ongoing => Ok(()),
        }
    }
}

/// Two players, the live grid, whose turn it is, and whether play is open.
///
/// Created once with [`GameSession::new`], then re-initialized for every
/// game with [`GameSession::setup`]. The only mutation during a game is
/// [`GameSession::play_at`] / [`GameSession::play_xy`] for the player whose
/// turn it is.
///
/// A session only comes into being through `setup`; it cannot be restored
/// from serialized data:
///
/// ```compile_fail
/// fn restore<T: serde::de::DeserializeOwned>() {}
/// restore::<noughts_board::GameSession>();
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    pub(crate) players: Vec<Player>,
    pub(crate) grid: Grid,
    pub(crate) turn: usize,
    pub(crate) first_turn: usize,
    pub(crate) can_play: bool,
}

impl GameSession {
    /// Creates an uninitialized session. Nothing can be played until
    /// [`GameSession::setup`] is called.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new game.
    ///
    /// Existing players are kept and updated with the new names and markers;
    /// otherwise two players are created. Counters, win flags and the grid are
    /// cleared and play opens.
    ///
    /// Turn policy: whichever player holds the marker `"X"` moves first. If
    /// neither does, player 1 moves first.
    ///
    /// Marker uniqueness is not checked here; see
    /// [`crate::validate_markers`].
    #[instrument(skip(self, name1, name2))]
    pub fn setup(
        &mut self,
        name1: impl Into<String>,
        marker1: Marker,
        name2: impl Into<String>,
        marker2: Marker,
    ) {
        let (name1, name2) = (name1.into(), name2.into());

        if self.players.len() == 2 {
            self.players[0].rename(&name1);
            self.players[0].remark(&marker1);
            self.players[1].rename(&name2);
            self.players[1].remark(&marker2);
            for player in &mut self.players {
                player.reset();
            }
            debug!("Reusing existing players");
        } else {
            self.players = vec![Player::new(name1, marker1), Player::new(name2, marker2)];
            debug!("Created players");
        }

        let x = Marker::x();
        self.turn = if self.players[1].marker() == &x && self.players[0].marker() != &x {
            1
        } else {
            0
        };
        self.first_turn = self.turn;
        self.grid = Grid::new();
        self.can_play = true;

        info!(
            first = %self.players[self.turn].name(),
            "Game set up"
        );
    }

    /// Plays the current player's marker at a linear position (0-8).
    #[instrument(skip(self))]
    pub fn play_at(&mut self, position: usize) -> PlayOutcome {
        match Coord::from_position(position) {
            Some(coord) => self.play_coord(coord),
            None => {
                debug!(position, "Position off the board");
                PlayOutcome::Ignored
            }
        }
    }

    /// Plays the current player's marker at a Cartesian coordinate.
    #[instrument(skip(self))]
    pub fn play_xy(&mut self, x: usize, y: usize) -> PlayOutcome {
        match Coord::new(x, y) {
            Some(coord) => self.play_coord(coord),
            None => {
                debug!(x, y, "Coordinate off the board");
                PlayOutcome::Ignored
            }
        }
    }

    fn play_coord(&mut self, coord: Coord) -> PlayOutcome {
        if !self.can_play {
            debug!("Game is not active");
            return PlayOutcome::Ignored;
        }

        if !self.grid.is_empty_at(coord) {
            warn!(%coord, "Illegal move: position occupied");
            return PlayOutcome::Illegal;
        }

        let player = &mut self.players[self.turn];
        let marker = player.marker().clone();
        player.claim(coord);
        self.grid.set(coord, Cell::Occupied(marker.clone()));

        if let Some(line) = player.completed_line() {
            player.set_won();
            self.can_play = false;
            info!(winner = %player.name(), %marker, %line, "Line completed");
        } else {
            self.turn = 1 - self.turn;
            if self.grid.is_full() {
                self.can_play = false;
                info!("Grid full without a line");
            }
        }

        debug!(%coord, %marker, "Move placed");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        PlayOutcome::Placed(marker)
    }

    /// Which player moves next, 1-based.
    pub fn current_turn(&self) -> usize {
        self.turn + 1
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Whether moves are accepted.
    pub fn can_play(&self) -> bool {
        self.can_play
    }

    /// Both players, or none before the first setup.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.turn)
    }

    /// The player who moved first this game, 1-based.
    pub fn first_turn(&self) -> usize {
        self.first_turn + 1
    }

    /// Number of accepted moves this game.
    pub fn move_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// Reports the game result.
    ///
    /// A flagged winner is reported by name. Otherwise a full grid is a draw
    /// and closes play. Anything else is still ongoing.
    #[instrument(skip(self))]
    pub fn winner(&mut self) -> GameOutcome {
        if let Some(player) = self.players.iter().find(|p| p.has_won()) {
            return GameOutcome::Winner(player.name().clone());
        }

        if !self.players.is_empty() && self.grid.is_full() {
            self.can_play = false;
            return GameOutcome::Draw;
        }

        GameOutcome::Ongoing
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::error!(%descriptions, "Session invariant violated");
            debug_assert!(false, "Session invariant violated: {}", descriptions);
        }
    }
}
