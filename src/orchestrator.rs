//! Game orchestration between two seats.

use crate::config::MatchConfig;
use crate::seats::{ComputerSeat, HumanSeat, Seat};
use anyhow::Result;
use noughts_board::{GameOutcome, GameSession, Grid, Marker, PlayOutcome, validate_markers};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to whatever renders the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A game was set up; `first` is the 1-based seat that moves first.
    Started {
        /// Seat that opens.
        first: usize,
    },
    /// A computer seat is about to think.
    AgentThinking {
        /// Seat name.
        seat: String,
    },
    /// A move was accepted.
    MoveMade {
        /// Seat name.
        seat: String,
        /// Board index (0-8).
        position: usize,
        /// Marker placed.
        marker: Marker,
        /// Grid after the move.
        grid: Grid,
    },
    /// The session refused a move because the cell was taken.
    MoveRejected {
        /// Seat name.
        seat: String,
        /// Board index (0-8).
        position: usize,
    },
    /// The game ended.
    GameOver {
        /// Winner's name or draw.
        outcome: GameOutcome,
        /// Final grid.
        grid: Grid,
    },
}

/// One accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// 1-based seat that moved.
    pub seat: usize,
    /// Board index (0-8).
    pub position: usize,
    /// Marker placed.
    pub marker: Marker,
}

/// How a finished game went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Winner's name or draw.
    pub outcome: GameOutcome,
    /// Accepted moves in order.
    pub moves: Vec<MoveRecord>,
    /// Final grid.
    pub grid: Grid,
}

/// Runs games between two seats over one [`GameSession`].
pub struct Orchestrator {
    session: GameSession,
    seats: [Box<dyn Seat>; 2],
    markers: [Marker; 2],
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Orchestrator {
    /// Creates an orchestrator for two seats and their markers.
    ///
    /// Fails when the markers coincide.
    #[instrument(skip(first, second), fields(first_seat = %first.name(), second_seat = %second.name()))]
    pub fn new(
        first: Box<dyn Seat>,
        first_marker: Marker,
        second: Box<dyn Seat>,
        second_marker: Marker,
    ) -> Result<Self> {
        validate_markers(&first_marker, &second_marker)?;
        Ok(Self {
            session: GameSession::new(),
            seats: [first, second],
            markers: [first_marker, second_marker],
            event_tx: None,
        })
    }

    /// Builds seats from configuration: humans on stdin/stdout, computers
    /// backed by the minimax agent.
    #[instrument(skip(config))]
    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        let [first, second] = config.seats();
        let delay = Duration::from_millis(*config.thinking_delay_ms());

        let build = |seat: &crate::config::SeatConfig, opponent: &Marker| -> Box<dyn Seat> {
            if *seat.computer() {
                Box::new(ComputerSeat::new(
                    seat.name(),
                    seat.marker().clone(),
                    opponent.clone(),
                    delay,
                ))
            } else {
                Box::new(HumanSeat::stdio(seat.name().clone()))
            }
        };

        Self::new(
            build(first, second.marker()),
            first.marker().clone(),
            build(second, first.marker()),
            second.marker().clone(),
        )
    }

    /// Publishes [`GameEvent`]s on `tx` from now on.
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.event_tx {
            if tx.send(event).is_err() {
                debug!("Event receiver dropped");
            }
        }
    }

    /// Plays one full game from a fresh setup and reports the result.
    ///
    /// A human picking a taken cell is asked again. A computer seat that
    /// cannot produce a playable move aborts the game with an error.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<MatchReport> {
        let [first_marker, second_marker] = self.markers.clone();
        let first_name = self.seats[0].name().to_string();
        let second_name = self.seats[1].name().to_string();
        self.session
            .setup(first_name, first_marker, second_name, second_marker);

        info!(first = self.session.current_turn(), "Starting game");
        self.emit(GameEvent::Started {
            first: self.session.current_turn(),
        });

        let mut moves = Vec::new();

        loop {
            let outcome = self.session.winner();
            if outcome.is_over() {
                info!(%outcome, moves = moves.len(), "Game over");
                let grid = self.session.grid().clone();
                self.emit(GameEvent::GameOver {
                    outcome: outcome.clone(),
                    grid: grid.clone(),
                });
                return Ok(MatchReport {
                    outcome,
                    moves,
                    grid,
                });
            }

            let turn = self.session.current_turn();
            let is_opening_move = self.session.move_count() == 0;
            let seat_name = self.seats[turn - 1].name().to_string();
            let is_computer = self.seats[turn - 1].is_computer();

            if is_computer {
                self.emit(GameEvent::AgentThinking {
                    seat: seat_name.clone(),
                });
            }

            let seat = &mut self.seats[turn - 1];
            debug!(seat = %seat_name, "Waiting for move");
            let position = seat
                .choose_position(self.session.grid(), is_opening_move)
                .await?;

            match self.session.play_at(position) {
                PlayOutcome::Placed(marker) => {
                    moves.push(MoveRecord {
                        seat: turn,
                        position,
                        marker: marker.clone(),
                    });
                    self.emit(GameEvent::MoveMade {
                        seat: seat_name,
                        position,
                        marker,
                        grid: self.session.grid().clone(),
                    });
                }
                PlayOutcome::Illegal => {
                    warn!(seat = %seat_name, position, "Seat chose an occupied cell");
                    self.emit(GameEvent::MoveRejected {
                        seat: seat_name.clone(),
                        position,
                    });
                    if is_computer {
                        anyhow::bail!("{} chose occupied cell {}", seat_name, position);
                    }
                    self.seats[turn - 1].rejected(position);
                }
                PlayOutcome::Ignored => {
                    anyhow::bail!("{} chose position {} but play is closed", seat_name, position);
                }
            }
        }
    }
}
