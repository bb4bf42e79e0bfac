//! Noughts - tic-tac-toe with an unbeatable computer opponent.
//!
//! # Architecture
//!
//! - **Board** ([`noughts_board`]): live sessions plus pure grid evaluation
//! - **Agent** ([`noughts_agent`]): exhaustive minimax move selection
//! - **Seats**: humans on a terminal, computers backed by the agent
//! - **Orchestrator**: drives a game between two seats and publishes events
//!
//! # Example
//!
//! ```no_run
//! use noughts::{ComputerSeat, Orchestrator};
//! use noughts_board::Marker;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let x = ComputerSeat::new("Ex", Marker::x(), Marker::o(), Duration::ZERO);
//! let o = ComputerSeat::new("Oh", Marker::o(), Marker::x(), Duration::ZERO);
//! let mut orchestrator = Orchestrator::new(Box::new(x), Marker::x(), Box::new(o), Marker::o())?;
//! let report = orchestrator.run().await?;
//! println!("{}", report.outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod seats;

// Crate-level exports - Configuration
pub use config::{ConfigError, MatchConfig, SeatConfig};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, MatchReport, MoveRecord, Orchestrator};

// Crate-level exports - Seats
pub use seats::{ComputerSeat, HumanSeat, Seat};

// Crate-level exports - Game types
pub use noughts_agent::{FirstAvailable, MinimaxAgent, MoveDecider, Sides};
pub use noughts_board::{
    BoardStatus, Cell, Coord, GameOutcome, GameSession, Grid, Marker, PlayOutcome, Position,
};
