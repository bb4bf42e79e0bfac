//! Seat played by the minimax agent.

use super::Seat;
use anyhow::{Context, Result};
use noughts_agent::{MinimaxAgent, MoveDecider};
use noughts_board::{Grid, Marker};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer seat backed by a [`MinimaxAgent`].
pub struct ComputerSeat {
    name: String,
    agent: MinimaxAgent,
    thinking_delay: Duration,
}

impl ComputerSeat {
    /// Creates a computer seat playing `own` against `opponent`.
    #[instrument(skip(name), fields(seat = %name.as_ref()))]
    pub fn new(
        name: impl AsRef<str>,
        own: Marker,
        opponent: Marker,
        thinking_delay: Duration,
    ) -> Self {
        let mut agent = MinimaxAgent::new();
        agent.configure(true, own, opponent);
        Self {
            name: name.as_ref().to_string(),
            agent,
            thinking_delay,
        }
    }
}

#[async_trait::async_trait]
impl Seat for ComputerSeat {
    async fn choose_position(&mut self, grid: &Grid, is_opening_move: bool) -> Result<usize> {
        debug!(seat = %self.name, "Computer thinking");

        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        self.agent
            .decide_move(grid, is_opening_move)
            .with_context(|| format!("{} found no move to play", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}
