//! Seat trait and implementations.

mod computer;
mod human;

pub use computer::ComputerSeat;
pub use human::HumanSeat;

use anyhow::Result;
use noughts_board::Grid;

/// Someone (or something) sitting at the table.
#[async_trait::async_trait]
pub trait Seat: Send {
    /// Chooses a position (0-8) to play on `grid`.
    ///
    /// `is_opening_move` is true only for the first move of a game.
    async fn choose_position(&mut self, grid: &Grid, is_opening_move: bool) -> Result<usize>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;

    /// Whether the agent plays this seat.
    fn is_computer(&self) -> bool;

    /// Called when the session rejects the chosen position as occupied.
    fn rejected(&mut self, _position: usize) {}
}
