//! A seat at the table: identity plus incremental line counters.

use crate::{Coord, Line, LineScores, Marker};
use derive_getters::Getters;

/// One of the two players in a [`crate::GameSession`].
///
/// `scores` is a cache of the cells this player has claimed during live
/// play, updated one move at a time.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// The marker stamped on claimed cells.
    marker: Marker,
    /// Per-line counts of claimed cells.
    scores: LineScores,
    /// Set once the player completes a line.
    #[getter(skip)]
    won: bool,
}

impl Player {
    /// Creates a player with zeroed counters.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
            scores: LineScores::new(),
            won: false,
        }
    }

    /// Whether this player has completed a line.
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Replaces the name if it changed.
    pub(crate) fn rename(&mut self, name: &str) {
        if self.name != name {
            self.name = name.to_string();
        }
    }

    /// Replaces the marker if it changed.
    pub(crate) fn remark(&mut self, marker: &Marker) {
        if &self.marker != marker {
            self.marker = marker.clone();
        }
    }

    /// Counts a newly claimed cell.
    pub(crate) fn claim(&mut self, coord: Coord) {
        self.scores.record(coord);
    }

    /// The first line the counters show as complete.
    pub(crate) fn completed_line(&self) -> Option<Line> {
        self.scores.completed_line()
    }

    pub(crate) fn set_won(&mut self) {
        self.won = true;
    }

    /// Clears counters and the win flag for a new game.
    pub(crate) fn reset(&mut self) {
        self.scores = LineScores::new();
        self.won = false;
    }
}
