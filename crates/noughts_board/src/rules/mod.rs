//! Pure game rules.
//!
//! Everything here takes a grid (or markers) by reference and never touches
//! a live session, so it can evaluate hypothetical boards during search.

pub mod moves;
pub mod setup;
pub mod status;

pub use moves::{available_moves, simulate};
pub use setup::validate_markers;
pub use status::{BoardStatus, is_game_complete};
