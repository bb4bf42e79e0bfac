//! Pre-game checks owned by the caller.

use crate::{Marker, SetupError};
use tracing::{instrument, warn};

/// Rejects a pair of players that would share a marker.
///
/// [`crate::GameSession::setup`] does not call this; whoever collects the
/// player choices runs it first.
#[instrument]
pub fn validate_markers(first: &Marker, second: &Marker) -> Result<(), SetupError> {
    if first == second {
        warn!(marker = %first, "Both players chose the same marker");
        return Err(SetupError::DuplicateMarker(first.clone()));
    }
    Ok(())
}
