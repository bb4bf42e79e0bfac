//! Player markers.

use crate::MarkerError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The predefined marker symbols offered to players, in picker order.
pub const MARKER_CATALOG: [&str; 39] = [
    "O", "X", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "P", "Q", "R",
    "S", "T", "U", "V", "W", "Y", "Z", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "@", "#",
    "&",
];

/// The token a player's moves are stamped with.
///
/// Any non-empty string is accepted; [`MARKER_CATALOG`] lists the usual ones.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Marker(String);

impl Marker {
    /// Creates a marker, rejecting the empty string.
    #[instrument(skip(token))]
    pub fn new(token: impl Into<String>) -> Result<Self, MarkerError> {
        let token = token.into();
        if token.is_empty() {
            return Err(MarkerError::Empty);
        }
        Ok(Self(token))
    }

    /// The conventional first marker.
    pub fn x() -> Self {
        Self("X".to_string())
    }

    /// The conventional second marker.
    pub fn o() -> Self {
        Self("O".to_string())
    }

    /// Returns the marker text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this marker is one of the predefined symbols.
    pub fn is_catalogued(&self) -> bool {
        MARKER_CATALOG.contains(&self.0.as_str())
    }
}

impl TryFrom<String> for Marker {
    type Error = MarkerError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl TryFrom<&str> for Marker {
    type Error = MarkerError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Self::new(token)
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

impl AsRef<str> for Marker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
