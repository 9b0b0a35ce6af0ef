//! Player markers.

use crate::RosterError;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Single visible character a player places into grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Marker(char);

impl Marker {
    /// Creates a marker, rejecting whitespace and control characters.
    pub fn new(symbol: char) -> Result<Self, RosterError> {
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(RosterError::InvalidMarker {
                input: symbol.to_string(),
            });
        }
        Ok(Self(symbol))
    }

    /// Returns the marker character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<&str> for Marker {
    type Error = RosterError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::new(symbol).map_err(|_| RosterError::InvalidMarker {
                input: input.to_string(),
            }),
            _ => Err(RosterError::InvalidMarker {
                input: input.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Marker {
    type Error = RosterError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::try_from(input.as_str())
    }
}

impl From<Marker> for String {
    fn from(marker: Marker) -> Self {
        marker.0.to_string()
    }
}

impl std::str::FromStr for Marker {
    type Err = RosterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::try_from(input)
    }
}
