//! Site and polarity value objects supplied to the collection builder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CollateError;

/// A physical recording point, identified by station and location codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Site {
    /// Station code.
    pub station: String,
    /// Location code.
    pub location: String,
}

impl Site {
    /// Convenience constructor.
    pub fn new(station: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.station, self.location)
    }
}

/// Parses `STATION.LOCATION`, e.g. `WEL.10`.
impl FromStr for Site {
    type Err = CollateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (station, location) = s
            .split_once('.')
            .ok_or_else(|| CollateError::InvalidArg(format!("site '{s}' is not STATION.LOCATION")))?;
        let station = station.trim();
        let location = location.trim();
        if station.is_empty() {
            return Err(CollateError::InvalidArg(format!(
                "site '{s}' has an empty station code"
            )));
        }
        if location.contains('.') {
            return Err(CollateError::InvalidArg(format!(
                "site '{s}' has more than one separator"
            )));
        }
        Ok(Self::new(station, location))
    }
}

/// Recorded polarity of a stream.
///
/// Only a reversed primary polarity changes derived orientations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polarity {
    /// Whether this is the preferred polarity assessment.
    pub primary: bool,
    /// Whether the recorded signal is inverted.
    pub reversed: bool,
}

impl Polarity {
    /// True if orientations must be flipped for this polarity.
    #[must_use]
    pub const fn is_reversing(&self) -> bool {
        self.primary && self.reversed
    }
}
