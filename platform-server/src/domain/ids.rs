//! Directory identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a train line in the station directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(pub u32);

/// Identifier of a station entry in the station directory.
///
/// A physical station served by two lines (e.g. Dadar) has one entry per
/// line, each with its own identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub u32);

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_is_transparent() {
        assert_eq!(serde_json::to_string(&StationId(7)).unwrap(), "7");
        let id: RouteId = serde_json::from_str("3").unwrap();
        assert_eq!(id, RouteId(3));
    }

    #[test]
    fn display() {
        assert_eq!(RouteId(2).to_string(), "2");
        assert_eq!(StationId(14).to_string(), "14");
    }
}
