//! Train lines and the stations on them.

use serde::{Deserialize, Serialize};

use super::{CoachClass, RouteId, StationCode, StationId};

/// A suburban train line, e.g. the Western Line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: RouteId,
    /// Display name, e.g. "Western Line".
    pub name: String,
    /// Short code, e.g. "WR".
    pub code: String,
    /// Hex colour used when drawing the line.
    pub color: String,
    pub is_active: bool,
}

/// Best coach to board, per coach class, for the quickest exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitCoaches {
    pub general: u8,
    pub ladies: u8,
    pub first_class: u8,
}

impl ExitCoaches {
    /// Coach number for the given class.
    pub fn for_class(&self, class: CoachClass) -> u8 {
        match class {
            CoachClass::General => self.general,
            CoachClass::Ladies => self.ladies,
            CoachClass::FirstClass => self.first_class,
        }
    }
}

/// A station on one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub route_id: RouteId,
    pub name: String,
    pub code: StationCode,
    /// Which platform and side the train arrives on.
    pub platform_info: String,
    pub exit_coaches: ExitCoaches,
    /// Tip about exits, bridges and connections.
    pub bridge_info: String,
    /// Number of commuters who confirmed the recommendation.
    pub verified_count: u32,
    /// Position of the station along its line, starting at 1.
    pub order: u32,
}
