//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::advisory::FailureCategory;
use crate::domain::{Route, Station, StationId};

/// Response listing the active lines.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<Route>,
}

/// Response listing a line's stations.
#[derive(Debug, Serialize)]
pub struct RouteStationsResponse {
    /// The line
    pub route: Route,

    /// Stations in line order
    pub stations: Vec<Station>,
}

/// Query selecting a coach class.
#[derive(Debug, Deserialize)]
pub struct CoachQuery {
    /// Coach class identifier (`general`, `ladies`, `firstClass`).
    /// Defaults to `general`.
    pub coach: Option<String>,
}

/// Request to leave feedback on a station.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    /// Thumbs up (true) or down (false)
    pub is_helpful: bool,
}

/// Response after verifying a recommendation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub station_id: StationId,

    /// Verified count after this confirmation
    pub verified_count: u32,
}

/// Response carrying a live status advisory.
#[derive(Debug, Serialize)]
pub struct LiveStatusResponse {
    /// One or two sentences of status text
    pub status: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Failure category, for live status errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<FailureCategory>,
}
