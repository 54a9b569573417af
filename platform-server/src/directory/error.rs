//! Station directory error types.

use crate::domain::{RouteId, StationId};

/// Errors from the station directory and feedback store.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No route with this id
    #[error("route {0} not found")]
    RouteNotFound(RouteId),

    /// No station with this id
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// Seed file could not be read
    #[error("failed to read seed file: {0}")]
    SeedIo(#[from] std::io::Error),

    /// Seed file is not valid seed JSON
    #[error("invalid seed data: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            DirectoryError::RouteNotFound(RouteId(4)).to_string(),
            "route 4 not found"
        );
        assert_eq!(
            DirectoryError::StationNotFound(StationId(99)).to_string(),
            "station 99 not found"
        );
    }
}
