//! Commuter feedback on station recommendations.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::StationId;

/// One thumbs-up or thumbs-down on a station's recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationFeedback {
    pub station_id: StationId,
    /// Identity of the commuter, when known. Anonymous feedback is allowed.
    pub user_id: Option<String>,
    pub is_helpful: bool,
    pub timestamp: DateTime<Utc>,
}

/// Feedback counts for a station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub helpful: u32,
    pub not_helpful: u32,
}

/// Append-only feedback log.
#[derive(Clone, Default)]
pub struct FeedbackStore {
    records: Arc<RwLock<Vec<StationFeedback>>>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record feedback for a station, stamped with the current time.
    pub async fn record(
        &self,
        station_id: StationId,
        is_helpful: bool,
        user_id: Option<String>,
    ) -> StationFeedback {
        let feedback = StationFeedback {
            station_id,
            user_id,
            is_helpful,
            timestamp: Utc::now(),
        };

        let mut guard = self.records.write().await;
        guard.push(feedback.clone());
        feedback
    }

    /// Helpful / not helpful counts for a station.
    pub async fn summary(&self, station_id: StationId) -> FeedbackSummary {
        let guard = self.records.read().await;
        guard
            .iter()
            .filter(|f| f.station_id == station_id)
            .fold(FeedbackSummary::default(), |mut summary, f| {
                if f.is_helpful {
                    summary.helpful += 1;
                } else {
                    summary.not_helpful += 1;
                }
                summary
            })
    }

    /// All feedback for a station, oldest first.
    pub async fn for_station(&self, station_id: StationId) -> Vec<StationFeedback> {
        let guard = self.records.read().await;
        guard
            .iter()
            .filter(|f| f.station_id == station_id)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn summary_counts_per_station() {
        let store = FeedbackStore::new();
        store.record(StationId(1), true, None).await;
        store.record(StationId(1), true, Some("user-1".into())).await;
        store.record(StationId(1), false, None).await;
        store.record(StationId(2), false, None).await;

        assert_eq!(
            store.summary(StationId(1)).await,
            FeedbackSummary {
                helpful: 2,
                not_helpful: 1
            }
        );
        assert_eq!(
            store.summary(StationId(2)).await,
            FeedbackSummary {
                helpful: 0,
                not_helpful: 1
            }
        );
        assert_eq!(store.summary(StationId(3)).await, FeedbackSummary::default());
    }

    #[tokio::test]
    async fn records_keep_identity_and_order() {
        let store = FeedbackStore::new();
        let first = store.record(StationId(4), true, Some("user-9".into())).await;
        store.record(StationId(4), false, None).await;

        let records = store.for_station(StationId(4)).await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], first);
        assert_eq!(records[0].user_id.as_deref(), Some("user-9"));
        assert!(records[1].user_id.is_none());
        assert!(records[0].timestamp <= records[1].timestamp);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = FeedbackSummary {
            helpful: 3,
            not_helpful: 1,
        };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"helpful":3,"notHelpful":1}"#
        );
    }

    #[tokio::test]
    async fn clones_share_records() {
        let store = FeedbackStore::new();
        let other = store.clone();
        other.record(StationId(1), true, None).await;

        assert_eq!(store.summary(StationId(1)).await.helpful, 1);
    }
}
