//! In-memory station directory.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::Rng;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::advisory::AdvisoryRequest;
use crate::domain::{CoachClass, Route, RouteId, Station, StationId};

use super::error::DirectoryError;
use super::seed::SeedData;

/// Where to board for the quickest exit at a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub station_id: StationId,
    pub station_name: String,
    pub route_name: String,
    pub coach_class: CoachClass,
    /// Coach number to board.
    pub coach: u8,
    pub platform_info: String,
    pub bridge_info: String,
    pub verified_count: u32,
}

#[derive(Debug, Default)]
struct DirectoryData {
    routes: BTreeMap<RouteId, Route>,
    stations: BTreeMap<StationId, Station>,
}

/// Thread-safe lookup of lines and stations.
///
/// Read-mostly; the only mutation is bumping a station's verified count.
#[derive(Clone, Default)]
pub struct StationDirectory {
    inner: Arc<RwLock<DirectoryData>>,
}

impl StationDirectory {
    /// Build a directory from seed data.
    ///
    /// Ids are assigned in seed order starting at 1. Stations without a
    /// verified count get one drawn from their route's range.
    pub fn from_seed<R: Rng>(seed: SeedData, rng: &mut R) -> Self {
        let mut data = DirectoryData::default();
        let mut next_station = 1;

        for (index, route_seed) in seed.routes.into_iter().enumerate() {
            let route_id = RouteId(index as u32 + 1);
            let (low, high) = route_seed.verified_range;

            for station_seed in route_seed.stations {
                let verified_count = station_seed.verified_count.unwrap_or_else(|| {
                    if low < high {
                        rng.gen_range(low..high)
                    } else {
                        low
                    }
                });

                let id = StationId(next_station);
                next_station += 1;

                data.stations.insert(
                    id,
                    Station {
                        id,
                        route_id,
                        name: station_seed.name,
                        code: station_seed.code,
                        platform_info: station_seed.platform_info,
                        exit_coaches: station_seed.exit_coaches,
                        bridge_info: station_seed.bridge_info,
                        verified_count,
                        order: station_seed.order,
                    },
                );
            }

            data.routes.insert(
                route_id,
                Route {
                    id: route_id,
                    name: route_seed.name,
                    code: route_seed.code,
                    color: route_seed.color,
                    is_active: route_seed.is_active,
                },
            );
        }

        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    /// Active routes, in id order.
    pub async fn active_routes(&self) -> Vec<Route> {
        let guard = self.inner.read().await;
        guard
            .routes
            .values()
            .filter(|r| r.is_active)
            .cloned()
            .collect()
    }

    /// Look up a route by id.
    pub async fn route(&self, id: RouteId) -> Option<Route> {
        let guard = self.inner.read().await;
        guard.routes.get(&id).cloned()
    }

    /// Stations on a route, in line order.
    pub async fn stations_by_route(
        &self,
        route_id: RouteId,
    ) -> Result<Vec<Station>, DirectoryError> {
        let guard = self.inner.read().await;
        if !guard.routes.contains_key(&route_id) {
            return Err(DirectoryError::RouteNotFound(route_id));
        }

        let mut stations: Vec<Station> = guard
            .stations
            .values()
            .filter(|s| s.route_id == route_id)
            .cloned()
            .collect();
        stations.sort_by_key(|s| s.order);
        Ok(stations)
    }

    /// Look up a station by id.
    pub async fn station(&self, id: StationId) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.stations.get(&id).cloned()
    }

    /// Number of stations in the directory.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.stations.len()
    }

    /// Check if the directory has no stations.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.stations.is_empty()
    }

    /// Best coach to board for `class` when alighting at `station_id`.
    pub async fn recommend(
        &self,
        station_id: StationId,
        class: CoachClass,
    ) -> Result<Recommendation, DirectoryError> {
        let guard = self.inner.read().await;
        let station = guard
            .stations
            .get(&station_id)
            .ok_or(DirectoryError::StationNotFound(station_id))?;
        let route = guard
            .routes
            .get(&station.route_id)
            .ok_or(DirectoryError::RouteNotFound(station.route_id))?;

        Ok(Recommendation {
            station_id,
            station_name: station.name.clone(),
            route_name: route.name.clone(),
            coach_class: class,
            coach: station.exit_coaches.for_class(class),
            platform_info: station.platform_info.clone(),
            bridge_info: station.bridge_info.clone(),
            verified_count: station.verified_count,
        })
    }

    /// Display context for a live status request about `station_id`.
    pub async fn advisory_request(
        &self,
        station_id: StationId,
        class: CoachClass,
    ) -> Result<AdvisoryRequest, DirectoryError> {
        let guard = self.inner.read().await;
        let station = guard
            .stations
            .get(&station_id)
            .ok_or(DirectoryError::StationNotFound(station_id))?;
        let route = guard
            .routes
            .get(&station.route_id)
            .ok_or(DirectoryError::RouteNotFound(station.route_id))?;

        Ok(AdvisoryRequest::new(&route.name, &station.name, class))
    }

    /// Record that a commuter confirmed the recommendation.
    ///
    /// Returns the new verified count.
    pub async fn increment_verified(&self, station_id: StationId) -> Result<u32, DirectoryError> {
        let mut guard = self.inner.write().await;
        let station = guard
            .stations
            .get_mut(&station_id)
            .ok_or(DirectoryError::StationNotFound(station_id))?;

        station.verified_count = station.verified_count.saturating_add(1);
        Ok(station.verified_count)
    }
}
