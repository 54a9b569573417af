//! Core domain types for the platform assistant.
//!
//! These types are independent of storage and of the web layer.

mod coach;
mod ids;
mod route;
mod station;

pub use coach::{CoachClass, InvalidCoachClass};
pub use ids::{RouteId, StationId};
pub use route::{ExitCoaches, Route, Station};
pub use station::{InvalidStationCode, StationCode};
