//! Seed data for the station directory.
//!
//! The built-in fixture covers the Western, Central and Harbour lines. A JSON
//! file with the same shape can be loaded instead.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{ExitCoaches, StationCode};

use super::error::DirectoryError;

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// Default range for generated verified counts.
const DEFAULT_VERIFIED_RANGE: (u32, u32) = (50, 250);

/// Complete seed: every line and its stations.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub routes: Vec<RouteSeed>,
}

/// One line in the seed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSeed {
    pub name: String,
    pub code: String,
    pub color: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    /// Half-open range for generated verified counts.
    #[serde(default = "default_verified_range")]
    pub verified_range: (u32, u32),
    pub stations: Vec<StationSeed>,
}

/// One station in the seed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSeed {
    pub name: String,
    pub code: StationCode,
    pub platform_info: String,
    pub exit_coaches: ExitCoaches,
    pub bridge_info: String,
    pub order: u32,
    /// Generated from the route's range when absent.
    #[serde(default)]
    pub verified_count: Option<u32>,
}

fn default_active() -> bool {
    true
}

fn default_verified_range() -> (u32, u32) {
    DEFAULT_VERIFIED_RANGE
}

impl SeedData {
    /// The fixture compiled into the binary.
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parse seed JSON.
    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load seed JSON from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
