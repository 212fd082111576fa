//! Dashboard configuration from environment variables.

use occupancy_core::{OccupancyError, OccupancyResult};
use occupancy_roster::BuildingSelection;

pub const CACHE_CAPACITY_VAR: &str = "OCCUPANCY_CACHE_CAPACITY";
pub const DEFAULT_BUILDING_VAR: &str = "OCCUPANCY_DEFAULT_BUILDING";
pub const INPUT_VAR: &str = "OCCUPANCY_INPUT";

pub const DEFAULT_CACHE_CAPACITY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Snapshot aggregates kept before the oldest is evicted (>= 1).
    pub cache_capacity: usize,
    /// Filter applied when a dashboard is created.
    pub default_selection: BuildingSelection,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            default_selection: BuildingSelection::All,
        }
    }
}

impl DashboardConfig {
    /// Read configuration through `lookup` (variable name → value).
    ///
    /// Unset variables take their defaults; set-but-invalid ones are errors.
    pub fn from_lookup<F>(lookup: F) -> OccupancyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CACHE_CAPACITY_VAR) {
            config.cache_capacity = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(OccupancyError::invalid_config(format!(
                        "{CACHE_CAPACITY_VAR} must be a positive integer, got {raw:?}"
                    )));
                }
            };
        }

        if let Some(raw) = lookup(DEFAULT_BUILDING_VAR) {
            config.default_selection = raw.parse::<BuildingSelection>().map_err(|e| {
                OccupancyError::invalid_config(format!("{DEFAULT_BUILDING_VAR}: {e}"))
            })?;
        }

        Ok(config)
    }

    /// Read configuration from the process environment.
    ///
    /// Invalid values are logged and replaced by the defaults.
    pub fn from_env() -> Self {
        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid dashboard configuration; using defaults");
                Self::default()
            }
        }
    }
}
