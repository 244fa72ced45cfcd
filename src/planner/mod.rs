//! Flight path planning.
//!
//! # Example
//!
//! ```rust,ignore
//! use dronepath::planner::{PlannerConfig, compute_path};
//!
//! let config = PlannerConfig::default();
//! let path = compute_path(restaurant, appleton, &zones, central.as_ref(), &config)?;
//! for waypoint in path.waypoints() {
//!     println!("{} {}", waypoint.lng, waypoint.lat);
//! }
//! ```

mod astar;
mod node;
pub mod path;

use serde::Deserialize;

use crate::domain::{NamedRegion, Position};
use crate::error::PlanError;
use crate::geometry::{CLOSE_DISTANCE, MOVE_LENGTH};
use crate::zones::ZoneMap;

pub use path::{FlightPath, PathStep};

fn default_step() -> f64 {
    MOVE_LENGTH
}
fn default_tolerance() -> f64 {
    CLOSE_DISTANCE
}
fn default_heuristic_weight() -> f64 {
    1.04
}
fn default_max_expansions() -> usize {
    DEFAULT_MAX_EXPANSIONS
}

/// Expansions allowed before a search is reported as exhausted
pub const DEFAULT_MAX_EXPANSIONS: usize = 100_000;

/// Search parameters.
///
/// Defaults are a 0.00015 degree step and tolerance with weight 1.04.
///
/// The move lattice never runs out of states, so `max_expansions` is what
/// ends a search whose goal cannot be reached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlannerConfig {
    /// Length of one move, in degrees
    #[serde(default = "default_step")]
    pub step: f64,
    /// Goal is reached once strictly closer than this
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    /// Multiplier on the heuristic in `f = g + w * h`
    #[serde(default = "default_heuristic_weight")]
    pub heuristic_weight: f64,
    /// Give up after expanding this many nodes
    #[serde(default = "default_max_expansions")]
    pub max_expansions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            tolerance: default_tolerance(),
            heuristic_weight: default_heuristic_weight(),
            max_expansions: default_max_expansions(),
        }
    }
}

impl PlannerConfig {
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = limit;
        self
    }
}

/// Weighted A* planner over the sixteen compass headings.
///
/// Holds no per-request state, so one planner can serve any number of
/// requests, concurrently or not.
#[derive(Debug, Clone, Default)]
pub struct FlightPlanner {
    config: PlannerConfig,
}

impl FlightPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a flight from `start` to within tolerance of `goal`.
    pub fn plan(
        &self,
        start: Position,
        goal: Position,
        zones: &ZoneMap<'_>,
    ) -> Result<FlightPath, PlanError> {
        let raw = astar::search(start, goal, zones, &self.config)?;
        let expanded = raw.nodes_expanded;
        FlightPath::from_raw(raw.steps, expanded)
            .ok_or(PlanError::SearchExhausted { expanded })
    }
}

/// Plan a flight path avoiding `no_fly_zones` and never leaving
/// `central_region` once entered.
pub fn compute_path(
    start: Position,
    goal: Position,
    no_fly_zones: &[NamedRegion],
    central_region: Option<&NamedRegion>,
    config: &PlannerConfig,
) -> Result<FlightPath, PlanError> {
    let zones = ZoneMap::new(no_fly_zones, central_region);
    FlightPlanner::new(config.clone()).plan(start, goal, &zones)
}
