//! Error types for dronepath

use std::path::PathBuf;
use thiserror::Error;

use crate::orders::OrderValidationCode;

/// Failure of the weighted A* search.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// No node came within tolerance of the goal before the open set emptied
    /// or the expansion budget ran out.
    #[error("no path found: search exhausted after expanding {expanded} nodes")]
    SearchExhausted { expanded: usize },
}

/// Failure to map an order onto exactly one restaurant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no restaurant serves every pizza in the order")]
    NoRestaurant,

    #[error("{count} restaurants serve every pizza in the order, expected exactly one")]
    MultipleRestaurants { count: usize },
}

/// Rejected geometric input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid coordinate: lng={lng}, lat={lat}")]
    InvalidCoordinate { lng: f64, lat: f64 },

    #[error("angle must be within [0, 360] degrees, got {0}")]
    InvalidAngle(f64),

    #[error("region '{0}' has no vertices")]
    EmptyRegion(String),

    #[error("region '{0}' is not closed: first and last vertex differ")]
    OpenRing(String),

    #[error("region '{name}' repeats the edge ending at vertex {index}")]
    DuplicateEdge { name: String, index: usize },
}

/// Tagged failure of a full delivery planning request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryError {
    #[error("order invalid: {0}")]
    UpstreamInvalid(OrderValidationCode),

    #[error(transparent)]
    Resolution(#[from] ResolveError),

    #[error(transparent)]
    Search(#[from] PlanError),
}

/// Failure while acquiring restaurant and region data.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
