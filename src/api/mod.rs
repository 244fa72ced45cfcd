pub mod local;
pub mod remote;

pub use local::load_catalog;
pub use remote::RestClient;

use log::warn;
use serde::de::DeserializeOwned;

use crate::domain::{NamedRegion, Restaurant};
use crate::error::CatalogError;

fn parse<T: DeserializeOwned>(what: &str, body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|source| CatalogError::Parse {
        what: what.to_string(),
        source,
    })
}

pub fn parse_restaurants(what: &str, body: &str) -> Result<Vec<Restaurant>, CatalogError> {
    parse(what, body)
}

/// Parse a list of regions, warning about any that are malformed.
///
/// Malformed regions are kept: containment still gives an answer for them.
pub fn parse_regions(what: &str, body: &str) -> Result<Vec<NamedRegion>, CatalogError> {
    let regions: Vec<NamedRegion> = parse(what, body)?;
    for region in &regions {
        check_region(what, region);
    }
    Ok(regions)
}

pub fn parse_region(what: &str, body: &str) -> Result<NamedRegion, CatalogError> {
    let region: NamedRegion = parse(what, body)?;
    check_region(what, &region);
    Ok(region)
}

fn check_region(what: &str, region: &NamedRegion) {
    if let Err(e) = region.validate() {
        warn!("{}: {}", what, e);
    }
}
