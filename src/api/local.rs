use log::debug;
use std::fs;
use std::path::Path;

use super::{parse_region, parse_regions, parse_restaurants};
use crate::domain::Catalog;
use crate::error::CatalogError;

pub const RESTAURANTS_FILE: &str = "restaurants.json";
pub const NO_FLY_ZONES_FILE: &str = "noFlyZones.json";
pub const CENTRAL_AREA_FILE: &str = "centralArea.json";

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog snapshot from a directory.
///
/// `restaurants.json` and `noFlyZones.json` are required;
/// `centralArea.json` is optional.
pub fn load_catalog(dir: &Path) -> Result<Catalog, CatalogError> {
    let restaurants = parse_restaurants(RESTAURANTS_FILE, &read(&dir.join(RESTAURANTS_FILE))?)?;
    let no_fly_zones = parse_regions(NO_FLY_ZONES_FILE, &read(&dir.join(NO_FLY_ZONES_FILE))?)?;

    let central_path = dir.join(CENTRAL_AREA_FILE);
    let central_area = if central_path.exists() {
        Some(parse_region(CENTRAL_AREA_FILE, &read(&central_path)?)?)
    } else {
        None
    };

    debug!(
        "loaded catalog from {}: {} restaurants, {} no-fly zones, central area: {}",
        dir.display(),
        restaurants.len(),
        no_fly_zones.len(),
        central_area.is_some()
    );

    Ok(Catalog::new(restaurants, no_fly_zones, central_area))
}
