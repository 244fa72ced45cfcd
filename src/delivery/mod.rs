//! End-to-end delivery planning: validate the order, find the restaurant,
//! then fly from the restaurant to the drop-off point.

use chrono::NaiveDate;
use log::debug;

use crate::domain::{Catalog, Order, Position};
use crate::error::{DeliveryError, Result};
use crate::orders::{resolve_restaurant, validate_order};
use crate::planner::{FlightPath, FlightPlanner, PlannerConfig};
use crate::zones::ZoneMap;

/// Default drop-off point
pub const APPLETON_TOWER: Position = Position::new(-3.186874, 55.944494);

/// Validate `order` against `catalog` and plan its delivery flight.
///
/// Fails with `UpstreamInvalid` before anything else runs if the order does
/// not pass validation.
pub fn plan_delivery(
    order: &Order,
    catalog: &Catalog,
    today: NaiveDate,
    config: &PlannerConfig,
    destination: Position,
) -> Result<FlightPath> {
    let validation = validate_order(order, catalog, today);
    if !validation.is_valid() {
        debug!(
            "order {} rejected: {}",
            order.order_no.as_deref().unwrap_or("<unnumbered>"),
            validation.order_validation_code
        );
        return Err(DeliveryError::UpstreamInvalid(
            validation.order_validation_code,
        ));
    }

    plan_validated_delivery(order, catalog, config, destination)
}

/// Plan the flight for an order that has already been validated.
///
/// The restaurant is resolved before any search runs.
pub fn plan_validated_delivery(
    order: &Order,
    catalog: &Catalog,
    config: &PlannerConfig,
    destination: Position,
) -> Result<FlightPath> {
    let restaurant = resolve_restaurant(order.pizzas(), &catalog.restaurants)?;
    debug!(
        "delivering from {} at ({:.6},{:.6})",
        restaurant.name, restaurant.location.lng, restaurant.location.lat
    );

    let zones = ZoneMap::new(&catalog.no_fly_zones, catalog.central_area.as_ref());
    let path = FlightPlanner::new(config.clone()).plan(restaurant.location, destination, &zones)?;
    Ok(path)
}
