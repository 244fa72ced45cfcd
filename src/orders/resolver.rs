use crate::domain::{Order, Pizza, Position, Restaurant};
use crate::error::ResolveError;

/// Find the one restaurant whose menu lists every pizza (case-insensitive).
///
/// Zero matches and several matches are both failures; an order must be
/// fulfilled by exactly one restaurant.
pub fn resolve_restaurant<'a>(
    pizzas: &[Pizza],
    restaurants: &'a [Restaurant],
) -> Result<&'a Restaurant, ResolveError> {
    let mut matches = restaurants
        .iter()
        .filter(|r| pizzas.iter().all(|p| r.serves(&p.name)));

    let first = matches.next().ok_or(ResolveError::NoRestaurant)?;
    let extra = matches.count();
    if extra > 0 {
        return Err(ResolveError::MultipleRestaurants { count: extra + 1 });
    }

    Ok(first)
}

/// Pickup location for an order
pub fn resolve(order: &Order, restaurants: &[Restaurant]) -> Result<Position, ResolveError> {
    resolve_restaurant(order.pizzas(), restaurants).map(|r| r.location)
}
