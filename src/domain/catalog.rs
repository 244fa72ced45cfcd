use super::{NamedRegion, Restaurant};

/// Read-only snapshot of everything a planning request needs from the
/// outside world.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
    pub no_fly_zones: Vec<NamedRegion>,
    pub central_area: Option<NamedRegion>,
}

impl Catalog {
    pub fn new(
        restaurants: Vec<Restaurant>,
        no_fly_zones: Vec<NamedRegion>,
        central_area: Option<NamedRegion>,
    ) -> Self {
        Self {
            restaurants,
            no_fly_zones,
            central_area,
        }
    }

    /// True if any restaurant lists the pizza, ignoring ASCII case
    pub fn is_pizza_defined(&self, pizza_name: &str) -> bool {
        !pizza_name.trim().is_empty() && self.restaurants.iter().any(|r| r.serves(pizza_name))
    }
}
