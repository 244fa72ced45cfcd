use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::Position;

/// A menu item or an ordered item, priced in pence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub name: String,
    pub price_in_pence: u32,
}

impl Pizza {
    pub fn new(name: impl Into<String>, price_in_pence: u32) -> Self {
        Self {
            name: name.into(),
            price_in_pence,
        }
    }
}

/// A restaurant as published by the delivery service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub name: String,
    pub location: Position,
    /// Upper-case weekday names, e.g. "MONDAY"
    #[serde(default)]
    pub opening_days: Vec<String>,
    #[serde(default)]
    pub menu: Vec<Pizza>,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: Position,
        opening_days: Vec<String>,
        menu: Vec<Pizza>,
    ) -> Self {
        Self {
            name: name.into(),
            location,
            opening_days,
            menu,
        }
    }

    /// Case-insensitive menu lookup.
    ///
    /// Only ASCII letters are case-folded; other characters must match exactly.
    pub fn menu_item(&self, pizza_name: &str) -> Option<&Pizza> {
        self.menu
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(pizza_name))
    }

    pub fn serves(&self, pizza_name: &str) -> bool {
        self.menu_item(pizza_name).is_some()
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        let wanted = weekday_name(day);
        self.opening_days
            .iter()
            .any(|d| d.eq_ignore_ascii_case(wanted))
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MONDAY",
        Weekday::Tue => "TUESDAY",
        Weekday::Wed => "WEDNESDAY",
        Weekday::Thu => "THURSDAY",
        Weekday::Fri => "FRIDAY",
        Weekday::Sat => "SATURDAY",
        Weekday::Sun => "SUNDAY",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn civerinos() -> Restaurant {
        Restaurant::new(
            "Civerinos Slice",
            Position::new(-3.1912869215011597, 55.945535152517735),
            vec!["MONDAY".to_string(), "tuesday".to_string()],
            vec![
                Pizza::new("R1: Margarita", 1000),
                Pizza::new("R1: Calzone", 1400),
            ],
        )
    }

    #[test]
    fn test_menu_lookup_ignores_case() {
        let r = civerinos();
        assert_eq!(r.menu_item("r1: margarita").unwrap().price_in_pence, 1000);
        assert!(r.serves("R1: CALZONE"));
        assert!(!r.serves("R2: Meat Lover"));
    }

    #[test]
    fn test_menu_lookup_folds_ascii_only() {
        let r = Restaurant::new(
            "Crêperie",
            Position::new(-3.19, 55.94),
            Vec::new(),
            vec![Pizza::new("Crème Fraîche", 1200)],
        );
        assert!(r.serves("CRèME FRAîCHE"));
        assert!(!r.serves("CRÈME FRAÎCHE"));
    }

    #[test]
    fn test_opening_days() {
        let r = civerinos();
        assert!(r.is_open_on(Weekday::Mon));
        assert!(r.is_open_on(Weekday::Tue));
        assert!(!r.is_open_on(Weekday::Sun));
    }

    #[test]
    fn test_parse_restaurant_json() {
        let json = r#"{
            "name": "Sora Lella Vegan Restaurant",
            "location": {"lng": -3.202541470527649, "lat": 55.943284737579376},
            "openingDays": ["MONDAY", "TUESDAY"],
            "menu": [{"name": "R2: Meat Lover", "priceInPence": 1400}]
        }"#;
        let r: Restaurant = serde_json::from_str(json).unwrap();
        assert_eq!(r.menu.len(), 1);
        assert_eq!(r.menu[0].price_in_pence, 1400);
        assert_eq!(r.opening_days.len(), 2);
    }
}
