//! Order validation rule chain.
//!
//! Rules run in a fixed order and the first failing rule decides the
//! result code:
//! 1. structure (pizzas and card present, 1..=4 pizzas)
//! 2. every pizza exists on some menu
//! 3. exactly one restaurant serves all pizzas
//! 4. that restaurant is open on the order date
//! 5. every pizza price matches the menu
//! 6. total = menu prices + delivery charge
//! 7. card number, expiry, CVV

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::resolver::resolve_restaurant;
use crate::domain::{Catalog, CreditCardInformation, Order, Pizza, Restaurant};

pub const MAX_PIZZAS: usize = 4;

/// Flat charge added to every order, in pence
pub const DELIVERY_CHARGE_PENCE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderValidationCode {
    NoError,
    Undefined,
    EmptyOrder,
    MaxPizzaCountExceeded,
    PizzaNotDefined,
    PizzaFromMultipleRestaurants,
    RestaurantClosed,
    PriceForPizzaInvalid,
    TotalIncorrect,
    CardNumberInvalid,
    ExpiryDateInvalid,
    CvvInvalid,
}

impl OrderValidationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoError => "NO_ERROR",
            Self::Undefined => "UNDEFINED",
            Self::EmptyOrder => "EMPTY_ORDER",
            Self::MaxPizzaCountExceeded => "MAX_PIZZA_COUNT_EXCEEDED",
            Self::PizzaNotDefined => "PIZZA_NOT_DEFINED",
            Self::PizzaFromMultipleRestaurants => "PIZZA_FROM_MULTIPLE_RESTAURANTS",
            Self::RestaurantClosed => "RESTAURANT_CLOSED",
            Self::PriceForPizzaInvalid => "PRICE_FOR_PIZZA_INVALID",
            Self::TotalIncorrect => "TOTAL_INCORRECT",
            Self::CardNumberInvalid => "CARD_NUMBER_INVALID",
            Self::ExpiryDateInvalid => "EXPIRY_DATE_INVALID",
            Self::CvvInvalid => "CVV_INVALID",
        }
    }
}

impl fmt::Display for OrderValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderValidationResult {
    pub order_status: OrderStatus,
    pub order_validation_code: OrderValidationCode,
}

impl OrderValidationResult {
    pub fn valid() -> Self {
        Self {
            order_status: OrderStatus::Valid,
            order_validation_code: OrderValidationCode::NoError,
        }
    }

    pub fn invalid(code: OrderValidationCode) -> Self {
        Self {
            order_status: OrderStatus::Invalid,
            order_validation_code: code,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.order_status == OrderStatus::Valid
    }
}

type Rule = std::result::Result<(), OrderValidationCode>;

/// Run the full rule chain against `catalog`, judging card expiry
/// relative to `today`.
pub fn validate_order(order: &Order, catalog: &Catalog, today: NaiveDate) -> OrderValidationResult {
    match run_rules(order, catalog, today) {
        Ok(()) => OrderValidationResult::valid(),
        Err(code) => OrderValidationResult::invalid(code),
    }
}

fn run_rules(order: &Order, catalog: &Catalog, today: NaiveDate) -> Rule {
    let (pizzas, card) = check_structure(order)?;
    check_pizzas_defined(pizzas, catalog)?;

    let restaurant = resolve_restaurant(pizzas, &catalog.restaurants)
        .map_err(|_| OrderValidationCode::PizzaFromMultipleRestaurants)?;

    check_open(restaurant, order.order_date)?;
    check_prices(restaurant, pizzas)?;
    check_total(restaurant, pizzas, order.price_total_in_pence)?;
    check_card(card, today)
}

fn check_structure(
    order: &Order,
) -> std::result::Result<(&[Pizza], &CreditCardInformation), OrderValidationCode> {
    let (Some(pizzas), Some(card)) = (&order.pizzas_in_order, &order.credit_card_information)
    else {
        return Err(OrderValidationCode::Undefined);
    };

    if pizzas.is_empty() {
        return Err(OrderValidationCode::EmptyOrder);
    }
    if pizzas.len() > MAX_PIZZAS {
        return Err(OrderValidationCode::MaxPizzaCountExceeded);
    }
    Ok((pizzas, card))
}

fn check_pizzas_defined(pizzas: &[Pizza], catalog: &Catalog) -> Rule {
    if pizzas.iter().all(|p| catalog.is_pizza_defined(&p.name)) {
        Ok(())
    } else {
        Err(OrderValidationCode::PizzaNotDefined)
    }
}

/// An order without a date is not checked against opening days
fn check_open(restaurant: &Restaurant, date: Option<NaiveDate>) -> Rule {
    match date {
        Some(d) if !restaurant.is_open_on(d.weekday()) => {
            Err(OrderValidationCode::RestaurantClosed)
        }
        _ => Ok(()),
    }
}

fn check_prices(restaurant: &Restaurant, pizzas: &[Pizza]) -> Rule {
    for pizza in pizzas {
        let item = restaurant
            .menu_item(&pizza.name)
            .ok_or(OrderValidationCode::PizzaNotDefined)?;
        if item.price_in_pence != pizza.price_in_pence {
            return Err(OrderValidationCode::PriceForPizzaInvalid);
        }
    }
    Ok(())
}

/// Summed in u64 so that no menu prices can overflow
fn check_total(restaurant: &Restaurant, pizzas: &[Pizza], claimed_total: u32) -> Rule {
    let menu_total: u64 = pizzas
        .iter()
        .filter_map(|p| restaurant.menu_item(&p.name))
        .map(|item| u64::from(item.price_in_pence))
        .sum();

    if menu_total + u64::from(DELIVERY_CHARGE_PENCE) == u64::from(claimed_total) {
        Ok(())
    } else {
        Err(OrderValidationCode::TotalIncorrect)
    }
}

fn check_card(card: &CreditCardInformation, today: NaiveDate) -> Rule {
    if card.credit_card_number.chars().count() != 16 {
        return Err(OrderValidationCode::CardNumberInvalid);
    }
    if !is_expiry_valid(&card.credit_card_expiry, today) {
        return Err(OrderValidationCode::ExpiryDateInvalid);
    }
    if card.cvv.chars().count() != 3 {
        return Err(OrderValidationCode::CvvInvalid);
    }
    Ok(())
}

/// "MM/YY" that is not before the month containing `today`.
///
/// The year is "20" followed by everything after the slash, so "12/5" is
/// December 205 and "12/123" is December 20123. Whitespace is not trimmed.
fn is_expiry_valid(expiry: &str, today: NaiveDate) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    let (Ok(month), Ok(year)) = (month.parse::<u32>(), format!("20{}", year).parse::<i32>())
    else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    (year, month) >= (today.year(), today.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).unwrap()
    }

    fn catalog() -> Catalog {
        let civerinos = Restaurant::new(
            "Civerinos Slice",
            Position::new(-3.1912869215011597, 55.945535152517735),
            vec!["MONDAY".into(), "TUESDAY".into(), "FRIDAY".into()],
            vec![
                Pizza::new("R1: Margarita", 1000),
                Pizza::new("R1: Calzone", 1400),
            ],
        );
        let sora_lella = Restaurant::new(
            "Sora Lella Vegan Restaurant",
            Position::new(-3.202541470527649, 55.943284737579376),
            vec!["MONDAY".into(), "WEDNESDAY".into()],
            vec![
                Pizza::new("R2: Meat Lover", 1400),
                Pizza::new("R2: Vegan Delight", 1100),
            ],
        );
        Catalog::new(vec![civerinos, sora_lella], Vec::new(), None)
    }

    fn valid_order() -> Order {
        Order {
            order_no: Some("19514FE0".into()),
            order_date: Some(today()),
            price_total_in_pence: 2500,
            pizzas_in_order: Some(vec![
                Pizza::new("R1: Margarita", 1000),
                Pizza::new("R1: Calzone", 1400),
            ]),
            credit_card_information: Some(CreditCardInformation {
                credit_card_number: "4485959141852684".into(),
                credit_card_expiry: "10/29".into(),
                cvv: "816".into(),
            }),
        }
    }

    fn code_of(order: &Order) -> OrderValidationCode {
        validate_order(order, &catalog(), today()).order_validation_code
    }

    #[test]
    fn test_valid_order() {
        let result = validate_order(&valid_order(), &catalog(), today());
        assert!(result.is_valid());
        assert_eq!(result.order_validation_code, OrderValidationCode::NoError);
    }

    #[test]
    fn test_missing_parts_are_undefined() {
        let mut order = valid_order();
        order.pizzas_in_order = None;
        assert_eq!(code_of(&order), OrderValidationCode::Undefined);

        let mut order = valid_order();
        order.credit_card_information = None;
        assert_eq!(code_of(&order), OrderValidationCode::Undefined);
    }

    #[test]
    fn test_pizza_count_limits() {
        let mut order = valid_order();
        order.pizzas_in_order = Some(Vec::new());
        assert_eq!(code_of(&order), OrderValidationCode::EmptyOrder);

        order.pizzas_in_order = Some(vec![Pizza::new("R1: Margarita", 1000); 5]);
        assert_eq!(code_of(&order), OrderValidationCode::MaxPizzaCountExceeded);
    }

    #[test]
    fn test_unknown_pizza() {
        let mut order = valid_order();
        order.pizzas_in_order = Some(vec![Pizza::new("Pizza-Surprise", 1000)]);
        assert_eq!(code_of(&order), OrderValidationCode::PizzaNotDefined);

        order.pizzas_in_order = Some(vec![Pizza::new("  ", 1000)]);
        assert_eq!(code_of(&order), OrderValidationCode::PizzaNotDefined);
    }

    #[test]
    fn test_pizzas_from_two_restaurants() {
        let mut order = valid_order();
        order.pizzas_in_order = Some(vec![
            Pizza::new("R1: Margarita", 1000),
            Pizza::new("R2: Meat Lover", 1400),
        ]);
        assert_eq!(
            code_of(&order),
            OrderValidationCode::PizzaFromMultipleRestaurants
        );
    }

    #[test]
    fn test_restaurant_closed() {
        let mut order = valid_order();
        // 2025-01-22 is a Wednesday
        order.order_date = NaiveDate::from_ymd_opt(2025, 1, 22);
        assert_eq!(code_of(&order), OrderValidationCode::RestaurantClosed);

        order.order_date = None;
        assert_eq!(code_of(&order), OrderValidationCode::NoError);
    }

    #[test]
    fn test_wrong_pizza_price() {
        let mut order = valid_order();
        order.pizzas_in_order = Some(vec![
            Pizza::new("R1: Margarita", 900),
            Pizza::new("R1: Calzone", 1400),
        ]);
        order.price_total_in_pence = 2400;
        assert_eq!(code_of(&order), OrderValidationCode::PriceForPizzaInvalid);
    }

    #[test]
    fn test_total_must_include_delivery_charge() {
        let mut order = valid_order();
        order.price_total_in_pence = 2400;
        assert_eq!(code_of(&order), OrderValidationCode::TotalIncorrect);
    }

    #[test]
    fn test_huge_prices_do_not_overflow_total() {
        let pricey = Restaurant::new(
            "Gold Leaf",
            Position::new(-3.19, 55.94),
            vec!["MONDAY".into()],
            vec![Pizza::new("Gold", u32::MAX)],
        );
        let catalog = Catalog::new(vec![pricey], Vec::new(), None);
        let mut order = valid_order();
        order.pizzas_in_order = Some(vec![Pizza::new("Gold", u32::MAX); 4]);
        order.price_total_in_pence = u32::MAX;

        let result = validate_order(&order, &catalog, today());
        assert_eq!(
            result.order_validation_code,
            OrderValidationCode::TotalIncorrect
        );
    }

    #[test]
    fn test_card_checks() {
        let mut order = valid_order();
        let card = order.credit_card_information.as_mut().unwrap();
        card.credit_card_number = "123".into();
        assert_eq!(code_of(&order), OrderValidationCode::CardNumberInvalid);

        let mut order = valid_order();
        let card = order.credit_card_information.as_mut().unwrap();
        card.credit_card_expiry = "12/24".into();
        assert_eq!(code_of(&order), OrderValidationCode::ExpiryDateInvalid);

        let mut order = valid_order();
        let card = order.credit_card_information.as_mut().unwrap();
        card.cvv = "12".into();
        assert_eq!(code_of(&order), OrderValidationCode::CvvInvalid);
    }

    #[test]
    fn test_expiry_parsing() {
        assert!(is_expiry_valid("01/25", today()));
        assert!(is_expiry_valid("12/30", today()));
        assert!(!is_expiry_valid("12/24", today()));
        assert!(!is_expiry_valid("13/29", today()));
        assert!(!is_expiry_valid("1229", today()));
        assert!(!is_expiry_valid("ab/cd", today()));
        assert!(!is_expiry_valid("12/29/01", today()));
        // Read as "20" + digits after the slash
        assert!(!is_expiry_valid("12/5", today()));
        assert!(is_expiry_valid("12/123", today()));
        assert!(!is_expiry_valid(" 12/29", today()));
        assert!(!is_expiry_valid("12/ 29", today()));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_string(&OrderValidationResult::invalid(
            OrderValidationCode::CvvInvalid,
        ))
        .unwrap();
        assert_eq!(
            json,
            r#"{"orderStatus":"INVALID","orderValidationCode":"CVV_INVALID"}"#
        );
    }
}
