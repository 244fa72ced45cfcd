use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Pizza;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCardInformation {
    #[serde(default)]
    pub credit_card_number: String,
    /// "MM/YY"
    #[serde(default)]
    pub credit_card_expiry: String,
    #[serde(default)]
    pub cvv: String,
}

/// A customer order as submitted to the delivery service.
///
/// `pizzas_in_order` and `credit_card_information` are optional so that a
/// structurally incomplete order still deserializes and can be reported as
/// such by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub order_no: Option<String>,
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub price_total_in_pence: u32,
    #[serde(default)]
    pub pizzas_in_order: Option<Vec<Pizza>>,
    #[serde(default)]
    pub credit_card_information: Option<CreditCardInformation>,
}

impl Order {
    /// Pizzas in the order, or an empty slice when the list is missing
    pub fn pizzas(&self) -> &[Pizza] {
        self.pizzas_in_order.as_deref().unwrap_or(&[])
    }
}
