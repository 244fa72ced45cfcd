pub mod resolver;
pub mod validation;

pub use resolver::{resolve, resolve_restaurant};
pub use validation::{
    DELIVERY_CHARGE_PENCE, MAX_PIZZAS, OrderStatus, OrderValidationCode, OrderValidationResult,
    validate_order,
};
