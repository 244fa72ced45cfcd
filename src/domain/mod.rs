pub mod catalog;
pub mod order;
pub mod position;
pub mod region;
pub mod restaurant;

pub use catalog::Catalog;
pub use order::{CreditCardInformation, Order};
pub use position::Position;
pub use region::NamedRegion;
pub use restaurant::{Pizza, Restaurant};
