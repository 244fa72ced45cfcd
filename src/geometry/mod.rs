pub mod compass;
pub mod measure;
pub mod polygon;

pub use compass::{CompassDirection, LatticePoint};
pub use measure::{
    CLOSE_DISTANCE, MOVE_LENGTH, distance, is_close_to, next_position, validate_position,
};
pub use polygon::is_inside;
