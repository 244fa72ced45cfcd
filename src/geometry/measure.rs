use crate::domain::Position;
use crate::error::GeometryError;

/// Length of a single drone move, in degrees
pub const MOVE_LENGTH: f64 = 0.00015;

/// Two positions closer than this are considered the same place
pub const CLOSE_DISTANCE: f64 = 0.00015;

/// Check that a position holds a finite, in-range longitude and latitude
pub fn validate_position(position: &Position) -> Result<(), GeometryError> {
    let lng_ok = position.lng.is_finite() && (-180.0..=180.0).contains(&position.lng);
    let lat_ok = position.lat.is_finite() && (-90.0..=90.0).contains(&position.lat);

    if lng_ok && lat_ok {
        Ok(())
    } else {
        Err(GeometryError::InvalidCoordinate {
            lng: position.lng,
            lat: position.lat,
        })
    }
}

/// Planar Euclidean distance between two validated positions
pub fn distance(a: &Position, b: &Position) -> Result<f64, GeometryError> {
    validate_position(a)?;
    validate_position(b)?;
    Ok(a.distance_to(b))
}

pub fn is_close_to(a: &Position, b: &Position) -> Result<bool, GeometryError> {
    Ok(distance(a, b)? < CLOSE_DISTANCE)
}

/// Position one move away from `start` at `angle_deg`, measured
/// counter-clockwise from east.
///
/// Any angle in [0, 360] is accepted, not just the sixteen compass
/// headings the planner uses.
pub fn next_position(start: &Position, angle_deg: f64) -> Result<Position, GeometryError> {
    if !(0.0..=360.0).contains(&angle_deg) {
        return Err(GeometryError::InvalidAngle(angle_deg));
    }
    validate_position(start)?;

    let angle = angle_deg.to_radians();
    let next = Position::new(
        start.lng + angle.cos() * MOVE_LENGTH,
        start.lat + angle.sin() * MOVE_LENGTH,
    );

    validate_position(&next)?;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_position_ranges() {
        assert!(validate_position(&Position::new(180.0, -90.0)).is_ok());
        assert!(validate_position(&Position::new(-3.19, 55.94)).is_ok());
        assert!(validate_position(&Position::new(180.1, 0.0)).is_err());
        assert!(validate_position(&Position::new(0.0, -90.5)).is_err());
        assert!(validate_position(&Position::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn test_distance() {
        let a = Position::new(-3.192473, 55.946233);
        let b = Position::new(-3.192473, 55.942617);
        assert!((distance(&a, &b).unwrap() - 0.003616).abs() < 1e-9);
        assert!(distance(&a, &Position::new(0.0, 91.0)).is_err());
    }

    #[test]
    fn test_is_close_to() {
        let a = Position::new(-3.192473, 55.946233);
        let near = Position::new(-3.192473, 55.946233 + 0.0001);
        let far = Position::new(-3.192473, 55.946233 + 0.0002);
        assert!(is_close_to(&a, &near).unwrap());
        assert!(!is_close_to(&a, &far).unwrap());
    }

    #[test]
    fn test_next_position_east_and_north() {
        let start = Position::new(-3.192473, 55.946233);

        let east = next_position(&start, 0.0).unwrap();
        assert!((east.lng - (start.lng + MOVE_LENGTH)).abs() < 1e-12);
        assert!((east.lat - start.lat).abs() < 1e-12);

        let north = next_position(&start, 90.0).unwrap();
        assert!((north.lng - start.lng).abs() < 1e-12);
        assert!((north.lat - (start.lat + MOVE_LENGTH)).abs() < 1e-12);
    }

    #[test]
    fn test_next_position_rejects_bad_input() {
        let start = Position::new(-3.192473, 55.946233);
        assert_eq!(
            next_position(&start, 361.0),
            Err(GeometryError::InvalidAngle(361.0))
        );
        assert!(next_position(&start, -1.0).is_err());
        assert!(next_position(&Position::new(180.0, 0.0), 0.0).is_err());
    }
}
