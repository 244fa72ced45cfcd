//! The sixteen compass headings a drone may fly, and the exact lattice
//! their moves generate.
//!
//! Every heading is a multiple of 22.5°. Headings eight apart are exact
//! opposites, so any sequence of moves from an origin lands on
//! `origin + step * sum(c_j * u_j)` where `u_j` is the unit vector at
//! `j * 22.5°` (counter-clockwise from east) for `j` in `0..8` and the
//! `c_j` are integers. The eight `u_j` are linearly independent over the
//! rationals, so two move sequences reach the same point exactly when
//! their coefficient vectors match. `LatticePoint` stores those integers
//! and is what the planner deduplicates on.

use crate::domain::Position;

const C: f64 = 0.923_879_532_511_286_7; // cos 22.5°
const S: f64 = 0.382_683_432_365_089_8; // sin 22.5°
const R: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Unit vectors at 0°, 22.5°, ..., 157.5° counter-clockwise from east
const BASIS: [(f64, f64); 8] = [
    (1.0, 0.0),
    (C, S),
    (R, R),
    (S, C),
    (0.0, 1.0),
    (-S, C),
    (-R, R),
    (-C, S),
];

/// Compass heading, clockwise from north in 22.5° increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassDirection {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; 16] = [
        CompassDirection::N,
        CompassDirection::Nne,
        CompassDirection::Ne,
        CompassDirection::Ene,
        CompassDirection::E,
        CompassDirection::Ese,
        CompassDirection::Se,
        CompassDirection::Sse,
        CompassDirection::S,
        CompassDirection::Ssw,
        CompassDirection::Sw,
        CompassDirection::Wsw,
        CompassDirection::W,
        CompassDirection::Wnw,
        CompassDirection::Nw,
        CompassDirection::Nnw,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Compass bearing in degrees (0 = north, 90 = east)
    pub fn bearing(self) -> f64 {
        self.index() as f64 * 22.5
    }

    /// Which basis vector this heading moves along, and in which sense
    fn basis_component(self) -> (usize, i32) {
        // Math angle in 22.5° units, counter-clockwise from east
        let angle = (4 + 16 - self.index()) % 16;
        if angle < 8 { (angle, 1) } else { (angle - 8, -1) }
    }

    /// Unit displacement (d_lng, d_lat) for this heading
    pub fn unit_vector(self) -> (f64, f64) {
        let (j, sign) = self.basis_component();
        let (x, y) = BASIS[j];
        (x * sign as f64, y * sign as f64)
    }
}

/// A point reachable from the search origin, as integer multiples of the
/// eight basis headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LatticePoint([i32; 8]);

impl LatticePoint {
    pub const ORIGIN: LatticePoint = LatticePoint([0; 8]);

    /// The lattice point one move further along `direction`
    pub fn step(self, direction: CompassDirection) -> Self {
        let (j, sign) = direction.basis_component();
        let mut coeffs = self.0;
        coeffs[j] += sign;
        Self(coeffs)
    }

    /// Coordinates of this lattice point for a given origin and step length.
    ///
    /// Always sums in basis order, so a lattice point maps to the same
    /// bits no matter which path reached it.
    pub fn to_position(self, origin: &Position, step: f64) -> Position {
        let mut dx = 0.0;
        let mut dy = 0.0;
        for (c, (bx, by)) in self.0.iter().zip(BASIS.iter()) {
            let c = *c as f64;
            dx += c * bx;
            dy += c * by;
        }
        Position::new(origin.lng + step * dx, origin.lat + step * dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vectors_have_unit_length() {
        for dir in CompassDirection::ALL {
            let (x, y) = dir.unit_vector();
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-12, "{:?}", dir);
        }
    }

    #[test]
    fn test_unit_vectors_match_bearing() {
        for dir in CompassDirection::ALL {
            let (x, y) = dir.unit_vector();
            let bearing = dir.bearing().to_radians();
            assert!((x - bearing.sin()).abs() < 1e-12, "{:?}", dir);
            assert!((y - bearing.cos()).abs() < 1e-12, "{:?}", dir);
        }
    }

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(CompassDirection::N.unit_vector(), (0.0, 1.0));
        assert_eq!(CompassDirection::E.unit_vector(), (1.0, 0.0));
        assert_eq!(CompassDirection::S.unit_vector(), (-0.0, -1.0));
        assert_eq!(CompassDirection::W.unit_vector(), (-1.0, -0.0));
    }

    #[test]
    fn test_opposite_moves_cancel() {
        let p = LatticePoint::ORIGIN
            .step(CompassDirection::Nne)
            .step(CompassDirection::Ssw);
        assert_eq!(p, LatticePoint::ORIGIN);
    }

    #[test]
    fn test_move_order_does_not_matter() {
        let a = LatticePoint::ORIGIN
            .step(CompassDirection::Ne)
            .step(CompassDirection::Ene)
            .step(CompassDirection::S);
        let b = LatticePoint::ORIGIN
            .step(CompassDirection::S)
            .step(CompassDirection::Ene)
            .step(CompassDirection::Ne);
        assert_eq!(a, b);

        let origin = Position::new(-3.19, 55.94);
        assert_eq!(
            a.to_position(&origin, 0.00015),
            b.to_position(&origin, 0.00015)
        );
    }

    #[test]
    fn test_origin_maps_to_origin_exactly() {
        let origin = Position::new(-3.192473, 55.946233);
        assert_eq!(LatticePoint::ORIGIN.to_position(&origin, 0.00015), origin);
    }

    #[test]
    fn test_single_step_length() {
        let origin = Position::new(-3.192473, 55.946233);
        for dir in CompassDirection::ALL {
            let p = LatticePoint::ORIGIN.step(dir).to_position(&origin, 0.00015);
            assert!((origin.distance_to(&p) - 0.00015).abs() < 1e-12);
        }
    }
}
