//! Flight constraints built on point-in-polygon tests.
//!
//! Two rules prune drone moves:
//! - a move may not end inside a no-fly zone
//! - once the drone has entered the central area it may not leave it
//!
//! Only the end point of a move is checked against no-fly zones. A move
//! that clips the corner of a zone without landing in it is accepted.

use geo::Rect;

use crate::domain::{NamedRegion, Position};
use crate::geometry::is_inside;

/// True iff `to` lies inside (or on the edge of) any of the zones
pub fn violates_no_fly_zone(_from: &Position, to: &Position, zones: &[NamedRegion]) -> bool {
    zones.iter().any(|zone| is_inside(to, &zone.vertices))
}

/// True iff `point` is inside the central region; false when there is none
pub fn classify(point: &Position, central: Option<&NamedRegion>) -> bool {
    central.is_some_and(|region| is_inside(point, &region.vertices))
}

/// Accept or reject a single move.
///
/// Rejected when the drone was inside the central area and would now be
/// outside it, or when the move lands in a no-fly zone.
pub fn is_valid_move(
    from_inside_central: bool,
    to_inside_central: bool,
    from: &Position,
    to: &Position,
    zones: &[NamedRegion],
) -> bool {
    if from_inside_central && !to_inside_central {
        return false;
    }
    !violates_no_fly_zone(from, to, zones)
}

/// A polygon with its bounding box cached for cheap rejection.
///
/// The box only decides for closed rings. An open ring is walked pair by
/// pair without its closing edge, so it can claim points outside its box.
#[derive(Debug, Clone)]
struct BoundedRegion<'a> {
    region: &'a NamedRegion,
    bounds: Option<Rect<f64>>,
}

impl<'a> BoundedRegion<'a> {
    fn new(region: &'a NamedRegion) -> Self {
        let vertices = &region.vertices;
        let closed = vertices.len() > 1 && vertices.first() == vertices.last();
        Self {
            region,
            bounds: if closed { region.bounds() } else { None },
        }
    }

    fn contains(&self, point: &Position) -> bool {
        if let Some(rect) = self.bounds {
            let (min, max) = (rect.min(), rect.max());
            if point.lng < min.x || point.lng > max.x || point.lat < min.y || point.lat > max.y {
                return false;
            }
        }
        is_inside(point, &self.region.vertices)
    }
}

/// Borrowed view of the no-fly zones and central area for one planning
/// request.
///
/// Answers the same questions as the free functions in this module, but
/// skips the ray cast for points outside a closed polygon's bounding box.
/// The answers are identical: a point outside the inclusive bounding box of
/// a closed ring can never be inside or on it.
#[derive(Debug, Clone)]
pub struct ZoneMap<'a> {
    no_fly: Vec<BoundedRegion<'a>>,
    central: Option<BoundedRegion<'a>>,
}

impl<'a> ZoneMap<'a> {
    pub fn new(no_fly_zones: &'a [NamedRegion], central_area: Option<&'a NamedRegion>) -> Self {
        Self {
            no_fly: no_fly_zones.iter().map(BoundedRegion::new).collect(),
            central: central_area.map(BoundedRegion::new),
        }
    }

    pub fn no_fly_zone_count(&self) -> usize {
        self.no_fly.len()
    }

    pub fn has_central_area(&self) -> bool {
        self.central.is_some()
    }

    pub fn violates_no_fly_zone(&self, _from: &Position, to: &Position) -> bool {
        self.no_fly.iter().any(|zone| zone.contains(to))
    }

    pub fn is_in_central(&self, point: &Position) -> bool {
        self.central.as_ref().is_some_and(|c| c.contains(point))
    }

    pub fn is_valid_move(
        &self,
        from_inside_central: bool,
        to_inside_central: bool,
        from: &Position,
        to: &Position,
    ) -> bool {
        if from_inside_central && !to_inside_central {
            return false;
        }
        !self.violates_no_fly_zone(from, to)
    }
}
