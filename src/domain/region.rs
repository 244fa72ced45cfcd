use geo::{BoundingRect, LineString, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Position;
use crate::error::GeometryError;
use crate::geometry::validate_position;

/// A named polygon given as a closed vertex ring.
///
/// Callers are expected to close the ring (first vertex == last vertex);
/// containment only walks consecutive vertex pairs and never adds a
/// closing edge of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRegion {
    pub name: String,
    pub vertices: Vec<Position>,
}

impl NamedRegion {
    pub fn new(name: impl Into<String>, vertices: Vec<Position>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Axis-aligned bounding rectangle of the vertices, if there are any
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let ring: LineString<f64> = self.vertices.iter().map(|p| p.to_coord()).collect();
        ring.bounding_rect()
    }

    /// Check the region is usable as a containment polygon.
    ///
    /// Rejects empty rings, out-of-range vertices, rings whose last vertex
    /// does not repeat the first, and rings that traverse the same edge
    /// twice (in either direction).
    pub fn validate(&self) -> Result<(), GeometryError> {
        let (first, last) = match (self.vertices.first(), self.vertices.last()) {
            (Some(f), Some(l)) => (f, l),
            _ => return Err(GeometryError::EmptyRegion(self.name.clone())),
        };

        for vertex in &self.vertices {
            validate_position(vertex)?;
        }

        if first != last {
            return Err(GeometryError::OpenRing(self.name.clone()));
        }

        let mut seen = HashSet::new();
        for (index, pair) in self.vertices.windows(2).enumerate() {
            if !seen.insert(edge_key(pair[0], pair[1])) {
                return Err(GeometryError::DuplicateEdge {
                    name: self.name.clone(),
                    index: index + 1,
                });
            }
        }

        Ok(())
    }
}

type EdgeKey = ((u64, u64), (u64, u64));

/// Direction-independent identity of an edge
fn edge_key(a: Position, b: Position) -> EdgeKey {
    let ka = (a.lng.to_bits(), a.lat.to_bits());
    let kb = (b.lng.to_bits(), b.lat.to_bits());
    let a_first = a.lng < b.lng || (a.lng == b.lng && a.lat < b.lat);
    if a_first { (ka, kb) } else { (kb, ka) }
}
