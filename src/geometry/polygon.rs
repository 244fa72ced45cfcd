//! Point-in-polygon testing over a closed vertex ring.
//!
//! Uses ray casting with a horizontal ray pointing east from the query
//! point. Points lying on an edge are always classified as inside.

use crate::domain::Position;

/// Latitude nudge applied when the ray passes exactly through a vertex
const VERTEX_NUDGE: f64 = 1e-7;

/// Cross-product tolerance for the on-edge test
const COLLINEAR_TOLERANCE: f64 = 1e-10;

/// Test whether `point` lies inside (or on the boundary of) the polygon.
///
/// Only consecutive vertex pairs `(i - 1, i)` are walked, so the ring must
/// already be closed by the caller. Runs in O(vertex count) without
/// allocating.
pub fn is_inside(point: &Position, vertices: &[Position]) -> bool {
    let mut crossings = 0usize;

    for edge in vertices.windows(2) {
        let (v1, v2) = (&edge[0], &edge[1]);

        if ray_crosses_edge(point, v1, v2) {
            crossings += 1;
        }

        if is_on_edge(point, v1, v2) {
            return true;
        }
    }

    crossings % 2 == 1
}

/// Does the eastward ray from `p` cross the edge (v1, v2)?
fn ray_crosses_edge(p: &Position, v1: &Position, v2: &Position) -> bool {
    let (lo, hi) = if v1.lat > v2.lat { (v2, v1) } else { (v1, v2) };

    // Local copy only: the nudge must not leak into the next edge test
    let mut lat = p.lat;
    if lat == lo.lat || lat == hi.lat {
        lat += VERTEX_NUDGE;
    }

    if lat < lo.lat || lat > hi.lat {
        return false;
    }

    if p.lng > lo.lng.max(hi.lng) {
        return false;
    }
    if p.lng < lo.lng.min(hi.lng) {
        return true;
    }

    let slope = (hi.lng - lo.lng) / (hi.lat - lo.lat);
    let intersect_lng = lo.lng + (lat - lo.lat) * slope;

    p.lng <= intersect_lng
}

/// Is `p` collinear with the edge and within its bounding box?
fn is_on_edge(p: &Position, a: &Position, b: &Position) -> bool {
    let cross = (p.lat - a.lat) * (b.lng - a.lng) - (p.lng - a.lng) * (b.lat - a.lat);
    if cross.abs() > COLLINEAR_TOLERANCE {
        return false;
    }

    let (min_lng, max_lng) = (a.lng.min(b.lng), a.lng.max(b.lng));
    let (min_lat, max_lat) = (a.lat.min(b.lat), a.lat.max(b.lat));

    (min_lng..=max_lng).contains(&p.lng) && (min_lat..=max_lat).contains(&p.lat)
}
