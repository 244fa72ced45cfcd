use std::cmp::Ordering;

use crate::domain::Position;
use crate::geometry::LatticePoint;

/// Deduplication key: exact lattice coordinates plus the central-area flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    lattice: LatticePoint,
    inside_central: bool,
}

impl StateKey {
    pub(crate) fn new(lattice: LatticePoint, inside_central: bool) -> Self {
        Self {
            lattice,
            inside_central,
        }
    }
}

/// A node in the search's node pool.
///
/// `parent` indexes into the same pool. Parents are always created before
/// their children, so following parents strictly decreases the index and
/// can never cycle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub lattice: LatticePoint,
    pub position: Position,
    pub g: f64,
    pub h: f64,
    pub parent: Option<usize>,
    pub inside_central: bool,
}

impl SearchNode {
    pub fn key(&self) -> StateKey {
        StateKey::new(self.lattice, self.inside_central)
    }
}

/// Entry in the open set, pointing at a pool node
#[derive(Debug, Clone, Copy)]
pub(crate) struct OpenEntry {
    pub f: f64,
    pub g: f64,
    /// Pool index; doubles as the insertion sequence number
    pub index: usize,
}

impl OpenEntry {
    pub fn new(node: &SearchNode, index: usize, heuristic_weight: f64) -> Self {
        Self {
            f: node.g + heuristic_weight * node.h,
            g: node.g,
            index,
        }
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    /// Reversed for min-heap behavior: lowest f first, then lowest g,
    /// then earliest inserted.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.g.total_cmp(&self.g))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
