//! Weighted A* over the sixteen-heading movement graph.
//!
//! - Every move has the same length (`step`) and costs 1
//! - `h = distance_to_goal / step`, and nodes are ordered by
//!   `f = g + heuristic_weight * h`; a weight above 1 trades optimality
//!   for speed
//! - A node counts as the goal once it is strictly closer than
//!   `tolerance` to the destination; the first such node popped wins
//! - Each (lattice point, inside-central) state is generated at most once
//! - The lattice is unbounded, so the search gives up as exhausted after
//!   `max_expansions` expansions

use log::{debug, trace};
use std::collections::{BinaryHeap, HashSet};

use super::PlannerConfig;
use super::node::{OpenEntry, SearchNode, StateKey};
use super::path::PathStep;
use crate::domain::Position;
use crate::error::PlanError;
use crate::geometry::{CompassDirection, LatticePoint};
use crate::zones::ZoneMap;

/// Outcome of a successful search: waypoints start to goal, plus the
/// number of nodes expanded to find them.
pub(crate) struct RawPath {
    pub steps: Vec<PathStep>,
    pub nodes_expanded: usize,
}

pub(crate) fn search(
    start: Position,
    goal: Position,
    zones: &ZoneMap<'_>,
    config: &PlannerConfig,
) -> Result<RawPath, PlanError> {
    let heuristic = |p: &Position| p.distance_to(&goal) / config.step;

    let start_node = SearchNode {
        lattice: LatticePoint::ORIGIN,
        position: start,
        g: 0.0,
        h: heuristic(&start),
        parent: None,
        inside_central: zones.is_in_central(&start),
    };

    debug!(
        "[AStar] search: start=({:.6},{:.6}) goal=({:.6},{:.6}) h={:.1} inside_central={}",
        start.lng, start.lat, goal.lng, goal.lat, start_node.h, start_node.inside_central
    );

    let mut pool: Vec<SearchNode> = vec![start_node];
    let mut visited: HashSet<StateKey> = HashSet::new();
    visited.insert(start_node.key());

    let mut open = BinaryHeap::new();
    open.push(OpenEntry::new(&start_node, 0, config.heuristic_weight));

    let mut expanded = 0usize;

    while let Some(entry) = open.pop() {
        let current = pool[entry.index];

        if current.position.distance_to(&goal) < config.tolerance {
            debug!(
                "[AStar] reached goal: g={} expanded={} generated={}",
                current.g,
                expanded,
                pool.len()
            );
            return Ok(RawPath {
                steps: reconstruct_path(&pool, entry.index),
                nodes_expanded: expanded,
            });
        }

        if expanded >= config.max_expansions {
            debug!(
                "[AStar] FAILED: expansion budget of {} exhausted, {} nodes still open",
                config.max_expansions,
                open.len() + 1
            );
            return Err(PlanError::SearchExhausted { expanded });
        }
        expanded += 1;

        trace!(
            "[AStar] expand #{} ({:.6},{:.6}) g={} f={:.3}",
            entry.index, current.position.lng, current.position.lat, current.g, entry.f
        );

        for direction in CompassDirection::ALL {
            let lattice = current.lattice.step(direction);
            let position = lattice.to_position(&start, config.step);

            let lands_in_central = zones.is_in_central(&position);
            if !zones.is_valid_move(
                current.inside_central,
                lands_in_central,
                &current.position,
                &position,
            ) {
                continue;
            }

            // Once inside the central area the flag stays set
            let inside_central = current.inside_central || lands_in_central;

            if !visited.insert(StateKey::new(lattice, inside_central)) {
                continue;
            }

            let node = SearchNode {
                lattice,
                position,
                g: current.g + 1.0,
                h: heuristic(&position),
                parent: Some(entry.index),
                inside_central,
            };
            let index = pool.len();
            pool.push(node);
            open.push(OpenEntry::new(&node, index, config.heuristic_weight));
        }
    }

    debug!(
        "[AStar] FAILED: open set exhausted after {} expansions",
        expanded
    );
    Err(PlanError::SearchExhausted { expanded })
}

/// Walk parent links from `end` back to the start, then flip to
/// start-to-goal order.
fn reconstruct_path(pool: &[SearchNode], end: usize) -> Vec<PathStep> {
    let mut steps = Vec::new();
    let mut cursor = Some(end);

    while let Some(index) = cursor {
        let node = &pool[index];
        steps.push(PathStep {
            position: node.position,
            inside_central: node.inside_central,
        });
        cursor = node.parent;
    }

    steps.reverse();
    steps
}
