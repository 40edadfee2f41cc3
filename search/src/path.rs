//! Path reconstruction from arrival-direction labels.

use gridstar_kernel::grid::{Coord, Direction, Grid};
use gridstar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gridstar_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::closed::ClosedSet;
use crate::error::PathError;
use crate::node::Node;

/// A start-to-goal route of adjacent passable cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    coords: Vec<Coord>,
    cost: i64,
}

impl SearchPath {
    /// Coordinates from start to goal, both inclusive.
    #[must_use]
    pub fn start_to_goal(&self) -> &[Coord] {
        &self.coords
    }

    /// Coordinates from goal back to start, the order a backtrace visits them.
    #[must_use]
    pub fn goal_to_start(&self) -> Vec<Coord> {
        self.coords.iter().rev().copied().collect()
    }

    /// `cost_so_far` of the goal node.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Number of moves (cells minus one).
    #[must_use]
    pub fn moves(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "coords": self.coords.iter().map(|c| [c.x, c.y]).collect::<Vec<_>>(),
            "cost": self.cost,
        })
    }

    /// Domain-separated digest of the canonical path.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPath, &bytes))
    }
}

/// Walk from `terminal` to the grid's start by following direction labels
/// through `closed`.
///
/// The terminal node itself need not be closed. The walk is bounded by the
/// closed-set size, so a corrupt labeling fails instead of looping.
///
/// # Errors
///
/// - [`PathError::LeftClosedSet`] if a label leads outside the closed set
/// - [`PathError::MissingDirection`] if a non-start node has no label
/// - [`PathError::CycleDetected`] if the start is never reached
pub fn reconstruct_path(
    grid: &Grid,
    closed: &ClosedSet,
    terminal: &Node,
) -> Result<SearchPath, PathError> {
    let start = grid.start();
    let limit = closed.len() + 1;
    let mut coords = vec![terminal.coord];
    let mut current = terminal.coord;
    let mut direction = terminal.arrival_direction;

    while current != start {
        if coords.len() > limit {
            return Err(PathError::CycleDetected { steps: coords.len() });
        }
        if direction == Direction::None {
            return Err(PathError::MissingDirection { coord: current });
        }
        current = current.step(direction);
        let parent = closed
            .get(current)
            .ok_or(PathError::LeftClosedSet { coord: current })?;
        direction = parent.arrival_direction;
        coords.push(current);
    }

    coords.reverse();
    Ok(SearchPath {
        coords,
        cost: terminal.cost_so_far,
    })
}
