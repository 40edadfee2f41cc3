//! Read-only view of an engine for renderers and observers.

use gridstar_kernel::grid::{Coord, Direction};

use crate::search::SearchStatus;

/// Owned copy of the state a renderer needs after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub start: Coord,
    pub goal: Coord,
    pub status: SearchStatus,
    pub steps: u64,
    /// Open coordinates, sorted.
    pub frontier: Vec<Coord>,
    /// Closed coordinates with their arrival direction, in expansion order.
    pub closed: Vec<(Coord, Direction)>,
    /// The goal coordinate once the search has succeeded.
    pub terminal: Option<Coord>,
}

impl SearchSnapshot {
    #[must_use]
    pub fn is_open(&self, coord: Coord) -> bool {
        self.frontier.binary_search(&coord).is_ok()
    }

    /// Arrival direction of a closed coordinate.
    #[must_use]
    pub fn closed_direction(&self, coord: Coord) -> Option<Direction> {
        self.closed
            .iter()
            .find(|(c, _)| *c == coord)
            .map(|(_, d)| *d)
    }
}
