//! Closed set: expanded coordinates with their final node data.
//!
//! Uses a `BTreeMap` (not `HashMap`) so that iteration by coordinate is
//! deterministic; expansion order is kept separately for traces and renderers.

use std::collections::BTreeMap;

use gridstar_kernel::grid::{Coord, Direction};

use crate::node::Node;

#[derive(Debug, Default)]
pub struct ClosedSet {
    nodes: BTreeMap<Coord, Node>,
    order: Vec<Coord>,
}

impl ClosedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Close a node. Returns `false` (and changes nothing) if its coordinate
    /// is already closed.
    pub fn insert(&mut self, node: Node) -> bool {
        if self.nodes.contains_key(&node.coord) {
            return false;
        }
        self.order.push(node.coord);
        self.nodes.insert(node.coord, node);
        true
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.nodes.contains_key(&coord)
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Node> {
        self.nodes.get(&coord)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Closed nodes in the order they were expanded.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.order.iter().filter_map(|c| self.nodes.get(c))
    }

    /// Closed coordinates in expansion order.
    #[must_use]
    pub fn expansion_order(&self) -> &[Coord] {
        &self.order
    }

    /// `(coord, arrival_direction)` pairs in expansion order.
    #[must_use]
    pub fn directions(&self) -> Vec<(Coord, Direction)> {
        self.iter().map(|n| (n.coord, n.arrival_direction)).collect()
    }
}
