//! Best-first open set with one live node per coordinate.
//!
//! A `BinaryHeap` gives O(log n) retrieval of the best key; a `BTreeMap`
//! keyed by coordinate holds the live node and answers membership queries.
//! Relaxing a node pushes a fresh heap key and leaves the old one behind;
//! superseded keys are recognized and dropped at pop time.

use std::cmp::Reverse;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BinaryHeap};

use gridstar_kernel::grid::Coord;

use crate::node::{FrontierKey, Node};

/// What happened to a node offered to the open set.
///
/// [`Frontier::offer`] only yields the first three; the engine adds the
/// rejection outcomes before a node ever reaches the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOutcome {
    /// New coordinate; node added.
    Inserted,
    /// Coordinate already open with a higher cost; cost and direction overwritten.
    Relaxed,
    /// Coordinate already open at equal or lower cost; node dropped.
    Discarded,
    /// Out of bounds or a wall.
    Impassable,
    /// Coordinate already expanded; closed cells are never reopened.
    AlreadyClosed,
}

impl OfferOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Relaxed => "relaxed",
            Self::Discarded => "discarded",
            Self::Impassable => "impassable",
            Self::AlreadyClosed => "already_closed",
        }
    }
}

/// A heap entry. `BinaryHeap` is a max-heap, so the key is wrapped in
/// `Reverse` to pop the lowest key first.
#[derive(Debug, PartialEq, Eq)]
struct HeapEntry {
    key: Reverse<FrontierKey>,
    coord: Coord,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Keys are unique per live entry (sequence differs), so the coord
        // comparison only settles stale duplicates.
        self.key
            .cmp(&other.key)
            .then_with(|| other.coord.cmp(&self.coord))
    }
}

#[derive(Debug, Clone)]
struct OpenEntry {
    node: Node,
    sequence: u64,
}

impl OpenEntry {
    fn key(&self) -> FrontierKey {
        FrontierKey::of(&self.node, self.sequence)
    }
}

/// The open set.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<HeapEntry>,
    open: BTreeMap<Coord, OpenEntry>,
    next_sequence: u64,
    high_water: usize,
    stale_dropped: u64,
}

impl Frontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a node: insert it, relax the existing node at its coordinate,
    /// or discard it.
    ///
    /// Relaxation only overwrites `cost_so_far` and `arrival_direction`; the
    /// estimate depends on the coordinate alone and cannot change.
    pub fn offer(&mut self, node: Node) -> OfferOutcome {
        match self.open.entry(node.coord) {
            Entry::Occupied(mut occupied) => {
                let live = occupied.get_mut();
                if node.cost_so_far >= live.node.cost_so_far {
                    return OfferOutcome::Discarded;
                }
                live.node.cost_so_far = node.cost_so_far;
                live.node.arrival_direction = node.arrival_direction;
                let key = live.key();
                self.heap.push(HeapEntry {
                    key: Reverse(key),
                    coord: node.coord,
                });
                OfferOutcome::Relaxed
            }
            Entry::Vacant(vacant) => {
                let sequence = self.next_sequence;
                self.next_sequence += 1;
                let coord = node.coord;
                let entry = vacant.insert(OpenEntry { node, sequence });
                let key = entry.key();
                self.heap.push(HeapEntry {
                    key: Reverse(key),
                    coord,
                });
                self.high_water = self.high_water.max(self.open.len());
                OfferOutcome::Inserted
            }
        }
    }

    /// Remove and return the best node, or `None` when no node is open.
    pub fn pop(&mut self) -> Option<Node> {
        while let Some(entry) = self.heap.pop() {
            let is_live = self
                .open
                .get(&entry.coord)
                .is_some_and(|live| live.key() == entry.key.0);
            if is_live {
                return self.open.remove(&entry.coord).map(|live| live.node);
            }
            self.stale_dropped += 1;
        }
        None
    }

    /// The best key currently open, without removing it.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.open.values().map(OpenEntry::key).min()
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.open.contains_key(&coord)
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Node> {
        self.open.get(&coord).map(|e| &e.node)
    }

    /// Open nodes in coordinate order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        self.open.values().map(|e| &e.node)
    }

    /// Open coordinates in coordinate order.
    #[must_use]
    pub fn coords(&self) -> Vec<Coord> {
        self.open.keys().copied().collect()
    }

    /// Number of open coordinates (not heap entries).
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Largest number of simultaneously open coordinates.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Superseded heap keys dropped by [`Frontier::pop`] so far.
    #[must_use]
    pub fn stale_dropped(&self) -> u64 {
        self.stale_dropped
    }
}
