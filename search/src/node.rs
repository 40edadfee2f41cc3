//! Search nodes and the frontier ordering key.

use gridstar_kernel::grid::{Coord, Direction};

/// A discovered grid cell with path-cost metadata.
///
/// `arrival_direction` points from this cell back toward the cell it was
/// discovered from, so a backtrace simply follows the labels. The start node
/// carries [`Direction::None`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub coord: Coord,
    /// Steps from the start along the best route discovered so far.
    pub cost_so_far: i64,
    /// Manhattan distance to the goal (0 at the goal).
    pub estimated_remaining: i64,
    pub arrival_direction: Direction,
}

impl Node {
    /// `cost_so_far + estimated_remaining`.
    #[must_use]
    pub fn total_estimated_cost(&self) -> i64 {
        self.cost_so_far.saturating_add(self.estimated_remaining)
    }

    pub(crate) fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "coord": [self.coord.x, self.coord.y],
            "cost_so_far": self.cost_so_far,
            "direction": self.arrival_direction.as_str(),
            "estimated_remaining": self.estimated_remaining,
        })
    }
}

/// The frontier ordering key: `(total, cost_so_far, sequence)`.
///
/// Lower total estimated cost first; on a tie the node closer to the start
/// wins; remaining ties go to the coordinate discovered earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub total: i64,
    pub cost_so_far: i64,
    /// Order in which the coordinate first entered the frontier.
    pub sequence: u64,
}

impl FrontierKey {
    #[must_use]
    pub fn of(node: &Node, sequence: u64) -> Self {
        Self {
            total: node.total_estimated_cost(),
            cost_so_far: node.cost_so_far,
            sequence,
        }
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.total
            .cmp(&other.total)
            .then(self.cost_so_far.cmp(&other.cost_so_far))
            .then(self.sequence.cmp(&other.sequence))
    }
}
