//! The A* engine: a single-step state machine over one grid.
//!
//! ```text
//! Running ──step──▶ Running        (best node closed, neighbors offered)
//!         ──step──▶ Succeeded      (best node is the goal)
//!         ──step──▶ Exhausted      (no eligible node left)
//! ```
//!
//! The engine never suspends or sleeps; callers choose when to call
//! [`SearchEngine::step`] and can inspect the frontier and closed set in
//! between.

use log::{debug, trace, warn};

use gridstar_kernel::grid::{Coord, Direction, Grid};

use crate::closed::ClosedSet;
use crate::error::{PathError, SearchError};
use crate::frontier::{Frontier, OfferOutcome};
use crate::node::Node;
use crate::path::{reconstruct_path, SearchPath};
use crate::policy::SearchPolicy;
use crate::snapshot::SearchSnapshot;
use crate::trace::{SearchStats, SearchTrace, StepEvent, StepOutcome};

/// Neighbor generation order, as directions of travel. Each neighbor is
/// labeled with the reverse, which points back at the expanded node.
const EXPANSION_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Up,
    Direction::Right,
    Direction::Left,
];

/// Where the search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    /// The goal was popped; see [`SearchEngine::terminal_node`].
    Succeeded,
    /// No path exists. Final; retrying gives the same answer.
    Exhausted,
}

impl SearchStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Exhausted => "exhausted",
        }
    }
}

/// One A* search over a borrowed grid.
///
/// All mutable search state lives here, so independent engines over the
/// same grid do not interact.
#[derive(Debug)]
pub struct SearchEngine<'g> {
    grid: &'g Grid,
    policy: SearchPolicy,
    frontier: Frontier,
    closed: ClosedSet,
    status: SearchStatus,
    terminal: Option<Node>,
    stats: SearchStats,
    trace: Option<SearchTrace>,
}

impl<'g> SearchEngine<'g> {
    /// Engine with the default policy, frontier seeded with the start node.
    #[must_use]
    pub fn new(grid: &'g Grid) -> Self {
        Self::seeded(grid, SearchPolicy::default())
    }

    /// Engine with an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicyMode`] if the policy selects a
    /// reserved option. No search state is created in that case.
    pub fn with_policy(grid: &'g Grid, policy: SearchPolicy) -> Result<Self, SearchError> {
        if let Err(err) = policy.validate() {
            debug!("[AStar] policy rejected: {err}");
            return Err(err);
        }
        Ok(Self::seeded(grid, policy))
    }

    fn seeded(grid: &'g Grid, policy: SearchPolicy) -> Self {
        let trace = policy.record_trace.then(SearchTrace::default);
        let mut engine = Self {
            grid,
            policy,
            frontier: Frontier::new(),
            closed: ClosedSet::new(),
            status: SearchStatus::Running,
            terminal: None,
            stats: SearchStats::default(),
            trace,
        };
        // Parent cost -1 gives the start node a cost of 0.
        let start = engine.make_node(grid.start(), Direction::None, -1);
        let outcome = engine.frontier.offer(start);
        engine.stats.record_offer(outcome);
        engine.sync_frontier_stats();
        trace!(
            "[AStar] new search: start={} goal={} grid={}x{}",
            grid.start(),
            grid.goal(),
            grid.width(),
            grid.height()
        );
        engine
    }

    /// Build a node one step beyond a parent with cost `parent_cost`.
    ///
    /// The estimate is the Manhattan distance to the goal, and exactly 0 at
    /// the goal itself.
    #[must_use]
    pub fn make_node(&self, coord: Coord, arrival_direction: Direction, parent_cost: i64) -> Node {
        let estimated_remaining = if self.grid.is_goal(coord) {
            0
        } else {
            coord.manhattan(self.grid.goal())
        };
        Node {
            coord,
            cost_so_far: parent_cost + 1,
            estimated_remaining,
            arrival_direction,
        }
    }

    /// Offer a node to the open set.
    ///
    /// Impassable and already-closed coordinates are rejected outright, even
    /// when the offered cost is lower than the closed node's. Otherwise the
    /// frontier inserts, relaxes or discards it.
    pub fn try_add_open_node(&mut self, node: Node) -> OfferOutcome {
        let outcome = if !self.grid.is_passable(node.coord) {
            OfferOutcome::Impassable
        } else if self.closed.contains(node.coord) {
            OfferOutcome::AlreadyClosed
        } else {
            self.frontier.offer(node)
        };
        self.stats.record_offer(outcome);
        self.sync_frontier_stats();
        outcome
    }

    /// Offer the four neighbors of `node`: `(x, y+1)`, `(x, y-1)`,
    /// `(x+1, y)`, `(x-1, y)`, in that order.
    pub fn expand(&mut self, node: &Node) -> Vec<(Coord, OfferOutcome)> {
        EXPANSION_ORDER
            .iter()
            .map(|&travel| {
                let neighbor =
                    self.make_node(node.coord.step(travel), travel.reverse(), node.cost_so_far);
                let coord = neighbor.coord;
                (coord, self.try_add_open_node(neighbor))
            })
            .collect()
    }

    /// Advance the search by one transition.
    ///
    /// On a terminal engine this is a no-op that returns the terminal status.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvariantViolation`] if frontier/closed-set
    /// bookkeeping is inconsistent. The engine must not be stepped again.
    pub fn step(&mut self) -> Result<SearchStatus, SearchError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let step = self.stats.steps;
        self.stats.steps += 1;

        let mut skipped = 0u64;
        let popped = loop {
            let Some(node) = self.frontier.pop() else {
                break None;
            };
            if self.closed.contains(node.coord) || !self.grid.is_passable(node.coord) {
                skipped += 1;
                continue;
            }
            break Some(node);
        };
        self.stats.stale_skipped += skipped;
        self.sync_frontier_stats();

        let Some(node) = popped else {
            debug!(
                "[AStar] exhausted after {} steps, {} cells closed",
                self.stats.steps,
                self.closed.len()
            );
            self.record(step, None, skipped, StepOutcome::Exhausted);
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        };

        trace!(
            "[AStar] step {step}: popped {} cost={} total={}",
            node.coord,
            node.cost_so_far,
            node.total_estimated_cost()
        );

        if self.frontier.contains(node.coord) {
            warn!("[AStar] {} still open after pop", node.coord);
            return Err(SearchError::InvariantViolation {
                coord: node.coord,
                detail: "coordinate is open and being expanded at the same time".into(),
            });
        }

        if self.grid.is_goal(node.coord) {
            debug!(
                "[AStar] goal {} reached at cost {} after {} steps",
                node.coord, node.cost_so_far, self.stats.steps
            );
            self.record(step, Some(node.clone()), skipped, StepOutcome::GoalReached);
            self.terminal = Some(node);
            self.status = SearchStatus::Succeeded;
            return Ok(self.status);
        }

        if !self.closed.insert(node.clone()) {
            warn!("[AStar] {} closed twice", node.coord);
            return Err(SearchError::InvariantViolation {
                coord: node.coord,
                detail: "coordinate closed twice".into(),
            });
        }
        self.stats.expansions += 1;

        let offers = self.expand(&node);
        self.record(step, Some(node), skipped, StepOutcome::Expanded { offers });
        Ok(self.status)
    }

    /// Step until `Succeeded` or `Exhausted`.
    ///
    /// # Errors
    ///
    /// Propagates [`SearchError`] from [`SearchEngine::step`].
    pub fn run(&mut self) -> Result<SearchStatus, SearchError> {
        loop {
            let status = self.step()?;
            if status.is_terminal() {
                return Ok(status);
            }
        }
    }

    /// Rebuild the path from the terminal node back to the start.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NotSucceeded`] unless the search succeeded, or a
    /// backtrace error if the direction labels are inconsistent.
    pub fn path(&self) -> Result<SearchPath, PathError> {
        match (&self.status, &self.terminal) {
            (SearchStatus::Succeeded, Some(terminal)) => {
                reconstruct_path(self.grid, &self.closed, terminal)
            }
            _ => Err(PathError::NotSucceeded),
        }
    }

    /// Renderer-facing view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            start: self.grid.start(),
            goal: self.grid.goal(),
            status: self.status,
            steps: self.stats.steps,
            frontier: self.frontier.coords(),
            closed: self.closed.directions(),
            terminal: self.terminal.as_ref().map(|n| n.coord),
        }
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of `step` calls that did work.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.stats.steps
    }

    /// The goal node once `Succeeded`.
    #[must_use]
    pub fn terminal_node(&self) -> Option<&Node> {
        self.terminal.as_ref()
    }

    #[must_use]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[must_use]
    pub fn policy(&self) -> &SearchPolicy {
        &self.policy
    }

    #[must_use]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    #[must_use]
    pub fn closed(&self) -> &ClosedSet {
        &self.closed
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// The step log, if the policy records one.
    #[must_use]
    pub fn trace(&self) -> Option<&SearchTrace> {
        self.trace.as_ref()
    }

    fn record(&mut self, step: u64, popped: Option<Node>, skipped: u64, outcome: StepOutcome) {
        if let Some(trace) = self.trace.as_mut() {
            trace.events.push(StepEvent {
                step,
                popped,
                skipped,
                outcome,
            });
        }
    }

    fn sync_frontier_stats(&mut self) {
        self.stats.frontier_high_water = self.frontier.high_water() as u64;
    }
}
