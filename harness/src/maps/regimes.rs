//! Generated map regimes.
//!
//! Each regime returns `(fixture, policy, expectations)` as a matched triple,
//! so a test cannot pair a map with the wrong expected outcome. Policies are
//! spelled out in full rather than taken from `SearchPolicy::default()`.

use gridstar_kernel::grid::{Coord, Grid, GridError};
use gridstar_search::{ClosedNodePolicy, SearchPolicy};

use crate::contract::MapFixture;

/// A grid described by dimensions and a wall list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    pub id: String,
    pub width: usize,
    pub height: usize,
    pub walls: Vec<Coord>,
    pub start: Coord,
    pub goal: Coord,
}

impl MapFixture for GeneratedMap {
    fn map_id(&self) -> &str {
        &self.id
    }

    fn grid(&self) -> Result<Grid, GridError> {
        Grid::from_walls(self.width, self.height, &self.walls, self.start, self.goal)
    }
}

/// What a correct search on the regime must observe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegimeExpectations {
    pub expects_goal_reached: bool,
    /// Exact optimal path cost when the goal is reachable.
    pub expected_cost: Option<i64>,
    /// Lower bound on `frontier_high_water`.
    pub min_frontier_high_water: u64,
}

/// A matched `(fixture, policy, expectations)` triple.
#[derive(Debug, Clone)]
pub struct Regime {
    pub fixture: GeneratedMap,
    pub policy: SearchPolicy,
    pub expectations: RegimeExpectations,
}

fn explicit_policy(max_steps: Option<u64>) -> SearchPolicy {
    SearchPolicy {
        max_steps,
        closed_policy: ClosedNodePolicy::NeverReopen,
        record_trace: true,
    }
}

fn coord(x: usize, y: usize) -> Coord {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    Coord::new(x as i32, y as i32)
}

fn cost(moves: usize) -> i64 {
    i64::try_from(moves).unwrap_or(i64::MAX)
}

/// **Open field**: no walls, corner to corner.
///
/// The heuristic is exact here, so the search walks one optimal path while
/// the frontier fans out along it.
#[must_use]
pub fn open_field(width: usize, height: usize) -> Regime {
    Regime {
        fixture: GeneratedMap {
            id: format!("open_field_{width}x{height}"),
            width,
            height,
            walls: Vec::new(),
            start: coord(0, 0),
            goal: coord(width.saturating_sub(1), height.saturating_sub(1)),
        },
        policy: explicit_policy(None),
        expectations: RegimeExpectations {
            expects_goal_reached: true,
            expected_cost: Some(cost(width + height - 2)),
            min_frontier_high_water: 1,
        },
    }
}

/// **Walled off**: a full-height wall through the middle column.
///
/// Every cell on the start side is expanded before the search reports
/// exhaustion. Needs `width >= 3`.
#[must_use]
pub fn walled_off(width: usize, height: usize) -> Regime {
    let wall_x = width / 2;
    let walls = (0..height).map(|y| coord(wall_x, y)).collect();
    Regime {
        fixture: GeneratedMap {
            id: format!("walled_off_{width}x{height}"),
            width,
            height,
            walls,
            start: coord(0, 0),
            goal: coord(width.saturating_sub(1), height.saturating_sub(1)),
        },
        policy: explicit_policy(Some(
            u64::try_from(width * height).unwrap_or(u64::MAX),
        )),
        expectations: RegimeExpectations {
            expects_goal_reached: false,
            expected_cost: None,
            min_frontier_high_water: 1,
        },
    }
}

/// **Serpentine**: horizontal walls on every odd row with a single gap at
/// alternating ends, forcing one winding corridor.
///
/// The heuristic keeps pointing straight down, so almost every open cell is
/// expanded. `height` should be odd so the goal row is open.
#[must_use]
pub fn serpentine(width: usize, height: usize) -> Regime {
    let last_x = width.saturating_sub(1);
    let mut walls = Vec::new();
    let mut wall_rows = 0usize;
    for y in (1..height).step_by(2) {
        let gap = if wall_rows % 2 == 0 { last_x } else { 0 };
        walls.extend((0..width).filter(|&x| x != gap).map(|x| coord(x, y)));
        wall_rows += 1;
    }
    let goal_x = if wall_rows % 2 == 0 { last_x } else { 0 };
    let goal_y = height.saturating_sub(1);
    // Every open row is crossed end to end, plus two moves per wall row.
    let expected = (wall_rows + 1) * last_x + 2 * wall_rows;
    Regime {
        fixture: GeneratedMap {
            id: format!("serpentine_{width}x{height}"),
            width,
            height,
            walls,
            start: coord(0, 0),
            goal: coord(goal_x, goal_y),
        },
        policy: explicit_policy(None),
        expectations: RegimeExpectations {
            expects_goal_reached: true,
            expected_cost: Some(cost(expected)),
            min_frontier_high_water: 1,
        },
    }
}
