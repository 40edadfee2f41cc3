//! Brute-force shortest path, the oracle the A* engine is checked against.

use std::collections::{BTreeMap, VecDeque};

use gridstar_kernel::grid::{Coord, Direction, Grid};

/// Length of the shortest 4-connected route from start to goal, or `None`
/// if the goal is unreachable.
#[must_use]
pub fn shortest_path_len(grid: &Grid) -> Option<i64> {
    distances(grid).get(&grid.goal()).copied()
}

/// Number of passable cells reachable from the start.
#[must_use]
pub fn reachable_count(grid: &Grid) -> usize {
    distances(grid).len()
}

/// BFS distance from the start to every reachable cell.
#[must_use]
pub fn distances(grid: &Grid) -> BTreeMap<Coord, i64> {
    let mut dist = BTreeMap::from([(grid.start(), 0)]);
    let mut queue = VecDeque::from([grid.start()]);
    while let Some(here) = queue.pop_front() {
        let d = dist[&here];
        for dir in Direction::CARDINAL {
            let next = here.step(dir);
            if grid.is_passable(next) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}
