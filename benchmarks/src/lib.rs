//! Shared helpers for gridstar benchmark suites.

use gridstar_harness::contract::MapFixture;
use gridstar_harness::maps::{open_field, serpentine, walled_off, DemoMap, Regime};
use gridstar_kernel::grid::{Coord, Direction, Grid};
use gridstar_search::{Node, SearchEngine, SearchStatus};

/// Named grids for whole-search benchmarks, smallest first.
///
/// # Panics
///
/// Panics if a built-in fixture fails to build. Benchmark setup failures are fatal.
#[must_use]
pub fn bench_grids() -> Vec<(String, Grid)> {
    let mut grids = vec![("demo".to_string(), DemoMap.grid().expect("demo map"))];
    let regimes: [Regime; 4] = [
        open_field(64, 64),
        walled_off(64, 64),
        serpentine(63, 63),
        open_field(256, 256),
    ];
    for regime in regimes {
        let grid = regime.fixture.grid().expect("regime grid");
        grids.push((regime.fixture.id, grid));
    }
    grids
}

/// Run a fresh engine on `grid` to completion without recording a trace.
///
/// # Panics
///
/// Panics on a search fault.
#[must_use]
pub fn run_untraced(grid: &Grid) -> SearchStatus {
    let policy = gridstar_search::SearchPolicy {
        record_trace: false,
        ..gridstar_search::SearchPolicy::default()
    };
    let mut engine = SearchEngine::with_policy(grid, policy).expect("default policy is valid");
    engine.run().expect("search fault")
}

/// `n` nodes on a `side`-wide strip with varied costs, for frontier benches.
#[must_use]
pub fn strip_nodes(n: usize, side: i32) -> Vec<Node> {
    (0..n)
        .map(|i| {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            let coord = Coord::new(i % side, i / side);
            Node {
                coord,
                cost_so_far: i64::from((i * 7919) % 97),
                estimated_remaining: i64::from((i * 104_729) % 89),
                arrival_direction: Direction::Left,
            }
        })
        .collect()
}
