//! Termination lock tests.
//!
//! Proves:
//! 1. Every search reaches a terminal status within `width * height` steps
//! 2. Steps never exceed the reachable cell count plus the final step
//! 3. Stepping a terminal engine changes nothing

use gridstar_harness::contract::MapFixture;
use gridstar_harness::maps::{open_field, serpentine, walled_off, DemoMap};
use gridstar_kernel::grid::Grid;
use gridstar_search::{SearchEngine, SearchPolicy};
use lock_tests::bfs::reachable_count;
use lock_tests::exhaustive::all_wall_layouts;

/// Step by hand with a hard bound so a non-terminating engine fails the
/// test instead of hanging it.
fn steps_to_terminal(grid: &Grid) -> u64 {
    let bound = SearchPolicy::step_bound(grid);
    let mut engine = SearchEngine::new(grid);
    for _ in 0..bound {
        if engine.step().unwrap().is_terminal() {
            return engine.steps();
        }
    }
    panic!("no terminal status after {bound} steps on {grid:?}");
}

#[test]
fn every_small_layout_terminates_within_cell_count() {
    for (w, h) in [(3, 3), (4, 3), (2, 5)] {
        for grid in all_wall_layouts(w, h) {
            let steps = steps_to_terminal(&grid);
            assert!(steps <= SearchPolicy::step_bound(&grid));
            let reachable = u64::try_from(reachable_count(&grid)).unwrap();
            assert!(steps <= reachable + 1, "{steps} steps, {reachable} reachable");
        }
    }
}

#[test]
fn exhausting_a_region_closes_every_reachable_cell() {
    let regime = walled_off(9, 6);
    let grid = regime.fixture.grid().unwrap();
    let mut engine = SearchEngine::new(&grid);
    engine.run().unwrap();
    assert_eq!(engine.closed().len(), reachable_count(&grid));
    assert_eq!(engine.steps(), engine.closed().len() as u64 + 1);
}

#[test]
fn named_maps_terminate() {
    let grids = [
        DemoMap.grid().unwrap(),
        open_field(30, 30).fixture.grid().unwrap(),
        walled_off(30, 30).fixture.grid().unwrap(),
        serpentine(31, 31).fixture.grid().unwrap(),
    ];
    for grid in &grids {
        steps_to_terminal(grid);
    }
}

#[test]
fn terminal_engine_is_frozen() {
    for grid in all_wall_layouts(3, 3) {
        let mut engine = SearchEngine::new(&grid);
        let status = engine.run().unwrap();
        let snapshot = engine.snapshot();
        for _ in 0..3 {
            assert_eq!(engine.step().unwrap(), status);
        }
        assert_eq!(engine.snapshot(), snapshot);
    }
}
