//! Optimality lock tests.
//!
//! Proves, over every wall layout of several small grids:
//! 1. A search succeeds exactly when BFS finds a route
//! 2. The returned path cost equals the BFS shortest distance
//! 3. The returned path is a chain of adjacent passable cells from start to goal

use gridstar_kernel::grid::Grid;
use gridstar_search::{SearchEngine, SearchStatus};
use lock_tests::bfs::shortest_path_len;
use lock_tests::exhaustive::all_wall_layouts;

fn check_layout(grid: &Grid) {
    let mut engine = SearchEngine::new(grid);
    let status = engine.run().expect("search must not fault");
    match shortest_path_len(grid) {
        Some(expected) => {
            assert_eq!(status, SearchStatus::Succeeded, "grid {grid:?}");
            let path = engine.path().expect("succeeded search has a path");
            assert_eq!(path.cost(), expected, "grid {grid:?}");

            let coords = path.start_to_goal();
            assert_eq!(coords.first(), Some(&grid.start()));
            assert_eq!(coords.last(), Some(&grid.goal()));
            assert_eq!(i64::try_from(path.moves()).unwrap(), expected);
            for pair in coords.windows(2) {
                assert_eq!(pair[0].manhattan(pair[1]), 1, "non-adjacent step in {coords:?}");
                assert!(grid.is_passable(pair[1]));
            }
        }
        None => assert_eq!(status, SearchStatus::Exhausted, "grid {grid:?}"),
    }
}

// ---------------------------------------------------------------------------
// Exhaustive small grids
// ---------------------------------------------------------------------------

#[test]
fn optimal_on_every_3x3_layout() {
    let grids = all_wall_layouts(3, 3);
    assert_eq!(grids.len(), 128, "7 free cells → 2^7 layouts");
    grids.iter().for_each(check_layout);
}

#[test]
fn optimal_on_every_4x3_layout() {
    let grids = all_wall_layouts(4, 3);
    assert_eq!(grids.len(), 1024);
    grids.iter().for_each(check_layout);
}

#[test]
fn optimal_on_every_3x4_layout() {
    all_wall_layouts(3, 4).iter().for_each(check_layout);
}

#[test]
fn optimal_on_every_4x4_layout() {
    let grids = all_wall_layouts(4, 4);
    assert_eq!(grids.len(), 1 << 14);
    grids.iter().for_each(check_layout);
}

// ---------------------------------------------------------------------------
// Larger hand-drawn grids
// ---------------------------------------------------------------------------

#[test]
fn optimal_on_detour_maps() {
    let maps = [
        "S....#....\n.###.#.##.\n.#...#..#.\n.#.####.#.\n.#......#F\n",
        "S#........\n.#.######.\n.#.#....#.\n.#.#.##.#.\n...#..#..F\n",
        "..........\n.########.\n.#......#.\n.#.####.#.\n.#.#F.#.#.\n.#.#..#.#.\n.#.##.#.#.\n.#....#.#.\n.######.#.\nS.......#.\n",
    ];
    for text in maps {
        check_layout(&Grid::parse_ascii(text).unwrap());
    }
}
