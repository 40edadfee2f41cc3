//! Reference scenario lock tests.
//!
//! Each scenario pins the exact observable outcome of a small grid:
//! status, step count, path cost and path cells.

use gridstar_harness::runner::{run_search, NoopObserver, RunOutcome};
use gridstar_kernel::grid::{Coord, Direction, Grid};
use gridstar_search::{PathError, SearchEngine, SearchPolicy, SearchStatus};

// ---------------------------------------------------------------------------
// Open 5x3 grid, start (0,0), goal (4,0)
// ---------------------------------------------------------------------------

#[test]
fn open_row_takes_the_straight_line() {
    let grid = Grid::from_walls(5, 3, &[], Coord::new(0, 0), Coord::new(4, 0)).unwrap();
    let mut engine = SearchEngine::new(&grid);
    assert_eq!(engine.run().unwrap(), SearchStatus::Succeeded);

    let path = engine.path().unwrap();
    assert_eq!(path.cost(), 4);
    assert_eq!(
        path.start_to_goal(),
        &(0..5).map(|x| Coord::new(x, 0)).collect::<Vec<_>>()[..]
    );
    assert_eq!(engine.steps(), 5, "four expansions and the goal pop");
    assert_eq!(
        engine.closed().expansion_order(),
        &[
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(2, 0),
            Coord::new(3, 0)
        ]
    );
    for x in 1..4 {
        assert_eq!(
            engine.closed().get(Coord::new(x, 0)).unwrap().arrival_direction,
            Direction::Left
        );
    }
}

// ---------------------------------------------------------------------------
// Full-height wall between start and goal
// ---------------------------------------------------------------------------

#[test]
fn full_height_wall_exhausts() {
    let walls: Vec<Coord> = (0..4).map(|y| Coord::new(2, y)).collect();
    let grid = Grid::from_walls(5, 4, &walls, Coord::new(0, 0), Coord::new(4, 3)).unwrap();
    let mut engine = SearchEngine::new(&grid);
    assert_eq!(engine.run().unwrap(), SearchStatus::Exhausted);
    assert_eq!(engine.closed().len(), 8, "both columns left of the wall");
    assert!(engine.frontier().is_empty());
    assert_eq!(engine.path(), Err(PathError::NotSucceeded));

    let report = run_search(&grid, SearchPolicy::default(), &mut NoopObserver).unwrap();
    assert_eq!(report.outcome, RunOutcome::NoPath);
    assert!(report.path.is_none());
}

// ---------------------------------------------------------------------------
// Start equals goal
// ---------------------------------------------------------------------------

#[test]
fn start_on_goal_succeeds_immediately() {
    let grid = Grid::from_walls(4, 4, &[], Coord::new(2, 1), Coord::new(2, 1)).unwrap();
    let mut engine = SearchEngine::new(&grid);
    assert_eq!(engine.step().unwrap(), SearchStatus::Succeeded);
    assert_eq!(engine.steps(), 1);

    let path = engine.path().unwrap();
    assert_eq!(path.cost(), 0);
    assert_eq!(path.start_to_goal(), &[Coord::new(2, 1)]);
}

// ---------------------------------------------------------------------------
// Text maps
// ---------------------------------------------------------------------------

#[test]
fn map_with_goal_letter_g_is_accepted() {
    let grid = Grid::parse_ascii("S.#\n..#\n..G\n").unwrap();
    let report = run_search(&grid, SearchPolicy::default(), &mut NoopObserver).unwrap();
    assert_eq!(report.outcome, RunOutcome::PathFound);
    assert_eq!(report.path.unwrap().cost(), 4);
}

#[test]
fn walled_in_goal_exhausts() {
    let grid = Grid::parse_ascii("S....\n...#.\n..#F#\n...#.\n").unwrap();
    let mut engine = SearchEngine::new(&grid);
    assert_eq!(engine.run().unwrap(), SearchStatus::Exhausted);
    assert!(engine.terminal_node().is_none());
}
