//! Relaxation lock tests.
//!
//! Proves:
//! 1. A cheaper offer for an open coordinate overwrites cost and direction
//! 2. The overwritten node is retrieved under its new key
//! 3. Equal or costlier offers leave the open node untouched
//! 4. Superseded heap keys are skipped, never returned

use gridstar_kernel::grid::{Coord, Direction, Grid};
use gridstar_search::{Frontier, Node, OfferOutcome, SearchEngine};

fn node(x: i32, y: i32, cost: i64, remaining: i64, dir: Direction) -> Node {
    Node {
        coord: Coord::new(x, y),
        cost_so_far: cost,
        estimated_remaining: remaining,
        arrival_direction: dir,
    }
}

#[test]
fn cheaper_offer_overwrites_cost_and_direction() {
    let mut frontier = Frontier::new();
    assert_eq!(frontier.offer(node(2, 2, 7, 3, Direction::Up)), OfferOutcome::Inserted);
    assert_eq!(frontier.offer(node(2, 2, 4, 3, Direction::Right)), OfferOutcome::Relaxed);

    let live = frontier.get(Coord::new(2, 2)).unwrap();
    assert_eq!(live.cost_so_far, 4);
    assert_eq!(live.arrival_direction, Direction::Right);
    assert_eq!(live.estimated_remaining, 3);
    assert_eq!(frontier.len(), 1);
}

#[test]
fn equal_or_costlier_offers_are_discarded() {
    let mut frontier = Frontier::new();
    frontier.offer(node(0, 0, 5, 1, Direction::Left));
    assert_eq!(frontier.offer(node(0, 0, 5, 1, Direction::Down)), OfferOutcome::Discarded);
    assert_eq!(frontier.offer(node(0, 0, 9, 1, Direction::Up)), OfferOutcome::Discarded);
    let live = frontier.get(Coord::new(0, 0)).unwrap();
    assert_eq!(live.arrival_direction, Direction::Left, "first discovery wins ties");
}

#[test]
fn relaxed_node_moves_ahead_in_pop_order() {
    let mut frontier = Frontier::new();
    frontier.offer(node(1, 0, 10, 0, Direction::Up));
    frontier.offer(node(2, 0, 6, 0, Direction::Up));
    frontier.offer(node(1, 0, 3, 0, Direction::Down));

    let first = frontier.pop().unwrap();
    assert_eq!(first.coord, Coord::new(1, 0));
    assert_eq!(first.cost_so_far, 3);
    assert_eq!(frontier.pop().unwrap().coord, Coord::new(2, 0));
    assert_eq!(frontier.pop(), None);
    assert_eq!(frontier.stale_dropped(), 1, "the superseded key for (1, 0)");
}

#[test]
fn engine_relaxes_through_try_add() {
    let grid = Grid::from_walls(6, 6, &[], Coord::new(0, 0), Coord::new(5, 5)).unwrap();
    let mut engine = SearchEngine::new(&grid);
    let far = engine.make_node(Coord::new(4, 2), Direction::Up, 12);
    let near = engine.make_node(Coord::new(4, 2), Direction::Left, 5);
    assert_eq!(engine.try_add_open_node(far), OfferOutcome::Inserted);
    assert_eq!(engine.try_add_open_node(near.clone()), OfferOutcome::Relaxed);
    assert_eq!(engine.frontier().get(Coord::new(4, 2)), Some(&near));

    let stats = engine.stats();
    assert_eq!(stats.relaxed, 1);
    assert_eq!(stats.inserted, 2, "start plus (4, 2)");
}
