//! In-process determinism lock tests.
//!
//! Proves:
//! 1. Repeated runs produce byte-identical canonical traces
//! 2. Engines over the same grid share no state, even when interleaved
//! 3. The canonical fixture output is stable within a process

use gridstar_harness::contract::MapFixture;
use gridstar_harness::maps::DemoMap;
use gridstar_search::{SearchEngine, SearchStatus};
use lock_tests::canonical_run::{canonical_fixtures, canonical_output, run_canonical};

#[test]
fn repeated_runs_have_identical_trace_bytes() {
    for (id, fixture, _) in canonical_fixtures() {
        let grid = fixture.grid().unwrap();
        let bytes: Vec<Vec<u8>> = (0..3)
            .map(|_| {
                let mut engine = SearchEngine::new(&grid);
                engine.run().unwrap();
                engine.trace().unwrap().to_canonical_json_bytes().unwrap()
            })
            .collect();
        assert_eq!(bytes[0], bytes[1], "{id}");
        assert_eq!(bytes[1], bytes[2], "{id}");
    }
}

#[test]
fn interleaved_engines_do_not_interact() {
    let grid = DemoMap.grid().unwrap();
    let mut solo = SearchEngine::new(&grid);
    solo.run().unwrap();

    let mut a = SearchEngine::new(&grid);
    let mut b = SearchEngine::new(&grid);
    // Advance b ahead of a, then alternate.
    for _ in 0..5 {
        b.step().unwrap();
    }
    while !(a.status().is_terminal() && b.status().is_terminal()) {
        a.step().unwrap();
        b.step().unwrap();
    }

    assert_eq!(a.status(), SearchStatus::Succeeded);
    assert_eq!(a.trace(), solo.trace());
    assert_eq!(b.trace(), solo.trace());
    assert_eq!(a.path().unwrap(), solo.path().unwrap());
}

#[test]
fn canonical_reports_are_stable() {
    for (id, fixture, policy) in canonical_fixtures() {
        let first = run_canonical(fixture.as_ref(), policy.clone());
        let second = run_canonical(fixture.as_ref(), policy);
        assert_eq!(first, second, "{id}");
    }
    assert_eq!(canonical_output(), canonical_output());
}
