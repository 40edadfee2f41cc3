//! Animated A* demo.
//!
//! Usage: `gridstar-demo [MAP_FILE] [DELAY_MS]`
//!
//! Without a map file, or with `-`, the built-in demo map is used. A frame is printed to
//! stdout after every step; `RUST_LOG` controls diagnostic output on stderr.

use std::process::ExitCode;
use std::time::Duration;

use gridstar_harness::contract::{MapFixture, TextMap};
use gridstar_harness::maps::DemoMap;
use gridstar_harness::render::{render, render_path};
use gridstar_harness::runner::{run_fixture, RunOutcome, StepObserver};
use gridstar_search::{SearchEngine, SearchPolicy};

const DEFAULT_DELAY_MS: u64 = 100;

struct PrintFrames {
    delay: Duration,
}

impl StepObserver for PrintFrames {
    fn on_step(&mut self, engine: &SearchEngine<'_>) {
        println!("{}", render(engine.grid(), &engine.snapshot()));
        if !engine.status().is_terminal() && !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let fixture: Box<dyn MapFixture> = match args.first() {
        Some(path) if path != "-" => match std::fs::read_to_string(path) {
            Ok(text) => Box::new(TextMap::new(path.clone(), text)),
            Err(e) => {
                eprintln!("error: cannot read {path}: {e}");
                return ExitCode::from(2);
            }
        },
        _ => Box::new(DemoMap),
    };
    let delay_ms = match args.get(1).map(|s| s.parse::<u64>()) {
        None => DEFAULT_DELAY_MS,
        Some(Ok(ms)) => ms,
        Some(Err(e)) => {
            eprintln!("error: invalid delay {:?}: {e}", args[1]);
            return ExitCode::from(2);
        }
    };

    let mut observer = PrintFrames {
        delay: Duration::from_millis(delay_ms),
    };
    let report = match run_fixture(fixture.as_ref(), SearchPolicy::default(), &mut observer) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match (report.outcome, &report.path) {
        (RunOutcome::PathFound, Some(path)) => {
            if let Ok(grid) = fixture.grid() {
                println!("{}", render_path(&grid, path));
            }
            println!("path cost {} in {} steps", path.cost(), report.steps);
            ExitCode::SUCCESS
        }
        _ => {
            println!("no path after {} steps", report.steps);
            ExitCode::from(1)
        }
    }
}
