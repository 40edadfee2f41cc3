//! Harness runner: drives a [`SearchEngine`] to a terminal state.
//!
//! The runner owns the loop the engine deliberately lacks: it calls
//! `step()`, hands the engine to a [`StepObserver`] after every step, and
//! enforces the policy's step cap.
//!
//! # Pipeline
//!
//! ```text
//! fixture.grid() → SearchEngine::with_policy()
//!   → [step() → observer.on_step()] × N
//!   → path() → trace digest → SearchReport
//! ```

use log::{debug, info};

use gridstar_kernel::grid::{Grid, GridError};
use gridstar_kernel::proof::canon::CanonError;
use gridstar_kernel::proof::hash::ContentHash;
use gridstar_search::{
    PathError, SearchEngine, SearchError, SearchPath, SearchPolicy, SearchStats, SearchStatus,
};

use crate::contract::MapFixture;
use crate::render::render;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The fixture did not produce a valid grid.
    Map(GridError),
    /// Policy rejected or engine bookkeeping failed.
    Search(SearchError),
    /// The search succeeded but its path could not be rebuilt.
    Path(PathError),
    /// Digest computation failed.
    CanonFailed { detail: String },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map(e) => write!(f, "map error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Path(e) => write!(f, "path error: {e}"),
            Self::CanonFailed { detail } => write!(f, "canonicalization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::CanonFailed { .. } => None,
        }
    }
}

impl From<GridError> for RunError {
    fn from(e: GridError) -> Self {
        Self::Map(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<PathError> for RunError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<CanonError> for RunError {
    fn from(e: CanonError) -> Self {
        Self::CanonFailed {
            detail: e.to_string(),
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Engine reached `Succeeded`; the report carries the path.
    PathFound,
    /// Engine reached `Exhausted`: no path exists.
    NoPath,
    /// The policy's `max_steps` ran out while the engine was still running.
    BudgetExceeded,
}

impl RunOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PathFound => "path_found",
            Self::NoPath => "no_path",
            Self::BudgetExceeded => "budget_exceeded",
        }
    }
}

/// Result of one driven search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: RunOutcome,
    pub steps: u64,
    pub stats: SearchStats,
    /// Present iff `outcome == PathFound`.
    pub path: Option<SearchPath>,
    /// Present iff the policy recorded a trace.
    pub trace_digest: Option<ContentHash>,
    pub grid_digest: ContentHash,
}

impl SearchReport {
    /// Summary suitable for logs and fixture output. Digests appear as
    /// `"sha256:<hex>"` strings; absent values are `null`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "grid_digest": self.grid_digest.as_str(),
            "outcome": self.outcome.as_str(),
            "path": self.path.as_ref().map(SearchPath::to_json_value),
            "stats": self.stats.to_json_value(),
            "steps": self.steps,
            "trace_digest": self.trace_digest.as_ref().map(ContentHash::as_str),
        })
    }
}

/// Called after every engine step, terminal steps included.
pub trait StepObserver {
    fn on_step(&mut self, engine: &SearchEngine<'_>);
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _engine: &SearchEngine<'_>) {}
}

/// Observer that renders and keeps every frame.
#[derive(Debug, Clone, Default)]
pub struct FrameRecorder {
    pub frames: Vec<String>,
}

impl StepObserver for FrameRecorder {
    fn on_step(&mut self, engine: &SearchEngine<'_>) {
        self.frames.push(render(engine.grid(), &engine.snapshot()));
    }
}

/// Drive a search on `grid` until it terminates or the step cap is hit.
///
/// # Errors
///
/// Returns [`RunError`] if the policy is rejected, the engine reports an
/// invariant fault, or the path or digests cannot be produced. "No path"
/// is not an error; it is [`RunOutcome::NoPath`].
pub fn run_search(
    grid: &Grid,
    policy: SearchPolicy,
    observer: &mut dyn StepObserver,
) -> Result<SearchReport, RunError> {
    let max_steps = policy.max_steps;
    let mut engine = SearchEngine::with_policy(grid, policy)?;

    let status = loop {
        if max_steps.is_some_and(|cap| engine.steps() >= cap) {
            break engine.status();
        }
        let status = engine.step()?;
        observer.on_step(&engine);
        if status.is_terminal() {
            break status;
        }
    };

    let (outcome, path) = match status {
        SearchStatus::Succeeded => (RunOutcome::PathFound, Some(engine.path()?)),
        SearchStatus::Exhausted => (RunOutcome::NoPath, None),
        SearchStatus::Running => (RunOutcome::BudgetExceeded, None),
    };
    let trace_digest = engine.trace().map(|t| t.digest()).transpose()?;
    let report = SearchReport {
        outcome,
        steps: engine.steps(),
        stats: engine.stats(),
        path,
        trace_digest,
        grid_digest: grid.digest()?,
    };

    match &report.path {
        Some(path) => info!(
            "[Harness] {} after {} steps, cost {}",
            outcome.as_str(),
            report.steps,
            path.cost()
        ),
        None => debug!("[Harness] {} after {} steps", outcome.as_str(), report.steps),
    }
    Ok(report)
}

/// Load `fixture` and run it.
///
/// # Errors
///
/// As [`run_search`], plus [`RunError::Map`] for an invalid fixture.
pub fn run_fixture(
    fixture: &dyn MapFixture,
    policy: SearchPolicy,
    observer: &mut dyn StepObserver,
) -> Result<SearchReport, RunError> {
    let grid = fixture.grid()?;
    debug!(
        "[Harness] running {} ({}x{})",
        fixture.map_id(),
        grid.width(),
        grid.height()
    );
    run_search(&grid, policy, observer)
}
