//! Typed search errors.
//!
//! "No path exists" is not an error: it is [`crate::SearchStatus::Exhausted`].
//! `SearchError` covers pre-flight policy rejection and internal bookkeeping
//! faults; `PathError` covers backtrace failures.

use gridstar_kernel::grid::Coord;

/// Failure to create or advance a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A reserved policy option was selected.
    UnsupportedPolicyMode { detail: String },
    /// Frontier/closed-set bookkeeping broke an invariant. The engine must
    /// not be stepped further.
    InvariantViolation { coord: Coord, detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPolicyMode { detail } => {
                write!(f, "unsupported policy mode: {detail}")
            }
            Self::InvariantViolation { coord, detail } => {
                write!(f, "search invariant violated at {coord}: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Failure to rebuild a path from arrival directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The search has not reached `Succeeded`.
    NotSucceeded,
    /// Following a direction label led to a coordinate that was never expanded.
    LeftClosedSet { coord: Coord },
    /// A non-start node carries `Direction::None`.
    MissingDirection { coord: Coord },
    /// The walk took more steps than there are closed nodes.
    CycleDetected { steps: usize },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSucceeded => write!(f, "search has not reached the goal"),
            Self::LeftClosedSet { coord } => {
                write!(f, "backtrace reached {coord}, which is not in the closed set")
            }
            Self::MissingDirection { coord } => {
                write!(f, "node at {coord} has no arrival direction")
            }
            Self::CycleDetected { steps } => {
                write!(f, "backtrace did not reach the start after {steps} steps")
            }
        }
    }
}

impl std::error::Error for PathError {}
