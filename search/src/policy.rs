//! Search policy types.

use gridstar_kernel::grid::Grid;

use crate::error::SearchError;

/// What to do when a cheaper route reaches an already-closed coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedNodePolicy {
    /// Closed coordinates are final. Default and only supported mode.
    NeverReopen,
    /// Reserved: textbook A* reopening. Selecting this is a hard error.
    ReopenOnImprovement,
}

/// Engine and driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Step cap honored by drivers. The engine itself never stops early.
    pub max_steps: Option<u64>,
    pub closed_policy: ClosedNodePolicy,
    /// Record a [`crate::SearchTrace`] event per step.
    pub record_trace: bool,
}

impl SearchPolicy {
    /// Reject reserved options before a search is created.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedPolicyMode`] for
    /// [`ClosedNodePolicy::ReopenOnImprovement`] or a zero step cap.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.closed_policy == ClosedNodePolicy::ReopenOnImprovement {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: "ClosedNodePolicy::ReopenOnImprovement is reserved; closed cells are never reopened".into(),
            });
        }
        if self.max_steps == Some(0) {
            return Err(SearchError::UnsupportedPolicyMode {
                detail: "max_steps must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Steps any search on `grid` needs at most: one per cell.
    #[must_use]
    pub fn step_bound(grid: &Grid) -> u64 {
        (grid.width() as u64).saturating_mul(grid.height() as u64)
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_steps: None,
            closed_policy: ClosedNodePolicy::NeverReopen,
            record_trace: true,
        }
    }
}
