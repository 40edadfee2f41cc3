//! Step log and counters.
//!
//! The normative record of a run is the ordered list of [`StepEvent`]s.
//! Its canonical JSON bytes are identical across runs on the same grid,
//! which is how determinism is checked.

use gridstar_kernel::grid::Coord;
use gridstar_kernel::proof::canon::{canonical_json_bytes, CanonError};
use gridstar_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

use crate::frontier::OfferOutcome;
use crate::node::Node;
use crate::search::SearchStatus;

/// Aggregate counters for one engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub steps: u64,
    pub expansions: u64,
    pub inserted: u64,
    pub relaxed: u64,
    pub discarded: u64,
    pub rejected_impassable: u64,
    pub rejected_closed: u64,
    /// Frontier pops skipped because the key was superseded or the
    /// coordinate was no longer eligible.
    pub stale_skipped: u64,
    pub frontier_high_water: u64,
}

impl SearchStats {
    pub(crate) fn record_offer(&mut self, outcome: OfferOutcome) {
        match outcome {
            OfferOutcome::Inserted => self.inserted += 1,
            OfferOutcome::Relaxed => self.relaxed += 1,
            OfferOutcome::Discarded => self.discarded += 1,
            OfferOutcome::Impassable => self.rejected_impassable += 1,
            OfferOutcome::AlreadyClosed => self.rejected_closed += 1,
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "discarded": self.discarded,
            "expansions": self.expansions,
            "frontier_high_water": self.frontier_high_water,
            "inserted": self.inserted,
            "rejected_closed": self.rejected_closed,
            "rejected_impassable": self.rejected_impassable,
            "relaxed": self.relaxed,
            "stale_skipped": self.stale_skipped,
            "steps": self.steps,
        })
    }
}

/// What one step did after popping (or failing to pop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Popped node was closed and its four neighbors offered, in order.
    Expanded { offers: Vec<(Coord, OfferOutcome)> },
    /// Popped node is the goal.
    GoalReached,
    /// No eligible node was left.
    Exhausted,
}

/// One call to `SearchEngine::step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepEvent {
    /// Zero-based step index.
    pub step: u64,
    /// The node selected this step, if any.
    pub popped: Option<Node>,
    /// Ineligible pops skipped before `popped` was found.
    pub skipped: u64,
    pub outcome: StepOutcome,
}

/// Ordered step events for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTrace {
    pub events: Vec<StepEvent>,
}

impl SearchTrace {
    /// Terminal status implied by the last event.
    #[must_use]
    pub fn status(&self) -> SearchStatus {
        match self.events.last().map(|e| &e.outcome) {
            Some(StepOutcome::GoalReached) => SearchStatus::Succeeded,
            Some(StepOutcome::Exhausted) => SearchStatus::Exhausted,
            Some(StepOutcome::Expanded { .. }) | None => SearchStatus::Running,
        }
    }

    /// Coordinates closed by this run, in order.
    #[must_use]
    pub fn closed_sequence(&self) -> Vec<Coord> {
        self.events
            .iter()
            .filter(|e| matches!(e.outcome, StepOutcome::Expanded { .. }))
            .filter_map(|e| e.popped.as_ref().map(|n| n.coord))
            .collect()
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "events": self.events.iter().map(step_event_to_json).collect::<Vec<_>>(),
            "status": self.status().as_str(),
        })
    }

    /// Serialize to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Domain-separated digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchTrace, &bytes))
    }
}

fn step_event_to_json(e: &StepEvent) -> serde_json::Value {
    serde_json::json!({
        "outcome": outcome_to_json(&e.outcome),
        "popped": e.popped.as_ref().map(Node::to_json_value),
        "skipped": e.skipped,
        "step": e.step,
    })
}

fn outcome_to_json(o: &StepOutcome) -> serde_json::Value {
    match o {
        StepOutcome::Expanded { offers } => serde_json::json!({
            "offers": offers
                .iter()
                .map(|(c, outcome)| serde_json::json!({
                    "coord": [c.x, c.y],
                    "outcome": outcome.as_str(),
                }))
                .collect::<Vec<_>>(),
            "type": "expanded",
        }),
        StepOutcome::GoalReached => serde_json::json!({"type": "goal_reached"}),
        StepOutcome::Exhausted => serde_json::json!({"type": "exhausted"}),
    }
}
