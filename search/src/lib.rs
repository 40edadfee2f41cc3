//! gridstar search: incremental A* over a [`Grid`](gridstar_kernel::grid::Grid).
//!
//! This crate provides the search layer. It depends only on
//! `gridstar_kernel`; it does NOT depend on `gridstar_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! gridstar_kernel  ←  gridstar_search  ←  gridstar_harness
//! (grid, hashing)     (frontier, engine)   (maps, renderer, driver)
//! ```
//!
//! # Key types
//!
//! - [`Node`]: a coordinate with path-cost metadata
//! - [`Frontier`]: the open set: best-first retrieval, one node per coordinate,
//!   in-place cost relaxation
//! - [`ClosedSet`]: expanded coordinates, never reopened
//! - [`SearchEngine`]: single-step state machine (`Running` → `Succeeded` | `Exhausted`)
//! - [`SearchPath`]: path rebuilt from arrival directions
//! - [`SearchTrace`]: ordered step log with a canonical digest
//!
//! # Limitation
//!
//! A closed coordinate is never reopened, even if a cheaper route to it is
//! found later. With the Manhattan heuristic on a unit-cost 4-connected grid
//! the heuristic is consistent, so this does not change path lengths.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod closed;
pub mod error;
pub mod frontier;
pub mod node;
pub mod path;
pub mod policy;
pub mod search;
pub mod snapshot;
pub mod trace;

pub use closed::ClosedSet;
pub use error::{PathError, SearchError};
pub use frontier::{Frontier, OfferOutcome};
pub use node::{FrontierKey, Node};
pub use path::{reconstruct_path, SearchPath};
pub use policy::{ClosedNodePolicy, SearchPolicy};
pub use search::{SearchEngine, SearchStatus};
pub use snapshot::SearchSnapshot;
pub use trace::{SearchStats, SearchTrace, StepEvent, StepOutcome};
