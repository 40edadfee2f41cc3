//! gridstar kernel: the immutable world the search runs over.
//!
//! # API Surface
//!
//! - [`grid::Grid`] -- a validated 2D map of open cells and walls with a
//!   designated start and goal
//! - [`grid::Coord`] / [`grid::Direction`] -- cell addressing and the four
//!   cardinal moves
//! - [`proof::canon::canonical_json_bytes`] / [`proof::hash::canonical_hash`]
//!   -- the single canonical encoding used to fingerprint grids, traces and paths
//!
//! # Module Dependency Direction
//!
//! `proof` ← `grid`
//!
//! One-way only. `grid` uses `proof` to compute its digest; `proof` knows
//! nothing about grids.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
