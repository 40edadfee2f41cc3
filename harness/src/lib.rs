//! gridstar harness: maps, rendering, and the step driver.
//!
//! The harness does NOT implement search logic. It loads a grid, hands it
//! to a [`gridstar_search::SearchEngine`], and decides when to step and what
//! to show between steps.
//!
//! - [`maps`]: the demo map and generated regimes behind [`contract::MapFixture`]
//! - [`render`]: text frames of a search in progress
//! - [`runner`]: the driver loop and its [`runner::SearchReport`]

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod maps;
pub mod render;
pub mod runner;
