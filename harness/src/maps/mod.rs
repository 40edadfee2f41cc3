//! Map fixtures for the harness runner.

pub mod demo;
pub mod regimes;

pub use demo::DemoMap;
pub use regimes::{open_field, serpentine, walled_off, GeneratedMap, Regime, RegimeExpectations};
