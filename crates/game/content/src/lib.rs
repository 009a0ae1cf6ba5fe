//! Data-driven content for skirmish matches.
//!
//! This crate provides loaders for the RON/TOML files that set up a match:
//! - Rules tables (data-driven via TOML)
//! - Scenarios: board size, initial placements and a command script (RON)
//!
//! Content only describes the starting point of a match; it is not a save
//! format. All loaders use skirmish-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, Scenario, ScenarioLoader, UnitSpec};
