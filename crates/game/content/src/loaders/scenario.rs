//! Scenario loader.
//!
//! A scenario names the board size, the units placed before the first
//! command, and an optional script of commands to replay.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use skirmish_core::{Board, Command, GameConfig, Position, Team, Unit, UnitKind, UnitStats};

use crate::loaders::{LoadResult, read_file};

/// One unit placement in a scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub at: Position,
    pub kind: UnitKind,
    pub team: Team,
    pub health: i32,
    pub ammo: i32,
    pub range: i32,
    pub power: i32,
}

impl UnitSpec {
    pub fn stats(&self) -> UnitStats {
        UnitStats::new(self.health, self.ammo, self.range, self.power)
    }
}

/// Scenario data structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub height: i32,
    pub width: i32,
    pub units: Vec<UnitSpec>,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Scenario {
    /// Builds the starting board with units created from `config`.
    ///
    /// Fails on the first placement the board rejects.
    pub fn build_board(&self, config: &GameConfig) -> LoadResult<Board> {
        let mut board = Board::new(self.height, self.width)?;
        for (index, spec) in self.units.iter().enumerate() {
            let unit = Unit::with_config(config, spec.kind, spec.team, spec.stats())
                .with_context(|| format!("Invalid unit #{index} at {}", spec.at))?;
            board
                .add_unit(spec.at, unit)
                .with_context(|| format!("Cannot place unit #{index} at {}", spec.at))?;
        }
        Ok(board)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let scenario = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            units = scenario.units.len(),
            commands = scenario.commands.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))
    }
}
