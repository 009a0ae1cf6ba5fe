//! Deterministic grid tactics rules.
//!
//! `skirmish-core` defines the canonical rules (units, board, commands, strike
//! resolution) and exposes pure APIs that drivers and content tools reuse.
//! All board mutation flows through the action transitions, either directly
//! via the [`Board`] command methods or through [`engine::GameEngine`].
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

pub use action::{ActionTransition, AttackAction, MoveAction, PlaceAction, ReloadAction};
pub use combat::{
    BrawlerProfile, LongRangeProfile, StrikeCell, StrikeHit, StrikeProfile, StrikeReport,
    SupportProfile, UnitClass,
};
pub use config::{ClassRules, GameConfig, SplashRules, StreakRules, TeamSymbols};
pub use engine::{ActionOutcome, Command, GameEngine};
pub use error::{ErrorSeverity, GameError, SkirmishError, SkirmishResult};
pub use state::{Board, Combatant, Position, Team, Unit, UnitKind, UnitStats};
