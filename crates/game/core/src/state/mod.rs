//! Authoritative match state.
//!
//! This module owns the board, the units placed on it and the value types
//! they are described with. Callers mutate it exclusively through the board's
//! command methods, which route through the action transitions.
mod board;
mod position;
mod render;
mod team;
mod unit;

pub use board::Board;
pub use position::Position;
pub use team::Team;
pub use unit::{Combatant, Unit, UnitKind, UnitStats};
