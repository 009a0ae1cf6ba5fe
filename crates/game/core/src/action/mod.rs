//! Board commands.
//!
//! Each command is a small struct implementing [`ActionTransition`]:
//! `pre_validate` runs the whole legality gate against the untouched board,
//! `apply` mutates it. [`execute_transition`] is the only place the two are
//! sequenced, which keeps every command all-or-nothing.
//!
//! # Module Structure
//!
//! - `placement`: put a new unit on an empty cell
//! - `movement`: relocate a unit within its movement allowance
//! - `attack`: range / ammo / target gate followed by the board sweep
//! - `reload`: add the class reload amount to a unit's ammo

mod attack;
mod movement;
mod placement;
mod reload;

pub use attack::AttackAction;
pub use movement::MoveAction;
pub use placement::PlaceAction;
pub use reload::ReloadAction;

use crate::error::{GameError, SkirmishResult};
use crate::state::Board;

/// Defines how a concrete command mutates the board.
///
/// `pre_validate` receives read-only access and must raise every error the
/// command can produce; `apply` assumes it ran successfully.
pub trait ActionTransition: core::fmt::Debug {
    type Output;

    /// Validates pre-conditions using the board **before** mutation.
    fn pre_validate(&self, board: &Board) -> SkirmishResult<()>;

    /// Applies the command by mutating the board directly.
    fn apply(self, board: &mut Board) -> SkirmishResult<Self::Output>;
}

/// Runs `action` through validation and application.
pub fn execute_transition<A>(action: A, board: &mut Board) -> SkirmishResult<A::Output>
where
    A: ActionTransition,
{
    if let Err(error) = action.pre_validate(board) {
        tracing::debug!(?action, code = error.error_code(), "command rejected");
        return Err(error);
    }
    tracing::debug!(?action, "command accepted");
    action.apply(board)
}
