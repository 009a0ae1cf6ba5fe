//! Command dispatch.
//!
//! The [`GameEngine`] is the single entry point controllers use to drive a
//! board one command at a time. It routes each [`Command`] through the
//! matching action transition and reports what changed.

use crate::action::{AttackAction, MoveAction, ReloadAction, execute_transition};
use crate::combat::StrikeReport;
use crate::error::SkirmishResult;
use crate::state::{Board, Position, Team};

/// Controller command against a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move { from: Position, to: Position },
    Attack { from: Position, to: Position },
    Reload { at: Position },
}

impl Command {
    /// Short snake_case name used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Attack { .. } => "attack",
            Self::Reload { .. } => "reload",
        }
    }
}

/// What a successfully executed command changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionOutcome {
    Moved { from: Position, to: Position },
    Attacked(StrikeReport),
    Reloaded { at: Position, ammo: i32 },
}

/// Executes commands against a borrowed board.
#[derive(Debug)]
pub struct GameEngine<'a> {
    board: &'a mut Board,
}

impl<'a> GameEngine<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        self.board
    }

    /// Runs one command to completion.
    ///
    /// On error the board is exactly as it was before the call.
    pub fn execute(&mut self, command: &Command) -> SkirmishResult<ActionOutcome> {
        let span = tracing::debug_span!("execute", command = command.as_str());
        let _enter = span.enter();

        match *command {
            Command::Move { from, to } => {
                execute_transition(MoveAction::new(from, to), self.board)?;
                Ok(ActionOutcome::Moved { from, to })
            }
            Command::Attack { from, to } => {
                let report = execute_transition(AttackAction::new(from, to), self.board)?;
                Ok(ActionOutcome::Attacked(report))
            }
            Command::Reload { at } => {
                execute_transition(ReloadAction::new(at), self.board)?;
                let ammo = self.board.get(at).map_or(0, |unit| unit.ammo());
                Ok(ActionOutcome::Reloaded { at, ammo })
            }
        }
    }

    /// The sole remaining team, once the match is decided.
    pub fn winner(&self) -> Option<Team> {
        self.board.winner()
    }
}
