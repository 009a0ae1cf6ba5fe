use crate::error::{SkirmishError, SkirmishResult};
use crate::state::{Board, Position};

use super::ActionTransition;

/// Relocates a unit to an empty cell within its movement allowance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub from: Position,
    pub to: Position,
}

impl MoveAction {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl ActionTransition for MoveAction {
    type Output = ();

    fn pre_validate(&self, board: &Board) -> SkirmishResult<()> {
        board.ensure_contains(self.from)?;
        board.ensure_contains(self.to)?;

        let unit = board.get(self.from).ok_or(SkirmishError::CellEmpty {
            position: self.from,
        })?;

        let distance = self.from.distance(self.to);
        if distance > unit.movement() {
            return Err(SkirmishError::MoveTooFar {
                distance,
                allowance: unit.movement(),
            });
        }

        if !board.is_cell_empty(self.to) {
            return Err(SkirmishError::CellOccupied { position: self.to });
        }

        Ok(())
    }

    fn apply(self, board: &mut Board) -> SkirmishResult<()> {
        let unit = board.take(self.from).ok_or(SkirmishError::CellEmpty {
            position: self.from,
        })?;
        board.put(self.to, unit);
        Ok(())
    }
}
