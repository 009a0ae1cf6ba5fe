use crate::error::{SkirmishError, SkirmishResult};
use crate::state::{Board, Position, Unit};

use super::ActionTransition;

/// Puts a freshly built unit on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceAction {
    pub position: Position,
    pub unit: Unit,
}

impl PlaceAction {
    pub fn new(position: Position, unit: Unit) -> Self {
        Self { position, unit }
    }
}

impl ActionTransition for PlaceAction {
    type Output = ();

    fn pre_validate(&self, board: &Board) -> SkirmishResult<()> {
        board.ensure_contains(self.position)?;
        if !board.is_cell_empty(self.position) {
            return Err(SkirmishError::CellOccupied {
                position: self.position,
            });
        }
        Ok(())
    }

    fn apply(self, board: &mut Board) -> SkirmishResult<()> {
        board.put(self.position, self.unit);
        Ok(())
    }
}
