use crate::error::{SkirmishError, SkirmishResult};
use crate::state::{Board, Position};

use super::ActionTransition;

/// Adds the unit's class reload amount to its ammo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReloadAction {
    pub at: Position,
}

impl ReloadAction {
    pub fn new(at: Position) -> Self {
        Self { at }
    }
}

impl ActionTransition for ReloadAction {
    type Output = ();

    fn pre_validate(&self, board: &Board) -> SkirmishResult<()> {
        board.ensure_contains(self.at)?;
        if board.is_cell_empty(self.at) {
            return Err(SkirmishError::CellEmpty { position: self.at });
        }
        Ok(())
    }

    fn apply(self, board: &mut Board) -> SkirmishResult<()> {
        let unit = board
            .get_mut(self.at)
            .ok_or(SkirmishError::CellEmpty { position: self.at })?;
        unit.reload();
        Ok(())
    }
}
