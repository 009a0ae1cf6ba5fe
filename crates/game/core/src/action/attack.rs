use crate::combat::{StrikeReport, run_sweep};
use crate::error::{SkirmishError, SkirmishResult};
use crate::state::{Board, Position, Unit};

use super::ActionTransition;

/// Strike from the unit at `from` against the cell `to`.
///
/// The gate is evaluated in a fixed order and stops at the first failure:
/// off-board cell, empty source, range, ammo, target eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    pub from: Position,
    pub to: Position,
}

impl AttackAction {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl ActionTransition for AttackAction {
    type Output = StrikeReport;

    fn pre_validate(&self, board: &Board) -> SkirmishResult<()> {
        board.ensure_contains(self.from)?;
        board.ensure_contains(self.to)?;

        let attacker = board.get(self.from).ok_or(SkirmishError::CellEmpty {
            position: self.from,
        })?;
        let target = board.get(self.to).map(Unit::team);

        if !attacker.is_in_strike_range(self.from, self.to) {
            return Err(SkirmishError::OutOfRange {
                target: self.to,
                distance: self.from.distance(self.to),
            });
        }
        if !attacker.has_ammo_for(target) {
            return Err(SkirmishError::OutOfAmmo {
                ammo: attacker.ammo(),
                cost: attacker.attack_cost(),
            });
        }
        if !attacker.is_strike_legal(self.from, self.to, target) {
            return Err(SkirmishError::IllegalTarget { target: self.to });
        }

        Ok(())
    }

    fn apply(self, board: &mut Board) -> SkirmishResult<StrikeReport> {
        let report = run_sweep(board, self.from, self.to)?;
        if let Some(winner) = board.winner() {
            tracing::info!(%winner, loser = %winner.opponent(), "match decided");
        }
        Ok(report)
    }
}
