//! Banded-range single target striker.

use crate::config::StreakRules;
use crate::state::{Combatant, Position, Team};

use super::{StrikeCell, StrikeProfile, ceil_div};

/// Hits enemies inside a distance band; every `period`-th completed strike is
/// multiplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongRangeProfile {
    streak: StreakRules,
    strikes: u32,
}

impl LongRangeProfile {
    pub fn new(streak: StreakRules) -> Self {
        Self { streak, strikes: 0 }
    }

    /// Completed strikes since the unit was created.
    pub fn strikes(&self) -> u32 {
        self.strikes
    }

    /// Closest distance still inside the band.
    pub fn min_distance(&self, unit: &Combatant) -> i32 {
        ceil_div(unit.stats().range, self.streak.band_divisor)
    }
}

impl StrikeProfile for LongRangeProfile {
    fn is_in_strike_range(&self, unit: &Combatant, src: Position, dst: Position) -> bool {
        let distance = src.distance(dst);
        distance <= unit.stats().range && distance >= self.min_distance(unit)
    }

    fn is_strike_legal(
        &self,
        unit: &Combatant,
        _src: Position,
        _dst: Position,
        target: Option<Team>,
    ) -> bool {
        unit.is_enemy(target)
    }

    fn resolve_strike(&mut self, unit: &mut Combatant, cell: StrikeCell) -> i32 {
        if !cell.is_primary() {
            return 0;
        }

        unit.spend_ammo();
        self.strikes = self.strikes.saturating_add(1);
        let factor = if self.strikes % self.streak.period == 0 {
            self.streak.multiplier
        } else {
            1
        };
        -unit.stats().power.saturating_mul(factor)
    }
}
