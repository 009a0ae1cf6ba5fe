//! Melee area striker.

use crate::config::SplashRules;
use crate::state::{Combatant, Position, Team};

use super::{StrikeCell, StrikeProfile, ceil_div};

/// Strikes along its own row or column and splashes enemies around the
/// primary target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrawlerProfile {
    splash: SplashRules,
}

impl BrawlerProfile {
    pub fn new(splash: SplashRules) -> Self {
        Self { splash }
    }

    /// Radius around the primary target reached by the secondary strike.
    pub fn splash_radius(&self, unit: &Combatant) -> i32 {
        ceil_div(unit.stats().range, self.splash.radius_divisor)
    }

    /// Damage dealt to each enemy caught by the secondary strike.
    pub fn splash_damage(&self, unit: &Combatant) -> i32 {
        ceil_div(unit.stats().power, self.splash.damage_divisor)
    }
}

impl StrikeProfile for BrawlerProfile {
    fn is_in_strike_range(&self, unit: &Combatant, src: Position, dst: Position) -> bool {
        src.distance(dst) <= unit.stats().range
    }

    fn is_strike_legal(
        &self,
        _unit: &Combatant,
        src: Position,
        dst: Position,
        _target: Option<Team>,
    ) -> bool {
        src.is_aligned_with(dst)
    }

    fn resolve_strike(&mut self, unit: &mut Combatant, cell: StrikeCell) -> i32 {
        // The brawler's own cell is never hit; a self-targeted strike is
        // charged here instead of at the primary branch below.
        if cell.current == cell.src {
            if cell.is_primary() {
                unit.spend_ammo();
            }
            return 0;
        }

        if cell.is_primary() {
            unit.spend_ammo();
            return if unit.is_enemy(cell.occupant) {
                -unit.stats().power
            } else {
                0
            };
        }

        if !unit.is_enemy(cell.occupant) {
            return 0;
        }
        if cell.primary.distance(cell.current) <= self.splash_radius(unit) {
            -self.splash_damage(unit)
        } else {
            0
        }
    }
}
