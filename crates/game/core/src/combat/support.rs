//! Heal-or-damage single target unit.

use crate::state::{Combatant, Position, Team};

use super::{StrikeCell, StrikeProfile};

/// Heals allies for free and damages enemies at the usual ammo cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SupportProfile;

impl StrikeProfile for SupportProfile {
    fn is_in_strike_range(&self, unit: &Combatant, src: Position, dst: Position) -> bool {
        src.distance(dst) <= unit.stats().range
    }

    fn is_strike_legal(
        &self,
        _unit: &Combatant,
        src: Position,
        dst: Position,
        target: Option<Team>,
    ) -> bool {
        target.is_some() && src != dst
    }

    /// Attempts on empty cells or allies never need ammo.
    fn has_ammo_for(&self, unit: &Combatant, target: Option<Team>) -> bool {
        if target.is_none() || unit.is_ally(target) {
            return true;
        }
        unit.has_ammo()
    }

    fn resolve_strike(&mut self, unit: &mut Combatant, cell: StrikeCell) -> i32 {
        if !cell.is_primary() {
            return 0;
        }
        if unit.is_ally(cell.occupant) {
            return unit.stats().power;
        }

        unit.spend_ammo();
        -unit.stats().power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::state::UnitStats;

    fn medic(ammo: i32) -> Combatant {
        Combatant::new(
            Team::Powerlifters,
            UnitStats::new(6, ammo, 2, 3),
            GameConfig::SUPPORT,
        )
    }

    fn primary(occupant: Team) -> StrikeCell {
        StrikeCell {
            src: Position::ORIGIN,
            primary: Position::new(1, 0),
            current: Position::new(1, 0),
            occupant: Some(occupant),
        }
    }

    #[test]
    fn ammo_only_gates_enemy_targets() {
        let unit = medic(0);
        assert!(SupportProfile.has_ammo_for(&unit, None));
        assert!(SupportProfile.has_ammo_for(&unit, Some(Team::Powerlifters)));
        assert!(!SupportProfile.has_ammo_for(&unit, Some(Team::Crossfitters)));
    }

    #[test]
    fn self_and_empty_targets_are_illegal() {
        let unit = medic(1);
        let src = Position::new(1, 1);
        assert!(!SupportProfile.is_strike_legal(&unit, src, src, Some(Team::Powerlifters)));
        assert!(!SupportProfile.is_strike_legal(&unit, src, Position::new(1, 2), None));
        assert!(SupportProfile.is_strike_legal(
            &unit,
            src,
            Position::new(1, 2),
            Some(Team::Crossfitters)
        ));
    }

    #[test]
    fn heal_is_free_and_damage_is_charged() {
        let mut unit = medic(1);
        let mut profile = SupportProfile;

        assert_eq!(profile.resolve_strike(&mut unit, primary(Team::Powerlifters)), 3);
        assert_eq!(unit.stats().ammo, 1);

        assert_eq!(profile.resolve_strike(&mut unit, primary(Team::Crossfitters)), -3);
        assert_eq!(unit.stats().ammo, 0);
    }
}
