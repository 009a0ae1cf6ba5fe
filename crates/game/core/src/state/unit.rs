//! Units placed on the board.
//!
//! A [`Unit`] pairs the stats every class shares ([`Combatant`]) with the
//! class-specific strike profile ([`UnitClass`]). The board only talks to the
//! capability methods on `Unit`; it never matches on the class itself.

use crate::combat::{StrikeCell, StrikeProfile, UnitClass};
use crate::config::{ClassRules, GameConfig};
use crate::error::{SkirmishError, SkirmishResult};

use super::{Position, Team};

/// Behavioral category of a unit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnitKind {
    /// Melee area striker along its row and column.
    Brawler,
    /// Banded-range single target striker with a streak multiplier.
    LongRange,
    /// Heals allies, damages enemies.
    Support,
}

/// Stats supplied to the unit factory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitStats {
    pub health: i32,
    pub ammo: i32,
    pub range: i32,
    pub power: i32,
}

impl UnitStats {
    pub const fn new(health: i32, ammo: i32, range: i32, power: i32) -> Self {
        Self {
            health,
            ammo,
            range,
            power,
        }
    }

    /// Rejects non-positive health and negative ammo, range or power.
    pub fn validate(&self) -> SkirmishResult<()> {
        if self.health <= 0 {
            return Err(SkirmishError::illegal_argument(format!(
                "health must be positive (got {})",
                self.health
            )));
        }
        if self.ammo < 0 || self.range < 0 || self.power < 0 {
            return Err(SkirmishError::illegal_argument(format!(
                "ammo, range and power must not be negative (got {}, {}, {})",
                self.ammo, self.range, self.power
            )));
        }
        Ok(())
    }
}

/// Stats and team shared by every class.
///
/// Strike profiles read it to decide geometry and damage, and mutate it to
/// charge ammo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combatant {
    team: Team,
    stats: UnitStats,
    rules: ClassRules,
}

impl Combatant {
    pub fn new(team: Team, stats: UnitStats, rules: ClassRules) -> Self {
        Self { team, stats, rules }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn stats(&self) -> &UnitStats {
        &self.stats
    }

    pub fn rules(&self) -> &ClassRules {
        &self.rules
    }

    /// True when `occupant` is a unit of the same team.
    #[inline]
    pub fn is_ally(&self, occupant: Option<Team>) -> bool {
        occupant == Some(self.team)
    }

    /// True when `occupant` is a unit of the other team.
    #[inline]
    pub fn is_enemy(&self, occupant: Option<Team>) -> bool {
        matches!(occupant, Some(team) if team != self.team)
    }

    /// True when one charged strike is affordable.
    pub fn has_ammo(&self) -> bool {
        self.stats.ammo >= self.rules.attack_cost
    }

    /// Charges one strike. Callers check [`Self::has_ammo`] first.
    pub(crate) fn spend_ammo(&mut self) {
        self.stats.ammo = self.stats.ammo.saturating_sub(self.rules.attack_cost);
    }
}

/// A combatant placed on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    combatant: Combatant,
    class: UnitClass,
}

impl Unit {
    /// Builds a unit with the canonical class table.
    pub fn new(
        kind: UnitKind,
        team: Team,
        health: i32,
        ammo: i32,
        range: i32,
        power: i32,
    ) -> SkirmishResult<Self> {
        Self::with_config(
            &GameConfig::default(),
            kind,
            team,
            UnitStats::new(health, ammo, range, power),
        )
    }

    /// Builds a unit with class rules taken from `config`.
    pub fn with_config(
        config: &GameConfig,
        kind: UnitKind,
        team: Team,
        stats: UnitStats,
    ) -> SkirmishResult<Self> {
        stats.validate()?;
        Ok(Self {
            combatant: Combatant::new(team, stats, *config.rules_for(kind)),
            class: UnitClass::from_config(kind, config),
        })
    }

    pub fn kind(&self) -> UnitKind {
        self.class.kind()
    }

    pub fn team(&self) -> Team {
        self.combatant.team()
    }

    pub fn health(&self) -> i32 {
        self.combatant.stats.health
    }

    pub fn ammo(&self) -> i32 {
        self.combatant.stats.ammo
    }

    pub fn range(&self) -> i32 {
        self.combatant.stats.range
    }

    pub fn power(&self) -> i32 {
        self.combatant.stats.power
    }

    pub fn movement(&self) -> i32 {
        self.combatant.rules().movement
    }

    pub fn reload_amount(&self) -> i32 {
        self.combatant.rules().reload
    }

    pub fn attack_cost(&self) -> i32 {
        self.combatant.rules().attack_cost
    }

    /// Completed strikes for classes that track a streak.
    pub fn streak(&self) -> Option<u32> {
        self.class.streak()
    }

    /// Display character for this unit's class and team.
    pub fn symbol(&self) -> char {
        self.combatant.rules().symbols.for_team(self.team())
    }

    pub fn is_alive(&self) -> bool {
        self.health() > 0
    }

    pub fn has_ammo_for(&self, target: Option<Team>) -> bool {
        self.class.has_ammo_for(&self.combatant, target)
    }

    pub fn is_in_strike_range(&self, src: Position, dst: Position) -> bool {
        self.class.is_in_strike_range(&self.combatant, src, dst)
    }

    pub fn is_strike_legal(&self, src: Position, dst: Position, target: Option<Team>) -> bool {
        self.class.is_strike_legal(&self.combatant, src, dst, target)
    }

    /// Signed health delta for the occupant of `cell.current`.
    ///
    /// Charges ammo and advances the streak only while visiting the primary
    /// target, so a full sweep charges at most once.
    pub fn resolve_strike(&mut self, cell: StrikeCell) -> i32 {
        self.class.resolve_strike(&mut self.combatant, cell)
    }

    /// Health and ammo have no cap; both saturate at the `i32` bounds.
    pub(crate) fn apply_health_delta(&mut self, delta: i32) {
        let stats = &mut self.combatant.stats;
        stats.health = stats.health.saturating_add(delta);
    }

    pub(crate) fn reload(&mut self) {
        let amount = self.reload_amount();
        let stats = &mut self.combatant.stats;
        stats.ammo = stats.ammo.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn factory_rejects_bad_stats() {
        let cases = [(0, 1, 1, 1), (-3, 1, 1, 1), (5, -1, 1, 1), (5, 1, -1, 1), (5, 1, 1, -1)];
        for (health, ammo, range, power) in cases {
            let result =
                Unit::new(UnitKind::Brawler, Team::Powerlifters, health, ammo, range, power);
            assert!(
                matches!(result, Err(SkirmishError::IllegalArgument(_))),
                "stats ({health}, {ammo}, {range}, {power}) should be rejected"
            );
        }
    }

    #[test]
    fn factory_accepts_boundary_stats() {
        for kind in UnitKind::iter() {
            let unit = Unit::new(kind, Team::Crossfitters, 1, 0, 0, 0).unwrap();
            assert!(unit.is_alive());
            assert_eq!(unit.kind(), kind);
        }
    }

    #[test]
    fn class_table_is_applied() {
        let brawler = Unit::new(UnitKind::Brawler, Team::Powerlifters, 10, 0, 1, 1).unwrap();
        assert_eq!(
            (brawler.movement(), brawler.reload_amount(), brawler.attack_cost()),
            (3, 3, 1)
        );
        assert_eq!(brawler.symbol(), 'S');

        let sniper = Unit::new(UnitKind::LongRange, Team::Crossfitters, 10, 0, 1, 1).unwrap();
        assert_eq!((sniper.movement(), sniper.reload_amount()), (4, 2));
        assert_eq!(sniper.symbol(), 'n');
        assert_eq!(sniper.streak(), Some(0));

        let medic = Unit::new(UnitKind::Support, Team::Crossfitters, 10, 0, 1, 1).unwrap();
        assert_eq!((medic.movement(), medic.reload_amount()), (5, 5));
        assert_eq!(medic.symbol(), 'm');
        assert_eq!(medic.streak(), None);
    }

    #[test]
    fn reload_is_additive_and_unbounded() {
        let mut unit = Unit::new(UnitKind::Support, Team::Powerlifters, 3, 7, 1, 1).unwrap();
        unit.reload();
        unit.reload();
        assert_eq!(unit.ammo(), 17);
    }

    #[test]
    fn health_and_ammo_saturate_instead_of_wrapping() {
        let mut unit =
            Unit::new(UnitKind::Support, Team::Powerlifters, i32::MAX, i32::MAX - 1, 1, 1).unwrap();
        unit.apply_health_delta(3);
        unit.reload();
        assert_eq!(unit.health(), i32::MAX);
        assert_eq!(unit.ammo(), i32::MAX);
        assert!(unit.is_alive());

        unit.apply_health_delta(-i32::MAX);
        unit.apply_health_delta(-i32::MAX);
        assert_eq!(unit.health(), -i32::MAX);
        assert!(!unit.is_alive());
    }

    #[test]
    fn clone_is_independent() {
        let original = Unit::new(UnitKind::LongRange, Team::Powerlifters, 8, 2, 4, 3).unwrap();
        let mut copy = original.clone();
        copy.apply_health_delta(-5);
        copy.reload();
        assert_eq!(original.health(), 8);
        assert_eq!(original.ammo(), 2);
        assert_eq!(copy.health(), 3);
    }
}
