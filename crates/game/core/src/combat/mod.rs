//! Strike resolution.
//!
//! Every unit class implements [`StrikeProfile`]: range geometry, target
//! eligibility, ammo gating and the per-cell effect used by the board sweep.
//! [`UnitClass`] closes the set of classes so the sweep can dispatch without
//! knowing the concrete class.
//!
//! # Core Functions
//!
//! - `StrikeProfile::resolve_strike`: per-cell signed health delta
//! - `run_sweep`: row-major pass applying deltas and removing the dead
//! - `ceil_div`: rounding used by band and splash formulas

pub mod brawler;
pub mod long_range;
pub mod support;
pub mod sweep;

pub use brawler::BrawlerProfile;
pub use long_range::LongRangeProfile;
pub use support::SupportProfile;
pub use sweep::{StrikeHit, StrikeReport};

pub(crate) use sweep::run_sweep;

use crate::config::GameConfig;
use crate::state::{Combatant, Position, Team, UnitKind};

/// One cell visited by the sweep, relative to the attack being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrikeCell {
    /// Attacker position.
    pub src: Position,
    /// Destination named by the attack command.
    pub primary: Position,
    /// Cell currently visited.
    pub current: Position,
    /// Team of the unit at `current`, `None` if the cell is empty.
    pub occupant: Option<Team>,
}

impl StrikeCell {
    #[inline]
    pub fn is_primary(&self) -> bool {
        self.current == self.primary
    }
}

/// Capability contract shared by every unit class.
pub trait StrikeProfile {
    /// Variant geometry: can `src` reach `dst` at all.
    fn is_in_strike_range(&self, unit: &Combatant, src: Position, dst: Position) -> bool;

    /// Variant target rule, independent of range.
    fn is_strike_legal(
        &self,
        unit: &Combatant,
        src: Position,
        dst: Position,
        target: Option<Team>,
    ) -> bool;

    /// Whether the attack may be attempted with the current ammo.
    fn has_ammo_for(&self, unit: &Combatant, _target: Option<Team>) -> bool {
        unit.has_ammo()
    }

    /// Signed health delta for the occupant of `cell.current`.
    ///
    /// Side effects on `unit` or `self` happen at most once per sweep.
    fn resolve_strike(&mut self, unit: &mut Combatant, cell: StrikeCell) -> i32;
}

/// Closed set of unit classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnitClass {
    Brawler(BrawlerProfile),
    LongRange(LongRangeProfile),
    Support(SupportProfile),
}

impl UnitClass {
    pub fn from_config(kind: UnitKind, config: &GameConfig) -> Self {
        match kind {
            UnitKind::Brawler => Self::Brawler(BrawlerProfile::new(config.splash)),
            UnitKind::LongRange => Self::LongRange(LongRangeProfile::new(config.streak)),
            UnitKind::Support => Self::Support(SupportProfile),
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            Self::Brawler(_) => UnitKind::Brawler,
            Self::LongRange(_) => UnitKind::LongRange,
            Self::Support(_) => UnitKind::Support,
        }
    }

    pub fn streak(&self) -> Option<u32> {
        match self {
            Self::LongRange(profile) => Some(profile.strikes()),
            Self::Brawler(_) | Self::Support(_) => None,
        }
    }

    fn profile(&self) -> &dyn StrikeProfile {
        match self {
            Self::Brawler(profile) => profile,
            Self::LongRange(profile) => profile,
            Self::Support(profile) => profile,
        }
    }

    fn profile_mut(&mut self) -> &mut dyn StrikeProfile {
        match self {
            Self::Brawler(profile) => profile,
            Self::LongRange(profile) => profile,
            Self::Support(profile) => profile,
        }
    }
}

impl StrikeProfile for UnitClass {
    fn is_in_strike_range(&self, unit: &Combatant, src: Position, dst: Position) -> bool {
        self.profile().is_in_strike_range(unit, src, dst)
    }

    fn is_strike_legal(
        &self,
        unit: &Combatant,
        src: Position,
        dst: Position,
        target: Option<Team>,
    ) -> bool {
        self.profile().is_strike_legal(unit, src, dst, target)
    }

    fn has_ammo_for(&self, unit: &Combatant, target: Option<Team>) -> bool {
        self.profile().has_ammo_for(unit, target)
    }

    fn resolve_strike(&mut self, unit: &mut Combatant, cell: StrikeCell) -> i32 {
        self.profile_mut().resolve_strike(unit, cell)
    }
}

/// Ceiling division for non-negative `value` and positive `divisor`.
#[inline]
pub(crate) fn ceil_div(value: i32, divisor: i32) -> i32 {
    value / divisor + i32::from(value % divisor != 0)
}
