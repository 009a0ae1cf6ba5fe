use crate::error::{SkirmishError, SkirmishResult};
use crate::state::{Team, UnitKind};

/// Display characters for one unit class, one per team.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamSymbols {
    pub powerlifters: char,
    pub crossfitters: char,
}

impl TeamSymbols {
    pub const fn new(powerlifters: char, crossfitters: char) -> Self {
        Self {
            powerlifters,
            crossfitters,
        }
    }

    pub const fn for_team(&self, team: Team) -> char {
        match team {
            Team::Powerlifters => self.powerlifters,
            Team::Crossfitters => self.crossfitters,
        }
    }
}

/// Fixed per-class stats that the unit factory does not take as arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassRules {
    /// Maximum grid distance covered by a single move.
    pub movement: i32,
    /// Ammo added by one reload command.
    pub reload: i32,
    /// Ammo spent by one charged strike.
    pub attack_cost: i32,
    pub symbols: TeamSymbols,
}

impl ClassRules {
    pub const fn new(movement: i32, reload: i32, attack_cost: i32, symbols: TeamSymbols) -> Self {
        Self {
            movement,
            reload,
            attack_cost,
            symbols,
        }
    }
}

/// Brawler secondary-strike tuning.
///
/// Splash reaches `ceil(range / radius_divisor)` around the primary target and
/// deals `ceil(power / damage_divisor)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplashRules {
    pub radius_divisor: i32,
    pub damage_divisor: i32,
}

/// LongRange tuning.
///
/// Targets closer than `ceil(range / band_divisor)` are out of range; every
/// `period`-th completed strike deals `multiplier × power`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreakRules {
    pub band_divisor: i32,
    pub period: u32,
    pub multiplier: i32,
}

/// Game configuration constants and tunable parameters.
///
/// [`GameConfig::default`] is the canonical rules table; content files may
/// override any top-level section.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub brawler: ClassRules,
    pub long_range: ClassRules,
    pub support: ClassRules,
    pub splash: SplashRules,
    pub streak: StreakRules,
}

impl GameConfig {
    // ===== canonical class table =====
    pub const BRAWLER: ClassRules = ClassRules::new(3, 3, 1, TeamSymbols::new('S', 's'));
    pub const LONG_RANGE: ClassRules = ClassRules::new(4, 2, 1, TeamSymbols::new('N', 'n'));
    pub const SUPPORT: ClassRules = ClassRules::new(5, 5, 1, TeamSymbols::new('M', 'm'));

    // ===== strike tunables =====
    pub const DEFAULT_SPLASH: SplashRules = SplashRules {
        radius_divisor: 3,
        damage_divisor: 2,
    };
    pub const DEFAULT_STREAK: StreakRules = StreakRules {
        band_divisor: 2,
        period: 3,
        multiplier: 2,
    };

    pub const fn new() -> Self {
        Self {
            brawler: Self::BRAWLER,
            long_range: Self::LONG_RANGE,
            support: Self::SUPPORT,
            splash: Self::DEFAULT_SPLASH,
            streak: Self::DEFAULT_STREAK,
        }
    }

    /// Returns the class table entry for `kind`.
    pub const fn rules_for(&self, kind: UnitKind) -> &ClassRules {
        match kind {
            UnitKind::Brawler => &self.brawler,
            UnitKind::LongRange => &self.long_range,
            UnitKind::Support => &self.support,
        }
    }

    /// Checks that every divisor is positive and no class stat is negative.
    pub fn validate(&self) -> SkirmishResult<()> {
        for (kind, rules) in [
            (UnitKind::Brawler, &self.brawler),
            (UnitKind::LongRange, &self.long_range),
            (UnitKind::Support, &self.support),
        ] {
            if rules.movement < 0 || rules.reload < 0 || rules.attack_cost < 0 {
                return Err(SkirmishError::illegal_argument(format!(
                    "{kind} rules must not be negative"
                )));
            }
        }
        if self.splash.radius_divisor <= 0 || self.splash.damage_divisor <= 0 {
            return Err(SkirmishError::illegal_argument(
                "splash divisors must be positive",
            ));
        }
        if self.streak.band_divisor <= 0 || self.streak.period == 0 {
            return Err(SkirmishError::illegal_argument(
                "streak band divisor and period must be positive",
            ));
        }
        if self.streak.multiplier <= 0 {
            return Err(SkirmishError::illegal_argument(
                "streak multiplier must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
