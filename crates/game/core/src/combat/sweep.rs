//! Board-wide effect application for one resolved attack.

use crate::error::{SkirmishError, SkirmishResult};
use crate::state::{Board, Position, Unit};

use super::StrikeCell;

/// A non-zero effect applied to one unit during a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeHit {
    pub position: Position,
    /// Signed health change (negative for damage, positive for healing).
    pub delta: i32,
    /// Health after the delta was applied.
    pub health: i32,
    /// Whether the unit was removed from the board by this hit.
    pub removed: bool,
}

/// Everything a single attack changed, in sweep order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrikeReport {
    pub attacker: Position,
    pub target: Position,
    pub hits: Vec<StrikeHit>,
}

impl StrikeReport {
    pub fn new(attacker: Position, target: Position) -> Self {
        Self {
            attacker,
            target,
            hits: Vec::new(),
        }
    }

    pub fn hit_at(&self, position: Position) -> Option<&StrikeHit> {
        self.hits.iter().find(|hit| hit.position == position)
    }

    /// Positions vacated by this attack.
    pub fn removed(&self) -> impl Iterator<Item = Position> + '_ {
        self.hits
            .iter()
            .filter(|hit| hit.removed)
            .map(|hit| hit.position)
    }

    /// Sum of all negative deltas, as a positive number, saturating at
    /// `i32::MAX`.
    pub fn total_damage(&self) -> i32 {
        self.hits
            .iter()
            .map(|hit| (-hit.delta).max(0))
            .fold(0, i32::saturating_add)
    }
}

/// Runs one row-major pass over the whole board for an attack that already
/// passed the legality gate.
///
/// The attacker is held outside its slot for the duration of the pass so its
/// ammo and streak can change while other slots are mutated. Its own cell is
/// still visited and may receive its own effect.
pub(crate) fn run_sweep(
    board: &mut Board,
    src: Position,
    primary: Position,
) -> SkirmishResult<StrikeReport> {
    let mut attacker = board
        .take(src)
        .ok_or(SkirmishError::CellEmpty { position: src })?;
    let mut report = StrikeReport::new(src, primary);

    for current in board.positions() {
        let occupant = if current == src {
            Some(attacker.team())
        } else {
            board.get(current).map(Unit::team)
        };

        let delta = attacker.resolve_strike(StrikeCell {
            src,
            primary,
            current,
            occupant,
        });
        if delta == 0 {
            continue;
        }

        let recipient = if current == src {
            Some(&mut attacker)
        } else {
            board.get_mut(current)
        };
        let Some(recipient) = recipient else {
            continue;
        };
        recipient.apply_health_delta(delta);
        let hit = StrikeHit {
            position: current,
            delta,
            health: recipient.health(),
            removed: !recipient.is_alive(),
        };
        tracing::trace!(position = %current, delta, health = hit.health, "strike hit");

        if hit.removed && current != src {
            board.take(current);
            tracing::debug!(position = %current, "unit removed");
        }
        report.hits.push(hit);
    }

    if attacker.is_alive() {
        board.put(src, attacker);
    } else {
        tracing::debug!(position = %src, "attacker removed by its own strike");
    }

    Ok(report)
}
