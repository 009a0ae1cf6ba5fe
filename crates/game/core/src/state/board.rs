//! The grid of unit slots for one match.

use crate::action::{AttackAction, MoveAction, PlaceAction, ReloadAction, execute_transition};
use crate::combat::StrikeReport;
use crate::error::{SkirmishError, SkirmishResult};

use super::{Position, Team, Unit};

/// Height × width grid where each cell holds at most one unit.
///
/// The board owns every unit placed on it. `Clone` deep-copies every occupied
/// slot, so two boards never share a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: i32,
    width: i32,
    slots: Vec<Option<Unit>>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Both dimensions must be positive and the grid must fit in memory.
    pub fn new(height: i32, width: i32) -> SkirmishResult<Self> {
        if height <= 0 || width <= 0 {
            return Err(SkirmishError::illegal_argument(format!(
                "board dimensions must be positive (got {height}x{width})"
            )));
        }
        let too_large = || SkirmishError::illegal_argument("board dimensions are too large");
        let cells = (height as usize).checked_mul(width as usize).ok_or_else(too_large)?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(cells).map_err(|_| too_large())?;
        slots.resize_with(cells, || None);
        Ok(Self {
            height,
            width,
            slots,
        })
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.height).contains(&position.row) && (0..self.width).contains(&position.col)
    }

    pub(crate) fn ensure_contains(&self, position: Position) -> SkirmishResult<()> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(SkirmishError::IllegalCell { position })
        }
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.width as usize + position.col as usize)
    }

    /// Unit at `position`; `None` for empty or off-board cells.
    pub fn get(&self, position: Position) -> Option<&Unit> {
        self.index(position).and_then(|index| self.slots[index].as_ref())
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Unit> {
        self.index(position).and_then(|index| self.slots[index].as_mut())
    }

    pub(crate) fn take(&mut self, position: Position) -> Option<Unit> {
        self.index(position).and_then(|index| self.slots[index].take())
    }

    /// Stores `unit` at an on-board `position`, replacing any occupant.
    pub(crate) fn put(&mut self, position: Position, unit: Unit) {
        if let Some(index) = self.index(position) {
            self.slots[index] = Some(unit);
        }
    }

    pub fn is_cell_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Every coordinate of the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    /// Every cell with its occupant, row-major. Renderers iterate this.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<&Unit>)> + '_ {
        self.positions().zip(self.slots.iter().map(Option::as_ref))
    }

    /// Occupied cells only, row-major.
    pub fn units(&self) -> impl Iterator<Item = (Position, &Unit)> + '_ {
        self.cells()
            .filter_map(|(position, unit)| unit.map(|unit| (position, unit)))
    }

    pub fn unit_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Units belonging to `team`, row-major.
    pub fn units_of(&self, team: Team) -> impl Iterator<Item = (Position, &Unit)> + '_ {
        self.units().filter(move |(_, unit)| unit.team() == team)
    }

    /// Places `unit` on an empty cell.
    pub fn add_unit(&mut self, position: Position, unit: Unit) -> SkirmishResult<()> {
        execute_transition(PlaceAction::new(position, unit), self)
    }

    /// Relocates the unit at `from` to the empty cell `to`.
    pub fn move_unit(&mut self, from: Position, to: Position) -> SkirmishResult<()> {
        execute_transition(MoveAction::new(from, to), self)
    }

    /// Resolves an attack from the unit at `from` against the cell `to`.
    ///
    /// Either the full legality gate passes and the sweep completes, or the
    /// board is left untouched.
    pub fn attack(&mut self, from: Position, to: Position) -> SkirmishResult<StrikeReport> {
        execute_transition(AttackAction::new(from, to), self)
    }

    /// Adds the unit's reload amount to its ammo.
    pub fn reload(&mut self, position: Position) -> SkirmishResult<()> {
        execute_transition(ReloadAction::new(position), self)
    }

    /// The sole team left on the board, if exactly one team remains.
    ///
    /// An empty board has no winner.
    pub fn winner(&self) -> Option<Team> {
        let mut units = self.units().map(|(_, unit)| unit.team());
        let first = units.next()?;
        units.all(|team| team == first).then_some(first)
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}
