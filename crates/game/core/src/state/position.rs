use std::fmt;

/// Discrete board coordinate expressed as `(row, col)`.
///
/// Components are signed so that off-board input can be represented and
/// rejected by the board instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Grid distance used by every movement and strike rule.
    ///
    /// Manhattan metric: `|Δrow| + |Δcol|`, saturating at `i32::MAX`.
    #[inline]
    pub fn distance(self, other: Position) -> i32 {
        let steps = self.row.abs_diff(other.row).saturating_add(self.col.abs_diff(other.col));
        i32::try_from(steps).unwrap_or(i32::MAX)
    }

    /// Returns true if both positions lie on the same row or the same column.
    #[inline]
    pub fn is_aligned_with(self, other: Position) -> bool {
        self.row == other.row || self.col == other.col
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
