//! Text rendering of a board.
//!
//! ```text
//! *******
//! |S| |n|
//! | |M| |
//! *******
//! ```

use std::fmt;

use super::Board;

const BORDER: char = '*';
const SEPARATOR: char = '|';
const EMPTY: char = ' ';

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border: String = std::iter::repeat_n(BORDER, 2 * self.width() as usize + 1).collect();
        writeln!(f, "{border}")?;
        for (position, unit) in self.cells() {
            write!(f, "{SEPARATOR}{}", unit.map_or(EMPTY, |unit| unit.symbol()))?;
            if position.col == self.width() - 1 {
                writeln!(f, "{SEPARATOR}")?;
            }
        }
        write!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use crate::state::{Board, Position, Team, Unit, UnitKind};

    #[test]
    fn renders_symbols_and_blanks() {
        let mut board = Board::new(2, 3).unwrap();
        board
            .add_unit(
                Position::new(0, 0),
                Unit::new(UnitKind::Brawler, Team::Powerlifters, 1, 0, 0, 0).unwrap(),
            )
            .unwrap();
        board
            .add_unit(
                Position::new(1, 2),
                Unit::new(UnitKind::LongRange, Team::Crossfitters, 1, 0, 0, 0).unwrap(),
            )
            .unwrap();

        assert_eq!(board.to_string(), "*******\n|S| | |\n| | |n|\n*******");
    }
}
