//! Board representation and win detection.
//!
//! Cells are indexed bottom row first, matching the numbers the player
//! types in:
//!
//! ```text
//! 6 7 8
//! 3 4 5
//! 0 1 2
//! ```

use crate::{Result, TicTacToeError};
use smallvec::SmallVec;
use std::fmt;

pub const BOARD_CELLS: usize = 9;

/// Every row, column and diagonal, expressed in the layout above.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [2, 4, 6],
    [0, 4, 8],
    [2, 5, 8],
    [1, 4, 7],
    [0, 3, 6],
    [6, 7, 8],
    [3, 4, 5],
    [0, 1, 2],
];

/// Side in the game. The computer maximizes, the user minimizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Computer,
    User,
}

impl Player {
    pub fn sign(self) -> i32 {
        match self {
            Player::Computer => 1,
            Player::User => -1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Computer => Player::User,
            Player::User => Player::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Computer => write!(f, "computer"),
            Player::User => write!(f, "user"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Computer,
    User,
}

impl Cell {
    /// Numeric encoding: 0 empty, +1 computer, -1 user.
    pub fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Computer => 1,
            Cell::User => -1,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Computer => Some(Player::Computer),
            Cell::User => Some(Player::User),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Computer => Cell::Computer,
            Player::User => Cell::User,
        }
    }
}

impl TryFrom<i8> for Cell {
    type Error = TicTacToeError;

    fn try_from(value: i8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Computer),
            -1 => Ok(Cell::User),
            value => Err(TicTacToeError::InvalidCellValue { value }),
        }
    }
}

/// A 3x3 board. `Copy`, so the search can branch by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    pub fn cell(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Returns a copy of the board with `position` marked for `player`.
    ///
    /// The search only calls this with indices from [`find_empties`], so the
    /// position is always in range and empty.
    pub fn with_mark(&self, position: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[position] = Cell::from(player);
        next
    }

    /// Marks `position` for `player`, refusing occupied or unknown cells.
    pub fn place(&mut self, position: usize, player: Player) -> Result<()> {
        match self.cells.get_mut(position) {
            None => Err(TicTacToeError::PositionOutOfRange { position }),
            Some(cell) if !cell.is_empty() => Err(TicTacToeError::CellOccupied { position }),
            Some(cell) => {
                *cell = Cell::from(player);
                Ok(())
            }
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }
}

impl TryFrom<[i8; BOARD_CELLS]> for Board {
    type Error = TicTacToeError;

    fn try_from(values: [i8; BOARD_CELLS]) -> Result<Self> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (cell, value) in cells.iter_mut().zip(values) {
            *cell = Cell::try_from(value)?;
        }
        Ok(Self { cells })
    }
}

/// True if `player` holds all three cells of any winning line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    WINNING_LINES.iter().any(|line| {
        let sum: i32 = line.iter().map(|&idx| board.cells[idx].value()).sum();
        sum * player.sign() == 3
    })
}

/// Empty cell indices in ascending order.
pub fn find_empties(board: &Board) -> SmallVec<[usize; BOARD_CELLS]> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: i8 = 1;
    const U: i8 = -1;

    fn board(values: [i8; 9]) -> Board {
        Board::try_from(values).unwrap()
    }

    #[test]
    fn test_no_winner_on_tied_board() {
        let tie = board([C, U, C, U, C, U, U, C, U]);
        assert!(!is_winner(&tie, Player::Computer));
        assert!(!is_winner(&tie, Player::User));
    }

    #[test]
    fn test_computer_wins_left_column() {
        let b = board([C, 0, U, C, U, U, C, 0, 0]);
        assert!(is_winner(&b, Player::Computer));
        assert!(!is_winner(&b, Player::User));
    }

    #[test]
    fn test_user_wins_left_column() {
        let b = board([U, 0, C, U, C, C, U, 0, 0]);
        assert!(is_winner(&b, Player::User));
        assert!(!is_winner(&b, Player::Computer));
    }

    #[test]
    fn test_two_marks_are_not_a_win() {
        let b = board([C, C, 0, 0, 0, 0, 0, 0, 0]);
        assert!(!is_winner(&b, Player::Computer));
    }

    #[test]
    fn test_find_empties() {
        let full = board([C, U, C, U, C, U, U, C, U]);
        assert!(find_empties(&full).is_empty());

        let partial = board([U, 0, C, U, C, C, U, 0, 0]);
        assert_eq!(find_empties(&partial).as_slice(), &[1, 7, 8]);

        let empty = Board::new();
        assert_eq!(find_empties(&empty).as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let original = Board::new();
        let next = original.with_mark(4, Player::Computer);
        assert_eq!(original.cell(4), Some(Cell::Empty));
        assert_eq!(next.cell(4), Some(Cell::Computer));
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut b = Board::new();
        b.place(3, Player::User).unwrap();
        assert!(matches!(
            b.place(3, Player::Computer),
            Err(TicTacToeError::CellOccupied { position: 3 })
        ));
        assert!(matches!(
            b.place(9, Player::Computer),
            Err(TicTacToeError::PositionOutOfRange { position: 9 })
        ));
        assert_eq!(b.cell(3), Some(Cell::User));
    }

    #[test]
    fn test_invalid_cell_value() {
        let err = Board::try_from([0, 0, 2, 0, 0, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, TicTacToeError::InvalidCellValue { value: 2 }));
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Computer.owner(), Some(Player::Computer));
        assert_eq!(Cell::from(Player::User).owner(), Some(Player::User));
    }

    #[test]
    fn test_opponent_and_sign() {
        assert_eq!(Player::Computer.opponent(), Player::User);
        assert_eq!(Player::User.opponent(), Player::Computer);
        assert_eq!(Player::Computer.sign(), 1);
        assert_eq!(Player::User.sign(), -1);
        assert_eq!(Cell::from(Player::User).value(), -1);
    }
}
