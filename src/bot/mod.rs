//! Move-choosing strategies.

pub mod minimax;
pub mod random;

pub use minimax::{MinimaxBot, choose_computer_move, choose_move, minimax_value};
pub use random::RandomBot;

use crate::{Board, Player};

/// Something that can pick a cell for `player` on a given board.
pub trait TicTacToeBot {
    fn name(&self) -> &str;

    /// Returns `None` only when the board has no empty cell.
    fn choose_move(&self, board: &Board, player: Player) -> Option<usize>;
}
