//! Perfect-play tic-tac-toe.
//!
//! The search is a plain exhaustive minimax over the 3x3 board: the computer
//! maximizes, the user minimizes, wins score `+10`/`-10` and draws `0`.
//!
//! ```
//! use tictactoe::{Board, choose_computer_move};
//!
//! // User (-1) threatens 3-4-5 and 0-4-8; computer (+1) can't win.
//! let board = Board::try_from([0, 0, 0, -1, -1, 0, 1, 1, -1]).unwrap();
//! assert_eq!(choose_computer_move(&board), Some(0));
//! ```

pub mod board;
pub mod bot;
pub mod cli;
pub mod error;
pub mod game;
pub mod render;
pub mod selfplay;

pub use board::{BOARD_CELLS, Board, Cell, Player, WINNING_LINES, find_empties, is_winner};
pub use bot::{
    MinimaxBot, RandomBot, TicTacToeBot, choose_computer_move, choose_move, minimax_value,
};
pub use error::{Result, TicTacToeError};
pub use game::{Game, GameStatus, parse_move};
pub use render::Renderer;
pub use selfplay::{MatchStats, play_match};
