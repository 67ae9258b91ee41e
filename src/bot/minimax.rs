use crate::{Board, Player, TicTacToeBot, find_empties, is_winner};
use std::cmp;
use tracing::{debug, trace};

pub const WIN_SCORE: i32 = 10;

pub const LOSE_SCORE: i32 = -WIN_SCORE;

pub const DRAW_SCORE: i32 = 0;

const INFINITY: i32 = i32::MAX / 2;

/// Plays perfectly for whichever side it is asked to move.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxBot;

impl MinimaxBot {
    pub fn new() -> Self {
        Self
    }
}

impl TicTacToeBot for MinimaxBot {
    fn name(&self) -> &str {
        "minimax_bot"
    }

    fn choose_move(&self, board: &Board, player: Player) -> Option<usize> {
        choose_move(board, player)
    }
}

/// Best move for the computer, or `None` on a full board.
pub fn choose_computer_move(board: &Board) -> Option<usize> {
    choose_move(board, Player::Computer)
}

/// Root of the search for `player`.
///
/// Candidates are tried in ascending cell order and only a strictly better
/// score replaces the running best, so ties go to the lowest index.
pub fn choose_move(board: &Board, player: Player) -> Option<usize> {
    let mut best_score = -INFINITY * player.sign();
    let mut best_move = None;

    for move_idx in find_empties(board) {
        let next = board.with_mark(move_idx, player);
        let score = minimax_value(&next, player.opponent());

        trace!(%player, move_idx, score, "root candidate");

        let improves = match player {
            Player::Computer => score > best_score,
            Player::User => score < best_score,
        };
        if improves {
            best_score = score;
            best_move = Some(move_idx);
        }
    }

    match best_move {
        Some(move_idx) => debug!(%player, move_idx, score = best_score, "best move"),
        None => debug!(%player, "board is full, no move to choose"),
    }

    best_move
}

/// Scores `board` with `to_move` about to play: `WIN_SCORE` when the computer
/// can force a win, `LOSE_SCORE` when the user can, `DRAW_SCORE` otherwise.
///
/// Terminal checks run user win, then computer win, then full board. Every
/// branch gets its own copy of the board.
pub fn minimax_value(board: &Board, to_move: Player) -> i32 {
    if is_winner(board, Player::User) {
        return LOSE_SCORE;
    }
    if is_winner(board, Player::Computer) {
        return WIN_SCORE;
    }

    let moves = find_empties(board);
    if moves.is_empty() {
        return DRAW_SCORE;
    }

    match to_move {
        Player::Computer => {
            let mut best_score = -INFINITY;

            for move_idx in moves {
                let next = board.with_mark(move_idx, Player::Computer);
                let score = minimax_value(&next, Player::User);
                best_score = cmp::max(best_score, score);
            }
            best_score
        }
        Player::User => {
            let mut worst_score = INFINITY;

            for move_idx in moves {
                let next = board.with_mark(move_idx, Player::User);
                let score = minimax_value(&next, Player::Computer);
                worst_score = cmp::min(worst_score, score);
            }
            worst_score
        }
    }
}
