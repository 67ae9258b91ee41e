//! Turn-by-turn driver around a [`Board`].

use crate::{Board, Player, Result, TicTacToeBot, TicTacToeError, is_winner};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// One game: the board, whose turn it is, and the moves played so far.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    pub fn new(first: Player) -> Self {
        info!(%first, "new game");
        Self {
            board: Board::new(),
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::with_capacity(9),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Plays `position` for `player` and returns the resulting status.
    ///
    /// Only the mover can have just won, so the mover's lines are checked
    /// first and a full board without a winner is a draw.
    pub fn play(&mut self, position: usize, player: Player) -> Result<GameStatus> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        if player != self.to_move {
            return Err(TicTacToeError::NotYourTurn { player });
        }

        self.board.place(position, player)?;
        self.history.push(position);
        debug!(%player, position, "move played");

        self.status = if is_winner(&self.board, player) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        self.to_move = player.opponent();

        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "game finished");
        }
        Ok(self.status)
    }

    /// Lets `bot` play for the side to move.
    pub fn play_bot(&mut self, bot: &dyn TicTacToeBot) -> Result<(usize, GameStatus)> {
        if self.status.is_over() {
            return Err(TicTacToeError::GameOver);
        }
        let player = self.to_move;
        let position = bot
            .choose_move(&self.board, player)
            .ok_or(TicTacToeError::NoMovesAvailable)?;
        debug!(bot = bot.name(), %player, position, "bot chose");
        let status = self.play(position, player)?;
        Ok((position, status))
    }
}

/// Parses a typed cell number and checks it is free on `board`.
pub fn parse_move(input: &str, board: &Board) -> Result<usize> {
    let trimmed = input.trim();
    let position: usize = trimmed.parse().map_err(|_| TicTacToeError::InvalidInput {
        input: trimmed.to_string(),
    })?;
    match board.cell(position) {
        None => Err(TicTacToeError::PositionOutOfRange { position }),
        Some(cell) if !cell.is_empty() => Err(TicTacToeError::CellOccupied { position }),
        Some(_) => Ok(position),
    }
}
