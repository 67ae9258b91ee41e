//! Terminal output: intro, board, end-of-game banner.
//!
//! With ANSI enabled the board is redrawn in place: the renderer remembers how
//! many lines it (and the prompt) wrote since the last draw, moves the cursor
//! back up over them and clears the rest of the screen. The first board is
//! printed below whatever is already on screen.

use crate::{Board, Cell, GameStatus, Player, Result};
use crossterm::{
    cursor, queue,
    terminal::{self, ClearType},
};
use std::io::Write;

const BOARD_LINES: usize = 6;

const LAYOUT: &str = r#"
   6 | 7 | 8
  -----------
   3 | 4 | 5
  -----------
   0 | 1 | 2

"#;

pub fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => '-',
        Cell::Computer => 'O',
        Cell::User => 'X',
    }
}

/// The board as six lines, top row (6 7 8) first, starting with a blank line.
pub fn format_board(board: &Board) -> String {
    let g = |idx: usize| glyph(board.cells()[idx]);
    format!(
        "\n   {} | {} | {}\n  -----------\n   {} | {} | {}\n  -----------\n   {} | {} | {}\n",
        g(6),
        g(7),
        g(8),
        g(3),
        g(4),
        g(5),
        g(0),
        g(1),
        g(2),
    )
}

pub fn banner(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Won(Player::User) => Some("YOU WIN!"),
        GameStatus::Won(Player::Computer) => Some("I WIN!"),
        GameStatus::Draw => Some("WE TIE!"),
        GameStatus::InProgress => None,
    }
}

pub struct Renderer<W: Write> {
    out: W,
    ansi: bool,
    board_on_screen: bool,
    lines_since_draw: usize,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self {
            out,
            ansi,
            board_on_screen: false,
            lines_since_draw: 0,
        }
    }

    pub fn intro(&mut self, first: Player) -> Result<()> {
        let whose = match first {
            Player::User => "yours",
            Player::Computer => "mine",
        };
        write!(
            self.out,
            "Play \"X\" against me playing \"O\". The first\nmove is {whose}. Choose your cell by number:\n{LAYOUT}"
        )?;
        self.out.flush()?;
        Ok(())
    }

    /// Draws the board, replacing the previous drawing when ANSI is on.
    pub fn draw_board(&mut self, board: &Board) -> Result<()> {
        if self.ansi && self.board_on_screen {
            let up = u16::try_from(self.lines_since_draw).unwrap_or(u16::MAX);
            queue!(
                self.out,
                cursor::MoveUp(up),
                terminal::Clear(ClearType::FromCursorDown)
            )?;
        }
        self.out.write_all(format_board(board).as_bytes())?;
        self.out.flush()?;
        self.board_on_screen = true;
        self.lines_since_draw = BOARD_LINES;
        Ok(())
    }

    /// Accounts for a line the prompt echoed below the board.
    pub fn prompt_line(&mut self) {
        self.lines_since_draw += 1;
    }

    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        self.lines_since_draw += text.lines().count().max(1);
        Ok(())
    }

    /// Prints the end-of-game banner, if the game is over.
    pub fn finish(&mut self, status: GameStatus) -> Result<()> {
        if let Some(text) = banner(status) {
            writeln!(self.out, "\n{text}")?;
            self.out.flush()?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
