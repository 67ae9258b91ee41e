use crate::{Board, Player, TicTacToeBot, find_empties};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use std::cell::RefCell;

/// Picks uniformly among the empty cells. Used as a sparring partner in
/// self-play.
pub struct RandomBot {
    rng: RefCell<StdRng>,
}

impl RandomBot {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_os_rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeBot for RandomBot {
    fn name(&self) -> &str {
        "random_bot"
    }

    fn choose_move(&self, board: &Board, _player: Player) -> Option<usize> {
        let moves = find_empties(board);
        moves.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_an_empty_cell() {
        let bot = RandomBot::with_seed(7);
        let board = Board::try_from([1, -1, 0, 1, -1, 0, 0, 1, -1]).unwrap();
        for _ in 0..20 {
            let chosen = bot.choose_move(&board, Player::User).unwrap();
            assert!([2, 5, 6].contains(&chosen));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let a = RandomBot::with_seed(42);
        let b = RandomBot::with_seed(42);
        let board = Board::new();
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, Player::User),
                b.choose_move(&board, Player::User)
            );
        }
    }

    #[test]
    fn test_full_board() {
        let bot = RandomBot::with_seed(1);
        let full = Board::try_from([1, -1, 1, -1, 1, -1, -1, 1, -1]).unwrap();
        assert_eq!(bot.choose_move(&full, Player::Computer), None);
    }
}
