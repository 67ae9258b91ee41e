use crate::{Game, GameStatus, Player, Result, TicTacToeBot, TicTacToeError};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchStats {
    pub games: u32,
    pub computer_wins: u32,
    pub user_wins: u32,
    pub draws: u32,
}

impl MatchStats {
    fn record(&mut self, status: GameStatus) -> Result<()> {
        match status {
            GameStatus::Won(Player::Computer) => self.computer_wins += 1,
            GameStatus::Won(Player::User) => self.user_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return Err(TicTacToeError::GameUnfinished),
        }
        self.games += 1;
        Ok(())
    }
}

/// Plays a single game to the end, `computer` and `user` taking turns.
pub fn play_game(
    computer: &dyn TicTacToeBot,
    user: &dyn TicTacToeBot,
    first: Player,
) -> Result<Game> {
    let mut game = Game::new(first);
    while !game.status().is_over() {
        let bot = match game.to_move() {
            Player::Computer => computer,
            Player::User => user,
        };
        game.play_bot(bot)?;
    }
    Ok(game)
}

/// Plays `games` games between two bots and tallies the results.
pub fn play_match(
    computer: &dyn TicTacToeBot,
    user: &dyn TicTacToeBot,
    first: Player,
    games: u32,
) -> Result<MatchStats> {
    info!(
        computer = computer.name(),
        user = user.name(),
        %first,
        games,
        "starting match"
    );

    let mut stats = MatchStats::default();
    for round in 0..games {
        let game = play_game(computer, user, first)?;
        debug!(round, status = ?game.status(), moves = ?game.history(), "game over");
        stats.record(game.status())?;
    }

    info!(?stats, "match finished");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MinimaxBot, RandomBot};

    #[test]
    fn test_minimax_mirror_match_is_all_draws() {
        let bot = MinimaxBot::new();
        let stats = play_match(&bot, &bot, Player::User, 2).unwrap();
        assert_eq!(
            stats,
            MatchStats {
                games: 2,
                computer_wins: 0,
                user_wins: 0,
                draws: 2,
            }
        );
    }

    #[test]
    fn test_minimax_never_loses_to_random() {
        let computer = MinimaxBot::new();
        let user = RandomBot::with_seed(2024);
        let stats = play_match(&computer, &user, Player::User, 25).unwrap();
        assert_eq!(stats.games, 25);
        assert_eq!(stats.user_wins, 0);
        assert_eq!(stats.computer_wins + stats.draws, 25);
    }

    #[test]
    fn test_unfinished_game_is_not_tallied() {
        let mut stats = MatchStats::default();
        stats.record(GameStatus::Draw).unwrap();
        assert!(matches!(
            stats.record(GameStatus::InProgress),
            Err(TicTacToeError::GameUnfinished)
        ));
        assert_eq!(
            stats,
            MatchStats {
                games: 1,
                computer_wins: 0,
                user_wins: 0,
                draws: 1,
            }
        );
    }

    #[test]
    fn test_stats_serialize() {
        let stats = MatchStats {
            games: 3,
            computer_wins: 2,
            user_wins: 0,
            draws: 1,
        };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["computer_wins"], 2);
        assert_eq!(json["draws"], 1);
    }
}
