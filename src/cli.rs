use crate::{MinimaxBot, RandomBot, Result, TicTacToeBot, TicTacToeError};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a computer that never loses")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal (default)
    Play(PlayArgs),
    /// Pit the minimax bot against another bot
    Selfplay(SelfplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Pause before showing the computer's move, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Print every board below the last one instead of redrawing in place
    #[arg(long)]
    pub plain: bool,

    /// Let the computer open the game
    #[arg(long)]
    pub computer_first: bool,
}

impl Default for PlayArgs {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            plain: false,
            computer_first: false,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SelfplayArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    pub games: u32,

    /// Bot taking the user's seat
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    pub opponent: Opponent,

    /// Seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the minimax bot open every game
    #[arg(long)]
    pub computer_first: bool,

    /// Print the tally as JSON
    #[arg(long)]
    pub json: bool,
}

impl SelfplayArgs {
    /// Builds the bot for the user's seat. A seed only makes sense for the
    /// random opponent and is refused otherwise.
    pub fn opponent_bot(&self) -> Result<Box<dyn TicTacToeBot>> {
        match (self.opponent, self.seed) {
            (Opponent::Minimax, Some(seed)) => Err(TicTacToeError::InvalidConfiguration {
                message: format!("--seed {seed} has no effect with --opponent minimax"),
            }),
            (Opponent::Minimax, None) => Ok(Box::new(MinimaxBot::new())),
            (Opponent::Random, Some(seed)) => Ok(Box::new(RandomBot::with_seed(seed))),
            (Opponent::Random, None) => Ok(Box::new(RandomBot::new())),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opponent {
    Minimax,
    Random,
}
