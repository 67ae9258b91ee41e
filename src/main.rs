use anyhow::{Context, Result};
use clap::Parser;
use rustyline::{DefaultEditor, error::ReadlineError};
use std::{io, thread, time::Duration};
use tictactoe::{
    Board, Game, MinimaxBot, Player, Renderer, TicTacToeBot,
    cli::{Cli, Command, PlayArgs, SelfplayArgs},
    parse_move, play_match,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli
        .command
        .unwrap_or_else(|| Command::Play(PlayArgs::default()))
    {
        Command::Play(args) => run_play(args),
        Command::Selfplay(args) => run_selfplay(args),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_play(args: PlayArgs) -> Result<()> {
    let first = if args.computer_first {
        Player::Computer
    } else {
        Player::User
    };
    let delay = Duration::from_millis(args.delay_ms);
    let bot = MinimaxBot::new();

    let mut game = Game::new(first);
    let mut renderer = Renderer::new(io::stdout(), !args.plain);
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    renderer.intro(first)?;

    while !game.status().is_over() {
        match game.to_move() {
            Player::User => {
                let Some(position) = read_move(&mut editor, &mut renderer, game.board())? else {
                    info!("player left the game");
                    return Ok(());
                };
                game.play(position, Player::User)?;
            }
            Player::Computer => {
                thread::sleep(delay);
                game.play_bot(&bot)?;
            }
        }
        renderer.draw_board(game.board())?;
    }

    renderer.finish(game.status())?;
    Ok(())
}

/// Prompts until the user types a free cell. `None` on Ctrl-C / Ctrl-D.
fn read_move(
    editor: &mut DefaultEditor,
    renderer: &mut Renderer<io::Stdout>,
    board: &Board,
) -> Result<Option<usize>> {
    loop {
        let line = match editor.readline("Your move: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err).context("failed to read move"),
        };
        renderer.prompt_line();
        editor
            .add_history_entry(line.as_str())
            .context("failed to record move in history")?;

        match parse_move(&line, board) {
            Ok(position) => return Ok(Some(position)),
            Err(err) => {
                warn!(input = %line, %err, "rejected move");
                renderer.message(&format!("{err}, try again"))?;
            }
        }
    }
}

fn run_selfplay(args: SelfplayArgs) -> Result<()> {
    let first = if args.computer_first {
        Player::Computer
    } else {
        Player::User
    };
    let computer = MinimaxBot::new();
    let opponent = args.opponent_bot()?;

    let stats = play_match(&computer, opponent.as_ref(), first, args.games)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).context("failed to encode match stats")?
        );
    } else {
        println!(
            "{} vs {}: {} games, {} won, {} lost, {} drawn",
            computer.name(),
            opponent.name(),
            stats.games,
            stats.computer_wins,
            stats.user_wins,
            stats.draws
        );
    }
    Ok(())
}
