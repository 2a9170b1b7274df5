use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use connect_four_agents::ai::{Agent, AgentKind};
use connect_four_agents::config::MatchConfig;
use connect_four_agents::game::{outcome, Board, Outcome, Player};

/// Pit two Connect Four agents against each other in the terminal.
#[derive(Parser)]
#[command(name = "connect-four-agents", about = "Play Connect Four agents against each other")]
struct Cli {
    /// Path to TOML match configuration
    #[arg(long, default_value = "match.toml")]
    config: PathBuf,

    /// Override the red strategy (greedy, minimax, alpha_beta, best_first_scan, random)
    #[arg(long)]
    red: Option<AgentKind>,

    /// Override the yellow strategy
    #[arg(long)]
    yellow: Option<AgentKind>,

    /// Override red's search depth
    #[arg(long)]
    red_depth: Option<usize>,

    /// Override yellow's search depth
    #[arg(long)]
    yellow_depth: Option<usize>,

    /// Override the number of games to play
    #[arg(long)]
    games: Option<usize>,

    /// Only print results, not board positions
    #[arg(long)]
    quiet: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", MatchConfig::default_toml());
        return Ok(());
    }

    let mut config = MatchConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(kind) = cli.red {
        config.red.agent = kind;
    }
    if let Some(kind) = cli.yellow {
        config.yellow.agent = kind;
    }
    if let Some(depth) = cli.red_depth {
        config.red.depth = Some(depth);
    }
    if let Some(depth) = cli.yellow_depth {
        config.yellow.depth = Some(depth);
    }
    if let Some(games) = cli.games {
        config.games = games;
    }
    config.validate().context("invalid match configuration")?;

    let mut red = config.red.build().context("building red agent")?;
    let mut yellow = config.yellow.build().context("building yellow agent")?;

    println!(
        "{} (Red) vs {} (Yellow), {} game(s)",
        red.name(),
        yellow.name(),
        config.games
    );

    let mut red_wins = 0usize;
    let mut yellow_wins = 0usize;
    let mut draws = 0usize;

    for game in 1..=config.games {
        match play_game(&mut *red, &mut *yellow, cli.quiet) {
            Outcome::Win(Player::Red) => {
                red_wins += 1;
                println!("Game {game}: Red ({}) wins", red.name());
            }
            Outcome::Win(Player::Yellow) => {
                yellow_wins += 1;
                println!("Game {game}: Yellow ({}) wins", yellow.name());
            }
            Outcome::Draw => {
                draws += 1;
                println!("Game {game}: draw");
            }
            Outcome::InProgress => unreachable!("games are played to completion"),
        }
    }

    if config.games > 1 {
        println!("Final tally: Red {red_wins}, Yellow {yellow_wins}, draws {draws}");
    }

    Ok(())
}

fn play_game(red: &mut dyn Agent, yellow: &mut dyn Agent, quiet: bool) -> Outcome {
    let mut board = Board::new();

    loop {
        let player = board.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };

        // A full board with no prior win is a draw
        let Some(col) = agent.select_move(&board, player) else {
            return Outcome::Draw;
        };
        board
            .drop_piece(col)
            .expect("agent selected a legal column");

        if !quiet {
            println!("{player} ({}) plays column {col}", agent.name());
            println!("{board}");
        }

        match outcome(&board) {
            Outcome::InProgress => board.switch_player(),
            finished => return finished,
        }
    }
}
