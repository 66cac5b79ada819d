#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sea_duel::{
    init_logging, random_grid,
    ui::{print_greeting, print_grids, ConsoleSink},
    AiPlayer, CliPlayer, Match, Player, Side,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play { seed: None }) {
        Commands::Play { seed } => {
            let mut rng = make_rng(seed);
            let user_grid = random_grid(&mut rng);
            let mut ai_grid = random_grid(&mut rng);
            ai_grid.set_hidden(true);
            print_greeting(&mut io::stdout())?;
            let game = Match::new(user_grid, ai_grid, CliPlayer::stdio(), AiPlayer::new(), rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            run_match(game, ConsoleSink::human_vs_ai(io::stdout()))?;
        }
        Commands::Watch { seed } => {
            let mut rng = make_rng(seed);
            let first = random_grid(&mut rng);
            let second = random_grid(&mut rng);
            let game = Match::new(first, second, AiPlayer::new(), AiPlayer::new(), rng)
                .map_err(|e| anyhow::anyhow!(e))?;
            run_match(game, ConsoleSink::ai_vs_ai(io::stdout()))?;
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn run_match<A: Player, B: Player, W: Write>(
    mut game: Match<A, B>,
    mut sink: ConsoleSink<W>,
) -> anyhow::Result<Side> {
    loop {
        print_grids(
            &mut io::stdout(),
            game.grid(Side::First),
            game.grid(Side::Second),
        )?;
        game.play_turn(&mut sink).map_err(|e| anyhow::anyhow!(e))?;
        if let Some(winner) = game.winner() {
            print_grids(
                &mut io::stdout(),
                game.grid(Side::First),
                game.grid(Side::Second),
            )?;
            return Ok(winner);
        }
    }
}
