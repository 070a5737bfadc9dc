use battleships::{
    init_logging, ConsoleMoveCommander, GameEngine, MoveCommander, MoveResult,
    RandomMoveCommander, BOARD_SIZE, DEFAULT_FLEET,
};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play on the console against a random opponent.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two random commanders play each other.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn small_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let (seed, mut commanders): (Option<u64>, [Box<dyn MoveCommander>; 2]) = match cli.command {
        Commands::Play { seed } => (
            seed,
            [
                Box::new(ConsoleMoveCommander::new()),
                Box::new(RandomMoveCommander::new(
                    BOARD_SIZE,
                    small_rng(seed.map(|s| s.wrapping_add(1))),
                )),
            ],
        ),
        Commands::Auto { seed } => (
            seed,
            [
                Box::new(RandomMoveCommander::new(
                    BOARD_SIZE,
                    small_rng(seed.map(|s| s.wrapping_add(1))),
                )),
                Box::new(RandomMoveCommander::new(
                    BOARD_SIZE,
                    small_rng(seed.map(|s| s.wrapping_add(2))),
                )),
            ],
        ),
    };

    let mut rng = small_rng(seed);
    let mut engine = GameEngine::new(BOARD_SIZE);
    engine.initialize(&DEFAULT_FLEET, &mut rng)?;

    run_game(&mut engine, &mut commanders);

    println!("Press enter to continue");
    let mut ack = String::new();
    let _ = std::io::stdin().lock().read_line(&mut ack);
    Ok(())
}

/// Alternate the two commanders against the engine until a player wins.
/// An invalid move is retried on the same player's turn.
fn run_game(engine: &mut GameEngine, commanders: &mut [Box<dyn MoveCommander>; 2]) -> usize {
    loop {
        println!("{}", engine);
        for i in 0..2 {
            loop {
                let mv = commanders[i].next_move();
                match engine.do_move(mv, i) {
                    MoveResult::PlayerWon(ship) => {
                        println!("{} is down.", ship);
                        println!("Player {} won!", i);
                        return i;
                    }
                    MoveResult::HitAndDrown(ship) => {
                        println!("{} is down.", ship);
                        break;
                    }
                    MoveResult::InvalidMove => {
                        println!("Player {} InvalidMove", i);
                    }
                    result => {
                        println!("Player {} {:?}", i, result);
                        break;
                    }
                }
            }
        }
    }
}
