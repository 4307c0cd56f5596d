//! Console front end for the Indigo card game.
//!
//! Run without arguments to play a game, or with `deck` to inspect a deck by
//! hand. Set `INDIGO_SEED` for a reproducible shuffle and `RUST_LOG` for
//! diagnostics on stderr.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use indigo::{Deck, Game, GameError, GameOptions, menu, prompt_first};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    let seed = seed();
    let result = match std::env::args().nth(1).as_deref() {
        Some("deck") => run_menu(seed),
        _ => run_game(seed),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "indigo stopped");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn seed() -> u64 {
    std::env::var("INDIGO_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        })
}

fn run_game(seed: u64) -> Result<(), GameError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Indigo Card Game")?;
    let Some(first) = prompt_first(&mut input, &mut out)? else {
        return Ok(());
    };

    let options = GameOptions::default().with_first(first);
    let mut game = Game::new(options, seed, input, out)?;
    game.play()?;
    Ok(())
}

fn run_menu(seed: u64) -> Result<(), GameError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck = Deck::new();
    menu::run(&mut deck, &mut rng, io::stdin().lock(), io::stdout())
}
