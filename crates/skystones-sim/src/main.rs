//! Skystones simulation driver.
//!
//! Deals two hands, plays a scripted game to the end and logs each move.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skystones_core::{CardLibrary, GameConfig, GameState};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod deal;
mod driver;
mod render;

use config::{Deal, SimConfig};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimConfig::from_env()?;
    info!(?config, "Starting Skystones simulation...");

    let (host, visitor) = match config.deal {
        Deal::Demo => deal::demo_hands(),
        Deal::Random => {
            let library = load_library(&config)?;
            let seed = config.seed.unwrap_or_else(rand::random);
            info!(seed, cards = library.len(), "dealing random hands");
            let mut rng = StdRng::seed_from_u64(seed);
            deal::random_hands(&library, config.hand_size, &mut rng)
        }
    };

    let game_config = GameConfig {
        first_player: config.first_player,
    };
    let mut game = GameState::with_config(game_config, host, visitor)?;
    let summary = driver::run(&mut game)?;

    debug!(snapshot = %game.to_json()?, "final state");

    info!("--- Game Over ---");
    info!(moves = summary.moves, passes = summary.passes, "game summary");
    info!("Host stones: {}", summary.host);
    info!("Visitor stones: {}", summary.visitor);
    match summary.result {
        Some(result) => info!("Winner: {result}"),
        None => info!("No winner: hands ran out after {} moves", summary.moves),
    }

    Ok(())
}

fn load_library(config: &SimConfig) -> anyhow::Result<CardLibrary> {
    let Some(path) = &config.library_path else {
        return Ok(CardLibrary::standard());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading card library {}", path.display()))?;
    Ok(CardLibrary::from_json(&json)?)
}
