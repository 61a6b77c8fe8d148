//! Headless glider run.
//!
//! Loads `config.ron`, applies CLI overrides, then flies a scripted pilot
//! through one session and logs telemetry until the game-over screen shows
//! or the configured duration passes.
//!
//! Run with: `cargo run -p glider-game -- --duration 60`

mod game;
mod game_loop;
mod hud;
mod pilot;
mod ui;
mod world;

use std::path::PathBuf;

use clap::Parser;
use glider_config::{CliArgs, Config};
use tracing::{info, warn};

use crate::game::Game;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        Config::default_dir().unwrap_or_else(|e| {
            eprintln!("{e}, using current directory");
            PathBuf::from(".")
        })
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    glider_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    info!("Config dir: {}", config_dir.display());

    let level = args
        .level
        .clone()
        .unwrap_or_else(|| config.session.gameplay_level.clone());

    let mut game = Game::new(&config);
    let placed = game.world().coins().len();
    if placed != config.session.total_coins as usize {
        warn!(
            placed,
            expected = config.session.total_coins,
            "Coin count does not match the session total"
        );
    }
    game.start(&level);

    if !game.session().is_gameplay_level() {
        info!(level = %level, "Nothing to fly outside the gameplay level");
        return;
    }

    game.run(&config.sim);

    let hud = game.hud();
    info!(
        outcome = ?game.session().phase(),
        flight = ?game.flight().mode(),
        coins = hud.coins_collected,
        total = hud.total_coins,
        uncollected = game.world().remaining_coins(),
        taps = game.pilot().taps(),
        distance = game.actor().location.x,
        "Session summary"
    );
    info!(
        screen = ?game.ui().screen(),
        cursor_visible = game.ui().cursor_visible(),
        game_over_screens = game.ui().game_over_shown(),
        "UI state"
    );
}
