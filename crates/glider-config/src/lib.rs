//! Configuration system for the glider game.
//!
//! Holds the authored flight tunables, session rules, and headless-host
//! settings. Everything persists to disk as a single RON file, supports CLI
//! overrides via clap, and is validated once at load time so the simulation
//! core never has to guard against inverted bounds.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CameraRigConfig, Config, DebugConfig, FlightConfig, PilotConfig, SessionConfig, SimConfig,
    WorldConfig,
};
pub use error::ConfigError;
