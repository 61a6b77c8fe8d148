//! Command-line argument parsing for the glider game.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Glider command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "glider", about = "Arcade glider flight simulation")]
pub struct CliArgs {
    /// Simulated seconds to run before exiting.
    #[arg(long)]
    pub duration: Option<f64>,

    /// Level to start the session in.
    #[arg(long)]
    pub level: Option<String>,

    /// Number of coins the session expects.
    #[arg(long)]
    pub total_coins: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// `--level` is not stored in the config; the caller passes it to the
    /// session directly.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(duration) = args.duration {
            self.sim.duration_secs = duration;
        }
        if let Some(total) = args.total_coins {
            self.session.total_coins = total;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            duration: None,
            level: None,
            total_coins: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            duration: Some(12.5),
            log_level: Some("debug".to_string()),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert!((config.sim.duration_secs - 12.5).abs() < f64::EPSILON);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.session.total_coins, 5);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::parse_from(["glider", "--level", "MainMenu", "--total-coins", "7"]);
        assert_eq!(args.level.as_deref(), Some("MainMenu"));
        assert_eq!(args.total_coins, Some(7));
        assert!(args.duration.is_none());
    }
}
