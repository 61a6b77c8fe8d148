//! Configuration structs with authored defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "glider";

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Glider flight tunables.
    pub flight: FlightConfig,
    /// Game session rules (coins, levels, game-over timing).
    pub session: SessionConfig,
    /// Headless world layout: ground, start position, coins.
    pub world: WorldConfig,
    /// Scripted pilot used by the headless host.
    pub pilot: PilotConfig,
    /// Frame loop settings.
    pub sim: SimConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Authored flight tunables for a single glider.
///
/// Angles are in degrees, speeds in world units per second. The struct is
/// immutable once handed to the flight integrator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlightConfig {
    /// Steering rotation speed in degrees per second at full stick.
    pub rotation_speed: f32,
    /// Minimum roll while not stalling.
    pub min_roll: f32,
    /// Maximum roll while not stalling.
    pub max_roll: f32,
    /// Minimum pitch while not stalling.
    pub min_pitch: f32,
    /// Maximum pitch while not stalling.
    pub max_pitch: f32,
    /// Climb speed is halved while pitch is in `(0.5, positive_pitch_speed_modifier]`.
    pub positive_pitch_speed_modifier: f32,
    /// Climb speed is halved while pitch is in `[negative_pitch_speed_modifier, 0.5)`.
    pub negative_pitch_speed_modifier: f32,
    /// Climb speed divisor while banked more than half a degree.
    pub banked_climb_divisor: f32,
    /// Multiplier applied to the constant gravity sink.
    pub gravity_multiplier: f32,
    /// Forward speed lost per second, every tick.
    pub drag: f32,
    /// Minimum forward speed.
    pub min_speed: f32,
    /// Maximum forward speed.
    pub max_speed: f32,
    /// Minimum climb speed (most negative sink rate).
    pub min_climb_speed: f32,
    /// Maximum climb speed.
    pub max_climb_speed: f32,
    /// Forward speed at or below which the glider stalls.
    pub stall_speed: f32,
    /// Altitude the glider must lose before a stall clears.
    pub stall_distance: f32,
    /// Pitch above which the glider stalls.
    pub stall_pitch: f32,
    /// Upper bound of accumulated launch power.
    pub max_launch_power: f32,
    /// Launch power lost per second during the launch run.
    pub launch_power_reduction: f32,
    /// Launch power added by each valid foot press.
    pub leg_power: f32,
    /// Seconds of launch run before the glider takes off.
    pub launch_duration: f32,
    /// Camera boom easing targets.
    pub camera: CameraRigConfig,
}

/// Camera boom easing targets applied once the glider is airborne.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraRigConfig {
    /// Target vertical socket offset.
    pub target_socket_offset_z: f32,
    /// Target boom arm length.
    pub target_arm_length: f32,
    /// Socket offset change per second.
    pub socket_offset_move_speed: f32,
    /// Arm length change per second.
    pub arm_length_move_speed: f32,
}

/// Game session rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of coins placed in the gameplay level.
    pub total_coins: u32,
    /// Level name that shows the main menu.
    pub main_menu_level: String,
    /// Level name that runs the game.
    pub gameplay_level: String,
    /// Seconds between the end condition and the game-over screen.
    pub game_over_delay_secs: f32,
}

/// Headless world layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Height of the flat ground plane.
    pub ground_height: f32,
    /// Altitude of the launch ramp above the ground.
    pub start_altitude: f32,
    /// Coin positions in world space.
    pub coins: Vec<[f32; 3]>,
    /// Distance at which a coin is picked up.
    pub coin_pickup_radius: f32,
}

/// Scripted pilot behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PilotConfig {
    /// Seconds between alternating foot taps during the launch run.
    pub tap_interval_secs: f32,
    /// Pitch the pilot tries to hold once airborne.
    pub cruise_pitch: f32,
    /// Stick deflection per degree of pitch error.
    pub pitch_gain: f32,
    /// Pitch error below which the stick is released.
    pub deadband: f32,
}

/// Frame loop settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed simulation step in seconds.
    pub fixed_dt: f64,
    /// Frame times above this are clamped.
    pub max_frame_time: f64,
    /// Total simulated seconds for a headless run.
    pub duration_secs: f64,
    /// Seconds between telemetry log lines.
    pub hud_interval_secs: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            rotation_speed: 25.0,
            min_roll: -30.0,
            max_roll: 30.0,
            min_pitch: -30.0,
            max_pitch: 20.0,
            positive_pitch_speed_modifier: 7.0,
            negative_pitch_speed_modifier: -15.0,
            banked_climb_divisor: 4.0,
            gravity_multiplier: 1.0,
            drag: 5.0,
            min_speed: 0.0,
            max_speed: 2000.0,
            min_climb_speed: -150.0,
            max_climb_speed: 150.0,
            stall_speed: 300.0,
            stall_distance: 1000.0,
            stall_pitch: 13.0,
            max_launch_power: 400.0,
            launch_power_reduction: 30.0,
            leg_power: 10.0,
            launch_duration: 7.5,
            camera: CameraRigConfig::default(),
        }
    }
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            target_socket_offset_z: 100.0,
            target_arm_length: 400.0,
            socket_offset_move_speed: 30.0,
            arm_length_move_speed: 90.0,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_coins: 5,
            main_menu_level: "MainMenu".to_string(),
            gameplay_level: "Game".to_string(),
            game_over_delay_secs: 7.5,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            start_altitude: 3000.0,
            coins: vec![
                [2000.0, 0.0, 2950.0],
                [4500.0, 0.0, 2850.0],
                [7000.0, 0.0, 2700.0],
                [9500.0, 0.0, 2500.0],
                [12000.0, 0.0, 2250.0],
            ],
            coin_pickup_radius: 150.0,
        }
    }
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            tap_interval_secs: 0.1,
            cruise_pitch: -4.0,
            pitch_gain: 0.2,
            deadband: 1.0,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_frame_time: 0.25,
            duration_secs: 90.0,
            hud_interval_secs: 1.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

fn check_range(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("minimum {min} exceeds maximum {max}"),
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be positive, got {value}"),
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

impl FlightConfig {
    /// Reject authoring errors the integrator cannot recover from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("flight.min_speed", self.min_speed, self.max_speed)?;
        check_range(
            "flight.min_climb_speed",
            self.min_climb_speed,
            self.max_climb_speed,
        )?;
        check_range("flight.min_roll", self.min_roll, self.max_roll)?;
        check_range("flight.min_pitch", self.min_pitch, self.max_pitch)?;
        check_positive("flight.launch_duration", f64::from(self.launch_duration))?;
        check_positive(
            "flight.banked_climb_divisor",
            f64::from(self.banked_climb_divisor),
        )?;
        check_non_negative("flight.max_launch_power", f64::from(self.max_launch_power))?;
        check_non_negative("flight.leg_power", f64::from(self.leg_power))?;
        check_non_negative("flight.stall_distance", f64::from(self.stall_distance))?;
        Ok(())
    }
}

impl Config {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flight.validate()?;
        check_non_negative(
            "session.game_over_delay_secs",
            f64::from(self.session.game_over_delay_secs),
        )?;
        if self.session.gameplay_level.is_empty() {
            return Err(ConfigError::Invalid {
                field: "session.gameplay_level",
                reason: "must not be empty".to_string(),
            });
        }
        check_positive("sim.fixed_dt", self.sim.fixed_dt)?;
        check_positive("sim.max_frame_time", self.sim.max_frame_time)?;
        check_positive("pilot.tap_interval_secs", f64::from(self.pilot.tap_interval_secs))?;
        Ok(())
    }

    /// Platform config directory for the game, e.g. `~/.config/glider`.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|base| base.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
