//! Per-frame glider flight integration.
//!
//! Hand-tuned arcade model, not aerodynamics: launch power from alternating
//! foot taps becomes forward speed, pitch trades forward speed for climb,
//! low speed or a steep nose-up attitude triggers a scripted stall spin, and
//! any collision ends the flight.

use glam::Vec3;
use glider_config::FlightConfig;
use tracing::{debug, info, warn};

use crate::host::{CameraBoom, DestructibleHit, GliderBody, HostActor};
use crate::interp::{clamp_between, interp_constant_to, interp_to};
use crate::mode::{CrashCause, FlightMode, Foot};
use crate::rotator::Rotator;

/// Constant sink rate before `gravity_multiplier`.
pub const GRAVITY: f32 = 9.8;

/// Damage dealt to the destructible mesh on any crash.
pub const CRASH_DAMAGE: f32 = 10_000.0;

/// Radius of crash damage around the impact point.
pub const CRASH_DAMAGE_RADIUS: f32 = 5.0;

/// Ease rate of forward speed toward `forward - climb`.
const SPEED_EASE_RATE: f32 = 2.0;

/// Zero stick springs the attitude back at this multiple of the current angle.
const SELF_LEVEL_RATE: f32 = -2.0;

/// Pitch (degrees) separating the two climb bands.
const LEVEL_PITCH: f32 = 0.5;

/// Roll (degrees) beyond which climb speed is reduced.
const BANK_THRESHOLD: f32 = 0.5;

/// Attitude the stall spin eases toward, with per-axis rates.
const STALL_PITCH: (f32, f32) = (-90.0, 2.0);
const STALL_YAW: (f32, f32) = (-360.0, 5.0);
const STALL_ROLL: (f32, f32) = (320.0, 4.0);

/// Owns and advances the flight state of one glider.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    config: FlightConfig,
    mode: FlightMode,
    forward_speed: f32,
    climb_speed: f32,
    velocity: Vec3,
    /// Steering rates in degrees per second.
    target_rates: Rotator,
    launch_power: f32,
    launch_timer: f32,
    last_foot_down: Option<Foot>,
    stall_height: f32,
}

impl FlightIntegrator {
    /// Create a glider on the launch ramp with zero speed.
    ///
    /// An invalid config is logged but still flown; bounds are applied
    /// without panicking either way.
    pub fn new(config: FlightConfig) -> Self {
        if let Err(e) = config.validate() {
            warn!("Flight config failed validation: {e}");
        }
        Self {
            config,
            mode: FlightMode::Launching,
            forward_speed: 0.0,
            climb_speed: 0.0,
            velocity: Vec3::ZERO,
            target_rates: Rotator::ZERO,
            launch_power: 0.0,
            launch_timer: 0.0,
            last_foot_down: None,
            stall_height: 0.0,
        }
    }

    /// Advance the glider by `dt` seconds (`dt >= 0`).
    pub fn advance<H: HostActor>(&mut self, host: &mut H, dt: f32) {
        match self.mode {
            FlightMode::Crashed(_) => return,
            FlightMode::Launching => self.launch(dt),
            FlightMode::Flying { .. } => self.fly(host, dt),
        }

        host.add_local_offset(self.velocity);

        // Drag runs on every live tick, the launch run included.
        self.forward_speed = clamp_between(
            self.forward_speed - self.config.drag * dt,
            self.config.min_speed,
            self.config.max_speed,
        );
    }

    fn launch(&mut self, dt: f32) {
        self.launch_power = clamp_between(
            self.launch_power - dt * self.config.launch_power_reduction,
            0.0,
            self.config.max_launch_power,
        );
        self.forward_speed = self.launch_power;
        self.launch_timer += dt;

        if self.launch_timer >= self.config.launch_duration {
            self.launch_timer = 0.0;
            self.mode = FlightMode::TAKEOFF;
            info!(
                forward_speed = self.forward_speed,
                "Launch run complete, glider airborne"
            );
        }

        self.velocity = Vec3::new(self.forward_speed * dt, 0.0, 0.0);
    }

    fn fly<H: HostActor>(&mut self, host: &mut H, dt: f32) {
        let rotation_delta = self.target_rates * dt;

        self.move_camera(host.boom(), dt);

        if let FlightMode::Flying { grace: true, stalling } = self.mode {
            if self.forward_speed < self.config.stall_speed {
                warn!(
                    forward_speed = self.forward_speed,
                    stall_speed = self.config.stall_speed,
                    "Launch too slow to fly"
                );
                self.crash_with(host, CrashCause::FailedLaunch);
                let location = host.location();
                host.apply_damage(DestructibleHit {
                    amount: CRASH_DAMAGE,
                    location,
                    direction: Vec3::NEG_Z,
                    radius: CRASH_DAMAGE_RADIUS,
                });
            } else {
                self.mode = FlightMode::Flying {
                    grace: false,
                    stalling,
                };
            }
        }

        host.add_local_rotation(rotation_delta);

        let mut rotation = host.rotation();
        let altitude = host.location().z;
        self.adjust_if_stalling(&mut rotation, altitude, dt);
        host.set_rotation(rotation);

        let rotation = host.rotation();
        self.climb_speed = clamp_between(
            self.climb_speed_for(rotation),
            self.config.min_climb_speed,
            self.config.max_climb_speed,
        );

        let eased = interp_to(
            self.forward_speed,
            self.forward_speed - self.climb_speed,
            dt,
            SPEED_EASE_RATE,
        );
        self.forward_speed = clamp_between(eased, self.config.min_speed, self.config.max_speed);

        if self.forward_speed <= self.config.stall_speed {
            self.set_stalling(true);
            self.stall_height = host.location().z;
        }

        self.velocity = Vec3::new(
            self.forward_speed * dt,
            0.0,
            self.climb_speed * dt - GRAVITY * self.config.gravity_multiplier * dt,
        );
    }

    fn move_camera<B: CameraBoom>(&self, boom: &mut B, dt: f32) {
        let rig = &self.config.camera;
        let offset = interp_constant_to(
            boom.socket_offset_z(),
            rig.target_socket_offset_z,
            dt,
            rig.socket_offset_move_speed,
        );
        boom.set_socket_offset_z(offset);
        let length = interp_constant_to(
            boom.arm_length(),
            rig.target_arm_length,
            dt,
            rig.arm_length_move_speed,
        );
        boom.set_arm_length(length);
    }

    /// Spin toward the stall attitude while stalling; otherwise clamp the
    /// attitude, detect a nose-high stall, and keep the stall height fresh.
    fn adjust_if_stalling(&mut self, rotation: &mut Rotator, altitude: f32, dt: f32) {
        if self.mode.is_stalling() {
            rotation.pitch = interp_to(rotation.pitch, STALL_PITCH.0, dt, STALL_PITCH.1);
            rotation.yaw = interp_to(rotation.yaw, STALL_YAW.0, dt, STALL_YAW.1);
            rotation.roll = interp_to(rotation.roll, STALL_ROLL.0, dt, STALL_ROLL.1);
            if altitude <= self.stall_height - self.config.stall_distance {
                self.set_stalling(false);
            }
        } else {
            rotation.roll = clamp_between(rotation.roll, self.config.min_roll, self.config.max_roll);
            rotation.pitch =
                clamp_between(rotation.pitch, self.config.min_pitch, self.config.max_pitch);
            if rotation.pitch > self.config.stall_pitch {
                self.set_stalling(true);
            }
            self.stall_height = altitude;
        }
    }

    fn climb_speed_for(&self, rotation: Rotator) -> f32 {
        let pitch = rotation.pitch;
        let mut speed = self.forward_speed * pitch.to_radians().sin();

        if (self.config.negative_pitch_speed_modifier..LEVEL_PITCH).contains(&pitch) {
            speed /= 2.0;
        }
        if pitch > LEVEL_PITCH && pitch <= self.config.positive_pitch_speed_modifier {
            speed /= 2.0;
        }
        if rotation.roll.abs() > BANK_THRESHOLD {
            speed /= self.config.banked_climb_divisor;
        }
        speed
    }

    fn set_stalling(&mut self, stalling: bool) {
        if let FlightMode::Flying {
            grace,
            stalling: was,
        } = self.mode
        {
            if was != stalling {
                debug!(stalling, stall_height = self.stall_height, "Stall state changed");
            }
            self.mode = FlightMode::Flying { grace, stalling };
        }
    }

    /// Register a launch push-off.
    ///
    /// Only counts during the launch run, and only on the first press or a
    /// press with the opposite foot from the last one. Returns whether the
    /// press added power.
    pub fn register_foot_press(&mut self, foot: Foot) -> bool {
        if self.mode != FlightMode::Launching || self.last_foot_down == Some(foot) {
            return false;
        }
        self.launch_power =
            (self.launch_power + self.config.leg_power).min(self.config.max_launch_power);
        self.last_foot_down = Some(foot);
        debug!(?foot, launch_power = self.launch_power, "Foot press");
        true
    }

    /// Feed both steering axes at once. See [`set_axis_x`](Self::set_axis_x)
    /// and [`set_axis_y`](Self::set_axis_y).
    pub fn register_steering<H: HostActor>(&mut self, host: &H, axis_x: f32, axis_y: f32) {
        self.set_axis_x(host, axis_x);
        self.set_axis_y(host, axis_y);
    }

    /// Horizontal stick: banks and turns together. A centred stick rolls
    /// back toward wings-level instead.
    pub fn set_axis_x<H: HostActor>(&mut self, host: &H, axis: f32) {
        self.target_rates.roll = axis * self.config.rotation_speed;
        self.target_rates.yaw = axis * self.config.rotation_speed;

        if axis == 0.0 {
            self.target_rates.roll = host.rotation().roll * SELF_LEVEL_RATE;
        }
    }

    /// Vertical stick: pitches. A centred stick pitches back toward level.
    pub fn set_axis_y<H: HostActor>(&mut self, host: &H, axis: f32) {
        self.target_rates.pitch = axis * self.config.rotation_speed;

        if axis == 0.0 {
            self.target_rates.pitch = host.rotation().pitch * SELF_LEVEL_RATE;
        }
    }

    /// End the flight. Repeated calls are no-ops.
    pub fn crash<H: HostActor>(&mut self, host: &mut H) {
        self.crash_with(host, CrashCause::Requested);
    }

    fn crash_with<H: HostActor>(&mut self, host: &mut H, cause: CrashCause) {
        if self.mode.is_crashed() {
            return;
        }
        for body in GliderBody::ALL {
            host.set_simulate_physics(body, true);
        }
        self.mode = FlightMode::Crashed(cause);
        info!(
            ?cause,
            forward_speed = self.forward_speed,
            altitude = host.location().z,
            "Glider crashed"
        );
    }

    /// The actor hit something at `location` with surface `normal`.
    ///
    /// Crashes, fractures the destructible mesh at the impact point, and
    /// detaches the camera boom from the actor's rotation so the camera
    /// does not tumble with the wreck.
    pub fn on_hit<H: HostActor>(&mut self, host: &mut H, location: Vec3, normal: Vec3) {
        self.crash_with(host, CrashCause::Collision);
        host.apply_damage(DestructibleHit {
            amount: CRASH_DAMAGE,
            location,
            direction: normal,
            radius: CRASH_DAMAGE_RADIUS,
        });
        host.boom().set_inherit_rotation(false);
    }

    /// Current mode.
    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    /// Authored tunables.
    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Current forward speed.
    pub fn forward_speed(&self) -> f32 {
        self.forward_speed
    }

    /// Configured top forward speed.
    pub fn max_forward_speed(&self) -> f32 {
        self.config.max_speed
    }

    /// Climb speed from the last airborne tick.
    pub fn climb_speed(&self) -> f32 {
        self.climb_speed
    }

    /// Local-space offset applied on the last tick.
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Steering rates in degrees per second.
    pub fn target_rates(&self) -> Rotator {
        self.target_rates
    }

    /// Accumulated launch power.
    pub fn launch_power(&self) -> f32 {
        self.launch_power
    }

    /// Altitude snapshot a stall is measured against.
    pub fn stall_height(&self) -> f32 {
        self.stall_height
    }

    /// True once the launch run is over.
    pub fn is_launched(&self) -> bool {
        self.mode.is_launched()
    }

    /// True while in a stall.
    pub fn is_stalling(&self) -> bool {
        self.mode.is_stalling()
    }

    /// True once crashed.
    pub fn is_crashed(&self) -> bool {
        self.mode.is_crashed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematic::KinematicActor;

    const DT: f32 = 1.0 / 60.0;

    fn actor() -> KinematicActor {
        KinematicActor::at(Vec3::new(0.0, 0.0, 5000.0))
    }

    /// One-second launch run with a single full-power push.
    fn quick_launch_config() -> FlightConfig {
        FlightConfig {
            launch_duration: 1.0,
            leg_power: 400.0,
            ..FlightConfig::default()
        }
    }

    fn launched(config: FlightConfig, host: &mut KinematicActor) -> FlightIntegrator {
        let mut flight = FlightIntegrator::new(config);
        flight.register_foot_press(Foot::Left);
        // 0.25 is exact in binary, so four ticks land on 1.0 exactly.
        for _ in 0..4 {
            flight.advance(host, 0.25);
        }
        assert!(flight.is_launched());
        flight
    }

    #[test]
    fn test_starts_launching_at_rest() {
        let flight = FlightIntegrator::new(FlightConfig::default());
        assert_eq!(flight.mode(), FlightMode::Launching);
        assert!(!flight.is_launched());
        assert_eq!(flight.forward_speed(), 0.0);
        assert_eq!(flight.climb_speed(), 0.0);
        assert_eq!(flight.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_alternating_feet_add_power() {
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        assert!(flight.register_foot_press(Foot::Left));
        assert!(!flight.register_foot_press(Foot::Left));
        assert_eq!(flight.launch_power(), 10.0);
        assert!(flight.register_foot_press(Foot::Right));
        assert_eq!(flight.launch_power(), 20.0);
        assert!(!flight.register_foot_press(Foot::Right));
        assert!(flight.register_foot_press(Foot::Left));
        assert_eq!(flight.launch_power(), 30.0);
    }

    #[test]
    fn test_first_press_may_be_either_foot() {
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        assert!(flight.register_foot_press(Foot::Right));
        assert_eq!(flight.launch_power(), 10.0);
    }

    #[test]
    fn test_launch_power_capped() {
        let mut flight = FlightIntegrator::new(FlightConfig {
            leg_power: 150.0,
            ..FlightConfig::default()
        });
        for foot in [Foot::Left, Foot::Right, Foot::Left, Foot::Right] {
            flight.register_foot_press(foot);
        }
        assert_eq!(flight.launch_power(), 400.0);
    }

    #[test]
    fn test_launch_power_decays_and_drives_speed() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        for foot in [Foot::Left, Foot::Right, Foot::Left, Foot::Right] {
            flight.register_foot_press(foot);
        }
        flight.advance(&mut host, 0.5);
        // 40 - 30 * 0.5
        assert!((flight.launch_power() - 25.0).abs() < 1e-4);
        // Speed tracks power, then drag takes 5 * 0.5.
        assert!((flight.forward_speed() - 22.5).abs() < 1e-4);
        // Velocity is computed before drag and has no vertical component.
        assert!((flight.velocity().x - 12.5).abs() < 1e-4);
        assert_eq!(flight.velocity().z, 0.0);
        assert!((host.location.x - 12.5).abs() < 1e-3);
        assert!((host.location.z - 5000.0).abs() < 1e-3);
    }

    #[test]
    fn test_launch_power_never_negative() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        flight.register_foot_press(Foot::Left);
        for _ in 0..120 {
            flight.advance(&mut host, DT);
        }
        assert_eq!(flight.launch_power(), 0.0);
        assert_eq!(flight.forward_speed(), 0.0);
    }

    #[test]
    fn test_feet_ignored_after_launch() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        let power = flight.launch_power();
        assert!(!flight.register_foot_press(Foot::Right));
        assert_eq!(flight.launch_power(), power);
    }

    #[test]
    fn test_takeoff_exactly_at_launch_duration() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(quick_launch_config());
        flight.register_foot_press(Foot::Left);
        for _ in 0..3 {
            flight.advance(&mut host, 0.25);
            assert_eq!(flight.mode(), FlightMode::Launching);
        }
        flight.advance(&mut host, 0.25);
        assert_eq!(flight.mode(), FlightMode::TAKEOFF);

        // Grace clears on the next tick and launching never comes back.
        for _ in 0..30 {
            flight.advance(&mut host, DT);
            assert!(flight.is_launched());
            assert!(!matches!(
                flight.mode(),
                FlightMode::Launching | FlightMode::Flying { grace: true, .. }
            ));
        }
    }

    #[test]
    fn test_failed_launch_crashes_once() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(quick_launch_config());
        // No foot presses: the glider leaves the ramp at zero speed.
        for _ in 0..4 {
            flight.advance(&mut host, 0.25);
        }
        assert_eq!(flight.mode(), FlightMode::TAKEOFF);

        flight.advance(&mut host, DT);
        assert_eq!(flight.mode(), FlightMode::Crashed(CrashCause::FailedLaunch));
        assert_eq!(host.damage.len(), 1);
        let hit = host.damage[0];
        assert_eq!(hit.amount, CRASH_DAMAGE);
        assert_eq!(hit.direction, Vec3::NEG_Z);
        assert_eq!(hit.radius, CRASH_DAMAGE_RADIUS);
        for body in GliderBody::ALL {
            assert!(host.is_simulating(body));
        }

        flight.advance(&mut host, DT);
        assert_eq!(host.damage.len(), 1);
    }

    #[test]
    fn test_failed_launch_check_is_one_shot() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        // First airborne tick is fast enough and consumes the grace tick.
        flight.advance(&mut host, DT);
        assert!(!flight.is_crashed());

        // Even once speed falls under the stall threshold it is a stall, not a crash.
        for _ in 0..600 {
            flight.set_axis_y(&host, 1.0);
            flight.advance(&mut host, DT);
        }
        assert!(!flight.is_crashed());
        assert!(host.damage.is_empty());
    }

    #[test]
    fn test_crash_is_terminal() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        flight.crash(&mut host);
        assert_eq!(flight.mode(), FlightMode::Crashed(CrashCause::Requested));

        let location = host.location;
        let speed = flight.forward_speed();
        for _ in 0..120 {
            flight.register_foot_press(Foot::Left);
            flight.register_steering(&host, 1.0, -1.0);
            flight.advance(&mut host, DT);
            assert!(flight.is_crashed());
        }
        assert_eq!(host.location, location);
        assert_eq!(flight.forward_speed(), speed);
        assert!(!flight.is_stalling());
    }

    #[test]
    fn test_crash_is_idempotent() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        flight.crash(&mut host);
        host.simulated.clear();
        flight.crash(&mut host);
        assert!(host.simulated.is_empty());
        assert_eq!(flight.mode(), FlightMode::Crashed(CrashCause::Requested));
    }

    #[test]
    fn test_hit_crashes_and_detaches_camera() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        let point = Vec3::new(120.0, 4.0, 30.0);
        let normal = Vec3::new(-1.0, 0.0, 0.0);
        flight.on_hit(&mut host, point, normal);

        assert_eq!(flight.mode(), FlightMode::Crashed(CrashCause::Collision));
        assert_eq!(
            host.damage,
            vec![DestructibleHit {
                amount: CRASH_DAMAGE,
                location: point,
                direction: normal,
                radius: CRASH_DAMAGE_RADIUS,
            }]
        );
        assert!(!host.boom.inherit_rotation);
        assert!(host.is_simulating(GliderBody::Destructible));
    }

    #[test]
    fn test_every_hit_damages_but_cause_is_kept() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        flight.on_hit(&mut host, Vec3::ZERO, Vec3::Z);
        flight.on_hit(&mut host, Vec3::X, Vec3::Z);
        assert_eq!(host.damage.len(), 2);
        assert_eq!(flight.mode(), FlightMode::Crashed(CrashCause::Collision));
    }

    #[test]
    fn test_zero_axis_self_levels() {
        let mut host = actor();
        host.set_rotation(Rotator::new(10.0, 45.0, -8.0));
        let mut flight = FlightIntegrator::new(FlightConfig::default());

        flight.register_steering(&host, 0.0, 0.0);
        let rates = flight.target_rates();
        assert!((rates.pitch - -20.0).abs() < 1e-4);
        assert!((rates.roll - 16.0).abs() < 1e-4);
        assert_eq!(rates.yaw, 0.0);
    }

    #[test]
    fn test_full_stick_rates() {
        let host = actor();
        let mut flight = FlightIntegrator::new(FlightConfig::default());
        flight.register_steering(&host, 1.0, -0.5);
        let rates = flight.target_rates();
        assert_eq!(rates.roll, 25.0);
        assert_eq!(rates.yaw, 25.0);
        assert_eq!(rates.pitch, -12.5);
    }

    #[test]
    fn test_camera_boom_eases_once_airborne() {
        let mut host = actor();
        let mut flight = FlightIntegrator::new(quick_launch_config());
        flight.register_foot_press(Foot::Left);
        flight.advance(&mut host, 0.25);
        assert_eq!(host.boom.socket_offset_z, 0.0);
        assert_eq!(host.boom.arm_length, 200.0);

        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, 0.5);
        assert!((host.boom.socket_offset_z - 15.0).abs() < 1e-4);
        assert!((host.boom.arm_length - 245.0).abs() < 1e-4);
    }

    #[test]
    fn test_attitude_clamped_when_not_stalling() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        // Hard left bank and dive.
        for _ in 0..240 {
            flight.register_steering(&host, -1.0, -1.0);
            flight.advance(&mut host, DT);
            let rotation = host.rotation();
            assert!(rotation.roll >= -30.0 - 1e-3);
            assert!(rotation.pitch >= -30.0 - 1e-3);
        }
        assert!(!flight.is_stalling());
    }

    #[test]
    fn test_level_climb_band_halves_climb_speed() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        host.set_rotation(Rotator::new(5.0, 0.0, 0.0));
        flight.register_steering(&host, 0.0, 0.0);
        // Zero dt: attitude and speed stay put so the climb formula is exact.
        let speed = flight.forward_speed();
        flight.advance(&mut host, 0.0);
        let expected = speed * 5.0_f32.to_radians().sin() / 2.0;
        assert!((flight.climb_speed() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_bank_reduces_climb_speed_further() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        host.set_rotation(Rotator::new(-10.0, 0.0, 10.0));
        let speed = flight.forward_speed();
        flight.advance(&mut host, 0.0);
        // Negative band halves, bank quarters on top.
        let expected = speed * (-10.0_f32).to_radians().sin() / 8.0;
        assert!((flight.climb_speed() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_bank_quarters_climb_speed_outside_band() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        host.set_rotation(Rotator::new(-20.0, 0.0, 10.0));
        let speed = flight.forward_speed();
        flight.advance(&mut host, 0.0);
        let raw = speed * (-20.0_f32).to_radians().sin();
        assert!((flight.climb_speed() - raw / 4.0).abs() < 1e-3);
    }

    #[test]
    fn test_inverted_config_bounds_do_not_panic() {
        let config = FlightConfig {
            min_speed: 500.0,
            max_speed: 100.0,
            min_climb_speed: 150.0,
            max_climb_speed: -150.0,
            min_roll: 30.0,
            max_roll: -30.0,
            ..quick_launch_config()
        };
        let mut host = actor();
        let mut flight = FlightIntegrator::new(config);
        flight.register_foot_press(Foot::Left);
        for _ in 0..120 {
            flight.advance(&mut host, DT);
        }
        assert!(flight.forward_speed().is_finite());
        assert!(flight.climb_speed().is_finite());
    }

    #[test]
    fn test_steep_dive_outside_band_is_not_halved() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        host.set_rotation(Rotator::new(-20.0, 0.0, 0.0));
        let speed = flight.forward_speed();
        flight.advance(&mut host, 0.0);
        let expected = (speed * (-20.0_f32).to_radians().sin()).max(-150.0);
        assert!((flight.climb_speed() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_diving_trades_altitude_for_speed() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        let start_speed = flight.forward_speed();
        let start_altitude = host.location.z;
        for _ in 0..120 {
            flight.set_axis_y(&host, -1.0);
            flight.set_axis_x(&host, 0.0);
            flight.advance(&mut host, DT);
        }
        assert!(flight.forward_speed() > start_speed);
        assert!(host.location.z < start_altitude);
        assert!(flight.velocity().z < 0.0);
    }

    #[test]
    fn test_nose_high_enters_stall() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        for _ in 0..120 {
            flight.set_axis_y(&host, 1.0);
            flight.advance(&mut host, DT);
            if flight.is_stalling() {
                break;
            }
        }
        assert!(flight.is_stalling());
    }

    #[test]
    fn test_low_speed_enters_stall_and_snapshots_altitude() {
        let mut host = actor();
        let mut flight = launched(
            FlightConfig {
                stall_speed: 360.0,
                ..quick_launch_config()
            },
            &mut host,
        );
        // Launch ends near 370; drag pulls it under 360 within a few seconds.
        flight.advance(&mut host, DT);
        assert!(!flight.is_crashed());
        let mut entered = false;
        for _ in 0..600 {
            flight.register_steering(&host, 0.0, 0.0);
            flight.advance(&mut host, DT);
            if flight.forward_speed() <= 360.0 && flight.is_stalling() {
                entered = true;
                // Snapshot is taken before this tick's offset moves the actor.
                assert!((flight.stall_height() - host.location.z).abs() < 1.0);
                break;
            }
        }
        assert!(entered);
    }

    #[test]
    fn test_stall_clears_only_after_stall_distance() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);

        let mut stalled = false;
        let mut recovered = false;
        for _ in 0..(60 * 60) {
            let axis_y = if stalled { 0.0 } else { 1.0 };
            flight.register_steering(&host, 0.0, axis_y);

            let was_stalling = flight.is_stalling();
            let snapshot = flight.stall_height();
            let altitude = host.location.z;
            flight.advance(&mut host, DT);

            if flight.is_stalling() {
                stalled = true;
            }
            if was_stalling && !flight.is_stalling() {
                assert!(
                    altitude <= snapshot - flight.config().stall_distance,
                    "stall cleared at {altitude} with snapshot {snapshot}"
                );
                recovered = true;
                break;
            }
        }
        assert!(stalled, "glider never stalled");
        assert!(recovered, "glider never recovered");
    }

    #[test]
    fn test_speeds_stay_in_bounds_for_any_dt() {
        let config = FlightConfig::default();
        for dt in [0.0, 0.001, DT, 0.1, 0.5, 2.0] {
            let mut host = actor();
            let mut flight = FlightIntegrator::new(config.clone());
            for i in 0..400 {
                if i % 2 == 0 {
                    flight.register_foot_press(Foot::Left);
                } else {
                    flight.register_foot_press(Foot::Right);
                }
                let phase = i as f32 * 0.05;
                flight.register_steering(&host, phase.sin(), (phase * 0.7).cos());
                flight.advance(&mut host, dt);

                let speed = flight.forward_speed();
                let climb = flight.climb_speed();
                assert!(
                    (config.min_speed..=config.max_speed).contains(&speed),
                    "dt={dt} tick={i} speed={speed}"
                );
                assert!(
                    (config.min_climb_speed..=config.max_climb_speed).contains(&climb),
                    "dt={dt} tick={i} climb={climb}"
                );
                assert!((0.0..=config.max_launch_power).contains(&flight.launch_power()));
            }
        }
    }

    #[test]
    fn test_gravity_sink_when_level() {
        let mut host = actor();
        let mut flight = launched(quick_launch_config(), &mut host);
        flight.advance(&mut host, DT);
        host.set_rotation(Rotator::ZERO);
        flight.register_steering(&host, 0.0, 0.0);
        flight.advance(&mut host, 0.5);
        // Level pitch gives zero climb, leaving only the gravity sink.
        assert!((flight.velocity().z - -GRAVITY * 0.5).abs() < 1e-3);
    }
}
