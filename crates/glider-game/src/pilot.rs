//! Scripted pilot that stands in for player input in the headless host.

use glider_config::PilotConfig;
use glider_flight::{FlightIntegrator, FlightMode, Foot, HostActor};

/// Taps alternating feet until takeoff, then holds a cruise pitch.
#[derive(Debug, Clone)]
pub struct Pilot {
    config: PilotConfig,
    next_foot: Foot,
    tap_timer: f32,
    taps: u32,
}

impl Pilot {
    pub fn new(config: PilotConfig) -> Self {
        Self {
            config,
            next_foot: Foot::Left,
            tap_timer: 0.0,
            taps: 0,
        }
    }

    /// Feed this tick's input into the integrator. Call before `advance`.
    pub fn drive<H: HostActor>(&mut self, flight: &mut FlightIntegrator, host: &H, dt: f32) {
        match flight.mode() {
            FlightMode::Launching => self.run_up(flight, dt),
            FlightMode::Flying { .. } => {
                let axis_y = self.pitch_axis(host.rotation().pitch);
                flight.register_steering(host, 0.0, axis_y);
            }
            FlightMode::Crashed(_) => {}
        }
    }

    /// Foot presses issued so far.
    pub fn taps(&self) -> u32 {
        self.taps
    }

    fn run_up(&mut self, flight: &mut FlightIntegrator, dt: f32) {
        self.tap_timer -= dt;
        if self.tap_timer > 0.0 {
            return;
        }
        self.tap_timer = self.config.tap_interval_secs;
        if flight.register_foot_press(self.next_foot) {
            self.taps += 1;
        }
        self.next_foot = match self.next_foot {
            Foot::Left => Foot::Right,
            Foot::Right => Foot::Left,
        };
    }

    /// Proportional stick input toward the cruise pitch; zero inside the deadband.
    fn pitch_axis(&self, pitch: f32) -> f32 {
        let error = self.config.cruise_pitch - pitch;
        if error.abs() <= self.config.deadband {
            0.0
        } else {
            (error * self.config.pitch_gain).clamp(-1.0, 1.0)
        }
    }
}
