//! Flight telemetry line written to the log while the headless session runs.

use glider_flight::{FlightIntegrator, HostActor};
use glider_session::GameSession;

/// HUD telemetry values sampled from the flight and session state.
#[derive(Debug, Clone, PartialEq)]
pub struct HudState {
    /// Forward speed in world units per second.
    pub forward_speed: f32,
    /// Climb speed; negative while sinking.
    pub climb_speed: f32,
    /// Height above the ground plane, never negative.
    pub altitude: f32,
    /// Short flight mode label.
    pub mode: &'static str,
    pub coins_collected: u32,
    pub total_coins: u32,
}

impl HudState {
    /// Sample the current telemetry.
    pub fn sample<H: HostActor>(
        flight: &FlightIntegrator,
        session: &GameSession,
        host: &H,
        ground_height: f32,
    ) -> Self {
        Self {
            forward_speed: flight.forward_speed(),
            climb_speed: flight.climb_speed(),
            altitude: (host.location().z - ground_height).max(0.0),
            mode: flight.mode().label(),
            coins_collected: session.coins_collected(),
            total_coins: session.total_coins(),
        }
    }
}

/// Format HUD values as a compact single line.
///
/// Example: `SPD: 1,234 | CLB: -42.5 | ALT: 2,950 | MODE: FLY | COINS: 1/5`
pub fn format_hud(hud: &HudState) -> String {
    format!(
        "SPD: {} | CLB: {:.1} | ALT: {} | MODE: {} | COINS: {}/{}",
        group_thousands(hud.forward_speed),
        hud.climb_speed,
        group_thousands(hud.altitude),
        hud.mode,
        hud.coins_collected,
        hud.total_coins,
    )
}

/// Round to a whole number and insert comma thousands separators,
/// keeping the sign.
fn group_thousands(value: f32) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        n => n,
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    grouped.push_str(&digits[..lead]);
    for start in (lead..digits.len()).step_by(3) {
        grouped.push(',');
        grouped.push_str(&digits[start..start + 3]);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use glider_config::{FlightConfig, SessionConfig};
    use glider_flight::KinematicActor;

    fn hud(forward_speed: f32, climb_speed: f32, altitude: f32) -> HudState {
        HudState {
            forward_speed,
            climb_speed,
            altitude,
            mode: "FLY",
            coins_collected: 2,
            total_coins: 5,
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(999.6), "1,000");
        assert_eq!(group_thousands(123_456.0), "123,456");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_group_thousands_keeps_sign() {
        assert_eq!(group_thousands(-42.0), "-42");
        assert_eq!(group_thousands(-1_234.4), "-1,234");
        assert_eq!(group_thousands(-0.2), "0");
    }

    #[test]
    fn test_format_hud() {
        let line = format_hud(&hud(1234.4, -42.54, 2950.0));
        assert_eq!(line, "SPD: 1,234 | CLB: -42.5 | ALT: 2,950 | MODE: FLY | COINS: 2/5");
    }

    #[test]
    fn test_sample_before_launch() {
        let flight = FlightIntegrator::new(FlightConfig::default());
        let session = GameSession::new(SessionConfig::default());
        let actor = KinematicActor::at(Vec3::new(0.0, 0.0, 3000.0));
        let state = HudState::sample(&flight, &session, &actor, 100.0);
        assert_eq!(state.mode, "LAUNCH");
        assert_eq!(state.forward_speed, 0.0);
        assert_eq!(state.altitude, 2900.0);
        assert_eq!(state.total_coins, 5);
    }

    #[test]
    fn test_altitude_clamped_below_ground() {
        let flight = FlightIntegrator::new(FlightConfig::default());
        let session = GameSession::new(SessionConfig::default());
        let actor = KinematicActor::at(Vec3::new(0.0, 0.0, -20.0));
        let state = HudState::sample(&flight, &session, &actor, 0.0);
        assert_eq!(state.altitude, 0.0);
    }
}
