//! Flight mode state machine.

/// Which foot pushed off last during the launch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Foot {
    /// Left foot.
    Left,
    /// Right foot.
    Right,
}

/// Why the glider crashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Too slow on the first airborne tick.
    FailedLaunch,
    /// The actor hit something.
    Collision,
    /// The host asked for a crash directly.
    Requested,
}

/// Mode of the glider.
///
/// Launching → Flying → Crashed, with Crashed reachable from any mode and
/// never left. Stalling only exists while flying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    /// Building up launch power on the ground.
    Launching,
    /// Airborne.
    Flying {
        /// Set for the first airborne tick, which checks for a failed launch.
        grace: bool,
        /// Scripted spin until enough altitude is lost.
        stalling: bool,
    },
    /// Terminal; the host's physics owns the wreck.
    Crashed(CrashCause),
}

impl FlightMode {
    /// Mode entered when the launch run ends.
    pub const TAKEOFF: FlightMode = FlightMode::Flying {
        grace: true,
        stalling: false,
    };

    /// True once the launch run has finished, including after a crash.
    pub fn is_launched(self) -> bool {
        !matches!(self, FlightMode::Launching)
    }

    /// True while flying in a stall.
    pub fn is_stalling(self) -> bool {
        matches!(self, FlightMode::Flying { stalling: true, .. })
    }

    /// True once crashed.
    pub fn is_crashed(self) -> bool {
        matches!(self, FlightMode::Crashed(_))
    }

    /// Short label for telemetry.
    pub fn label(self) -> &'static str {
        match self {
            FlightMode::Launching => "LAUNCH",
            FlightMode::Flying { stalling: true, .. } => "STALL",
            FlightMode::Flying { .. } => "FLY",
            FlightMode::Crashed(_) => "CRASH",
        }
    }
}
