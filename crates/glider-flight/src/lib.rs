//! Glider flight core: launch run, steering, climb/sink, stall recovery, and crash.
//!
//! [`FlightIntegrator`] owns the glider's kinematic and mode state and is
//! advanced once per frame. Everything it needs from the host engine (actor
//! transform, destructible mesh, physics bodies, camera boom) goes through
//! the [`HostActor`] and [`CameraBoom`] traits; [`KinematicActor`] is a
//! self-contained implementation for headless runs and tests.

pub mod host;
pub mod integrator;
pub mod interp;
pub mod kinematic;
pub mod mode;
pub mod rotator;

pub use host::{CameraBoom, DestructibleHit, GliderBody, HostActor};
pub use integrator::{CRASH_DAMAGE, CRASH_DAMAGE_RADIUS, FlightIntegrator, GRAVITY};
pub use interp::{clamp_between, interp_constant_to, interp_to};
pub use kinematic::{KinematicActor, KinematicBoom};
pub use mode::{CrashCause, FlightMode, Foot};
pub use rotator::Rotator;
