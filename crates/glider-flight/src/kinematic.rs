//! Engine-free glider actor.
//!
//! Integrates local offsets against its own rotation and records every
//! damage and physics request, so a headless host or a test can drive the
//! flight core and inspect what it asked the engine to do.

use glam::Vec3;

use crate::host::{CameraBoom, DestructibleHit, GliderBody, HostActor};
use crate::rotator::Rotator;

/// Camera boom state without a camera.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBoom {
    /// Vertical socket offset.
    pub socket_offset_z: f32,
    /// Arm length.
    pub arm_length: f32,
    /// Whether the boom follows actor rotation.
    pub inherit_rotation: bool,
}

impl Default for KinematicBoom {
    fn default() -> Self {
        Self {
            socket_offset_z: 0.0,
            arm_length: 200.0,
            inherit_rotation: true,
        }
    }
}

impl CameraBoom for KinematicBoom {
    fn socket_offset_z(&self) -> f32 {
        self.socket_offset_z
    }

    fn set_socket_offset_z(&mut self, offset: f32) {
        self.socket_offset_z = offset;
    }

    fn arm_length(&self) -> f32 {
        self.arm_length
    }

    fn set_arm_length(&mut self, length: f32) {
        self.arm_length = length;
    }

    fn set_inherit_rotation(&mut self, inherit: bool) {
        self.inherit_rotation = inherit;
    }
}

/// Glider actor with a plain transform.
///
/// Rotation is stored normalized to `(-180, 180]` per axis, matching what an
/// engine reports back from its transform.
#[derive(Debug, Clone, Default)]
pub struct KinematicActor {
    /// World-space location; `z` is altitude.
    pub location: Vec3,
    rotation: Rotator,
    /// Camera boom.
    pub boom: KinematicBoom,
    /// Every damage request, in order.
    pub damage: Vec<DestructibleHit>,
    /// Bodies with physics simulation enabled.
    pub simulated: Vec<GliderBody>,
}

impl KinematicActor {
    /// Place an actor at `location` facing +X.
    pub fn at(location: Vec3) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    /// True if physics was enabled on `body`.
    pub fn is_simulating(&self, body: GliderBody) -> bool {
        self.simulated.contains(&body)
    }
}

impl HostActor for KinematicActor {
    type Boom = KinematicBoom;

    fn location(&self) -> Vec3 {
        self.location
    }

    fn rotation(&self) -> Rotator {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Rotator) {
        self.rotation = rotation.normalized();
    }

    // Per-axis sum instead of quaternion composition; the glider never
    // leaves the pitch range where the two differ noticeably.
    fn add_local_rotation(&mut self, delta: Rotator) {
        self.rotation = (self.rotation + delta).normalized();
    }

    fn add_local_offset(&mut self, offset: Vec3) {
        self.location += self.rotation.to_quat() * offset;
    }

    fn apply_damage(&mut self, hit: DestructibleHit) {
        self.damage.push(hit);
    }

    fn set_simulate_physics(&mut self, body: GliderBody, enabled: bool) {
        self.simulated.retain(|b| *b != body);
        if enabled {
            self.simulated.push(body);
        }
    }

    fn boom(&mut self) -> &mut KinematicBoom {
        &mut self.boom
    }
}
