//! Host engine collaborators.
//!
//! The flight core never owns a transform or a physics body. It reads and
//! mutates them through these traits, which the host implements once per
//! glider actor.

use glam::Vec3;

use crate::rotator::Rotator;

/// Physics bodies that make up a glider actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GliderBody {
    /// Collision mesh of the glider frame.
    GliderMesh,
    /// Skeletal mesh of the pilot.
    PilotMesh,
    /// Breakable mesh that fractures on impact.
    Destructible,
}

impl GliderBody {
    /// Every body, in the order physics is enabled on crash.
    pub const ALL: [GliderBody; 3] = [
        GliderBody::GliderMesh,
        GliderBody::PilotMesh,
        GliderBody::Destructible,
    ];
}

/// Damage applied to the destructible mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DestructibleHit {
    /// Damage amount.
    pub amount: f32,
    /// World-space point of impact.
    pub location: Vec3,
    /// Impulse direction.
    pub direction: Vec3,
    /// Radius around `location` that receives damage.
    pub radius: f32,
}

/// Transform and physics access for the glider actor.
///
/// Rotations are in degrees; offsets are in actor-local space with +X
/// forward and +Z up. Altitude is `location().z`.
pub trait HostActor {
    /// Camera boom attached to the pilot.
    type Boom: CameraBoom;

    /// World-space actor location.
    fn location(&self) -> Vec3;

    /// Current actor rotation as the engine reports it.
    fn rotation(&self) -> Rotator;

    /// Overwrite the actor rotation.
    fn set_rotation(&mut self, rotation: Rotator);

    /// Compose a rotation delta in actor-local space.
    fn add_local_rotation(&mut self, delta: Rotator);

    /// Move the actor by an offset in actor-local space.
    fn add_local_offset(&mut self, offset: Vec3);

    /// Damage the destructible mesh.
    fn apply_damage(&mut self, hit: DestructibleHit);

    /// Toggle rigid-body simulation on one of the glider's bodies.
    fn set_simulate_physics(&mut self, body: GliderBody, enabled: bool);

    /// Mutable access to the camera boom.
    fn boom(&mut self) -> &mut Self::Boom;
}

/// Spring-arm style camera boom.
pub trait CameraBoom {
    /// Vertical offset of the camera socket.
    fn socket_offset_z(&self) -> f32;

    /// Set the vertical socket offset.
    fn set_socket_offset_z(&mut self, offset: f32);

    /// Current arm length.
    fn arm_length(&self) -> f32;

    /// Set the arm length.
    fn set_arm_length(&mut self, length: f32);

    /// Whether the boom follows the actor's pitch, roll, and yaw.
    fn set_inherit_rotation(&mut self, inherit: bool);
}
