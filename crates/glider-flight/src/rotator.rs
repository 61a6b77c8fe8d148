//! Euler rotation in degrees with pitch/yaw/roll axes.

use std::ops::{Add, AddAssign, Mul};

use glam::{Quat, Vec3};

/// Rotation expressed as pitch, yaw, and roll in degrees.
///
/// Positive pitch raises the nose, positive yaw turns toward +Y, positive
/// roll banks right. Axes are independent so each can be eased or clamped
/// on its own, which the stall animation relies on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotator {
    /// Nose up/down in degrees.
    pub pitch: f32,
    /// Heading in degrees.
    pub yaw: f32,
    /// Bank in degrees.
    pub roll: f32,
}

impl Rotator {
    /// No rotation.
    pub const ZERO: Rotator = Rotator {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    /// Create a rotator from pitch, yaw, and roll in degrees.
    pub const fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Wrap every axis into `(-180, 180]`.
    pub fn normalized(self) -> Self {
        Self {
            pitch: normalize_axis(self.pitch),
            yaw: normalize_axis(self.yaw),
            roll: normalize_axis(self.roll),
        }
    }

    /// Quaternion for a Z-up, X-forward frame.
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_z(self.yaw.to_radians())
            * Quat::from_rotation_y(-self.pitch.to_radians())
            * Quat::from_rotation_x(self.roll.to_radians())
    }

    /// World-space forward direction.
    pub fn forward(self) -> Vec3 {
        self.to_quat() * Vec3::X
    }
}

/// Wrap a single angle into `(-180, 180]`.
pub fn normalize_axis(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

impl Add for Rotator {
    type Output = Rotator;

    fn add(self, rhs: Rotator) -> Rotator {
        Rotator::new(self.pitch + rhs.pitch, self.yaw + rhs.yaw, self.roll + rhs.roll)
    }
}

impl AddAssign for Rotator {
    fn add_assign(&mut self, rhs: Rotator) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Rotator {
    type Output = Rotator;

    fn mul(self, rhs: f32) -> Rotator {
        Rotator::new(self.pitch * rhs, self.yaw * rhs, self.roll * rhs)
    }
}
