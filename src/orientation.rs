//! Intrinsic Y-X-Z Euler angles.
//!
//! This is the decomposition the placement code reasons in: yaw turns about the world
//! vertical, pitch tilts toward or away from it, and roll spins about the object's own
//! forward (+Z) axis. Composition order is `Ry(yaw) * Rx(pitch) * Rz(roll)`.

use nalgebra::{UnitQuaternion, Vector3};

/// Below this, `|sin(pitch)|` is far enough from 1 that yaw and roll are separable.
const GIMBAL_LOCK_THRESHOLD: f64 = 0.999_999_9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YawPitchRoll {
    /// Rotation about +Y, in radians.
    pub yaw: f64,
    /// Rotation about +X, in radians, within `[-π/2, π/2]`.
    pub pitch: f64,
    /// Rotation about +Z, in radians.
    pub roll: f64,
}

impl YawPitchRoll {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Decomposes a rotation.
    ///
    /// Near gimbal lock (pitch at ±π/2) yaw and roll describe the same motion; all of it
    /// is attributed to yaw and roll is reported as zero.
    pub fn from_quaternion(rotation: &UnitQuaternion<f64>) -> Self {
        let m = rotation.to_rotation_matrix().into_inner();

        let pitch = (-m[(1, 2)]).clamp(-1.0, 1.0).asin();

        if m[(1, 2)].abs() < GIMBAL_LOCK_THRESHOLD {
            Self {
                yaw: m[(0, 2)].atan2(m[(2, 2)]),
                pitch,
                roll: m[(1, 0)].atan2(m[(1, 1)]),
            }
        } else {
            Self {
                yaw: (-m[(2, 0)]).atan2(m[(0, 0)]),
                pitch,
                roll: 0.0,
            }
        }
    }

    pub fn to_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::y_axis(), self.yaw)
            * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * UnitQuaternion::from_axis_angle(&Vector3::z_axis(), self.roll)
    }

    /// The same orientation with the spin about the forward axis removed.
    pub fn without_roll(self) -> Self {
        Self { roll: 0.0, ..self }
    }
}
