//! Placing objects flush against a surface that a pointer ray hit.
//!
//! The placed object's local +Z is turned to face along the surface normal and pushed
//! a small distance off the surface, so that labels, markers and decals sit on walls
//! without z-fighting. The object is never rolled about that normal.
//!
//! On floor-like surfaces (normal pointing almost straight up) the object would lie
//! flat and its yaw would be arbitrary; there the yaw is taken from the pointer ray
//! instead, so the object faces back toward whoever pointed at it.

use crate::orientation::YawPitchRoll;
use crate::primitive::ray::Ray;
use crate::primitive::surface_point::{Intersection, TargetId};
use crate::primitive::vector_utils::shortest_arc;
use log::{debug, error};
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use thiserror::Error;

pub const DEFAULT_NORMAL_OFFSET: f64 = 0.05;
pub const DEFAULT_FALLBACK_PITCH_MARGIN: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("intersection with target {target:?} carries no surface normal")]
    MissingNormal { target: TargetId },
}

/// Tuning for [`compute_placement_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Distance to push the object off the surface along its normal. Must not be negative.
    pub normal_offset: f64,
    /// How close to straight-down-facing (pitch of −π/2) an orientation may get before
    /// its yaw is taken from the pointer ray instead, in radians.
    pub fallback_pitch_margin: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            normal_offset: DEFAULT_NORMAL_OFFSET,
            fallback_pitch_margin: DEFAULT_FALLBACK_PITCH_MARGIN,
        }
    }
}

impl PlacementConfig {
    pub fn with_normal_offset(normal_offset: f64) -> Self {
        Self {
            normal_offset,
            ..Self::default()
        }
    }
}

/// A world-space pose, laid out the way scene layers consume it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementTransform {
    pub position: [f64; 3],
    /// Unit quaternion in `x, y, z, w` order.
    pub rotation: [f64; 4],
}

impl PlacementTransform {
    pub fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>) -> Self {
        Self {
            position: [position.x, position.y, position.z],
            rotation: [rotation.i, rotation.j, rotation.k, rotation.w],
        }
    }

    pub fn position(&self) -> Point3<f64> {
        Point3::from(self.position)
    }

    pub fn rotation(&self) -> UnitQuaternion<f64> {
        let [x, y, z, w] = self.rotation;
        UnitQuaternion::new_normalize(nalgebra::Quaternion::new(w, x, y, z))
    }
}

/// Computes where to place an object hit by a ray with direction `ray_direction`.
///
/// Fails with [`PlacementError::MissingNormal`] if the intersection has no normal.
///
/// `normal_offset` must not be negative. This is only checked in debug builds; a release
/// build given a negative offset places the object behind the surface.
pub fn compute_placement(
    intersection: &Intersection,
    ray_direction: &Unit<Vector3<f64>>,
    normal_offset: f64,
) -> Result<PlacementTransform, PlacementError> {
    compute_placement_with(
        intersection,
        ray_direction,
        &PlacementConfig::with_normal_offset(normal_offset),
    )
}

/// Like [`compute_placement`], with the offset and fallback margin taken from `config`.
///
/// The same precondition applies: `config.normal_offset` must not be negative, which is
/// only checked in debug builds.
pub fn compute_placement_with(
    intersection: &Intersection,
    ray_direction: &Unit<Vector3<f64>>,
    config: &PlacementConfig,
) -> Result<PlacementTransform, PlacementError> {
    debug_assert!(
        config.normal_offset >= 0.0,
        "normal offset must not be negative, got {}",
        config.normal_offset
    );

    let surface = intersection.surface_point().map_err(|err| {
        error!("cannot place on {:?}: {}", intersection.target, err);
        err
    })?;

    let orientation = placement_orientation(
        &surface.normal,
        ray_direction,
        config.fallback_pitch_margin,
    );

    let position = surface.point + surface.normal.into_inner() * config.normal_offset;

    Ok(PlacementTransform::new(position, orientation.to_quaternion()))
}

/// The orientation step of the placement on its own.
///
/// The result always has a roll of exactly zero.
pub fn placement_orientation(
    normal: &Unit<Vector3<f64>>,
    ray_direction: &Unit<Vector3<f64>>,
    fallback_pitch_margin: f64,
) -> YawPitchRoll {
    let forward = Vector3::z_axis();

    let mut orientation =
        YawPitchRoll::from_quaternion(&shortest_arc(&forward, normal)).without_roll();

    if orientation.pitch < -FRAC_PI_2 + fallback_pitch_margin {
        let facing_back = shortest_arc(&forward, &-*ray_direction);
        let yaw = YawPitchRoll::from_quaternion(&facing_back).yaw;
        debug!(
            "normal {:?} faces up (pitch {:.4}); taking yaw {:.4} from the ray",
            normal.as_ref(),
            orientation.pitch,
            yaw
        );
        orientation.yaw = yaw;
    }

    orientation
}

/// Convenience for hosts that already hold the ray that produced the intersection.
pub fn place_on_hit(
    intersection: &Intersection,
    ray: &Ray,
    config: &PlacementConfig,
) -> Result<PlacementTransform, PlacementError> {
    compute_placement_with(intersection, &ray.dir, config)
}
