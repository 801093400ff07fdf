use crate::placement::PlacementError;
use nalgebra::{Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// Identifies the object a ray hit. For hits produced by
/// [`Raycaster`](crate::raycast::Raycaster) this is the index of the target it was registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId(pub usize);

/// A point on a surface together with its outward unit normal.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfacePoint {
    pub point: Point3<f64>,
    pub normal: Unit<Vector3<f64>>,
}

/// Where a ray met an object.
///
/// Not every target can report a surface normal (sprites, points, text quads
/// without geometry), so `normal` is optional.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    /// The object that was hit.
    pub target: TargetId,
    /// The hit point in world space.
    pub point: Point3<f64>,
    /// The surface normal at `point`, if the target has one.
    pub normal: Option<Unit<Vector3<f64>>>,
}

impl Intersection {
    pub fn new(target: TargetId, point: Point3<f64>, normal: Option<Unit<Vector3<f64>>>) -> Self {
        Self {
            target,
            point,
            normal,
        }
    }

    /// The hit as a surface point, or `MissingNormal` if the target reported no normal.
    pub fn surface_point(&self) -> Result<SurfacePoint, PlacementError> {
        let normal = self.normal.ok_or(PlacementError::MissingNormal {
            target: self.target,
        })?;

        Ok(SurfacePoint {
            point: self.point,
            normal,
        })
    }
}
