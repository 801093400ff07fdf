//! The pointer raycaster: finds what a laser pointer or gaze ray is touching and
//! hands the hit to the placement code.

use crate::intersection::{ray_aabb_intersection, ray_triangle_intersection, RayTriangleIntersection};
use crate::mesh::trimesh::{FaceIndex, TriangleMesh};
use crate::placement::{place_on_hit, PlacementConfig, PlacementError, PlacementTransform};
use crate::primitive::aabb::Aabb;
use crate::primitive::ray::Ray;
use crate::primitive::surface_point::{Intersection, TargetId};
use log::trace;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Padding around target bounds, so that flat meshes still have a box a ray can enter.
const BOUNDS_PADDING: f64 = 1.0e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaycastConfig {
    /// Hits closer than this are ignored.
    pub near: f64,
    /// Hits further than this are ignored.
    pub far: f64,
    /// Only report faces seen from the front.
    pub cull_back_faces: bool,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            near: 0.0,
            far: 1000.0,
            cull_back_faces: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    /// The hit, carrying the winding normal of the face that was hit.
    pub intersection: Intersection,
    /// Distance from the ray origin.
    pub distance: f64,
    pub face: FaceIndex,
}

#[derive(Debug, Clone)]
struct Target {
    mesh: TriangleMesh,
    bounds: Aabb,
}

#[derive(Debug, Clone, Default)]
pub struct Raycaster {
    config: RaycastConfig,
    targets: Vec<Target>,
}

impl Raycaster {
    pub fn new(config: RaycastConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    /// Registers a mesh, in world coordinates, as something rays can hit.
    pub fn add_target(&mut self, mesh: TriangleMesh) -> TargetId {
        let bounds = mesh.aabb().inflated(BOUNDS_PADDING);
        self.targets.push(Target { mesh, bounds });
        TargetId(self.targets.len() - 1)
    }

    pub fn target(&self, id: TargetId) -> Option<&TriangleMesh> {
        self.targets.get(id.0).map(|target| &target.mesh)
    }

    /// Every target the ray hits within range, nearest first.
    ///
    /// Each target is reported once, at its nearest face.
    pub fn cast_all(&self, ray: &Ray) -> Vec<RaycastHit> {
        let mut hits: Vec<RaycastHit> = self
            .targets
            .iter()
            .enumerate()
            .filter(|(_, target)| self.bounds_in_range(ray, &target.bounds))
            .filter_map(|(i, target)| self.nearest_face_hit(ray, TargetId(i), &target.mesh))
            .collect();

        hits.sort_by_key(|hit| OrderedFloat(hit.distance));

        trace!(
            "ray from {:?} hit {} of {} targets",
            ray.origin,
            hits.len(),
            self.targets.len()
        );

        hits
    }

    /// The nearest hit within range, if any.
    pub fn cast(&self, ray: &Ray) -> Option<RaycastHit> {
        self.cast_all(ray).into_iter().next()
    }

    fn bounds_in_range(&self, ray: &Ray, bounds: &Aabb) -> bool {
        match ray_aabb_intersection(ray, bounds) {
            Some([enter, exit]) => enter <= self.config.far && exit >= self.config.near,
            None => false,
        }
    }

    fn nearest_face_hit(&self, ray: &Ray, target: TargetId, mesh: &TriangleMesh) -> Option<RaycastHit> {
        let (face, triangle, t) = mesh
            .triangles()
            .filter_map(|(face, triangle)| match ray_triangle_intersection(ray, &triangle) {
                RayTriangleIntersection::Intersection { t, front_face, .. }
                    if front_face || !self.config.cull_back_faces =>
                {
                    Some((face, triangle, t))
                }
                _ => None,
            })
            .filter(|(_, _, t)| (self.config.near..=self.config.far).contains(t))
            .min_by_key(|(_, _, t)| OrderedFloat(*t))?;

        Some(RaycastHit {
            intersection: Intersection::new(target, ray.at(t), Some(triangle.unit_normal())),
            distance: t,
            face,
        })
    }
}

/// Casts `ray` and places an object on whatever it hits first.
///
/// Returns `Ok(None)` if the ray hits nothing.
pub fn place_along_ray(
    raycaster: &Raycaster,
    ray: &Ray,
    config: &PlacementConfig,
) -> Result<Option<PlacementTransform>, PlacementError> {
    match raycaster.cast(ray) {
        Some(hit) => place_on_hit(&hit.intersection, ray, config).map(Some),
        None => Ok(None),
    }
}
