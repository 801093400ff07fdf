//! Placing objects against surfaces hit by pointer rays.
//!
//! A laser pointer or gaze ray is cast into the scene with a [`Raycaster`]; the resulting
//! [`Intersection`] is turned into a [`PlacementTransform`] by [`compute_placement`]: a
//! position slightly off the surface and an orientation whose +Z faces out of it.
//!
//! Everything here is plain synchronous math on `nalgebra` types. Nothing is retained
//! between calls.

pub mod intersection;
pub mod mesh;
pub mod orientation;
pub mod placement;
pub mod primitive;
pub mod raycast;

#[cfg(test)]
pub mod proptest;

// Re-export commonly used types
pub use mesh::trimesh::{FaceIndex, IndexTriangle, TriangleMesh, VertexIndex};
pub use orientation::YawPitchRoll;
pub use placement::{
    compute_placement, compute_placement_with, placement_orientation, PlacementConfig,
    PlacementError, PlacementTransform,
};
pub use primitive::aabb::Aabb;
pub use primitive::ray::Ray;
pub use primitive::surface_point::{Intersection, SurfacePoint, TargetId};
pub use primitive::triangle::Triangle;
pub use raycast::{place_along_ray, RaycastConfig, RaycastHit, Raycaster};
