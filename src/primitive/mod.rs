//! This module contains the primitive geometry types.
//!
//! We define primitive geometry as any geometry of O(1) complexity, such as points, rays,
//! triangles, and axis-aligned bounding boxes.
//!
//! Notably, we exclude notions like meshes, as they are of variable complexity.

pub mod aabb;
pub mod ray;
pub mod surface_point;
pub mod triangle;
pub mod vector_utils;
