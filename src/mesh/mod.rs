//! Meshes: geometry of variable complexity, as opposed to the O(1) primitives.

pub mod trimesh;
