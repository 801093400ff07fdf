use crate::mesh::trimesh::{IndexTriangle, TriangleMesh, VertexIndex};
use crate::primitive::triangle::Triangle;
use nalgebra::{Point3, Unit, Vector3};
use proptest::prelude::*;

/// A Strategy to generate f64 values within the range [-50.0, 50.0].
/// though it is set up to be likely to produce zeros, round numbers, and edge cases.
///
/// 50 world units is already far larger than any room-scale scene.
pub fn scalar_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        prop_oneof![
            Just(0.0),
            Just(1.0),
            Just(-1.0),
            Just(10.0),
            Just(-10.0),
            Just(0.5),
            Just(-0.5),
            Just(std::f64::consts::PI),
            Just(-std::f64::consts::PI),
        ],
        -50.0..=50.0,
    ]
}

pub fn arbitrary_vector() -> impl Strategy<Value = Vector3<f64>> {
    (scalar_strategy(), scalar_strategy(), scalar_strategy())
        .prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

/// Unit vectors, biased toward the coordinate axes (floors, ceilings, walls).
pub fn arbitrary_unit_vector() -> impl Strategy<Value = Unit<Vector3<f64>>> {
    arbitrary_vector()
        .prop_filter("Non-zero vector", |v| v.norm() > 0.0001)
        .prop_map(Unit::new_normalize)
}

pub fn arbitrary_point() -> impl Strategy<Value = Point3<f64>> {
    arbitrary_vector().prop_map(|v| Point3::from(v))
}

pub fn arbitrary_triangle() -> impl Strategy<Value = Triangle> {
    (arbitrary_point(), arbitrary_point(), arbitrary_point())
        .prop_map(|(a, b, c)| Triangle::new(a, b, c))
}

/// Distances to push a placed object off a surface.
pub fn offset_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(0.05), 0.0..2.0]
}

/// A single quad, centered on `center`, facing `normal`, with the given half size.
pub fn quad_mesh(center: Point3<f64>, normal: Unit<Vector3<f64>>, half_size: f64) -> TriangleMesh {
    let u = Unit::new_normalize(crate::primitive::vector_utils::any_perpendicular(*normal));
    let v = normal.cross(&u);
    let u = u.into_inner() * half_size;
    let v = v * half_size;

    // Counter-clockwise when seen from the side the normal points to.
    let vertices = vec![
        center - u - v,
        center + u - v,
        center + u + v,
        center - u + v,
    ];
    let indices = vec![
        IndexTriangle::new(VertexIndex(0), VertexIndex(1), VertexIndex(2)),
        IndexTriangle::new(VertexIndex(0), VertexIndex(2), VertexIndex(3)),
    ];

    TriangleMesh::new(vertices, indices)
}

/// Quads somewhere in a room-sized box, facing anywhere.
pub fn arbitrary_quad() -> impl Strategy<Value = TriangleMesh> {
    (arbitrary_point(), arbitrary_unit_vector(), 0.1..5.0)
        .prop_map(|(center, normal, half_size)| quad_mesh(center, normal, half_size))
}
