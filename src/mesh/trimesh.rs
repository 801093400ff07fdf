use crate::primitive::aabb::Aabb;
use crate::primitive::triangle::Triangle;
use nalgebra::Point3;

/// Represents an index of a vertex in a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexIndex(pub usize);

/// Represents an index of a triangle in a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceIndex(pub usize);

/// Represents a triangle in a mesh, defined by three vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexTriangle {
    /// The first vertex index of the triangle.
    pub a: VertexIndex,
    /// The second vertex index of the triangle.
    pub b: VertexIndex,
    /// The third vertex index of the triangle.
    pub c: VertexIndex,
}

impl IndexTriangle {
    pub fn new(a: VertexIndex, b: VertexIndex, c: VertexIndex) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [VertexIndex; 3] {
        [self.a, self.b, self.c]
    }
}

/// Represents a triangle mesh, consisting of vertices and triangle indices.
///
/// Faces are wound counter-clockwise when seen from outside, as in glTF and
/// most scene formats.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// A list of vertices in the mesh.
    pub vertices: Vec<Point3<f64>>,
    /// A list of triangles, each defined by three vertex indices.
    pub indices: Vec<IndexTriangle>,
}

impl TriangleMesh {
    pub fn new(vertices: Vec<Point3<f64>>, indices: Vec<IndexTriangle>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertex(&self, vertex_index: VertexIndex) -> Point3<f64> {
        self.vertices[vertex_index.0]
    }

    pub fn triangle(&self, face_id: FaceIndex) -> IndexTriangle {
        self.indices[face_id.0]
    }

    pub fn euclidean_triangle(&self, face_id: FaceIndex) -> Triangle {
        let tri = self.triangle(face_id);
        Triangle::new(self.vertex(tri.a), self.vertex(tri.b), self.vertex(tri.c))
    }

    /// All faces with their indices.
    pub fn triangles(&self) -> impl Iterator<Item = (FaceIndex, Triangle)> + '_ {
        (0..self.indices.len()).map(move |i| (FaceIndex(i), self.euclidean_triangle(FaceIndex(i))))
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::around_points(self.vertices.iter().copied())
    }
}

impl From<parry3d_f64::shape::TriMesh> for TriangleMesh {
    fn from(mesh: parry3d_f64::shape::TriMesh) -> Self {
        Self::from(&mesh)
    }
}

impl From<&parry3d_f64::shape::TriMesh> for TriangleMesh {
    fn from(mesh: &parry3d_f64::shape::TriMesh) -> Self {
        let vertices = mesh
            .vertices()
            .iter()
            .map(|v| Point3::new(v.x, v.y, v.z))
            .collect();
        let indices = mesh
            .indices()
            .iter()
            .map(|f| {
                IndexTriangle::new(
                    VertexIndex(f[0] as usize),
                    VertexIndex(f[1] as usize),
                    VertexIndex(f[2] as usize),
                )
            })
            .collect();
        TriangleMesh::new(vertices, indices)
    }
}
