use nalgebra::{Point3, Unit, Vector3};

/// A triangle in 3D space defined by three points.
///
/// The winding `a -> b -> c` determines the front face: the normal points toward the
/// side from which the vertices appear counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The first vertex of the triangle.
    pub a: Point3<f64>,
    /// The second vertex of the triangle.
    pub b: Point3<f64>,
    /// The third vertex of the triangle.
    pub c: Point3<f64>,
}

impl Triangle {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    pub fn is_degenerate(&self) -> bool {
        // Collinear vertices span no area.
        self.raw_normal().norm() < 1e-10
    }

    pub fn raw_normal(&self) -> Vector3<f64> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    pub fn unit_normal(&self) -> Unit<Vector3<f64>> {
        Unit::new_normalize(self.raw_normal())
    }

    pub fn barycenter(&self) -> Point3<f64> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// The point with barycentric weights `(1 - u - v, u, v)`.
    pub fn point_at(&self, u: f64, v: f64) -> Point3<f64> {
        self.a + (self.b - self.a) * u + (self.c - self.a) * v
    }

    pub fn area(&self) -> f64 {
        0.5 * self.raw_normal().norm()
    }
}
