use nalgebra::{Point3, Unit, Vector3};

/// A pointer or controller ray: an origin and a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub dir: Unit<Vector3<f64>>,
}

impl Ray {
    /// Creates a new `Ray` from an origin point and a direction vector.
    pub fn new(origin: Point3<f64>, dir: Unit<Vector3<f64>>) -> Self {
        Self { origin, dir }
    }

    /// A ray from `origin` aimed through `target`.
    ///
    /// Returns `None` if the two points coincide.
    pub fn towards(origin: Point3<f64>, target: Point3<f64>) -> Option<Self> {
        Unit::try_new(target - origin, 1.0e-12).map(|dir| Self { origin, dir })
    }

    /// Returns the point at a given distance along the ray.
    pub fn at(&self, t: f64) -> Point3<f64> {
        self.origin + self.dir.as_ref() * t
    }
}
