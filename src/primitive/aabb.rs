use nalgebra::{center, Point3, Vector3};

/// Axis-Aligned Bounding Box (AABB) structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum point of the AABB.
    pub min: Point3<f64>,
    /// Maximum point of the AABB.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates an AABB that encompasses all the given points.
    ///
    /// With no points at all, the result is inverted (`min` at +∞, `max` at −∞) and
    /// contains nothing; no ray will hit it.
    pub fn around_points(points: impl IntoIterator<Item = Point3<f64>>) -> Self {
        let mut aabb = Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        };

        for pt in points {
            aabb.expand_to_cover(pt);
        }

        aabb
    }

    /// Creates an AABB that represents a single point.
    #[cfg(test)]
    pub(crate) fn singleton(pt: Point3<f64>) -> Self {
        Self { min: pt, max: pt }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Calculates the center point of the AABB.
    pub fn center(&self) -> Point3<f64> {
        center(&self.min, &self.max)
    }

    /// Expands the AABB to cover the given point.
    pub fn expand_to_cover(&mut self, pt: Point3<f64>) {
        self.min.x = self.min.x.min(pt.x);
        self.min.y = self.min.y.min(pt.y);
        self.min.z = self.min.z.min(pt.z);

        self.max.x = self.max.x.max(pt.x);
        self.max.y = self.max.y.max(pt.y);
        self.max.z = self.max.z.max(pt.z);
    }

    /// Compute the half-extents of the AABB.
    pub fn half_extents(&self) -> Vector3<f64> {
        (self.max - self.min) / 2.0
    }

    #[cfg(test)]
    pub(crate) fn contains_point(&self, pt: &Point3<f64>) -> bool {
        (0..3).all(|i| self.min[i] <= pt[i] && pt[i] <= self.max[i])
    }

    /// Create a version inflated by a given amount.
    ///
    /// Flat meshes (a wall quad, a floor) have a zero-thickness box; inflating it a
    /// little keeps the slab test robust against rounding.
    pub fn inflated(&self, amount: f64) -> Self {
        Self {
            min: self.min - Vector3::new(amount, amount, amount),
            max: self.max + Vector3::new(amount, amount, amount),
        }
    }
}
