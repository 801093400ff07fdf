use crate::primitive::aabb::Aabb;
use crate::primitive::ray::Ray;
use crate::primitive::triangle::Triangle;

const FLOAT_COMPARE: f64 = 1.0e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayTriangleIntersection {
    /// The ray hits the triangle.
    Intersection {
        /// Distance along the ray.
        t: f64,
        /// Barycentric weight of vertex `b`.
        u: f64,
        /// Barycentric weight of vertex `c`.
        v: f64,
        /// Whether the ray arrives from the side the winding normal points to.
        front_face: bool,
    },
    /// The ray is parallel to the plane of the triangle, or the triangle is degenerate.
    Parallel,
    /// The ray misses the triangle, or the triangle lies behind the ray origin.
    NoIntersection,
}

impl RayTriangleIntersection {
    /// Returns the distance along the ray if there is an intersection.
    pub fn t(&self) -> Option<f64> {
        match self {
            RayTriangleIntersection::Intersection { t, .. } => Some(*t),
            _ => None,
        }
    }
}

/// Intersects a ray with a triangle (Möller–Trumbore).
///
/// Both faces are reported; the caller decides whether to cull back faces by
/// looking at `front_face`.
pub fn ray_triangle_intersection(ray: &Ray, triangle: &Triangle) -> RayTriangleIntersection {
    let e1 = triangle.b - triangle.a;
    let e2 = triangle.c - triangle.a;

    let pvec = ray.dir.cross(&e2);
    let det = e1.dot(&pvec);

    if det.abs() < FLOAT_COMPARE {
        return RayTriangleIntersection::Parallel;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - triangle.a;

    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return RayTriangleIntersection::NoIntersection;
    }

    let qvec = tvec.cross(&e1);
    let v = ray.dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return RayTriangleIntersection::NoIntersection;
    }

    let t = e2.dot(&qvec) * inv_det;
    if t < 0.0 {
        return RayTriangleIntersection::NoIntersection;
    }

    // det = -dir · ((b - a) × (c - a)), so a positive determinant means the ray
    // runs against the winding normal.
    RayTriangleIntersection::Intersection {
        t,
        u,
        v,
        front_face: det > 0.0,
    }
}

/// Slab test of a ray against a box.
///
/// Returns the entry and exit distances along the ray. A ray starting inside the box
/// has an entry distance of zero.
pub fn ray_aabb_intersection(ray: &Ray, aabb: &Aabb) -> Option<[f64; 2]> {
    if aabb.is_empty() {
        return None;
    }

    let mut t_enter = 0.0_f64;
    let mut t_exit = f64::INFINITY;

    for i in 0..3 {
        let origin = ray.origin[i];
        let dir = ray.dir[i];

        if dir.abs() < FLOAT_COMPARE {
            // Parallel to this slab: either always inside it or never.
            if origin < aabb.min[i] || origin > aabb.max[i] {
                return None;
            }
            continue;
        }

        let t1 = (aabb.min[i] - origin) / dir;
        let t2 = (aabb.max[i] - origin) / dir;

        t_enter = t_enter.max(t1.min(t2));
        t_exit = t_exit.min(t1.max(t2));

        if t_exit < t_enter {
            return None;
        }
    }

    Some([t_enter, t_exit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proptest::{arbitrary_point, arbitrary_triangle, arbitrary_unit_vector};
    use nalgebra::{Point3, Unit, Vector3};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn ray_through_interior_point_hits_triangle(
            triangle in arbitrary_triangle(),
            (u, v) in (0.05..0.45, 0.05..0.45),
            dir in arbitrary_unit_vector(),
            distance in 0.1f64..20.0,
        ) {
            prop_assume!(triangle.area() > 0.01);
            prop_assume!(triangle.unit_normal().dot(&dir).abs() > 0.1);

            let target = triangle.point_at(u, v);
            let ray = Ray::new(target - dir.into_inner() * distance, dir);

            match ray_triangle_intersection(&ray, &triangle) {
                RayTriangleIntersection::Intersection { t, u: hit_u, v: hit_v, front_face } => {
                    prop_assert!((t - distance).abs() < 1e-6);
                    prop_assert!((ray.at(t) - target).norm() < 1e-6);
                    prop_assert!((hit_u - u).abs() < 1e-6);
                    prop_assert!((hit_v - v).abs() < 1e-6);
                    prop_assert_eq!(front_face, triangle.unit_normal().dot(&dir) < 0.0);
                }
                other => prop_assert!(false, "expected a hit, got {:?}", other),
            }
        }

        #[test]
        fn ray_pointing_away_misses(
            triangle in arbitrary_triangle(),
            dir in arbitrary_unit_vector(),
        ) {
            prop_assume!(!triangle.is_degenerate());
            prop_assume!(triangle.unit_normal().dot(&dir).abs() > 0.1);

            // Start just past the barycenter and keep going.
            let ray = Ray::new(triangle.barycenter() + dir.into_inner() * 0.5, dir);
            prop_assert_eq!(ray_triangle_intersection(&ray, &triangle).t(), None);
        }

        #[test]
        fn ray_from_inside_box_enters_at_zero(
            origin in arbitrary_point(),
            dir in arbitrary_unit_vector(),
        ) {
            let aabb = Aabb::singleton(origin).inflated(1.0);
            let [enter, exit] = ray_aabb_intersection(&Ray::new(origin, dir), &aabb).unwrap();
            prop_assert_eq!(enter, 0.0);
            prop_assert!(exit >= 1.0 - 1e-9);
        }
    }

    #[test]
    fn parallel_ray_is_reported() {
        let triangle = Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        );
        let ray = Ray::new(Point3::new(0.0, 0.0, 1.0), Vector3::x_axis());
        assert_eq!(
            ray_triangle_intersection(&ray, &triangle),
            RayTriangleIntersection::Parallel
        );
    }

    #[test]
    fn box_entry_and_exit() {
        let aabb = Aabb::around_points([Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0)]);

        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), -Vector3::z_axis());
        assert_eq!(ray_aabb_intersection(&ray, &aabb), Some([4.0, 6.0]));

        let behind = Ray::new(Point3::new(0.0, 0.0, 5.0), Vector3::z_axis());
        assert_eq!(ray_aabb_intersection(&behind, &aabb), None);

        let beside = Ray::new(Point3::new(2.0, 0.0, 5.0), -Vector3::z_axis());
        assert_eq!(ray_aabb_intersection(&beside, &aabb), None);

        let diagonal = Ray::new(
            Point3::new(3.0, 3.0, 0.0),
            Unit::new_normalize(Vector3::new(-1.0, -1.0, 0.0)),
        );
        let [enter, exit] = ray_aabb_intersection(&diagonal, &aabb).unwrap();
        assert!((enter - 2.0 * 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((exit - 4.0 * 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_box_is_never_hit() {
        let aabb = Aabb::around_points(std::iter::empty());
        let ray = Ray::new(Point3::origin(), Vector3::x_axis());
        assert_eq!(ray_aabb_intersection(&ray, &aabb), None);
    }
}
