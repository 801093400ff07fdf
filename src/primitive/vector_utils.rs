use nalgebra::{Unit, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Compute an arbitrary 3D vector perpendicular to the given `Vector3<f64>`.
///
/// This function ensures numerical stability by comparing the absolute values of the components.
/// Credit: https://stackoverflow.com/a/11132720
///
/// # Parameters
/// - `vec`: A `Vector3<f64>` representing the input vector.
///
/// # Returns
/// A `Vector3<f64>` that is perpendicular to the input vector.
pub fn any_perpendicular(vec: Vector3<f64>) -> Vector3<f64> {
    if vec.z.abs() < vec.x.abs() {
        Vector3::new(vec.y, -vec.x, 0.0)
    } else {
        Vector3::new(0.0, -vec.z, vec.y)
    }
}

/// Rotates a vector to produce a second vector such that the angle between the two vectors
/// is `offset_angle` radians.
///
/// No guarantees are made about the direction of the resulting vector, except for
/// the provided offset angle.
///
/// However, this function takes an additional `plane_angle` parameter, which allows
/// sweeping the full range of possible vectors with the given offset angle.
#[cfg(test)]
pub(crate) fn offset_vector_by_angle(
    original: Unit<Vector3<f64>>,
    offset_angle: f64,
    plane_angle: f64,
) -> Unit<Vector3<f64>> {
    let plane_rotation = UnitQuaternion::from_axis_angle(&original, plane_angle);

    let offset_rotation = UnitQuaternion::from_axis_angle(
        &Unit::new_normalize(any_perpendicular(*original)),
        offset_angle,
    );

    plane_rotation * offset_rotation * original
}

/// The smallest rotation that maps `from` onto `to`.
///
/// Unlike `UnitQuaternion::rotation_between_axis`, this never fails: when the two vectors
/// point in exactly opposite directions the rotation axis is undefined, and we rotate by
/// half a turn around `any_perpendicular(from)`. For `from = +Z` that axis is `(0, -1, 0)`.
pub fn shortest_arc(from: &Unit<Vector3<f64>>, to: &Unit<Vector3<f64>>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between_axis(from, to).unwrap_or_else(|| {
        let axis = Unit::new_normalize(any_perpendicular(from.into_inner()));
        UnitQuaternion::from_axis_angle(&axis, PI)
    })
}
