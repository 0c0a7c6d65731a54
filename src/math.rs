//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Create a [`Transform`] from a 3x3 matrix. The arguments are given column
/// by column, so each line of arguments holds the coefficients one input
/// component contributes to the three outputs.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    let Components(x, y, z) = components;
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    Components(x, y, z)
}

/// Return true if `value` is within `tolerance` of zero.
pub fn almost_zero<T: Float>(value: T, tolerance: T) -> bool {
    value.abs() < tolerance
}

/// Return true if `value` lies within [0..1], widened by `tolerance` on both
/// ends.
pub fn in_unit_range<T: Float>(value: T, tolerance: T) -> bool {
    value >= -tolerance && value <= T::one() + tolerance
}

/// Normalize a hue in degrees to [0..360).
pub fn normalize_hue<T: Float + From<f32>>(hue: T) -> T {
    let full = <T as From<f32>>::from(360.0);
    let hue = hue % full;
    let hue = if hue < T::zero() { hue + full } else { hue };

    // Adding a tiny negative remainder to 360 can round back up to 360.
    if hue >= full {
        T::zero()
    } else {
        hue
    }
}

/// The shortest distance between two hues in degrees, in [0..180].
pub fn hue_distance<T: Float + From<f32>>(a: T, b: T) -> T {
    let full = <T as From<f32>>::from(360.0);
    let d = normalize_hue(a - b);
    d.min(full - d)
}
