//! Affine transform builders.
//!
//! Every builder post-multiplies: `translate(m, v)` returns `m * T(v)`, so the
//! new transform is applied to points before `m`.

use crate::{
    matrix::Matrix,
    scalar::{Numeric, Real},
    vector::Vector,
};

/// Returns `m * T(v)` where `T(v)` translates by `v`.
#[inline]
pub fn translate<T: Numeric>(m: Matrix<T, 4, 4>, v: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let mut result = m;
    result.0[3] = m.0[0] * v.0[0] + m.0[1] * v.0[1] + m.0[2] * v.0[2] + m.0[3];
    result
}

/// Returns `m * S(v)` where `S(v)` scales the axes by the components of `v`.
#[inline]
pub fn scale<T: Numeric>(m: Matrix<T, 4, 4>, v: Vector<T, 3>) -> Matrix<T, 4, 4> {
    Matrix::from_cols([m.0[0] * v.0[0], m.0[1] * v.0[1], m.0[2] * v.0[2], m.0[3]])
}

/// Returns `m * R` where `R` rotates by `angle` radians counter-clockwise
/// about `axis` (Rodrigues' formula). The axis does not need to be
/// normalized but must not be zero.
pub fn rotate<T: Real>(m: Matrix<T, 4, 4>, angle: T, axis: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let axis = axis.normalize();
    let [x, y, z] = axis.0;
    let temp = axis * (T::one() - c);
    let [tx, ty, tz] = temp.0;

    let r = [
        [c + tx * x, tx * y + s * z, tx * z - s * y],
        [ty * x - s * z, c + ty * y, ty * z + s * x],
        [tz * x + s * y, tz * y - s * x, c + tz * z],
    ];

    let col = |k: usize| m.0[0] * r[k][0] + m.0[1] * r[k][1] + m.0[2] * r[k][2];
    Matrix::from_cols([col(0), col(1), col(2), m.0[3]])
}

/// Same rotation as [`rotate`], built as a full 4x4 matrix and multiplied
/// in; equal up to rounding.
pub fn rotate_slow<T: Real>(m: Matrix<T, 4, 4>, angle: T, axis: Vector<T, 3>) -> Matrix<T, 4, 4> {
    let (s, c) = angle.sin_cos();
    let one_minus_c = T::one() - c;
    let [x, y, z] = axis.normalize().0;
    let zero = T::zero();

    let rotation = Matrix::from_cols_array([
        [
            c + x * x * one_minus_c,
            one_minus_c * x * y + s * z,
            one_minus_c * x * z - s * y,
            zero,
        ],
        [
            one_minus_c * y * x - s * z,
            c + y * y * one_minus_c,
            one_minus_c * y * z + s * x,
            zero,
        ],
        [
            one_minus_c * z * x + s * y,
            one_minus_c * z * y - s * x,
            c + z * z * one_minus_c,
            zero,
        ],
        [zero, zero, zero, T::one()],
    ]);
    m * rotation
}

/// 2D counterpart of [`translate`] on a homogeneous 3x3 matrix.
#[inline]
pub fn translate_2d<T: Numeric>(m: Matrix<T, 3, 3>, v: Vector<T, 2>) -> Matrix<T, 3, 3> {
    let mut result = m;
    result.0[2] = m.0[0] * v.0[0] + m.0[1] * v.0[1] + m.0[2];
    result
}

/// 2D counterpart of [`rotate`]: counter-clockwise by `angle` radians.
#[inline]
pub fn rotate_2d<T: Real>(m: Matrix<T, 3, 3>, angle: T) -> Matrix<T, 3, 3> {
    let (s, c) = angle.sin_cos();
    Matrix::from_cols([m.0[0] * c + m.0[1] * s, m.0[0] * -s + m.0[1] * c, m.0[2]])
}

/// 2D counterpart of [`scale`].
#[inline]
pub fn scale_2d<T: Numeric>(m: Matrix<T, 3, 3>, v: Vector<T, 2>) -> Matrix<T, 3, 3> {
    Matrix::from_cols([m.0[0] * v.0[0], m.0[1] * v.0[1], m.0[2]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix::*, vector::*};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translation_moves_points() {
        let m = translate(Mat4::identity(), vec3(1.0, 2.0, 3.0));
        assert_eq!(m[3], vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
        // Directions are unaffected.
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 0.0), vec4(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn builders_post_multiply() {
        let s = scale(Mat4::identity(), vec3(2.0, 2.0, 2.0));
        let ts = translate(s, vec3(1.0, 0.0, 0.0));
        // The translation is scaled because it is applied first.
        assert_eq!(ts * vec4(0.0, 0.0, 0.0, 1.0), vec4(2.0, 0.0, 0.0, 1.0));
        assert_eq!(ts, s * translate(Mat4::identity(), vec3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn scaling() {
        let m = scale(Mat4::identity(), vec3(2.0, 3.0, 4.0));
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, 3.0, 4.0, 1.0));
        let im = scale(Matrix::<i32, 4, 4>::identity(), vec3(2, 3, 4));
        assert_eq!(im.trace(), 10);
    }

    #[test]
    fn quarter_turn_about_z() {
        let m = rotate(Mat4::identity(), FRAC_PI_2, Vec3::z_axis());
        assert_relative_eq!(
            m * vec4(1.0, 0.0, 0.0, 1.0),
            vec4(0.0, 1.0, 0.0, 1.0),
            epsilon = 1.0e-6
        );
        // A non-normalized axis gives the same rotation.
        let n = rotate(Mat4::identity(), FRAC_PI_2, vec3(0.0, 0.0, 5.0));
        assert_relative_eq!(m, n, epsilon = 1.0e-6);
    }

    #[test]
    fn rotation_2d() {
        let m = rotate_2d(Mat3::identity(), FRAC_PI_2);
        assert_relative_eq!(m * vec3(1.0, 0.0, 1.0), vec3(0.0, 1.0, 1.0), epsilon = 1.0e-6);
    }

    #[test]
    fn transforms_2d() {
        let m = translate_2d(Mat3::identity(), vec2(3.0, -1.0));
        assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(4.0, 0.0, 1.0));
        let m = scale_2d(m, vec2(2.0, 0.5));
        assert_eq!(m * vec3(1.0, 4.0, 1.0), vec3(5.0, 1.0, 1.0));
    }

    proptest! {
        #[test]
        fn fast_and_slow_rotation_agree(
            angle in -10.0f64..10.0,
            axis in prop::array::uniform3(-1.0f64..1.0)
                .prop_filter("non-zero axis", |a| a.iter().map(|c| c * c).sum::<f64>() > 1.0e-3),
            cols in prop::array::uniform4(prop::array::uniform4(-5.0f64..5.0)),
        ) {
            let m = DMat4::from_cols_array(cols);
            let axis = DVec3::from_array(axis);
            assert_relative_eq!(
                rotate(m, angle, axis),
                rotate_slow(m, angle, axis),
                epsilon = 1.0e-9
            );
        }

        #[test]
        fn rotation_preserves_length(
            angle in -10.0f64..10.0,
            axis in prop::array::uniform3(-1.0f64..1.0)
                .prop_filter("non-zero axis", |a| a.iter().map(|c| c * c).sum::<f64>() > 1.0e-3),
            p in prop::array::uniform3(-100.0f64..100.0),
        ) {
            let r = rotate(DMat4::identity(), angle, DVec3::from_array(axis));
            let p = DVec3::from_array(p);
            let q = r * p.extend(1.0);
            assert_relative_eq!(
                q.truncate().length(),
                p.length(),
                epsilon = 1.0e-9,
                max_relative = 1.0e-9
            );
        }
    }
}
