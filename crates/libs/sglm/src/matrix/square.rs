//! Determinant and inverse of square matrices.

use super::Matrix;
use crate::{
    error::{MathError, Result},
    scalar::Real,
};
use num_traits::{Float, ToPrimitive, Zero};

/// Square matrices that have a determinant and an inverse.
pub trait SquareMatrix: Copy + Sized {
    /// Element kind.
    type Scalar: Real;

    /// Returns the determinant.
    fn determinant(&self) -> Self::Scalar;

    /// Returns the inverse.
    ///
    /// The result of inverting a singular matrix is unspecified (the
    /// elements are non-finite); use [`try_inverse`](Self::try_inverse) to
    /// detect it.
    fn inverse(&self) -> Self;

    /// Returns the inverse, or [`MathError::SingularMatrix`] when the
    /// determinant is zero or not finite.
    fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == Self::Scalar::zero() || !det.is_finite() {
            let determinant = det.to_f64().unwrap_or(f64::NAN);
            log::debug!("refusing to invert matrix with determinant {determinant}");
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(self.inverse())
    }
}

impl<T: Real> SquareMatrix for Matrix<T, 2, 2> {
    type Scalar = T;

    #[inline]
    fn determinant(&self) -> T {
        let m = &self.0;
        m[0].0[0] * m[1].0[1] - m[1].0[0] * m[0].0[1]
    }

    fn inverse(&self) -> Self {
        let m = &self.0;
        let inv_det = T::one() / self.determinant();
        Self::from_cols_array([
            [m[1].0[1] * inv_det, -m[0].0[1] * inv_det],
            [-m[1].0[0] * inv_det, m[0].0[0] * inv_det],
        ])
    }
}

impl<T: Real> SquareMatrix for Matrix<T, 3, 3> {
    type Scalar = T;

    fn determinant(&self) -> T {
        let [a, b, c] = self.to_cols_array();
        a[0] * (b[1] * c[2] - c[1] * b[2]) - b[0] * (a[1] * c[2] - c[1] * a[2])
            + c[0] * (a[1] * b[2] - b[1] * a[2])
    }

    fn inverse(&self) -> Self {
        let m = self.to_cols_array();
        let inv_det = T::one() / self.determinant();
        Self::from_cols_array([
            [
                (m[1][1] * m[2][2] - m[2][1] * m[1][2]) * inv_det,
                -(m[0][1] * m[2][2] - m[2][1] * m[0][2]) * inv_det,
                (m[0][1] * m[1][2] - m[1][1] * m[0][2]) * inv_det,
            ],
            [
                -(m[1][0] * m[2][2] - m[2][0] * m[1][2]) * inv_det,
                (m[0][0] * m[2][2] - m[2][0] * m[0][2]) * inv_det,
                -(m[0][0] * m[1][2] - m[1][0] * m[0][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[2][0] * m[1][1]) * inv_det,
                -(m[0][0] * m[2][1] - m[2][0] * m[0][1]) * inv_det,
                (m[0][0] * m[1][1] - m[1][0] * m[0][1]) * inv_det,
            ],
        ])
    }
}

/// 2x2 minors of the first two and of the last two columns, shared by the
/// 4x4 determinant and inverse (Laplace expansion).
struct Minors4<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T: Real> Minors4<T> {
    fn new(a: &[[T; 4]; 4]) -> Self {
        Self {
            s: [
                a[0][0] * a[1][1] - a[1][0] * a[0][1],
                a[0][0] * a[1][2] - a[1][0] * a[0][2],
                a[0][0] * a[1][3] - a[1][0] * a[0][3],
                a[0][1] * a[1][2] - a[1][1] * a[0][2],
                a[0][1] * a[1][3] - a[1][1] * a[0][3],
                a[0][2] * a[1][3] - a[1][2] * a[0][3],
            ],
            c: [
                a[2][0] * a[3][1] - a[3][0] * a[2][1],
                a[2][0] * a[3][2] - a[3][0] * a[2][2],
                a[2][0] * a[3][3] - a[3][0] * a[2][3],
                a[2][1] * a[3][2] - a[3][1] * a[2][2],
                a[2][1] * a[3][3] - a[3][1] * a[2][3],
                a[2][2] * a[3][3] - a[3][2] * a[2][3],
            ],
        }
    }

    fn determinant(&self) -> T {
        let (s, c) = (&self.s, &self.c);
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl<T: Real> SquareMatrix for Matrix<T, 4, 4> {
    type Scalar = T;

    fn determinant(&self) -> T { Minors4::new(&self.to_cols_array()).determinant() }

    // The expansion is symmetric under transposition, so it can run on the
    // column arrays directly: inverse(transpose(m)) = transpose(inverse(m)).
    fn inverse(&self) -> Self {
        let a = self.to_cols_array();
        let minors = Minors4::new(&a);
        let (s, c) = (&minors.s, &minors.c);
        let inv_det = T::one() / minors.determinant();
        Self::from_cols_array([
            [
                (a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * inv_det,
                (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * inv_det,
                (a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * inv_det,
                (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * inv_det,
            ],
            [
                (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * inv_det,
                (a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * inv_det,
                (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * inv_det,
                (a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * inv_det,
            ],
            [
                (a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * inv_det,
                (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * inv_det,
                (a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * inv_det,
                (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * inv_det,
            ],
            [
                (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * inv_det,
                (a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * inv_det,
                (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * inv_det,
                (a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * inv_det,
            ],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix::*, vector::*};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn determinants() {
        assert_eq!(Mat2::from_cols_array([[1.0, 3.0], [2.0, 4.0]]).determinant(), -2.0);
        assert_eq!(DMat3::identity().determinant(), 1.0);
        assert_eq!(
            DMat3::from_cols_array([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]])
                .determinant(),
            6.0
        );
        assert_eq!(Mat4::from_diagonal(vec4(1.0, 2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_eq!(Mat4::zero().determinant(), 0.0);
    }

    #[test]
    fn determinant_matches_transpose() {
        let m = DMat4::from_cols_array([
            [1.0, 2.0, 0.0, 1.0],
            [0.0, 1.0, 3.0, 2.0],
            [4.0, 0.0, 1.0, 0.0],
            [1.0, 1.0, 1.0, 5.0],
        ]);
        assert_relative_eq!(m.determinant(), m.transpose().determinant(), epsilon = 1.0e-12);
    }

    #[test]
    fn inverse_2x2() {
        let m = Mat2::from_cols_array([[4.0, 2.0], [7.0, 6.0]]);
        let inv = m.inverse();
        assert_relative_eq!(inv * m, Mat2::identity(), epsilon = 1.0e-6);
        assert_relative_eq!(m * inv, Mat2::identity(), epsilon = 1.0e-6);
    }

    #[test]
    fn inverse_3x3() {
        let m = DMat3::from_cols_array([[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]);
        assert_relative_eq!(m.inverse() * m, DMat3::identity(), epsilon = 1.0e-12);
    }

    #[test]
    fn inverse_of_diagonal() {
        let m = Mat4::from_diagonal(vec4(2.0, 4.0, 0.5, 1.0));
        assert_relative_eq!(
            m.inverse(),
            Mat4::from_diagonal(vec4(0.5, 0.25, 2.0, 1.0)),
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn singular_matrices_are_reported() {
        let m = Mat3::from_cols_array([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 0.0]]);
        assert_eq!(
            m.try_inverse(),
            Err(MathError::SingularMatrix { determinant: 0.0 })
        );
        assert!(Mat4::zero().try_inverse().is_err());
        assert!(!Mat4::zero().inverse().is_finite());
        assert!(Mat2::identity().try_inverse().is_ok());
    }

    fn checked_inverse<M: SquareMatrix>(m: M) -> Option<M> { m.try_inverse().ok() }

    #[test]
    fn checked_inverse_through_the_trait() {
        assert_eq!(checked_inverse(DMat2::identity()), Some(DMat2::identity()));
        assert_eq!(checked_inverse(DMat3::zero()), None);
        let unbounded = Mat2::from_diagonal(vec2(f32::INFINITY, 1.0));
        assert_eq!(
            unbounded.try_inverse(),
            Err(MathError::SingularMatrix { determinant: f64::INFINITY })
        );
        let nan = Mat4::from_diagonal(vec4(f32::NAN, 1.0, 1.0, 1.0));
        assert!(checked_inverse(nan).is_none());
    }

    fn well_conditioned_mat4() -> impl Strategy<Value = DMat4> {
        // Diagonally dominant, hence invertible.
        prop::array::uniform4(prop::array::uniform4(-1.0f64..1.0)).prop_map(|cols| {
            let mut m = DMat4::from_cols_array(cols);
            for k in 0..4 {
                m[k][k] += 8.0;
            }
            m
        })
    }

    proptest! {
        #[test]
        fn inverse_times_matrix_is_identity(m in well_conditioned_mat4()) {
            assert_relative_eq!(m.inverse() * m, DMat4::identity(), epsilon = 1.0e-9);
            assert_relative_eq!(m * m.inverse(), DMat4::identity(), epsilon = 1.0e-9);
        }

        #[test]
        fn determinant_is_multiplicative(
            a in well_conditioned_mat4(),
            b in well_conditioned_mat4(),
        ) {
            let lhs = (a * b).determinant();
            let rhs = a.determinant() * b.determinant();
            assert_relative_eq!(lhs, rhs, max_relative = 1.0e-9);
        }

        #[test]
        fn inverse_of_inverse(m in well_conditioned_mat4()) {
            assert_relative_eq!(m.inverse().inverse(), m, epsilon = 1.0e-9, max_relative = 1.0e-9);
        }
    }
}
