//! GLSL built-in functions over vectors and matrices.
//!
//! Each function is the component-wise counterpart of the GLSL built-in of
//! the same name. Most are thin wrappers around the inherent methods of
//! [`Vector`] and [`Matrix`].

use crate::{
    matrix::{Matrix, SquareMatrix},
    scalar::{Numeric, Real, Scalar},
    vector::Vector,
};

// Angle and trigonometry.

/// Converts degrees to radians.
#[inline]
pub fn radians<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> { v.map(T::to_radians) }

/// Converts radians to degrees.
#[inline]
pub fn degrees<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> { v.map(T::to_degrees) }

// Common functions.

/// Component-wise absolute value. For `i32`, `abs(i32::MIN)` is `i32::MIN`.
#[inline]
pub fn abs<T: Numeric, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.map(|c| if c < T::zero() { T::zero().wrapped_sub(c) } else { c })
}

/// Component-wise sign: `1` for positive, `-1` for negative and `0` for zero
/// (and NaN) components.
#[inline]
pub fn sign<T: Numeric, const N: usize>(v: Vector<T, N>) -> Vector<T, N> {
    v.map(|c| {
        if c > T::zero() {
            T::one()
        } else if c < T::zero() {
            T::zero() - T::one()
        } else {
            T::zero()
        }
    })
}

/// Component-wise round towards negative infinity.
#[inline]
pub fn floor<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> { v.map(T::floor) }

/// Component-wise round towards positive infinity.
#[inline]
pub fn ceil<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> { v.map(T::ceil) }

/// Component-wise `x - floor(x)`.
#[inline]
pub fn fract<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> { v.map(|c| c - c.floor()) }

/// Component-wise minimum.
#[inline]
pub fn min<T: Numeric, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.min(b)
}

/// Component-wise maximum.
#[inline]
pub fn max<T: Numeric, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<T, N> {
    a.max(b)
}

/// Component-wise `min(max(v, lo), hi)`.
#[inline]
pub fn clamp<T: Numeric, const N: usize>(
    v: Vector<T, N>,
    lo: Vector<T, N>,
    hi: Vector<T, N>,
) -> Vector<T, N> {
    v.clamp(lo, hi)
}

/// Linear blend `x * (1 - a) + y * a`.
#[inline]
pub fn mix<T: Real, const N: usize>(x: Vector<T, N>, y: Vector<T, N>, a: T) -> Vector<T, N> {
    x.lerp(y, a)
}

/// `0` where `x < edge`, `1` elsewhere.
#[inline]
pub fn step<T: Real, const N: usize>(edge: Vector<T, N>, x: Vector<T, N>) -> Vector<T, N> {
    edge.zip_map(x, |e, c| if c < e { T::zero() } else { T::one() })
}

/// Hermite interpolation between `0` and `1` when `edge0 < x < edge1`.
pub fn smoothstep<T: Real, const N: usize>(edge0: T, edge1: T, x: Vector<T, N>) -> Vector<T, N> {
    let three = T::two() + T::one();
    x.map(|c| {
        let t = ((c - edge0) / (edge1 - edge0)).max(T::zero()).min(T::one());
        t * t * (three - T::two() * t)
    })
}

// Geometric functions.

/// Euclidean length.
#[inline]
pub fn length<T: Real, const N: usize>(v: Vector<T, N>) -> T { v.length() }

/// Distance between two points.
#[inline]
pub fn distance<T: Real, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T { a.distance(b) }

/// Dot product.
#[inline]
pub fn dot<T: Numeric, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> T { a.dot(b) }

/// Cross product.
#[inline]
pub fn cross<T: Real>(a: Vector<T, 3>, b: Vector<T, 3>) -> Vector<T, 3> { a.cross(b) }

/// Unit vector in the direction of `v`; NaN components for a zero vector.
#[inline]
pub fn normalize<T: Real, const N: usize>(v: Vector<T, N>) -> Vector<T, N> { v.normalize() }

/// Returns `n` if `dot(nref, i) < 0`, `-n` otherwise.
#[inline]
pub fn faceforward<T: Real, const N: usize>(
    n: Vector<T, N>,
    i: Vector<T, N>,
    nref: Vector<T, N>,
) -> Vector<T, N> {
    if nref.dot(i) < T::zero() {
        n
    } else {
        -n
    }
}

/// Reflection of the incident direction `i` about the surface normal `n`
/// (`n` is expected to be normalized).
#[inline]
pub fn reflect<T: Real, const N: usize>(i: Vector<T, N>, n: Vector<T, N>) -> Vector<T, N> {
    i - n * (T::two() * n.dot(i))
}

/// Refraction of the incident direction `i` through a surface with normal
/// `n` and ratio of indices of refraction `eta`. Returns the zero vector on
/// total internal reflection.
pub fn refract<T: Real, const N: usize>(i: Vector<T, N>, n: Vector<T, N>, eta: T) -> Vector<T, N> {
    let cos_i = n.dot(i);
    let k = T::one() - eta * eta * (T::one() - cos_i * cos_i);
    if k < T::zero() {
        Vector::zero()
    } else {
        i * eta - n * (eta * cos_i + k.sqrt())
    }
}

// Vector relational functions.

/// Component-wise `a < b`.
#[inline]
pub fn less_than<T: Numeric, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmplt(b)
}

/// Component-wise `a <= b`.
#[inline]
pub fn less_than_equal<T: Numeric, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmple(b)
}

/// Component-wise `a > b`.
#[inline]
pub fn greater_than<T: Numeric, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmpgt(b)
}

/// Component-wise `a >= b`.
#[inline]
pub fn greater_than_equal<T: Numeric, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
) -> Vector<bool, N> {
    a.cmpge(b)
}

/// Component-wise `a == b`.
#[inline]
pub fn equal<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N> {
    a.cmpeq(b)
}

/// Component-wise `a != b`.
#[inline]
pub fn not_equal<T: Scalar, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> Vector<bool, N> {
    a.cmpne(b)
}

/// True if any component is true.
#[inline]
pub fn any<const N: usize>(v: Vector<bool, N>) -> bool { v.any() }

/// True if all components are true.
#[inline]
pub fn all<const N: usize>(v: Vector<bool, N>) -> bool { v.all() }

/// Component-wise logical complement.
#[inline]
pub fn not<const N: usize>(v: Vector<bool, N>) -> Vector<bool, N> { !v }

// Matrix functions.

/// Component-wise product of two matrices.
#[inline]
pub fn matrix_comp_mult<T: Numeric, const C: usize, const R: usize>(
    a: Matrix<T, C, R>,
    b: Matrix<T, C, R>,
) -> Matrix<T, C, R> {
    Matrix::from_cols(std::array::from_fn(|j| a.0[j] * b.0[j]))
}

/// Treats `c` as a column vector and `r` as a row vector and returns their
/// product `c * r`.
#[inline]
pub fn outer_product<T: Numeric, const C: usize, const R: usize>(
    c: Vector<T, R>,
    r: Vector<T, C>,
) -> Matrix<T, C, R> {
    Matrix::from_fn(|j, i| c.0[i].wrapped_mul(r.0[j]))
}

/// Transpose.
#[inline]
pub fn transpose<T: Scalar, const C: usize, const R: usize>(m: Matrix<T, C, R>) -> Matrix<T, R, C> {
    m.transpose()
}

/// Determinant of a square matrix.
#[inline]
pub fn determinant<M: SquareMatrix>(m: M) -> M::Scalar { m.determinant() }

/// Inverse of a square matrix; not guarded against singular input.
#[inline]
pub fn inverse<M: SquareMatrix>(m: M) -> M { m.inverse() }
