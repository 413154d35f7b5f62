//! Fixed-size column-major matrices.

mod ops;
mod square;

pub use square::*;

use crate::{
    hash,
    scalar::{NumericCast, Numeric, Real, Scalar},
    vector::Vector,
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
};

/// Matrix with `C` columns and `R` rows, both one of 2, 3 or 4.
///
/// Stored as `C` column vectors of arity `R`: `m[j][i]` is the element at
/// column `j`, row `i`. The memory layout is the flat column-major layout
/// graphics APIs expect.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix<T, const C: usize, const R: usize>(pub(crate) [Vector<T, R>; C]);

/// 2x2 single precision matrix.
pub type Mat2 = Matrix<f32, 2, 2>;
/// 3x3 single precision matrix.
pub type Mat3 = Matrix<f32, 3, 3>;
/// 4x4 single precision matrix.
pub type Mat4 = Matrix<f32, 4, 4>;
/// Single precision matrix with 2 columns and 3 rows.
pub type Mat2x3 = Matrix<f32, 2, 3>;
/// Single precision matrix with 2 columns and 4 rows.
pub type Mat2x4 = Matrix<f32, 2, 4>;
/// Single precision matrix with 3 columns and 2 rows.
pub type Mat3x2 = Matrix<f32, 3, 2>;
/// Single precision matrix with 3 columns and 4 rows.
pub type Mat3x4 = Matrix<f32, 3, 4>;
/// Single precision matrix with 4 columns and 2 rows.
pub type Mat4x2 = Matrix<f32, 4, 2>;
/// Single precision matrix with 4 columns and 3 rows.
pub type Mat4x3 = Matrix<f32, 4, 3>;
/// 2x2 double precision matrix.
pub type DMat2 = Matrix<f64, 2, 2>;
/// 3x3 double precision matrix.
pub type DMat3 = Matrix<f64, 3, 3>;
/// 4x4 double precision matrix.
pub type DMat4 = Matrix<f64, 4, 4>;
/// Double precision matrix with 2 columns and 3 rows.
pub type DMat2x3 = Matrix<f64, 2, 3>;
/// Double precision matrix with 2 columns and 4 rows.
pub type DMat2x4 = Matrix<f64, 2, 4>;
/// Double precision matrix with 3 columns and 2 rows.
pub type DMat3x2 = Matrix<f64, 3, 2>;
/// Double precision matrix with 3 columns and 4 rows.
pub type DMat3x4 = Matrix<f64, 3, 4>;
/// Double precision matrix with 4 columns and 2 rows.
pub type DMat4x2 = Matrix<f64, 4, 2>;
/// Double precision matrix with 4 columns and 3 rows.
pub type DMat4x3 = Matrix<f64, 4, 3>;

static_assertions::assert_eq_size!(Mat4, [f32; 16]);
static_assertions::assert_eq_size!(Mat2x3, [f32; 6]);
static_assertions::assert_eq_size!(DMat3, [[f64; 3]; 3]);

impl<T: Scalar, const C: usize, const R: usize> Matrix<T, C, R> {
    const SHAPE: () = assert!(
        C >= 2 && C <= 4 && R >= 2 && R <= 4,
        "matrices have 2, 3 or 4 columns and rows"
    );

    /// Number of columns.
    pub const COLS: usize = C;

    /// Number of rows.
    pub const ROWS: usize = R;

    /// Creates a matrix from its columns.
    #[inline]
    pub fn from_cols(cols: [Vector<T, R>; C]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SHAPE;
        Self(cols)
    }

    /// Creates a matrix from nested column arrays.
    #[inline]
    pub fn from_cols_array(cols: [[T; R]; C]) -> Self {
        Self::from_cols(cols.map(Vector::from_array))
    }

    /// Returns the columns as nested arrays.
    #[inline]
    pub fn to_cols_array(self) -> [[T; R]; C] { self.0.map(Vector::to_array) }

    /// Creates a matrix by calling `f` with the column and row index of each
    /// element.
    #[inline]
    pub fn from_fn<F: FnMut(usize, usize) -> T>(mut f: F) -> Self {
        Self::from_cols(std::array::from_fn(|j| Vector::from_fn(|i| f(j, i))))
    }

    /// Returns all elements in column-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `Vector<T, R>` is a transparent wrapper around `[T; R]`, so
        // `[Vector<T, R>; C]` is laid out exactly as `C * R` contiguous `T`s.
        unsafe { std::slice::from_raw_parts(self.0.as_ptr().cast::<T>(), C * R) }
    }

    /// Returns the columns.
    #[inline]
    pub fn cols(&self) -> &[Vector<T, R>; C] { &self.0 }

    /// Returns column `j`.
    #[inline]
    #[track_caller]
    pub fn col(&self, j: usize) -> Vector<T, R> { self[j] }

    /// Returns row `i`.
    #[inline]
    #[track_caller]
    pub fn row(&self, i: usize) -> Vector<T, C> {
        assert!(i < R, "matrix row index out of range: {i} >= {R}");
        Vector::from_fn(|j| self.0[j].0[i])
    }

    /// Returns the transpose.
    #[inline]
    pub fn transpose(&self) -> Matrix<T, R, C> { Matrix::from_fn(|j, i| self.0[i].0[j]) }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, mut f: F) -> Matrix<U, C, R> {
        Matrix::from_cols(self.0.map(|col| col.map(&mut f)))
    }

    /// Converts every element to another scalar kind with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Matrix<U, C, R>
    where
        T: NumericCast<U>,
        U: Scalar,
    {
        self.map(|e| e.cast())
    }

    /// Hash of all elements folded in column-major order.
    pub fn hash_value(&self) -> u64 {
        hash::hash_all(self.as_slice().iter().map(Scalar::hash_bits))
    }
}

impl<T: Numeric, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Matrix with all elements set to zero.
    #[inline]
    pub fn zero() -> Self { Self::from_cols([Vector::zero(); C]) }

    /// Matrix with `value` on the leading diagonal and zero elsewhere.
    #[inline]
    pub fn diagonal(value: T) -> Self {
        Self::from_fn(|j, i| if i == j { value } else { T::zero() })
    }

    /// Identity matrix; for non-square shapes, ones on the leading diagonal.
    #[inline]
    pub fn identity() -> Self { Self::diagonal(T::one()) }

    /// Converts to another shape: the overlapping upper-left block is copied
    /// and the remaining elements are taken from the identity matrix.
    pub fn resize<const C2: usize, const R2: usize>(&self) -> Matrix<T, C2, R2> {
        Matrix::from_fn(|j, i| {
            if j < C && i < R {
                self.0[j].0[i]
            } else if i == j {
                T::one()
            } else {
                T::zero()
            }
        })
    }
}

impl<T: Numeric, const N: usize> Matrix<T, N, N> {
    /// Square matrix with `diagonal` on the leading diagonal and zero
    /// elsewhere.
    #[inline]
    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self {
        Self::from_fn(|j, i| if i == j { diagonal.0[i] } else { T::zero() })
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, k| acc.wrapped_add(self.0[k].0[k]))
    }
}

impl<T: Real, const C: usize, const R: usize> Matrix<T, C, R> {
    /// Returns true if all elements are finite.
    pub fn is_finite(&self) -> bool { self.0.iter().all(Vector::is_finite) }

    /// Returns true if any element is NaN.
    pub fn is_nan(&self) -> bool { self.0.iter().any(Vector::is_nan) }
}

impl<T: Numeric, const C: usize, const R: usize> Default for Matrix<T, C, R> {
    /// Identity matrix.
    fn default() -> Self { Self::identity() }
}

impl<T: Scalar + Eq, const C: usize, const R: usize> Eq for Matrix<T, C, R> {}

impl<T: Scalar, const C: usize, const R: usize> Hash for Matrix<T, C, R> {
    fn hash<H: Hasher>(&self, state: &mut H) { state.write_u64(self.hash_value()) }
}

impl<T, const C: usize, const R: usize> Index<usize> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    #[track_caller]
    fn index(&self, j: usize) -> &Vector<T, R> {
        assert!(j < C, "matrix column index out of range: {j} >= {C}");
        &self.0[j]
    }
}

impl<T, const C: usize, const R: usize> IndexMut<usize> for Matrix<T, C, R> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, j: usize) -> &mut Vector<T, R> {
        assert!(j < C, "matrix column index out of range: {j} >= {C}");
        &mut self.0[j]
    }
}

impl<T: Scalar, const C: usize, const R: usize> From<[[T; R]; C]> for Matrix<T, C, R> {
    #[inline]
    fn from(cols: [[T; R]; C]) -> Self { Self::from_cols_array(cols) }
}

impl<T: Scalar, const C: usize, const R: usize> From<[Vector<T, R>; C]> for Matrix<T, C, R> {
    #[inline]
    fn from(cols: [Vector<T, R>; C]) -> Self { Self::from_cols(cols) }
}

impl<T: Debug, const C: usize, const R: usize> Debug for Matrix<T, C, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Matrix{C}x{R}")?;
        f.debug_list().entries(self.0.iter().map(|col| &col.0)).finish()
    }
}

/// Formats the matrix row by row, one row per line.
impl<T: Scalar, const C: usize, const R: usize> Display for Matrix<T, C, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for i in 0..R {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for j in 0..C {
                if j > 0 {
                    write!(f, ", ")?;
                }
                Display::fmt(&self.0[j].0[i], f)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl<T, const C: usize, const R: usize> AbsDiffEq for Matrix<T, C, R>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const C: usize, const R: usize> RelativeEq for Matrix<T, C, R>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const C: usize, const R: usize> UlpsEq for Matrix<T, C, R>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
