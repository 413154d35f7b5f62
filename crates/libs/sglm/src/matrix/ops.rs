//! Matrix arithmetic: element-wise addition, scaling and the linear-algebra
//! products.

use super::Matrix;
use crate::{scalar::Numeric, vector::Vector};
use paste::paste;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_elementwise_ops {
    ($($trait:ident, $func:ident, $op:tt);*) => {
        paste! {
            $(
                impl<T: Numeric, const C: usize, const R: usize> $trait for Matrix<T, C, R> {
                    type Output = Self;

                    #[inline]
                    fn $func(self, rhs: Self) -> Self {
                        Self::from_cols(std::array::from_fn(|j| self.0[j] $op rhs.0[j]))
                    }
                }

                impl<T, const C: usize, const R: usize> [<$trait Assign>] for Matrix<T, C, R>
                where
                    T: Numeric,
                {
                    #[inline]
                    fn [<$func _assign>](&mut self, rhs: Self) { *self = *self $op rhs; }
                }
            )*
        }
    };
}

impl_elementwise_ops! {
    Add, add, +;
    Sub, sub, -
}

macro_rules! impl_scalar_ops {
    ($($trait:ident, $func:ident, $wrapped:ident);*) => {
        paste! {
            $(
                impl<T: Numeric, const C: usize, const R: usize> $trait<T> for Matrix<T, C, R> {
                    type Output = Self;

                    #[inline]
                    fn $func(self, rhs: T) -> Self { self.map(|e| e.$wrapped(rhs)) }
                }

                impl<T, const C: usize, const R: usize> [<$trait Assign>]<T> for Matrix<T, C, R>
                where
                    T: Numeric,
                {
                    #[inline]
                    fn [<$func _assign>](&mut self, rhs: T) { *self = $trait::$func(*self, rhs); }
                }
            )*
        }
    };
}

impl_scalar_ops! {
    Mul, mul, wrapped_mul;
    Div, div, wrapped_div
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const C: usize, const R: usize> Mul<Matrix<$t, C, R>> for $t {
                type Output = Matrix<$t, C, R>;

                #[inline]
                fn mul(self, rhs: Matrix<$t, C, R>) -> Matrix<$t, C, R> {
                    rhs.map(|e| self.wrapped_mul(e))
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i32, u32, f32, f64);

impl<T, const C: usize, const R: usize> Neg for Matrix<T, C, R>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self { self.map(T::wrapped_neg) }
}

/// Linear transform of a column vector.
impl<T: Numeric, const C: usize, const R: usize> Mul<Vector<T, C>> for Matrix<T, C, R> {
    type Output = Vector<T, R>;

    #[inline]
    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        self.0
            .iter()
            .zip(v.0.iter())
            .fold(Vector::<T, R>::zero(), |acc, (&col, &s)| acc + col * s)
    }
}

/// Row vector times matrix, i.e. `transpose(m) * v`.
impl<T: Numeric, const C: usize, const R: usize> Mul<Matrix<T, C, R>> for Vector<T, R> {
    type Output = Vector<T, C>;

    #[inline]
    fn mul(self, m: Matrix<T, C, R>) -> Vector<T, C> { Vector::from_fn(|j| self.dot(m.0[j])) }
}

/// Matrix product: `(C x R) * (K x C) = (K x R)`.
impl<T: Numeric, const C: usize, const R: usize, const K: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, C, R>
{
    type Output = Matrix<T, K, R>;

    #[inline]
    fn mul(self, rhs: Matrix<T, K, C>) -> Matrix<T, K, R> {
        Matrix::from_cols(rhs.0.map(|col| self * col))
    }
}

impl<T: Numeric, const C: usize, const R: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, C, R> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) { *self = *self * rhs; }
}
