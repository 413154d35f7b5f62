//! Component-wise operators.

use super::Vector;
use crate::scalar::{Numeric, Scalar};
use paste::paste;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Sub, SubAssign,
};

// Integer kinds wrap on overflow; see `Numeric`.
macro_rules! impl_arithmetic_ops {
    ($($trait:ident, $func:ident, $wrapped:ident);*) => {
        paste! {
            $(
                impl<T: Numeric, const N: usize> $trait for Vector<T, N> {
                    type Output = Self;

                    #[inline]
                    fn $func(self, rhs: Self) -> Self { self.zip_map(rhs, T::$wrapped) }
                }

                impl<T: Numeric, const N: usize> $trait<T> for Vector<T, N> {
                    type Output = Self;

                    #[inline]
                    fn $func(self, rhs: T) -> Self { self.map(|a| a.$wrapped(rhs)) }
                }

                impl<T: Numeric, const N: usize> [<$trait Assign>] for Vector<T, N> {
                    #[inline]
                    fn [<$func _assign>](&mut self, rhs: Self) {
                        *self = $trait::$func(*self, rhs);
                    }
                }

                impl<T: Numeric, const N: usize> [<$trait Assign>]<T> for Vector<T, N> {
                    #[inline]
                    fn [<$func _assign>](&mut self, rhs: T) {
                        *self = $trait::$func(*self, rhs);
                    }
                }
            )*
        }
    };
}

impl_arithmetic_ops! {
    Add, add, wrapped_add;
    Sub, sub, wrapped_sub;
    Mul, mul, wrapped_mul;
    Div, div, wrapped_div;
    Rem, rem, wrapped_rem
}

// Scalar on the left-hand side; needs one impl per concrete kind.
macro_rules! impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn add(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|a| self.wrapped_add(a))
                }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn sub(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|a| self.wrapped_sub(a))
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|a| self.wrapped_mul(a))
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn div(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs.map(|a| self.wrapped_div(a))
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(i32, u32, f32, f64);

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Numeric + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self { self.map(T::wrapped_neg) }
}

/// Logical not for boolean vectors, bitwise not for integer vectors.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Scalar + Not<Output = T>,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self { self.map(|a| !a) }
}

macro_rules! impl_bitwise_ops {
    ($($trait:ident, $func:ident, $op:tt);*) => {
        paste! {
            $(
                impl<T, const N: usize> $trait for Vector<T, N>
                where
                    T: Scalar + $trait<Output = T>,
                {
                    type Output = Self;

                    #[inline]
                    fn $func(self, rhs: Self) -> Self { self.zip_map(rhs, |a, b| a $op b) }
                }

                impl<T, const N: usize> [<$trait Assign>] for Vector<T, N>
                where
                    T: Scalar + $trait<Output = T>,
                {
                    #[inline]
                    fn [<$func _assign>](&mut self, rhs: Self) { *self = *self $op rhs; }
                }
            )*
        }
    };
}

impl_bitwise_ops! {
    BitAnd, bitand, &;
    BitOr, bitor, |;
    BitXor, bitxor, ^
}
