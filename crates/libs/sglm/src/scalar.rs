//! Element kinds that can be stored inside vectors and matrices.

use num_traits::{Float, FloatConst, Num};
use std::{
    fmt::{Debug, Display},
    ops::Neg,
};

/// Any type that can be a component of a [`Vector`](crate::Vector) or a
/// [`Matrix`](crate::Matrix): `bool`, `i32`, `u32`, `f32` and `f64`.
pub trait Scalar: Copy + Debug + Display + Default + PartialEq + Send + Sync + 'static {
    /// Returns a bit pattern of the value to be fed into the hash combinator.
    ///
    /// Values comparing equal produce the same pattern; for floating point
    /// kinds `-0.0` and `+0.0` map to the same bits and every NaN maps to a
    /// single canonical pattern.
    fn hash_bits(&self) -> u64;
}

/// Scalars supporting arithmetic.
///
/// The `wrapped_*` operations are what the vector and matrix operators use.
/// Integer kinds wrap around at their bounds, as GLSL integers do, in debug
/// and release builds alike. Division by zero still panics for integers.
pub trait Numeric: Scalar + Num + PartialOrd {
    /// `self + rhs`.
    #[inline(always)]
    fn wrapped_add(self, rhs: Self) -> Self { self + rhs }

    /// `self - rhs`.
    #[inline(always)]
    fn wrapped_sub(self, rhs: Self) -> Self { self - rhs }

    /// `self * rhs`.
    #[inline(always)]
    fn wrapped_mul(self, rhs: Self) -> Self { self * rhs }

    /// `self / rhs`; for integers `MIN / -1` is `MIN`.
    #[inline(always)]
    fn wrapped_div(self, rhs: Self) -> Self { self / rhs }

    /// `self % rhs`; for integers `MIN % -1` is `0`.
    #[inline(always)]
    fn wrapped_rem(self, rhs: Self) -> Self { self % rhs }

    /// `-self`; for integers `-MIN` is `MIN`.
    #[inline(always)]
    fn wrapped_neg(self) -> Self
    where
        Self: Neg<Output = Self>,
    {
        -self
    }

    /// Returns the smaller of the two values.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of the two values.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

/// Floating point scalars.
pub trait Real: Numeric + Float + FloatConst {
    /// Returns `2`.
    #[inline(always)]
    fn two() -> Self { Self::one() + Self::one() }

    /// Returns `0.5`.
    #[inline(always)]
    fn half() -> Self { Self::one() / Self::two() }
}

impl Scalar for bool {
    #[inline]
    fn hash_bits(&self) -> u64 { *self as u64 }
}

impl Scalar for i32 {
    #[inline]
    fn hash_bits(&self) -> u64 { *self as u32 as u64 }
}

impl Scalar for u32 {
    #[inline]
    fn hash_bits(&self) -> u64 { *self as u64 }
}

impl Scalar for f32 {
    #[inline]
    fn hash_bits(&self) -> u64 {
        if *self == 0.0 {
            0
        } else if self.is_nan() {
            f32::NAN.to_bits() as u64
        } else {
            self.to_bits() as u64
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn hash_bits(&self) -> u64 {
        if *self == 0.0 {
            0
        } else if self.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.to_bits()
        }
    }
}

macro_rules! impl_wrapping_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline(always)]
                fn wrapped_add(self, rhs: Self) -> Self { self.wrapping_add(rhs) }

                #[inline(always)]
                fn wrapped_sub(self, rhs: Self) -> Self { self.wrapping_sub(rhs) }

                #[inline(always)]
                fn wrapped_mul(self, rhs: Self) -> Self { self.wrapping_mul(rhs) }

                #[inline(always)]
                fn wrapped_div(self, rhs: Self) -> Self { self.wrapping_div(rhs) }

                #[inline(always)]
                fn wrapped_rem(self, rhs: Self) -> Self { self.wrapping_rem(rhs) }

                #[inline(always)]
                fn wrapped_neg(self) -> Self { self.wrapping_neg() }
            }
        )*
    };
}

impl_wrapping_numeric!(i32, u32);
impl Numeric for f32 {}
impl Numeric for f64 {}

impl Real for f32 {}
impl Real for f64 {}

/// Trait for converting from one scalar kind to another, following the
/// semantics of the `as` operator (and of GLSL constructors for `bool`).
pub trait NumericCast<T> {
    /// Casts `self` to `T`.
    fn cast(&self) -> T;
}

macro_rules! impl_numeric_cast {
    ($t0:ty as $($t1:ty),*) => {
        $(
            impl NumericCast<$t1> for $t0 {
                #[inline]
                fn cast(&self) -> $t1 { *self as $t1 }
            }
        )*
    };
}

impl_numeric_cast!(f32 as f32, f64, i32, u32);
impl_numeric_cast!(f64 as f32, f64, i32, u32);
impl_numeric_cast!(i32 as f32, f64, i32, u32);
impl_numeric_cast!(u32 as f32, f64, i32, u32);

macro_rules! impl_bool_cast {
    ($($t:ty: $zero:literal, $one:literal);*) => {
        $(
            impl NumericCast<$t> for bool {
                #[inline]
                fn cast(&self) -> $t { if *self { $one } else { $zero } }
            }

            impl NumericCast<bool> for $t {
                #[inline]
                fn cast(&self) -> bool { *self != $zero }
            }
        )*
    };
}

impl_bool_cast!(f32: 0.0, 1.0; f64: 0.0, 1.0; i32: 0, 1; u32: 0, 1);

impl NumericCast<bool> for bool {
    #[inline]
    fn cast(&self) -> bool { *self }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_zero_hashes_equal() {
        assert_eq!(0.0f32.hash_bits(), (-0.0f32).hash_bits());
        assert_eq!(0.0f64.hash_bits(), (-0.0f64).hash_bits());
        assert_ne!(1.0f32.hash_bits(), (-1.0f32).hash_bits());
    }

    #[test]
    fn nan_hashes_canonically() {
        let a = f32::NAN;
        let b = f32::from_bits(f32::NAN.to_bits() | 1);
        assert!(b.is_nan());
        assert_eq!(a.hash_bits(), b.hash_bits());
    }

    #[test]
    fn min_max_of() {
        assert_eq!(3i32.min_of(5), 3);
        assert_eq!(3u32.max_of(5), 5);
        assert_eq!((-1.5f32).min_of(0.5), -1.5);
        assert_eq!(2.0f64.max_of(-2.0), 2.0);
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(i32::MAX.wrapped_add(1), i32::MIN);
        assert_eq!(i32::MIN.wrapped_sub(1), i32::MAX);
        assert_eq!(0u32.wrapped_sub(1), u32::MAX);
        assert_eq!(i32::MAX.wrapped_mul(2), -2);
        assert_eq!(i32::MIN.wrapped_div(-1), i32::MIN);
        assert_eq!(i32::MIN.wrapped_rem(-1), 0);
        assert_eq!(i32::MIN.wrapped_neg(), i32::MIN);
        assert_eq!(1.5f32.wrapped_add(f32::MAX), f32::MAX);
        assert_eq!((-0.0f64).wrapped_neg().to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn real_constants() {
        assert_eq!(f32::two(), 2.0);
        assert_eq!(f64::half(), 0.5);
    }

    #[test]
    fn casting_follows_as_semantics() {
        assert_eq!(NumericCast::<i32>::cast(&2.75f32), 2);
        assert_eq!(NumericCast::<i32>::cast(&-2.75f64), -2);
        assert_eq!(NumericCast::<f32>::cast(&7u32), 7.0);
        assert_eq!(NumericCast::<u32>::cast(&-1i32), u32::MAX);
    }

    #[test]
    fn casting_to_and_from_bool() {
        assert!(NumericCast::<bool>::cast(&0.5f32));
        assert!(!NumericCast::<bool>::cast(&0i32));
        assert_eq!(NumericCast::<f64>::cast(&true), 1.0);
        assert_eq!(NumericCast::<u32>::cast(&false), 0);
    }
}
