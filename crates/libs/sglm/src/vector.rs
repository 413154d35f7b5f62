//! Fixed-arity vectors over boolean, integer and floating point components.

mod access;
mod ops;

pub use access::*;

use crate::{
    error::{MathError, Result},
    hash,
    scalar::{NumericCast, Numeric, Real, Scalar},
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{
    fmt::{Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
};

/// Vector of `N` components of kind `T`, with `N` one of 2, 3 or 4.
///
/// The components are stored contiguously; the positional (`x y z w`),
/// color (`r g b a`) and texture (`s t p q`) accessors as well as indexing
/// all address the same storage.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

/// Two-component vector of any scalar kind.
pub type Vector2<T> = Vector<T, 2>;
/// Three-component vector of any scalar kind.
pub type Vector3<T> = Vector<T, 3>;
/// Four-component vector of any scalar kind.
pub type Vector4<T> = Vector<T, 4>;

/// Single precision floating point vectors.
pub type Vec2 = Vector<f32, 2>;
/// Single precision floating point vectors.
pub type Vec3 = Vector<f32, 3>;
/// Single precision floating point vectors.
pub type Vec4 = Vector<f32, 4>;
/// Double precision floating point vectors.
pub type DVec2 = Vector<f64, 2>;
/// Double precision floating point vectors.
pub type DVec3 = Vector<f64, 3>;
/// Double precision floating point vectors.
pub type DVec4 = Vector<f64, 4>;
/// Signed integer vectors.
pub type IVec2 = Vector<i32, 2>;
/// Signed integer vectors.
pub type IVec3 = Vector<i32, 3>;
/// Signed integer vectors.
pub type IVec4 = Vector<i32, 4>;
/// Unsigned integer vectors.
pub type UVec2 = Vector<u32, 2>;
/// Unsigned integer vectors.
pub type UVec3 = Vector<u32, 3>;
/// Unsigned integer vectors.
pub type UVec4 = Vector<u32, 4>;
/// Boolean vectors.
pub type BVec2 = Vector<bool, 2>;
/// Boolean vectors.
pub type BVec3 = Vector<bool, 3>;
/// Boolean vectors.
pub type BVec4 = Vector<bool, 4>;

static_assertions::assert_eq_size!(Vec3, [f32; 3]);
static_assertions::assert_eq_size!(DVec4, [f64; 4]);
static_assertions::assert_eq_align!(IVec2, i32);

impl<T: Scalar, const N: usize> Vector<T, N> {
    const ARITY: () = assert!(N >= 2 && N <= 4, "vectors have 2, 3 or 4 components");

    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components.
    #[inline]
    pub fn from_array(components: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ARITY;
        Self(components)
    }

    /// Creates a vector with all components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self::from_array([value; N]) }

    /// Creates a vector by calling `f` with the index of each component.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self { Self::from_array(std::array::from_fn(f)) }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; N] { self.0 }

    /// Returns a reference to the underlying array.
    #[inline]
    pub fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.0 }

    /// Returns the components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.0 }

    /// Returns an iterator over the components.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Returns the component at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> { self.0.get(index).copied() }

    /// Returns a mutable reference to the component at `index`, or `None` if
    /// out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.0.get_mut(index) }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U: Scalar, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::from_array(self.0.map(f))
    }

    /// Applies `f` to every pair of components of `self` and `other`.
    #[inline]
    pub fn zip_map<U, V, F>(self, other: Vector<U, N>, mut f: F) -> Vector<V, N>
    where
        U: Scalar,
        V: Scalar,
        F: FnMut(T, U) -> V,
    {
        Vector::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Converts every component to another scalar kind with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: NumericCast<U>,
        U: Scalar,
    {
        self.map(|c| c.cast())
    }

    /// Component-wise `==`.
    #[inline]
    pub fn cmpeq(self, other: Self) -> Vector<bool, N> { self.zip_map(other, |a, b| a == b) }

    /// Component-wise `!=`.
    #[inline]
    pub fn cmpne(self, other: Self) -> Vector<bool, N> { self.zip_map(other, |a, b| a != b) }

    /// Hash of all components folded in declared order.
    pub fn hash_value(&self) -> u64 { hash::hash_all(self.0.iter().map(Scalar::hash_bits)) }
}

impl<T: Numeric, const N: usize> Vector<T, N> {
    /// Vector with all components set to zero.
    #[inline]
    pub fn zero() -> Self { Self::splat(T::zero()) }

    /// Vector with all components set to one.
    #[inline]
    pub fn one() -> Self { Self::splat(T::one()) }

    /// Dot product.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.wrapped_add(a.wrapped_mul(b)))
    }

    /// Squared Euclidean length.
    #[inline]
    pub fn length_squared(self) -> T { self.dot(self) }

    /// Sum of all components.
    #[inline]
    pub fn element_sum(self) -> T { self.0.iter().fold(T::zero(), |acc, &c| acc.wrapped_add(c)) }

    /// Product of all components.
    #[inline]
    pub fn element_product(self) -> T {
        self.0.iter().fold(T::one(), |acc, &c| acc.wrapped_mul(c))
    }

    /// Smallest component.
    pub fn min_element(self) -> T { self.0[1..].iter().fold(self.0[0], |acc, &c| acc.min_of(c)) }

    /// Largest component.
    pub fn max_element(self) -> T { self.0[1..].iter().fold(self.0[0], |acc, &c| acc.max_of(c)) }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self { self.zip_map(other, T::min_of) }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self { self.zip_map(other, T::max_of) }

    /// Component-wise clamp of `self` into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self { self.max(min).min(max) }

    /// Component-wise `<`.
    #[inline]
    pub fn cmplt(self, other: Self) -> Vector<bool, N> { self.zip_map(other, |a, b| a < b) }

    /// Component-wise `<=`.
    #[inline]
    pub fn cmple(self, other: Self) -> Vector<bool, N> { self.zip_map(other, |a, b| a <= b) }

    /// Component-wise `>`.
    #[inline]
    pub fn cmpgt(self, other: Self) -> Vector<bool, N> { self.zip_map(other, |a, b| a > b) }

    /// Component-wise `>=`.
    #[inline]
    pub fn cmpge(self, other: Self) -> Vector<bool, N> { self.zip_map(other, |a, b| a >= b) }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Euclidean length.
    #[inline]
    pub fn length(self) -> T { self.length_squared().sqrt() }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> T { (self - other).length() }

    /// Returns the vector scaled to unit length.
    ///
    /// A zero-length vector is not guarded against: the result has NaN
    /// components. Use [`Vector::try_normalize`] to detect that case.
    #[inline]
    pub fn normalize(self) -> Self { self / self.length() }

    /// Returns the vector scaled to unit length, or an error if its length
    /// is zero or not finite.
    pub fn try_normalize(self) -> Result<Self> {
        let length = self.length();
        if length == T::zero() || !length.is_finite() {
            log::debug!("refusing to normalize {:?} of length {}", self, length);
            return Err(MathError::ZeroLength);
        }
        Ok(self / length)
    }

    /// Linear interpolation between `self` (at `t = 0`) and `other` (at
    /// `t = 1`).
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self { self * (T::one() - t) + other * t }

    /// Returns true if all components are finite.
    pub fn is_finite(&self) -> bool { self.0.iter().all(|c| c.is_finite()) }

    /// Returns true if any component is NaN.
    pub fn is_nan(&self) -> bool { self.0.iter().any(|c| c.is_nan()) }
}

impl<T: Real> Vector<T, 3> {
    /// Cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self::new(ay * bz - by * az, az * bx - bz * ax, ax * by - bx * ay)
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns true if any component is true.
    #[inline]
    pub fn any(self) -> bool { self.0.iter().any(|&c| c) }

    /// Returns true if all components are true.
    #[inline]
    pub fn all(self) -> bool { self.0.iter().all(|&c| c) }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::splat(T::default()) }
}

impl<T: Scalar + Eq, const N: usize> Eq for Vector<T, N> {}

impl<T: Scalar, const N: usize> Hash for Vector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) { state.write_u64(self.hash_value()) }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        assert!(index < N, "vector index out of range: {index} >= {N}");
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < N, "vector index out of range: {index} >= {N}");
        &mut self.0[index]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(components: [T; N]) -> Self { Self::from_array(components) }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<T: Debug, const N: usize> Debug for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector{N}")?;
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Display, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            Display::fmt(c, f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
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

impl<T, const N: usize> RelativeEq for Vector<T, N>
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

impl<T, const N: usize> UlpsEq for Vector<T, N>
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
