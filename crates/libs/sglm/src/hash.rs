//! Deterministic folding of component hashes.
//!
//! Vectors and matrices fold the [`hash_bits`](crate::Scalar::hash_bits) of
//! every component, in declared order, into one value. The result is stable
//! within a build but is not meant to be persisted.
//!
//! Floating point vectors and matrices are not `Eq`, so they cannot key a
//! `HashMap` directly; wrap them in a [`HashKey`] instead.

use crate::{matrix::Matrix, scalar::Scalar, vector::Vector};
use std::hash::{Hash, Hasher};

/// Initial seed used by [`hash_all`].
pub const HASH_SEED: u64 = 0xcbf2_9ce4_8422_2325;

/// Folds `value` into the running `seed`.
///
/// The fold is order-sensitive: combining `a` then `b` generally differs from
/// combining `b` then `a`.
#[inline]
pub const fn hash_combine(seed: u64, value: u64) -> u64 {
    seed ^ value
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

/// Folds all values, in iteration order, into a single hash starting from
/// [`HASH_SEED`].
#[inline]
pub fn hash_all<I>(values: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    values.into_iter().fold(HASH_SEED, hash_combine)
}

/// Map and set key wrapping a [`Vector`] or a [`Matrix`] of any kind.
///
/// Keys compare by the [`hash_bits`](Scalar::hash_bits) of their components,
/// which makes equality total and consistent with the hash: `-0.0` and
/// `+0.0` are the same key, and so are all NaNs.
#[derive(Clone, Copy, Debug, Default)]
pub struct HashKey<V>(pub V);

impl<V> HashKey<V> {
    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> V { self.0 }
}

impl<V> From<V> for HashKey<V> {
    #[inline]
    fn from(value: V) -> Self { Self(value) }
}

fn same_bits<'a, T: Scalar>(
    a: impl IntoIterator<Item = &'a T>,
    b: impl IntoIterator<Item = &'a T>,
) -> bool {
    a.into_iter()
        .zip(b)
        .all(|(x, y)| x.hash_bits() == y.hash_bits())
}

impl<T: Scalar, const N: usize> PartialEq for HashKey<Vector<T, N>> {
    fn eq(&self, other: &Self) -> bool { same_bits(&self.0 .0, &other.0 .0) }
}

impl<T: Scalar, const N: usize> Eq for HashKey<Vector<T, N>> {}

impl<T: Scalar, const N: usize> Hash for HashKey<Vector<T, N>> {
    fn hash<H: Hasher>(&self, state: &mut H) { state.write_u64(self.0.hash_value()) }
}

impl<T: Scalar, const C: usize, const R: usize> PartialEq for HashKey<Matrix<T, C, R>> {
    fn eq(&self, other: &Self) -> bool { same_bits(self.0.as_slice(), other.0.as_slice()) }
}

impl<T: Scalar, const C: usize, const R: usize> Eq for HashKey<Matrix<T, C, R>> {}

impl<T: Scalar, const C: usize, const R: usize> Hash for HashKey<Matrix<T, C, R>> {
    fn hash<H: Hasher>(&self, state: &mut H) { state.write_u64(self.0.hash_value()) }
}
