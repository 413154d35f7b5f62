//! Named component aliases, alias-group access and conversions between
//! arities.
//!
//! Every alias is a pass-through to the single backing array: `x`, `r` and
//! `s` all read and write component 0, and so on.

use super::Vector;
use crate::scalar::{Numeric, Scalar};
use paste::paste;

macro_rules! component_aliases {
    ($n:literal: $($idx:literal => $($name:ident)+);+) => {
        paste! {
            impl<T: Scalar> Vector<T, $n> {
                $($(
                    #[doc = "Returns component " $idx " (`" $name "`)."]
                    #[inline]
                    pub fn $name(&self) -> T { self.0[$idx] }

                    #[doc = "Sets component " $idx " (`" $name "`)."]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, value: T) { self.0[$idx] = value; }

                    #[doc = "Returns a mutable reference to component " $idx " (`" $name "`)."]
                    #[inline]
                    pub fn [<$name _mut>](&mut self) -> &mut T { &mut self.0[$idx] }
                )+)+
            }
        }
    };
}

component_aliases!(2: 0 => x r s; 1 => y g t);
component_aliases!(3: 0 => x r s; 1 => y g t; 2 => z b p);
component_aliases!(4: 0 => x r s; 1 => y g t; 2 => z b p; 3 => w a q);

// Leading-component groups. A general permutation engine is deliberately not
// provided; reordering goes through `new`.
macro_rules! alias_groups {
    ($n:literal: $($m:literal => $($name:ident)+);+) => {
        paste! {
            impl<T: Scalar> Vector<T, $n> {
                $($(
                    #[doc = "Returns the leading " $m " components (`" $name "`)."]
                    #[inline]
                    pub fn $name(&self) -> Vector<T, $m> { Vector::from_fn(|i| self.0[i]) }

                    #[doc = "Overwrites the leading " $m " components (`" $name "`)."]
                    #[inline]
                    pub fn [<set_ $name>](&mut self, v: Vector<T, $m>) {
                        self.0[..$m].copy_from_slice(&v.0);
                    }
                )+)+
            }
        }
    };
}

alias_groups!(3: 2 => xy rg st);
alias_groups!(4: 2 => xy rg st; 3 => xyz rgb stp);

macro_rules! unit_axes {
    ($n:literal: $($idx:literal => $name:ident),+) => {
        impl<T: Numeric> Vector<T, $n> {
            $(
                paste! {
                    #[doc = "Unit vector along axis " $idx "."]
                    #[inline]
                    pub fn $name() -> Self {
                        let mut v = Self::zero();
                        v.0[$idx] = T::one();
                        v
                    }
                }
            )+
        }
    };
}

unit_axes!(2: 0 => x_axis, 1 => y_axis);
unit_axes!(3: 0 => x_axis, 1 => y_axis, 2 => z_axis);
unit_axes!(4: 0 => x_axis, 1 => y_axis, 2 => z_axis, 3 => w_axis);

impl<T: Scalar> Vector<T, 2> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T) -> Self { Self::from_array([x, y]) }

    /// Appends a third component.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> { Vector::<T, 3>::new(self.0[0], self.0[1], z) }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self { Self::from_array([x, y, z]) }

    /// Appends a fourth component.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector::<T, 4>::new(x, y, z, w)
    }

    /// Drops the last component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 2> { self.xy() }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a vector from its components.
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self { Self::from_array([x, y, z, w]) }

    /// Drops the last component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 3> { self.xyz() }
}

/// Creates a two-component vector.
#[inline]
pub fn vec2<T: Scalar>(x: T, y: T) -> Vector<T, 2> { Vector::<T, 2>::new(x, y) }

/// Creates a three-component vector.
#[inline]
pub fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector<T, 3> { Vector::<T, 3>::new(x, y, z) }

/// Creates a four-component vector.
#[inline]
pub fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector<T, 4> {
    Vector::<T, 4>::new(x, y, z, w)
}

impl<T: Scalar> From<Vector<T, 3>> for Vector<T, 2> {
    #[inline]
    fn from(v: Vector<T, 3>) -> Self { v.xy() }
}

impl<T: Scalar> From<Vector<T, 4>> for Vector<T, 2> {
    #[inline]
    fn from(v: Vector<T, 4>) -> Self { v.xy() }
}

impl<T: Scalar> From<Vector<T, 4>> for Vector<T, 3> {
    #[inline]
    fn from(v: Vector<T, 4>) -> Self { v.xyz() }
}

impl<T: Scalar> From<(Vector<T, 2>, T)> for Vector<T, 3> {
    #[inline]
    fn from((v, z): (Vector<T, 2>, T)) -> Self { Self::new(v.0[0], v.0[1], z) }
}

impl<T: Scalar> From<(T, Vector<T, 2>)> for Vector<T, 3> {
    #[inline]
    fn from((x, v): (T, Vector<T, 2>)) -> Self { Self::new(x, v.0[0], v.0[1]) }
}

impl<T: Scalar> From<(Vector<T, 3>, T)> for Vector<T, 4> {
    #[inline]
    fn from((v, w): (Vector<T, 3>, T)) -> Self { v.extend(w) }
}

impl<T: Scalar> From<(T, Vector<T, 3>)> for Vector<T, 4> {
    #[inline]
    fn from((x, v): (T, Vector<T, 3>)) -> Self { Self::new(x, v.0[0], v.0[1], v.0[2]) }
}

impl<T: Scalar> From<(Vector<T, 2>, T, T)> for Vector<T, 4> {
    #[inline]
    fn from((v, z, w): (Vector<T, 2>, T, T)) -> Self { Self::new(v.0[0], v.0[1], z, w) }
}

impl<T: Scalar> From<(T, Vector<T, 2>, T)> for Vector<T, 4> {
    #[inline]
    fn from((x, v, w): (T, Vector<T, 2>, T)) -> Self { Self::new(x, v.0[0], v.0[1], w) }
}

impl<T: Scalar> From<(T, T, Vector<T, 2>)> for Vector<T, 4> {
    #[inline]
    fn from((x, y, v): (T, T, Vector<T, 2>)) -> Self { Self::new(x, y, v.0[0], v.0[1]) }
}

impl<T: Scalar> From<(Vector<T, 2>, Vector<T, 2>)> for Vector<T, 4> {
    #[inline]
    fn from((a, b): (Vector<T, 2>, Vector<T, 2>)) -> Self {
        Self::new(a.0[0], a.0[1], b.0[0], b.0[1])
    }
}

#[cfg(test)]
mod tests {
    use crate::vector::*;

    #[test]
    fn alias_sets_never_diverge() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v.set_r(10.0);
        assert_eq!(v.x(), 10.0);
        assert_eq!(v.s(), 10.0);
        *v.t_mut() = 20.0;
        assert_eq!(v.y(), 20.0);
        assert_eq!(v.g(), 20.0);
        v.set_p(30.0);
        assert_eq!(v.b(), 30.0);
        assert_eq!(v[2], 30.0);
        *v.a_mut() += 1.0;
        assert_eq!(v.w(), 5.0);
        assert_eq!(v.q(), 5.0);
    }

    #[test]
    fn alias_groups() {
        let mut v = IVec4::new(1, 2, 3, 4);
        assert_eq!(v.xy(), IVec2::new(1, 2));
        assert_eq!(v.rgb(), IVec3::new(1, 2, 3));
        assert_eq!(v.stp(), v.xyz());
        v.set_rgb(IVec3::new(7, 8, 9));
        assert_eq!(v, IVec4::new(7, 8, 9, 4));
        v.set_st(IVec2::new(0, 0));
        assert_eq!(v, IVec4::new(0, 0, 9, 4));

        let mut u = BVec3::new(true, true, true);
        u.set_xy(BVec2::new(false, false));
        assert_eq!(u, BVec3::new(false, false, true));
    }

    #[test]
    fn truncation_drops_trailing_components() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec3::from(v), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec2::from(v), Vec2::new(1.0, 2.0));
        assert_eq!(Vec2::from(v.truncate()), v.truncate().truncate());
        assert_eq!(v.truncate(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn extension_appends_components() {
        let v2 = UVec2::new(1, 2);
        assert_eq!(v2.extend(3), UVec3::new(1, 2, 3));
        assert_eq!(UVec3::from((v2, 3)), UVec3::new(1, 2, 3));
        assert_eq!(UVec3::from((0, v2)), UVec3::new(0, 1, 2));

        let v3 = UVec3::new(1, 2, 3);
        assert_eq!(v3.extend(4), vec4(1, 2, 3, 4));
        assert_eq!(UVec4::from((v3, 4)), vec4(1, 2, 3, 4));
        assert_eq!(UVec4::from((0, v3)), vec4(0, 1, 2, 3));
        assert_eq!(UVec4::from((v2, 8, 9)), vec4(1, 2, 8, 9));
        assert_eq!(UVec4::from((8, v2, 9)), vec4(8, 1, 2, 9));
        assert_eq!(UVec4::from((8, 9, v2)), vec4(8, 9, 1, 2));
        assert_eq!(UVec4::from((v2, v2)), vec4(1, 2, 1, 2));
    }

    #[test]
    fn swizzle_round_trip_keeps_read_components() {
        let original = DVec4::new(0.5, -1.5, 2.5, 9.0);
        let rgb = original.rgb();
        let back = DVec4::from((rgb, 1.0));
        assert_eq!(back.xyz(), original.xyz());
        assert_eq!(back.w(), 1.0);
    }

    #[test]
    fn unit_axes() {
        assert_eq!(Vec2::x_axis(), vec2(1.0, 0.0));
        assert_eq!(IVec3::z_axis(), vec3(0, 0, 1));
        assert_eq!(UVec4::w_axis(), vec4(0, 0, 0, 1));
    }
}
