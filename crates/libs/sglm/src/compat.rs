//! Optional integrations with the `serde` and `bytemuck` ecosystems.
//!
//! With the `serde` feature, vectors (de)serialize as N-tuples of their
//! components and matrices as C-tuples of their columns. With the
//! `bytemuck` feature, vectors and matrices of plain numeric kinds are
//! `Pod`, so they can be reinterpreted as byte buffers.

#[cfg(feature = "serde")]
mod serde_impls {
    use crate::{matrix::Matrix, scalar::Scalar, vector::Vector};
    use serde::{
        de::{self, SeqAccess, Visitor},
        ser::SerializeTuple,
        Deserialize, Deserializer, Serialize, Serializer,
    };
    use std::{fmt::Formatter, marker::PhantomData};

    impl<T: Scalar + Serialize, const N: usize> Serialize for Vector<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(N)?;
            for component in &self.0 {
                tuple.serialize_element(component)?;
            }
            tuple.end()
        }
    }

    impl<T: Scalar + Serialize, const C: usize, const R: usize> Serialize for Matrix<T, C, R> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut tuple = serializer.serialize_tuple(C)?;
            for col in &self.0 {
                tuple.serialize_element(col)?;
            }
            tuple.end()
        }
    }

    struct VectorVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T, const N: usize> Visitor<'de> for VectorVisitor<T, N>
    where
        T: Scalar + Deserialize<'de>,
    {
        type Value = Vector<T, N>;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            write!(formatter, "a tuple of {N} components")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut components = [T::default(); N];
            for (i, slot) in components.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            Ok(Vector::from_array(components))
        }
    }

    impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
    where
        T: Scalar + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, VectorVisitor::<T, N>(PhantomData))
        }
    }

    struct MatrixVisitor<T, const C: usize, const R: usize>(PhantomData<T>);

    impl<'de, T, const C: usize, const R: usize> Visitor<'de> for MatrixVisitor<T, C, R>
    where
        T: Scalar + Deserialize<'de>,
    {
        type Value = Matrix<T, C, R>;

        fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
            write!(formatter, "a tuple of {C} columns with {R} components each")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut cols = [Vector::<T, R>::default(); C];
            for (j, slot) in cols.iter_mut().enumerate() {
                *slot = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(j, &self))?;
            }
            Ok(Matrix::from_cols(cols))
        }
    }

    impl<'de, T, const C: usize, const R: usize> Deserialize<'de> for Matrix<T, C, R>
    where
        T: Scalar + Deserialize<'de>,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(C, MatrixVisitor::<T, C, R>(PhantomData))
        }
    }

    #[cfg(test)]
    mod tests {
        use crate::{matrix::*, vector::*};

        #[test]
        fn vectors_serialize_as_tuples() {
            let v = vec3(1.0f32, -2.5, 0.0);
            assert_eq!(serde_json::to_string(&v).unwrap(), "[1.0,-2.5,0.0]");
            let back: Vec3 = serde_json::from_str("[1.0,-2.5,0.0]").unwrap();
            assert_eq!(back, v);
            let b: BVec2 = serde_json::from_str("[true,false]").unwrap();
            assert_eq!(b, BVec2::new(true, false));
        }

        #[test]
        fn matrices_serialize_column_by_column() {
            let m = Matrix::<i32, 2, 3>::from_cols_array([[1, 2, 3], [4, 5, 6]]);
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, "[[1,2,3],[4,5,6]]");
            let back: Matrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
            assert_eq!(back, m);
        }

        #[test]
        fn short_input_is_rejected() {
            assert!(serde_json::from_str::<IVec4>("[1,2,3]").is_err());
            assert!(serde_json::from_str::<Mat2>("[[1.0,0.0]]").is_err());
        }
    }
}

#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use crate::{matrix::Matrix, vector::Vector};
    use bytemuck::{Pod, Zeroable};

    // SAFETY: `Vector` is a transparent wrapper around `[T; N]`, which is
    // zeroable and plain-old-data whenever `T` is.
    unsafe impl<T: Zeroable, const N: usize> Zeroable for Vector<T, N> {}
    unsafe impl<T: Pod, const N: usize> Pod for Vector<T, N> {}

    // SAFETY: `Matrix` is a transparent wrapper around `[Vector<T, R>; C]`.
    unsafe impl<T: Zeroable, const C: usize, const R: usize> Zeroable for Matrix<T, C, R> {}
    unsafe impl<T: Pod, const C: usize, const R: usize> Pod for Matrix<T, C, R> {}

}
