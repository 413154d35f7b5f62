//! # sglm
//! GLSL-style linear algebra.
//!
//! Fixed-size vectors ([`Vector`], 2 to 4 components of `bool`, `i32`,
//! `u32`, `f32` or `f64`) and column-major matrices ([`Matrix`], 2 to 4
//! columns and rows), the GLSL built-in functions, and the usual 3D
//! transform, projection and view builders.
//!
//! Projections follow the OpenGL conventions: right-handed by default with a
//! clip-space depth range of `[-1, 1]`.
//!
//! ```
//! use sglm::prelude::*;
//!
//! let model = translate(Mat4::identity(), vec3(0.0, 0.0, -5.0));
//! let view = look_at(vec3(0.0, 0.0, 1.0), Vec3::zero(), Vec3::y_axis());
//! let proj = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
//! let clip = proj * view * model * vec4(0.0, 0.0, 0.0, 1.0);
//! assert!(clip.w() > 0.0);
//! ```
#![warn(missing_docs)]

mod compat;
pub mod error;
pub mod func;
pub mod hash;
pub mod matrix;
pub mod projection;
pub mod scalar;
pub mod transform;
pub mod vector;
pub mod view;

pub use error::{MathError, Result};
pub use func::*;
pub use hash::HashKey;
pub use matrix::*;
pub use projection::*;
pub use scalar::{NumericCast, Numeric, Real, Scalar};
pub use transform::*;
pub use vector::*;
pub use view::*;

/// Commonly used types, traits and builders.
pub mod prelude {
    pub use crate::{
        matrix::{
            DMat2, DMat3, DMat4, Mat2, Mat2x3, Mat2x4, Mat3, Mat3x2, Mat3x4, Mat4, Mat4x2, Mat4x3,
            Matrix, SquareMatrix,
        },
        projection::{
            frustum, infinite_perspective, ortho, ortho_2d, perspective, perspective_fov,
            pick_matrix, project, unproject,
        },
        scalar::{NumericCast, Numeric, Real, Scalar},
        transform::{rotate, scale, translate},
        vector::{
            vec2, vec3, vec4, BVec2, BVec3, BVec4, DVec2, DVec3, DVec4, IVec2, IVec3, IVec4, UVec2,
            UVec3, UVec4, Vec2, Vec3, Vec4, Vector,
        },
        view::look_at,
    };
}
