//! Camera (view) matrices.

use crate::{matrix::Matrix, scalar::Real, vector::Vector};

/// Right-handed look-at matrix; see [`look_at_rh`].
#[inline]
pub fn look_at<T: Real>(
    eye: Vector<T, 3>,
    center: Vector<T, 3>,
    up: Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    look_at_rh(eye, center, up)
}

/// Right-handed view matrix placing the camera at `eye`, looking at `center`
/// with `up` pointing upwards. The camera looks down its local `-z`.
///
/// `up` must not be parallel to `center - eye`.
pub fn look_at_rh<T: Real>(
    eye: Vector<T, 3>,
    center: Vector<T, 3>,
    up: Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    let f = (center - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);
    view_from_basis(s, u, -f, eye)
}

/// Left-handed view matrix; the camera looks down its local `+z`.
pub fn look_at_lh<T: Real>(
    eye: Vector<T, 3>,
    center: Vector<T, 3>,
    up: Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    let f = (center - eye).normalize();
    let s = up.cross(f).normalize();
    let u = f.cross(s);
    view_from_basis(s, u, f, eye)
}

/// Rows `s`, `u`, `z` of the rotation, followed by the translation of `eye`
/// to the origin.
fn view_from_basis<T: Real>(
    s: Vector<T, 3>,
    u: Vector<T, 3>,
    z: Vector<T, 3>,
    eye: Vector<T, 3>,
) -> Matrix<T, 4, 4> {
    let mut result = Matrix::<T, 4, 4>::identity();
    for k in 0..3 {
        result.0[k].0[0] = s.0[k];
        result.0[k].0[1] = u.0[k];
        result.0[k].0[2] = z.0[k];
    }
    result.0[3].0[0] = -s.dot(eye);
    result.0[3].0[1] = -u.dot(eye);
    result.0[3].0[2] = -z.dot(eye);
    result
}
