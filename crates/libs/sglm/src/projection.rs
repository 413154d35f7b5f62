//! Projection matrices and window-space mapping.
//!
//! All projections target an OpenGL clip space with depth in `[-1, 1]`. The
//! unsuffixed builders are right-handed (the camera looks down `-z`) and
//! identical to their `_rh` forms; the `_lh` forms look down `+z`.

use crate::{
    error::{MathError, Result},
    matrix::{Matrix, SquareMatrix},
    scalar::Real,
    transform::{scale, translate},
    vector::Vector,
};

/// Orthographic projection for 2D drawing: [`ortho`] with `near = -1` and
/// `far = 1`.
pub fn ortho_2d<T: Real>(left: T, right: T, bottom: T, top: T) -> Matrix<T, 4, 4> {
    let mut result = Matrix::<T, 4, 4>::identity();
    result.0[0].0[0] = T::two() / (right - left);
    result.0[1].0[1] = T::two() / (top - bottom);
    result.0[2].0[2] = -T::one();
    result.0[3].0[0] = -(right + left) / (right - left);
    result.0[3].0[1] = -(top + bottom) / (top - bottom);
    result
}

/// Right-handed orthographic projection; see [`ortho_rh`].
#[inline]
pub fn ortho<T: Real>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix<T, 4, 4> {
    ortho_rh(left, right, bottom, top, near, far)
}

/// Left-handed orthographic projection mapping the box
/// `[left, right] x [bottom, top] x [near, far]` onto the clip cube.
pub fn ortho_lh<T: Real>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let mut result = ortho_2d(left, right, bottom, top);
    result.0[2].0[2] = T::two() / (far - near);
    result.0[3].0[2] = -(far + near) / (far - near);
    result
}

/// Right-handed orthographic projection; `near` and `far` are distances
/// along `-z`.
pub fn ortho_rh<T: Real>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let mut result = ortho_2d(left, right, bottom, top);
    result.0[2].0[2] = -T::two() / (far - near);
    result.0[3].0[2] = -(far + near) / (far - near);
    result
}

/// Right-handed perspective frustum; see [`frustum_rh`].
#[inline]
pub fn frustum<T: Real>(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Matrix<T, 4, 4> {
    frustum_rh(left, right, bottom, top, near, far)
}

/// Left-handed perspective frustum. The bounds describe the near plane.
pub fn frustum_lh<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let mut result = frustum_rh(left, right, bottom, top, near, far);
    for k in 0..4 {
        result.0[2].0[k] = -result.0[2].0[k];
    }
    result
}

/// Right-handed perspective frustum. The bounds describe the near plane.
pub fn frustum_rh<T: Real>(
    left: T,
    right: T,
    bottom: T,
    top: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let mut result = Matrix::<T, 4, 4>::zero();
    result.0[0].0[0] = T::two() * near / (right - left);
    result.0[1].0[1] = T::two() * near / (top - bottom);
    result.0[2].0[0] = (right + left) / (right - left);
    result.0[2].0[1] = (top + bottom) / (top - bottom);
    result.0[2].0[2] = -(far + near) / (far - near);
    result.0[2].0[3] = -T::one();
    result.0[3].0[2] = -(T::two() * far * near) / (far - near);
    result
}

/// Right-handed symmetric perspective; see [`perspective_rh`].
#[inline]
pub fn perspective<T: Real>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4> {
    perspective_rh(fovy, aspect, near, far)
}

/// Left-handed symmetric perspective projection.
pub fn perspective_lh<T: Real>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let mut result = perspective_rh(fovy, aspect, near, far);
    result.0[2].0[2] = -result.0[2].0[2];
    result.0[2].0[3] = T::one();
    result
}

/// Right-handed symmetric perspective projection.
///
/// `fovy` is the vertical field of view in radians and `aspect` is
/// width / height. A zero aspect or a zero `far - near` yields non-finite
/// elements.
pub fn perspective_rh<T: Real>(fovy: T, aspect: T, near: T, far: T) -> Matrix<T, 4, 4> {
    let tan_half_fovy = (fovy * T::half()).tan();
    let mut result = Matrix::<T, 4, 4>::zero();
    result.0[0].0[0] = T::one() / (aspect * tan_half_fovy);
    result.0[1].0[1] = T::one() / tan_half_fovy;
    result.0[2].0[2] = -(far + near) / (far - near);
    result.0[2].0[3] = -T::one();
    result.0[3].0[2] = -(T::two() * far * near) / (far - near);
    result
}

/// Right-handed perspective from a viewport size; see
/// [`perspective_fov_rh`].
#[inline]
pub fn perspective_fov<T: Real>(fov: T, width: T, height: T, near: T, far: T) -> Matrix<T, 4, 4> {
    perspective_fov_rh(fov, width, height, near, far)
}

/// Left-handed perspective from a vertical field of view and a viewport
/// size.
pub fn perspective_fov_lh<T: Real>(
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let mut result = perspective_fov_rh(fov, width, height, near, far);
    result.0[2].0[2] = -result.0[2].0[2];
    result.0[2].0[3] = T::one();
    result
}

/// Right-handed perspective from a vertical field of view and a viewport
/// size.
pub fn perspective_fov_rh<T: Real>(
    fov: T,
    width: T,
    height: T,
    near: T,
    far: T,
) -> Matrix<T, 4, 4> {
    let (sin, cos) = (fov * T::half()).sin_cos();
    let h = cos / sin;
    let w = h * height / width;
    let mut result = Matrix::<T, 4, 4>::zero();
    result.0[0].0[0] = w;
    result.0[1].0[1] = h;
    result.0[2].0[2] = -(far + near) / (far - near);
    result.0[2].0[3] = -T::one();
    result.0[3].0[2] = -(T::two() * far * near) / (far - near);
    result
}

/// Right-handed perspective with the far plane at infinity; see
/// [`infinite_perspective_rh`].
#[inline]
pub fn infinite_perspective<T: Real>(fovy: T, aspect: T, near: T) -> Matrix<T, 4, 4> {
    infinite_perspective_rh(fovy, aspect, near)
}

/// Left-handed perspective with the far plane at infinity.
pub fn infinite_perspective_lh<T: Real>(fovy: T, aspect: T, near: T) -> Matrix<T, 4, 4> {
    let mut result = infinite_perspective_rh(fovy, aspect, near);
    result.0[2].0[2] = T::one();
    result.0[2].0[3] = T::one();
    result
}

/// Right-handed perspective with the far plane at infinity: the limit of
/// [`perspective_rh`] as `far` grows without bound.
pub fn infinite_perspective_rh<T: Real>(fovy: T, aspect: T, near: T) -> Matrix<T, 4, 4> {
    let range = (fovy * T::half()).tan() * near;
    let (left, right) = (-range * aspect, range * aspect);
    let (bottom, top) = (-range, range);
    let mut result = Matrix::<T, 4, 4>::zero();
    result.0[0].0[0] = T::two() * near / (right - left);
    result.0[1].0[1] = T::two() * near / (top - bottom);
    result.0[2].0[2] = -T::one();
    result.0[2].0[3] = -T::one();
    result.0[3].0[2] = -T::two() * near;
    result
}

/// Maps object coordinates to window coordinates.
///
/// `viewport` is `(x, y, width, height)`. The returned depth is in `[0, 1]`
/// for points between the near and far planes.
pub fn project<T: Real>(
    obj: Vector<T, 3>,
    model: Matrix<T, 4, 4>,
    proj: Matrix<T, 4, 4>,
    viewport: Vector<T, 4>,
) -> Vector<T, 3> {
    let clip = proj * (model * obj.extend(T::one()));
    let ndc = clip / clip.0[3];
    let unit = ndc * T::half() + T::half();
    let [vx, vy, vw, vh] = viewport.0;
    Vector::<T, 3>::new(unit.0[0] * vw + vx, unit.0[1] * vh + vy, unit.0[2])
}

/// Inverse of [`project`]: maps window coordinates back to object
/// coordinates. A singular `proj * model` yields non-finite components.
pub fn unproject<T: Real>(
    win: Vector<T, 3>,
    model: Matrix<T, 4, 4>,
    proj: Matrix<T, 4, 4>,
    viewport: Vector<T, 4>,
) -> Vector<T, 3> {
    let obj = (proj * model).inverse() * window_to_ndc(win, viewport);
    (obj / obj.0[3]).truncate()
}

/// Checked [`unproject`]: fails when `proj * model` is singular or the
/// unprojected point lies at infinity.
pub fn try_unproject<T: Real>(
    win: Vector<T, 3>,
    model: Matrix<T, 4, 4>,
    proj: Matrix<T, 4, 4>,
    viewport: Vector<T, 4>,
) -> Result<Vector<T, 3>> {
    let inverse = (proj * model).try_inverse()?;
    let obj = inverse * window_to_ndc(win, viewport);
    if obj.0[3] == T::zero() {
        log::debug!("unprojected point {obj} has w = 0");
        return Err(MathError::ZeroW);
    }
    Ok((obj / obj.0[3]).truncate())
}

fn window_to_ndc<T: Real>(win: Vector<T, 3>, viewport: Vector<T, 4>) -> Vector<T, 4> {
    let [vx, vy, vw, vh] = viewport.0;
    let unit = Vector::<T, 4>::new((win.0[0] - vx) / vw, (win.0[1] - vy) / vh, win.0[2], T::one());
    unit * T::two() - T::one()
}

/// Picking region matrix: restricts drawing to a `delta`-sized region
/// centred on `center` (window coordinates) of `viewport`.
///
/// A non-positive region size is logged and answered with the identity.
pub fn pick_matrix<T: Real>(
    center: Vector<T, 2>,
    delta: Vector<T, 2>,
    viewport: Vector<T, 4>,
) -> Matrix<T, 4, 4> {
    if !(delta.0[0] > T::zero() && delta.0[1] > T::zero()) {
        log::warn!("pick region {delta} must have a positive size, returning identity");
        return Matrix::identity();
    }
    pick_region(center, delta, viewport)
}

/// Checked [`pick_matrix`]: fails on a non-positive region size.
pub fn try_pick_matrix<T: Real>(
    center: Vector<T, 2>,
    delta: Vector<T, 2>,
    viewport: Vector<T, 4>,
) -> Result<Matrix<T, 4, 4>> {
    if !(delta.0[0] > T::zero() && delta.0[1] > T::zero()) {
        log::debug!("rejecting pick region {delta}");
        return Err(MathError::DegeneratePickRegion {
            width: delta.0[0].to_f64().unwrap_or(f64::NAN),
            height: delta.0[1].to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(pick_region(center, delta, viewport))
}

fn pick_region<T: Real>(
    center: Vector<T, 2>,
    delta: Vector<T, 2>,
    viewport: Vector<T, 4>,
) -> Matrix<T, 4, 4> {
    let [vx, vy, vw, vh] = viewport.0;
    let [cx, cy] = center.0;
    let [dx, dy] = delta.0;
    let offset = Vector::<T, 3>::new(
        (vw - T::two() * (cx - vx)) / dx,
        (vh - T::two() * (cy - vy)) / dy,
        T::zero(),
    );
    let result = translate(Matrix::identity(), offset);
    scale(result, Vector::<T, 3>::new(vw / dx, vh / dy, T::one()))
}
