use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;
use sglm::prelude::*;
use sglm::{look_at_lh, try_pick_matrix, try_unproject, MathError};
use std::f64::consts::FRAC_PI_2;

fn dvec3(range: f64) -> impl Strategy<Value = DVec3> {
    prop::array::uniform3(-range..range).prop_map(DVec3::from_array)
}

fn invertible_dmat4() -> impl Strategy<Value = DMat4> {
    (dvec3(10.0), -3.0f64..3.0, dvec3(1.0), dvec3(1.0))
        .prop_filter("non-degenerate", |(_, _, axis, s)| {
            axis.length() > 0.1 && s.iter().all(|c| c.abs() > 0.1)
        })
        .prop_map(|(t, angle, axis, s)| {
            let m = translate(DMat4::identity(), t);
            let m = rotate(m, angle, axis);
            scale(m, s)
        })
}

proptest! {
    #[test]
    fn integer_addition_is_exactly_reversible(
        a in prop::array::uniform4(any::<i32>()),
        b in prop::array::uniform4(any::<i32>()),
        c in prop::array::uniform3(any::<u32>()),
    ) {
        let (v, w) = (IVec4::from_array(a), IVec4::from_array(b));
        prop_assert_eq!(v + w - w, v);
        prop_assert_eq!(v - w + w, v);
        let u = UVec3::from_array(c);
        prop_assert_eq!(u + UVec3::splat(u32::MAX) - UVec3::splat(u32::MAX), u);
    }

    #[test]
    fn inverse_undoes_affine_transforms(m in invertible_dmat4()) {
        assert_relative_eq!(m.inverse() * m, DMat4::identity(), epsilon = 1.0e-9);
        let m3: DMat3 = m.resize();
        assert_relative_eq!(m3.inverse() * m3, DMat3::identity(), epsilon = 1.0e-9);
        let m2: DMat2 = m.resize();
        if m2.determinant().abs() > 1.0e-3 {
            assert_relative_eq!(m2.inverse() * m2, DMat2::identity(), epsilon = 1.0e-9);
        }
    }

    #[test]
    fn translate_offsets_points(v in dvec3(100.0), p in dvec3(100.0)) {
        let moved = translate(DMat4::identity(), v) * p.extend(1.0);
        assert_relative_eq!(moved.truncate(), p + v, epsilon = 1.0e-9);
        prop_assert_eq!(moved.w(), 1.0);
    }

    #[test]
    fn look_at_moves_eye_to_origin(eye in dvec3(50.0), forward in dvec3(1.0)) {
        prop_assume!(forward.length() > 0.1);
        let up = DVec3::y_axis();
        prop_assume!(forward.normalize().cross(up).length() > 0.1);
        let origin = vec4(0.0, 0.0, 0.0, 1.0);
        let rh = look_at(eye, eye + forward, up) * eye.extend(1.0);
        assert_abs_diff_eq!(rh, origin, epsilon = 1.0e-9);
        let lh = look_at_lh(eye, eye + forward, up) * eye.extend(1.0);
        assert_abs_diff_eq!(lh, origin, epsilon = 1.0e-9);
    }

    #[test]
    fn unproject_inverts_project(
        x in -1.0f64..1.0,
        y in -1.0f64..1.0,
        depth in 1.0f64..20.0,
        model in invertible_dmat4(),
    ) {
        let viewport = vec4(0.0, 0.0, 1280.0, 720.0);
        let proj = perspective(FRAC_PI_2, 1280.0 / 720.0, 0.5, 100.0);
        // A point inside the view volume, expressed in object space.
        let eye_space = vec3(x * depth * 0.5, y * depth * 0.5, -depth);
        let obj = (model.inverse() * eye_space.extend(1.0)).truncate();

        let win = project(obj, model, proj, viewport);
        assert_abs_diff_eq!(unproject(win, model, proj, viewport), obj, epsilon = 1.0e-6);
        let checked = try_unproject(win, model, proj, viewport);
        prop_assert!(checked.is_ok());
    }
}

#[test]
fn ortho_reference_scenario() {
    let m = ortho(-1.0f32, 1.0, -1.0, 1.0, 0.1, 100.0);
    let p = m * vec4(0.0, 0.0, 0.0, 1.0);
    assert_eq!(p, vec4(0.0, 0.0, -(100.0 + 0.1) / (100.0 - 0.1), 1.0));
}

#[test]
fn perspective_reference_scenario() {
    let m = perspective(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
    let p = m * vec4(0.0, 0.0, -1.0, 1.0);
    assert_relative_eq!(p.z() / p.w(), -1.0, epsilon = 1.0e-6);
}

#[test]
fn model_view_projection_pipeline() {
    let model = rotate(Mat4::identity(), std::f32::consts::FRAC_PI_2, Vec3::y_axis());
    let view = look_at(vec3(0.0, 0.0, 5.0), Vec3::zero(), Vec3::y_axis());
    let proj = perspective(std::f32::consts::FRAC_PI_4, 1.0, 1.0, 10.0);
    let mvp = proj * view * model;

    // The rotation brings +x onto -z, towards the far side of the origin.
    let p = mvp * vec4(1.0, 0.0, 0.0, 1.0);
    let ndc = p.truncate() / p.w();
    assert_abs_diff_eq!(ndc.x(), 0.0, epsilon = 1.0e-6);
    assert_abs_diff_eq!(ndc.y(), 0.0, epsilon = 1.0e-6);
    let q = mvp * vec4(0.0, 0.0, 0.0, 1.0);
    assert!(ndc.z() > q.z() / q.w());
}

#[test]
fn degenerate_pick_region_is_logged_and_ignored() {
    let _ = env_logger::builder().is_test(true).try_init();
    let viewport = vec4(0.0f32, 0.0, 640.0, 480.0);
    assert_eq!(pick_matrix(vec2(10.0, 10.0), vec2(0.0, 0.0), viewport), Mat4::identity());
    assert!(matches!(
        try_pick_matrix(vec2(10.0, 10.0), vec2(-1.0, 2.0), viewport),
        Err(MathError::DegeneratePickRegion { .. })
    ));
}

#[test]
fn flat_buffers_are_column_major() {
    let m = translate(Mat4::identity(), vec3(7.0, 8.0, 9.0));
    assert_eq!(&m.as_slice()[12..], &[7.0, 8.0, 9.0, 1.0]);
    assert_eq!(m.to_cols_array()[3], [7.0, 8.0, 9.0, 1.0]);
}

#[test]
fn checked_operations_report_degenerate_input() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert_eq!(Vec3::zero().try_normalize(), Err(MathError::ZeroLength));
    assert!(Mat4::zero().try_inverse().is_err());
    assert_eq!(MathError::ZeroW.to_string(), "homogeneous coordinate w is zero");
}
