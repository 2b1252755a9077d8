mod support;

use fieldrs::{InstanceArray, color::hsv_to_rgb, float_types::Real};
use nalgebra::{Matrix4, Translation3};

use crate::support::approx_eq;

#[test]
fn linear_distribution_spaces_instances_along_x() {
    let instances = InstanceArray::linear_distribution(100, 300.0);

    assert_eq!(instances.len(), 100);
    assert_eq!(instances.matrices().len(), instances.colors().len());

    let expected: Matrix4<Real> = Translation3::new(3000.0, 0.0, 0.0).to_homogeneous();
    assert_eq!(instances.matrix(10), Some(&expected));
    assert_eq!(
        instances.matrix(0),
        Some(&Translation3::new(0.0, 0.0, 0.0).to_homogeneous())
    );
    assert_eq!(instances.matrix(100), None);
}

#[test]
fn linear_distribution_runs_a_hue_ramp() {
    let instances = InstanceArray::linear_distribution(100, 10.0);

    // hue 0 is red
    let first = instances.color(0).unwrap();
    assert!(approx_eq(first[0], 1.0, 1e-9));
    assert!(approx_eq(first[1], 0.0, 1e-9));
    assert!(approx_eq(first[2], 0.0, 1e-9));

    // halfway around the wheel is cyan
    let mid = instances.color(50).unwrap();
    assert!(approx_eq(mid[0], 0.0, 1e-9));
    assert!(approx_eq(mid[1], 1.0, 1e-9));
    assert!(approx_eq(mid[2], 1.0, 1e-9));
}

#[test]
fn push_keeps_arrays_parallel() {
    let mut instances = InstanceArray::new();
    assert!(instances.is_empty());

    instances.push(Matrix4::identity(), [0.5, 0.5, 0.5]);
    instances.push(
        Translation3::new(1.0, 2.0, 3.0).to_homogeneous(),
        [1.0, 0.0, 0.0],
    );

    assert_eq!(instances.len(), 2);
    assert_eq!(instances.matrices().len(), 2);
    assert_eq!(instances.colors().len(), 2);
    assert_eq!(instances.color(1), Some(&[1.0, 0.0, 0.0]));
}

#[test]
fn hsv_primaries() {
    let eps = 1e-9;

    let red = hsv_to_rgb(0.0, 1.0, 1.0);
    assert!(approx_eq(red[0], 1.0, eps) && approx_eq(red[1], 0.0, eps) && approx_eq(red[2], 0.0, eps));

    let green = hsv_to_rgb(1.0 / 3.0, 1.0, 1.0);
    assert!(approx_eq(green[0], 0.0, eps) && approx_eq(green[1], 1.0, eps) && approx_eq(green[2], 0.0, eps));

    let blue = hsv_to_rgb(2.0 / 3.0, 1.0, 1.0);
    assert!(approx_eq(blue[0], 0.0, eps) && approx_eq(blue[1], 0.0, eps) && approx_eq(blue[2], 1.0, eps));
}

#[test]
fn hsv_hue_wraps_and_desaturates() {
    let wrapped = hsv_to_rgb(1.25, 1.0, 1.0);
    let plain = hsv_to_rgb(0.25, 1.0, 1.0);
    assert_eq!(wrapped, plain);

    // zero saturation is a gray of the given value
    let gray = hsv_to_rgb(0.8, 0.0, 0.4);
    assert!(approx_eq(gray[0], 0.4, 1e-12));
    assert!(approx_eq(gray[1], 0.4, 1e-12));
    assert!(approx_eq(gray[2], 0.4, 1e-12));
}
