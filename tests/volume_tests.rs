mod support;

use fieldrs::{FieldError, GridClass, VolumeGrid, float_types::Real};
use nalgebra::{Matrix4, Point3};

use crate::support::approx_eq;

#[test]
fn voxel_roundtrip() {
    let mut grid = VolumeGrid::new(4, 5, 6, 0.0).unwrap();

    assert_eq!(grid.dims(), [4, 5, 6]);
    assert_eq!(grid.cell_count(), 120);
    assert_eq!(grid.value([1, 2, 3]).unwrap(), 0.0);

    grid.set_value([1, 2, 3], 2.5).unwrap();
    assert_eq!(grid.value([1, 2, 3]).unwrap(), 2.5);
    // neighbors untouched
    assert_eq!(grid.value([2, 2, 3]).unwrap(), 0.0);
    assert_eq!(grid.value([1, 3, 3]).unwrap(), 0.0);
}

#[test]
fn out_of_bounds_access_is_checked() {
    let mut grid = VolumeGrid::new(2, 2, 2, 0.0).unwrap();

    assert_eq!(
        grid.value([2, 0, 0]),
        Err(FieldError::CoordsOutOfBounds {
            coords: [2, 0, 0],
            dims: [2, 2, 2]
        })
    );
    assert!(grid.set_value([0, 5, 0], 1.0).is_err());
}

#[test]
fn zero_dimension_is_rejected() {
    assert_eq!(VolumeGrid::new(0, 4, 4, 0.0), Err(FieldError::EmptyGrid));
    assert_eq!(VolumeGrid::new(4, 0, 4, 0.0), Err(FieldError::EmptyGrid));
    assert_eq!(VolumeGrid::new(4, 4, 0, 0.0), Err(FieldError::EmptyGrid));
}

#[test]
fn active_voxels_are_exactly_the_written_cells() {
    let mut grid = VolumeGrid::new(8, 8, 8, 0.0).unwrap();
    grid.set_value([0, 0, 0], -1.0).unwrap();
    grid.set_value([1, 2, 3], 5.0).unwrap();
    // writing the background value does not activate a cell
    grid.set_value([4, 4, 4], 0.0).unwrap();

    let active: Vec<([usize; 3], f32)> = grid.active_voxels().collect();
    assert_eq!(active, vec![([0, 0, 0], -1.0), ([1, 2, 3], 5.0)]);
}

#[test]
fn world_positions_honor_the_grid_transform() {
    let mut grid = VolumeGrid::new(4, 4, 4, 0.0).unwrap();

    // identity by default
    assert_eq!(grid.world_position([1, 2, 3]), Point3::new(1.0, 2.0, 3.0));

    let scale: Matrix4<Real> = Matrix4::new_scaling(10.0);
    grid.set_transform(scale);
    assert_eq!(grid.world_position([1, 2, 3]), Point3::new(10.0, 20.0, 30.0));
}

#[test]
fn grid_metadata() {
    let mut grid = VolumeGrid::new(2, 2, 2, 0.0).unwrap();
    assert_eq!(grid.class, GridClass::Fog);

    grid.class = GridClass::Sdf;
    grid.name = "example grid".to_string();
    assert_eq!(grid.class, GridClass::Sdf);
    assert_eq!(grid.name, "example grid");
    assert_eq!(grid.background(), 0.0);
}

#[test]
fn fill_from_constant_field_centers_and_scales() {
    let mut grid = VolumeGrid::new(10, 10, 10, 0.0).unwrap();
    let constant = |_: &Point3<Real>| 1.0;

    grid.fill_from_field(&constant, 25.0);

    // (1.0 - 0.5) * 25 everywhere
    for ([_, _, _], value) in grid.active_voxels() {
        assert!(approx_eq(value as Real, 12.5, 1e-6));
    }
    assert_eq!(grid.active_voxels().count(), 1000);
}

#[test]
fn fill_from_field_samples_normalized_coordinates() {
    let mut grid = VolumeGrid::new(10, 10, 10, 0.0).unwrap();
    // record the x coordinate the field is evaluated at
    let x_ramp = |p: &Point3<Real>| p.x;

    grid.fill_from_field(&x_ramp, 2.0);

    // voxel x=0 maps to -1.0, the center voxel to 0.0
    let low = grid.value([0, 5, 5]).unwrap() as Real;
    let mid = grid.value([5, 5, 5]).unwrap() as Real;
    assert!(approx_eq(low, (-1.0 - 0.5) * 2.0, 1e-6));
    assert!(approx_eq(mid, (0.0 - 0.5) * 2.0, 1e-6));
}
