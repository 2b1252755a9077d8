//! A dense scalar voxel grid with a grid→world transform.

use crate::errors::FieldError;
use crate::float_types::{Real, tolerance};
use nalgebra::{Matrix4, Point3};

/// What the grid's values represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridClass {
    /// Signed distances to a surface.
    Sdf,
    /// Density values.
    #[default]
    Fog,
}

/// A dense `f32` voxel grid of `nx * ny * nz` cells.
///
/// Voxels are addressed by integer coordinates `[x, y, z]` and mapped into
/// world space through the grid transform (identity unless set). Cells start
/// at the background value; a cell counts as *active* once its value differs
/// from the background.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeGrid {
    dims: [usize; 3],
    background: f32,
    values: Vec<f32>,
    transform: Matrix4<Real>,
    pub name: String,
    pub class: GridClass,
}

impl VolumeGrid {
    /// Create a grid of the given dimensions filled with `background`.
    ///
    /// A zero dimension is rejected with [`FieldError::EmptyGrid`]; buffer
    /// allocation failure surfaces as [`FieldError::Allocation`].
    pub fn new(nx: usize, ny: usize, nz: usize, background: f32) -> Result<Self, FieldError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(FieldError::EmptyGrid);
        }

        let cell_count = nx * ny * nz;
        let mut values = Vec::new();
        values
            .try_reserve_exact(cell_count)
            .map_err(|_| FieldError::Allocation)?;
        values.resize(cell_count, background);

        Ok(VolumeGrid {
            dims: [nx, ny, nz],
            background,
            values,
            transform: Matrix4::identity(),
            name: String::new(),
            class: GridClass::default(),
        })
    }

    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub const fn background(&self) -> f32 {
        self.background
    }

    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// Replace the grid→world transform.
    pub fn set_transform(&mut self, transform: Matrix4<Real>) {
        self.transform = transform;
    }

    pub const fn transform(&self) -> &Matrix4<Real> {
        &self.transform
    }

    /// World-space position of a voxel coordinate under the grid transform.
    pub fn world_position(&self, coords: [usize; 3]) -> Point3<Real> {
        let grid_point = Point3::new(coords[0] as Real, coords[1] as Real, coords[2] as Real);
        self.transform.transform_point(&grid_point)
    }

    #[inline]
    fn linearize(&self, coords: [usize; 3]) -> Option<usize> {
        let [x, y, z] = coords;
        let [nx, ny, nz] = self.dims;
        if x >= nx || y >= ny || z >= nz {
            return None;
        }
        Some((z * ny + y) * nx + x)
    }

    #[inline]
    fn delinearize(&self, i: usize) -> [usize; 3] {
        let [nx, ny, _] = self.dims;
        let x = i % nx;
        let yz = i / nx;
        let y = yz % ny;
        let z = yz / ny;
        [x, y, z]
    }

    /// Read the voxel at `coords`.
    pub fn value(&self, coords: [usize; 3]) -> Result<f32, FieldError> {
        let i = self.linearize(coords).ok_or(FieldError::CoordsOutOfBounds {
            coords,
            dims: self.dims,
        })?;
        Ok(self.values[i])
    }

    /// Write the voxel at `coords`.
    pub fn set_value(&mut self, coords: [usize; 3], value: f32) -> Result<(), FieldError> {
        let i = self.linearize(coords).ok_or(FieldError::CoordsOutOfBounds {
            coords,
            dims: self.dims,
        })?;
        self.values[i] = value;
        Ok(())
    }

    /// Iterate over `(coords, value)` of every cell whose value differs from
    /// the background.
    pub fn active_voxels(&self) -> impl Iterator<Item = ([usize; 3], f32)> + '_ {
        let eps = tolerance() as f32;
        self.values
            .iter()
            .enumerate()
            .filter(move |(_, value)| (**value - self.background).abs() > eps)
            .map(|(i, value)| (self.delinearize(i), *value))
    }

    /// Fill the whole grid from a sampling function (wrap a
    /// [`Field`](crate::field::Field) in a closure to use one here).
    ///
    /// Integer coordinates are mapped into `[-1, +1]` per axis around the grid
    /// center, the function is evaluated there, and `(value - 0.5) * scale` is
    /// stored, putting a unit-range field into `[-scale/2, +scale/2]`.
    pub fn fill_from_field<F>(&mut self, field: &F, scale: Real)
    where
        F: Fn(&Point3<Real>) -> Real + Sync + Send,
    {
        let [nx, ny, nz] = self.dims;
        let half_x = (nx / 2).max(1) as Real;
        let half_y = (ny / 2).max(1) as Real;
        let half_z = (nz / 2).max(1) as Real;

        for (i, cell) in self.values.iter_mut().enumerate() {
            let x = i % nx;
            let yz = i / nx;
            let y = yz % ny;
            let z = yz / ny;

            let scaled_position = Point3::new(
                (x as Real - half_x) / half_x,
                (y as Real - half_y) / half_y,
                (z as Real - half_z) / half_z,
            );

            let field_value = field(&scaled_position);
            *cell = ((field_value - 0.5) * scale) as f32;
        }
    }
}
