//! Scalar field sources sampled by the marching cubes traversal.
//!
//! # Sampling Contract
//!
//! ```text
//! sample_dims() = [nx, ny, nz]        lattice points per axis
//! sample(x, y, z)                     valid for x < nx, y < ny, z < nz
//!
//! nz ┌──────────────┐
//!    │ z-slab  nz-1 │   stored [z][y][x], X innermost:
//!    ├──────────────┤   index = (z * ny + y) * nx + x
//!    │      ...     │
//!    ├──────────────┤
//!    │ z-slab     0 │
//!  0 └──────────────┘
//! ```
//!
//! Sources must be pure for the duration of one traversal; the sharded
//! traversal samples them from several threads at once.

use rayon::prelude::*;

use crate::config::GridDimensions;
use crate::constants::lattice_index;
use crate::error::FieldError;

/// Supplier of density values at integer lattice coordinates.
pub trait ScalarFieldSource: Send + Sync {
  /// Lattice sample count per axis.
  fn sample_dims(&self) -> [usize; 3];

  /// Density at a lattice point. Only called with in-bounds coordinates.
  fn sample(&self, x: usize, y: usize, z: usize) -> f32;
}

/// Dense, fully materialised field.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
  dims: [usize; 3],
  data: Vec<f32>,
}

impl ScalarField {
  /// Wrap a flat `[z][y][x]` sample buffer.
  pub fn new(dims: [usize; 3], data: Vec<f32>) -> Result<Self, FieldError> {
    let expected = dims[0] * dims[1] * dims[2];
    if data.len() != expected {
      return Err(FieldError::LengthMismatch {
        expected,
        actual: data.len(),
      });
    }
    Ok(Self { dims, data })
  }

  /// Wrap a buffer whose length is known to match `dims`.
  pub(crate) fn from_parts(dims: [usize; 3], data: Vec<f32>) -> Self {
    debug_assert_eq!(data.len(), dims[0] * dims[1] * dims[2]);
    Self { dims, data }
  }

  /// Build from a nested `[z][y][x]` array, rejecting ragged input.
  pub fn from_nested(nested: Vec<Vec<Vec<f32>>>) -> Result<Self, FieldError> {
    let nz = nested.len();
    let ny = nested.first().map_or(0, Vec::len);
    let nx = nested
      .first()
      .and_then(|slab| slab.first())
      .map_or(0, Vec::len);

    let mut data = Vec::with_capacity(nx * ny * nz);
    for (z, slab) in nested.into_iter().enumerate() {
      if slab.len() != ny {
        return Err(FieldError::Ragged {
          axis: "y",
          index: z,
          expected: ny,
          actual: slab.len(),
        });
      }
      for (y, row) in slab.into_iter().enumerate() {
        if row.len() != nx {
          return Err(FieldError::Ragged {
            axis: "x",
            index: z * ny + y,
            expected: nx,
            actual: row.len(),
          });
        }
        data.extend(row);
      }
    }

    Ok(Self {
      dims: [nx, ny, nz],
      data,
    })
  }

  /// Evaluate `f(x, y, z)` at every lattice point.
  pub fn from_fn(dims: [usize; 3], f: impl Fn(usize, usize, usize) -> f32) -> Self {
    let mut data = Vec::with_capacity(dims[0] * dims[1] * dims[2]);
    for z in 0..dims[2] {
      for y in 0..dims[1] {
        for x in 0..dims[0] {
          data.push(f(x, y, z));
        }
      }
    }
    Self { dims, data }
  }

  /// Field sampled on the lattice of a voxel grid.
  pub fn for_grid(grid: GridDimensions, f: impl Fn(usize, usize, usize) -> f32) -> Self {
    Self::from_fn(grid.sample_dims(), f)
  }

  pub fn filled(dims: [usize; 3], value: f32) -> Self {
    Self {
      dims,
      data: vec![value; dims[0] * dims[1] * dims[2]],
    }
  }

  /// Copy any source into a dense buffer, one z-slab per rayon task.
  pub fn materialize<S: ScalarFieldSource + ?Sized>(source: &S) -> Self {
    let dims = source.sample_dims();
    let slab_len = dims[0] * dims[1];
    let mut data = vec![0.0; slab_len * dims[2]];

    if !data.is_empty() {
      data
        .par_chunks_mut(slab_len)
        .enumerate()
        .for_each(|(z, slab)| {
          for y in 0..dims[1] {
            for x in 0..dims[0] {
              slab[y * dims[0] + x] = source.sample(x, y, z);
            }
          }
        });
    }

    Self { dims, data }
  }

  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  pub fn as_slice(&self) -> &[f32] {
    &self.data
  }

  #[inline]
  pub fn contains(&self, x: usize, y: usize, z: usize) -> bool {
    x < self.dims[0] && y < self.dims[1] && z < self.dims[2]
  }

  pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f32> {
    self
      .contains(x, y, z)
      .then(|| self.data[lattice_index(x, y, z, self.dims)])
  }

  /// Overwrite one sample. Returns false when out of bounds.
  pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) -> bool {
    if !self.contains(x, y, z) {
      return false;
    }
    self.data[lattice_index(x, y, z, self.dims)] = value;
    true
  }

  /// Negate every sample in place.
  pub fn negate(&mut self) {
    for value in &mut self.data {
      *value = -*value;
    }
  }
}

impl ScalarFieldSource for ScalarField {
  fn sample_dims(&self) -> [usize; 3] {
    self.dims
  }

  #[inline]
  fn sample(&self, x: usize, y: usize, z: usize) -> f32 {
    self.data[lattice_index(x, y, z, self.dims)]
  }
}

/// Closure-backed source, evaluated lazily on every sample.
pub struct FnField<F> {
  dims: [usize; 3],
  f: F,
}

impl<F> FnField<F>
where
  F: Fn(usize, usize, usize) -> f32 + Send + Sync,
{
  pub fn new(dims: [usize; 3], f: F) -> Self {
    Self { dims, f }
  }
}

impl<F> ScalarFieldSource for FnField<F>
where
  F: Fn(usize, usize, usize) -> f32 + Send + Sync,
{
  fn sample_dims(&self) -> [usize; 3] {
    self.dims
  }

  #[inline]
  fn sample(&self, x: usize, y: usize, z: usize) -> f32 {
    (self.f)(x, y, z)
  }
}

/// World axis a height value is measured along.
///
/// The lattice spans the two remaining axes in ascending order: columns run
/// along the lower axis, rows along the higher one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightAxis {
  #[default]
  X,
  Y,
  Z,
}

impl HeightAxis {
  /// World position of a height sample. `col` and `row` are lattice
  /// positions already scaled to world units.
  #[inline]
  pub fn place(self, height: f32, col: f32, row: f32) -> [f32; 3] {
    match self {
      HeightAxis::X => [height, col, row],
      HeightAxis::Y => [col, height, row],
      HeightAxis::Z => [col, row, height],
    }
  }

  /// Split a 3D point into `(height, col, row)`.
  #[inline]
  pub fn split<T: Copy>(self, p: [T; 3]) -> (T, T, T) {
    match self {
      HeightAxis::X => (p[0], p[1], p[2]),
      HeightAxis::Y => (p[1], p[0], p[2]),
      HeightAxis::Z => (p[2], p[0], p[1]),
    }
  }
}

/// 2D height samples indexed `[row][col]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeightField {
  rows: usize,
  cols: usize,
  heights: Vec<f32>,
}

impl HeightField {
  /// Wrap a flat row-major buffer.
  pub fn new(rows: usize, cols: usize, heights: Vec<f32>) -> Result<Self, FieldError> {
    if heights.len() != rows * cols {
      return Err(FieldError::LengthMismatch {
        expected: rows * cols,
        actual: heights.len(),
      });
    }
    Ok(Self {
      rows,
      cols,
      heights,
    })
  }

  /// Wrap a buffer whose length is known to be `rows * cols`.
  pub(crate) fn from_parts(rows: usize, cols: usize, heights: Vec<f32>) -> Self {
    debug_assert_eq!(heights.len(), rows * cols);
    Self {
      rows,
      cols,
      heights,
    }
  }

  /// Build from nested rows, rejecting ragged input.
  pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, FieldError> {
    let cols = rows.first().map_or(0, Vec::len);
    if cols == 0 && !rows.is_empty() {
      return Err(FieldError::EmptyHeightField);
    }

    let row_count = rows.len();
    let mut heights = Vec::with_capacity(row_count * cols);
    for (index, row) in rows.into_iter().enumerate() {
      if row.len() != cols {
        return Err(FieldError::Ragged {
          axis: "col",
          index,
          expected: cols,
          actual: row.len(),
        });
      }
      heights.extend(row);
    }

    Ok(Self {
      rows: row_count,
      cols,
      heights,
    })
  }

  pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f32) -> Self {
    let mut heights = Vec::with_capacity(rows * cols);
    for row in 0..rows {
      for col in 0..cols {
        heights.push(f(row, col));
      }
    }
    Self {
      rows,
      cols,
      heights,
    }
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  pub fn as_slice(&self) -> &[f32] {
    &self.heights
  }

  pub fn get(&self, row: usize, col: usize) -> Option<f32> {
    (row < self.rows && col < self.cols).then(|| self.heights[row * self.cols + col])
  }

  /// Unchecked-by-contract access for callers iterating within bounds.
  #[inline]
  pub(crate) fn at(&self, row: usize, col: usize) -> f32 {
    self.heights[row * self.cols + col]
  }

  /// Largest sample, or `None` for an empty field.
  pub fn max_height(&self) -> Option<f32> {
    self.heights.iter().copied().reduce(f32::max)
  }
}

/// Presents a height field as a 3D density so the marching cubes traversal
/// can mesh terrain: `density = axis_coordinate - height`, negative (inside)
/// below the surface.
pub struct HeightFieldVolume<'a> {
  heights: &'a HeightField,
  axis: HeightAxis,
  depth: usize,
}

impl<'a> HeightFieldVolume<'a> {
  /// `depth` is the lattice sample count along `axis`.
  pub fn new(heights: &'a HeightField, axis: HeightAxis, depth: usize) -> Self {
    Self {
      heights,
      axis,
      depth,
    }
  }
}

impl ScalarFieldSource for HeightFieldVolume<'_> {
  fn sample_dims(&self) -> [usize; 3] {
    let (cols, rows) = (self.heights.cols(), self.heights.rows());
    match self.axis {
      HeightAxis::X => [self.depth, cols, rows],
      HeightAxis::Y => [cols, self.depth, rows],
      HeightAxis::Z => [cols, rows, self.depth],
    }
  }

  #[inline]
  fn sample(&self, x: usize, y: usize, z: usize) -> f32 {
    let (level, col, row) = self.axis.split([x, y, z]);
    level as f32 - self.heights.at(row, col)
  }
}

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;
