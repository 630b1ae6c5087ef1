//! Height field meshing.
//!
//! Meshes a 2D grid of heights directly as a surface, two triangles per quad:
//!
//! ```text
//!   row+1  V3 ─────── V4         triangle A: (V1, V3, V4)
//!          │ ╲    B   │          triangle B: (V4, V2, V1)
//!          │   ╲      │
//!          │  A  ╲    │          V1 = (row,   col)    V2 = (row,   col+1)
//!   row    V1 ─────── V2         V3 = (row+1, col)    V4 = (row+1, col+1)
//!          col      col+1
//! ```
//!
//! Each triangle carries its own flat normal; both triangles of a quad share
//! one color. Lattice positions are scaled by `grid_size`, heights by
//! `height_scale`, and the height is placed on the configured [`HeightAxis`].

use glam::Vec3A;
use serde::Deserialize;
use web_time::Instant;

use crate::color::TriangleColors;
use crate::field::{HeightAxis, HeightField};
use crate::metrics::GenerationStats;
use crate::types::{ColorMode, MeshData, WindingOrder};

/// Configuration for height field meshing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeightMeshConfig {
  /// World units per lattice step.
  pub grid_size: f32,
  /// Multiplier applied to every height sample.
  pub height_scale: f32,
  /// Axis the heights are measured along.
  pub axis: HeightAxis,
  pub color_mode: ColorMode,
}

impl Default for HeightMeshConfig {
  fn default() -> Self {
    Self {
      grid_size: 1.0,
      height_scale: 1.0,
      axis: HeightAxis::X,
      color_mode: ColorMode::default(),
    }
  }
}

impl HeightMeshConfig {
  pub fn with_grid_size(mut self, size: f32) -> Self {
    self.grid_size = size;
    self
  }

  pub fn with_height_scale(mut self, scale: f32) -> Self {
    self.height_scale = scale;
    self
  }

  pub fn with_axis(mut self, axis: HeightAxis) -> Self {
    self.axis = axis;
    self
  }

  pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
    self.color_mode = mode;
    self
  }
}

/// Mesh every quad of `heights` into `mesh`.
///
/// Appends; a field with fewer than two rows or columns has no quads.
#[tracing::instrument(skip_all, name = "heightfield::generate")]
pub fn generate(
  heights: &HeightField,
  config: &HeightMeshConfig,
  mesh: &mut MeshData,
) -> GenerationStats {
  let start = Instant::now();
  let mut stats = GenerationStats::default();
  let mut colors = TriangleColors::new(config.color_mode);
  let order = WindingOrder::Forward.permutation();

  let (rows, cols) = (heights.rows(), heights.cols());
  let u_step = 1.0 / cols.saturating_sub(1).max(1) as f32;
  let v_step = 1.0 / rows.saturating_sub(1).max(1) as f32;

  let point = |row: usize, col: usize| -> Vec3A {
    let h = heights.at(row, col) * config.height_scale;
    Vec3A::from_array(config.axis.place(
      h,
      col as f32 * config.grid_size,
      row as f32 * config.grid_size,
    ))
  };
  let uv = |row: usize, col: usize| -> [f32; 2] { [col as f32 * u_step, row as f32 * v_step] };

  for row in 0..rows.saturating_sub(1) {
    for col in 0..cols.saturating_sub(1) {
      stats.cubes_visited += 1;

      let (v1, v2, v3, v4) = (
        point(row, col),
        point(row, col + 1),
        point(row + 1, col),
        point(row + 1, col + 1),
      );
      let (uv1, uv2, uv3, uv4) = (
        uv(row, col),
        uv(row, col + 1),
        uv(row + 1, col),
        uv(row + 1, col + 1),
      );

      let normal_a = (v3 - v1).cross(v4 - v1).normalize_or_zero();
      let normal_b = (v2 - v4).cross(v1 - v4).normalize_or_zero();
      let color = colors.next(normal_a);

      mesh.push_triangle_with_uv(
        [v1.to_array(), v3.to_array(), v4.to_array()],
        [uv1, uv3, uv4],
        order,
        normal_a.to_array(),
        color,
      );
      mesh.push_triangle_with_uv(
        [v4.to_array(), v2.to_array(), v1.to_array()],
        [uv4, uv2, uv1],
        order,
        normal_b.to_array(),
        color,
      );

      stats.cubes_with_geometry += 1;
      stats.triangles += 2;
    }
  }

  stats.timing_us = start.elapsed().as_micros() as u64;
  tracing::debug!(
    quads = stats.cubes_visited,
    triangles = stats.triangles,
    timing_us = stats.timing_us,
    "height field pass complete"
  );
  stats
}

#[cfg(test)]
#[path = "heightfield_test.rs"]
mod heightfield_test;
