//! Edge crossing placement.
//!
//! ```text
//!   v1 ●───────────×─────────● v2        offset = (L - v1) / (v2 - v1)
//!      origin      │         end
//!                  surface level L
//!
//!   point = cube_origin + VERTEX_OFFSET[origin] + offset * EDGE_DIRECTION[edge]
//! ```

use glam::Vec3A;

use crate::constants::{EDGE_CONNECTION, EDGE_DIRECTION, VERTEX_OFFSET};

/// Edge offset used when interpolation is disabled.
pub const MIDPOINT_OFFSET: f32 = 0.5;

/// Fraction along an edge where the field crosses `surface_level`.
///
/// Not clamped. When `v1 == v2` the edge is degenerate and `surface_level`
/// itself is returned as a sentinel; see [`is_degenerate`].
#[inline]
pub fn interpolation_offset(v1: f32, v2: f32, surface_level: f32) -> f32 {
  let delta = v2 - v1;
  if delta == 0.0 {
    surface_level
  } else {
    (surface_level - v1) / delta
  }
}

/// True when an edge has no slope to interpolate along.
#[inline]
pub fn is_degenerate(v1: f32, v2: f32) -> bool {
  v2 - v1 == 0.0
}

/// World-space point at `offset` along `edge` of the cube whose low corner
/// is lattice point `(x, y, z)`.
#[inline]
pub fn edge_point(x: usize, y: usize, z: usize, edge: usize, offset: f32, grid_size: f32) -> Vec3A {
  let origin = VERTEX_OFFSET[EDGE_CONNECTION[edge][0] as usize];
  let direction = Vec3A::from_array(EDGE_DIRECTION[edge]);
  let corner = Vec3A::new(
    (x + origin[0] as usize) as f32,
    (y + origin[1] as usize) as f32,
    (z + origin[2] as usize) as f32,
  );
  (corner + offset * direction) * grid_size
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
