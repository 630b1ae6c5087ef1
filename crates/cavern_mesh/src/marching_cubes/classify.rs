//! Cube classification.
//!
//! The corner mask is an 8-bit value where bit `i` is set when corner `i` is
//! inside the surface. Inside means `density <= surface_level`; that test
//! governs triangulation. A corner sitting exactly on the level is inside.

use crate::edge_table::EDGE_TABLE;
use crate::types::Cube;

/// Classification of one cube against the surface level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeClass {
  /// Corner inside bits (`<=` test).
  pub mask: u8,
  /// 12-bit crossed edge flags from [`EDGE_TABLE`].
  pub crossed_edges: u16,
}

impl CubeClass {
  /// False when the cube lies entirely on one side of the surface.
  #[inline]
  pub fn has_geometry(&self) -> bool {
    self.crossed_edges != 0
  }

  #[inline]
  pub fn is_edge_crossed(&self, edge: usize) -> bool {
    self.crossed_edges & (1 << edge) != 0
  }
}

/// Corner mask with the inclusive `<=` test used for triangulation.
#[inline]
pub fn corner_mask(cube: &Cube, surface_level: f32) -> u8 {
  cube
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &v)| if v <= surface_level { mask | 1 << i } else { mask })
}

/// Corner mask with a strict `<` test.
///
/// Diagnostic only. It differs from [`corner_mask`] exactly on corners equal
/// to the surface level and is never used to pick triangles.
#[inline]
pub fn strict_corner_mask(cube: &Cube, surface_level: f32) -> u8 {
  cube
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &v)| if v < surface_level { mask | 1 << i } else { mask })
}

/// Classify a cube: corner mask plus crossed edge flags.
#[inline]
pub fn classify(cube: &Cube, surface_level: f32) -> CubeClass {
  let mask = corner_mask(cube, surface_level);
  CubeClass {
    mask,
    crossed_edges: EDGE_TABLE[mask as usize],
  }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
