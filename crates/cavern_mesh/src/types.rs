//! Core data types for marching cubes meshing.

use serde::Deserialize;

/// Density samples at the 8 corners of one lattice cell.
///
/// Corner `i` sits at `VERTEX_OFFSET[i]` from the cell's low corner.
pub type Cube = [f32; 8];

/// Linear RGBA vertex color.
pub type LinearColor = [f32; 4];

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Expand AABB to include another box.
  pub fn merge(&mut self, other: &MinMaxAABB) {
    if other.is_valid() {
      self.encapsulate(other.min);
      self.encapsulate(other.max);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Triangle index order applied to every emitted triangle of a pass.
///
/// Selected once per pass from the sign of the surface level, so a "depth
/// below zero" field keeps the same facing as a "height above zero" one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindingOrder {
  /// Indices emitted as (0, 1, 2).
  #[default]
  Forward,
  /// Indices emitted as (2, 1, 0).
  Reversed,
}

impl WindingOrder {
  /// Non-negative surface levels wind forward, negative levels reversed.
  pub fn from_surface_level(surface_level: f32) -> Self {
    if surface_level >= 0.0 {
      WindingOrder::Forward
    } else {
      WindingOrder::Reversed
    }
  }

  /// Index permutation for the three vertices of a triangle.
  #[inline]
  pub const fn permutation(self) -> [u32; 3] {
    match self {
      WindingOrder::Forward => [0, 1, 2],
      WindingOrder::Reversed => [2, 1, 0],
    }
  }
}

/// Per-triangle color assignment.
///
/// Cosmetic only: geometry, normals and winding never depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorMode {
  /// Random saturated hue per triangle from a seeded generator.
  Random { seed: u64 },
  /// The same color for every triangle.
  Uniform { color: LinearColor },
  /// Color derived from the absolute face normal (debug shading).
  Normal,
}

impl Default for ColorMode {
  fn default() -> Self {
    ColorMode::Random { seed: 0 }
  }
}

/// Mesh buffers accumulated over one generation pass.
///
/// Vertices are never shared: every triangle appends three fresh vertices
/// together with its three indices, one normal per vertex and one color per
/// vertex, so `vertices`, `normals`, `colors` and `triangles` always have the
/// same length. `uv0` is either empty or parallel to `vertices`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
  /// Vertex positions in world units.
  pub vertices: Vec<[f32; 3]>,

  /// Triangle indices (3 indices per triangle).
  pub triangles: Vec<u32>,

  /// Flat per-vertex normals (unit vectors, or zero for degenerate faces).
  pub normals: Vec<[f32; 3]>,

  /// Per-vertex colors.
  pub colors: Vec<LinearColor>,

  /// Optional texture coordinates.
  pub uv0: Vec<[f32; 2]>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,

  vertex_count: u32,
}

impl MeshData {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.triangles.clear();
    self.normals.clear();
    self.colors.clear();
    self.uv0.clear();
    self.bounds = MinMaxAABB::empty();
    self.vertex_count = 0;
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of triangles in the mesh.
  pub fn triangle_count(&self) -> usize {
    self.triangles.len() / 3
  }

  /// Running total of emitted vertices; the base index of the next triangle.
  pub fn vertex_count(&self) -> u32 {
    self.vertex_count
  }

  /// Check that all per-vertex buffers run in lockstep.
  pub fn is_consistent(&self) -> bool {
    let n = self.vertices.len();
    self.vertex_count as usize == n
      && self.triangles.len() == n
      && self.normals.len() == n
      && self.colors.len() == n
      && (self.uv0.is_empty() || self.uv0.len() == n)
  }

  /// Append one unwelded triangle.
  ///
  /// `corners` are stored in the given order; `order` permutes the three new
  /// indices and so decides the facing of the triangle. When the mesh already
  /// carries UVs the new vertices get zero UVs.
  pub fn push_triangle(
    &mut self,
    corners: [[f32; 3]; 3],
    order: [u32; 3],
    normal: [f32; 3],
    color: LinearColor,
  ) {
    if !self.uv0.is_empty() {
      self.uv0.extend_from_slice(&[[0.0; 2]; 3]);
    }
    self.push_geometry(corners, order, normal, color);
  }

  /// Append one unwelded triangle with texture coordinates.
  pub fn push_triangle_with_uv(
    &mut self,
    corners: [[f32; 3]; 3],
    uvs: [[f32; 2]; 3],
    order: [u32; 3],
    normal: [f32; 3],
    color: LinearColor,
  ) {
    // Earlier triangles without UVs get zeros so uv0 stays parallel
    self.uv0.resize(self.vertices.len(), [0.0; 2]);
    self.uv0.extend_from_slice(&uvs);
    self.push_geometry(corners, order, normal, color);
  }

  /// Positions, indices, normals, colors and bounds. Leaves `uv0` alone.
  fn push_geometry(
    &mut self,
    corners: [[f32; 3]; 3],
    order: [u32; 3],
    normal: [f32; 3],
    color: LinearColor,
  ) {
    let base = self.vertex_count;

    self.vertices.extend_from_slice(&corners);
    self
      .triangles
      .extend_from_slice(&[base + order[0], base + order[1], base + order[2]]);
    self.normals.extend_from_slice(&[normal; 3]);
    self.colors.extend_from_slice(&[color; 3]);
    for corner in corners {
      self.bounds.encapsulate(corner);
    }

    self.vertex_count += 3;
  }

  /// Append another mesh, rebasing its indices after ours.
  pub fn append(&mut self, other: &MeshData) {
    let base = self.vertex_count;

    if !self.uv0.is_empty() || !other.uv0.is_empty() {
      self.uv0.resize(self.vertices.len(), [0.0; 2]);
      self.uv0.extend_from_slice(&other.uv0);
      self
        .uv0
        .resize(self.vertices.len() + other.vertices.len(), [0.0; 2]);
    }

    self.vertices.extend_from_slice(&other.vertices);
    self
      .triangles
      .extend(other.triangles.iter().map(|&index| index + base));
    self.normals.extend_from_slice(&other.normals);
    self.colors.extend_from_slice(&other.colors);
    self.bounds.merge(&other.bounds);
    self.vertex_count += other.vertex_count;
  }
}

/// Configuration consumed by the marching cubes core.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
  /// Iso-threshold. Corners at or below it are inside; its sign picks the
  /// winding order.
  pub surface_level: f32,

  /// Place crossings by linear interpolation (smooth) instead of at edge
  /// midpoints (blocky).
  pub use_interpolation: bool,

  /// World units per lattice unit.
  pub grid_size: f32,

  /// Per-triangle color assignment.
  pub color_mode: ColorMode,
}

impl Default for MeshConfig {
  fn default() -> Self {
    Self {
      surface_level: 0.0,
      use_interpolation: true,
      grid_size: 1.0,
      color_mode: ColorMode::default(),
    }
  }
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_surface_level(mut self, level: f32) -> Self {
    self.surface_level = level;
    self
  }

  pub fn with_interpolation(mut self, use_interpolation: bool) -> Self {
    self.use_interpolation = use_interpolation;
    self
  }

  pub fn with_grid_size(mut self, size: f32) -> Self {
    self.grid_size = size;
    self
  }

  pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
    self.color_mode = mode;
    self
  }

  /// Winding order for a pass with this configuration.
  pub fn winding(&self) -> WindingOrder {
    WindingOrder::from_surface_level(self.surface_level)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
