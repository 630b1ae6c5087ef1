//! Marching cubes surface extraction.
//!
//! Converts a scalar density field into an unwelded triangle mesh. Every cube
//! of the sampled lattice is classified against the surface level, its crossed
//! edges are located, and up to five triangles are read from the canonical
//! triangle table.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  source: ScalarFieldSource  - nx × ny × nz density samples      │
//! │  config: MeshConfig         - level, interpolation, grid size   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Gather                              │
//! │  For each cube (x, y, z) in [0, n-2]³:                          │
//! │    Load 8 samples at (x, y, z) + VERTEX_OFFSET[i]               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Classify                            │
//! │    mask  = bit i set iff sample[i] <= surface_level             │
//! │    edges = EDGE_TABLE[mask]                                     │
//! │    Early-out if edges == 0 (homogeneous cube)                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Interpolate                         │
//! │  For each crossed edge:                                         │
//! │    offset = (L - v1) / (v2 - v1), or 0.5 without interpolation  │
//! │    point  = (origin + offset * direction) * grid_size           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 4: Triangulate                         │
//! │  For each TRI_TABLE[mask] triple (up to 5, sentinel-ended):     │
//! │    normal = normalize((V2 - V1) × (V3 - V1))                    │
//! │    append V1, V2, V3 + permuted indices + normal ×3 + color ×3  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  MeshData: vertices, triangles, normals, colors, bounds         │
//! │  GenerationStats: cube and triangle counters, timing            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Winding
//!
//! Vertices are stored in table order and normals are computed from that
//! order, so stored normals face the inside corners (density at or below the
//! level). Only the index triple is permuted: `(0, 1, 2)` for a non-negative
//! surface level, `(2, 1, 0)` for a negative one.

mod classify;
mod interpolate;
mod normal;

pub use classify::{classify, corner_mask, strict_corner_mask, CubeClass};
pub use interpolate::{edge_point, interpolation_offset, is_degenerate, MIDPOINT_OFFSET};
pub use normal::face_normal;

use glam::Vec3A;
use rayon::prelude::*;
use web_time::Instant;

use crate::color::TriangleColors;
use crate::constants::*;
use crate::edge_table;
use crate::field::ScalarFieldSource;
use crate::metrics::GenerationStats;
use crate::types::*;

/// Gather the 8 corner samples of the cube whose low corner is `(x, y, z)`.
///
/// The caller guarantees `x + 1`, `y + 1` and `z + 1` are inside the lattice.
#[inline]
pub fn gather_cube<S: ScalarFieldSource + ?Sized>(source: &S, x: usize, y: usize, z: usize) -> Cube {
  std::array::from_fn(|i| {
    let [ox, oy, oz] = VERTEX_OFFSET[i];
    source.sample(x + ox as usize, y + oy as usize, z + oz as usize)
  })
}

/// Per-pass triangulation state.
///
/// Built once per traversal (or shard): the winding permutation and color
/// stream are fixed for the whole pass.
pub struct Marcher {
  surface_level: f32,
  use_interpolation: bool,
  grid_size: f32,
  order: [u32; 3],
  colors: TriangleColors,
}

impl Marcher {
  pub fn new(config: &MeshConfig) -> Self {
    Self::with_colors(config, TriangleColors::new(config.color_mode))
  }

  pub fn with_colors(config: &MeshConfig, colors: TriangleColors) -> Self {
    Self {
      surface_level: config.surface_level,
      use_interpolation: config.use_interpolation,
      grid_size: config.grid_size,
      order: config.winding().permutation(),
      colors,
    }
  }

  /// Triangulate one cube into `mesh`. Returns the number of triangles
  /// appended (0 to 5).
  pub fn march(
    &mut self,
    x: usize,
    y: usize,
    z: usize,
    cube: &Cube,
    mesh: &mut MeshData,
    stats: &mut GenerationStats,
  ) -> usize {
    stats.cubes_visited += 1;

    let class = classify(cube, self.surface_level);
    if !class.has_geometry() {
      return 0;
    }

    // Only crossed slots are written, and only those are read back below
    let mut edge_points = [Vec3A::ZERO; CUBE_EDGES];
    for (edge, point) in edge_points.iter_mut().enumerate() {
      if !class.is_edge_crossed(edge) {
        continue;
      }
      let [a, b] = EDGE_CONNECTION[edge];
      let (v1, v2) = (cube[a as usize], cube[b as usize]);

      let offset = if self.use_interpolation {
        if is_degenerate(v1, v2) {
          stats.degenerate_edges += 1;
          tracing::trace!(x, y, z, edge, v1, "degenerate crossed edge");
        }
        interpolation_offset(v1, v2, self.surface_level)
      } else {
        MIDPOINT_OFFSET
      };

      *point = edge_point(x, y, z, edge, offset, self.grid_size);
    }

    let triangles = edge_table::triangles(class.mask);
    for &[e1, e2, e3] in &triangles {
      let (v1, v2, v3) = (edge_points[e1], edge_points[e2], edge_points[e3]);
      let normal = face_normal(v1, v2, v3);
      let color = self.colors.next(normal);
      mesh.push_triangle(
        [v1.to_array(), v2.to_array(), v3.to_array()],
        self.order,
        normal.to_array(),
        color,
      );
    }

    stats.cubes_with_geometry += 1;
    stats.triangles += triangles.len() as u64;
    triangles.len()
  }
}

/// Mesh every cube of `source` into `mesh`.
///
/// Appends: callers clear `mesh` first for a fresh pass. A lattice with fewer
/// than two samples along any axis has no cubes and yields no geometry.
#[tracing::instrument(skip_all, name = "marching_cubes::generate")]
pub fn generate<S: ScalarFieldSource + ?Sized>(
  source: &S,
  config: &MeshConfig,
  mesh: &mut MeshData,
) -> GenerationStats {
  let start = Instant::now();
  let mut marcher = Marcher::new(config);
  let mut stats = GenerationStats::default();

  let [cx, cy, cz] = cube_counts(source.sample_dims());
  for z in 0..cz {
    for y in 0..cy {
      for x in 0..cx {
        let cube = gather_cube(source, x, y, z);
        marcher.march(x, y, z, &cube, mesh, &mut stats);
      }
    }
  }

  stats.timing_us = start.elapsed().as_micros() as u64;
  log_pass(&stats);
  stats
}

/// Mesh every cube of `source`, one z-slab of cubes per rayon task.
///
/// Each slab writes a private buffer; slabs are concatenated in z order with
/// their indices rebased. The triangle set, normals and winding match
/// [`generate`]. In random color mode each slab draws from its own seeded
/// stream, so colors are deterministic but differ from the serial pass.
#[tracing::instrument(skip_all, name = "marching_cubes::generate_parallel")]
pub fn generate_parallel<S: ScalarFieldSource + ?Sized>(
  source: &S,
  config: &MeshConfig,
) -> (MeshData, GenerationStats) {
  let start = Instant::now();
  let [cx, cy, cz] = cube_counts(source.sample_dims());

  let shards: Vec<(MeshData, GenerationStats)> = (0..cz)
    .into_par_iter()
    .map(|z| {
      let colors = TriangleColors::for_shard(config.color_mode, z as u64);
      let mut marcher = Marcher::with_colors(config, colors);
      let mut mesh = MeshData::new();
      let mut stats = GenerationStats::default();
      for y in 0..cy {
        for x in 0..cx {
          let cube = gather_cube(source, x, y, z);
          marcher.march(x, y, z, &cube, &mut mesh, &mut stats);
        }
      }
      (mesh, stats)
    })
    .collect();

  let mut mesh = MeshData::new();
  let mut stats = GenerationStats::default();
  {
    let _span = tracing::info_span!("merge_shards", shards = shards.len()).entered();
    for (shard_mesh, shard_stats) in &shards {
      mesh.append(shard_mesh);
      stats.merge(shard_stats);
    }
  }

  stats.timing_us = start.elapsed().as_micros() as u64;
  log_pass(&stats);
  (mesh, stats)
}

fn log_pass(stats: &GenerationStats) {
  tracing::debug!(
    cubes = stats.cubes_visited,
    with_geometry = stats.cubes_with_geometry,
    triangles = stats.triangles,
    degenerate_edges = stats.degenerate_edges,
    timing_us = stats.timing_us,
    "marching cubes pass complete"
  );
}
