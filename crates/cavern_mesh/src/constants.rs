//! Cube geometry constants and lattice layout.
//!
//! # Cube Topology
//!
//! ```text
//!         7──────6          Corners (VERTEX_OFFSET):
//!        /│     /│            0=(0,0,0)  1=(1,0,0)  2=(1,1,0)  3=(0,1,0)
//!       4─┼────5 │            4=(0,0,1)  5=(1,0,1)  6=(1,1,1)  7=(0,1,1)
//!       │ 3────┼─2
//!       │/     │/           +Z
//!       0──────1             │  +Y
//!                            │ /
//!                            └───+X
//! ```
//!
//! The corners follow the published marching cubes ordering (a ring around
//! the bottom face, then a ring around the top face), NOT the binary ZYX
//! ordering used by dual methods. The edge and triangle tables in
//! [`crate::edge_table`] are only valid for this ordering.
//!
//! # Edge Layout
//!
//! ```text
//! Edge  Corners  Direction   Edge  Corners  Direction
//! ────  ───────  ─────────   ────  ───────  ─────────
//!   0   [0, 1]     +X          6   [6, 7]     -X
//!   1   [1, 2]     +Y          7   [7, 4]     -Y
//!   2   [2, 3]     -X          8   [0, 4]     +Z
//!   3   [3, 0]     -Y          9   [1, 5]     +Z
//!   4   [4, 5]     +X         10   [2, 6]     +Z
//!   5   [5, 6]     +Y         11   [3, 7]     +Z
//! ```
//!
//! Every edge starts at its first corner; a point on edge `i` at fraction `t`
//! is `VERTEX_OFFSET[EDGE_CONNECTION[i][0]] + t * EDGE_DIRECTION[i]`.
//!
//! # Lattice Layout
//!
//! ```text
//! Sample memory layout (row-major, X innermost):
//!
//! Address:  0      1     ...  nx-1     nx    ...  nx*ny  ...
//! Content: [0,0,0][1,0,0]...[nx-1,0,0][0,1,0]...[0,0,1]...
//!          └──────── X ─────────────┘
//!
//! index = (z * ny + y) * nx + x        (a [z][y][x] array, flattened)
//! ```
//!
//! A voxel grid of `X × Y × Z` cells is sampled on `(X+1) × (Y+1) × (Z+1)`
//! lattice points; a lattice with `n` samples along an axis holds `n - 1`
//! cubes along that axis.

/// Number of corners of a cube.
pub const CUBE_CORNERS: usize = 8;

/// Number of edges of a cube.
pub const CUBE_EDGES: usize = 12;

/// Upper bound of triangles emitted for a single cube configuration.
pub const MAX_TRIANGLES_PER_CUBE: usize = 5;

/// Terminator in [`crate::edge_table::TRI_TABLE`] rows.
pub const TRIANGLE_SENTINEL: i8 = -1;

/// Unit offset of each cube corner from the cube's low corner.
pub const VERTEX_OFFSET: [[u8; 3]; 8] = [
  [0, 0, 0],
  [1, 0, 0],
  [1, 1, 0],
  [0, 1, 0],
  [0, 0, 1],
  [1, 0, 1],
  [1, 1, 1],
  [0, 1, 1],
];

/// Corner pair connected by each edge. The first corner is the edge origin.
pub const EDGE_CONNECTION: [[u8; 2]; 12] = [
  [0, 1],
  [1, 2],
  [2, 3],
  [3, 0],
  [4, 5],
  [5, 6],
  [6, 7],
  [7, 4],
  [0, 4],
  [1, 5],
  [2, 6],
  [3, 7],
];

/// Unit direction of each edge, from its origin corner to its end corner.
pub const EDGE_DIRECTION: [[f32; 3]; 12] = [
  [1.0, 0.0, 0.0],
  [0.0, 1.0, 0.0],
  [-1.0, 0.0, 0.0],
  [0.0, -1.0, 0.0],
  [1.0, 0.0, 0.0],
  [0.0, 1.0, 0.0],
  [-1.0, 0.0, 0.0],
  [0.0, -1.0, 0.0],
  [0.0, 0.0, 1.0],
  [0.0, 0.0, 1.0],
  [0.0, 0.0, 1.0],
  [0.0, 0.0, 1.0],
];

/// Convert lattice coordinates to a flat `[z][y][x]` index.
///
/// `dims` holds the sample count per axis.
#[inline(always)]
pub const fn lattice_index(x: usize, y: usize, z: usize, dims: [usize; 3]) -> usize {
  (z * dims[1] + y) * dims[0] + x
}

/// Convert a flat `[z][y][x]` index back to lattice coordinates.
#[cfg(test)]
pub(crate) const fn lattice_coord(idx: usize, dims: [usize; 3]) -> (usize, usize, usize) {
  let x = idx % dims[0];
  let yz = idx / dims[0];
  (x, yz % dims[1], yz / dims[1])
}

/// Number of cubes along each axis for a lattice with `dims` samples.
///
/// Axes with fewer than two samples hold no cubes.
#[inline]
pub const fn cube_counts(dims: [usize; 3]) -> [usize; 3] {
  [
    dims[0].saturating_sub(1),
    dims[1].saturating_sub(1),
    dims[2].saturating_sub(1),
  ]
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
