use super::*;

#[test]
fn test_lattice_index_roundtrip() {
  let dims = [4, 3, 5];
  for z in 0..dims[2] {
    for y in 0..dims[1] {
      for x in 0..dims[0] {
        let idx = lattice_index(x, y, z, dims);
        assert_eq!(
          lattice_coord(idx, dims),
          (x, y, z),
          "Roundtrip failed for ({}, {}, {})",
          x,
          y,
          z
        );
      }
    }
  }
}

#[test]
fn test_lattice_index_is_x_fastest() {
  let dims = [4, 3, 5];
  assert_eq!(lattice_index(1, 0, 0, dims), 1);
  assert_eq!(lattice_index(0, 1, 0, dims), 4);
  assert_eq!(lattice_index(0, 0, 1, dims), 12);
  assert_eq!(lattice_index(3, 2, 4, dims), 4 * 3 * 5 - 1);
}

#[test]
fn test_edge_direction_matches_connection() {
  for edge in 0..CUBE_EDGES {
    let [a, b] = EDGE_CONNECTION[edge];
    let from = VERTEX_OFFSET[a as usize];
    let to = VERTEX_OFFSET[b as usize];
    for axis in 0..3 {
      let delta = to[axis] as f32 - from[axis] as f32;
      assert_eq!(
        delta, EDGE_DIRECTION[edge][axis],
        "Edge {} axis {} direction mismatch",
        edge, axis
      );
    }
  }
}

#[test]
fn test_edges_are_unit_length() {
  for (edge, dir) in EDGE_DIRECTION.iter().enumerate() {
    let len_sq: f32 = dir.iter().map(|d| d * d).sum();
    assert_eq!(len_sq, 1.0, "Edge {} is not a unit edge", edge);
  }
}

#[test]
fn test_every_corner_has_three_edges() {
  let mut degree = [0; CUBE_CORNERS];
  for [a, b] in EDGE_CONNECTION {
    degree[a as usize] += 1;
    degree[b as usize] += 1;
  }
  assert_eq!(degree, [3; CUBE_CORNERS]);
}

#[test]
fn test_cube_counts() {
  assert_eq!(cube_counts([3, 3, 3]), [2, 2, 2]);
  assert_eq!(cube_counts([1, 5, 0]), [0, 4, 0]);
}
