use super::*;

fn flat(rows: usize, cols: usize) -> HeightField {
  HeightField::from_fn(rows, cols, |_, _| 0.0)
}

fn mesh_of(heights: &HeightField, config: &HeightMeshConfig) -> MeshData {
  let mut mesh = MeshData::new();
  generate(heights, config, &mut mesh);
  mesh
}

#[test]
fn test_two_triangles_per_quad() {
  let heights = flat(4, 5);
  let mut mesh = MeshData::new();
  let stats = generate(&heights, &HeightMeshConfig::default(), &mut mesh);

  assert_eq!(stats.cubes_visited, 12);
  assert_eq!(mesh.triangle_count(), 24);
  assert_eq!(mesh.vertices.len(), 72);
  assert_eq!(mesh.uv0.len(), 72);
  assert!(mesh.is_consistent());
}

#[test]
fn test_degenerate_fields_have_no_quads() {
  for heights in [flat(0, 0), flat(1, 8), flat(8, 1)] {
    let mesh = mesh_of(&heights, &HeightMeshConfig::default());
    assert!(mesh.is_empty());
  }
}

#[test]
fn test_quad_vertex_order() {
  let heights = HeightField::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).expect("valid");
  let config = HeightMeshConfig::default().with_grid_size(10.0);
  let mesh = mesh_of(&heights, &config);

  // Height on X, columns along Y, rows along Z
  let v1 = [1.0, 0.0, 0.0];
  let v2 = [2.0, 10.0, 0.0];
  let v3 = [3.0, 0.0, 10.0];
  let v4 = [4.0, 10.0, 10.0];
  assert_eq!(mesh.vertices, vec![v1, v3, v4, v4, v2, v1]);
  assert_eq!(mesh.triangles, vec![0, 1, 2, 3, 4, 5]);
  assert_eq!(
    mesh.uv0,
    vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]
  );
}

#[test]
fn test_flat_field_normals_face_negative_height_axis() {
  let mesh = mesh_of(&flat(3, 3), &HeightMeshConfig::default());
  for n in &mesh.normals {
    assert!((Vec3A::from_array(*n) - Vec3A::NEG_X).length() < 1e-6);
  }

  let mesh = mesh_of(&flat(3, 3), &HeightMeshConfig::default().with_axis(HeightAxis::Z));
  for v in &mesh.vertices {
    assert_eq!(v[2], 0.0);
  }
  // Columns along X, rows along Y
  for n in &mesh.normals {
    assert!((Vec3A::from_array(*n) - Vec3A::NEG_Z).length() < 1e-6);
  }
}

#[test]
fn test_height_scale_and_shared_quad_color() {
  let heights = HeightField::from_fn(3, 3, |row, col| (row * 3 + col) as f32);
  let config = HeightMeshConfig::default()
    .with_height_scale(0.5)
    .with_color_mode(ColorMode::Random { seed: 5 });
  let mesh = mesh_of(&heights, &config);

  assert_eq!(mesh.bounds.max[0], 4.0);
  assert_eq!(mesh.bounds.min[0], 0.0);

  // Both triangles of a quad share one color
  for quad in mesh.colors.chunks_exact(6) {
    assert!(quad.iter().all(|c| *c == quad[0]));
  }
}

#[test]
fn test_sloped_quad_normals_are_unit() {
  let heights = HeightField::from_fn(2, 2, |row, col| (row as f32) * 2.0 + col as f32 * 0.5);
  let mesh = mesh_of(&heights, &HeightMeshConfig::default());
  for n in &mesh.normals {
    assert!((Vec3A::from_array(*n).length() - 1.0).abs() < 1e-5);
  }
}
