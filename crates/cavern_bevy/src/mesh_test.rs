use super::*;
use bevy::mesh::VertexAttributeValues;
use cavern_mesh::{marching_cubes, HeightField, HeightMeshConfig, MeshConfig, ScalarField};

fn center_dip_mesh() -> MeshData {
  let mut field = ScalarField::filled([3, 3, 3], 1.0);
  field.set(1, 1, 1, -1.0);
  let mut data = MeshData::new();
  marching_cubes::generate(&field, &MeshConfig::default(), &mut data);
  data
}

#[test]
fn test_empty_mesh_has_no_attributes() {
  let mesh = mesh_data_to_bevy(&MeshData::new());
  assert_eq!(mesh.primitive_topology(), PrimitiveTopology::TriangleList);
  assert!(mesh.attribute(Mesh::ATTRIBUTE_POSITION).is_none());
  assert!(mesh.indices().is_none());
}

#[test]
fn test_attributes_match_mesh_data() {
  let data = center_dip_mesh();
  let mesh = mesh_data_to_bevy(&data);

  assert_eq!(mesh.count_vertices(), 24);
  match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
    Some(VertexAttributeValues::Float32x3(positions)) => assert_eq!(positions, &data.vertices),
    other => panic!("unexpected positions: {other:?}"),
  }
  match mesh.attribute(Mesh::ATTRIBUTE_NORMAL) {
    Some(VertexAttributeValues::Float32x3(normals)) => assert_eq!(normals, &data.normals),
    other => panic!("unexpected normals: {other:?}"),
  }
  match mesh.attribute(Mesh::ATTRIBUTE_COLOR) {
    Some(VertexAttributeValues::Float32x4(colors)) => assert_eq!(colors.len(), 24),
    other => panic!("unexpected colors: {other:?}"),
  }
  assert!(mesh.attribute(Mesh::ATTRIBUTE_UV_0).is_none());

  match mesh.indices() {
    Some(Indices::U32(indices)) => assert_eq!(indices, &data.triangles),
    other => panic!("unexpected indices: {other:?}"),
  }
}

#[test]
fn test_heightfield_mesh_carries_uvs() {
  let heights = HeightField::from_fn(3, 3, |row, col| (row + col) as f32);
  let mut data = MeshData::new();
  cavern_mesh::heightfield::generate(&heights, &HeightMeshConfig::default(), &mut data);

  let mesh = mesh_data_to_bevy(&data);
  match mesh.attribute(Mesh::ATTRIBUTE_UV_0) {
    Some(VertexAttributeValues::Float32x2(uvs)) => assert_eq!(uvs, &data.uv0),
    other => panic!("unexpected uvs: {other:?}"),
  }
}
