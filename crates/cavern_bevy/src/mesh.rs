//! MeshData to Bevy mesh conversion.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use cavern_mesh::MeshData;

/// Convert cavern_mesh MeshData to Bevy Mesh.
///
/// Vertices are unwelded, so every attribute maps one to one. UV0 is only
/// inserted when the mesh carries texture coordinates.
pub fn mesh_data_to_bevy(data: &MeshData) -> Mesh {
  let mut mesh = Mesh::new(
    PrimitiveTopology::TriangleList,
    RenderAssetUsages::default(),
  );

  if data.is_empty() {
    return mesh;
  }

  mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, data.vertices.clone());
  mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, data.normals.clone());
  mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, data.colors.clone());
  if !data.uv0.is_empty() {
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, data.uv0.clone());
  }
  mesh.insert_indices(Indices::U32(data.triangles.clone()));

  mesh
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;
