//! Mesh sections backed by `Assets<Mesh>`.

use std::collections::HashMap;

use bevy::prelude::*;
use cavern_mesh::{MeshData, MeshSink, SectionId};

use crate::mesh::mesh_data_to_bevy;

/// Section slot to mesh asset handle map.
#[derive(Resource, Default, Debug)]
pub struct AssetMeshSections {
  handles: HashMap<SectionId, Handle<Mesh>>,
}

impl AssetMeshSections {
  pub fn get(&self, section: SectionId) -> Option<&Handle<Mesh>> {
    self.handles.get(&section)
  }

  pub fn len(&self) -> usize {
    self.handles.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handles.is_empty()
  }

  /// Drop a section's handle. The asset is freed once nothing else holds it.
  pub fn remove(&mut self, section: SectionId) -> Option<Handle<Mesh>> {
    self.handles.remove(&section)
  }
}

/// [`MeshSink`] writing into Bevy's mesh assets.
///
/// Create adds a new asset for the section. Update replaces the existing
/// asset in place, so entities holding the handle pick up the new geometry;
/// it falls back to create when the section has no live asset.
pub struct AssetMeshSink<'a> {
  pub meshes: &'a mut Assets<Mesh>,
  pub sections: &'a mut AssetMeshSections,
}

impl<'a> AssetMeshSink<'a> {
  pub fn new(meshes: &'a mut Assets<Mesh>, sections: &'a mut AssetMeshSections) -> Self {
    Self { meshes, sections }
  }
}

impl MeshSink for AssetMeshSink<'_> {
  fn create_mesh_section(&mut self, section: SectionId, mesh: &MeshData) {
    let handle = self.meshes.add(mesh_data_to_bevy(mesh));
    if self.sections.handles.insert(section, handle).is_some() {
      tracing::debug!(section, "replaced handle of existing mesh section");
    }
  }

  fn update_mesh_section(&mut self, section: SectionId, mesh: &MeshData) {
    if let Some(handle) = self.sections.handles.get(&section) {
      if let Some(existing) = self.meshes.get_mut(handle) {
        *existing = mesh_data_to_bevy(mesh);
        return;
      }
    }
    tracing::warn!(section, "update of unknown mesh section, creating it");
    self.create_mesh_section(section, mesh);
  }
}

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;
