//! MeshSink - the rendering collaborator a generator hands meshes to.
//!
//! The core never depends on an engine. A bridge crate (see `cavern_bevy`)
//! implements this trait to upload mesh sections; the generator only decides
//! whether a section is new or replaces an earlier upload.

use crate::types::MeshData;

/// Identifier of a mesh section slot on the rendering side.
pub type SectionId = u32;

/// Receiver of finished meshes.
///
/// Both calls are fire-and-forget: nothing is reported back to the generator.
pub trait MeshSink {
  /// First upload into `section`.
  fn create_mesh_section(&mut self, section: SectionId, mesh: &MeshData);

  /// Replace the contents of a previously created `section`.
  fn update_mesh_section(&mut self, section: SectionId, mesh: &MeshData);
}

/// No-op implementation for testing and headless operation.
pub struct NullSink;

impl MeshSink for NullSink {
  fn create_mesh_section(&mut self, _section: SectionId, _mesh: &MeshData) {
    // No-op
  }

  fn update_mesh_section(&mut self, _section: SectionId, _mesh: &MeshData) {
    // No-op
  }
}

/// Kind of a recorded sink call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkOp {
  Create,
  Update,
}

/// One recorded sink call.
#[derive(Clone, Debug, PartialEq)]
pub struct SinkCall {
  pub op: SinkOp,
  pub section: SectionId,
  pub vertex_count: usize,
  pub triangle_count: usize,
}

/// Sink that records every call, for tests and tooling.
#[derive(Debug, Default)]
pub struct RecordingSink {
  pub calls: Vec<SinkCall>,
  /// Copy of the most recently received mesh.
  pub last_mesh: Option<MeshData>,
}

impl RecordingSink {
  pub fn new() -> Self {
    Self::default()
  }

  fn record(&mut self, op: SinkOp, section: SectionId, mesh: &MeshData) {
    self.calls.push(SinkCall {
      op,
      section,
      vertex_count: mesh.vertices.len(),
      triangle_count: mesh.triangle_count(),
    });
    self.last_mesh = Some(mesh.clone());
  }
}

impl MeshSink for RecordingSink {
  fn create_mesh_section(&mut self, section: SectionId, mesh: &MeshData) {
    self.record(SinkOp::Create, section, mesh);
  }

  fn update_mesh_section(&mut self, section: SectionId, mesh: &MeshData) {
    self.record(SinkOp::Update, section, mesh);
  }
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;
