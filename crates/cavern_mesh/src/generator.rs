//! CavernGenerator - owns one mesh section and drives its rebuilds.
//!
//! ```text
//!   config change / first build
//!            │
//!            ▼
//!   clear() ──► generate(field) ──► emit(sink)
//!                                     │
//!                 first emission ─────┼──► sink.create_mesh_section(section)
//!                 later emissions ────┴──► sink.update_mesh_section(section)
//! ```
//!
//! Rebuilds are always full: the accumulator is cleared and the whole field
//! is meshed again.

use crate::config::{CavernConfig, GridDimensions, NoiseSettings};
use crate::field::{HeightAxis, HeightField, ScalarFieldSource};
use crate::heightfield::{self, HeightMeshConfig};
use crate::marching_cubes;
use crate::metrics::{GenerationMetrics, GenerationStats};
use crate::noise;
use crate::sink::{MeshSink, SectionId};
use crate::types::{MeshConfig, MeshData};

pub struct CavernGenerator {
  config: MeshConfig,
  grid: GridDimensions,
  noise: NoiseSettings,
  mesh: MeshData,
  section: SectionId,
  section_created: bool,
  parallel: bool,
  metrics: GenerationMetrics,
}

impl Default for CavernGenerator {
  fn default() -> Self {
    Self::new(MeshConfig::default())
  }
}

impl CavernGenerator {
  pub fn new(config: MeshConfig) -> Self {
    Self {
      config,
      grid: GridDimensions::default(),
      noise: NoiseSettings::default(),
      mesh: MeshData::new(),
      section: 0,
      section_created: false,
      parallel: false,
      metrics: GenerationMetrics::new(),
    }
  }

  /// Generator for a loaded configuration.
  pub fn from_config(config: &CavernConfig) -> Self {
    let mut generator = Self::new(config.mesh.clone());
    generator.grid = config.grid;
    generator.noise = config.noise;
    generator
  }

  /// Use a section slot other than 0.
  pub fn with_section(mut self, section: SectionId) -> Self {
    self.section = section;
    self
  }

  /// Shard traversal across rayon workers.
  pub fn with_parallel(mut self, parallel: bool) -> Self {
    self.parallel = parallel;
    self
  }

  pub fn config(&self) -> &MeshConfig {
    &self.config
  }

  /// Replace the mesh configuration. Takes effect on the next generation.
  pub fn set_config(&mut self, config: MeshConfig) {
    self.config = config;
  }

  /// Replace mesh, grid and noise settings at once.
  pub fn apply_config(&mut self, config: &CavernConfig) {
    self.config = config.mesh.clone();
    self.grid = config.grid;
    self.noise = config.noise;
  }

  pub fn grid(&self) -> GridDimensions {
    self.grid
  }

  pub fn noise(&self) -> &NoiseSettings {
    &self.noise
  }

  pub fn section(&self) -> SectionId {
    self.section
  }

  /// True once the section has been created on the sink side.
  pub fn is_section_created(&self) -> bool {
    self.section_created
  }

  pub fn mesh(&self) -> &MeshData {
    &self.mesh
  }

  pub fn metrics(&self) -> &GenerationMetrics {
    &self.metrics
  }

  /// Empty the accumulator and reset the running vertex count.
  pub fn clear(&mut self) {
    self.mesh.clear();
  }

  /// Forget the sink-side section so the next emission creates it again.
  pub fn reset_section(&mut self) {
    self.section_created = false;
  }

  /// Mesh `source` into the accumulator.
  pub fn generate<S: ScalarFieldSource + ?Sized>(&mut self, source: &S) -> GenerationStats {
    let stats = if self.parallel {
      let (mesh, stats) = marching_cubes::generate_parallel(source, &self.config);
      self.mesh.append(&mesh);
      stats
    } else {
      marching_cubes::generate(source, &self.config, &mut self.mesh)
    };
    self.metrics.record(&stats);
    stats
  }

  /// Mesh a height field into the accumulator with this generator's grid
  /// size and color mode.
  pub fn generate_heightfield(&mut self, heights: &HeightField) -> GenerationStats {
    let config = HeightMeshConfig::default()
      .with_grid_size(self.config.grid_size)
      .with_color_mode(self.config.color_mode);
    let stats = heightfield::generate(heights, &config, &mut self.mesh);
    self.metrics.record(&stats);
    stats
  }

  /// Hand the accumulated mesh to `sink`: create the section on first
  /// emission, update it afterwards.
  pub fn emit<K: MeshSink + ?Sized>(&mut self, sink: &mut K) {
    let created = self.section_created;
    let op = if created { "update" } else { "create" };
    if created {
      sink.update_mesh_section(self.section, &self.mesh);
    } else {
      sink.create_mesh_section(self.section, &self.mesh);
      self.section_created = true;
    }
    self.metrics.record_emit();

    tracing::info!(
      section = self.section,
      op,
      vertices = self.mesh.vertices.len(),
      "emitted mesh section"
    );
  }

  /// Full rebuild: clear, generate and emit.
  #[tracing::instrument(skip_all, name = "generator::rebuild")]
  pub fn rebuild<S, K>(&mut self, source: &S, sink: &mut K) -> GenerationStats
  where
    S: ScalarFieldSource + ?Sized,
    K: MeshSink + ?Sized,
  {
    self.clear();
    let stats = self.generate(source);
    self.emit(sink);
    stats
  }

  /// Rebuild from the bundled noise generator over the configured grid.
  pub fn rebuild_from_noise<K: MeshSink + ?Sized>(&mut self, sink: &mut K) -> GenerationStats {
    let field = noise::noise_volume(&self.noise, self.grid);
    self.rebuild(&field, sink)
  }

  /// Rebuild as a noise height map spanning the grid's Y and Z extents,
  /// heights scaled by `amplitude` and measured along X.
  #[tracing::instrument(skip_all, name = "generator::rebuild_heightmap")]
  pub fn rebuild_heightmap_from_noise<K: MeshSink + ?Sized>(
    &mut self,
    amplitude: f32,
    sink: &mut K,
  ) -> GenerationStats {
    let heights = noise::noise_heightmap(
      &self.noise,
      HeightAxis::X,
      self.grid.z_size + 1,
      self.grid.y_size + 1,
      amplitude,
    );
    self.clear();
    let stats = self.generate_heightfield(&heights);
    self.emit(sink);
    stats
  }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
