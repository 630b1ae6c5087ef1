//! Configuration for a cavern generation pass.
//!
//! Everything is deserialisable from TOML with defaults for every field, so
//! a partial file only overrides what it names:
//!
//! ```toml
//! [mesh]
//! surface_level = 0.1
//! use_interpolation = false
//! color_mode = { mode = "uniform", color = [0.6, 0.5, 0.4, 1.0] }
//!
//! [grid]
//! x_size = 64
//!
//! [noise]
//! seed = 7
//! octaves = 5
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::MeshConfig;

/// Voxel grid extent in cells. A grid of `X × Y × Z` cells is sampled on
/// `(X+1) × (Y+1) × (Z+1)` lattice points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridDimensions {
  pub x_size: usize,
  pub y_size: usize,
  pub z_size: usize,
}

impl Default for GridDimensions {
  fn default() -> Self {
    Self::cubic(32)
  }
}

impl GridDimensions {
  pub const fn new(x_size: usize, y_size: usize, z_size: usize) -> Self {
    Self {
      x_size,
      y_size,
      z_size,
    }
  }

  pub const fn cubic(size: usize) -> Self {
    Self::new(size, size, size)
  }

  /// Lattice sample count per axis.
  pub const fn sample_dims(&self) -> [usize; 3] {
    [self.x_size + 1, self.y_size + 1, self.z_size + 1]
  }

  /// Total number of cells (and so cubes visited by a traversal).
  pub const fn cell_count(&self) -> usize {
    self.x_size * self.y_size * self.z_size
  }
}

/// Parameters of the bundled fractal noise field generator.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoiseSettings {
  pub seed: i32,
  /// Scale applied to lattice coordinates before sampling.
  pub frequency: f32,
  pub octaves: u8,
  /// Lattice-space offset added to every sample coordinate.
  pub offset: [f32; 3],
  pub lacunarity: f32,
  pub gain: f32,
}

impl Default for NoiseSettings {
  fn default() -> Self {
    Self {
      seed: 1337,
      frequency: 0.05,
      octaves: 4,
      offset: [0.0; 3],
      lacunarity: 2.0,
      gain: 0.5,
    }
  }
}

impl NoiseSettings {
  pub fn with_seed(mut self, seed: i32) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  pub fn with_octaves(mut self, octaves: u8) -> Self {
    self.octaves = octaves;
    self
  }

  pub fn with_offset(mut self, offset: [f32; 3]) -> Self {
    self.offset = offset;
    self
  }
}

/// Root configuration of a cavern generator.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CavernConfig {
  pub mesh: MeshConfig,
  pub grid: GridDimensions,
  pub noise: NoiseSettings,
}

impl CavernConfig {
  /// Parse and validate configuration from TOML text.
  pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
    let config: CavernConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
  }

  /// Load and validate configuration from a TOML file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;
    let config = Self::from_toml_str(&content)?;
    tracing::debug!(path = %path.display(), grid = ?config.grid, "loaded cavern config");
    Ok(config)
  }

  /// Reject values the mesher cannot give meaning to.
  ///
  /// Zero grid sizes are valid and mesh to nothing.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let grid_size = self.mesh.grid_size;
    if !grid_size.is_finite() || grid_size <= 0.0 {
      return Err(ConfigError::InvalidGridSize(grid_size));
    }
    if !self.mesh.surface_level.is_finite() {
      return Err(ConfigError::NonFiniteSurfaceLevel);
    }
    let frequency = self.noise.frequency;
    if !frequency.is_finite() || frequency <= 0.0 {
      return Err(ConfigError::InvalidFrequency(frequency));
    }
    Ok(())
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
