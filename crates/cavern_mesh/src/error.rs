//! Error types for field construction and configuration loading.
//!
//! Traversal itself never fails: out-of-range corners are ruled out by the
//! loop bounds, and degenerate edges are recovered in place.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when building a scalar or height field from raw samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
  #[error("sample buffer holds {actual} values, dimensions require {expected}")]
  LengthMismatch { expected: usize, actual: usize },

  #[error("ragged field: {axis} row {index} has {actual} entries, expected {expected}")]
  Ragged {
    axis: &'static str,
    index: usize,
    expected: usize,
    actual: usize,
  },

  #[error("height field has a zero dimension but holds data")]
  EmptyHeightField,
}

/// Errors raised while loading or validating a [`crate::config::CavernConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse config TOML: {0}")]
  Parse(#[from] toml::de::Error),

  #[error("grid_size must be finite and positive, got {0}")]
  InvalidGridSize(f32),

  #[error("surface_level must be finite")]
  NonFiniteSurfaceLevel,

  #[error("noise frequency must be finite and positive, got {0}")]
  InvalidFrequency(f32),
}
