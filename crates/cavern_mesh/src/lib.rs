//! cavern_mesh - Framework/engine independent cavern meshing
//!
//! This crate turns a sampled scalar density field (or a 2D height field)
//! into a triangle mesh with the classic Marching Cubes algorithm, for
//! procedurally generated caverns and terrain.
//!
//! # Features
//!
//! - **Marching Cubes**: canonical 256-case edge and triangle tables,
//!   interpolated or mid-edge vertex placement, flat per-triangle normals
//! - **Sharded traversal**: z-slab parallel meshing on rayon with results
//!   identical to the serial pass
//! - **Height fields**: direct two-triangles-per-quad terrain meshing
//! - **Noise fields**: fBm volumes and height maps via simdnoise
//! - **Generator driver**: clear / generate / emit to an engine-side
//!   [`MeshSink`], create on first build and update afterwards
//!
//! # Example
//!
//! ```ignore
//! use cavern_mesh::{marching_cubes, MeshConfig, MeshData, ScalarField};
//!
//! // 3×3×3 lattice with one solid sample in the middle
//! let mut field = ScalarField::filled([3, 3, 3], 1.0);
//! field.set(1, 1, 1, -1.0);
//!
//! let mut mesh = MeshData::new();
//! let stats = marching_cubes::generate(&field, &MeshConfig::default(), &mut mesh);
//!
//! println!("Generated {} vertices, {} triangles",
//!     mesh.vertices.len(), mesh.triangle_count());
//! ```

pub mod constants;
pub mod edge_table;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{lattice_index, EDGE_CONNECTION, EDGE_DIRECTION, VERTEX_OFFSET};
pub use edge_table::{EDGE_TABLE, TRI_TABLE};
pub use error::{ConfigError, FieldError};
pub use types::{ColorMode, Cube, LinearColor, MeshConfig, MeshData, MinMaxAABB, WindingOrder};

// Configuration loading (TOML)
pub mod config;
pub use config::{CavernConfig, GridDimensions, NoiseSettings};

// Scalar and height field sources
pub mod field;
pub use field::{FnField, HeightAxis, HeightField, HeightFieldVolume, ScalarField, ScalarFieldSource};

// Per-triangle colors
pub mod color;

// Marching Cubes module
pub mod marching_cubes;
pub use marching_cubes::{classify, corner_mask, strict_corner_mask, CubeClass, Marcher};

// Height field meshing
pub mod heightfield;
pub use heightfield::HeightMeshConfig;

// Noise generation with simdnoise
pub mod noise;

// Rendering collaborator interface
pub mod sink;
pub use sink::{MeshSink, NullSink, RecordingSink, SectionId};

// Pass statistics
pub mod metrics;
pub use metrics::{GenerationMetrics, GenerationStats};

// Generator driver
pub mod generator;
pub use generator::CavernGenerator;
