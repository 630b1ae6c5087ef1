//! Bevy presentation layer for cavern_mesh.
//!
//! This crate is the rendering collaborator of the engine-independent
//! cavern_mesh core: it converts [`MeshData`](cavern_mesh::MeshData) into Bevy
//! meshes and implements the create/update mesh section operations against
//! `Assets<Mesh>`.
//!
//! ```ignore
//! #[derive(Resource)]
//! struct Cavern(CavernGenerator);
//!
//! fn rebuild_cavern(
//!   mut meshes: ResMut<Assets<Mesh>>,
//!   mut sections: ResMut<AssetMeshSections>,
//!   mut cavern: ResMut<Cavern>,
//! ) {
//!   let mut sink = AssetMeshSink::new(&mut meshes, &mut sections);
//!   cavern.0.rebuild_from_noise(&mut sink);
//! }
//! ```

pub mod mesh;
pub mod section;

pub use mesh::mesh_data_to_bevy;
pub use section::{AssetMeshSections, AssetMeshSink};
