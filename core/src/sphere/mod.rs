//! Sphere meshes built by recursive triangle subdivision.
//!
//! This module provides:
//!
//! - [`SeedMesh`] - A validated coarse starting mesh (e.g. a tetrahedron)
//! - [`VertexStore`] - Append-only store of unit-sphere vertex positions
//! - [`SphereSession`] - Subdivision/coarsening state machine over a store
//! - [`SphereError`] - Error type for seed validation and store lookups
//!
//! A session starts from a seed mesh and walks subdivision levels up and
//! down. Vertices are created the first time a level is visited and reused
//! on every later visit; coarsening only rewrites the index list.

mod error;
mod seed;
mod session;
mod store;

pub use error::SphereError;
pub use seed::SeedMesh;
pub use session::SphereSession;
pub use store::VertexStore;

/// Tolerance for the unit-length vertex invariant.
pub const UNIT_TOLERANCE: f32 = 1e-5;
