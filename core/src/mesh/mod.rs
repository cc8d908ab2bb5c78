//! CPU-side mesh data and generators.
//!
//! This module provides GPU-agnostic mesh data:
//!
//! - [`MeshData`] - Flat vertex positions and triangle indices for upload
//! - Generators for simple 2D shapes (rectangle, circle)
//!
//! The rendering front end consumes these as plain byte slices; nothing
//! here knows about devices, pipelines or buffers.

mod data;
pub mod generators;

pub use data::MeshData;
