//! Flat mesh data for GPU upload.

/// CPU-side mesh holding flat vertex positions and triangle indices.
///
/// Positions are `x y z` triples (3 floats per vertex); indices are 32-bit,
/// 3 per triangle. The byte views are what a vertex/index buffer upload
/// takes, so the rendering front end never re-packs anything.
#[derive(Clone, Default)]
pub struct MeshData {
    positions: Vec<f32>,
    indices: Vec<u32>,
    label: Option<String>,
}

impl MeshData {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flat vertex positions (3 floats per vertex).
    pub fn with_positions(mut self, positions: Vec<f32>) -> Self {
        self.positions = positions;
        self
    }

    /// Set the flat triangle indices (3 per triangle).
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = indices;
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the flat vertex positions.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Get the flat triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check whether the mesh uses indexed drawing.
    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Position data as bytes, ready for a vertex buffer write.
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Index data as bytes, ready for an index buffer write.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl std::fmt::Debug for MeshData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeshData")
            .field("label", &self.label)
            .field("vertex_count", &self.vertex_count())
            .field("index_count", &self.index_count())
            .finish()
    }
}
