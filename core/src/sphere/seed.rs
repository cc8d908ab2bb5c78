//! Seed meshes for sphere subdivision.

use crate::math::Vec3;

use super::{SphereError, UNIT_TOLERANCE};

/// A validated coarse starting mesh for sphere subdivision.
///
/// Holds ordered unit-length vertex positions and a flat triangle index
/// list. Construction via [`SeedMesh::new`] checks the invariants a
/// [`SphereSession`](super::SphereSession) relies on, so the session itself
/// never has to re-validate.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl SeedMesh {
    /// Create a seed mesh from unit-length positions and triangle indices.
    ///
    /// Fails if the mesh is empty, the index count is not a multiple of 3,
    /// an index references a missing vertex, or a vertex is not unit length
    /// within [`UNIT_TOLERANCE`].
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, SphereError> {
        if positions.is_empty() || indices.is_empty() {
            return Err(SphereError::EmptySeed);
        }
        if indices.len() % 3 != 0 {
            return Err(SphereError::IndexCountNotTriangles(indices.len()));
        }
        for &index in &indices {
            if index as usize >= positions.len() {
                return Err(SphereError::SeedIndexOutOfRange {
                    index,
                    len: positions.len(),
                });
            }
        }
        for (index, position) in positions.iter().enumerate() {
            let norm = position.norm();
            if (norm - 1.0).abs() > UNIT_TOLERANCE {
                return Err(SphereError::NotUnitLength { index, norm });
            }
        }
        Ok(Self { positions, indices })
    }

    /// The regular tetrahedron inscribed in the unit sphere.
    ///
    /// Apex at (0, 0, 1), base below the equator. Winding is
    /// counter-clockwise seen from outside, so back-face culling works on
    /// every subdivision level derived from it.
    pub fn tetrahedron() -> Self {
        let sqrt2 = 2.0_f32.sqrt();
        let sqrt6 = 6.0_f32.sqrt();
        let positions = vec![
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 2.0 * sqrt2 / 3.0, -1.0 / 3.0),
            Vec3::new(-sqrt6 / 3.0, -sqrt2 / 3.0, -1.0 / 3.0),
            Vec3::new(sqrt6 / 3.0, -sqrt2 / 3.0, -1.0 / 3.0),
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2, // front
            0, 3, 1, // right
            1, 3, 2, // left
            0, 2, 3, // bottom
        ];
        Self { positions, indices }
    }

    /// Get the vertex positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Get the flat triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Decompose into positions and indices.
    pub fn into_parts(self) -> (Vec<Vec3>, Vec<u32>) {
        (self.positions, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetrahedron_shape() {
        let seed = SeedMesh::tetrahedron();
        assert_eq!(seed.vertex_count(), 4);
        assert_eq!(seed.triangle_count(), 4);
        assert_eq!(seed.indices(), &[0, 1, 2, 0, 3, 1, 1, 3, 2, 0, 2, 3]);
    }

    #[test]
    fn test_tetrahedron_vertices_unit_length() {
        let seed = SeedMesh::tetrahedron();
        for position in seed.positions() {
            assert!((position.norm() - 1.0).abs() < UNIT_TOLERANCE);
        }
    }

    #[test]
    fn test_tetrahedron_validates() {
        let seed = SeedMesh::tetrahedron();
        let (positions, indices) = seed.into_parts();
        assert!(SeedMesh::new(positions, indices).is_ok());
    }

    #[test]
    fn test_empty_seed_rejected() {
        assert_eq!(
            SeedMesh::new(Vec::new(), Vec::new()),
            Err(SphereError::EmptySeed)
        );
    }

    #[test]
    fn test_non_triangle_index_count_rejected() {
        let positions = vec![Vec3::new(0.0, 0.0, 1.0)];
        let result = SeedMesh::new(positions, vec![0, 0]);
        assert_eq!(result, Err(SphereError::IndexCountNotTriangles(2)));
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let positions = vec![Vec3::new(0.0, 0.0, 1.0)];
        let result = SeedMesh::new(positions, vec![0, 0, 7]);
        assert_eq!(
            result,
            Err(SphereError::SeedIndexOutOfRange { index: 7, len: 1 })
        );
    }

    #[test]
    fn test_non_unit_vertex_rejected() {
        let positions = vec![Vec3::new(0.0, 0.0, 2.0)];
        let result = SeedMesh::new(positions, vec![0, 0, 0]);
        assert!(matches!(
            result,
            Err(SphereError::NotUnitLength { index: 0, .. })
        ));
    }
}
