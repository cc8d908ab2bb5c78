//! Subdivision session: the state machine over a vertex store.

use crate::math::unit_midpoint;
use crate::mesh::MeshData;

use super::{SeedMesh, VertexStore};

/// A sphere mesh being refined and coarsened interactively.
///
/// The session owns the [`VertexStore`] and the current flat index list, and
/// tracks three levels:
///
/// - `current_depth` - the level the index list describes, in
///   `[0, max_depth]`
/// - `deepest_computed_depth` - the highest level whose midpoint vertices
///   have ever been materialized; never decreases
/// - `max_depth` - the configured ceiling
///
/// [`subdivide`](Self::subdivide) refines by one level, appending midpoint
/// vertices only on the first visit to a level; later visits recover the
/// cached vertex indices by offset arithmetic alone. [`coarsen`](Self::coarsen)
/// drops back one level by selecting the parent corners out of each group of
/// four child triangles and never touches the store. Both replace the index
/// list wholesale and are silent no-ops at their boundary.
///
/// # Example
///
/// ```
/// use subsphere_core::sphere::{SeedMesh, SphereSession};
///
/// let mut session = SphereSession::new(SeedMesh::tetrahedron(), 6);
/// session.subdivide();
/// assert_eq!(session.triangle_count(), 16);
/// session.coarsen();
/// assert_eq!(session.triangle_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SphereSession {
    store: VertexStore,
    indices: Vec<u32>,
    seed_triangles: usize,
    current_depth: u32,
    deepest_computed: u32,
    max_depth: u32,
}

impl SphereSession {
    /// Create a session at depth 0 from a validated seed mesh.
    pub fn new(seed: SeedMesh, max_depth: u32) -> Self {
        let (positions, indices) = seed.into_parts();
        let mut store = VertexStore::with_capacity(positions.len());
        for position in positions {
            store.append(position);
        }
        Self {
            store,
            seed_triangles: indices.len() / 3,
            indices,
            current_depth: 0,
            deepest_computed: 0,
            max_depth,
        }
    }

    /// Start at a higher depth by replaying `subdivide` that many times.
    ///
    /// Replaying (rather than jumping) is what materializes the midpoint
    /// vertices of every level along the way, so later coarsen/subdivide
    /// round trips stay purely index arithmetic. Clamped to `max_depth`.
    pub fn with_start_depth(mut self, depth: u32) -> Self {
        for _ in 0..depth {
            if !self.subdivide() {
                break;
            }
        }
        self
    }

    /// Refine the mesh by one subdivision level.
    ///
    /// On the first visit to a level, every triangle gets three new midpoint
    /// vertices appended to the store (one per edge, not shared with
    /// neighboring triangles). On a revisit the midpoint indices are
    /// recovered arithmetically and no vertices are appended.
    ///
    /// Returns `false` without changing anything when already at `max_depth`.
    pub fn subdivide(&mut self) -> bool {
        if self.current_depth == self.max_depth {
            return false;
        }
        self.current_depth += 1;
        if self.current_depth > self.deepest_computed {
            self.deepest_computed += 1;
            self.indices = self.subdivide_first_visit();
        } else {
            self.indices = subdivide_cached(&self.indices);
        }
        log::debug!(
            "subdivided to level {} ({} triangles, {} vertices)",
            self.current_depth,
            self.triangle_count(),
            self.store.len()
        );
        true
    }

    /// Drop the mesh back one subdivision level.
    ///
    /// Selects the parent corners out of each 12-index child group; the
    /// vertex store is untouched. Returns `false` without changing anything
    /// when already at depth 0.
    pub fn coarsen(&mut self) -> bool {
        if self.current_depth == 0 {
            return false;
        }
        self.current_depth -= 1;
        self.indices = coarsen_indices(&self.indices);
        log::debug!(
            "coarsened to level {} ({} triangles)",
            self.current_depth,
            self.triangle_count()
        );
        true
    }

    /// Full geometric subdivision of the current index list.
    ///
    /// For each triangle the midpoints are appended in `m01, m12, m20`
    /// order, and the four children are emitted as
    /// `(i0,c01,c20) (c20,c01,c12) (c12,c01,i1) (c20,c12,i2)`. Both orders
    /// are load-bearing: the cached-subdivision offsets and the coarsening
    /// group layout assume exactly this emission.
    fn subdivide_first_visit(&mut self) -> Vec<u32> {
        let triangles = self.indices.len() / 3;
        let mut next = Vec::with_capacity(self.indices.len() * 4);
        for t in 0..triangles {
            let i0 = self.indices[3 * t];
            let i1 = self.indices[3 * t + 1];
            let i2 = self.indices[3 * t + 2];
            // Seed validation plus this procedure keep every index in range.
            let p0 = self.store.positions()[i0 as usize];
            let p1 = self.store.positions()[i1 as usize];
            let p2 = self.store.positions()[i2 as usize];
            let c01 = self.store.append(unit_midpoint(&p0, &p1));
            let c12 = self.store.append(unit_midpoint(&p1, &p2));
            let c20 = self.store.append(unit_midpoint(&p2, &p0));
            #[rustfmt::skip]
            next.extend_from_slice(&[
                i0, c01, c20,
                c20, c01, c12,
                c12, c01, i1,
                c20, c12, i2,
            ]);
        }
        next
    }

    /// Get the displayed subdivision level.
    pub fn current_depth(&self) -> u32 {
        self.current_depth
    }

    /// Get the highest level whose vertices have been materialized.
    pub fn deepest_computed_depth(&self) -> u32 {
        self.deepest_computed
    }

    /// Get the configured depth ceiling.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get the number of triangles at the current level.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of triangles a given level would have.
    ///
    /// `seed triangles x 4^depth`, independent of the session state.
    pub fn triangle_count_at(&self, depth: u32) -> usize {
        self.seed_triangles * 4_usize.pow(depth)
    }

    /// Get the number of vertices ever materialized.
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    /// Flat vertex positions, 3 floats per vertex, in store order.
    ///
    /// Covers every vertex ever materialized, not just the ones the current
    /// level references; indices stay valid across coarsening that way.
    pub fn vertex_data(&self) -> Vec<f32> {
        self.store.flat_data()
    }

    /// Flat triangle indices of the current level, 3 per triangle.
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    /// Get the vertex store.
    pub fn store(&self) -> &VertexStore {
        &self.store
    }

    /// Snapshot the current level into a [`MeshData`] for upload.
    pub fn to_mesh_data(&self) -> MeshData {
        MeshData::new()
            .with_positions(self.vertex_data())
            .with_indices(self.indices.clone())
            .with_label("sphere")
    }
}

/// Re-subdivide a mesh whose child vertices already exist.
///
/// When the level being entered was produced by a full subdivision before,
/// the midpoint vertices of triangle `i` sit at indices `T + 3i + {0,1,2}`,
/// where `T` is the current triangle count. This recovers them without
/// touching any geometry. Only valid for meshes produced by
/// `subdivide_first_visit` along the same path.
fn subdivide_cached(indices: &[u32]) -> Vec<u32> {
    let triangles = (indices.len() / 3) as u32;
    let mut next = Vec::with_capacity(indices.len() * 4);
    for t in 0..triangles {
        let base = (3 * t) as usize;
        let c01 = triangles + 3 * t;
        let c12 = c01 + 1;
        let c20 = c01 + 2;
        #[rustfmt::skip]
        next.extend_from_slice(&[
            indices[base], c01, c20,
            c20, c01, c12,
            c12, c01, indices[base + 1],
            c20, c12, indices[base + 2],
        ]);
    }
    next
}

/// Undo one subdivision level by index selection.
///
/// Each parent triangle occupies 12 consecutive child indices; its original
/// corners sit at offsets 0, 8 and 11 of the group.
fn coarsen_indices(indices: &[u32]) -> Vec<u32> {
    let groups = indices.len() / 12;
    let mut next = Vec::with_capacity(groups * 3);
    for g in 0..groups {
        let base = 12 * g;
        next.extend_from_slice(&[indices[base], indices[base + 8], indices[base + 11]]);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sphere::UNIT_TOLERANCE;

    fn tetra_session(max_depth: u32) -> SphereSession {
        SphereSession::new(SeedMesh::tetrahedron(), max_depth)
    }

    #[test]
    fn test_one_subdivision_counts() {
        let mut session = tetra_session(6);
        assert!(session.subdivide());
        assert_eq!(session.triangle_count(), 16);
        // 3 new vertices per seed triangle, no sharing across edges.
        assert_eq!(session.vertex_count(), 16);
        assert_eq!(session.current_depth(), 1);
        assert_eq!(session.deepest_computed_depth(), 1);
    }

    #[test]
    fn test_child_emission_order() {
        let mut session = tetra_session(6);
        session.subdivide();
        // Triangle (0,1,2) gets midpoints c01=4, c12=5, c20=6;
        // triangle (0,3,1) gets c01=7, c12=8, c20=9.
        #[rustfmt::skip]
        let expected: &[u32] = &[
            0, 4, 6,  6, 4, 5,  5, 4, 1,  6, 5, 2,
            0, 7, 9,  9, 7, 8,  8, 7, 3,  9, 8, 1,
        ];
        assert_eq!(&session.index_data()[..24], expected);
    }

    #[test]
    fn test_coarsen_restores_seed_indices() {
        let mut session = tetra_session(6);
        session.subdivide();
        assert!(session.coarsen());
        assert_eq!(session.triangle_count(), 4);
        assert_eq!(
            session.index_data(),
            SeedMesh::tetrahedron().indices(),
            "coarsening must restore the exact parent indices"
        );
        // Vertices created by the subdivision stay in the store.
        assert_eq!(session.vertex_count(), 16);
    }

    #[test]
    fn test_revisit_appends_no_vertices() {
        let mut session = tetra_session(6);
        session.subdivide();
        session.subdivide();
        let first_visit = session.index_data().to_vec();
        let vertices = session.vertex_count();

        session.coarsen();
        session.subdivide();

        assert_eq!(session.index_data(), first_visit.as_slice());
        assert_eq!(session.vertex_count(), vertices);
    }

    #[test]
    fn test_subdivide_clamps_at_max_depth() {
        let mut session = tetra_session(6);
        for _ in 0..6 {
            assert!(session.subdivide());
        }
        assert_eq!(session.triangle_count(), 4 * 4_usize.pow(6));
        assert_eq!(session.triangle_count(), 16384);

        assert!(!session.subdivide());
        assert_eq!(session.current_depth(), 6);
        assert_eq!(session.triangle_count(), 16384);
    }

    #[test]
    fn test_coarsen_clamps_at_zero() {
        let mut session = tetra_session(6);
        let indices = session.index_data().to_vec();
        assert!(!session.coarsen());
        assert_eq!(session.current_depth(), 0);
        assert_eq!(session.index_data(), indices.as_slice());
        assert_eq!(session.vertex_count(), 4);
    }

    #[test]
    fn test_start_depth_replays_subdivisions() {
        let session = SphereSession::new(SeedMesh::tetrahedron(), 6).with_start_depth(3);
        assert_eq!(session.current_depth(), 3);
        assert_eq!(session.deepest_computed_depth(), 3);
        assert_eq!(session.triangle_count(), session.triangle_count_at(3));
    }

    #[test]
    fn test_start_depth_clamped_to_max() {
        let session = SphereSession::new(SeedMesh::tetrahedron(), 2).with_start_depth(5);
        assert_eq!(session.current_depth(), 2);
    }

    #[test]
    fn test_vertices_stay_on_unit_sphere() {
        let mut session = tetra_session(4);
        while session.subdivide() {}
        for position in session.store().positions() {
            assert!((position.norm() - 1.0).abs() < UNIT_TOLERANCE);
        }
    }

    #[test]
    fn test_triangle_count_formula() {
        let session = tetra_session(6);
        assert_eq!(session.triangle_count_at(0), 4);
        assert_eq!(session.triangle_count_at(1), 16);
        assert_eq!(session.triangle_count_at(6), 16384);
    }

    #[test]
    fn test_mesh_data_snapshot() {
        let mut session = tetra_session(6);
        session.subdivide();
        let mesh = session.to_mesh_data();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 16);
        assert_eq!(mesh.label(), Some("sphere"));
    }
}
