//! Error types for sphere mesh construction and lookup.

/// Errors that can occur building or querying sphere meshes.
#[derive(Debug, Clone, PartialEq)]
pub enum SphereError {
    /// A vertex store lookup used an index that was never issued.
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of vertices in the store.
        len: usize,
    },
    /// The seed mesh has no vertices or no indices.
    EmptySeed,
    /// The seed index count is not a multiple of 3.
    IndexCountNotTriangles(usize),
    /// A seed triangle references a vertex that does not exist.
    SeedIndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Number of seed vertices.
        len: usize,
    },
    /// A seed vertex does not lie on the unit sphere.
    NotUnitLength {
        /// Position of the vertex in the seed.
        index: usize,
        /// Its actual Euclidean norm.
        norm: f32,
    },
}

impl std::fmt::Display for SphereError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "vertex index {index} out of range (store has {len})")
            }
            Self::EmptySeed => write!(f, "seed mesh has no vertices or no indices"),
            Self::IndexCountNotTriangles(count) => {
                write!(f, "seed index count {count} is not a multiple of 3")
            }
            Self::SeedIndexOutOfRange { index, len } => {
                write!(f, "seed index {index} out of range ({len} vertices)")
            }
            Self::NotUnitLength { index, norm } => {
                write!(f, "seed vertex {index} has norm {norm}, expected 1")
            }
        }
    }
}

impl std::error::Error for SphereError {}
