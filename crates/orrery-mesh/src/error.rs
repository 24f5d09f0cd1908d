//! Mesh error types.

/// Errors reported by mesh validation and persistence.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The index list length is not a multiple of three.
    #[error("index count {0} is not a multiple of 3")]
    RaggedIndices(usize),

    /// A triangle references a vertex that does not exist.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index value.
        index: u32,
        /// Position of the index in the index list.
        position: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// Writing the mesh to its destination failed.
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}
