use thiserror::Error;

/// The error encountered when operating on a [`DirectedGraph`].
///
/// Both kinds indicate a programming error on the caller side. Neither is
/// recovered from internally, and retrying the same call with the same
/// arguments fails again.
///
/// [`DirectedGraph`]: crate::DirectedGraph
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A vertex index outside of `0..vertex_count` was given.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// The edge to be removed does not exist.
    #[error("edge {src} -> {dst} does not exist")]
    EdgeNotFound { src: usize, dst: usize },
}

impl Error {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::VertexOutOfRange { .. })
    }

    pub fn is_edge_not_found(&self) -> bool {
        matches!(self, Error::EdgeNotFound { .. })
    }
}
