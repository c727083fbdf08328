use thiserror::Error;

/// Contract violations reported by [`Earcut::try_earcut`](crate::Earcut::try_earcut) and
/// [`flatten`](crate::flatten).
///
/// Bad geometry (self-intersections, zero area, duplicate points) is never an error; it just
/// yields fewer triangles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EarcutError {
    #[error("vertices need at least 2 coordinates, got {0}")]
    InvalidDimensions(usize),

    #[error("vertex buffer of length {len} is not a multiple of {dimensions} coordinates")]
    TruncatedVertex { len: usize, dimensions: usize },

    #[error("{vertex_count} vertices cannot be numbered by an index type holding at most {max_index}")]
    TooManyVertices { vertex_count: usize, max_index: usize },

    #[error("the first hole starts at vertex 0, leaving the outer ring empty")]
    EmptyOuterRing,

    #[error("hole index {index} at position {position} is past the last vertex ({vertex_count} vertices)")]
    HoleIndexOutOfBounds {
        position: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("hole indices must be ascending, but {index} at position {position} follows {previous}")]
    HoleIndicesNotAscending {
        position: usize,
        previous: usize,
        index: usize,
    },

    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate { vertex: usize },

    #[error("point {point} of ring {ring} has {found} coordinates, expected {expected}")]
    InconsistentDimensions {
        ring: usize,
        point: usize,
        expected: usize,
        found: usize,
    },
}
