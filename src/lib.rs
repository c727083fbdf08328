//! Polygon triangulation by ear clipping, based on the
//! [Earcut](https://github.com/mapbox/earcut) algorithm.
//!
//! Polygons come in as a flat coordinate buffer (optionally with extra per-vertex dimensions
//! that are carried along but ignored) plus the ordinals of the first vertex of each hole. The
//! result is a flat list of vertex ordinals, three per triangle.
//!
//! ```
//! use earcut_flat::{deviation, Earcut};
//!
//! let vertices = [0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0, 3.0, 3.0, 7.0, 3.0, 7.0, 7.0, 3.0, 7.0];
//! let hole_indices: &[u32] = &[4];
//! let mut triangles = Vec::new();
//! Earcut::new().earcut(&vertices, hole_indices, 2, &mut triangles);
//! assert_eq!(triangles.len(), 8 * 3);
//! assert_eq!(deviation(&vertices, hole_indices, 2, &triangles), 0.0);
//! ```
//!
//! Coordinates must be finite. The unchecked entry points do not verify this, nor that hole
//! indices are ascending and in range; use [`Earcut::try_earcut`] when the input is untrusted.

#![no_std]

extern crate alloc;

macro_rules! node {
    ($self:ident.$nodes:ident, $index:expr) => {
        unsafe {
            debug_assert!($index.get() < $self.$nodes.len() as u32);
            $self.$nodes.get_unchecked($index.get() as usize)
        }
    };
    ($nodes:ident, $index:expr) => {
        unsafe {
            debug_assert!($index.get() < $nodes.len() as u32);
            $nodes.get_unchecked($index.get() as usize)
        }
    };
}

macro_rules! node_mut {
    ($self:ident.$nodes:ident, $index:expr) => {
        unsafe {
            debug_assert!($index.get() < $self.$nodes.len() as u32);
            $self.$nodes.get_unchecked_mut($index.get() as usize)
        }
    };
    ($nodes:ident, $index:expr) => {
        unsafe {
            debug_assert!($index.get() < $nodes.len() as u32);
            $nodes.get_unchecked_mut($index.get() as usize)
        }
    };
}

mod deviation;
mod ear;
mod error;
mod flatten;
mod geom;
mod holes;
mod options;
mod ring;
mod zorder;

pub use deviation::deviation;
pub use error::EarcutError;
pub use flatten::{flatten, Flattened};
pub use options::EarcutOptions;

use alloc::vec::Vec;
use num_traits::float::Float;

use ring::{linked_list, Node, NodeIndex};
use zorder::ZOrderBounds;

/// Index of a vertex
pub trait Index: Copy {
    /// largest vertex ordinal the type can hold
    const MAX: usize;
    fn into_usize(self) -> usize;
    fn from_usize(v: usize) -> Self;
}
impl Index for u32 {
    const MAX: usize = u32::MAX as usize;
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= <Self as Index>::MAX, "vertex ordinal {v} does not fit in u32");
        v as Self
    }
}
impl Index for u16 {
    const MAX: usize = u16::MAX as usize;
    fn into_usize(self) -> usize {
        self as usize
    }
    fn from_usize(v: usize) -> Self {
        debug_assert!(v <= <Self as Index>::MAX, "vertex ordinal {v} does not fit in u16");
        v as Self
    }
}
impl Index for usize {
    const MAX: usize = usize::MAX;
    fn into_usize(self) -> usize {
        self
    }
    fn from_usize(v: usize) -> Self {
        v as Self
    }
}

/// Instance of the earcut algorithm.
///
/// Holds the node arena and scratch buffers; reuse one instance for many polygons to avoid
/// reallocating them.
pub struct Earcut<T: Float> {
    data: Vec<[T; 2]>,
    nodes: Vec<Node<T>>,
    queue: Vec<NodeIndex>,
    options: EarcutOptions,
}

impl<T: Float> Default for Earcut<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Earcut<T> {
    /// Creates a new instance with default [`EarcutOptions`].
    pub fn new() -> Self {
        Self::with_options(EarcutOptions::default())
    }

    pub fn with_options(options: EarcutOptions) -> Self {
        Self {
            data: Vec::new(),
            nodes: Vec::new(),
            queue: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &EarcutOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: EarcutOptions) {
        self.options = options;
    }

    fn reset(&mut self, capacity: usize) {
        self.nodes.clear();
        self.nodes.reserve(capacity);
        self.nodes.push(Node::new(0, T::infinity(), T::infinity())); // sentinel
    }

    /// Triangulates a polygon given as a flat coordinate buffer.
    ///
    /// `vertices` holds `dimensions` coordinates per vertex, of which only the first two are
    /// used. `hole_indices` are the ordinals of the first vertex of each hole, ascending; the
    /// outer ring ends at the first of them. `triangles_out` is cleared and filled with vertex
    /// ordinals, three per triangle, so every vertex ordinal must fit in `N`.
    ///
    /// Broken geometry never fails: self-intersecting or degenerate input yields whatever
    /// triangles could be recovered, possibly none.
    pub fn earcut<N: Index>(
        &mut self,
        vertices: &[T],
        hole_indices: &[N],
        dimensions: usize,
        triangles_out: &mut Vec<N>,
    ) {
        self.data.clear();
        triangles_out.clear();
        if dimensions < 2 {
            log::warn!("cannot triangulate vertices with {dimensions} coordinates");
            return;
        }
        self.data
            .extend(vertices.chunks_exact(dimensions).map(|v| [v[0], v[1]]));
        if self.data.len() < 3 {
            return;
        }
        self.earcut_impl(hole_indices, triangles_out);
    }

    /// Same as [`Earcut::earcut`] but checks the input first.
    ///
    /// Fails when `dimensions < 2`, when the buffer does not hold a whole number of vertices,
    /// when there are more vertices than `N` can number, when the first hole starts at vertex 0
    /// (leaving no outer ring), when hole indices are out of range or descending, or when a
    /// coordinate is not finite.
    pub fn try_earcut<N: Index>(
        &mut self,
        vertices: &[T],
        hole_indices: &[N],
        dimensions: usize,
        triangles_out: &mut Vec<N>,
    ) -> Result<(), EarcutError> {
        triangles_out.clear();
        check_input(vertices, hole_indices, dimensions)?;
        self.earcut(vertices, hole_indices, dimensions, triangles_out);
        Ok(())
    }

    /// Triangulates a polygon given as 2D points.
    pub fn earcut_points<N: Index>(
        &mut self,
        points: impl IntoIterator<Item = [T; 2]>,
        hole_indices: &[N],
        triangles_out: &mut Vec<N>,
    ) {
        self.data.clear();
        self.data.extend(points);
        triangles_out.clear();
        if self.data.len() < 3 {
            return;
        }
        self.earcut_impl(hole_indices, triangles_out);
    }

    fn earcut_impl<N: Index>(&mut self, hole_indices: &[N], triangles_out: &mut Vec<N>) {
        triangles_out.reserve(self.data.len() + 1);
        self.reset(self.data.len() / 2 * 3);

        let has_holes = !hole_indices.is_empty();
        let outer_len = match hole_indices.first() {
            Some(first) => first.into_usize().min(self.data.len()),
            None => self.data.len(),
        };

        // create nodes
        let Some(mut outer_node_i) = linked_list(&mut self.nodes, &self.data, 0, outer_len, true)
        else {
            return;
        };
        let outer_node = node!(self.nodes, outer_node_i);
        if outer_node.next_i == outer_node.prev_i {
            return;
        }
        if has_holes {
            outer_node_i = holes::eliminate_holes(
                &mut self.nodes,
                &self.data,
                &mut self.queue,
                hole_indices,
                outer_node_i,
            );
        }

        // if the shape is not too simple, use a z-order curve hash; bounds come from the outer ring
        let bounds = if self.data.len() > self.options.index_threshold {
            ZOrderBounds::from_points(&self.data[..outer_len])
        } else {
            None
        };

        log::trace!(
            "triangulating {} vertices, {} holes, z-order index: {}",
            self.data.len(),
            hole_indices.len(),
            bounds.is_some()
        );

        ear::earcut_linked(
            &mut self.nodes,
            outer_node_i,
            triangles_out,
            bounds,
            self.options.max_split_depth,
        );

        log::trace!("emitted {} triangles", triangles_out.len() / 3);
    }
}

fn check_input<T: Float, N: Index>(
    vertices: &[T],
    hole_indices: &[N],
    dimensions: usize,
) -> Result<(), EarcutError> {
    if dimensions < 2 {
        return Err(EarcutError::InvalidDimensions(dimensions));
    }
    if vertices.len() % dimensions != 0 {
        return Err(EarcutError::TruncatedVertex {
            len: vertices.len(),
            dimensions,
        });
    }
    let vertex_count = vertices.len() / dimensions;
    if vertex_count > 0 && vertex_count - 1 > N::MAX {
        return Err(EarcutError::TooManyVertices {
            vertex_count,
            max_index: N::MAX,
        });
    }
    if vertex_count > 0 && hole_indices.first().is_some_and(|h| h.into_usize() == 0) {
        return Err(EarcutError::EmptyOuterRing);
    }

    let mut previous = 0;
    for (position, hole) in hole_indices.iter().enumerate() {
        let index = hole.into_usize();
        if index > vertex_count {
            return Err(EarcutError::HoleIndexOutOfBounds {
                position,
                index,
                vertex_count,
            });
        }
        if index < previous {
            return Err(EarcutError::HoleIndicesNotAscending {
                position,
                previous,
                index,
            });
        }
        previous = index;
    }

    if let Some(vertex) = vertices
        .chunks_exact(dimensions)
        .position(|v| !v[0].is_finite() || !v[1].is_finite())
    {
        return Err(EarcutError::NonFiniteCoordinate { vertex });
    }
    Ok(())
}
