//! Conversion from nested rings to the flat vertex layout.

use alloc::vec::Vec;

use crate::EarcutError;

/// A polygon in the flat layout taken by [`Earcut::earcut`](crate::Earcut::earcut).
#[derive(Clone, Debug, PartialEq)]
pub struct Flattened<T> {
    /// coordinates of all rings, one vertex after the other
    pub vertices: Vec<T>,
    /// ordinal of the first vertex of each hole
    pub hole_indices: Vec<usize>,
    /// coordinates per vertex
    pub dimensions: usize,
}

/// Turns nested rings into the flat layout. The first ring is the outer boundary, every other
/// ring is a hole.
///
/// The number of coordinates per vertex is taken from the first point (2 when there are no
/// points at all); every other point must have the same length.
///
/// ```
/// let square = vec![
///     vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]],
///     vec![[3.0, 3.0], [7.0, 3.0], [7.0, 7.0], [3.0, 7.0]],
/// ];
/// let flat = earcut_flat::flatten(&square).unwrap();
/// assert_eq!(flat.vertices.len(), 16);
/// assert_eq!(flat.hole_indices, [4]);
/// assert_eq!(flat.dimensions, 2);
/// ```
pub fn flatten<T, P, R>(rings: &[R]) -> Result<Flattened<T>, EarcutError>
where
    T: Copy,
    P: AsRef<[T]>,
    R: AsRef<[P]>,
{
    let dimensions = rings
        .iter()
        .find_map(|ring| ring.as_ref().first())
        .map_or(2, |p| p.as_ref().len());
    if dimensions < 2 {
        return Err(EarcutError::InvalidDimensions(dimensions));
    }

    let num_points: usize = rings.iter().map(|r| r.as_ref().len()).sum();
    let mut flat = Flattened {
        vertices: Vec::with_capacity(num_points * dimensions),
        hole_indices: Vec::with_capacity(rings.len().saturating_sub(1)),
        dimensions,
    };

    let mut count = 0;
    for (ring_idx, ring) in rings.iter().enumerate() {
        if ring_idx > 0 {
            flat.hole_indices.push(count);
        }
        for (point_idx, point) in ring.as_ref().iter().enumerate() {
            let point = point.as_ref();
            if point.len() != dimensions {
                return Err(EarcutError::InconsistentDimensions {
                    ring: ring_idx,
                    point: point_idx,
                    expected: dimensions,
                    found: point.len(),
                });
            }
            flat.vertices.extend_from_slice(point);
            count += 1;
        }
    }
    Ok(flat)
}
