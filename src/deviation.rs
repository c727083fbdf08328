//! Area-based quality check for a triangulation.

use alloc::vec::Vec;
use num_traits::float::Float;

use crate::geom::signed_area;
use crate::Index;

/// Returns the relative difference between the polygon area and the area covered by
/// `triangles`; `0` means the triangulation is exact. Used to verify triangulation output.
///
/// Takes the same flat layout as [`Earcut::earcut`](crate::Earcut::earcut). Holes with fewer than
/// three vertices have no area. Triangles referring to vertices past the end of the buffer are
/// ignored.
pub fn deviation<T: Float, N: Index>(
    vertices: &[T],
    hole_indices: &[N],
    dimensions: usize,
    triangles: &[N],
) -> T {
    if dimensions < 2 {
        return T::zero();
    }
    let data: Vec<[T; 2]> = vertices
        .chunks_exact(dimensions)
        .map(|v| [v[0], v[1]])
        .collect();

    let outer_len = hole_indices
        .first()
        .map_or(data.len(), |h| h.into_usize().min(data.len()));
    let mut polygon_area = if outer_len < 3 {
        T::zero()
    } else {
        signed_area(&data, 0, outer_len).abs()
    };
    for (k, hole) in hole_indices.iter().enumerate() {
        let start = hole.into_usize().min(data.len());
        let end = hole_indices
            .get(k + 1)
            .map_or(data.len(), |next| next.into_usize().min(data.len()));
        if end >= start + 3 {
            polygon_area = polygon_area - signed_area(&data, start, end).abs();
        }
    }

    let triangles_area = triangles
        .chunks_exact(3)
        .filter_map(|t| {
            let a = data.get(t[0].into_usize())?;
            let b = data.get(t[1].into_usize())?;
            let c = data.get(t[2].into_usize())?;
            Some(((a[0] - c[0]) * (b[1] - a[1]) - (a[0] - b[0]) * (c[1] - a[1])).abs())
        })
        .fold(T::zero(), |sum, a| sum + a);

    if polygon_area == T::zero() && triangles_area == T::zero() {
        T::zero()
    } else {
        ((polygon_area - triangles_area) / polygon_area).abs()
    }
}
