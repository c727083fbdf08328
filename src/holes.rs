//! Splicing hole rings into the outer ring.

use alloc::vec::Vec;
use core::cmp::Ordering;
use num_traits::float::Float;

use crate::geom::{area, locally_inside, point_in_triangle};
use crate::ring::{filter_points, get_leftmost, linked_list, split_polygon, Node, NodeIndex};
use crate::Index;

/// Link every hole into the outer ring, producing a single ring without holes.
///
/// Holes are processed from left to right by their leftmost vertex. Equal `x` falls back to
/// `y`, then to the vertex ordinal, so the bridge order is fully deterministic.
pub(crate) fn eliminate_holes<T: Float, N: Index>(
    nodes: &mut Vec<Node<T>>,
    data: &[[T; 2]],
    queue: &mut Vec<NodeIndex>,
    hole_indices: &[N],
    mut outer_node_i: NodeIndex,
) -> NodeIndex {
    queue.clear();
    for (k, hole) in hole_indices.iter().enumerate() {
        let start = hole.into_usize().min(data.len());
        let end = hole_indices
            .get(k + 1)
            .map_or(data.len(), |next| next.into_usize().min(data.len()));
        if let Some(list_i) = linked_list(nodes, data, start, end, false) {
            let list = node_mut!(nodes, list_i);
            if list_i == list.next_i {
                list.steiner = true;
            }
            queue.push(get_leftmost(nodes, list_i));
        }
    }

    queue.sort_by(|&a, &b| {
        let (a, b) = (node!(nodes, a), node!(nodes, b));
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
            .then_with(|| a.i.cmp(&b.i))
    });

    for &hole_i in queue.iter() {
        outer_node_i = eliminate_hole(nodes, hole_i, outer_node_i);
    }
    outer_node_i
}

/// find a bridge between a hole and the outer ring and splice them together
fn eliminate_hole<T: Float>(
    nodes: &mut Vec<Node<T>>,
    hole_i: NodeIndex,
    outer_node_i: NodeIndex,
) -> NodeIndex {
    let Some(bridge_i) = find_hole_bridge(nodes, node!(nodes, hole_i), outer_node_i) else {
        log::debug!(
            "no bridge found for hole at vertex {}, leaving it out",
            node!(nodes, hole_i).i
        );
        return outer_node_i;
    };
    let bridge_reverse_i = split_polygon(nodes, bridge_i, hole_i);

    // filter collinear points around the cuts
    let end_i = Some(node!(nodes, bridge_reverse_i).next_i);
    filter_points(nodes, bridge_reverse_i, end_i);
    let end_i = Some(node!(nodes, bridge_i).next_i);
    filter_points(nodes, bridge_i, end_i)
}

/// David Eberly's algorithm for finding a bridge between a hole and the outer ring
fn find_hole_bridge<T: Float>(
    nodes: &[Node<T>],
    hole: &Node<T>,
    outer_node_i: NodeIndex,
) -> Option<NodeIndex> {
    let (hx, hy) = (hole.x, hole.y);
    let mut qx = T::neg_infinity();
    let mut m_i: Option<NodeIndex> = None;

    // find a segment intersected by a ray from the hole's leftmost point to the left;
    // the segment's endpoint with lesser x is a potential connection point
    let mut p_i = outer_node_i;
    loop {
        let p = node!(nodes, p_i);
        let p_next = node!(nodes, p.next_i);
        if hy <= p.y && hy >= p_next.y && p_next.y != p.y {
            let x = p.x + (hy - p.y) * (p_next.x - p.x) / (p_next.y - p.y);
            if x <= hx && x > qx {
                qx = x;
                m_i = Some(if p.x < p_next.x { p_i } else { p.next_i });
                if x == hx {
                    // hole touches the outer segment
                    return m_i;
                }
            }
        }
        p_i = p.next_i;
        if p_i == outer_node_i {
            break;
        }
    }

    let mut m_i = m_i?;

    // look for points inside the triangle of hole point, segment intersection and endpoint;
    // with none found the connection is valid, otherwise take the point with the smallest
    // angle to the ray
    let stop_i = m_i;
    let (mx, my) = {
        let m = node!(nodes, m_i);
        (m.x, m.y)
    };
    let (tri_ax, tri_cx) = if hy < my { (hx, qx) } else { (qx, hx) };
    let mut tan_min = T::infinity();

    p_i = m_i;
    loop {
        let p = node!(nodes, p_i);
        if (hx >= p.x && p.x >= mx && hx != p.x)
            && point_in_triangle(tri_ax, hy, mx, my, tri_cx, hy, p.x, p.y)
        {
            let tan = (hy - p.y).abs() / (hx - p.x);
            let m = node!(nodes, m_i);
            if locally_inside(nodes, p, hole)
                && (tan < tan_min
                    || (tan == tan_min
                        && (p.x > m.x || (p.x == m.x && sector_contains_sector(nodes, m, p)))))
            {
                m_i = p_i;
                tan_min = tan;
            }
        }

        p_i = p.next_i;
        if p_i == stop_i {
            return Some(m_i);
        }
    }
}

/// whether the sector at vertex m contains the sector at vertex p (same coordinates)
fn sector_contains_sector<T: Float>(nodes: &[Node<T>], m: &Node<T>, p: &Node<T>) -> bool {
    area(node!(nodes, m.prev_i), m, node!(nodes, p.prev_i)) < T::zero()
        && area(node!(nodes, p.next_i), m, node!(nodes, m.next_i)) < T::zero()
}
