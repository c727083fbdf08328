//! Ear slicing and the recovery passes used when it stalls.

use alloc::vec::Vec;
use core::ptr;
use num_traits::float::Float;

use crate::geom::{
    area, equals, intersects, intersects_polygon, locally_inside, middle_inside,
    point_in_triangle,
};
use crate::ring::{filter_points, remove_node, split_polygon, Node, NodeIndex};
use crate::zorder::{index_curve, ZOrderBounds};
use crate::Index;

/// Escalation state of the ear slicing loop over one ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pass {
    Basic,
    /// duplicate and collinear points were removed
    Simplified,
    /// small local self-intersections were cut off
    IntersectionsCured,
}

/// Main ear slicing loop which triangulates a ring.
///
/// When no ear can be found in a full turn the ring is simplified, then cured of local
/// self-intersections, and finally split in two along a valid diagonal. `split_budget` is the
/// number of nested splits still allowed below this ring.
pub(crate) fn earcut_linked<T: Float, N: Index>(
    nodes: &mut Vec<Node<T>>,
    ear_i: NodeIndex,
    triangles: &mut Vec<N>,
    bounds: Option<ZOrderBounds<T>>,
    split_budget: usize,
) {
    if let Some(bounds) = &bounds {
        index_curve(nodes, ear_i, bounds);
    }

    let mut ear_i = ear_i;
    let mut pass = Pass::Basic;
    loop {
        let Some(stalled_i) = clip_ears(nodes, ear_i, triangles, bounds.as_ref()) else {
            return;
        };
        log::debug!("ear slicing stalled in {pass:?} pass");
        match pass {
            Pass::Basic => {
                ear_i = filter_points(nodes, stalled_i, None);
                pass = Pass::Simplified;
            }
            Pass::Simplified => {
                let filtered_i = filter_points(nodes, stalled_i, None);
                ear_i = cure_local_intersections(nodes, filtered_i, triangles);
                pass = Pass::IntersectionsCured;
            }
            Pass::IntersectionsCured => {
                split_earcut(nodes, stalled_i, triangles, bounds, split_budget);
                return;
            }
        }
    }
}

/// Cut off ears until the ring is used up (`None`) or a full turn finds none. In the latter case
/// the node where the turn ended is returned.
fn clip_ears<T: Float, N: Index>(
    nodes: &mut [Node<T>],
    mut ear_i: NodeIndex,
    triangles: &mut Vec<N>,
    bounds: Option<&ZOrderBounds<T>>,
) -> Option<NodeIndex> {
    let mut stop_i = ear_i;
    loop {
        let ear = node!(nodes, ear_i);
        if ear.prev_i == ear.next_i {
            return None;
        }
        let (prev_i, next_i) = (ear.prev_i, ear.next_i);

        let is_ear = match bounds {
            Some(bounds) => is_ear_hashed(nodes, ear_i, bounds),
            None => is_ear(nodes, ear_i),
        };
        if is_ear {
            let next = node!(nodes, next_i);
            let next_next_i = next.next_i;
            triangles.extend([
                N::from_usize(node!(nodes, prev_i).i as usize),
                N::from_usize(ear.i as usize),
                N::from_usize(next.i as usize),
            ]);

            remove_node(nodes, ear_i);

            // skipping the next vertex leads to less sliver triangles
            (ear_i, stop_i) = (next_next_i, next_next_i);
            continue;
        }

        ear_i = next_i;
        if ear_i == stop_i {
            return Some(ear_i);
        }
    }
}

/// check whether a node forms a valid ear with its neighbours
fn is_ear<T: Float>(nodes: &[Node<T>], ear_i: NodeIndex) -> bool {
    let b = node!(nodes, ear_i);
    let a = node!(nodes, b.prev_i);
    let c = node!(nodes, b.next_i);

    if area(a, b, c) >= T::zero() {
        // reflex, can't be an ear
        return false;
    }

    // triangle bbox
    let x0 = a.x.min(b.x.min(c.x));
    let y0 = a.y.min(b.y.min(c.y));
    let x1 = a.x.max(b.x.max(c.x));
    let y1 = a.y.max(b.y.max(c.y));

    // no other ring point may lie inside the candidate
    let mut p = node!(nodes, c.next_i);
    let mut p_prev = c;
    while !ptr::eq(p, a) {
        let p_next = node!(nodes, p.next_i);
        if (p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, p.x, p.y)
            && area(p_prev, p, p_next) >= T::zero()
        {
            return false;
        }
        (p_prev, p) = (p, p_next);
    }
    true
}

/// Same test as [`is_ear`], but only nodes whose z key falls in the triangle's key range are
/// examined, walking both ways along the z-order list.
fn is_ear_hashed<T: Float>(nodes: &[Node<T>], ear_i: NodeIndex, bounds: &ZOrderBounds<T>) -> bool {
    let b = node!(nodes, ear_i);
    let a = node!(nodes, b.prev_i);
    let c = node!(nodes, b.next_i);

    if area(a, b, c) >= T::zero() {
        return false;
    }

    let x0 = a.x.min(b.x.min(c.x));
    let y0 = a.y.min(b.y.min(c.y));
    let x1 = a.x.max(b.x.max(c.x));
    let y1 = a.y.max(b.y.max(c.y));

    let min_z = bounds.z_order(x0, y0);
    let max_z = bounds.z_order(x1, y1);

    let blocks = |p: &Node<T>| {
        (p.x >= x0 && p.x <= x1 && p.y >= y0 && p.y <= y1)
            && !ptr::eq(p, a)
            && !ptr::eq(p, c)
            && point_in_triangle(a.x, a.y, b.x, b.y, c.x, c.y, p.x, p.y)
            && area(node!(nodes, p.prev_i), p, node!(nodes, p.next_i)) >= T::zero()
    };

    let mut o_p = b.prev_z_i.map(|i| node!(nodes, i));
    let mut o_n = b.next_z_i.map(|i| node!(nodes, i));

    // look for points inside the triangle in both directions
    while let (Some(p), Some(n)) = (o_p, o_n) {
        if p.z < min_z || n.z > max_z {
            break;
        }
        if blocks(p) {
            return false;
        }
        o_p = p.prev_z_i.map(|i| node!(nodes, i));
        if blocks(n) {
            return false;
        }
        o_n = n.next_z_i.map(|i| node!(nodes, i));
    }

    // look for remaining points in decreasing z-order
    while let Some(p) = o_p {
        if p.z < min_z {
            break;
        }
        if blocks(p) {
            return false;
        }
        o_p = p.prev_z_i.map(|i| node!(nodes, i));
    }

    // look for remaining points in increasing z-order
    while let Some(n) = o_n {
        if n.z > max_z {
            break;
        }
        if blocks(n) {
            return false;
        }
        o_n = n.next_z_i.map(|i| node!(nodes, i));
    }

    true
}

/// Walk the ring and cut off small local self-intersections (a-p-n-b where ap crosses nb),
/// emitting the triangle that becomes available.
fn cure_local_intersections<T: Float, N: Index>(
    nodes: &mut [Node<T>],
    mut start_i: NodeIndex,
    triangles: &mut Vec<N>,
) -> NodeIndex {
    let mut p_i = start_i;
    loop {
        let p = node!(nodes, p_i);
        let p_next_i = p.next_i;
        let p_next = node!(nodes, p_next_i);
        let b_i = p_next.next_i;
        let a = node!(nodes, p.prev_i);
        let b = node!(nodes, b_i);

        if !equals(a, b)
            && intersects(a, p, p_next, b)
            && locally_inside(nodes, a, b)
            && locally_inside(nodes, b, a)
        {
            triangles.extend([
                N::from_usize(a.i as usize),
                N::from_usize(p.i as usize),
                N::from_usize(b.i as usize),
            ]);

            remove_node(nodes, p_i);
            remove_node(nodes, p_next_i);

            (p_i, start_i) = (b_i, b_i);
        }

        p_i = node!(nodes, p_i).next_i;
        if p_i == start_i {
            return filter_points(nodes, p_i, None);
        }
    }
}

/// Last resort: split the ring in two along a valid diagonal and triangulate both halves.
fn split_earcut<T: Float, N: Index>(
    nodes: &mut Vec<Node<T>>,
    start_i: NodeIndex,
    triangles: &mut Vec<N>,
    bounds: Option<ZOrderBounds<T>>,
    split_budget: usize,
) {
    let Some(split_budget) = split_budget.checked_sub(1) else {
        log::warn!(
            "split depth limit reached, leaving a ring at vertex {} untriangulated",
            node!(nodes, start_i).i
        );
        return;
    };

    // look for a valid diagonal that divides the polygon into two
    let mut a_i = start_i;
    loop {
        let a = node!(nodes, a_i);
        let a_next = node!(nodes, a.next_i);
        let a_prev = node!(nodes, a.prev_i);
        let mut b_i = a_next.next_i;

        while b_i != a.prev_i {
            let b = node!(nodes, b_i);
            if a.i != b.i && is_valid_diagonal(nodes, a, b, a_next, a_prev) {
                let mut c_i = split_polygon(nodes, a_i, b_i);

                // filter collinear points around the cuts
                let end_i = Some(node!(nodes, a_i).next_i);
                a_i = filter_points(nodes, a_i, end_i);
                let end_i = Some(node!(nodes, c_i).next_i);
                c_i = filter_points(nodes, c_i, end_i);

                earcut_linked(nodes, a_i, triangles, bounds, split_budget);
                earcut_linked(nodes, c_i, triangles, bounds, split_budget);
                return;
            }
            b_i = b.next_i;
        }

        a_i = a.next_i;
        if a_i == start_i {
            log::debug!("no valid diagonal to split on, giving up on the remaining ring");
            return;
        }
    }
}

/// check if a diagonal between two ring nodes lies in the polygon interior
fn is_valid_diagonal<T: Float>(
    nodes: &[Node<T>],
    a: &Node<T>,
    b: &Node<T>,
    a_next: &Node<T>,
    a_prev: &Node<T>,
) -> bool {
    let b_next = node!(nodes, b.next_i);
    let b_prev = node!(nodes, b.prev_i);
    // doesn't intersect other edges
    (a_next.i != b.i && a_prev.i != b.i && !intersects_polygon(nodes, a, b))
        // locally visible
        && ((locally_inside(nodes, a, b) && locally_inside(nodes, b, a) && middle_inside(nodes, a, b))
            // does not create opposite-facing sectors
            && (area(a_prev, a, b_prev) != T::zero() || area(a, b_prev, b) != T::zero())
            // special zero-length case
            || equals(a, b)
                && area(a_prev, a, a_next) > T::zero()
                && area(b_prev, b, b_next) > T::zero())
}
