//! Orientation and containment predicates on ring nodes.

use core::ptr;
use num_traits::float::Float;

use crate::ring::Node;

/// Shoelace sum of `data[start..end]`, twice the signed area.
/// Positive means counter-clockwise with the y axis pointing up.
pub(crate) fn signed_area<T: Float>(data: &[[T; 2]], start: usize, end: usize) -> T {
    if start >= end {
        return T::zero();
    }
    let [mut bx, mut by] = data[end - 1];
    let mut sum = T::zero();
    for &[ax, ay] in &data[start..end] {
        sum = sum + (bx - ax) * (ay + by);
        (bx, by) = (ax, ay);
    }
    sum
}

/// signed area of a triangle
#[inline]
pub(crate) fn area<T: Float>(p: &Node<T>, q: &Node<T>, r: &Node<T>) -> T {
    (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y)
}

#[inline]
pub(crate) fn equals<T: Float>(p1: &Node<T>, p2: &Node<T>) -> bool {
    p1.x == p2.x && p1.y == p2.y
}

/// check if a point lies within a convex triangle (boundary included)
#[allow(clippy::too_many_arguments)]
#[inline]
pub(crate) fn point_in_triangle<T: Float>(
    ax: T,
    ay: T,
    bx: T,
    by: T,
    cx: T,
    cy: T,
    px: T,
    py: T,
) -> bool {
    (cx - px) * (ay - py) >= (ax - px) * (cy - py)
        && (ax - px) * (by - py) >= (bx - px) * (ay - py)
        && (bx - px) * (cy - py) >= (cx - px) * (by - py)
}

fn sign<T: Float>(v: T) -> i32 {
    (v > T::zero()) as i32 - (v < T::zero()) as i32
}

/// for collinear points p, q, r, check if point q lies on segment pr
fn on_segment<T: Float>(p: &Node<T>, q: &Node<T>, r: &Node<T>) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// check if segments p1q1 and p2q2 intersect
pub(crate) fn intersects<T: Float>(p1: &Node<T>, q1: &Node<T>, p2: &Node<T>, q2: &Node<T>) -> bool {
    let o1 = sign(area(p1, q1, p2));
    let o2 = sign(area(p1, q1, q2));
    let o3 = sign(area(p2, q2, p1));
    let o4 = sign(area(p2, q2, q1));
    (o1 != o2 && o3 != o4)
        || (o3 == 0 && on_segment(p2, p1, q2))
        || (o4 == 0 && on_segment(p2, q1, q2))
        || (o2 == 0 && on_segment(p1, q2, q1))
        || (o1 == 0 && on_segment(p1, p2, q1))
}

/// check if a diagonal ab crosses any edge of the ring
pub(crate) fn intersects_polygon<T: Float>(nodes: &[Node<T>], a: &Node<T>, b: &Node<T>) -> bool {
    let mut p = a;
    loop {
        let p_next = node!(nodes, p.next_i);
        if (p.i != a.i && p.i != b.i && p_next.i != a.i && p_next.i != b.i)
            && intersects(p, p_next, a, b)
        {
            return true;
        }
        p = p_next;
        if ptr::eq(p, a) {
            return false;
        }
    }
}

/// check if the diagonal ab starts into the interior at a
pub(crate) fn locally_inside<T: Float>(nodes: &[Node<T>], a: &Node<T>, b: &Node<T>) -> bool {
    let a_prev = node!(nodes, a.prev_i);
    let a_next = node!(nodes, a.next_i);
    if area(a_prev, a, a_next) < T::zero() {
        area(a, b, a_next) >= T::zero() && area(a, a_prev, b) >= T::zero()
    } else {
        area(a, b, a_prev) < T::zero() || area(a, a_next, b) < T::zero()
    }
}

/// even-odd test of the midpoint of ab against the ring
pub(crate) fn middle_inside<T: Float>(nodes: &[Node<T>], a: &Node<T>, b: &Node<T>) -> bool {
    let two = T::one() + T::one();
    let (px, py) = ((a.x + b.x) / two, (a.y + b.y) / two);
    let mut p = a;
    let mut inside = false;
    loop {
        let p_next = node!(nodes, p.next_i);
        inside ^= (p.y > py) != (p_next.y > py)
            && p_next.y != p.y
            && (px < (p_next.x - p.x) * (py - p.y) / (p_next.y - p.y) + p.x);
        p = p_next;
        if ptr::eq(p, a) {
            return inside;
        }
    }
}
