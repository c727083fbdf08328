//! Node arena and circular ring construction.

use alloc::vec::Vec;
use core::num::NonZeroU32;
use num_traits::float::Float;

use crate::geom::{area, equals, signed_area};

/// Arena slot of a node. Slot 0 holds a sentinel, so `Option<NodeIndex>` costs nothing.
pub(crate) type NodeIndex = NonZeroU32;

pub(crate) struct Node<T: Float> {
    /// vertex ordinal in the input buffer
    pub(crate) i: u32,
    /// z-order curve value
    pub(crate) z: u32,
    pub(crate) x: T,
    pub(crate) y: T,
    /// previous node in the polygon ring
    pub(crate) prev_i: NodeIndex,
    /// next node in the polygon ring
    pub(crate) next_i: NodeIndex,
    /// previous node in z-order
    pub(crate) prev_z_i: Option<NodeIndex>,
    /// next node in z-order
    pub(crate) next_z_i: Option<NodeIndex>,
    /// synthetic vertex that only exists to connect a hole
    pub(crate) steiner: bool,
}

impl<T: Float> Node<T> {
    pub(crate) fn new(i: u32, x: T, y: T) -> Self {
        Self {
            i,
            z: 0,
            x,
            y,
            prev_i: NodeIndex::MIN,
            next_i: NodeIndex::MIN,
            prev_z_i: None,
            next_z_i: None,
            steiner: false,
        }
    }
}

/// index the next pushed node will receive
#[inline]
fn next_slot<T: Float>(nodes: &[Node<T>]) -> NodeIndex {
    debug_assert!(!nodes.is_empty(), "arena must hold the sentinel node");
    // the sentinel occupies slot 0, so the length is never zero here
    unsafe { NodeIndex::new_unchecked(nodes.len() as u32) }
}

/// Build a circular doubly linked ring from `data[start..end]` wound in the requested direction.
///
/// The input winding does not matter: the range is threaded backwards when it disagrees with
/// `clockwise`. A closing point equal to the opening point is dropped.
pub(crate) fn linked_list<T: Float>(
    nodes: &mut Vec<Node<T>>,
    data: &[[T; 2]],
    start: usize,
    end: usize,
    clockwise: bool,
) -> Option<NodeIndex> {
    if start >= end {
        return None;
    }

    let mut last_i: Option<NodeIndex> = None;
    let points = data[start..end].iter().enumerate();

    if clockwise == (signed_area(data, start, end) > T::zero()) {
        for (offset, &[x, y]) in points {
            last_i = Some(insert_node(nodes, (start + offset) as u32, x, y, last_i));
        }
    } else {
        for (offset, &[x, y]) in points.rev() {
            last_i = Some(insert_node(nodes, (start + offset) as u32, x, y, last_i));
        }
    }

    if let Some(li) = last_i {
        let last = node!(nodes, li);
        if equals(last, node!(nodes, last.next_i)) {
            let (_, next_i) = remove_node(nodes, li);
            last_i = Some(next_i);
        }
    }

    last_i
}

/// create a node and link it after `last` (or into a fresh 1-node ring)
pub(crate) fn insert_node<T: Float>(
    nodes: &mut Vec<Node<T>>,
    i: u32,
    x: T,
    y: T,
    last: Option<NodeIndex>,
) -> NodeIndex {
    let mut p = Node::new(i, x, y);
    let p_i = next_slot(nodes);
    match last {
        Some(last_i) => {
            let last = node_mut!(nodes, last_i);
            let last_next_i = last.next_i;
            (p.next_i, last.next_i) = (last_next_i, p_i);
            p.prev_i = last_i;
            node_mut!(nodes, last_next_i).prev_i = p_i;
        }
        None => {
            (p.prev_i, p.next_i) = (p_i, p_i);
        }
    }
    nodes.push(p);
    p_i
}

/// Unlink a node from the ring and from the z-order list. Returns its former neighbours.
pub(crate) fn remove_node<T: Float>(
    nodes: &mut [Node<T>],
    p_i: NodeIndex,
) -> (NodeIndex, NodeIndex) {
    let p = node!(nodes, p_i);
    let (prev_i, next_i) = (p.prev_i, p.next_i);
    let (prev_z_i, next_z_i) = (p.prev_z_i, p.next_z_i);

    node_mut!(nodes, next_i).prev_i = prev_i;
    node_mut!(nodes, prev_i).next_i = next_i;

    if let Some(pz) = prev_z_i {
        node_mut!(nodes, pz).next_z_i = next_z_i;
    }
    if let Some(nz) = next_z_i {
        node_mut!(nodes, nz).prev_z_i = prev_z_i;
    }
    (prev_i, next_i)
}

/// Connect `a` and `b` with a two-way bridge made of duplicated nodes.
///
/// When both nodes are on the same ring this cuts it in two; when `b` sits on a hole ring the
/// two rings become one. Returns the duplicate of `b`, which lies on the second ring.
pub(crate) fn split_polygon<T: Float>(
    nodes: &mut Vec<Node<T>>,
    a_i: NodeIndex,
    b_i: NodeIndex,
) -> NodeIndex {
    let a2_i = next_slot(nodes);
    let b2_i = a2_i.saturating_add(1);

    let a = node_mut!(nodes, a_i);
    let mut a2 = Node::new(a.i, a.x, a.y);
    let an_i = a.next_i;
    a.next_i = b_i;
    a2.prev_i = b2_i;
    a2.next_i = an_i;
    node_mut!(nodes, an_i).prev_i = a2_i;

    let b = node_mut!(nodes, b_i);
    let mut b2 = Node::new(b.i, b.x, b.y);
    let bp_i = b.prev_i;
    b.prev_i = a_i;
    b2.next_i = a2_i;
    b2.prev_i = bp_i;
    node_mut!(nodes, bp_i).next_i = b2_i;

    nodes.extend([a2, b2]);
    b2_i
}

/// Drop duplicate and exactly collinear points between `start_i` and `end_i` (whole ring if
/// `None`). Steiner points always survive.
pub(crate) fn filter_points<T: Float>(
    nodes: &mut [Node<T>],
    start_i: NodeIndex,
    end_i: Option<NodeIndex>,
) -> NodeIndex {
    let mut end_i = end_i.unwrap_or(start_i);

    let mut p_i = start_i;
    loop {
        let p = node!(nodes, p_i);
        let p_next = node!(nodes, p.next_i);
        if !p.steiner && (equals(p, p_next) || area(node!(nodes, p.prev_i), p, p_next) == T::zero())
        {
            let (prev_i, next_i) = remove_node(nodes, p_i);
            (p_i, end_i) = (prev_i, prev_i);
            if p_i == next_i {
                return end_i;
            }
        } else {
            p_i = p.next_i;
            if p_i == end_i {
                return end_i;
            }
        }
    }
}

/// Leftmost node of a ring; equal `x` is resolved by the smaller `y`.
pub(crate) fn get_leftmost<T: Float>(nodes: &[Node<T>], start_i: NodeIndex) -> NodeIndex {
    let mut p_i = start_i;
    let mut leftmost_i = start_i;
    loop {
        let p = node!(nodes, p_i);
        let leftmost = node!(nodes, leftmost_i);
        if p.x < leftmost.x || (p.x == leftmost.x && p.y < leftmost.y) {
            leftmost_i = p_i;
        }
        p_i = p.next_i;
        if p_i == start_i {
            return leftmost_i;
        }
    }
}
