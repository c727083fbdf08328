//! Z-order (Morton) spatial index over ring nodes.
//!
//! Keys are only an approximation of 2D locality. They bound how far the hashed ear test walks,
//! they never change which triangles are valid.

use num_traits::float::Float;

use crate::ring::{Node, NodeIndex};

/// Largest quantised coordinate; two 15-bit values interleave into a 30-bit key.
const KEY_MAX: f64 = 32767.0;

/// Bounding box of the outer ring, used to quantise coordinates for the z-order curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ZOrderBounds<T> {
    min_x: T,
    min_y: T,
    inv_size: T,
    key_max: T,
}

impl<T: Float> ZOrderBounds<T> {
    /// `None` when there are no points or the box collapses to a single point.
    pub(crate) fn from_points(points: &[[T; 2]]) -> Option<Self> {
        let (&[x, y], rest) = points.split_first()?;
        let [min_x, min_y, max_x, max_y] =
            rest.iter()
                .fold([x, y, x, y], |[x0, y0, x1, y1], &[x, y]| {
                    [x0.min(x), y0.min(y), x1.max(x), y1.max(y)]
                });

        let size = (max_x - min_x).max(max_y - min_y);
        if !(size > T::zero()) || !size.is_finite() {
            return None;
        }
        let key_max = T::from(KEY_MAX)?;
        Some(Self {
            min_x,
            min_y,
            inv_size: key_max / size,
            key_max,
        })
    }

    fn quantize(&self, v: T, min: T) -> u32 {
        // points of holes may fall outside the outer ring's box
        ((v - min) * self.inv_size)
            .max(T::zero())
            .min(self.key_max)
            .to_u32()
            .unwrap_or(0)
    }

    /// z-order of a point
    pub(crate) fn z_order(&self, x: T, y: T) -> u32 {
        let x = spread_bits(self.quantize(x, self.min_x));
        let y = spread_bits(self.quantize(y, self.min_y));
        x | (y << 1)
    }
}

/// insert a zero bit between each of the low 16 bits
#[inline]
fn spread_bits(v: u32) -> u32 {
    let mut v = v & 0xFFFF;
    v = (v | (v << 8)) & 0x00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333;
    v = (v | (v << 1)) & 0x5555_5555;
    v
}

/// interlink the ring's nodes in z-order
pub(crate) fn index_curve<T: Float>(
    nodes: &mut [Node<T>],
    start_i: NodeIndex,
    bounds: &ZOrderBounds<T>,
) {
    let mut p_i = start_i;
    loop {
        let p = node_mut!(nodes, p_i);
        if p.z == 0 {
            p.z = bounds.z_order(p.x, p.y);
        }
        p.prev_z_i = Some(p.prev_i);
        p.next_z_i = Some(p.next_i);
        p_i = p.next_i;
        if p_i == start_i {
            break;
        }
    }

    // open the circle so the merge sort sees a terminated list
    let tail = node_mut!(nodes, start_i).prev_z_i.take();
    if let Some(tail_i) = tail {
        node_mut!(nodes, tail_i).next_z_i = None;
    }
    sort_linked(nodes, start_i);
}

/// Simon Tatham's linked list merge sort on the z links
/// <http://www.chiark.greenend.org.uk/~sgtatham/algorithms/listsort.html>
fn sort_linked<T: Float>(nodes: &mut [Node<T>], list_i: NodeIndex) {
    let mut list = Some(list_i);
    let mut in_size: usize = 1;

    loop {
        let mut p = list;
        list = None;
        let mut tail: Option<NodeIndex> = None;
        let mut num_merges = 0;

        while let Some(p_start) = p {
            num_merges += 1;

            // step `in_size` places along from p
            let mut q = Some(p_start);
            let mut p_size: usize = 0;
            while p_size < in_size {
                let Some(q_i) = q else { break };
                p_size += 1;
                q = node!(nodes, q_i).next_z_i;
            }
            let mut q_size = in_size;

            // merge the run starting at p with the run starting at q
            loop {
                let take_p = match (p_size > 0, q_size > 0 && q.is_some()) {
                    (false, false) => break,
                    (true, false) => true,
                    (false, true) => false,
                    (true, true) => match (p, q) {
                        (Some(p_i), Some(q_i)) => node!(nodes, p_i).z <= node!(nodes, q_i).z,
                        _ => true,
                    },
                };
                let e_i = if take_p {
                    let Some(e_i) = p else { break };
                    p_size -= 1;
                    p = node!(nodes, e_i).next_z_i;
                    e_i
                } else {
                    let Some(e_i) = q else { break };
                    q_size -= 1;
                    q = node!(nodes, e_i).next_z_i;
                    e_i
                };

                node_mut!(nodes, e_i).prev_z_i = tail;
                match tail {
                    Some(tail_i) => node_mut!(nodes, tail_i).next_z_i = Some(e_i),
                    None => list = Some(e_i),
                }
                tail = Some(e_i);
            }

            p = q;
        }

        if let Some(tail_i) = tail {
            node_mut!(nodes, tail_i).next_z_i = None;
        }
        if num_merges <= 1 {
            return;
        }
        in_size *= 2;
    }
}
