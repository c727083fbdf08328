//! Tuning knobs for [`Earcut`](crate::Earcut).

/// Options controlling how [`Earcut`](crate::Earcut) triangulates.
///
/// The defaults match what the algorithm has always used; they rarely need changing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EarcutOptions {
    /// Polygons with more vertices than this get a z-order index to speed up ear checks.
    pub index_threshold: usize,
    /// How many times the recovery pipeline may split a stuck ring in two, nested.
    ///
    /// Splitting only happens on self-intersecting or otherwise broken input. When the limit is
    /// reached the remaining part of the ring is left out of the output.
    pub max_split_depth: usize,
}

impl EarcutOptions {
    pub const DEFAULT_INDEX_THRESHOLD: usize = 80;
    pub const DEFAULT_MAX_SPLIT_DEPTH: usize = 512;

    /// Options that never build the z-order index, whatever the input size.
    pub fn unindexed() -> Self {
        Self {
            index_threshold: usize::MAX,
            ..Self::default()
        }
    }
}

impl Default for EarcutOptions {
    fn default() -> Self {
        Self {
            index_threshold: Self::DEFAULT_INDEX_THRESHOLD,
            max_split_depth: Self::DEFAULT_MAX_SPLIT_DEPTH,
        }
    }
}
