//! Per-axis variable-size sequence with cumulative-offset queries.
//!
//! A `SizeTrack` holds one pixel size per row (or per column) and a cached
//! running total. Resizing an entry is O(1): the cached total is adjusted by
//! the applied delta instead of being recomputed, which keeps interactive
//! drags cheap on tracks with hundreds of thousands of entries.

use crate::error::{GridError, Result};
use crate::types::Axis;

/// Ordered sequence of per-index pixel sizes for one axis.
#[derive(Debug, Clone)]
pub struct SizeTrack {
    axis: Axis,
    sizes: Vec<f32>,
    min_size: f32,
    total: f32,
}

impl SizeTrack {
    /// Create a track of `count` entries, all at `default_size`.
    ///
    /// `default_size` is itself clamped to `min_size`, so the invariant
    /// `size(i) >= min_size` holds from construction onward.
    pub fn new(axis: Axis, count: u32, default_size: f32, min_size: f32) -> Self {
        let size = default_size.max(min_size);
        Self {
            axis,
            sizes: vec![size; count as usize],
            min_size,
            total: size * count as f32,
        }
    }

    /// Which axis this track belongs to.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of entries.
    pub fn len(&self) -> u32 {
        self.sizes.len() as u32
    }

    /// True when the track has no entries.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Minimum size entries are clamped to.
    pub fn min_size(&self) -> f32 {
        self.min_size
    }

    /// Total extent of the track in pixels (sum of all sizes).
    ///
    /// Maintained incrementally by `set_size`; never recomputed from
    /// scratch on the interactive path.
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Size of entry `i` in pixels.
    pub fn size(&self, i: u32) -> Result<f32> {
        self.sizes
            .get(i as usize)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                axis: self.axis,
                index: i,
                len: self.len(),
            })
    }

    /// Set entry `i` to `new_size`, clamped to the track minimum.
    ///
    /// Returns the signed delta applied to the track total. The caller owns
    /// propagating that delta to the scrollable extent; there is no global
    /// recompute.
    pub fn set_size(&mut self, i: u32, new_size: f32) -> Result<f32> {
        let len = self.len();
        let slot = self
            .sizes
            .get_mut(i as usize)
            .ok_or(GridError::IndexOutOfRange {
                axis: self.axis,
                index: i,
                len,
            })?;
        let clamped = new_size.max(self.min_size);
        let delta = clamped - *slot;
        *slot = clamped;
        self.total += delta;
        Ok(delta)
    }

    /// Cumulative offset of entry `i`: the sum of all sizes before it.
    ///
    /// Valid for `i` in `[0, len]`; `cumulative_offset(len)` is the trailing
    /// edge of the track and equals `total()`. This is a linear sweep — hot
    /// render paths iterating a visible range must accumulate sizes
    /// incrementally (see `sizes_from`) rather than calling this per index.
    pub fn cumulative_offset(&self, i: u32) -> Result<f32> {
        if i as usize > self.sizes.len() {
            return Err(GridError::IndexOutOfRange {
                axis: self.axis,
                index: i,
                len: self.len(),
            });
        }
        Ok(self.sizes[..i as usize].iter().sum())
    }

    /// Iterate `(index, size)` pairs starting at `start`.
    ///
    /// Render loops pair this with a running pixel accumulator seeded from
    /// `VisibleRange::leading_offset`, keeping a full visible-range pass at
    /// one addition per drawn index.
    pub fn sizes_from(&self, start: u32) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.sizes
            .iter()
            .enumerate()
            .skip(start as usize)
            .map(|(i, &s)| (i as u32, s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uniform_track() {
        let track = SizeTrack::new(Axis::Row, 100, 25.0, 15.0);
        assert_eq!(track.len(), 100);
        assert_eq!(track.size(0).unwrap(), 25.0);
        assert_eq!(track.size(99).unwrap(), 25.0);
        assert_eq!(track.total(), 2500.0);
    }

    #[test]
    fn test_default_below_minimum_clamps() {
        let track = SizeTrack::new(Axis::Col, 10, 5.0, 30.0);
        assert_eq!(track.size(0).unwrap(), 30.0);
        assert_eq!(track.total(), 300.0);
    }

    #[test]
    fn test_size_out_of_range() {
        let track = SizeTrack::new(Axis::Row, 3, 25.0, 15.0);
        assert!(matches!(
            track.size(3),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: 3,
                len: 3
            })
        ));
    }

    #[test]
    fn test_set_size_returns_delta_and_updates_total() {
        let mut track = SizeTrack::new(Axis::Col, 4, 100.0, 30.0);
        let delta = track.set_size(2, 160.0).unwrap();
        assert_eq!(delta, 60.0);
        assert_eq!(track.size(2).unwrap(), 160.0);
        assert_eq!(track.total(), 460.0);

        let delta = track.set_size(2, 100.0).unwrap();
        assert_eq!(delta, -60.0);
        assert_eq!(track.total(), 400.0);
    }

    #[test]
    fn test_set_size_clamps_to_minimum() {
        // 3 rows at 25px, shrink row 1 to 5 -> clamps to 15, offset of
        // row 2 becomes 40.
        let mut track = SizeTrack::new(Axis::Row, 3, 25.0, 15.0);
        let delta = track.set_size(1, 5.0).unwrap();
        assert_eq!(track.size(1).unwrap(), 15.0);
        assert_eq!(delta, -10.0);
        assert_eq!(track.cumulative_offset(2).unwrap(), 40.0);
    }

    #[test]
    fn test_incremental_total_matches_recomputed() {
        let mut track = SizeTrack::new(Axis::Row, 50, 25.0, 15.0);
        track.set_size(0, 80.0).unwrap();
        track.set_size(10, 3.0).unwrap();
        track.set_size(49, 41.5).unwrap();
        let recomputed: f32 = (0..50).map(|i| track.size(i).unwrap()).sum();
        assert_eq!(track.total(), recomputed);
    }

    #[test]
    fn test_cumulative_offset_adjacent_difference_is_size() {
        let mut track = SizeTrack::new(Axis::Col, 8, 100.0, 30.0);
        track.set_size(3, 55.0).unwrap();
        for i in 0..track.len() {
            let lo = track.cumulative_offset(i).unwrap();
            let hi = track.cumulative_offset(i + 1).unwrap();
            assert_eq!(hi - lo, track.size(i).unwrap());
        }
    }

    #[test]
    fn test_cumulative_offset_trailing_edge_is_total() {
        let track = SizeTrack::new(Axis::Row, 16, 25.0, 15.0);
        assert_eq!(track.cumulative_offset(16).unwrap(), track.total());
        assert!(track.cumulative_offset(17).is_err());
    }
}
