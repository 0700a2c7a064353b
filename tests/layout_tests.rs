//! Layout tests for gridview
//!
//! Tests for size tracks, cumulative offsets, visible-range computation,
//! pixel hit testing, and boundary proximity detection.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use gridview::layout::{boundary_near, cell_rect, index_at_pixel, visible_range};
use gridview::{Axis, SizeTrack, Viewport, RESIZE_HANDLE_SIZE};
use test_case::test_case;

/// Track of uniform 25px rows.
fn row_track(count: u32) -> SizeTrack {
    SizeTrack::new(Axis::Row, count, 25.0, 15.0)
}

/// Track of uniform 100px columns.
fn col_track(count: u32) -> SizeTrack {
    SizeTrack::new(Axis::Col, count, 100.0, 30.0)
}

// =============================================================================
// SIZE TRACK TESTS
// =============================================================================

#[test]
fn test_offset_differences_match_sizes() {
    let mut track = row_track(64);
    track.set_size(7, 90.0).unwrap();
    track.set_size(8, 17.5).unwrap();
    for i in 0..track.len() {
        let lo = track.cumulative_offset(i).unwrap();
        let hi = track.cumulative_offset(i + 1).unwrap();
        assert_eq!(hi - lo, track.size(i).unwrap());
    }
}

#[test]
fn test_set_size_below_minimum_clamps() {
    let mut rows = row_track(3);
    rows.set_size(1, 5.0).unwrap();
    assert_eq!(rows.size(1).unwrap(), 15.0);
    assert_eq!(rows.cumulative_offset(2).unwrap(), 40.0);

    let mut cols = col_track(3);
    cols.set_size(0, 1.0).unwrap();
    assert_eq!(cols.size(0).unwrap(), 30.0);
}

#[test]
fn test_total_tracks_resizes_incrementally() {
    let mut track = col_track(500);
    assert_eq!(track.total(), 50_000.0);
    let delta = track.set_size(250, 180.0).unwrap();
    assert_eq!(delta, 80.0);
    assert_eq!(track.total(), 50_080.0);
}

// =============================================================================
// VISIBLE RANGE TESTS
// =============================================================================

#[test]
fn test_visible_range_at_scroll_zero() {
    let track = row_track(100_000);
    let range = visible_range(&track, 0.0, 600.0);
    assert_eq!(range.start, 0);
    assert_eq!(range.leading_offset, 0.0);
}

#[test_case(0.0, 0, 0.0; "origin")]
#[test_case(25.0, 1, 25.0; "exact first edge")]
#[test_case(30.0, 1, 25.0; "inside second row")]
#[test_case(250.0, 10, 250.0; "ten rows down")]
fn test_visible_range_start(scroll: f32, start: u32, leading: f32) {
    let track = row_track(100_000);
    let range = visible_range(&track, scroll, 600.0);
    assert_eq!(range.start, start);
    assert_eq!(range.leading_offset, leading);
}

#[test]
fn test_visible_range_covers_viewport_extent() {
    let track = row_track(100_000);
    let range = visible_range(&track, 1_234.0, 600.0);
    // Pixels drawn from leading_offset across the range must cover the
    // window [scroll, scroll + extent).
    let drawn: f32 = (range.start..range.end)
        .map(|i| track.size(i).unwrap())
        .sum();
    assert!(range.leading_offset <= 1_234.0);
    assert!(range.leading_offset + drawn >= 1_234.0 + 600.0);
}

#[test]
fn test_visible_range_adapts_to_resized_rows() {
    let mut track = row_track(1_000);
    // Make the first row fill most of the viewport: far fewer rows visible.
    track.set_size(0, 500.0).unwrap();
    let range = visible_range(&track, 0.0, 600.0);
    // 500 + 4*25 = 600 covers the extent at index 4, plus one padding index.
    assert_eq!(range.start, 0);
    assert_eq!(range.end, 6);
}

#[test]
fn test_visible_range_end_clamped_to_track() {
    let track = row_track(10);
    let range = visible_range(&track, 0.0, 10_000.0);
    assert_eq!((range.start, range.end), (0, 10));
}

#[test]
fn test_visible_range_tolerates_overscroll() {
    let track = row_track(10);
    let range = visible_range(&track, 99_999.0, 600.0);
    assert_eq!(range.count(), 0);
    assert_eq!(range.leading_offset, track.total());
}

// =============================================================================
// HIT TEST TESTS
// =============================================================================

#[test]
fn test_index_at_pixel_basic() {
    let track = col_track(500);
    assert_eq!(index_at_pixel(&track, 0.0, 0.0), Some(0));
    assert_eq!(index_at_pixel(&track, 99.0, 0.0), Some(0));
    assert_eq!(index_at_pixel(&track, 100.0, 0.0), Some(1));
    assert_eq!(index_at_pixel(&track, 250.0, 0.0), Some(2));
}

#[test]
fn test_index_at_pixel_respects_scroll() {
    let track = col_track(500);
    assert_eq!(index_at_pixel(&track, 0.0, 350.0), Some(3));
    assert_eq!(index_at_pixel(&track, 60.0, 350.0), Some(4));
}

#[test]
fn test_index_at_pixel_monotonic() {
    let mut track = row_track(200);
    track.set_size(3, 70.0).unwrap();
    track.set_size(90, 15.0).unwrap();
    let mut last = 0;
    let mut pixel = 0.0;
    while pixel < 6_000.0 {
        let idx = index_at_pixel(&track, pixel, 123.0).unwrap();
        assert!(idx >= last, "index decreased at pixel {pixel}");
        last = idx;
        pixel += 7.0;
    }
}

#[test]
fn test_index_at_pixel_clamps_to_last() {
    let track = row_track(10);
    assert_eq!(index_at_pixel(&track, 1_000_000.0, 0.0), Some(9));
}

#[test]
fn test_viewport_hit_helpers_match_free_functions() {
    let rows = row_track(100);
    let cols = col_track(100);
    let mut vp = Viewport::new();
    vp.scroll_x = 130.0;
    vp.scroll_y = 40.0;
    assert_eq!(vp.col_at_x(&cols, 10.0), index_at_pixel(&cols, 10.0, 130.0));
    assert_eq!(vp.row_at_y(&rows, 10.0), index_at_pixel(&rows, 10.0, 40.0));
}

// =============================================================================
// BOUNDARY PROXIMITY TESTS
// =============================================================================

#[test_case(100.0, Some(0); "exactly on first edge")]
#[test_case(93.0, Some(0); "inside the handle band")]
#[test_case(107.0, Some(0); "past the edge within band")]
#[test_case(80.0, None; "well before the edge")]
#[test_case(150.0, None; "between edges")]
#[test_case(200.0, Some(1); "second edge")]
fn test_boundary_near_default_handle(pixel: f32, expected: Option<u32>) {
    let track = col_track(500);
    assert_eq!(
        boundary_near(&track, pixel, 0.0, RESIZE_HANDLE_SIZE),
        expected
    );
}

#[test]
fn test_boundary_near_with_tight_tolerance() {
    let track = col_track(500);
    assert_eq!(boundary_near(&track, 100.0, 0.0, 5.0), Some(0));
    assert_eq!(boundary_near(&track, 96.0, 0.0, 5.0), Some(0));
    assert_eq!(boundary_near(&track, 93.0, 0.0, 5.0), None);
}

#[test]
fn test_boundary_near_respects_scroll() {
    let track = col_track(500);
    // Edge of column 4 is at 500 absolute; with 460 scrolled it sits at 40.
    assert_eq!(boundary_near(&track, 40.0, 460.0, 5.0), Some(4));
}

#[test]
fn test_boundary_near_first_match_wins() {
    // 30px minimum-width columns with a 8px band: only the nearest edge
    // below the probe can match because the scan stops past it.
    let track = col_track(500);
    let hit = boundary_near(&track, 104.0, 0.0, RESIZE_HANDLE_SIZE);
    assert_eq!(hit, Some(0));
}

// =============================================================================
// CELL RECT TESTS
// =============================================================================

#[test]
fn test_cell_rect_tracks_resize() {
    let mut rows = row_track(10);
    let cols = col_track(10);
    let before = cell_rect(&rows, &cols, 5, 2);
    assert_eq!((before.x, before.y), (200.0, 125.0));

    rows.set_size(0, 65.0).unwrap();
    let after = cell_rect(&rows, &cols, 5, 2);
    assert_eq!(after.y, 165.0);
}
