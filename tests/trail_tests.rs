// Host-side tests for the cursor-trail queue.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod trail {
    include!("../src/core/trail.rs");
}

use trail::*;

#[test]
fn queue_is_bounded_at_capacity() {
    let mut q = TrailQueue::new();
    for i in 0..100 {
        q.push(i as f32, i as f32);
    }
    assert_eq!(q.len(), TRAIL_CAPACITY);
    // Newest point is kept at the head.
    assert_eq!(q.head().unwrap().x, 99.0);
}

#[test]
fn points_age_out_after_max_age_frames() {
    let mut q = TrailQueue::new();
    q.push(10.0, 20.0);
    for _ in 0..TRAIL_MAX_AGE {
        q.age_points();
    }
    assert_eq!(q.len(), 1, "point at max age is still drawn");
    q.age_points();
    assert!(q.is_empty(), "point beyond max age must be pruned");
}

#[test]
fn mixed_ages_prune_independently() {
    let mut q = TrailQueue::new();
    q.push(1.0, 1.0);
    for _ in 0..10 {
        q.age_points();
    }
    q.push(2.0, 2.0);
    for _ in 0..9 {
        q.age_points();
    }
    // First point is now age 19, second age 9.
    assert_eq!(q.len(), 1);
    assert_eq!(q.head().unwrap().x, 2.0);
}

#[test]
fn taper_endpoints() {
    assert_eq!(segment_width(0, TRAIL_CAPACITY), TRAIL_MAX_WIDTH);
    assert_eq!(segment_alpha(0, TRAIL_CAPACITY), TRAIL_BASE_ALPHA);
    // Width clamps at the visible floor rather than reaching zero.
    assert_eq!(segment_width(TRAIL_CAPACITY, TRAIL_CAPACITY), TRAIL_MIN_WIDTH);
    // Alpha reaches zero before the tail end (the 1.1 overshoot).
    assert_eq!(segment_alpha(TRAIL_CAPACITY - 1, TRAIL_CAPACITY), 0.0);
}

#[test]
fn taper_is_monotonic() {
    for i in 1..TRAIL_CAPACITY {
        assert!(segment_width(i, TRAIL_CAPACITY) <= segment_width(i - 1, TRAIL_CAPACITY));
        assert!(segment_alpha(i, TRAIL_CAPACITY) <= segment_alpha(i - 1, TRAIL_CAPACITY));
    }
}

#[test]
fn segments_connect_consecutive_points() {
    let mut q = TrailQueue::new();
    q.push(0.0, 0.0);
    q.push(10.0, 0.0);
    q.push(20.0, 5.0);
    let segs: Vec<_> = q.segments().collect();
    assert_eq!(segs.len(), 2);
    // Newest-first ordering: head segment starts at the latest push.
    assert_eq!((segs[0].x1, segs[0].y1), (20.0, 5.0));
    assert_eq!((segs[0].x2, segs[0].y2), (10.0, 0.0));
    assert_eq!((segs[1].x2, segs[1].y2), (0.0, 0.0));
    assert!(segs[0].width > segs[1].width);
}

#[test]
fn empty_and_single_point_queues_yield_no_segments() {
    let mut q = TrailQueue::new();
    assert_eq!(q.segments().count(), 0);
    q.push(1.0, 1.0);
    assert_eq!(q.segments().count(), 0);
    assert!(q.head().is_some());
}
