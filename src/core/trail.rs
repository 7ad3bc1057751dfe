use std::collections::VecDeque;

pub const TRAIL_CAPACITY: usize = 28;
pub const TRAIL_MAX_AGE: u32 = 18;
pub const TRAIL_MAX_WIDTH: f32 = 9.0;
pub const TRAIL_MIN_WIDTH: f32 = 0.2;
pub const TRAIL_BASE_ALPHA: f32 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub age: u32,
}

/// One renderable piece of the comet stroke, newest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub alpha: f32,
}

/// Taper width for segment `i` of a trail with `cap` slots.
#[inline]
pub fn segment_width(i: usize, cap: usize) -> f32 {
    ((1.0 - i as f32 / cap as f32) * TRAIL_MAX_WIDTH).max(TRAIL_MIN_WIDTH)
}

/// Taper alpha for segment `i`; hits zero before the tail end so the trail
/// dissolves rather than stopping.
#[inline]
pub fn segment_alpha(i: usize, cap: usize) -> f32 {
    (1.0 - (i as f32 / cap as f32) * 1.1).max(0.0) * TRAIL_BASE_ALPHA
}

/// Recent pointer positions, newest first, bounded in both count and age.
#[derive(Debug, Clone, Default)]
pub struct TrailQueue {
    points: VecDeque<TrailPoint>,
}

impl TrailQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer position. The oldest point is dropped once the
    /// queue is at capacity.
    pub fn push(&mut self, x: f32, y: f32) {
        self.points.push_front(TrailPoint { x, y, age: 0 });
        self.points.truncate(TRAIL_CAPACITY);
    }

    /// Per-frame aging; points older than [`TRAIL_MAX_AGE`] frames are
    /// pruned so the trail dissolves when the pointer stops.
    pub fn age_points(&mut self) {
        for p in self.points.iter_mut() {
            p.age += 1;
        }
        self.points.retain(|p| p.age <= TRAIL_MAX_AGE);
    }

    /// Newest point (the comet head), if any.
    pub fn head(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Connected segments from newest to oldest with tapered width/alpha.
    pub fn segments(&self) -> impl Iterator<Item = TrailSegment> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(|(i, (a, b))| TrailSegment {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y,
                width: segment_width(i, TRAIL_CAPACITY),
                alpha: segment_alpha(i, TRAIL_CAPACITY),
            })
    }
}
