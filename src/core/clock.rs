/// Pure frame-gating logic for the canvas animation loop.
///
/// The wasm scheduler keeps requesting animation frames even while a canvas
/// is off-screen; this clock decides whether a given frame actually advances
/// the scene. Time `t` moves by a fixed step per *rendered* frame, so a
/// canvas that scrolls back into view resumes exactly where it paused with
/// no catch-up jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    t: f64,
    step: f64,
    visible: bool,
    width: f32,
    height: f32,
}

impl FrameClock {
    pub fn new(step: f64) -> Self {
        Self {
            t: 0.0,
            step,
            visible: false,
            width: 0.0,
            height: 0.0,
        }
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current animation time without advancing it.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.t
    }

    /// Advance by one step if this frame should render.
    ///
    /// Returns `Some(t)` with the post-advance time when the canvas is
    /// visible and has a non-degenerate backing size, `None` otherwise
    /// (time stays frozen while skipped).
    pub fn tick(&mut self) -> Option<f64> {
        if !self.visible || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        self.t += self.step;
        Some(self.t)
    }
}
