use rand::Rng;

/// Preloader counter cap.
pub const PRELOADER_TARGET: u32 = 100;

/// In-memory app lifecycle. The intro preloader runs once per page load;
/// client-side navigation back to the landing page skips it, a hard reload
/// starts fresh.
#[derive(Debug, Default)]
pub struct AppLifecycle {
    intro_done: bool,
}

impl AppLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn intro_pending(&self) -> bool {
        !self.intro_done
    }

    #[inline]
    pub fn mark_intro_done(&mut self) {
        self.intro_done = true;
    }
}

/// Advance the preloader percent counter by a random increment (2..=13),
/// clamping at the target. Returns the new value.
pub fn preloader_step<R: Rng>(count: u32, rng: &mut R) -> u32 {
    (count + rng.gen_range(2..=13)).min(PRELOADER_TARGET)
}
