use web_time::{Duration, Instant};

/// Supplies the seconds elapsed since the previous frame.
///
/// The rig treats the value as opaque; zero or negative steps are passed
/// through unchanged and simply produce no or reversed motion.
pub trait TimeSource {
    /// Seconds since the previous call.
    fn delta_seconds(&mut self) -> f32;
}

/// Wall-clock frame timer.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Upper bound on a single step (e.g. after a debugger pause)
    max_step: Option<Duration>,
}

impl FrameClock {
    /// Start timing from now with no step cap.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            max_step: None,
        }
    }

    /// Cap each reported step at `max_step`.
    #[must_use]
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = Some(max_step);
        self
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for FrameClock {
    fn delta_seconds(&mut self) -> f32 {
        let now = Instant::now();
        let mut elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        if let Some(max) = self.max_step {
            elapsed = elapsed.min(max);
        }
        elapsed.as_secs_f32()
    }
}

/// Constant step, for tests and headless simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedStep {
    step: f32,
}

impl FixedStep {
    /// Report `step` seconds every frame.
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    /// Report `1 / fps` seconds every frame.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f32)
    }
}

impl TimeSource for FixedStep {
    fn delta_seconds(&mut self) -> f32 {
        self.step
    }
}
