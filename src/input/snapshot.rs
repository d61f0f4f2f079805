//! Per-frame input snapshot and the source trait that produces it.

/// Everything the rig reads from input in one frame.
///
/// Pointer coordinates use a bottom-left origin: `pointer_y` grows upward,
/// so `pointer_y < scroll_threshold` is the bottom border of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct InputSnapshot {
    /// Scroll accumulated this frame (positive = wheel pushed away).
    pub scroll_delta: f32,
    /// Rotate-left key held.
    pub rotate_left: bool,
    /// Rotate-right key held.
    pub rotate_right: bool,
    /// Tilt-up key held.
    pub tilt_up: bool,
    /// Tilt-down key held.
    pub tilt_down: bool,
    /// Pointer x in pixels from the left border.
    pub pointer_x: f32,
    /// Pointer y in pixels from the bottom border.
    pub pointer_y: f32,
    /// Screen width in pixels.
    pub screen_width: f32,
    /// Screen height in pixels.
    pub screen_height: f32,
    /// Recenter key went down this frame.
    pub recenter_pressed: bool,
}

impl InputSnapshot {
    /// A snapshot with no keys held and the pointer resting in the middle of
    /// a `width × height` screen.
    #[must_use]
    pub fn centered(width: f32, height: f32) -> Self {
        Self {
            scroll_delta: 0.0,
            rotate_left: false,
            rotate_right: false,
            tilt_up: false,
            tilt_down: false,
            pointer_x: width * 0.5,
            pointer_y: height * 0.5,
            screen_width: width,
            screen_height: height,
            recenter_pressed: false,
        }
    }

    /// Same snapshot with the pointer moved to `(x, y)` (bottom-left origin).
    #[must_use]
    pub fn with_pointer(mut self, x: f32, y: f32) -> Self {
        self.pointer_x = x;
        self.pointer_y = y;
        self
    }
}

/// Produces one [`InputSnapshot`] per frame.
pub trait InputSource {
    /// Snapshot for the frame about to be simulated.
    fn next_snapshot(&mut self) -> InputSnapshot;
}

/// A fixed snapshot replays itself every frame.
impl InputSource for InputSnapshot {
    fn next_snapshot(&mut self) -> InputSnapshot {
        *self
    }
}
