//! Direct input-to-motion mapping.
//!
//! Every function here is a linear integration of a speed over `dt`; none of
//! them look at the play area or the limits.

use glam::{Quat, Vec3};

use crate::input::InputSnapshot;
use crate::options::CameraOptions;

/// Screen borders the pointer is currently within `scroll_threshold` of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScreenEdges {
    /// Pointer near the left border.
    pub left: bool,
    /// Pointer near the right border.
    pub right: bool,
    /// Pointer near the bottom border.
    pub bottom: bool,
    /// Pointer near the top border.
    pub top: bool,
}

impl ScreenEdges {
    /// Classify the pointer in `input` against a border of `threshold`
    /// pixels.
    #[must_use]
    pub fn detect(input: &InputSnapshot, threshold: f32) -> Self {
        Self {
            left: input.pointer_x < threshold,
            right: input.pointer_x > input.screen_width - threshold,
            bottom: input.pointer_y < threshold,
            top: input.pointer_y > input.screen_height - threshold,
        }
    }

    /// Whether any border triggered.
    #[must_use]
    pub fn any(self) -> bool {
        self.left || self.right || self.bottom || self.top
    }
}

/// Zoom change for this frame.
///
/// Scroll magnitude is ignored; only its sign selects the direction, and
/// [`ZoomDirection`](crate::options::ZoomDirection) picks which sign zooms
/// out.
#[must_use]
pub fn zoom_delta(input: &InputSnapshot, options: &CameraOptions, dt: f32) -> f32 {
    let step = options.zoom_speed * dt * options.zoom_direction.scroll_up_sign();
    if input.scroll_delta > 0.0 {
        step
    } else if input.scroll_delta < 0.0 {
        -step
    } else {
        0.0
    }
}

/// Yaw change in degrees. Left and right both apply when both are held.
#[must_use]
pub fn yaw_delta(input: &InputSnapshot, options: &CameraOptions, dt: f32) -> f32 {
    let step = options.rotate_speed * dt;
    let mut delta = 0.0;
    if input.rotate_left {
        delta += step;
    }
    if input.rotate_right {
        delta -= step;
    }
    delta
}

/// Tilt change in degrees: tilt-down steepens, tilt-up flattens.
#[must_use]
pub fn tilt_delta(input: &InputSnapshot, options: &CameraOptions, dt: f32) -> f32 {
    let step = options.rotate_speed * dt;
    let mut delta = 0.0;
    if input.tilt_down {
        delta += step;
    }
    if input.tilt_up {
        delta -= step;
    }
    delta
}

/// Ground-plane `(forward, right)` unit vectors for a rig orientation.
///
/// Forward is the camera's local up projected onto XZ, i.e. "screen up" as
/// seen on the ground. Either vector is zero when its projection
/// degenerates (camera up pointing straight up at zero tilt).
#[must_use]
pub fn ground_axes(orientation: Quat) -> (Vec3, Vec3) {
    let flatten = |v: Vec3| Vec3::new(v.x, 0.0, v.z).normalize_or_zero();
    (flatten(orientation * Vec3::Y), flatten(orientation * Vec3::X))
}

/// Candidate pan for this frame from pointer edge-scrolling.
///
/// Adjacent borders combine into a diagonal pan.
#[must_use]
pub fn pan_delta(
    input: &InputSnapshot,
    orientation: Quat,
    options: &CameraOptions,
    dt: f32,
) -> Vec3 {
    let edges = ScreenEdges::detect(input, options.scroll_threshold);
    if !edges.any() {
        return Vec3::ZERO;
    }

    let (forward, right) = ground_axes(orientation);
    let step = options.pan_speed * dt;
    let mut pan = Vec3::ZERO;
    if edges.left {
        pan -= right * step;
    }
    if edges.bottom {
        pan -= forward * step;
    }
    if edges.right {
        pan += right * step;
    }
    if edges.top {
        pan += forward * step;
    }
    pan
}
