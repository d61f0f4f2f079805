use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

/// Which way a positive scroll moves the camera.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    /// Scrolling up pulls the camera back toward `max_zoom`.
    #[default]
    ScrollUpZoomsOut,
    /// Scrolling up pushes the camera in toward `min_zoom`.
    ScrollUpZoomsIn,
}

impl ZoomDirection {
    /// Sign applied to `zoom_speed * dt` for a positive scroll.
    #[must_use]
    pub fn scroll_up_sign(self) -> f32 {
        match self {
            Self::ScrollUpZoomsOut => -1.0,
            Self::ScrollUpZoomsIn => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera motion speeds and starting pose.
pub struct CameraOptions {
    /// Zoom speed in meters per second while scrolling.
    #[schemars(title = "Zoom Speed", range(min = 1.0, max = 400.0), extend("step" = 1.0))]
    pub zoom_speed: f32,
    /// Edge-scroll pan speed in meters per second.
    #[schemars(title = "Pan Speed", range(min = 1.0, max = 100.0), extend("step" = 0.5))]
    pub pan_speed: f32,
    /// Yaw and tilt speed in degrees per second.
    #[schemars(title = "Rotate Speed", range(min = 5.0, max = 360.0), extend("step" = 5.0))]
    pub rotate_speed: f32,
    /// Distance from the screen border (pixels) at which panning starts.
    #[schemars(title = "Scroll Threshold", range(min = 0.0, max = 50.0), extend("step" = 1.0))]
    pub scroll_threshold: f32,
    /// Zoom offset the rig starts with (negative = behind the pivot).
    #[schemars(skip)]
    pub initial_zoom: f32,
    /// Tilt angle (degrees) the rig starts with.
    #[schemars(skip)]
    pub initial_theta: f32,
    /// Yaw angle (degrees) the rig starts with.
    #[schemars(skip)]
    pub initial_yaw: f32,
    /// Scroll-to-zoom sign convention.
    #[schemars(title = "Zoom Direction")]
    pub zoom_direction: ZoomDirection,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            zoom_speed: 100.0,
            pan_speed: 20.0,
            rotate_speed: 60.0,
            scroll_threshold: 5.0,
            initial_zoom: -40.0,
            initial_theta: 40.0,
            initial_yaw: -45.0,
            zoom_direction: ZoomDirection::default(),
        }
    }
}

impl CameraOptions {
    /// Reject non-finite values and negative speeds.
    pub fn validate(&self) -> Result<(), RigError> {
        let speeds = [
            ("zoom_speed", self.zoom_speed),
            ("pan_speed", self.pan_speed),
            ("rotate_speed", self.rotate_speed),
            ("scroll_threshold", self.scroll_threshold),
        ];
        for (name, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(RigError::InvalidOptions(format!(
                    "camera.{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        let pose = [
            ("initial_zoom", self.initial_zoom),
            ("initial_theta", self.initial_theta),
            ("initial_yaw", self.initial_yaw),
        ];
        for (name, value) in pose {
            if !value.is_finite() {
                return Err(RigError::InvalidOptions(format!(
                    "camera.{name} must be finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
