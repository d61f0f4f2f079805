use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Limits", inline)]
#[serde(default)]
/// Tilt and zoom ranges enforced at the end of every frame.
///
/// Zoom offsets are negative distances behind the pivot, so `max_zoom`
/// (farthest out) is numerically smaller than `min_zoom`.
pub struct LimitOptions {
    /// Lowest allowed tilt in degrees.
    #[schemars(title = "Min Tilt", extend("step" = 1.0))]
    pub min_theta: f32,
    /// Highest allowed tilt in degrees.
    #[schemars(title = "Max Tilt", range(min = 0.0, max = 270.0), extend("step" = 1.0))]
    pub max_theta: f32,
    /// Farthest zoom-out offset.
    #[schemars(title = "Max Zoom", extend("step" = 1.0))]
    pub max_zoom: f32,
    /// Closest zoom-in offset.
    #[schemars(title = "Min Zoom", extend("step" = 1.0))]
    pub min_zoom: f32,
}

impl Default for LimitOptions {
    fn default() -> Self {
        Self {
            min_theta: -10.0,
            max_theta: 190.0,
            max_zoom: -90.0,
            min_zoom: -20.0,
        }
    }
}

impl LimitOptions {
    /// Reject non-finite or inverted ranges.
    pub fn validate(&self) -> Result<(), RigError> {
        let values = [self.min_theta, self.max_theta, self.max_zoom, self.min_zoom];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(RigError::InvalidOptions(format!(
                "limits must be finite, got {self:?}"
            )));
        }
        if self.min_theta > self.max_theta {
            return Err(RigError::InvalidOptions(format!(
                "limits.min_theta ({}) exceeds limits.max_theta ({})",
                self.min_theta, self.max_theta
            )));
        }
        if self.max_zoom > self.min_zoom {
            return Err(RigError::InvalidOptions(format!(
                "limits.max_zoom ({}) must not be closer than limits.min_zoom ({})",
                self.max_zoom, self.min_zoom
            )));
        }
        Ok(())
    }
}
