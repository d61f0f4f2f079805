use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::RigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Play Area", inline)]
#[serde(default)]
/// Rectangular play-area grid on the XZ plane.
pub struct AreaOptions {
    /// World-space `[x, z]` of the grid's minimum corner.
    #[schemars(skip)]
    pub origin: [f32; 2],
    /// Edge length of one square cell in meters.
    #[schemars(title = "Cell Size", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub cell_size: f32,
    /// Number of cells along `[x, z]`.
    #[schemars(skip)]
    pub cells: [u32; 2],
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0],
            cell_size: 1.0,
            cells: [64, 64],
        }
    }
}

impl AreaOptions {
    /// Reject non-finite origins and non-positive cell sizes.
    ///
    /// A grid with zero cells is allowed; it simply contains nothing.
    pub fn validate(&self) -> Result<(), RigError> {
        if !self.origin.iter().all(|v| v.is_finite()) {
            return Err(RigError::InvalidOptions(format!(
                "area.origin must be finite, got {:?}",
                self.origin
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(RigError::InvalidOptions(format!(
                "area.cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}
