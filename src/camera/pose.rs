use glam::{Mat4, Quat, Vec3};

use super::state::RigState;

/// What the rig writes back to the render transform each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigPose {
    /// World-space pivot.
    pub position: Vec3,
    /// Yaw in degrees.
    pub yaw: f32,
    /// Tilt (pitch) in degrees.
    pub theta: f32,
    /// Offset of the camera along its local look axis.
    pub zoom_offset: f32,
    /// Rig rotation (`yaw * pitch`).
    pub orientation: Quat,
}

impl RigPose {
    /// Unit vector the camera looks along.
    #[must_use]
    pub fn look_direction(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Camera world position: the pivot pushed `zoom_offset` along the look
    /// axis (negative offsets sit behind the pivot).
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.position + self.look_direction() * self.zoom_offset
    }

    /// Right-handed view matrix looking from [`eye`](Self::eye) at the
    /// pivot.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.eye(), self.look_direction(), self.up())
    }
}

impl From<&RigState> for RigPose {
    fn from(state: &RigState) -> Self {
        Self {
            position: state.position(),
            yaw: state.yaw(),
            theta: state.theta(),
            zoom_offset: state.zoom_offset(),
            orientation: state.orientation(),
        }
    }
}

/// Write-only target for the rig's pose (the engine transform, a network
/// replicator, a recorder in tests).
pub trait TransformSink {
    /// Receive the pose for the frame just simulated.
    fn write(&mut self, pose: &RigPose);
}

/// Records every pose written.
impl TransformSink for Vec<RigPose> {
    fn write(&mut self, pose: &RigPose) {
        self.push(*pose);
    }
}

/// Keeps only the latest pose.
impl TransformSink for Option<RigPose> {
    fn write(&mut self, pose: &RigPose) {
        *self = Some(*pose);
    }
}
