//! Discrete rig commands.
//!
//! Held keys and pointer motion arrive through
//! [`InputSnapshot`](crate::input::InputSnapshot); one-shot operations a game
//! issues directly (cutscenes, focus-on-event) are expressed as a
//! `RigCommand` and passed to
//! [`CameraRig::execute`](crate::camera::CameraRig::execute).

use glam::Vec3;

/// One-shot operations on a [`CameraRig`](crate::camera::CameraRig).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RigCommand {
    /// Freeze the rig; frames leave its state untouched.
    DisableControls,
    /// Resume reacting to input.
    EnableControls,
    /// Jump the pivot to `target`, ignoring the play area.
    Recenter {
        /// New world-space pivot.
        target: Vec3,
    },
    /// Jump the pivot back to the rig's home anchor.
    RecenterHome,
}
