use serde::{Deserialize, Serialize};

/// Held or pressed rig actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// rotate_left = "KeyA"
/// recenter = "KeyM"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigAction {
    /// Orbit counter-clockwise (positive yaw) while held.
    RotateLeft,
    /// Orbit clockwise (negative yaw) while held.
    RotateRight,
    /// Tilt toward a flatter view (negative theta) while held.
    TiltUp,
    /// Tilt toward a steeper view (positive theta) while held.
    TiltDown,
    /// Jump back to the home pivot on key-down.
    Recenter,
}
