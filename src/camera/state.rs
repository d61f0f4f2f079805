use glam::{Quat, Vec3};

/// Pitch rotation for a tilt of `degrees`.
///
/// Positive tilt swings the look direction down toward the ground, so the
/// rotation about local +X is negated (glam is right-handed, cameras look
/// along local −Z).
#[must_use]
pub fn pitch(degrees: f32) -> Quat {
    Quat::from_rotation_x(-degrees.to_radians())
}

/// Yaw rotation of `degrees` about world +Y.
///
/// Whole turns are dropped before converting so large accumulated angles
/// keep their precision.
#[must_use]
pub fn yaw(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.rem_euclid(360.0).to_radians())
}

/// Mutable camera state owned by [`CameraRig`](super::CameraRig).
///
/// `theta` and `yaw` are the tracked angles (degrees); `orientation` is the
/// applied rotation. Every mutation goes through [`rotate_theta`],
/// [`settle_theta`] or [`rotate_yaw`], which update the tracked angle and
/// rebuild the orientation as `yaw(yaw) * pitch(theta)`, so the two cannot
/// drift apart however long the session runs.
///
/// [`rotate_theta`]: RigState::rotate_theta
/// [`settle_theta`]: RigState::settle_theta
/// [`rotate_yaw`]: RigState::rotate_yaw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigState {
    position: Vec3,
    yaw: f32,
    theta: f32,
    zoom_offset: f32,
    orientation: Quat,
}

impl RigState {
    /// State at `position` with the given angles (degrees) and zoom offset.
    #[must_use]
    pub fn new(position: Vec3, yaw_degrees: f32, theta: f32, zoom_offset: f32) -> Self {
        Self {
            position,
            yaw: yaw_degrees,
            theta,
            zoom_offset,
            orientation: yaw(yaw_degrees) * pitch(theta),
        }
    }

    /// World-space pivot.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Tracked yaw in degrees (unbounded).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Tracked tilt in degrees.
    #[must_use]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Signed offset along the camera's look axis.
    #[must_use]
    pub fn zoom_offset(&self) -> f32 {
        self.zoom_offset
    }

    /// Applied rotation of the rig.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Tilt by `amount` degrees about the rig's local right axis and add
    /// `amount` to the tracked theta.
    pub fn rotate_theta(&mut self, amount: f32) {
        self.theta += amount;
        self.sync_orientation();
    }

    /// Tilt so the tracked theta lands on `target`.
    ///
    /// The tracked value is assigned rather than summed so it lands on
    /// `target` bit-for-bit.
    pub fn settle_theta(&mut self, target: f32) {
        self.theta = target;
        self.sync_orientation();
    }

    /// Orbit by `amount` degrees about world +Y.
    pub fn rotate_yaw(&mut self, amount: f32) {
        self.yaw += amount;
        self.sync_orientation();
    }

    fn sync_orientation(&mut self) {
        self.orientation = (yaw(self.yaw) * pitch(self.theta)).normalize();
    }

    /// Add `amount` to the zoom offset.
    pub fn zoom_by(&mut self, amount: f32) {
        self.zoom_offset += amount;
    }

    /// Assign the zoom offset.
    pub fn set_zoom_offset(&mut self, zoom_offset: f32) {
        self.zoom_offset = zoom_offset;
    }

    /// Move the pivot by `delta`.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Place the pivot at `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Quaternions `q` and `-q` are the same rotation.
    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn positive_theta_looks_down() {
        let state = RigState::new(Vec3::ZERO, 0.0, 40.0, -40.0);
        let look = state.orientation() * Vec3::NEG_Z;
        assert!(look.y < 0.0);
        assert!(look.z < 0.0);
    }

    #[test]
    fn rotate_theta_tracks_cumulative_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = RigState::new(Vec3::ZERO, -45.0, 40.0, -40.0);
        let mut expected = 40.0_f64;
        for _ in 0..500 {
            let amount: f32 = rng.random_range(-5.0..5.0);
            state.rotate_theta(amount);
            expected += f64::from(amount);
            if rng.random_bool(0.3) {
                let turn: f32 = rng.random_range(-30.0..30.0);
                state.rotate_yaw(turn);
            }
        }
        assert!((f64::from(state.theta()) - expected).abs() < 1e-2);
        assert!(same_rotation(
            state.orientation(),
            yaw(state.yaw()) * pitch(state.theta())
        ));
    }

    #[test]
    fn settle_theta_lands_exactly_and_stays_in_sync() {
        let mut state = RigState::new(Vec3::ZERO, 10.0, 40.0, -40.0);
        state.rotate_theta(-60.0);
        assert_eq!(state.theta(), -20.0);
        state.settle_theta(-10.0);
        assert_eq!(state.theta(), -10.0);
        assert!(same_rotation(
            state.orientation(),
            yaw(10.0) * pitch(-10.0)
        ));
    }

    #[test]
    fn long_orbit_keeps_orientation_on_tracked_yaw() {
        // 20k frames of fast orbiting pushes the tracked yaw past 1e5 degrees.
        let mut state = RigState::new(Vec3::ZERO, -45.0, 40.0, -40.0);
        for _ in 0..20_000 {
            state.rotate_yaw(22.2);
        }
        assert!(state.yaw() > 1.0e5);
        assert!(same_rotation(
            state.orientation(),
            yaw(state.yaw()) * pitch(state.theta())
        ));
        let look = state.orientation() * Vec3::NEG_Z;
        assert!((look.y + 40.0_f32.to_radians().sin()).abs() < 1e-5);
    }

    #[test]
    fn yaw_does_not_change_pitch_of_look_direction() {
        let mut state = RigState::new(Vec3::ZERO, 0.0, 30.0, -40.0);
        let before = (state.orientation() * Vec3::NEG_Z).y;
        state.rotate_yaw(123.0);
        let after = (state.orientation() * Vec3::NEG_Z).y;
        assert!((before - after).abs() < 1e-5);
    }
}
