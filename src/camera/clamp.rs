use super::state::RigState;
use crate::error::RigError;
use crate::options::LimitOptions;

/// Validated tilt and zoom ranges.
///
/// `max_zoom <= min_zoom` always holds: zoom offsets are negative distances
/// and `max_zoom` is the farthest one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    min_theta: f32,
    max_theta: f32,
    max_zoom: f32,
    min_zoom: f32,
}

impl Limits {
    /// Build limits, rejecting inverted or non-finite ranges.
    pub fn new(options: &LimitOptions) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            min_theta: options.min_theta,
            max_theta: options.max_theta,
            max_zoom: options.max_zoom,
            min_zoom: options.min_zoom,
        })
    }

    /// `zoom` pulled into `[max_zoom, min_zoom]`.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.max_zoom, self.min_zoom)
    }

    /// The bound `theta` must be moved onto, or `None` when it is in range.
    #[must_use]
    pub fn theta_target(&self, theta: f32) -> Option<f32> {
        if theta < self.min_theta {
            Some(self.min_theta)
        } else if theta > self.max_theta {
            Some(self.max_theta)
        } else {
            None
        }
    }

    /// Whether `state` already satisfies both ranges.
    #[must_use]
    pub fn contains(&self, state: &RigState) -> bool {
        self.theta_target(state.theta()).is_none()
            && self.clamp_zoom(state.zoom_offset()) == state.zoom_offset()
    }

    /// Enforce both ranges on `state` in place.
    ///
    /// Zoom is assigned directly. Tilt goes through
    /// [`RigState::settle_theta`] so the applied rotation follows the
    /// tracked value.
    pub fn apply(&self, state: &mut RigState) {
        let zoom = state.zoom_offset();
        let clamped = self.clamp_zoom(zoom);
        if clamped != zoom {
            state.set_zoom_offset(clamped);
        }
        if let Some(bound) = self.theta_target(state.theta()) {
            state.settle_theta(bound);
        }
    }

    /// Copy of `state` with both ranges enforced.
    #[must_use]
    pub fn clamped(&self, mut state: RigState) -> RigState {
        self.apply(&mut state);
        state
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::camera::state::{pitch, yaw};

    fn limits() -> Limits {
        Limits::new(&LimitOptions::default()).unwrap()
    }

    #[test]
    fn in_range_state_is_untouched() {
        let state = RigState::new(Vec3::ZERO, -45.0, 40.0, -40.0);
        assert!(limits().contains(&state));
        assert_eq!(limits().clamped(state), state);
    }

    #[test]
    fn zoom_lands_on_bounds() {
        let limits = limits();
        assert_eq!(limits.clamp_zoom(-120.0), -90.0);
        assert_eq!(limits.clamp_zoom(-5.0), -20.0);
        assert_eq!(limits.clamp_zoom(-50.0), -50.0);
    }

    #[test]
    fn theta_target_picks_the_violated_bound() {
        let limits = limits();
        assert_eq!(limits.theta_target(-20.0), Some(-10.0));
        assert_eq!(limits.theta_target(200.0), Some(190.0));
        assert_eq!(limits.theta_target(90.0), None);
        assert_eq!(limits.theta_target(190.0), None);
    }

    #[test]
    fn under_tilt_is_rotated_back_to_min() {
        let mut state = RigState::new(Vec3::ZERO, 0.0, 40.0, -40.0);
        state.rotate_theta(-60.0);
        assert_eq!(state.theta(), -20.0);

        limits().apply(&mut state);
        assert_eq!(state.theta(), -10.0);
        assert!(state.orientation().dot(yaw(0.0) * pitch(-10.0)).abs() > 1.0 - 1e-6);
    }

    #[test]
    fn clamping_is_idempotent() {
        let limits = limits();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2_000 {
            let state = RigState::new(
                Vec3::ZERO,
                rng.random_range(-720.0..720.0),
                rng.random_range(-90.0..300.0),
                rng.random_range(-200.0..10.0),
            );
            let once = limits.clamped(state);
            assert!(limits.contains(&once));
            assert_eq!(limits.clamped(once), once);
        }
    }

    #[test]
    fn inverted_options_are_rejected() {
        let options = LimitOptions {
            max_zoom: 0.0,
            min_zoom: -10.0,
            ..LimitOptions::default()
        };
        assert!(Limits::new(&options).is_err());
    }
}
