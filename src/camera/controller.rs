use glam::Vec3;

use super::clamp::Limits;
use super::edge::resolve_pan;
use super::motion;
use super::pose::RigPose;
use super::state::RigState;
use crate::area::AreaOracle;
use crate::engine::command::RigCommand;
use crate::error::RigError;
use crate::input::InputSnapshot;
use crate::options::{CameraOptions, Options};

/// Orbital edge-scrolling camera rig.
///
/// Owns the [`RigState`], the validated speeds and limits, and the play-area
/// oracle it slides against. [`update`](Self::update) is called once per
/// frame.
pub struct CameraRig<A> {
    state: RigState,
    options: CameraOptions,
    limits: Limits,
    area: A,
    home: Vec3,
    controls_enabled: bool,
}

impl<A: AreaOracle> CameraRig<A> {
    /// Build a rig parked over `home` with the configured starting pose.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::InvalidOptions`] when speeds are negative or
    /// non-finite, or when the tilt/zoom ranges are inverted.
    pub fn new(options: &Options, area: A, home: Vec3) -> Result<Self, RigError> {
        options.camera.validate()?;
        let limits = Limits::new(&options.limits)?;
        let camera = options.camera.clone();

        let mut state = RigState::new(
            home,
            camera.initial_yaw,
            camera.initial_theta,
            camera.initial_zoom,
        );
        if !limits.contains(&state) {
            log::warn!(
                "initial pose (theta {}, zoom {}) outside limits {:?}, clamping",
                camera.initial_theta,
                camera.initial_zoom,
                limits,
            );
            limits.apply(&mut state);
        }
        if !area.contains(home) {
            log::warn!("home pivot {home} lies outside the play area");
        }

        log::info!(
            "camera rig ready at {home}: theta {}, yaw {}, zoom {}",
            state.theta(),
            state.yaw(),
            state.zoom_offset()
        );

        Ok(Self {
            state,
            options: camera,
            limits,
            area,
            home,
            controls_enabled: true,
        })
    }

    /// Advance one frame.
    ///
    /// Does nothing while controls are disabled.
    pub fn update(&mut self, input: &InputSnapshot, dt: f32) {
        if !self.controls_enabled {
            return;
        }

        let zoom = motion::zoom_delta(input, &self.options, dt);
        if zoom != 0.0 {
            self.state.zoom_by(zoom);
        }

        let yaw = motion::yaw_delta(input, &self.options, dt);
        if yaw != 0.0 {
            self.state.rotate_yaw(yaw);
        }

        let tilt = motion::tilt_delta(input, &self.options, dt);
        if tilt != 0.0 {
            self.rotate_theta(tilt);
        }

        let pan = motion::pan_delta(input, self.state.orientation(), &self.options, dt);
        if pan != Vec3::ZERO {
            let pan = resolve_pan(&self.area, self.state.position(), pan);
            self.state.translate(pan);
        }

        if input.recenter_pressed {
            self.state.set_position(self.home);
        }

        self.enforce_limits();
    }

    /// Tilt by `amount` degrees, keeping the applied rotation and the
    /// tracked theta together. Limits are not enforced until the next
    /// [`update`](Self::update) or [`enforce_limits`](Self::enforce_limits).
    pub fn rotate_theta(&mut self, amount: f32) {
        self.state.rotate_theta(amount);
    }

    /// Pull zoom and tilt back into their ranges.
    pub fn enforce_limits(&mut self) {
        self.limits.apply(&mut self.state);
    }

    /// Move the pivot to `target` without consulting the play area.
    pub fn recenter(&mut self, target: Vec3) {
        self.state.set_position(target);
    }

    /// Freeze the rig; [`update`](Self::update) becomes a no-op.
    pub fn disable_controls(&mut self) {
        self.controls_enabled = false;
    }

    /// Resume reacting to input.
    pub fn enable_controls(&mut self) {
        self.controls_enabled = true;
    }

    /// Whether [`update`](Self::update) reacts to input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.controls_enabled
    }

    /// Apply a discrete command.
    pub fn execute(&mut self, command: RigCommand) {
        log::debug!("rig command: {command:?}");
        match command {
            RigCommand::DisableControls => self.disable_controls(),
            RigCommand::EnableControls => self.enable_controls(),
            RigCommand::Recenter { target } => self.recenter(target),
            RigCommand::RecenterHome => self.recenter(self.home),
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &RigState {
        &self.state
    }

    /// Current state as a pose for the transform sink.
    #[must_use]
    pub fn pose(&self) -> RigPose {
        RigPose::from(&self.state)
    }

    /// The anchor recentering returns to.
    #[must_use]
    pub fn home(&self) -> Vec3 {
        self.home
    }

    /// Active tilt/zoom ranges.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// The play area the rig slides against.
    #[must_use]
    pub fn area(&self) -> &A {
        &self.area
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::area::GridArea;
    use crate::options::{AreaOptions, ZoomDirection};

    const DT: f32 = 0.1;

    fn area() -> GridArea {
        GridArea::new(&AreaOptions {
            origin: [0.0, 0.0],
            cell_size: 1.0,
            cells: [100, 100],
        })
        .unwrap()
    }

    /// Yaw 0 so ground forward is −Z and ground right is +X.
    fn rig_at(home: Vec3) -> CameraRig<GridArea> {
        let mut options = Options::default();
        options.camera.initial_yaw = 0.0;
        CameraRig::new(&options, area(), home).unwrap()
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::centered(800.0, 600.0)
    }

    #[test]
    fn starts_at_home_with_configured_pose() {
        let rig = CameraRig::new(&Options::default(), area(), Vec3::new(50.0, 0.0, 50.0)).unwrap();
        let state = rig.state();
        assert_eq!(state.position(), Vec3::new(50.0, 0.0, 50.0));
        assert_eq!(state.theta(), 40.0);
        assert_eq!(state.yaw(), -45.0);
        assert_eq!(state.zoom_offset(), -40.0);
        assert!(rig.is_enabled());
    }

    #[test]
    fn out_of_range_initial_pose_is_clamped() {
        let mut options = Options::default();
        options.camera.initial_theta = 250.0;
        options.camera.initial_zoom = -400.0;
        let rig = CameraRig::new(&options, area(), Vec3::ZERO).unwrap();
        assert_eq!(rig.state().theta(), 190.0);
        assert_eq!(rig.state().zoom_offset(), -90.0);
    }

    #[test]
    fn inverted_limits_fail_fast() {
        let mut options = Options::default();
        options.limits.min_theta = 200.0;
        let result = CameraRig::new(&options, area(), Vec3::ZERO);
        assert!(matches!(result, Err(RigError::InvalidOptions(_))));
    }

    #[test]
    fn idle_frame_changes_nothing() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        let before = *rig.state();
        rig.update(&idle(), DT);
        assert_eq!(*rig.state(), before);
    }

    #[test]
    fn scroll_up_zooms_out_until_max_zoom() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        let mut input = idle();
        input.scroll_delta = 1.0;
        rig.update(&input, DT);
        assert_eq!(rig.state().zoom_offset(), -50.0);
        for _ in 0..20 {
            rig.update(&input, DT);
        }
        assert_eq!(rig.state().zoom_offset(), -90.0);

        input.scroll_delta = -1.0;
        for _ in 0..20 {
            rig.update(&input, DT);
        }
        assert_eq!(rig.state().zoom_offset(), -20.0);
    }

    #[test]
    fn scroll_up_zooms_in_when_configured() {
        let mut options = Options::default();
        options.camera.zoom_direction = ZoomDirection::ScrollUpZoomsIn;
        let mut rig = CameraRig::new(&options, area(), Vec3::new(50.0, 0.0, 50.0)).unwrap();
        let mut input = idle();
        input.scroll_delta = 1.0;
        rig.update(&input, DT);
        assert_eq!(rig.state().zoom_offset(), -30.0);
    }

    #[test]
    fn rotate_keys_turn_yaw_without_limit() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        let mut input = idle();
        input.rotate_left = true;
        for _ in 0..100 {
            rig.update(&input, DT);
        }
        assert!((rig.state().yaw() - 600.0).abs() < 1e-2);

        input.rotate_right = true;
        let before = rig.state().yaw();
        rig.update(&input, DT);
        assert_eq!(rig.state().yaw(), before);
    }

    #[test]
    fn tilt_keys_stop_at_theta_bounds() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        let mut input = idle();
        input.tilt_down = true;
        rig.update(&input, DT);
        assert!((rig.state().theta() - 46.0).abs() < 1e-4);
        for _ in 0..100 {
            rig.update(&input, DT);
        }
        assert_eq!(rig.state().theta(), 190.0);

        input.tilt_down = false;
        input.tilt_up = true;
        for _ in 0..100 {
            rig.update(&input, DT);
        }
        assert_eq!(rig.state().theta(), -10.0);
    }

    #[test]
    fn rotate_theta_then_clamp_lands_on_min() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        rig.rotate_theta(-60.0);
        assert_eq!(rig.state().theta(), -20.0);
        rig.enforce_limits();
        assert_eq!(rig.state().theta(), -10.0);
    }

    #[test]
    fn pointer_at_left_border_pans_left() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        rig.update(&idle().with_pointer(2.0, 300.0), DT);
        assert!(rig.state().position().abs_diff_eq(Vec3::new(48.0, 0.0, 50.0), 1e-4));

        rig.update(&idle().with_pointer(798.0, 300.0), DT);
        assert!(rig.state().position().abs_diff_eq(Vec3::new(50.0, 0.0, 50.0), 1e-4));

        rig.update(&idle().with_pointer(400.0, 300.0), DT);
        assert!(rig.state().position().abs_diff_eq(Vec3::new(50.0, 0.0, 50.0), 1e-4));
    }

    #[test]
    fn panning_into_a_wall_slides_along_it() {
        let mut rig = rig_at(Vec3::new(1.0, 0.0, 50.0));
        // Bottom-left corner of the screen: pan toward −X and +Z.
        rig.update(&idle().with_pointer(1.0, 1.0), DT);
        let slide = 2.0 * std::f32::consts::SQRT_2;
        assert!(rig
            .state()
            .position()
            .abs_diff_eq(Vec3::new(1.0, 0.0, 50.0 + slide), 1e-4));
    }

    #[test]
    fn camera_never_leaves_the_area() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..3_000 {
            let mut input = idle().with_pointer(
                rng.random_range(0.0..800.0),
                rng.random_range(0.0..600.0),
            );
            input.rotate_left = rng.random_bool(0.2);
            input.tilt_down = rng.random_bool(0.2);
            input.tilt_up = rng.random_bool(0.2);
            input.scroll_delta = rng.random_range(-1.0..1.0);
            let before = rig.state().position();
            rig.update(&input, rng.random_range(0.0..0.5));
            let after = rig.state().position();
            assert!(rig.area().contains(after) || after == before);
            assert!(rig.limits().contains(rig.state()));
        }
    }

    #[test]
    fn recenter_key_overrides_pan() {
        let home = Vec3::new(50.0, 0.0, 50.0);
        let mut rig = rig_at(home);
        for _ in 0..10 {
            rig.update(&idle().with_pointer(2.0, 300.0), DT);
        }
        assert!(rig.state().position().x < 50.0);

        let mut input = idle().with_pointer(2.0, 300.0);
        input.recenter_pressed = true;
        rig.update(&input, DT);
        assert_eq!(rig.state().position(), home);
    }

    #[test]
    fn recenter_bypasses_the_area() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        let outside = Vec3::new(-500.0, 0.0, 0.0);
        rig.recenter(outside);
        assert_eq!(rig.state().position(), outside);
    }

    #[test]
    fn disabled_rig_ignores_all_input() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        rig.disable_controls();
        let before = *rig.state();

        let mut input = idle().with_pointer(0.0, 0.0);
        input.scroll_delta = 5.0;
        input.rotate_left = true;
        input.tilt_up = true;
        input.recenter_pressed = true;
        for _ in 0..10 {
            rig.update(&input, DT);
        }
        assert_eq!(*rig.state(), before);

        rig.enable_controls();
        rig.update(&input, DT);
        assert_ne!(*rig.state(), before);
    }

    #[test]
    fn commands_drive_the_gate_and_recentering() {
        let home = Vec3::new(50.0, 0.0, 50.0);
        let mut rig = rig_at(home);
        rig.execute(RigCommand::DisableControls);
        assert!(!rig.is_enabled());
        rig.execute(RigCommand::EnableControls);
        assert!(rig.is_enabled());

        let target = Vec3::new(10.0, 0.0, 20.0);
        rig.execute(RigCommand::Recenter { target });
        assert_eq!(rig.state().position(), target);
        rig.execute(RigCommand::RecenterHome);
        assert_eq!(rig.state().position(), home);
    }

    #[test]
    fn negative_dt_reverses_motion() {
        let mut rig = rig_at(Vec3::new(50.0, 0.0, 50.0));
        rig.update(&idle().with_pointer(2.0, 300.0), -DT);
        assert!(rig.state().position().abs_diff_eq(Vec3::new(52.0, 0.0, 50.0), 1e-4));
    }
}
