//! Headless tour: drives a camera rig around its play area with scripted
//! input and logs the pose. Pass a TOML options file to try a preset.
//!
//! ```text
//! RUST_LOG=info orbit-rig [options.toml]
//! ```

use std::path::Path;

use orbit_rig::area::GridArea;
use orbit_rig::camera::{CameraRig, RigPose, TransformSink};
use orbit_rig::engine::RigSession;
use orbit_rig::input::{InputSnapshot, InputSource};
use orbit_rig::options::Options;
use orbit_rig::util::frame_timing::FixedStep;
use orbit_rig::{RigCommand, RigError};

const FPS: u32 = 60;
const SCREEN: (f32, f32) = (1280.0, 720.0);

/// One second per leg: pan to the left wall, slide along it, orbit and tilt,
/// zoom out, recenter, then push into a corner.
struct ScriptedTour {
    frame: u32,
}

impl InputSource for ScriptedTour {
    fn next_snapshot(&mut self) -> InputSnapshot {
        let (width, height) = SCREEN;
        let leg = self.frame / FPS;
        self.frame += 1;

        let mut input = InputSnapshot::centered(width, height);
        match leg {
            0..=2 => input = input.with_pointer(0.0, height * 0.5),
            3 => input = input.with_pointer(0.0, height - 1.0),
            4 => {
                input.rotate_left = true;
                input.tilt_down = true;
            }
            5 => input.scroll_delta = 1.0,
            6 => input.recenter_pressed = self.frame % FPS == 1,
            _ => input = input.with_pointer(0.0, 0.0),
        }
        input
    }
}

/// Logs the pose once per simulated second.
struct PoseLog {
    written: u32,
}

impl TransformSink for PoseLog {
    fn write(&mut self, pose: &RigPose) {
        if self.written % FPS == 0 {
            log::info!(
                "t={:>2}s pivot={:.2} eye={:.2} yaw={:.1} theta={:.1} zoom={:.1}",
                self.written / FPS,
                pose.position,
                pose.eye(),
                pose.yaw,
                pose.theta,
                pose.zoom_offset
            );
        }
        self.written += 1;
    }
}

fn run() -> Result<(), RigError> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let area = GridArea::new(&options.area)?;
    let home = area.center();
    let rig = CameraRig::new(&options, area, home)?;
    let mut session = RigSession::new(
        rig,
        ScriptedTour { frame: 0 },
        FixedStep::from_fps(FPS),
        PoseLog { written: 0 },
    );

    for _ in 0..(8 * FPS) {
        session.frame();
    }

    // Frozen rigs ignore input; the pose stays put.
    session.execute(RigCommand::DisableControls);
    for _ in 0..FPS {
        session.frame();
    }

    let pose = session.pose();
    log::info!(
        "finished after {} frames at {:.2} (inside play area: {})",
        session.frames(),
        pose.position,
        session.rig().area().world_to_cell(pose.position).is_some()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
