//! Frame driver wiring the rig to its collaborators.
//!
//! [`RigSession`] receives every collaborator at construction: the rig (with
//! its area oracle), an [`InputSource`], a [`TimeSource`] and a
//! [`TransformSink`]. Nothing is looked up at runtime.

/// Discrete rig commands.
pub mod command;

use crate::area::AreaOracle;
use crate::camera::{CameraRig, RigPose, TransformSink};
use crate::input::InputSource;
use crate::util::frame_timing::TimeSource;
use self::command::RigCommand;

/// Owns a [`CameraRig`] and the collaborators it needs each frame.
pub struct RigSession<A, I, T, S> {
    rig: CameraRig<A>,
    input: I,
    clock: T,
    sink: S,
    frames: u64,
}

impl<A, I, T, S> RigSession<A, I, T, S>
where
    A: AreaOracle,
    I: InputSource,
    T: TimeSource,
    S: TransformSink,
{
    /// Assemble a session. The sink receives the starting pose immediately
    /// so the render transform matches the rig before the first frame.
    pub fn new(rig: CameraRig<A>, input: I, clock: T, mut sink: S) -> Self {
        sink.write(&rig.pose());
        Self {
            rig,
            input,
            clock,
            sink,
            frames: 0,
        }
    }

    /// Simulate one frame: read `dt`, read input, update the rig, write the
    /// pose.
    pub fn frame(&mut self) {
        let dt = self.clock.delta_seconds();
        let snapshot = self.input.next_snapshot();
        self.rig.update(&snapshot, dt);
        self.sink.write(&self.rig.pose());
        self.frames += 1;
        log::trace!("frame {} (dt {dt:.4}): {:?}", self.frames, self.rig.pose());
    }

    /// Apply a command and publish the resulting pose.
    pub fn execute(&mut self, command: RigCommand) {
        self.rig.execute(command);
        self.sink.write(&self.rig.pose());
    }

    /// Frames simulated so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The rig being driven.
    #[must_use]
    pub fn rig(&self) -> &CameraRig<A> {
        &self.rig
    }

    /// Latest pose.
    #[must_use]
    pub fn pose(&self) -> RigPose {
        self.rig.pose()
    }

    /// Mutable access to the input source, e.g. to feed window events.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The transform sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tear the session apart into its collaborators.
    pub fn into_parts(self) -> (CameraRig<A>, I, T, S) {
        (self.rig, self.input, self.clock, self.sink)
    }
}
