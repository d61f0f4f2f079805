//! Camera rig: state, per-frame motion, edge sliding, and limits.
//!
//! Provides an orbital pivot camera driven by edge-scrolling, scroll-wheel
//! zoom and held rotate/tilt keys.

/// Tilt and zoom range enforcement.
pub mod clamp;
/// The rig controller orchestrating one frame.
pub mod controller;
/// Pan resolution against the play-area boundary.
pub mod edge;
/// Input-to-motion mapping.
pub mod motion;
/// Pose written to the transform sink.
pub mod pose;
/// Tracked rig state and synchronized rotations.
pub mod state;

pub use clamp::Limits;
pub use controller::CameraRig;
pub use pose::{RigPose, TransformSink};
pub use state::RigState;
