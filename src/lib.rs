// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Edge-scrolling orbital camera rig for top-down and isometric game views.
//!
//! Each frame the rig turns an input snapshot (scroll, held keys, pointer
//! position) into zoom, yaw, tilt and pan motion, slides the pan along the
//! nearest boundary of the play area instead of leaving it, and clamps zoom
//! and tilt into their configured ranges.
//!
//! # Key entry points
//!
//! - [`camera::CameraRig`] - the rig controller owning the camera state
//! - [`engine::RigSession`] - per-frame driver wiring input, time and the
//!   transform sink around a rig
//! - [`area::GridArea`] - rectangular play-area grid answering membership
//!   and nearest-edge queries
//! - [`options::Options`] - runtime configuration (speeds, limits, grid,
//!   keybindings) with TOML preset support
//!
//! # Architecture
//!
//! Collaborators are traits injected at construction:
//! [`area::AreaOracle`], [`input::InputSource`],
//! [`util::frame_timing::TimeSource`] and [`camera::TransformSink`]. The rig
//! never reads its transform back from the sink; [`camera::RigState`] is the
//! only source of truth.

pub mod area;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use engine::command::RigCommand;
pub use error::RigError;
