//! Utility modules shared across the crate.

/// Frame delta-time sources.
pub mod frame_timing;
