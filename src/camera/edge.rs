//! Keeps pan motion inside the play area.
//!
//! Resolution is two-step and best effort: try the pan as-is, else slide
//! along the edge nearest the current pivot, else stop. Double-axis
//! violations near a corner stop the camera for that frame; the next frame
//! re-evaluates from scratch.

use glam::Vec3;

use crate::area::{AreaOracle, Edge};

/// Redirect `pan` to run parallel to `edge`, keeping its length.
///
/// The direction along the edge follows the sign of the original component
/// on that axis; a zero component slides toward +.
#[must_use]
pub fn slide_along(edge: Edge, pan: Vec3) -> Vec3 {
    let magnitude = pan.length();
    if edge.bounds_x() {
        let z = if pan.z < 0.0 { -magnitude } else { magnitude };
        Vec3::new(0.0, 0.0, z)
    } else {
        let x = if pan.x < 0.0 { -magnitude } else { magnitude };
        Vec3::new(x, 0.0, 0.0)
    }
}

/// Adjust `pan` so that `position + pan` stays inside the area.
///
/// Returns `pan` unchanged when the move is legal, the slide along the
/// nearest edge when that is legal, and [`Vec3::ZERO`] otherwise.
#[must_use]
pub fn resolve_pan<A: AreaOracle + ?Sized>(area: &A, position: Vec3, pan: Vec3) -> Vec3 {
    if area.contains(position + pan) {
        return pan;
    }

    let edge = area.closest_edge(position);
    let slide = slide_along(edge, pan);
    if area.contains(position + slide) {
        log::debug!("pan {pan} blocked, sliding along {edge:?}: {slide}");
        slide
    } else {
        log::debug!("pan {pan} blocked at {edge:?} corner, stopping");
        Vec3::ZERO
    }
}
