//! Play-area queries: membership and nearest boundary edge.
//!
//! The rig only ever asks two questions of the playable region, captured by
//! [`AreaOracle`]. [`GridArea`] answers them for a rectangular grid of
//! square cells on the XZ plane.

/// Rectangular cell grid implementing [`AreaOracle`].
pub mod grid;

use glam::Vec3;

pub use grid::GridArea;

/// One of the four boundaries of a rectangular play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Boundary at the minimum world x.
    XMin,
    /// Boundary at the maximum world x.
    XMax,
    /// Boundary at the minimum world z.
    ZMin,
    /// Boundary at the maximum world z.
    ZMax,
}

impl Edge {
    /// All edges in tie-break priority order.
    pub const ALL: [Edge; 4] = [Edge::XMin, Edge::XMax, Edge::ZMin, Edge::ZMax];

    /// Whether this edge bounds the x axis (slides happen along z).
    #[must_use]
    pub fn bounds_x(self) -> bool {
        matches!(self, Edge::XMin | Edge::XMax)
    }
}

/// Answers membership and nearest-edge queries about the playable region.
///
/// Queries are synchronous and infallible; they are issued several times per
/// frame and must not block.
pub trait AreaOracle {
    /// Whether `position` (projected onto the ground plane) is playable.
    fn contains(&self, position: Vec3) -> bool;

    /// The boundary edge closest to `position`.
    fn closest_edge(&self, position: Vec3) -> Edge;
}

impl<A: AreaOracle + ?Sized> AreaOracle for &A {
    fn contains(&self, position: Vec3) -> bool {
        (**self).contains(position)
    }

    fn closest_edge(&self, position: Vec3) -> Edge {
        (**self).closest_edge(position)
    }
}
