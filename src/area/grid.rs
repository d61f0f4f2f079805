use glam::{UVec2, Vec2, Vec3};

use super::{AreaOracle, Edge};
use crate::error::RigError;
use crate::options::AreaOptions;

/// A `cells.x × cells.y` grid of square cells laid out on the XZ plane,
/// starting at `origin` and growing toward +x and +z.
///
/// Height is ignored: a point is inside when its `(x, z)` falls into a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridArea {
    origin: Vec2,
    cell_size: f32,
    cells: UVec2,
}

impl GridArea {
    /// Build a grid from validated options.
    pub fn new(options: &AreaOptions) -> Result<Self, RigError> {
        options.validate()?;
        Ok(Self {
            origin: Vec2::from_array(options.origin),
            cell_size: options.cell_size,
            cells: UVec2::from_array(options.cells),
        })
    }

    /// World-space `(x, z)` of the minimum corner.
    #[must_use]
    pub fn min_corner(&self) -> Vec2 {
        self.origin
    }

    /// World-space `(x, z)` of the maximum corner.
    #[must_use]
    pub fn max_corner(&self) -> Vec2 {
        self.origin + self.cells.as_vec2() * self.cell_size
    }

    /// World-space center of the grid at height 0.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        let mid = (self.min_corner() + self.max_corner()) * 0.5;
        Vec3::new(mid.x, 0.0, mid.y)
    }

    /// Map a world position to the cell containing it, or `None` when it
    /// lies outside the grid.
    ///
    /// Cells are half-open: the minimum boundary belongs to the grid, the
    /// maximum boundary does not.
    #[must_use]
    pub fn world_to_cell(&self, position: Vec3) -> Option<UVec2> {
        let local = (Vec2::new(position.x, position.z) - self.origin) / self.cell_size;
        if !local.is_finite() || local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let cell = local.floor();
        if cell.x >= self.cells.x as f32 || cell.y >= self.cells.y as f32 {
            return None;
        }
        Some(cell.as_uvec2())
    }
}

impl AreaOracle for GridArea {
    fn contains(&self, position: Vec3) -> bool {
        self.world_to_cell(position).is_some()
    }

    /// Smallest distance to the four boundary lines. Ties go to the first
    /// edge in [`Edge::ALL`] order (x edges before z edges).
    fn closest_edge(&self, position: Vec3) -> Edge {
        let min = self.min_corner();
        let max = self.max_corner();
        let distances = [
            (position.x - min.x).abs(),
            (max.x - position.x).abs(),
            (position.z - min.y).abs(),
            (max.y - position.z).abs(),
        ];

        let mut best = Edge::ALL[0];
        let mut best_distance = distances[0];
        for (edge, distance) in Edge::ALL.into_iter().zip(distances).skip(1) {
            if distance < best_distance {
                best = edge;
                best_distance = distance;
            }
        }
        best
    }
}
