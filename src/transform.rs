//! Bidirectional mapping between grid (physical) and surface (pixel) coordinates.
//!
//! All five views share the same horizontal center column; each view supplies
//! its own vertical origin. The primary (position) view uses the canvas
//! midline, the derived views use an origin snapped onto a gridline so that
//! vectors anchor exactly on grid intersections.

use egui::Pos2;

use crate::vec2::Vec2;

/// Grid-to-pixel mapping shared by all views.
///
/// `to_grid` rounds to the nearest integer grid unit, which quantizes every
/// placed or dragged point to integer-meter coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    /// Pixels per grid unit.
    pub grid_size: f32,
    /// Pixel column of the grid origin, shared by all views.
    pub center_x: f32,
}

impl GridTransform {
    pub fn new(grid_size: f32, center_x: f32) -> Self {
        Self {
            grid_size,
            center_x,
        }
    }

    /// Map a grid vector to a surface pixel. Y is inverted: physical "up"
    /// is pixel "up". Exact, no rounding.
    pub fn to_surface(&self, grid: Vec2, origin_y: f32) -> Pos2 {
        Pos2::new(
            self.center_x + grid.x as f32 * self.grid_size,
            origin_y - grid.y as f32 * self.grid_size,
        )
    }

    /// Exact algebraic inverse of [`Self::to_surface`], with each component
    /// rounded to the nearest integer grid unit.
    pub fn to_grid(&self, surface: Pos2, origin_y: f32) -> Vec2 {
        Vec2::new(
            (((surface.x - self.center_x) / self.grid_size) as f64).round(),
            ((-(surface.y - origin_y) / self.grid_size) as f64).round(),
        )
    }

    /// Vertical origin for the derived-quantity views: the canvas midline
    /// snapped down onto the nearest gridline.
    pub fn derived_origin_y(&self, canvas_height: f32) -> f32 {
        let half = (canvas_height / 2.0).floor();
        half - half % self.grid_size
    }
}
