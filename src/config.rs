//! Fixed layout constants shared by all views.
//!
//! Nothing here is user-configurable at runtime; the struct exists so the
//! render pipeline, interaction controller and app agree on one set of
//! dimensions (and so tests can shrink them).

use crate::transform::GridTransform;

/// Pixel dimensions and spacing of the canvases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLayout {
    /// Grid spacing in pixels per unit.
    pub grid_size: f32,
    /// Width of every canvas.
    pub canvas_width: f32,
    /// Height of the primary (position) canvas.
    pub canvas_height: f32,
    /// Height of the four derived-quantity canvases.
    pub derived_height: f32,
    /// Marker radius, and the larger radius of the selected marker.
    pub marker_radius: f32,
    pub selected_marker_radius: f32,
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            grid_size: 20.0,
            canvas_width: 500.0,
            canvas_height: 500.0,
            derived_height: 300.0,
            marker_radius: 6.0,
            selected_marker_radius: 8.0,
        }
    }
}

impl ViewLayout {
    /// The shared grid/pixel mapping: origin column at the canvas midline.
    pub fn transform(&self) -> GridTransform {
        GridTransform::new(self.grid_size, (self.canvas_width / 2.0).floor())
    }

    /// Vertical origin of the primary view.
    pub fn center_y(&self) -> f32 {
        (self.canvas_height / 2.0).floor()
    }

    /// Vertical origin of the derived views, snapped onto a gridline.
    pub fn derived_origin_y(&self) -> f32 {
        self.transform().derived_origin_y(self.derived_height)
    }
}
