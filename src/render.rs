//! Per-frame drawing of the five kinematics views.
//!
//! Every redraw is a full, synchronous pass: clear, gridlines, axes, labels,
//! then the view's vectors and markers. The pipeline draws through the
//! [`DrawSurface`] capability trait, so it can run headless in tests; the
//! egui painter adapter lives with the app.

use egui::{Align2, Color32, Pos2};

use crate::colors;
use crate::config::ViewLayout;
use crate::kinematics::{self, PAIR_COUNT, SLOT_COUNT, TRIPLE_COUNT};
use crate::samples::SampleStore;
use crate::transform::GridTransform;
use crate::vec2::Vec2;

const ARROW_HEAD_LENGTH: f32 = 10.0;
const ARROW_HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;
const LABEL_FONT_SIZE: f32 = 14.0;
const CAPTION_FONT_SIZE: f32 = 16.0;

/// The drawing primitives a view needs from its rendering surface.
///
/// Coordinates are surface-local pixels.
pub trait DrawSurface {
    /// Clear the whole surface to the canvas background.
    fn clear(&mut self, width: f32, height: f32);
    /// Stroke a single line segment.
    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32);
    /// Fill a closed convex polygon (arrowheads).
    fn polygon(&mut self, points: &[Pos2], color: Color32);
    /// Fill a circle, optionally with an outline stroke.
    fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, outline: Option<(f32, Color32)>);
    /// Draw text anchored at `pos`.
    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32);
}

/// Draws all five views from the current sample state.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    layout: ViewLayout,
    transform: GridTransform,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new(ViewLayout::default())
    }
}

impl RenderPipeline {
    pub fn new(layout: ViewLayout) -> Self {
        Self {
            layout,
            transform: layout.transform(),
        }
    }

    pub fn layout(&self) -> &ViewLayout {
        &self.layout
    }

    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    /// The primary view: gridded plane with axis labels and the four
    /// position markers. The selected marker is larger and outlined.
    pub fn draw_position_view(&self, surface: &mut dyn DrawSurface, store: &SampleStore) {
        let origin_y = self.layout.center_y();
        self.draw_grid(surface, self.layout.canvas_height, origin_y);
        self.draw_axis_labels(surface, origin_y);

        for slot in 0..SLOT_COUNT {
            let Some(pos) = store.position(slot) else {
                continue;
            };
            let center = self.transform.to_surface(pos, origin_y);
            let selected = slot == store.selected();
            let radius = if selected {
                self.layout.selected_marker_radius
            } else {
                self.layout.marker_radius
            };
            let outline = selected.then_some((2.0, colors::MARKER_OUTLINE));
            surface.circle(center, radius, colors::POSITION_COLORS[slot], outline);
        }
    }

    /// Displacement vectors: one arrow from the origin to each placed
    /// position, in the slot's color.
    pub fn draw_displacement_view(&self, surface: &mut dyn DrawSurface, store: &SampleStore) {
        let origin_y = self.begin_derived_view(surface, "Displacement Vectors");
        for slot in 0..SLOT_COUNT {
            if let Some(r) = kinematics::displacement(store.positions(), slot) {
                self.draw_vector(surface, r, origin_y, colors::POSITION_COLORS[slot], None);
            }
        }
    }

    /// Changes in displacement: one arrow per consecutive pair, anchored at
    /// the origin.
    pub fn draw_delta_view(&self, surface: &mut dyn DrawSurface, store: &SampleStore) {
        let origin_y = self.begin_derived_view(surface, "Changes in Displacement");
        for pair in 0..PAIR_COUNT {
            if let Some(dr) = kinematics::delta_displacement(store.positions(), pair) {
                self.draw_vector(surface, dr, origin_y, colors::DELTA_COLORS[pair], None);
            }
        }
    }

    /// Velocity vectors per consecutive pair, with magnitude labels.
    pub fn draw_velocity_view(&self, surface: &mut dyn DrawSurface, store: &SampleStore) {
        let origin_y = self.begin_derived_view(surface, "Velocity Vectors");
        for pair in 0..PAIR_COUNT {
            if let Some(v) = kinematics::velocity(store.positions(), store.times(), pair) {
                let label = format!("{:.1} m/s", v.magnitude());
                self.draw_vector(
                    surface,
                    v,
                    origin_y,
                    colors::VELOCITY_COLORS[pair],
                    Some(label.as_str()),
                );
            }
        }
    }

    /// Acceleration vectors per triple, with magnitude labels. Both triples
    /// may render at once.
    pub fn draw_acceleration_view(&self, surface: &mut dyn DrawSurface, store: &SampleStore) {
        let origin_y = self.begin_derived_view(surface, "Acceleration Vectors");
        for triple in 0..TRIPLE_COUNT {
            if let Some(a) = kinematics::acceleration(store.positions(), store.times(), triple) {
                let label = format!("{:.1} m/s\u{b2}", a.magnitude());
                self.draw_vector(
                    surface,
                    a,
                    origin_y,
                    colors::ACCELERATION_COLORS[triple],
                    Some(label.as_str()),
                );
            }
        }
    }

    /// Clear, grid, axes and title for a derived view; returns its vertical
    /// origin.
    fn begin_derived_view(&self, surface: &mut dyn DrawSurface, title: &str) -> f32 {
        let origin_y = self.layout.derived_origin_y();
        self.draw_grid(surface, self.layout.derived_height, origin_y);
        surface.text(
            Pos2::new(self.layout.canvas_width / 4.0, 12.0),
            Align2::CENTER_CENTER,
            title,
            LABEL_FONT_SIZE,
            colors::LABEL,
        );
        origin_y
    }

    fn draw_grid(&self, surface: &mut dyn DrawSurface, height: f32, origin_y: f32) {
        let width = self.layout.canvas_width;
        let g = self.layout.grid_size;
        surface.clear(width, height);

        let v_lines = (width / g).floor() as i32;
        for i in 0..=v_lines {
            let x = i as f32 * g;
            surface.line(
                Pos2::new(x, 0.0),
                Pos2::new(x, height),
                1.0,
                colors::GRID_LINE,
            );
        }
        let h_lines = (height / g).floor() as i32;
        for i in 0..=h_lines {
            let y = i as f32 * g;
            surface.line(
                Pos2::new(0.0, y),
                Pos2::new(width, y),
                1.0,
                colors::GRID_LINE,
            );
        }

        // Axes through the view origin.
        surface.line(
            Pos2::new(0.0, origin_y),
            Pos2::new(width, origin_y),
            2.0,
            colors::AXIS,
        );
        surface.line(
            Pos2::new(self.transform.center_x, 0.0),
            Pos2::new(self.transform.center_x, height),
            2.0,
            colors::AXIS,
        );
    }

    /// Meter labels every five grid units plus the origin and unit captions.
    /// Primary view only.
    fn draw_axis_labels(&self, surface: &mut dyn DrawSurface, origin_y: f32) {
        let g = self.layout.grid_size;
        let cx = self.transform.center_x;
        let half = ((self.layout.canvas_width / g).floor() / 2.0) as i32;

        for i in (-half..=half).step_by(5) {
            if i == 0 {
                continue;
            }
            surface.text(
                Pos2::new(cx + i as f32 * g, origin_y + 6.0),
                Align2::CENTER_TOP,
                &format!("{i}m"),
                LABEL_FONT_SIZE,
                colors::LABEL,
            );
            surface.text(
                Pos2::new(cx + 8.0, origin_y - i as f32 * g),
                Align2::LEFT_CENTER,
                &format!("{i}m"),
                LABEL_FONT_SIZE,
                colors::LABEL,
            );
        }
        surface.text(
            Pos2::new(cx - 6.0, origin_y + 6.0),
            Align2::RIGHT_TOP,
            "0",
            LABEL_FONT_SIZE,
            colors::LABEL,
        );
        surface.text(
            Pos2::new(self.layout.canvas_width - 8.0, origin_y - 10.0),
            Align2::RIGHT_BOTTOM,
            "x (meters)",
            CAPTION_FONT_SIZE,
            colors::LABEL,
        );
        surface.text(
            Pos2::new(cx + 8.0, 12.0),
            Align2::LEFT_CENTER,
            "y (meters)",
            CAPTION_FONT_SIZE,
            colors::LABEL,
        );
    }

    /// An arrow from the view origin to `v`, with an optional label near the
    /// tip.
    fn draw_vector(
        &self,
        surface: &mut dyn DrawSurface,
        v: Vec2,
        origin_y: f32,
        color: Color32,
        label: Option<&str>,
    ) {
        let from = self.transform.to_surface(Vec2::ZERO, origin_y);
        let to = self.transform.to_surface(v, origin_y);
        self.draw_arrow(surface, from, to, color);
        if let Some(text) = label {
            let anchor = if to.x >= from.x {
                Align2::LEFT_BOTTOM
            } else {
                Align2::RIGHT_BOTTOM
            };
            let offset = if to.x >= from.x { 6.0 } else { -6.0 };
            surface.text(
                Pos2::new(to.x + offset, to.y - 4.0),
                anchor,
                text,
                LABEL_FONT_SIZE,
                color,
            );
        }
    }

    fn draw_arrow(&self, surface: &mut dyn DrawSurface, from: Pos2, to: Pos2, color: Color32) {
        surface.line(from, to, 2.0, color);

        let angle = (to.y - from.y).atan2(to.x - from.x);
        let flank = |a: f32| {
            Pos2::new(
                to.x - ARROW_HEAD_LENGTH * a.cos(),
                to.y - ARROW_HEAD_LENGTH * a.sin(),
            )
        };
        surface.polygon(
            &[
                to,
                flank(angle - ARROW_HEAD_ANGLE),
                flank(angle + ARROW_HEAD_ANGLE),
            ],
            color,
        );
    }
}
