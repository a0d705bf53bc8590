//! eframe application wiring: five canvases, slot selector buttons, time
//! inputs, readouts and legends.
//!
//! The app owns the state object and forwards egui pointer/input events to
//! the interaction controller; egui's immediate mode makes every frame a
//! full synchronous redraw of all five views.

use eframe::egui;
use egui::{Align2, Color32, CursorIcon, Pos2, Rect, RichText, Sense, Stroke};

use crate::colors;
use crate::config::ViewLayout;
use crate::interaction::{CursorHint, InteractionController, Pointer};
use crate::kinematics::SLOT_COUNT;
use crate::render::{DrawSurface, RenderPipeline};
use crate::samples::SampleStore;
use crate::vec2::Vec2;

/// Adapter from [`DrawSurface`] onto an egui painter clipped to one canvas.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
}

impl PainterSurface<'_> {
    fn at(&self, p: Pos2) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }
}

impl DrawSurface for PainterSurface<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        let rect = Rect::from_min_size(self.origin, egui::vec2(width, height));
        self.painter
            .rect_filled(rect, egui::CornerRadius::ZERO, colors::CANVAS_BACKGROUND);
    }

    fn line(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        self.painter
            .line_segment([self.at(from), self.at(to)], Stroke::new(width, color));
    }

    fn polygon(&mut self, points: &[Pos2], color: Color32) {
        let points = points.iter().map(|&p| self.at(p)).collect();
        self.painter
            .add(egui::Shape::convex_polygon(points, color, Stroke::NONE));
    }

    fn circle(
        &mut self,
        center: Pos2,
        radius: f32,
        fill: Color32,
        outline: Option<(f32, Color32)>,
    ) {
        let center = self.at(center);
        self.painter.circle_filled(center, radius, fill);
        if let Some((width, color)) = outline {
            self.painter
                .circle_stroke(center, radius, Stroke::new(width, color));
        }
    }

    fn text(&mut self, pos: Pos2, anchor: Align2, text: &str, size: f32, color: Color32) {
        self.painter.text(
            self.at(pos),
            anchor,
            text,
            egui::FontId::proportional(size),
            color,
        );
    }
}

/// The interactive kinematics application.
pub struct KinelabApp {
    store: SampleStore,
    controller: InteractionController,
    pipeline: RenderPipeline,
    /// Buffered text of the four time-input fields. Refreshed from the
    /// (sorted) store on every accepted edit; a rejected edit keeps the
    /// typed text but never touches the store.
    time_edits: [String; SLOT_COUNT],
    /// Last live grid readout under the pointer.
    readout: Option<Vec2>,
}

impl Default for KinelabApp {
    fn default() -> Self {
        Self::new()
    }
}

impl KinelabApp {
    pub fn new() -> Self {
        let store = SampleStore::new();
        let time_edits = std::array::from_fn(|slot| format_time(store.time(slot)));
        Self {
            store,
            controller: InteractionController::new(),
            pipeline: RenderPipeline::new(ViewLayout::default()),
            time_edits,
            readout: None,
        }
    }

    fn refresh_time_edits(&mut self) {
        for slot in 0..SLOT_COUNT {
            self.time_edits[slot] = format_time(self.store.time(slot));
        }
    }

    /// The primary canvas: draws the position view and feeds pointer events
    /// through the interaction controller.
    fn position_canvas(&mut self, ui: &mut egui::Ui) {
        let layout = *self.pipeline.layout();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(layout.canvas_width, layout.canvas_height),
            Sense::click_and_drag(),
        );
        let rect = response.rect;
        let local = |p: Pos2| Pos2::new(p.x - rect.min.x, p.y - rect.min.y);

        let mut events = Vec::new();
        if response.clicked() {
            // A press without movement never becomes an egui drag; deliver
            // it as a full down/up so a click still places a point.
            if let Some(p) = response.interact_pointer_pos() {
                events.push(Pointer::Down(local(p)));
                events.push(Pointer::Up);
            }
        } else if response.drag_started() {
            if let Some(p) = response.interact_pointer_pos() {
                events.push(Pointer::Down(local(p)));
            }
        } else if response.dragged() {
            if let Some(p) = response.interact_pointer_pos() {
                // egui keeps the drag alive outside the widget; the canvas
                // contract ends it at the border instead.
                if rect.contains(p) {
                    events.push(Pointer::Moved(local(p)));
                } else {
                    events.push(Pointer::Left);
                }
            }
        } else if let Some(p) = response.hover_pos() {
            events.push(Pointer::Moved(local(p)));
        }
        if response.drag_stopped() {
            events.push(Pointer::Up);
        }

        let transform = *self.pipeline.transform();
        let origin_y = layout.center_y();
        for event in events {
            let update = self
                .controller
                .on_pointer(&mut self.store, &transform, origin_y, event);
            if let Some(grid) = update.readout {
                self.readout = Some(grid);
            }
            ui.ctx().set_cursor_icon(match update.cursor {
                CursorHint::Crosshair => CursorIcon::Crosshair,
                CursorHint::Grab => CursorIcon::Grab,
                CursorHint::Grabbing => CursorIcon::Grabbing,
            });
        }

        let mut surface = PainterSurface {
            painter: &painter,
            origin: rect.min,
        };
        self.pipeline.draw_position_view(&mut surface, &self.store);
    }

    /// A non-interactive derived-quantity canvas.
    fn derived_canvas(
        &mut self,
        ui: &mut egui::Ui,
        draw: fn(&RenderPipeline, &mut dyn DrawSurface, &SampleStore),
    ) {
        let layout = *self.pipeline.layout();
        let (response, painter) = ui.allocate_painter(
            egui::vec2(layout.canvas_width, layout.derived_height),
            Sense::hover(),
        );
        let mut surface = PainterSurface {
            painter: &painter,
            origin: response.rect.min,
        };
        draw(&self.pipeline, &mut surface, &self.store);
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Kinematics Lab");
        ui.label("Click to place the selected point, drag a point to move it.");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for slot in 0..SLOT_COUNT {
                let label = format!("t{}", slot + 1);
                if ui
                    .selectable_label(self.store.selected() == slot, label)
                    .clicked()
                {
                    self.controller.on_select_slot(&mut self.store, slot);
                }
            }
        });
        ui.label(format!(
            "Selected time: {}s",
            format_time(self.store.time(self.store.selected()))
        ));
        if let Some(grid) = self.readout {
            ui.label(format!("Position: ({}, {}) meters", grid.x, grid.y));
        }

        ui.add_space(8.0);
        ui.label("Time values (s):");
        for slot in 0..SLOT_COUNT {
            ui.horizontal(|ui| {
                ui.label(format!("t{}", slot + 1));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.time_edits[slot]).desired_width(60.0),
                );
                let committed = response.lost_focus()
                    || (response.has_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
                if committed {
                    let text = self.time_edits[slot].clone();
                    if self
                        .controller
                        .on_time_edit(&mut self.store, slot, &text)
                    {
                        self.refresh_time_edits();
                    }
                }
            });
        }

        ui.add_space(12.0);
        self.legends(ui);
    }

    fn legends(&self, ui: &mut egui::Ui) {
        legend_section(ui, "Positions", |ui| {
            for slot in 0..SLOT_COUNT {
                legend_entry(
                    ui,
                    colors::POSITION_COLORS[slot],
                    &format!("Position at time t{}", slot + 1),
                );
            }
        });
        legend_section(ui, "Displacement r", |ui| {
            for slot in 0..SLOT_COUNT {
                legend_entry(
                    ui,
                    colors::POSITION_COLORS[slot],
                    &format!("r{}: from origin to position {}", slot + 1, slot + 1),
                );
            }
        });
        legend_section(ui, "Changes in displacement Δr", |ui| {
            for pair in 0..SLOT_COUNT - 1 {
                legend_entry(
                    ui,
                    colors::DELTA_COLORS[pair],
                    &format!("Δr{}{}: change from {} to {}", pair + 1, pair + 2, pair + 1, pair + 2),
                );
            }
        });
        legend_section(ui, "Velocity v = Δx/Δt", |ui| {
            for pair in 0..SLOT_COUNT - 1 {
                legend_entry(
                    ui,
                    colors::VELOCITY_COLORS[pair],
                    &format!("v{}{}: velocity from t{} to t{}", pair + 1, pair + 2, pair + 1, pair + 2),
                );
            }
        });
        legend_section(ui, "Acceleration a = Δv/Δt", |ui| {
            for triple in 0..SLOT_COUNT - 2 {
                legend_entry(
                    ui,
                    colors::ACCELERATION_COLORS[triple],
                    &format!(
                        "a{}{}{}: acceleration from t{} to t{}",
                        triple + 1,
                        triple + 2,
                        triple + 3,
                        triple + 1,
                        triple + 3
                    ),
                );
            }
        });
    }
}

fn legend_section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    egui::CollapsingHeader::new(title)
        .default_open(false)
        .show(ui, body);
}

fn legend_entry(ui: &mut egui::Ui, color: Color32, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("\u{25cf}").color(color));
        ui.label(text);
    });
}

/// Trim a trailing `.0` so whole seconds read like the inputs they came from.
fn format_time(t: f64) -> String {
    if t == t.trunc() {
        format!("{}", t as i64)
    } else {
        format!("{t}")
    }
}

impl eframe::App for KinelabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.controls(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                ui.strong("Position");
                self.position_canvas(ui);
                ui.add_space(10.0);
                self.derived_canvas(ui, RenderPipeline::draw_displacement_view);
                ui.add_space(10.0);
                self.derived_canvas(ui, RenderPipeline::draw_delta_view);
                ui.add_space(10.0);
                self.derived_canvas(ui, RenderPipeline::draw_velocity_view);
                ui.add_space(10.0);
                self.derived_canvas(ui, RenderPipeline::draw_acceleration_view);
            });
        });
    }
}
