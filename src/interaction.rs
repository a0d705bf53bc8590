//! Pointer-driven editing state machine.
//!
//! Raw pointer and form-input events are translated here into sample-store
//! mutations. The controller is Idle or Dragging(slot); events are plain
//! enums so the whole machine can be driven headless in tests, without any
//! drawing surface behind it.

use egui::Pos2;
use log::debug;

use crate::kinematics::SLOT_COUNT;
use crate::samples::SampleStore;
use crate::transform::GridTransform;
use crate::vec2::Vec2;

/// Hit-test radius around a placed marker, in surface pixels.
pub const HIT_RADIUS: f32 = 10.0;

/// A pointer event in surface-local coordinates of the primary view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    Down(Pos2),
    Moved(Pos2),
    Up,
    /// The pointer left the canvas.
    Left,
}

/// Cursor hint for the primary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Crosshair,
    Grab,
    Grabbing,
}

/// Outcome of feeding one pointer event through the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Update {
    /// A mutation happened; repaint all views.
    pub redraw: bool,
    pub cursor: CursorHint,
    /// Live grid-coordinate readout under the pointer, when known.
    pub readout: Option<Vec2>,
}

/// Find the first placed marker within [`HIT_RADIUS`] of `p`, in slot order.
pub fn hit_test(
    store: &SampleStore,
    transform: &GridTransform,
    origin_y: f32,
    p: Pos2,
) -> Option<usize> {
    (0..SLOT_COUNT).find(|&slot| {
        store
            .position(slot)
            .is_some_and(|pos| transform.to_surface(pos, origin_y).distance(p) <= HIT_RADIUS)
    })
}

/// State machine translating input events into [`SampleStore`] mutations.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    drag: Option<usize>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot currently being dragged, if any.
    pub fn dragging(&self) -> Option<usize> {
        self.drag
    }

    pub fn on_pointer(
        &mut self,
        store: &mut SampleStore,
        transform: &GridTransform,
        origin_y: f32,
        event: Pointer,
    ) -> Update {
        match event {
            Pointer::Down(p) => {
                let grid = transform.to_grid(p, origin_y);
                if let Some(slot) = hit_test(store, transform, origin_y, p) {
                    // Grab the marker; dragging implies selecting it.
                    self.drag = Some(slot);
                    store.select(slot);
                    debug!("drag start on slot {slot}");
                    Update {
                        redraw: true,
                        cursor: CursorHint::Grabbing,
                        readout: Some(grid),
                    }
                } else {
                    // A miss places (or overwrites) the selected sample;
                    // the selection itself is unchanged.
                    let slot = store.selected();
                    store.set_position(slot, grid);
                    debug!("placed slot {slot} at ({}, {})", grid.x, grid.y);
                    Update {
                        redraw: true,
                        cursor: CursorHint::Crosshair,
                        readout: Some(grid),
                    }
                }
            }
            Pointer::Moved(p) => {
                let grid = transform.to_grid(p, origin_y);
                if let Some(slot) = self.drag {
                    store.set_position(slot, grid);
                    Update {
                        redraw: true,
                        cursor: CursorHint::Grabbing,
                        readout: Some(grid),
                    }
                } else {
                    let cursor = if hit_test(store, transform, origin_y, p).is_some() {
                        CursorHint::Grab
                    } else {
                        CursorHint::Crosshair
                    };
                    Update {
                        redraw: false,
                        cursor,
                        readout: Some(grid),
                    }
                }
            }
            // Releasing (or leaving the canvas) ends the drag without a
            // further position commit.
            Pointer::Up | Pointer::Left => {
                if let Some(slot) = self.drag.take() {
                    debug!("drag end on slot {slot}");
                }
                Update {
                    redraw: false,
                    cursor: CursorHint::Crosshair,
                    readout: None,
                }
            }
        }
    }

    /// Discrete selector button for slot `k`. Independent of drag state.
    /// Returns `true` when a redraw is due.
    pub fn on_select_slot(&mut self, store: &mut SampleStore, slot: usize) -> bool {
        store.select(slot);
        true
    }

    /// A time-input edit. Non-numeric, non-finite and negative values are
    /// rejected silently, leaving the series untouched. Returns `true` when
    /// the edit was applied.
    pub fn on_time_edit(&mut self, store: &mut SampleStore, slot: usize, text: &str) -> bool {
        let Ok(value) = text.trim().parse::<f64>() else {
            return false;
        };
        if !value.is_finite() || value < 0.0 {
            return false;
        }
        store.set_time(slot, value);
        debug!("time slot {slot} set to {value}");
        true
    }
}
