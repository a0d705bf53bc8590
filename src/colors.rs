//! Fixed color tables for the five views.
//!
//! Colors are keyed by slot index, consecutive pair, or triple, and are never
//! computed. Acceleration coloring is consistently triple-keyed.

use egui::Color32;

/// Marker / displacement color per position slot (t1..t4).
pub const POSITION_COLORS: [Color32; 4] = [
    Color32::from_rgb(0xE5, 0x39, 0x35), // red
    Color32::from_rgb(0x43, 0xA0, 0x47), // green
    Color32::from_rgb(0x1E, 0x88, 0xE5), // blue
    Color32::from_rgb(0x8E, 0x24, 0xAA), // purple
];

/// Change-in-displacement color per consecutive pair (1-2, 2-3, 3-4).
pub const DELTA_COLORS: [Color32; 3] = [
    Color32::from_rgb(0xFF, 0x98, 0x00), // orange
    Color32::from_rgb(0x00, 0x96, 0x88), // teal
    Color32::from_rgb(0xFF, 0xEB, 0x3B), // yellow
];

/// Velocity color per consecutive pair.
pub const VELOCITY_COLORS: [Color32; 3] = [
    Color32::from_rgb(0xFB, 0x8C, 0x00), // orange
    Color32::from_rgb(0x00, 0xAC, 0xC1), // cyan
    Color32::from_rgb(0x7C, 0xB3, 0x42), // light green
];

/// Acceleration color per triple (1-2-3, 2-3-4).
pub const ACCELERATION_COLORS: [Color32; 2] = [
    Color32::from_rgb(0xFF, 0x57, 0x22), // deep orange
    Color32::from_rgb(0x9C, 0x27, 0xB0), // purple
];

pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
pub const GRID_LINE: Color32 = Color32::from_rgb(0xE0, 0xE0, 0xE0);
pub const AXIS: Color32 = Color32::from_rgb(0x99, 0x99, 0x99);
pub const LABEL: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
pub const MARKER_OUTLINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);
