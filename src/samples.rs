//! Owned application state: the four timestamped samples and the selection.
//!
//! The store is the single owner of sample data; it is mutated only through
//! the interaction controller (pointer input) and the time-input fields.

use crate::kinematics::{Positions, Times, SLOT_COUNT};
use crate::vec2::Vec2;

/// Holds the four position slots, the sorted time series and the selected
/// slot.
///
/// Invariant: `times` is non-decreasing after every mutation. A change to any
/// single time value re-sorts all four and writes the sorted result back to
/// the slots, so the time values reorder independently of the position slots
/// they annotate: slot `k` always uses `times[k]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStore {
    positions: Positions,
    times: Times,
    selected: usize,
}

impl Default for SampleStore {
    /// The demo layout shown on a fresh load.
    fn default() -> Self {
        Self {
            positions: [
                Some(Vec2::new(1.0, 0.0)),
                Some(Vec2::new(1.0, 1.0)),
                Some(Vec2::new(2.0, 2.0)),
                Some(Vec2::new(3.0, 1.0)),
            ],
            times: [1.0, 2.0, 3.0, 4.0],
            selected: 0,
        }
    }
}

impl SampleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with no positions placed yet (default times and selection).
    pub fn empty() -> Self {
        Self {
            positions: [None; SLOT_COUNT],
            ..Self::default()
        }
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn position(&self, slot: usize) -> Option<Vec2> {
        self.positions[slot]
    }

    /// Overwrite a slot's position unconditionally.
    pub fn set_position(&mut self, slot: usize, position: Vec2) {
        debug_assert!(slot < SLOT_COUNT);
        self.positions[slot] = Some(position);
    }

    pub fn times(&self) -> &Times {
        &self.times
    }

    pub fn time(&self, slot: usize) -> f64 {
        self.times[slot]
    }

    /// Assign one time value, then re-sort the whole series ascending and
    /// write it back to all four slots. Mutating one field therefore is a
    /// global side effect on the series.
    pub fn set_time(&mut self, slot: usize, value: f64) {
        debug_assert!(slot < SLOT_COUNT);
        self.times[slot] = value;
        self.times.sort_by(f64::total_cmp);
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Idempotent; always succeeds for a valid slot.
    pub fn select(&mut self, slot: usize) {
        debug_assert!(slot < SLOT_COUNT);
        self.selected = slot;
    }
}
