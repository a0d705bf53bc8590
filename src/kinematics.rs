//! The derivative chain: displacement, change-in-displacement, velocity and
//! acceleration over the four timestamped samples.
//!
//! All functions are pure and stateless. A quantity whose inputs are missing
//! (an unplaced position) or degenerate (a zero elapsed time) is `None`, and
//! the render pipeline simply skips it; no NaN or infinity ever escapes.
//!
//! Slots are 0-based here; slot `k` is displayed as t(k+1). Pair `j` relates
//! slots `j` and `j+1`, triple `j` relates slots `j`, `j+1`, `j+2`.

use crate::vec2::Vec2;

pub const SLOT_COUNT: usize = 4;
pub const PAIR_COUNT: usize = SLOT_COUNT - 1;
pub const TRIPLE_COUNT: usize = SLOT_COUNT - 2;

/// Placed positions per slot; `None` until the user places the point.
pub type Positions = [Option<Vec2>; SLOT_COUNT];
/// The four time instants, kept sorted ascending by the sample store.
pub type Times = [f64; SLOT_COUNT];

/// Displacement is measured from a fixed origin, so it is the position
/// itself, unmodified.
pub fn displacement(positions: &Positions, slot: usize) -> Option<Vec2> {
    positions[slot]
}

/// Change in displacement between consecutive samples: `p[j+1] - p[j]`.
/// Independent of time.
pub fn delta_displacement(positions: &Positions, pair: usize) -> Option<Vec2> {
    let from = positions[pair]?;
    let to = positions[pair + 1]?;
    Some(to - from)
}

/// Elapsed time for pair `j`.
pub fn pair_delta_t(times: &Times, pair: usize) -> f64 {
    times[pair + 1] - times[pair]
}

/// Average velocity over pair `j`: positional delta divided by elapsed time.
/// Undefined for a zero or negative elapsed time.
pub fn velocity(positions: &Positions, times: &Times, pair: usize) -> Option<Vec2> {
    let delta = delta_displacement(positions, pair)?;
    let dt = pair_delta_t(times, pair);
    if dt <= 0.0 {
        return None;
    }
    Some(delta / dt)
}

/// The time instant a pair velocity is associated with: the midpoint of its
/// bracketing interval.
pub fn midpoint_time(times: &Times, pair: usize) -> f64 {
    times[pair] + pair_delta_t(times, pair) / 2.0
}

/// Average acceleration over triple `j`: the change between the two adjacent
/// pair velocities divided by the spacing of their midpoint times.
///
/// Each triple is computed independently; with four samples both triples
/// (slots 0-1-2 and 1-2-3) can be defined at once.
pub fn acceleration(positions: &Positions, times: &Times, triple: usize) -> Option<Vec2> {
    let v1 = velocity(positions, times, triple)?;
    let v2 = velocity(positions, times, triple + 1)?;
    let dt = midpoint_time(times, triple + 1) - midpoint_time(times, triple);
    if dt <= 0.0 {
        return None;
    }
    Some((v2 - v1) / dt)
}
