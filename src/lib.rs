//! Kinelab crate root: re-exports and module wiring.
//!
//! Kinelab is an interactive pedagogical tool built on egui/eframe: the user
//! places up to four timestamped points on a grid and the app visualizes the
//! calculus chain relating them — position, displacement, change in
//! displacement, velocity and acceleration.
//!
//! The implementation is split into cohesive modules:
//! - `vec2`: the 2-D vector value type
//! - `transform`: grid ↔ pixel coordinate mapping
//! - `kinematics`: the pure derivative-chain functions
//! - `samples`: owned sample/selection state with the time-ordering invariant
//! - `interaction`: the Idle/Dragging pointer state machine
//! - `colors`, `config`: fixed color tables and layout constants
//! - `render`: the per-frame pipeline over an injectable draw surface
//! - `app`: the eframe application tying it all together

pub mod app;
pub mod colors;
pub mod config;
pub mod interaction;
pub mod kinematics;
pub mod render;
pub mod samples;
pub mod transform;
pub mod vec2;

// Public re-exports for a compact external API
pub use app::KinelabApp;
pub use config::ViewLayout;
pub use interaction::{CursorHint, InteractionController, Pointer, Update, HIT_RADIUS};
pub use render::{DrawSurface, RenderPipeline};
pub use samples::SampleStore;
pub use transform::GridTransform;
pub use vec2::Vec2;
