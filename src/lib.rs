//! Hand-gesture driven sticky notes and freehand drawing.
//!
//! Turns a per-frame stream of 21-point hand landmarks into debounced
//! categorical gestures and a smoothed cursor, then drives two interaction
//! modes from gesture transitions and their timing: a short pinch creates
//! a note, a held pinch draws, a held fist drags.

pub mod canvas;
pub mod gesture;
pub mod landmarks;
pub mod logging;
pub mod notes;
pub mod session;
pub mod settings;
pub mod tracking;
pub mod viewport;

pub use session::{BoardMode, Session};
pub use tracking::{LandmarkSource, TrackingService};
pub use viewport::Viewport;
