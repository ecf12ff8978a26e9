pub mod engine;
pub mod transition;

pub use engine::{
    CursorPosition, GestureEngine, GestureKind, GestureSnapshot, FIST_THRESHOLD, PINCH_THRESHOLD,
    SMOOTHING_FACTOR, STABILITY_FRAMES,
};
pub use transition::{FrameTransition, TransitionWatcher};
