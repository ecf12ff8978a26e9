pub mod controller;
pub mod model;

pub use controller::{DrawingCanvas, MIN_STROKE_POINTS};
pub use model::{Color, Stroke, StrokePoint, StrokeStyle};
