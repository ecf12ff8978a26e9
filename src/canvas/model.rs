use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0x3b, 0x82, 0xf6),
            width: 3.0,
        }
    }
}

/// A sampled cursor position on a stroke, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub x: f32,
    pub y: f32,
    pub at_ms: u64,
}

/// One freehand path. Mutable only while in progress; committed strokes
/// are never touched again.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub points: Vec<StrokePoint>,
    pub style: StrokeStyle,
}

impl Stroke {
    pub fn starting_at(point: StrokePoint, style: StrokeStyle) -> Self {
        Self {
            points: vec![point],
            style,
        }
    }
}
