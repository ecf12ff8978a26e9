use crate::canvas::model::Color;

/// Fixed on-screen footprint of a note, in pixels.
pub const NOTE_WIDTH: f32 = 200.0;
pub const NOTE_HEIGHT: f32 = 150.0;

/// Palette a new note's color is drawn from, uniformly at random.
pub const NOTE_PALETTE: [Color; 5] = [
    Color::rgb(0xfe, 0xf3, 0xc7),
    Color::rgb(0xfe, 0xca, 0xca),
    Color::rgb(0xdd, 0xd6, 0xfe),
    Color::rgb(0xbf, 0xdb, 0xfe),
    Color::rgb(0xbb, 0xf7, 0xd0),
];

pub const PLACEHOLDER_CONTENT: &str = "Double click to edit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    /// Top-left corner in screen pixels, always clamped to the viewport.
    pub position: (f32, f32),
    pub color: Color,
}

impl Note {
    /// Axis-aligned containment against the fixed footprint.
    pub fn contains(&self, (x, y): (f32, f32)) -> bool {
        x >= self.position.0
            && x <= self.position.0 + NOTE_WIDTH
            && y >= self.position.1
            && y <= self.position.1 + NOTE_HEIGHT
    }
}
