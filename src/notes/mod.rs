pub mod board;
pub mod model;

pub use board::{NoteBoard, QUICK_PINCH_MS};
pub use model::{Note, NoteId, NOTE_HEIGHT, NOTE_PALETTE, NOTE_WIDTH, PLACEHOLDER_CONTENT};
