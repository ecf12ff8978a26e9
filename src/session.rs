//! One frame-driven interaction session: gesture engine plus both
//! interaction controllers, routed by the active board mode.

use crate::canvas::{DrawingCanvas, StrokeStyle};
use crate::gesture::GestureEngine;
use crate::landmarks::HandFrame;
use crate::notes::NoteBoard;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardMode {
    #[default]
    Notes,
    Drawing,
}

#[derive(Debug)]
pub struct Session {
    engine: GestureEngine,
    notes: NoteBoard,
    canvas: DrawingCanvas,
    mode: BoardMode,
    viewport: Viewport,
}

impl Session {
    pub fn new(viewport: Viewport, stroke_style: StrokeStyle) -> Self {
        Self {
            engine: GestureEngine::new(),
            notes: NoteBoard::new(),
            canvas: DrawingCanvas::new(stroke_style),
            mode: BoardMode::default(),
            viewport,
        }
    }

    /// Process one video frame to completion. The snapshot and cursor are
    /// re-published every frame, including no-hand frames; only the active
    /// mode's controller consumes them.
    pub fn tick(&mut self, hand: Option<&HandFrame>, at_ms: u64) {
        self.engine.feed_frame(hand);
        let snapshot = *self.engine.snapshot();
        let cursor = *self.engine.cursor();
        match self.mode {
            BoardMode::Notes => self
                .notes
                .handle_frame(&snapshot, &cursor, self.viewport, at_ms),
            BoardMode::Drawing => self
                .canvas
                .handle_frame(&snapshot, &cursor, self.viewport, at_ms),
        }
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    /// Switch boards. Both controllers keep their state, so returning to a
    /// mode finds its notes or strokes where they were left.
    pub fn set_mode(&mut self, mode: BoardMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "board mode switched");
            self.mode = mode;
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Apply a resize; takes effect on the next tick.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn notes(&self) -> &NoteBoard {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut NoteBoard {
        &mut self.notes
    }

    pub fn canvas(&self) -> &DrawingCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut DrawingCanvas {
        &mut self.canvas
    }

    /// Discard everything derived from the frame stream (gesture snapshot,
    /// cursor, pending pinch, active drag, in-progress stroke) while
    /// keeping committed notes and strokes. A restart after this begins
    /// from a clean idle state.
    pub fn reset_transient(&mut self) {
        self.engine.reset();
        self.notes.cancel_interaction();
        self.canvas.cancel_stroke();
    }
}
