//! Sticky note lifecycle driven by the gesture stream.

use crate::gesture::{CursorPosition, GestureKind, GestureSnapshot, TransitionWatcher};
use crate::notes::model::{
    Note, NoteId, NOTE_HEIGHT, NOTE_PALETTE, NOTE_WIDTH, PLACEHOLDER_CONTENT,
};
use crate::viewport::Viewport;
use rand::Rng;

/// A pinch released in under this many milliseconds creates a note.
/// Longer pinches are treated as a held gesture and create nothing.
pub const QUICK_PINCH_MS: u64 = 500;

#[derive(Debug, Clone, Copy)]
struct PendingPinch {
    started_ms: u64,
    position: (f32, f32),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    note: NoteId,
    /// Cursor-to-origin offset captured at grab time and held constant.
    offset: (f32, f32),
}

#[derive(Debug, Default)]
pub struct NoteBoard {
    notes: Vec<Note>,
    next_id: u64,
    pending_pinch: Option<PendingPinch>,
    drag: Option<Drag>,
    transitions: TransitionWatcher,
}

impl NoteBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one published gesture frame.
    ///
    /// Order matters and mirrors the interaction design: pinch press and
    /// release first (note creation), then fist grab/release, then the
    /// per-frame drag reposition.
    pub fn handle_frame(
        &mut self,
        snapshot: &GestureSnapshot,
        cursor: &CursorPosition,
        viewport: Viewport,
        at_ms: u64,
    ) {
        let screen = viewport.to_screen((cursor.smooth_x, cursor.smooth_y));
        let transition = self.transitions.observe(snapshot);

        // Arm on the first frame a pinch episode turns stable. The
        // published category flips to pinch a few frames before stability
        // does, so this is deliberately not an edge check.
        if transition.current == GestureKind::Pinch
            && snapshot.is_stable
            && self.pending_pinch.is_none()
        {
            self.pending_pinch = Some(PendingPinch {
                started_ms: at_ms,
                position: screen,
            });
        }

        if transition.exited == Some(GestureKind::Pinch) {
            if let Some(pending) = self.pending_pinch.take() {
                if self.drag.is_none() && at_ms.saturating_sub(pending.started_ms) < QUICK_PINCH_MS
                {
                    self.create_note(pending.position, viewport);
                }
            }
        }

        if transition.current == GestureKind::Fist {
            // Grab requires stability; holding an existing grab does not.
            if self.drag.is_none() && snapshot.is_stable {
                if let Some(note) = self.note_at(screen) {
                    self.drag = Some(Drag {
                        note: note.id,
                        offset: (screen.0 - note.position.0, screen.1 - note.position.1),
                    });
                }
            }
        } else if self.drag.is_some() {
            // Release is immediate, not debounced, so a note never sticks
            // to the cursor across an ambiguous fist-to-open transition.
            self.drag = None;
        }

        if let Some(drag) = self.drag {
            let target = (screen.0 - drag.offset.0, screen.1 - drag.offset.1);
            let clamped = viewport.clamp_rect(target, NOTE_WIDTH, NOTE_HEIGHT);
            if let Some(note) = self.notes.iter_mut().find(|n| n.id == drag.note) {
                note.position = clamped;
            }
        }
    }

    /// Notes in creation order; later entries render on top.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn dragged_note(&self) -> Option<NoteId> {
        self.drag.map(|d| d.note)
    }

    /// Replace a note's text. No-op when the id is gone.
    pub fn update_content(&mut self, id: NoteId, content: impl Into<String>) {
        if let Some(note) = self.notes.iter_mut().find(|n| n.id == id) {
            note.content = content.into();
        }
    }

    /// Remove a note. No-op when the id is gone.
    pub fn delete(&mut self, id: NoteId) {
        self.notes.retain(|n| n.id != id);
        if self.drag.map(|d| d.note) == Some(id) {
            self.drag = None;
        }
    }

    /// Drop in-flight interaction state (pending pinch, active drag) while
    /// keeping the notes themselves. Used when tracking stops.
    pub fn cancel_interaction(&mut self) {
        self.pending_pinch = None;
        self.drag = None;
        self.transitions.reset();
    }

    fn create_note(&mut self, (x, y): (f32, f32), viewport: Viewport) {
        self.next_id += 1;
        let id = NoteId(self.next_id);
        let color = NOTE_PALETTE[rand::thread_rng().gen_range(0..NOTE_PALETTE.len())];
        // Center the note on the pinch position, then clamp the footprint
        // onto the viewport.
        let centered = (x - NOTE_WIDTH / 2.0, y - NOTE_HEIGHT / 2.0);
        let position = viewport.clamp_rect(centered, NOTE_WIDTH, NOTE_HEIGHT);
        tracing::debug!(id = id.0, x = position.0, y = position.1, "note created");
        self.notes.push(Note {
            id,
            content: PLACEHOLDER_CONTENT.to_string(),
            position,
            color,
        });
    }

    /// Hit test top-most first: the most recently created note wins when
    /// notes overlap.
    fn note_at(&self, point: (f32, f32)) -> Option<&Note> {
        self.notes.iter().rev().find(|n| n.contains(point))
    }
}
