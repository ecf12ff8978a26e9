//! Freehand drawing driven by the gesture stream.

use crate::canvas::model::{Stroke, StrokePoint, StrokeStyle};
use crate::gesture::{CursorPosition, GestureKind, GestureSnapshot, TransitionWatcher};
use crate::viewport::Viewport;

/// Strokes shorter than this are discarded instead of committed.
pub const MIN_STROKE_POINTS: usize = 2;

#[derive(Debug, Default)]
pub struct DrawingCanvas {
    strokes: Vec<Stroke>,
    current: Option<Stroke>,
    style: StrokeStyle,
    transitions: TransitionWatcher,
}

impl DrawingCanvas {
    pub fn new(style: StrokeStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Consume one published gesture frame.
    ///
    /// Starting a stroke requires a *stable* pinch so a single-frame blip
    /// cannot leave a stray dot, but an already running stroke is extended
    /// by any frame still reporting pinch, stable or not. Without that
    /// asymmetry a transient unanimity loss in the debounce window would
    /// cut a real stroke in half.
    pub fn handle_frame(
        &mut self,
        snapshot: &GestureSnapshot,
        cursor: &CursorPosition,
        viewport: Viewport,
        at_ms: u64,
    ) {
        let (x, y) = viewport.to_screen((cursor.smooth_x, cursor.smooth_y));
        let transition = self.transitions.observe(snapshot);

        if transition.current == GestureKind::Pinch {
            match self.current.as_mut() {
                Some(stroke) => stroke.points.push(StrokePoint { x, y, at_ms }),
                None if snapshot.is_stable => {
                    self.current = Some(Stroke::starting_at(
                        StrokePoint { x, y, at_ms },
                        self.style,
                    ));
                }
                None => {}
            }
        } else if self.current.is_some() {
            self.finish_stroke();
        }
    }

    /// Committed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Drop everything, committed and in progress.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    /// Abandon the in-progress stroke without committing it, e.g. when
    /// tracking stops mid-draw.
    pub fn cancel_stroke(&mut self) {
        self.current = None;
        self.transitions.reset();
    }

    fn finish_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            if stroke.points.len() >= MIN_STROKE_POINTS {
                self.strokes.push(stroke);
            } else {
                tracing::debug!(points = stroke.points.len(), "discarding short stroke");
            }
        }
    }
}
