//! Per-frame gesture classification and cursor smoothing.
//!
//! The engine is a pure state machine: feed it one (possibly absent) hand
//! frame per video frame and read back the published [`GestureSnapshot`]
//! and [`CursorPosition`]. All thresholds are fixed; they were tuned
//! against the MediaPipe hand landmarker and changing any of them changes
//! observable behavior.

use crate::landmarks::{HandFrame, Landmark, FINGERTIPS, INDEX_TIP, THUMB_TIP, WRIST};
use std::collections::VecDeque;

/// Thumb tip to index tip distance below which the hand is a pinch.
pub const PINCH_THRESHOLD: f32 = 0.05;
/// Mean wrist-to-fingertip distance below which the hand is a fist.
pub const FIST_THRESHOLD: f32 = 0.15;
/// Exponential smoothing factor for the cursor.
pub const SMOOTHING_FACTOR: f32 = 0.3;
/// Consecutive identical classifications required for stability.
pub const STABILITY_FRAMES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureKind {
    #[default]
    None,
    Open,
    Pinch,
    Fist,
}

/// The publicly visible gesture for one frame. Compared by value; never
/// mutated after emission.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSnapshot {
    pub kind: GestureKind,
    pub confidence: f32,
    /// Raw index fingertip position at the time the snapshot was published.
    pub raw_position: (f32, f32),
    pub is_stable: bool,
}

/// Cursor target and its exponentially smoothed trail, all normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f32,
    pub y: f32,
    pub smooth_x: f32,
    pub smooth_y: f32,
}

impl CursorPosition {
    /// Retarget the cursor and advance the smoothed position one step
    /// toward it. Converges monotonically and never overshoots.
    fn approach(&mut self, tx: f32, ty: f32) {
        self.x = tx;
        self.y = ty;
        self.smooth_x += (tx - self.smooth_x) * SMOOTHING_FACTOR;
        self.smooth_y += (ty - self.smooth_y) * SMOOTHING_FACTOR;
    }
}

#[derive(Debug, Default)]
pub struct GestureEngine {
    history: VecDeque<GestureKind>,
    /// Last category that was published while stable. The emission gate
    /// compares new classifications against this, not against the raw
    /// previous frame.
    last_confirmed: GestureKind,
    snapshot: GestureSnapshot,
    cursor: CursorPosition,
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one video frame. `None` (or a frame with fewer than 21
    /// landmarks) counts as no hand: the published gesture drops to
    /// `None` immediately, the debounce window resets and the cursor
    /// decays toward the origin instead of snapping there.
    pub fn feed_frame(&mut self, frame: Option<&HandFrame>) {
        let Some(frame) = frame.filter(|f| f.is_complete()) else {
            self.snapshot = GestureSnapshot::default();
            self.cursor.approach(0.0, 0.0);
            self.history.clear();
            return;
        };

        let tip = frame.landmarks[INDEX_TIP];
        self.cursor.approach(tip.x, tip.y);

        let (kind, confidence) = classify(&frame.landmarks);
        let is_stable = self.push_history(kind);

        // Publish when stable, or as soon as the classification departs
        // from the last confirmed category so an intended change is seen
        // without a five frame lag. A not-yet-stable category can be
        // visible for a single frame before reverting; that flicker is
        // part of the contract.
        if is_stable || kind != self.last_confirmed {
            self.snapshot = GestureSnapshot {
                kind,
                confidence,
                raw_position: (tip.x, tip.y),
                is_stable,
            };
            if is_stable {
                self.last_confirmed = kind;
            }
        }
    }

    pub fn snapshot(&self) -> &GestureSnapshot {
        &self.snapshot
    }

    pub fn cursor(&self) -> &CursorPosition {
        &self.cursor
    }

    /// Drop all carried state, including the smoothed cursor.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Push onto the 5-slot FIFO and report stability: full window, all
    /// entries identical. A single differing frame anywhere in the window
    /// breaks stability until five matching frames accumulate again.
    fn push_history(&mut self, kind: GestureKind) -> bool {
        self.history.push_back(kind);
        if self.history.len() > STABILITY_FRAMES {
            self.history.pop_front();
        }
        self.history.len() == STABILITY_FRAMES && self.history.iter().all(|g| *g == kind)
    }
}

/// Classify one complete landmark set. Pinch is checked before fist on
/// purpose: a pinching hand is loosely closed and would otherwise pass the
/// coarser fist test.
fn classify(landmarks: &[Landmark]) -> (GestureKind, f32) {
    if landmarks[THUMB_TIP].distance(&landmarks[INDEX_TIP]) < PINCH_THRESHOLD {
        return (GestureKind::Pinch, 0.9);
    }

    let wrist = landmarks[WRIST];
    let total: f32 = FINGERTIPS
        .iter()
        .map(|&tip| landmarks[tip].distance(&wrist))
        .sum();
    if total / (FINGERTIPS.len() as f32) < FIST_THRESHOLD {
        return (GestureKind::Fist, 0.85);
    }

    (GestureKind::Open, 0.8)
}
