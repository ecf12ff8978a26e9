//! Edge detection over the published gesture stream.
//!
//! Both interaction controllers react to gesture *transitions* rather than
//! the current category alone. Each controller owns its own watcher so the
//! "previous" value is explicit carried state, not an accident of call
//! ordering.

use crate::gesture::engine::{GestureKind, GestureSnapshot};

/// What changed between the previous published snapshot and this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTransition {
    pub current: GestureKind,
    pub is_stable: bool,
    /// Set when the published category changed this frame.
    pub entered: Option<GestureKind>,
    /// The category that was left, when one was.
    pub exited: Option<GestureKind>,
}

#[derive(Debug, Default)]
pub struct TransitionWatcher {
    previous: GestureKind,
}

impl TransitionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, snapshot: &GestureSnapshot) -> FrameTransition {
        let changed = snapshot.kind != self.previous;
        let transition = FrameTransition {
            current: snapshot.kind,
            is_stable: snapshot.is_stable,
            entered: changed.then_some(snapshot.kind),
            exited: changed.then_some(self.previous),
        };
        self.previous = snapshot.kind;
        transition
    }

    pub fn reset(&mut self) {
        self.previous = GestureKind::None;
    }
}
