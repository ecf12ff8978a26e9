mod common;

use common::{fist_frame_at, open_frame, pinch_frame};
use gesture_board::gesture::{GestureEngine, GestureKind, SMOOTHING_FACTOR, STABILITY_FRAMES};

#[test]
fn classification_confidences_match_contract() {
    let mut engine = GestureEngine::new();

    engine.feed_frame(Some(&pinch_frame()));
    assert_eq!(engine.snapshot().kind, GestureKind::Pinch);
    assert!((engine.snapshot().confidence - 0.9).abs() < f32::EPSILON);

    let mut engine = GestureEngine::new();
    engine.feed_frame(Some(&fist_frame_at(0.5, 0.5)));
    assert_eq!(engine.snapshot().kind, GestureKind::Fist);
    assert!((engine.snapshot().confidence - 0.85).abs() < f32::EPSILON);

    let mut engine = GestureEngine::new();
    engine.feed_frame(Some(&open_frame()));
    assert_eq!(engine.snapshot().kind, GestureKind::Open);
    assert!((engine.snapshot().confidence - 0.8).abs() < f32::EPSILON);
}

#[test]
fn stable_pinch_then_hand_loss_reports_none_immediately() {
    let mut engine = GestureEngine::new();

    // Six pinch frames: stable from the fifth onward.
    for i in 0..6 {
        engine.feed_frame(Some(&pinch_frame()));
        if i >= STABILITY_FRAMES - 1 {
            assert!(engine.snapshot().is_stable, "frame {i}");
        }
    }
    assert_eq!(engine.snapshot().kind, GestureKind::Pinch);

    // Hand disappears: no stability grace period.
    engine.feed_frame(None);
    assert_eq!(engine.snapshot().kind, GestureKind::None);
    assert!(!engine.snapshot().is_stable);

    // History was cleared, so a returning gesture needs a full window.
    for i in 0..STABILITY_FRAMES {
        engine.feed_frame(Some(&pinch_frame()));
        assert_eq!(engine.snapshot().is_stable, i == STABILITY_FRAMES - 1);
    }
}

#[test]
fn emission_gate_shows_reversal_before_it_restabilizes() {
    let mut engine = GestureEngine::new();
    for _ in 0..STABILITY_FRAMES {
        engine.feed_frame(Some(&open_frame()));
    }
    assert_eq!(engine.snapshot().kind, GestureKind::Open);
    assert!(engine.snapshot().is_stable);

    // First pinch frame: published at once, not yet stable.
    engine.feed_frame(Some(&pinch_frame()));
    assert_eq!(engine.snapshot().kind, GestureKind::Pinch);
    assert!(!engine.snapshot().is_stable);
}

#[test]
fn matching_unstable_category_is_withheld() {
    let mut engine = GestureEngine::new();
    for _ in 0..STABILITY_FRAMES {
        engine.feed_frame(Some(&open_frame()));
    }

    // A one-frame pinch blip is published (differs from confirmed open)...
    engine.feed_frame(Some(&pinch_frame()));
    assert_eq!(engine.snapshot().kind, GestureKind::Pinch);

    // ...but the return to open matches the confirmed category and is not
    // yet stable, so the published snapshot keeps flickering pinch.
    engine.feed_frame(Some(&open_frame()));
    assert_eq!(engine.snapshot().kind, GestureKind::Pinch);

    // Five opens later unanimity is back and open is republished stable.
    for _ in 0..STABILITY_FRAMES {
        engine.feed_frame(Some(&open_frame()));
    }
    assert_eq!(engine.snapshot().kind, GestureKind::Open);
    assert!(engine.snapshot().is_stable);
}

#[test]
fn smoothing_step_is_exact() {
    let mut engine = GestureEngine::new();
    let frame = open_frame();
    let target = frame.landmarks[8];

    engine.feed_frame(Some(&frame));
    let c = engine.cursor();
    assert!((c.smooth_x - target.x * SMOOTHING_FACTOR).abs() < 1e-6);
    assert!((c.smooth_y - target.y * SMOOTHING_FACTOR).abs() < 1e-6);
    assert_eq!((c.x, c.y), (target.x, target.y));
}

#[test]
fn smoothing_is_idempotent_at_rest() {
    let mut engine = GestureEngine::new();
    let frame = common::pinch_frame_at(0.0, 0.0);

    // Target equals the smoothed origin, so the cursor must not move.
    engine.feed_frame(Some(&frame));
    let c = *engine.cursor();
    assert_eq!((c.smooth_x, c.smooth_y), (0.0, 0.0));
    engine.feed_frame(Some(&frame));
    assert_eq!(engine.cursor().smooth_x, 0.0);
}
