use gesture_board::landmarks::{HandFrame, Landmark, FINGERTIPS, LANDMARK_COUNT, WRIST};

/// Open hand: fingertips well away from the wrist, thumb and index apart.
pub fn open_frame() -> HandFrame {
    let mut lm = [Landmark::default(); LANDMARK_COUNT];
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        lm[tip] = Landmark::new(0.3 + 0.1 * i as f32, 0.5, 0.0);
    }
    lm[WRIST] = Landmark::new(0.0, 0.0, 0.0);
    HandFrame::new(lm.to_vec(), "Right")
}

/// Pinch at a given index-fingertip position.
pub fn pinch_frame_at(x: f32, y: f32) -> HandFrame {
    let mut frame = open_frame();
    frame.landmarks[4] = Landmark::new(x - 0.02, y, 0.0);
    frame.landmarks[8] = Landmark::new(x, y, 0.0);
    frame
}

pub fn pinch_frame() -> HandFrame {
    pinch_frame_at(0.5, 0.5)
}

/// Fist: all fingertips near the wrist but thumb and index kept apart so
/// the pinch test does not fire first.
pub fn fist_frame_at(x: f32, y: f32) -> HandFrame {
    let mut lm = [Landmark::default(); LANDMARK_COUNT];
    lm[WRIST] = Landmark::new(x, y, 0.0);
    for (i, &tip) in FINGERTIPS.iter().enumerate() {
        lm[tip] = Landmark::new(x + 0.02 * i as f32, y + 0.05, 0.0);
    }
    // Cursor follows the index fingertip.
    lm[8] = Landmark::new(x, y, 0.0);
    lm[4] = Landmark::new(x + 0.08, y + 0.05, 0.0);
    HandFrame::new(lm.to_vec(), "Right")
}
