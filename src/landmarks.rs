//! Hand landmark input types.
//!
//! A landmark source (MediaPipe hand landmarker convention) delivers up to
//! 21 points per frame, normalized to `[0, 1]` in x/y with scene-relative z.

/// Number of landmarks in a complete hand frame.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Fingertip indices, thumb through pinky.
pub const FINGERTIPS: [usize; 5] = [THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// A single 3D hand landmark. x/y are normalized to the camera image,
/// z is depth relative to the wrist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to another landmark, in 3D.
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// One detected hand for one video frame. Landmarks are consumed the frame
/// they arrive and never retained by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    pub landmarks: Vec<Landmark>,
    pub handedness: String,
}

impl HandFrame {
    pub fn new(landmarks: Vec<Landmark>, handedness: impl Into<String>) -> Self {
        Self {
            landmarks,
            handedness: handedness.into(),
        }
    }

    /// A frame with fewer than 21 landmarks is treated as no hand at all.
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= LANDMARK_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean_in_three_dimensions() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.3, 0.4, 0.0);
        assert!((a.distance(&b) - 0.5).abs() < 1e-6);

        let c = Landmark::new(0.0, 0.0, 0.12);
        assert!((a.distance(&c) - 0.12).abs() < 1e-6);
    }

    #[test]
    fn short_frames_are_incomplete() {
        let frame = HandFrame::new(vec![Landmark::default(); 20], "Right");
        assert!(!frame.is_complete());

        let frame = HandFrame::new(vec![Landmark::default(); LANDMARK_COUNT], "Right");
        assert!(frame.is_complete());
    }
}
