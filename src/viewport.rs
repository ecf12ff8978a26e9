/// Pixel dimensions of the interaction surface. Read fresh each frame so a
/// window resize takes effect on the next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a normalized `[0, 1]` position to screen pixels.
    pub fn to_screen(&self, (nx, ny): (f32, f32)) -> (f32, f32) {
        (nx * self.width, ny * self.height)
    }

    /// Clamp the origin of a `w`×`h` rectangle so the rectangle stays fully
    /// inside the viewport. Matches `max(0, min(extent, v))`, so an
    /// oversized rectangle pins to the top-left corner.
    pub fn clamp_rect(&self, (x, y): (f32, f32), w: f32, h: f32) -> (f32, f32) {
        (
            x.min(self.width - w).max(0.0),
            y.min(self.height - h).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_rect_inside() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.clamp_rect((700.0, 500.0), 200.0, 150.0), (600.0, 450.0));
        assert_eq!(vp.clamp_rect((-20.0, -5.0), 200.0, 150.0), (0.0, 0.0));
        assert_eq!(vp.clamp_rect((10.0, 20.0), 200.0, 150.0), (10.0, 20.0));
    }

    #[test]
    fn oversized_rect_pins_to_origin() {
        let vp = Viewport::new(100.0, 100.0);
        assert_eq!(vp.clamp_rect((50.0, 50.0), 200.0, 150.0), (0.0, 0.0));
    }
}
