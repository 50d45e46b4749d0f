//! Sprite sizing
//!
//! Sprite sizes are never stored; they are derived each frame from the
//! container (play area) size, the source image aspect ratio, and the squish
//! state. Every size is at least 1x1 pixel.

use glam::IVec2;

use crate::consts::{SCALE_FACTOR, SQUISH_FACTOR};

/// Which axes of the player are squished this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Squish {
    pub x: bool,
    pub y: bool,
}

impl Squish {
    pub const NONE: Squish = Squish { x: false, y: false };

    /// Horizontal scale factor
    #[inline]
    pub fn factor_x(&self) -> f32 {
        if self.x { SQUISH_FACTOR } else { 1.0 }
    }

    /// Vertical scale factor
    #[inline]
    pub fn factor_y(&self) -> f32 {
        if self.y { SQUISH_FACTOR } else { 1.0 }
    }
}

/// Width over height of an image; invalid values fall back to square
pub fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

/// Unsquished sprite size for a container
pub fn base_size(container_w: i32, container_h: i32, aspect: f32) -> IVec2 {
    let aspect = sanitize_aspect(aspect);
    let shorter = container_w.min(container_h).max(0) as f32;
    let w = ((shorter * SCALE_FACTOR).floor() as i32).max(1);
    let h = ((w as f32 / aspect).floor() as i32).max(1);
    IVec2::new(w, h)
}

/// Sprite size with independent horizontal and vertical scale factors
pub fn scaled_size(container_w: i32, container_h: i32, aspect: f32, sx: f32, sy: f32) -> IVec2 {
    let base = base_size(container_w, container_h, aspect);
    let w = ((base.x as f32 * sx).floor() as i32).max(1);
    let h = ((base.y as f32 * sy).floor() as i32).max(1);
    IVec2::new(w, h)
}

/// Sprite size for a squish state
pub fn squished_size(container_w: i32, container_h: i32, aspect: f32, squish: Squish) -> IVec2 {
    scaled_size(container_w, container_h, aspect, squish.factor_x(), squish.factor_y())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_size_uses_shorter_side() {
        // 10% of 600, square image
        assert_eq!(base_size(800, 600, 1.0), IVec2::new(60, 60));
        // Wide image is shorter than it is wide
        assert_eq!(base_size(800, 600, 2.0), IVec2::new(60, 30));
    }

    #[test]
    fn test_squish_halves_contacted_axis() {
        let size = squished_size(800, 600, 1.0, Squish { x: true, y: false });
        assert_eq!(size, IVec2::new(30, 60));
    }

    #[test]
    fn test_tiny_container_clamps_to_one_pixel() {
        assert_eq!(scaled_size(5, 600, 1.0, 1.0, 1.0), IVec2::new(1, 1));
        assert_eq!(scaled_size(5, 600, 1.0, 0.5, 0.5), IVec2::new(1, 1));
        assert_eq!(scaled_size(0, 0, 1.0, 1.0, 1.0), IVec2::new(1, 1));
    }

    #[test]
    fn test_invalid_aspect_is_square() {
        assert_eq!(base_size(800, 600, 0.0), base_size(800, 600, 1.0));
        assert_eq!(base_size(800, 600, f32::NAN), base_size(800, 600, 1.0));
    }

    proptest! {
        #[test]
        fn scaled_size_is_at_least_one_pixel(
            w in 1i32..5000,
            h in 1i32..5000,
            aspect in 0.01f32..100.0,
            sx in 0.001f32..2.0,
            sy in 0.001f32..2.0,
        ) {
            let size = scaled_size(w, h, aspect, sx, sy);
            prop_assert!(size.x >= 1);
            prop_assert!(size.y >= 1);
        }
    }
}
