use crate::constants::MIN_VIEWPORT_PX;
use glam::Vec2;

/// Output surface size in CSS/logical pixels plus the cached half extents
/// used to normalize pointer positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let mut vp = Self {
            width: 0.0,
            height: 0.0,
            half_width: 0.0,
            half_height: 0.0,
        };
        vp.resize(width, height);
        vp
    }

    /// Degenerate sizes are clamped to one pixel so later divisions stay finite.
    pub fn resize(&mut self, width: f32, height: f32) {
        let w = clamp_extent(width);
        let h = clamp_extent(height);
        if w != width || h != height {
            log::warn!(
                "viewport {}x{} clamped to {}x{}",
                width,
                height,
                w,
                h
            );
        }
        self.width = w;
        self.height = h;
        self.half_width = w * 0.5;
        self.half_height = h * 0.5;
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Map a pixel position to [-1, 1] around the center, +Y pointing up.
    #[inline]
    pub fn normalize_pointer(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x - self.half_width) / self.half_width,
            (self.half_height - y) / self.half_height,
        )
    }
}

#[inline]
fn clamp_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(MIN_VIEWPORT_PX)
    } else {
        MIN_VIEWPORT_PX
    }
}
