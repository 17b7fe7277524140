use glam::Vec2;

/// Pointer state: `target` follows raw input, `position` eases toward it.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct MouseState {
    pub position: Vec2,
    pub target: Vec2,
}

impl MouseState {
    #[inline]
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// One exponential smoothing step: cover `factor` of the remaining distance.
    #[inline]
    pub fn smooth(&mut self, factor: f32) {
        self.position.x += (self.target.x - self.position.x) * factor;
        self.position.y += (self.target.y - self.position.y) * factor;
    }
}
