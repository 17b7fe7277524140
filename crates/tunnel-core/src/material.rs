//! Texture transform, fog and light description of the tunnel material.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::timeline::AnimationParams;
use glam::{Vec2, Vec3};

/// Period of a mirrored-repeat wrap in texture space.
pub const MIRROR_PERIOD: f64 = 2.0;

/// UV transform applied as `uv * repeat + offset`, sampled with a mirrored
/// repeat on both axes.
///
/// `offset.y` is the vertical scroll reduced to one mirror period; the
/// unreduced total lives in [`scroll_y`](Self::scroll_y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureTransform {
    pub offset: Vec2,
    pub repeat: Vec2,
    scroll_y: f64,
}

impl Default for TextureTransform {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            repeat: Vec2::new(TEXTURE_REPEAT_X, TEXTURE_REPEAT_Y),
            scroll_y: 0.0,
        }
    }
}

impl TextureTransform {
    /// Copy the tweened offset/repeat and advance the vertical scroll by `step`.
    pub fn update(&mut self, params: &AnimationParams, step: f32) {
        self.offset.x = params.offset_x;
        self.scroll_y += f64::from(step);
        self.offset.y = self.scroll_y.rem_euclid(MIRROR_PERIOD) as f32;
        self.repeat = Vec2::new(params.repeat_x, params.repeat_y);
    }

    /// Total vertical scroll since start.
    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Continue scrolling from `total`, as if that much had already passed.
    pub fn with_scroll_y(mut self, total: f64) -> Self {
        self.scroll_y = total;
        self.offset.y = total.rem_euclid(MIRROR_PERIOD) as f32;
        self
    }

    #[inline]
    pub fn apply(&self, uv: Vec2) -> Vec2 {
        uv * self.repeat + self.offset
    }
}

/// Linear distance fog.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Fog {
    /// Blend factor toward the fog colour at view depth `depth`.
    pub fn factor(&self, depth: f32) -> f32 {
        let span = self.far - self.near;
        if span <= 0.0 {
            return if depth >= self.far { 1.0 } else { 0.0 };
        }
        let t = ((depth - self.near) / span).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HemisphereLight {
    pub sky: Vec3,
    pub ground: Vec3,
    pub intensity: f32,
    pub up: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    /// Unit vector pointing toward the light.
    pub direction: Vec3,
}

/// Everything about the scene that is not geometry or camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub clear_color: Vec3,
    pub fog: Fog,
    pub hemisphere: HemisphereLight,
    pub directional: DirectionalLight,
}

impl Environment {
    pub fn from_config(cfg: &SceneConfig) -> Self {
        Self {
            clear_color: hex_rgb(cfg.clear_color),
            fog: Fog {
                color: hex_rgb(cfg.fog.color),
                near: cfg.fog.near,
                far: cfg.fog.far,
            },
            hemisphere: HemisphereLight {
                sky: hex_rgb(HEMI_SKY_COLOR),
                ground: hex_rgb(HEMI_GROUND_COLOR),
                intensity: HEMI_INTENSITY,
                up: Vec3::Y,
            },
            directional: DirectionalLight {
                color: hex_rgb(DIR_LIGHT_COLOR),
                intensity: DIR_LIGHT_INTENSITY,
                direction: Vec3::Y,
            },
        }
    }
}

/// `0xRRGGBB` to sRGB components in [0, 1].
#[inline]
pub fn hex_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn srgb_to_linear3(c: Vec3) -> Vec3 {
    Vec3::new(srgb_to_linear(c.x), srgb_to_linear(c.y), srgb_to_linear(c.z))
}
