//! Scene configuration.
//!
//! `SceneConfig::default()` reproduces the tuned effect. Hosts override
//! individual fields (the native front-end does so from its command line).

use crate::constants::*;
use crate::ease::RoughConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub z: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FogConfig {
    pub color: u32,
    pub near: f32,
    pub far: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TubeConfig {
    pub radius: f32,
    pub radial_segments: usize,
    pub tubular_segments: usize,
}

/// Per-frame response of the scene to the smoothed mouse.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub mouse_lerp: f32,
    pub vertex_lerp_x: f32,
    pub vertex_lerp_y: f32,
    pub roll_factor: f32,
    pub yaw_factor: f32,
    pub shift_factor: f32,
    pub bend_factor: f32,
    pub offset_y_step: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub clear_color: u32,
    pub tube: TubeConfig,
    pub guide_divisions: usize,
    pub motion: MotionConfig,
    pub shake_ease: RoughConfig,
    /// Seed for the randomized shake ease; `None` draws one from the OS RNG.
    pub rough_seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig {
                fov_deg: CAMERA_FOV_DEG,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                z: CAMERA_Z,
            },
            fog: FogConfig {
                color: FOG_COLOR,
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            clear_color: CLEAR_COLOR,
            tube: TubeConfig {
                radius: TUBE_RADIUS,
                radial_segments: TUBE_RADIAL_SEGMENTS,
                tubular_segments: TUBE_TUBULAR_SEGMENTS,
            },
            guide_divisions: GUIDE_DIVISIONS,
            motion: MotionConfig {
                mouse_lerp: MOUSE_LERP,
                vertex_lerp_x: VERTEX_LERP_X,
                vertex_lerp_y: VERTEX_LERP_Y,
                roll_factor: CAMERA_ROLL_FACTOR,
                yaw_factor: CAMERA_YAW_FACTOR,
                shift_factor: CAMERA_SHIFT_FACTOR,
                bend_factor: CURVE_BEND_FACTOR,
                offset_y_step: TEXTURE_OFFSET_Y_STEP,
            },
            shake_ease: RoughConfig::default(),
            rough_seed: None,
        }
    }
}

impl SceneConfig {
    /// Same configuration with a fixed shake seed, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rough_seed = Some(seed);
        self
    }
}
