// Tuning constants shared by the web and native front-ends.
//
// Values are kept literal for visual parity with the hand-tuned effect.

// Camera
pub const CAMERA_FOV_DEG: f32 = 15.0;
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 0.35; // small forward offset inside the tube

// Scene background and distance fog (sRGB hex)
pub const CLEAR_COLOR: u32 = 0x222222;
pub const FOG_COLOR: u32 = 0x222222;
pub const FOG_NEAR: f32 = 0.6;
pub const FOG_FAR: f32 = 2.8;

// Path curve
pub const CURVE_POINT_COUNT: usize = 5;
pub const CURVE_LENGTH: f32 = 2.5; // points are spread along +Z over this distance
pub const CURVE_TAIL_Y: f32 = -0.06; // last point dips for asymmetry

// Guide line resampled from the curve every frame
pub const GUIDE_DIVISIONS: usize = 70; // 71 points

// Tube mesh
pub const TUBE_RADIUS: f32 = 0.02;
pub const TUBE_RADIAL_SEGMENTS: usize = 50; // unique vertices per ring
pub const TUBE_TUBULAR_SEGMENTS: usize = 70; // 71 rings

// Lights
pub const HEMI_SKY_COLOR: u32 = 0xffffbb;
pub const HEMI_GROUND_COLOR: u32 = 0x887979;
pub const HEMI_INTENSITY: f32 = 0.9;
pub const DIR_LIGHT_COLOR: u32 = 0xffffff;
pub const DIR_LIGHT_INTENSITY: f32 = 0.8;

// Per-frame smoothing (fraction of the remaining distance covered per frame)
pub const MOUSE_LERP: f32 = 1.0 / 30.0;
pub const VERTEX_LERP_X: f32 = 1.0 / 10.0;
pub const VERTEX_LERP_Y: f32 = 1.0 / 5.0;

// Camera response to the smoothed mouse
pub const CAMERA_ROLL_FACTOR: f32 = 0.2;
pub const CAMERA_YAW_FACTOR: f32 = 0.06;
pub const CAMERA_SHIFT_FACTOR: f32 = 0.015;

// Curve bending from the smoothed mouse
pub const CURVE_BEND_FACTOR: f32 = 0.1;

// Texture scroll
pub const TEXTURE_OFFSET_Y_STEP: f32 = 0.001; // per frame, unbounded
pub const TEXTURE_REPEAT_X: f32 = 10.0;
pub const TEXTURE_REPEAT_Y: f32 = 4.0;

// Hyperspace timeline
pub const HYPER_REPEAT_X_TARGET: f32 = 0.3;
pub const HYPER_REPEAT_DURATION: f32 = 4.0;
pub const HYPER_OFFSET_X_TARGET: f32 = 8.0;
pub const HYPER_OFFSET_DURATION: f32 = 12.0;

// Shake timeline
pub const SHAKE_X_TARGET: f32 = -0.01;
pub const SHAKE_DURATION: f32 = 2.0;
pub const SHAKE_START: f32 = 4.0;
pub const SHAKE_REPEAT_DELAY: f32 = 5.0;

// Rough ease shape used by the shake
pub const ROUGH_STRENGTH: f32 = 0.5;
pub const ROUGH_POINTS: usize = 100;

// Timeline clock lag smoothing: deltas above the threshold are replaced
pub const LAG_THRESHOLD_SEC: f32 = 0.5;
pub const LAG_ADJUSTED_SEC: f32 = 1.0 / 30.0;

// Viewport guard
pub const MIN_VIEWPORT_PX: f32 = 1.0;
