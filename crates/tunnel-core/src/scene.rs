//! The tunnel scene: one owning controller advanced once per display refresh.
//!
//! Hosts feed it resize and pointer events, call [`SceneController::frame`]
//! from their per-frame driver and stop rescheduling once it reports
//! [`FrameStatus::Stopped`].

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::constants::{CURVE_LENGTH, CURVE_POINT_COUNT, CURVE_TAIL_Y};
use crate::curve::CatmullRomCurve;
use crate::ease::RoughEase;
use crate::material::{Environment, TextureTransform};
use crate::mouse::MouseState;
use crate::timeline::{hyperspace_timeline, shake_timeline, smooth_lag, AnimationParams, Timeline};
use crate::tube::TubeGeometry;
use crate::viewport::Viewport;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::PI;

/// Something that can draw the current scene state.
pub trait SceneRenderer {
    type Error;

    fn render(&mut self, scene: &SceneController) -> Result<(), Self::Error>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame.
    Continue,
    /// The stop flag is raised; do not reschedule.
    Stopped,
}

pub struct SceneController {
    config: SceneConfig,
    viewport: Viewport,
    camera: Camera,
    mouse: MouseState,
    curve: CatmullRomCurve,
    guide: Vec<Vec3>,
    tube: TubeGeometry,
    texture: TextureTransform,
    environment: Environment,
    params: AnimationParams,
    hyperspace: Timeline,
    shake: Timeline,
    frame_count: u64,
    running: bool,
}

impl SceneController {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, SceneConfig::default())
    }

    pub fn with_config(width: f32, height: f32, config: SceneConfig) -> Self {
        let viewport = Viewport::new(width, height);
        let camera = Camera::new(&config.camera, viewport.aspect());

        let curve = CatmullRomCurve::tunnel_path(CURVE_POINT_COUNT, CURVE_LENGTH, CURVE_TAIL_Y);
        let guide = curve.points_uniform(config.guide_divisions);
        let tube = TubeGeometry::sweep(&curve, &config.tube);

        let seed = config.rough_seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let rough = RoughEase::new(&config.shake_ease, &mut rng);
        let hyperspace = hyperspace_timeline();
        let shake = shake_timeline(&rough);

        log::info!(
            "[scene] {}x{} tube rings={} ring_size={} guide={} shake_seed={}",
            viewport.width,
            viewport.height,
            tube.ring_count(),
            tube.ring_size(),
            guide.len(),
            seed
        );
        log::debug!(
            "[scene] timelines {}={:?}s {}={:?}s",
            hyperspace.label(),
            hyperspace.duration(),
            shake.label(),
            shake.duration()
        );

        Self {
            environment: Environment::from_config(&config),
            config,
            viewport,
            camera,
            mouse: MouseState::default(),
            curve,
            guide,
            tube,
            texture: TextureTransform::default(),
            params: AnimationParams::default(),
            hyperspace,
            shake,
            frame_count: 0,
            running: true,
        }
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
        self.camera.set_aspect(self.viewport.aspect());
        log::debug!(
            "[scene] resize {}x{} aspect={:.3}",
            self.viewport.width,
            self.viewport.height,
            self.camera.aspect
        );
    }

    /// Pointer position in the same pixel space as the viewport.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let target = self.viewport.normalize_pointer(x, y);
        self.mouse.set_target(target);
    }

    /// Advance every animated quantity by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let dt = smooth_lag(dt);
        self.hyperspace.advance(dt, &mut self.params);
        self.shake.advance(dt, &mut self.params);

        self.update_material_offset();
        self.update_camera();
        self.update_curve();
        self.frame_count += 1;
    }

    /// Update, draw and report whether another frame should be scheduled.
    pub fn frame<R: SceneRenderer>(
        &mut self,
        dt: f32,
        renderer: &mut R,
    ) -> Result<FrameStatus, R::Error> {
        if !self.running {
            return Ok(FrameStatus::Stopped);
        }
        self.tick(dt);
        renderer.render(self)?;
        Ok(self.status())
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("[scene] stopping after {} frames", self.frame_count);
        }
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn status(&self) -> FrameStatus {
        if self.running {
            FrameStatus::Continue
        } else {
            FrameStatus::Stopped
        }
    }

    fn update_material_offset(&mut self) {
        self.texture
            .update(&self.params, self.config.motion.offset_y_step);
    }

    fn update_camera(&mut self) {
        let m = &self.config.motion;
        self.mouse.smooth(m.mouse_lerp);
        let p = self.mouse.position;
        self.camera.rotation.z = p.x * m.roll_factor;
        self.camera.rotation.y = PI - p.x * m.yaw_factor;
        self.camera.position.x = p.x * m.shift_factor + self.params.shake_x;
        self.camera.position.y = -p.y * m.shift_factor + self.params.shake_y;
    }

    fn update_curve(&mut self) {
        let m = &self.config.motion;
        self.tube
            .displace_toward(&self.guide, m.vertex_lerp_x, m.vertex_lerp_y);

        let bend_x = -self.mouse.position.x * m.bend_factor;
        let bend_y = self.mouse.position.y * m.bend_factor;
        if let Some(p) = self.curve.points.get_mut(2) {
            p.x = bend_x;
            p.y = bend_y;
        }
        if let Some(p) = self.curve.points.get_mut(4) {
            p.x = bend_x;
        }
        self.curve
            .fill_points(self.config.guide_divisions, &mut self.guide);
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    pub fn curve(&self) -> &CatmullRomCurve {
        &self.curve
    }

    pub fn guide(&self) -> &[Vec3] {
        &self.guide
    }

    pub fn tube(&self) -> &TubeGeometry {
        &self.tube
    }

    pub fn texture(&self) -> &TextureTransform {
        &self.texture
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    pub fn hyperspace(&self) -> &Timeline {
        &self.hyperspace
    }

    pub fn shake(&self) -> &Timeline {
        &self.shake
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
