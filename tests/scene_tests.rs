// Host-side tests for the scene controller: per-frame update, stop flag and
// the renderer seam.

use std::f32::consts::PI;
use tunnel_core::{FrameStatus, SceneConfig, SceneController, SceneRenderer};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn scene() -> SceneController {
    SceneController::with_config(800.0, 600.0, SceneConfig::default().with_seed(9))
}

/// Records what it was asked to draw; can be told to fail.
#[derive(Default)]
struct Recorder {
    frames: Vec<u64>,
    fail: bool,
}

impl SceneRenderer for Recorder {
    type Error = &'static str;

    fn render(&mut self, scene: &SceneController) -> Result<(), Self::Error> {
        if self.fail {
            return Err("surface lost");
        }
        self.frames.push(scene.frame_count());
        Ok(())
    }
}

#[test]
fn construction_builds_guide_and_tube() {
    let s = scene();
    assert_eq!(s.guide().len(), 71);
    assert_eq!(s.tube().ring_count(), 71);
    assert_eq!(s.tube().ring_size(), 50);
    assert_eq!(s.frame_count(), 0);
    assert!(s.is_running());
    assert!(approx(s.camera().aspect, 800.0 / 600.0, 1e-6));
    assert_eq!(s.camera().position.z, 0.35);
    assert_eq!(s.texture().repeat, glam::Vec2::new(10.0, 4.0));
}

#[test]
fn resize_updates_viewport_and_camera() {
    let mut s = scene();
    s.on_resize(1000.0, 250.0);
    assert_eq!(s.viewport().half_width, 500.0);
    assert_eq!(s.viewport().half_height, 125.0);
    assert!(approx(s.camera().aspect, 4.0, 1e-6));
}

#[test]
fn idle_frame_faces_down_the_tunnel() {
    let mut s = scene();
    s.tick(1.0 / 60.0);
    let cam = s.camera();
    assert_eq!(cam.rotation.z, 0.0);
    assert!(approx(cam.rotation.y, PI, 1e-6));
    assert!(cam.forward().z > 0.99);
    assert_eq!(s.frame_count(), 1);
}

#[test]
fn texture_scrolls_vertically_each_frame() {
    let mut s = scene();
    for _ in 0..10 {
        s.tick(1.0 / 60.0);
    }
    assert!(approx(s.texture().offset.y, 0.01, 1e-6));
}

#[test]
fn steady_pointer_converges_mouse_and_roll() {
    let mut s = scene();
    // (600, 450) on an 800x600 viewport normalizes to (0.5, -0.5)
    s.on_pointer_move(600.0, 450.0);
    assert_eq!(s.mouse().target, glam::Vec2::new(0.5, -0.5));
    for _ in 0..200 {
        s.tick(1.0 / 60.0);
    }
    let m = s.mouse().position;
    assert!(approx(m.x, 0.5, 1e-3), "{:?}", m);
    assert!(approx(m.y, -0.5, 1e-3), "{:?}", m);
    assert!(approx(s.camera().rotation.z, 0.1, 1e-3));
    assert!(approx(s.camera().rotation.y, PI - 0.03, 1e-3));
}

#[test]
fn pointer_bends_the_path() {
    let mut s = scene();
    s.on_pointer_move(600.0, 450.0);
    for _ in 0..400 {
        s.tick(1.0 / 60.0);
    }
    let pts = &s.curve().points;
    assert!(approx(pts[2].x, -0.05, 1e-4));
    assert!(approx(pts[2].y, -0.05, 1e-4));
    assert!(approx(pts[4].x, -0.05, 1e-4));
    assert_eq!(pts[4].y, -0.06);
    assert_eq!(pts[0], glam::Vec3::ZERO);
    // the guide follows the bent curve
    assert!(approx(s.guide()[35].x, pts[2].x, 1e-4));
}

#[test]
fn camera_shift_includes_shake() {
    let mut s = scene();
    // 6 s: the shake tween has reached its target
    for _ in 0..24 {
        s.tick(0.25);
    }
    assert!(approx(s.params().shake_x, -0.01, 1e-7));
    assert!(approx(s.camera().position.x, -0.01, 1e-7));
    assert_eq!(s.camera().position.y, 0.0);
}

#[test]
fn long_frames_are_smoothed() {
    let mut s = scene();
    s.tick(5.0);
    assert!(approx(s.hyperspace().elapsed() as f32, 1.0 / 30.0, 1e-6));
    assert!(approx(s.shake().elapsed() as f32, 1.0 / 30.0, 1e-6));
}

#[test]
fn frame_updates_then_renders() {
    let mut s = scene();
    let mut r = Recorder::default();
    for _ in 0..3 {
        assert_eq!(s.frame(1.0 / 60.0, &mut r), Ok(FrameStatus::Continue));
    }
    assert_eq!(r.frames, vec![1, 2, 3]);
}

#[test]
fn stopped_scene_neither_updates_nor_renders() {
    let mut s = scene();
    let mut r = Recorder::default();
    assert_eq!(s.frame(1.0 / 60.0, &mut r), Ok(FrameStatus::Continue));
    s.stop();
    assert!(!s.is_running());
    assert_eq!(s.status(), FrameStatus::Stopped);
    assert_eq!(s.frame(1.0 / 60.0, &mut r), Ok(FrameStatus::Stopped));
    assert_eq!(s.frame_count(), 1);
    assert_eq!(r.frames, vec![1]);
    // idempotent
    s.stop();
    assert_eq!(s.status(), FrameStatus::Stopped);
}

#[test]
fn renderer_errors_propagate_without_stopping() {
    let mut s = scene();
    let mut r = Recorder {
        fail: true,
        ..Recorder::default()
    };
    assert_eq!(s.frame(1.0 / 60.0, &mut r), Err("surface lost"));
    assert!(s.is_running());
    r.fail = false;
    assert_eq!(s.frame(1.0 / 60.0, &mut r), Ok(FrameStatus::Continue));
    assert_eq!(r.frames, vec![2]);
}

#[test]
fn seeded_scenes_shake_identically() {
    let mut a = scene();
    let mut b = scene();
    for _ in 0..30 {
        a.tick(0.2);
        b.tick(0.2);
    }
    assert_eq!(a.params(), b.params());
    assert_eq!(a.camera().position, b.camera().position);
}
