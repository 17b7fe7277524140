// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use tunnel_core::constants as core;

#[test]
fn page_hooks_match_markup() {
    assert_eq!(CANVAS_SELECTOR, "canvas.webgl");
    assert_eq!(LOADING_CLASS, "loading");
    assert!(GALAXY_TEXTURE_URL.ends_with(".jpg"));
    assert!(!GALAXY_TEXTURE_URL.starts_with('/'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fallback_texture_is_usable() {
    assert!(FALLBACK_TEXTURE_SIZE > 0);
    assert!(FALLBACK_TEXTURE_SIZE.is_power_of_two());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_fog() {
    assert!(core::CAMERA_NEAR > 0.0);
    assert!(core::CAMERA_NEAR < core::FOG_NEAR);
    assert!(core::FOG_NEAR < core::FOG_FAR);
    assert!(core::FOG_FAR < core::CAMERA_FAR);
    assert!(core::CAMERA_FOV_DEG > 0.0 && core::CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for f in [core::MOUSE_LERP, core::VERTEX_LERP_X, core::VERTEX_LERP_Y] {
        assert!(f > 0.0 && f < 1.0);
    }
    assert!((core::MOUSE_LERP - 1.0 / 30.0).abs() < 1e-7);
    assert!((core::VERTEX_LERP_X - 0.1).abs() < 1e-7);
    assert!((core::VERTEX_LERP_Y - 0.2).abs() < 1e-7);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn tube_matches_guide_resolution() {
    // one guide point per ring
    assert_eq!(core::TUBE_TUBULAR_SEGMENTS, core::GUIDE_DIVISIONS);
    assert!(core::TUBE_RADIAL_SEGMENTS >= 3);
    assert!(core::CURVE_POINT_COUNT >= 5, "bending moves control points 2 and 4");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lag_smoothing_replaces_long_frames_with_a_short_one() {
    assert!(core::LAG_ADJUSTED_SEC < core::LAG_THRESHOLD_SEC);
    assert!((core::LAG_ADJUSTED_SEC - 1.0 / 30.0).abs() < 1e-7);
}
