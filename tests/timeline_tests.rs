// Host-side tests for easing curves and property timelines.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tunnel_core::{
    hyperspace_timeline, shake_timeline, smooth_lag, AnimationParams, Channel, Ease, Position,
    Power, Repeat, RoughConfig, RoughEase, TextureTransform, Timeline, Tween,
    HYPER_OFFSET_X_TARGET, HYPER_REPEAT_X_TARGET, SHAKE_X_TARGET, TEXTURE_OFFSET_Y_STEP,
};

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn run(tl: &mut Timeline, params: &mut AnimationParams, seconds: f32, dt: f32) {
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        tl.advance(dt, params);
    }
}

fn rough(seed: u64) -> RoughEase {
    RoughEase::new(&RoughConfig::default(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn power_eases_hit_endpoints() {
    for n in 0..4 {
        for p in [Power::In(n), Power::Out(n), Power::InOut(n)] {
            assert_eq!(p.ratio(0.0), 0.0);
            assert!(approx(p.ratio(1.0), 1.0, 1e-6));
        }
    }
}

#[test]
fn power_ease_degrees() {
    assert!(approx(Power::In(0).ratio(0.3), 0.3, 1e-6));
    assert!(approx(Power::In(2).ratio(0.5), 0.125, 1e-6));
    assert!(approx(Power::Out(2).ratio(0.5), 0.875, 1e-6));
    assert!(approx(Power::InOut(1).ratio(0.25), 0.125, 1e-6));
    assert!(approx(Power::InOut(1).ratio(0.5), 0.5, 1e-6));
    assert!(approx(Ease::Linear.ratio(1.5), 1.0, 1e-6));
}

#[test]
fn rough_ease_is_pinned_at_both_ends() {
    let r = rough(7);
    let knots = r.knots();
    assert_eq!(knots[0], glam::Vec2::ZERO);
    assert_eq!(knots[knots.len() - 1], glam::Vec2::ONE);
    assert_eq!(r.ratio(0.0), 0.0);
    assert_eq!(r.ratio(1.0), 1.0);
    assert!(knots.windows(2).all(|w| w[0].x <= w[1].x));
}

#[test]
fn rough_ease_jitters_within_strength() {
    let r = rough(11);
    let knots = r.knots();
    assert!(knots.len() >= 90);
    // strength 0.5 scaled by 0.4, centred on the linear template
    for k in &knots[1..knots.len() - 1] {
        assert!((k.y - k.x).abs() <= 0.1 + 1e-6, "{:?}", k);
    }
    let wobbly = knots[1..knots.len() - 1]
        .iter()
        .any(|k| (k.y - k.x).abs() > 0.01);
    assert!(wobbly);
}

#[test]
fn rough_ease_is_reproducible_from_seed() {
    assert_eq!(rough(42), rough(42));
    assert_ne!(rough(42), rough(43));
}

#[test]
fn rough_ease_without_randomness_alternates() {
    let cfg = RoughConfig {
        randomize: false,
        points: 10,
        ..RoughConfig::default()
    };
    let r = RoughEase::new(&cfg, &mut StdRng::seed_from_u64(0));
    // x = 0 sample is replaced by the pinned origin
    assert_eq!(r.knots().len(), 11);
    assert_eq!(r.ratio(1.0), 1.0);
}

#[test]
fn lag_smoothing() {
    assert_eq!(smooth_lag(0.016), 0.016);
    assert_eq!(smooth_lag(0.5), 0.5);
    assert!(approx(smooth_lag(0.6), 1.0 / 30.0, 1e-7));
    assert!(approx(smooth_lag(30.0), 1.0 / 30.0, 1e-7));
    assert_eq!(smooth_lag(-1.0), 0.0);
    assert_eq!(smooth_lag(f32::NAN), 0.0);
}

#[test]
fn start_value_is_captured_on_first_render() {
    let mut params = AnimationParams::default();
    let mut tl = Timeline::new("test")
        .add(
            Tween::to(Channel::RepeatX, 2.0, 1.0, Ease::Linear),
            Position::At(0.0),
        )
        .add(
            Tween::to(Channel::RepeatX, 4.0, 1.0, Ease::Linear),
            Position::End,
        );
    assert_eq!(tl.duration(), Some(2.0));

    tl.advance(0.5, &mut params);
    assert!(approx(params.repeat_x, 6.0, 1e-5));
    let froms: Vec<_> = tl.tweens().map(|(_, t)| t.from()).collect();
    assert_eq!(froms, vec![Some(10.0), None]);

    tl.advance(1.0, &mut params);
    let (start, second) = tl.tweens().nth(1).map(|(s, t)| (s, t.from())).unwrap_or_default();
    assert_eq!(start, 1.0);
    assert_eq!(second, Some(2.0));
    assert!(approx(params.repeat_x, 3.0, 1e-5));

    tl.advance(10.0, &mut params);
    assert_eq!(params.repeat_x, 4.0);
    assert!(tl.is_finished());
}

#[test]
fn later_tween_wins_on_shared_channel() {
    let mut params = AnimationParams::default();
    let mut tl = Timeline::new("overlap")
        .add(
            Tween::to(Channel::OffsetX, 1.0, 1.0, Ease::Linear),
            Position::At(0.0),
        )
        .add(
            Tween::to(Channel::OffsetX, -1.0, 1.0, Ease::Linear),
            Position::At(0.0),
        );
    run(&mut tl, &mut params, 1.0, 0.25);
    assert_eq!(params.offset_x, -1.0);
}

#[test]
fn timeline_repeats_with_delay() {
    let mut params = AnimationParams::default();
    let mut tl = Timeline::new("blink")
        .with_repeat(Repeat::Forever)
        .with_repeat_delay(1.0)
        .add(
            Tween::to(Channel::ShakeY, 1.0, 1.0, Ease::Linear),
            Position::At(0.0),
        );
    run(&mut tl, &mut params, 1.5, 0.25);
    assert_eq!(params.shake_y, 1.0);
    assert_eq!(tl.cycle(), 0);

    tl.advance(0.5, &mut params);
    tl.advance(0.5, &mut params);
    assert_eq!(tl.cycle(), 1);
    assert!(approx(params.shake_y, 0.5, 1e-6));
    assert!(!tl.is_finished());

    run(&mut tl, &mut params, 5.0, 0.5);
    assert!(!tl.is_finished());
    assert_eq!(tl.cycle(), 3);
    assert_eq!(params.shake_y, 1.0);
}

#[test]
fn single_play_timeline_finishes_and_holds() {
    let mut params = AnimationParams::default();
    let mut tl = Timeline::new("once").add(
        Tween::to(Channel::ShakeY, 1.0, 1.0, Ease::Linear),
        Position::At(0.0),
    );
    run(&mut tl, &mut params, 0.5, 0.25);
    assert!(!tl.is_finished());
    run(&mut tl, &mut params, 3.0, 0.25);
    assert!(tl.is_finished());
    assert_eq!(tl.cycle(), 0);
    assert_eq!(params.shake_y, 1.0);
}

#[test]
fn forever_child_makes_timeline_unbounded() {
    let tl = hyperspace_timeline();
    assert_eq!(tl.label(), "hyperspace");
    assert_eq!(tl.duration(), None);
    assert!(!tl.is_finished());
}

#[test]
fn hyperspace_collapses_repeat_x() {
    let mut params = AnimationParams::default();
    let mut tl = hyperspace_timeline();
    run(&mut tl, &mut params, 2.0, 0.25);
    assert!(params.repeat_x < 10.0 && params.repeat_x > HYPER_REPEAT_X_TARGET);
    run(&mut tl, &mut params, 2.0, 0.25);
    assert!(approx(params.repeat_x, HYPER_REPEAT_X_TARGET, 1e-5));
    run(&mut tl, &mut params, 20.0, 0.25);
    assert!(approx(params.repeat_x, HYPER_REPEAT_X_TARGET, 1e-5));
    assert_eq!(params.repeat_y, 4.0);
}

#[test]
fn hyperspace_streams_offset_x_in_loops() {
    let mut params = AnimationParams::default();
    let mut tl = hyperspace_timeline();
    run(&mut tl, &mut params, 6.0, 0.25);
    assert!(approx(params.offset_x, HYPER_OFFSET_X_TARGET * 0.5, 1e-3));
    run(&mut tl, &mut params, 9.0, 0.25);
    // 15 s: three seconds into the second pass
    assert!(approx(params.offset_x, HYPER_OFFSET_X_TARGET * 0.25, 1e-3));
}

#[test]
fn shake_nudges_out_and_back_then_pauses() {
    let mut params = AnimationParams::default();
    let mut tl = shake_timeline(&rough(3));
    assert_eq!(tl.label(), "shake");
    assert_eq!(tl.duration(), Some(8.0));

    run(&mut tl, &mut params, 4.0, 0.25);
    assert_eq!(params.shake_x, 0.0);

    run(&mut tl, &mut params, 2.0, 0.25);
    assert!(approx(params.shake_x, SHAKE_X_TARGET, 1e-7));

    run(&mut tl, &mut params, 2.0, 0.25);
    assert!(approx(params.shake_x, 0.0, 1e-7));

    // repeat delay: holds the end state
    run(&mut tl, &mut params, 4.0, 0.25);
    assert_eq!(tl.cycle(), 0);
    assert!(approx(params.shake_x, 0.0, 1e-7));

    // second cycle starts at 13 s, shake peaks again at 19 s
    run(&mut tl, &mut params, 7.0, 0.25);
    assert_eq!(tl.cycle(), 1);
    assert!(approx(params.shake_x, SHAKE_X_TARGET, 1e-7));
}

#[test]
fn clock_keeps_frame_rate_after_days_of_uptime() {
    let mut params = AnimationParams::default();
    // six days in
    for mut tl in [hyperspace_timeline(), shake_timeline(&rough(3))] {
        tl.advance(518_400.0, &mut params);
        let before = tl.elapsed();
        run(&mut tl, &mut params, 10.0, 1.0 / 60.0);
        let passed = tl.elapsed() - before;
        assert!((passed - 10.0).abs() < 1e-4, "{} advanced {}", tl.label(), passed);
    }
}

#[test]
fn hyperspace_keeps_streaming_after_weeks() {
    let mut params = AnimationParams::default();
    let mut tl = hyperspace_timeline();
    tl.advance(1.0 / 60.0, &mut params);
    tl.advance(2_097_152.0, &mut params);
    let mut last = params.offset_x;
    for _ in 0..60 {
        tl.advance(1.0 / 60.0, &mut params);
        assert_ne!(params.offset_x, last);
        last = params.offset_x;
    }
}

#[test]
fn shake_still_peaks_after_weeks() {
    let mut params = AnimationParams::default();
    let mut tl = shake_timeline(&rough(3));
    // start of cycle 100000
    tl.advance(1_300_000.0, &mut params);
    assert_eq!(tl.cycle(), 100_000);
    assert_eq!(params.shake_x, 0.0);
    run(&mut tl, &mut params, 6.0, 1.0 / 60.0);
    assert!(approx(params.shake_x, SHAKE_X_TARGET, 1e-4), "{}", params.shake_x);
}

#[test]
fn vertical_scroll_never_stalls() {
    let params = AnimationParams::default();
    // roughly 150 hours of frames at 60 fps
    let mut tex = TextureTransform::default().with_scroll_y(32_768.0);
    let start = tex.scroll_y();
    let mut last = tex.offset.y;
    for _ in 0..600 {
        tex.update(&params, TEXTURE_OFFSET_Y_STEP);
        assert_ne!(tex.offset.y, last);
        assert!((0.0..2.0).contains(&tex.offset.y));
        last = tex.offset.y;
    }
    assert!((tex.scroll_y() - start - 0.6).abs() < 1e-5);
}

#[test]
fn vertical_offset_wraps_within_one_mirror_period() {
    let params = AnimationParams::default();
    let mut tex = TextureTransform::default().with_scroll_y(1.9995);
    tex.update(&params, TEXTURE_OFFSET_Y_STEP);
    assert!(approx(tex.offset.y, 0.0005, 1e-5), "{}", tex.offset.y);
    assert!(tex.scroll_y() > 2.0);
}

#[test]
fn params_channels_round_trip() {
    let mut p = AnimationParams::default();
    for (i, ch) in [
        Channel::OffsetX,
        Channel::OffsetY,
        Channel::RepeatX,
        Channel::RepeatY,
        Channel::ShakeX,
        Channel::ShakeY,
    ]
    .into_iter()
    .enumerate()
    {
        p.set(ch, i as f32);
        assert_eq!(p.get(ch), i as f32);
    }
}
