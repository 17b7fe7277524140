//! Easing curves mapping tween progress in [0, 1] to an interpolation ratio.

use crate::constants::{ROUGH_POINTS, ROUGH_STRENGTH};
use glam::Vec2;
use rand::Rng;

/// Polynomial ease of degree `n + 1`; degree 0 is linear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Power {
    In(u8),
    Out(u8),
    InOut(u8),
}

impl Power {
    pub fn ratio(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Power::In(n) => p.powi(n as i32 + 1),
            Power::Out(n) => 1.0 - (1.0 - p).powi(n as i32 + 1),
            Power::InOut(n) => {
                let e = n as i32 + 1;
                if p < 0.5 {
                    (2.0 * p).powi(e) * 0.5
                } else {
                    1.0 - (2.0 * (1.0 - p)).powi(e) * 0.5
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power(Power),
    Rough(RoughEase),
}

impl Ease {
    pub fn ratio(&self, p: f32) -> f32 {
        match self {
            Ease::Linear => p.clamp(0.0, 1.0),
            Ease::Power(pw) => pw.ratio(p),
            Ease::Rough(r) => r.ratio(p),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoughConfig {
    /// Underlying curve the jitter is added to.
    pub template: Power,
    pub strength: f32,
    pub points: usize,
    pub randomize: bool,
    pub clamp: bool,
}

impl Default for RoughConfig {
    fn default() -> Self {
        Self {
            template: Power::In(0),
            strength: ROUGH_STRENGTH,
            points: ROUGH_POINTS,
            randomize: true,
            clamp: false,
        }
    }
}

/// Piecewise-linear ease through jittered samples of a template curve.
/// Always passes through (0, 0) and (1, 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RoughEase {
    knots: Vec<Vec2>,
}

impl RoughEase {
    pub fn new<R: Rng + ?Sized>(cfg: &RoughConfig, rng: &mut R) -> Self {
        let count = cfg.points.max(1);
        let strength = cfg.strength * 0.4;
        let mut samples: Vec<Vec2> = Vec::with_capacity(count);
        for i in (0..count).rev() {
            let x = if cfg.randomize {
                rng.gen::<f32>()
            } else {
                i as f32 / count as f32
            };
            let mut y = cfg.template.ratio(x);
            if cfg.randomize {
                y += rng.gen::<f32>() * strength - strength * 0.5;
            } else if i % 2 == 1 {
                y += strength * 0.5;
            } else {
                y -= strength * 0.5;
            }
            if cfg.clamp {
                y = y.clamp(0.0, 1.0);
            }
            samples.push(Vec2::new(x, y));
        }
        samples.sort_by(|a, b| a.x.total_cmp(&b.x));

        let mut knots = Vec::with_capacity(samples.len() + 2);
        knots.push(Vec2::ZERO);
        knots.extend(samples.into_iter().filter(|s| s.x > 0.0));
        knots.push(Vec2::ONE);
        Self { knots }
    }

    pub fn knots(&self) -> &[Vec2] {
        &self.knots
    }

    pub fn ratio(&self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        let idx = self.knots.partition_point(|k| k.x <= p);
        if idx == 0 {
            return self.knots.first().map_or(p, |k| k.y);
        }
        if idx >= self.knots.len() {
            return self.knots.last().map_or(p, |k| k.y);
        }
        let a = self.knots[idx - 1];
        let b = self.knots[idx];
        let gap = b.x - a.x;
        if gap <= 0.0 {
            return b.y;
        }
        a.y + (p - a.x) / gap * (b.y - a.y)
    }
}
