//! Catmull-Rom path curve through a handful of control points.
//!
//! The curve is centripetal: knots are spaced by the square root of chord
//! length. `point(t)` walks the curve parameter uniformly per span,
//! `point_at(u)` walks it by arc length using a precomputed
//! [`ArcLengthTable`]. Open curves extrapolate phantom end points.

use glam::Vec3;
use smallvec::SmallVec;

/// Number of chord samples used to approximate arc length.
pub const ARC_LENGTH_DIVISIONS: usize = 200;

const TANGENT_DELTA: f32 = 1e-4;
const MIN_SPAN: f32 = 1e-4;

/// Exponent applied to squared chord length when spacing knots.
const CENTRIPETAL_POW: f32 = 0.25;

#[derive(Clone, Debug)]
pub struct CatmullRomCurve {
    pub points: SmallVec<[Vec3; 8]>,
}

impl CatmullRomCurve {
    pub fn new(points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Control points evenly spaced along +Z over `length`, the last one
    /// dropped by `tail_y` on the Y axis.
    pub fn tunnel_path(count: usize, length: f32, tail_y: f32) -> Self {
        let denom = count.saturating_sub(1).max(1) as f32;
        let mut points: SmallVec<[Vec3; 8]> = (0..count)
            .map(|i| Vec3::new(0.0, 0.0, length * (i as f32 / denom)))
            .collect();
        if let Some(last) = points.last_mut() {
            last.y = tail_y;
        }
        Self::new(points)
    }

    /// Position at curve parameter `t` in [0, 1].
    pub fn point(&self, t: f32) -> Vec3 {
        let n = self.points.len();
        match n {
            0 => return Vec3::ZERO,
            1 => return self.points[0],
            _ => {}
        }
        let p = (n - 1) as f32 * t.clamp(0.0, 1.0);
        let mut seg = p.floor() as usize;
        let mut weight = p - seg as f32;
        if seg >= n - 1 {
            seg = n - 2;
            weight = 1.0;
        }

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg > 0 {
            self.points[seg - 1]
        } else {
            p1 * 2.0 - p2
        };
        let p3 = if seg + 2 < n {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };

        let (t1, t2) = nonuniform_tangents(p0, p1, p2, p3, CENTRIPETAL_POW);
        cubic_hermite(p1, p2, t1, t2, weight)
    }

    /// `divisions + 1` points sampled uniformly in curve parameter.
    pub fn points_uniform(&self, divisions: usize) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(divisions + 1);
        self.fill_points(divisions, &mut out);
        out
    }

    /// Like [`points_uniform`](Self::points_uniform) but reuses `out`'s allocation.
    pub fn fill_points(&self, divisions: usize, out: &mut Vec<Vec3>) {
        out.clear();
        let d = divisions.max(1) as f32;
        out.extend((0..=divisions).map(|i| self.point(i as f32 / d)));
    }

    /// Unit tangent at curve parameter `t`, by central difference.
    pub fn tangent(&self, t: f32) -> Vec3 {
        let t1 = (t - TANGENT_DELTA).max(0.0);
        let t2 = (t + TANGENT_DELTA).min(1.0);
        (self.point(t2) - self.point(t1)).normalize_or_zero()
    }

    pub fn arc_lengths(&self) -> ArcLengthTable {
        ArcLengthTable::new(self, ARC_LENGTH_DIVISIONS)
    }

    /// Position at arc-length fraction `u` in [0, 1].
    pub fn point_at(&self, u: f32, table: &ArcLengthTable) -> Vec3 {
        self.point(table.u_to_t(u))
    }

    pub fn tangent_at(&self, u: f32, table: &ArcLengthTable) -> Vec3 {
        self.tangent(table.u_to_t(u))
    }
}

/// Cumulative chord lengths along a curve, for arc-length reparameterization.
#[derive(Clone, Debug)]
pub struct ArcLengthTable {
    lengths: Vec<f32>,
}

impl ArcLengthTable {
    pub fn new(curve: &CatmullRomCurve, divisions: usize) -> Self {
        let divisions = divisions.max(1);
        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut last = curve.point(0.0);
        let mut sum = 0.0;
        lengths.push(0.0);
        for i in 1..=divisions {
            let current = curve.point(i as f32 / divisions as f32);
            sum += current.distance(last);
            lengths.push(sum);
            last = current;
        }
        Self { lengths }
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    /// Convert an arc-length fraction into the curve parameter reaching it.
    pub fn u_to_t(&self, u: f32) -> f32 {
        let n = self.lengths.len();
        if n < 2 {
            return u.clamp(0.0, 1.0);
        }
        let target = u.clamp(0.0, 1.0) * self.total();
        let i = self
            .lengths
            .partition_point(|&l| l <= target)
            .saturating_sub(1);
        let last = (n - 1) as f32;
        if i >= n - 1 || self.lengths[i] == target {
            return i as f32 / last;
        }
        let before = self.lengths[i];
        let span = self.lengths[i + 1] - before;
        let frac = if span > 0.0 {
            (target - before) / span
        } else {
            0.0
        };
        (i as f32 + frac) / last
    }
}

/// Tangents for a non-uniform Catmull-Rom span, knots spaced by
/// `squared_distance.powf(pow)` and scaled to the unit interval of p1..p2.
fn nonuniform_tangents(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, pow: f32) -> (Vec3, Vec3) {
    let mut dt0 = p0.distance_squared(p1).powf(pow);
    let mut dt1 = p1.distance_squared(p2).powf(pow);
    let mut dt2 = p2.distance_squared(p3).powf(pow);
    if dt1 < MIN_SPAN {
        dt1 = 1.0;
    }
    if dt0 < MIN_SPAN {
        dt0 = dt1;
    }
    if dt2 < MIN_SPAN {
        dt2 = dt1;
    }
    let t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
    let t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;
    (t1 * dt1, t2 * dt1)
}

#[inline]
fn cubic_hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3, t: f32) -> Vec3 {
    let c0 = x0;
    let c1 = t0;
    let c2 = x0 * -3.0 + x1 * 3.0 - t0 * 2.0 - t1;
    let c3 = x0 * 2.0 - x1 * 2.0 + t0 + t1;
    let t2 = t * t;
    c0 + c1 * t + c2 * t2 + c3 * (t2 * t)
}
