//! Tube mesh swept along the path curve, with per-frame vertex displacement.
//!
//! Vertices are stored ring-major with `radial_segments` unique vertices per
//! ring; the seam is shared. [`TubeGeometry::render_vertices`] expands each
//! ring by one seam vertex so the texture wraps with a continuous U.

use crate::config::TubeConfig;
use crate::curve::CatmullRomCurve;
use glam::{Quat, Vec2, Vec3};
use std::f32::consts::TAU;

/// Moving frame along the curve at one tubular sample.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    pub position: Vec3,
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// One vertex in GPU order (seam duplicated).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

#[derive(Clone, Debug)]
pub struct TubeGeometry {
    original: Box<[Vec3]>,
    positions: Vec<Vec3>,
    normals: Box<[Vec3]>,
    ring_size: usize,
    ring_count: usize,
}

impl TubeGeometry {
    pub fn sweep(curve: &CatmullRomCurve, cfg: &TubeConfig) -> Self {
        let ring_size = cfg.radial_segments.max(3);
        let frames = frenet_frames(curve, cfg.tubular_segments.max(1));
        let ring_count = frames.len();

        let mut positions = Vec::with_capacity(ring_count * ring_size);
        let mut normals = Vec::with_capacity(ring_count * ring_size);
        for f in &frames {
            for j in 0..ring_size {
                let v = j as f32 / ring_size as f32 * TAU;
                let sin = v.sin();
                let cos = -v.cos();
                let n = (f.normal * cos + f.binormal * sin).normalize_or_zero();
                positions.push(f.position + n * cfg.radius);
                normals.push(n);
            }
        }

        Self {
            original: positions.clone().into_boxed_slice(),
            positions,
            normals: normals.into_boxed_slice(),
            ring_size,
            ring_count,
        }
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn original(&self) -> &[Vec3] {
        &self.original
    }

    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[inline]
    pub fn ring_size(&self) -> usize {
        self.ring_size
    }

    #[inline]
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Ease every live vertex toward `original + guide[ring]` on X and Y.
    /// Z is left untouched.
    pub fn displace_toward(&mut self, guide: &[Vec3], lerp_x: f32, lerp_y: f32) {
        let Some(last) = guide.len().checked_sub(1) else {
            return;
        };
        for (i, (live, orig)) in self
            .positions
            .iter_mut()
            .zip(self.original.iter())
            .enumerate()
        {
            let g = guide[ring_index(i, self.ring_size).min(last)];
            *live = displace_vertex(*live, *orig, g, lerp_x, lerp_y);
        }
    }

    /// Number of vertices produced by [`render_vertices`](Self::render_vertices).
    #[inline]
    pub fn render_vertex_count(&self) -> usize {
        self.ring_count * (self.ring_size + 1)
    }

    /// Live vertices in GPU order, with UV = (along, around).
    pub fn render_vertices(&self) -> impl Iterator<Item = RenderVertex> + '_ {
        let rs = self.ring_size;
        let along_div = self.ring_count.saturating_sub(1).max(1) as f32;
        (0..self.ring_count).flat_map(move |ring| {
            (0..=rs).map(move |j| {
                let k = ring * rs + j % rs;
                RenderVertex {
                    position: self.positions[k],
                    normal: self.normals[k],
                    uv: Vec2::new(ring as f32 / along_div, j as f32 / rs as f32),
                }
            })
        })
    }

    /// Triangle list over the seam-expanded layout, two triangles per quad.
    pub fn render_indices(&self) -> Vec<u32> {
        let stride = (self.ring_size + 1) as u32;
        let mut indices = Vec::with_capacity(self.ring_count.saturating_sub(1) * self.ring_size * 6);
        for j in 1..self.ring_count as u32 {
            for i in 1..=self.ring_size as u32 {
                let a = stride * (j - 1) + (i - 1);
                let b = stride * j + (i - 1);
                let c = stride * j + i;
                let d = stride * (j - 1) + i;
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        indices
    }
}

/// Guide point index for vertex `i`: every vertex of a ring shares one.
#[inline]
pub fn ring_index(vertex: usize, ring_size: usize) -> usize {
    vertex / ring_size.max(1)
}

/// Single displacement step. X and Y ease at separate rates toward
/// `original + guide`; Z is kept.
#[inline]
pub fn displace_vertex(live: Vec3, original: Vec3, guide: Vec3, lerp_x: f32, lerp_y: f32) -> Vec3 {
    Vec3::new(
        live.x + (original.x + guide.x - live.x) * lerp_x,
        live.y + (original.y + guide.y - live.y) * lerp_y,
        live.z,
    )
}

/// Frenet-style frames at `segments + 1` arc-length samples, propagated by
/// rotating the previous normal onto each new tangent.
pub fn frenet_frames(curve: &CatmullRomCurve, segments: usize) -> Vec<Frame> {
    let table = curve.arc_lengths();
    let tangents: Vec<Vec3> = (0..=segments)
        .map(|i| curve.tangent_at(i as f32 / segments as f32, &table))
        .collect();

    let t0 = tangents[0];
    let mut axis = Vec3::X;
    let mut min = f32::MAX;
    if t0.x.abs() <= min {
        min = t0.x.abs();
        axis = Vec3::X;
    }
    if t0.y.abs() <= min {
        min = t0.y.abs();
        axis = Vec3::Y;
    }
    if t0.z.abs() <= min {
        axis = Vec3::Z;
    }
    let side = t0.cross(axis).normalize_or_zero();
    let mut normal = t0.cross(side);
    let mut frames = Vec::with_capacity(segments + 1);
    frames.push(Frame {
        position: curve.point_at(0.0, &table),
        tangent: t0,
        normal,
        binormal: t0.cross(normal),
    });

    for i in 1..=segments {
        let prev = tangents[i - 1];
        let cur = tangents[i];
        let rot_axis = prev.cross(cur);
        if rot_axis.length() > f32::EPSILON {
            let theta = prev.dot(cur).clamp(-1.0, 1.0).acos();
            normal = Quat::from_axis_angle(rot_axis.normalize(), theta) * normal;
        }
        frames.push(Frame {
            position: curve.point_at(i as f32 / segments as f32, &table),
            tangent: cur,
            normal,
            binormal: cur.cross(normal),
        });
    }
    frames
}
