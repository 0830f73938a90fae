use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

use super::correct_radial_aspect;

/// Uniform block for the spiral warp.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpiralUniforms {
    pub resolution: [f32; 2],
    /// Spiral center in normalized surface coordinates.
    pub center: [f32; 2],
    pub time: f32,
    pub time_scale: f32,
    /// Temporal sign: In = +1, Out = -1.
    pub direction: f32,
    /// Spiral tightness — visual turns per unit radius.
    pub threshold: f32,
}

impl Default for SpiralUniforms {
    fn default() -> Self {
        Self {
            resolution: [0.0, 0.0],
            center: [0.5, 0.5],
            time: 0.0,
            time_scale: 0.5,
            direction: -1.0,
            threshold: 2.0,
        }
    }
}

/// Maps a normalized surface coordinate onto the 1-D spiral domain.
///
/// The coordinate is recentered about `center`, aspect-corrected so the
/// spiral is circular regardless of surface shape, and converted to polar
/// form. The polar angle is remapped from `[-π, π]` to `[-1, 1]`, then the
/// radius term winds the spiral and the time term spins it:
///
/// `t = angle/π + threshold·radius + time·time_scale·direction`
///
/// Output is `(t, 0)`, suitable for a horizontal sampler.
pub fn spiral(uv: Vec2, u: &SpiralUniforms) -> Vec2 {
    let center = Vec2::new(u.center[0], u.center[1]);
    let p = (uv * 2.0 - Vec2::splat(1.0)) - (center * 2.0 - Vec2::splat(1.0));
    let p = correct_radial_aspect(p, u.resolution);

    let radius = p.length();
    let angle = p.y.atan2(p.x);

    let t = angle / PI + u.threshold * radius + u.time * u.time_scale * u.direction;
    Vec2::new(t, 0.0)
}
