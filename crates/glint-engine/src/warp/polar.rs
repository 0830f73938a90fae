use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

use super::correct_radial_aspect;

/// Uniform block for the polar/flower warp.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct PolarUniforms {
    pub resolution: [f32; 2],
    /// Flower center in normalized surface coordinates.
    pub center: [f32; 2],
    pub time: f32,
    pub rotation_time_scale: f32,
    pub in_out_time_scale: f32,
    pub petals: f32,
    /// How strongly the petal sinusoid bends the radius term.
    pub petal_influence: f32,
    /// Amplitude of the radius-dependent angle wobble.
    pub wobble: f32,
    /// Temporal sign for the in/out term: In = +1, Out = -1.
    pub direction: f32,
    /// Rotational handedness: CounterClockwise = +1, Clockwise = -1.
    pub rotation_direction: f32,
}

impl Default for PolarUniforms {
    fn default() -> Self {
        Self {
            resolution: [0.0, 0.0],
            center: [0.5, 0.5],
            time: 0.0,
            rotation_time_scale: 0.5,
            in_out_time_scale: 0.1,
            petals: 5.0,
            petal_influence: 1.0,
            wobble: 0.0,
            direction: -1.0,
            rotation_direction: 1.0,
        }
    }
}

/// Maps a normalized surface coordinate onto the 1-D flower domain.
///
/// After recentering and aspect correction, the polar angle is advanced by
/// the rotation time (handedness applied once) and perturbed by a wobble
/// term that depends on the radius, then the petal sinusoid modulates the
/// radius and the in/out time term pushes the whole ramp inward or
/// outward:
///
/// ```text
/// angle = atan2(y, x) + rot_dir·rot_time + wobble·sin(π·radius + rot_time)
/// t     = radius + petal_influence·sin((angle + π)·petals) + in_out_time
/// ```
///
/// with `rot_time = time·rotation_time_scale` and
/// `in_out_time = time·in_out_time_scale·direction`. Output is `(t, 0)`.
pub fn polar(uv: Vec2, u: &PolarUniforms) -> Vec2 {
    let center = Vec2::new(u.center[0], u.center[1]);
    let p = (uv - center) * 2.0;
    let p = correct_radial_aspect(p, u.resolution);

    let radius = p.length();
    let rot_time = u.time * u.rotation_time_scale;
    let angle = p.y.atan2(p.x)
        + u.rotation_direction * rot_time
        + u.wobble * (PI * radius + rot_time).sin();

    let in_out_time = u.time * u.in_out_time_scale * u.direction;
    let t = radius + u.petal_influence * ((angle + PI) * u.petals).sin() + in_out_time;
    Vec2::new(t, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> PolarUniforms {
        PolarUniforms {
            resolution: [100.0, 100.0],
            ..Default::default()
        }
    }

    #[test]
    fn zero_influence_reduces_to_radius() {
        let u = PolarUniforms { petal_influence: 0.0, ..base() };
        // Due east of center at normalized radius 0.5.
        let out = polar(Vec2::new(0.75, 0.5), &u);
        assert!((out.x - 0.5).abs() < 1e-6);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn petal_term_modulates_radius() {
        // petals = 1, influence = 1, angle 0: sin((0 + π)·1) = 0, so the
        // petal term vanishes due east and t stays at the radius.
        let u = PolarUniforms { petals: 1.0, ..base() };
        let out = polar(Vec2::new(0.75, 0.5), &u);
        assert!((out.x - 0.5).abs() < 1e-5);
        // Due north (angle -π/2) the same petal count contributes sin(π/2) = 1.
        let north = polar(Vec2::new(0.5, 0.25), &u);
        assert!((north.x - 1.5).abs() < 1e-5);
    }

    #[test]
    fn rotation_handedness_is_applied_once() {
        let ccw = PolarUniforms {
            petals: 1.0,
            time: 1.0,
            rotation_time_scale: 0.25,
            in_out_time_scale: 0.0,
            ..base()
        };
        let cw = PolarUniforms { rotation_direction: -1.0, ..ccw };
        let p = Vec2::new(0.75, 0.5);
        // angle = ±0.25 at the probe point; flipping handedness must move
        // the petal phase in the opposite direction, not cancel out.
        let a = polar(p, &ccw).x;
        let b = polar(p, &cw).x;
        assert!((a - b).abs() > 1e-3);
    }

    #[test]
    fn in_out_direction_flips_time_term() {
        let outward = PolarUniforms {
            petal_influence: 0.0,
            time: 1.0,
            in_out_time_scale: 0.5,
            rotation_time_scale: 0.0,
            ..base()
        };
        let inward = PolarUniforms { direction: 1.0, ..outward };
        let p = Vec2::new(0.75, 0.5);
        assert!((polar(p, &outward).x - 0.0).abs() < 1e-6);
        assert!((polar(p, &inward).x - 1.0).abs() < 1e-6);
    }
}
