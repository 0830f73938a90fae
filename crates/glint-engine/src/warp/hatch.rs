use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Uniform block for the hatch warp.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct HatchUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub time_scale: f32,
    /// Perpendicular displacement reached at a stripe edge.
    pub amplitude: f32,
    /// Stripe count across the unit interval (two per zig-zag peak).
    pub stripes: f32,
    /// Rotation of the whole coordinate space, radians.
    pub angle: f32,
    /// Stripe axis: 1.0 horizontal (stripes indexed by y), -1.0 vertical.
    pub orientation: f32,
}

impl Default for HatchUniforms {
    fn default() -> Self {
        Self {
            resolution: [0.0, 0.0],
            time: 0.0,
            time_scale: 0.5,
            amplitude: 0.1,
            stripes: 8.0,
            angle: 0.0,
            orientation: 1.0,
        }
    }
}

/// Displaces one axis by a per-stripe ramp indexed on the orthogonal axis.
///
/// The horizontal axis is aspect-corrected first and the whole space is
/// rotated by `angle` about the surface center. The stripe index
/// `d = stripes·orthogonal + time·time_scale` then drives the braid: even
/// stripes displace by `amplitude·fract(d)`, odd stripes by
/// `amplitude·(1 - fract(d))`, so adjacent stripes ramp in opposite
/// directions and meet at the edges.
pub fn hatch(uv: Vec2, u: &HatchUniforms) -> Vec2 {
    let [w, h] = u.resolution;
    let aspect = if w > 0.0 && h > 0.0 { w / h } else { 1.0 };

    let mut p = Vec2::new(uv.x * aspect, uv.y);
    p = p.rotate_about(Vec2::new(aspect, 1.0) * 0.5, u.angle);

    let time = u.time * u.time_scale;
    if u.orientation > 0.0 {
        p.x += braid(p.y, u.stripes, u.amplitude, time);
    } else {
        p.y += braid(p.x, u.stripes, u.amplitude, time);
    }
    p
}

#[inline]
fn braid(orthogonal: f32, stripes: f32, amplitude: f32, time: f32) -> f32 {
    let displacement = stripes * orthogonal + time;
    let index = displacement.floor();
    let repeat = displacement - index;
    if (index as i64) % 2 == 0 {
        amplitude * repeat
    } else {
        amplitude * (1.0 - repeat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(u: HatchUniforms) -> HatchUniforms {
        HatchUniforms { resolution: [100.0, 100.0], ..u }
    }

    #[test]
    fn even_stripe_ramps_up() {
        let u = square(HatchUniforms { stripes: 2.0, amplitude: 0.4, ..Default::default() });
        // y = 0.25 → displacement 0.5, stripe 0 (even), ramp at 0.5.
        let out = hatch(Vec2::new(0.1, 0.25), &u);
        assert!((out.x - (0.1 + 0.4 * 0.5)).abs() < 1e-6);
        assert_eq!(out.y, 0.25);
    }

    #[test]
    fn odd_stripe_ramps_down() {
        let u = square(HatchUniforms { stripes: 2.0, amplitude: 0.4, ..Default::default() });
        // y = 0.6 → displacement 1.2, stripe 1 (odd), ramp at 1 - 0.2 = 0.8.
        let out = hatch(Vec2::new(0.1, 0.6), &u);
        assert!((out.x - (0.1 + 0.4 * 0.8)).abs() < 1e-5);
    }

    #[test]
    fn adjacent_stripes_meet_at_the_edge() {
        let u = square(HatchUniforms { stripes: 2.0, amplitude: 0.4, ..Default::default() });
        let below = hatch(Vec2::new(0.0, 0.499), &u);
        let above = hatch(Vec2::new(0.0, 0.501), &u);
        // At the stripe boundary both ramps are near their apex.
        assert!((below.x - above.x).abs() < 0.01);
    }

    #[test]
    fn vertical_orientation_displaces_y() {
        let u = square(HatchUniforms {
            stripes: 2.0,
            amplitude: 0.4,
            orientation: -1.0,
            ..Default::default()
        });
        let out = hatch(Vec2::new(0.25, 0.1), &u);
        assert_eq!(out.x, 0.25);
        assert!((out.y - (0.1 + 0.4 * 0.5)).abs() < 1e-6);
    }

    #[test]
    fn time_shifts_the_stripe_phase() {
        let still = square(HatchUniforms { stripes: 2.0, ..Default::default() });
        let moving = HatchUniforms { time: 1.0, time_scale: 0.25, ..still };
        let p = Vec2::new(0.1, 0.25);
        // displacement moves from 0.5 to 0.75 within the same even stripe.
        let a = hatch(p, &still).x;
        let b = hatch(p, &moving).x;
        assert!((b - a - still.amplitude * 0.25).abs() < 1e-6);
    }
}
