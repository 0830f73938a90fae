use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Uniform block for the decorative waves distortion.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct WavesUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32,
}

// Fixed frequencies of the three displacement layers.
const F1: f32 = 15.0;
const F00: f32 = 15.0;
const F01: f32 = 10.0;

/// Small layered sinusoid displacement used to wobble arbitrary content.
///
/// Two fine ripples displace each axis by the other, then a coarser
/// diagonal swell whose divisor breathes with time adds a slow roll. The
/// offsets stay in the per-mille range so the content reads as gently
/// distorted rather than warped.
pub fn waves(uv: Vec2, u: &WavesUniforms) -> Vec2 {
    let t = u.time;
    let mut p = uv;

    p.x += (p.y * F00 + t).rem_euclid(TAU).sin() * 0.001 * F01;
    p.y += (p.x * F01 + t).rem_euclid(TAU).cos() * 0.001 * F00;

    let breath = 2.0 * t.rem_euclid(TAU).sin();
    p.x += ((p.y + p.x) * F1 + t).rem_euclid(TAU).sin() / (180.0 + breath);
    p.y += ((p.y + p.x) * F1 + t).rem_euclid(TAU).cos() / (200.0 + breath);
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_stays_small() {
        let u = WavesUniforms { resolution: [100.0, 100.0], time: 1.7, ..Default::default() };
        for i in 0..10 {
            for j in 0..10 {
                let p = Vec2::new(i as f32 / 10.0, j as f32 / 10.0);
                let d = waves(p, &u) - p;
                assert!(d.x.abs() < 0.02, "dx {} at {:?}", d.x, p);
                assert!(d.y.abs() < 0.02, "dy {} at {:?}", d.y, p);
            }
        }
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let u = WavesUniforms { time: 0.5, ..Default::default() };
        let p = Vec2::new(0.3, 0.6);
        assert_eq!(waves(p, &u), waves(p, &u));
    }
}
