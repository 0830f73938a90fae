use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// Uniform block for the wavy warp.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct WavyUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub time_scale: f32,
    pub amplitude: f32,
    /// Angular frequency of the wave along the orthogonal axis.
    pub period: f32,
    /// Rotation of the whole coordinate space, radians.
    pub angle: f32,
    /// Wave axis: 1.0 horizontal (x displaced by y), -1.0 vertical.
    pub orientation: f32,
    /// Samples with alpha below this are discarded after lookup.
    pub alpha_threshold: f32,
    pub _pad: [f32; 3],
}

impl Default for WavyUniforms {
    fn default() -> Self {
        Self {
            resolution: [0.0, 0.0],
            time: 0.0,
            time_scale: 0.5,
            amplitude: 0.1,
            period: 2.0,
            angle: 0.0,
            orientation: 1.0,
            alpha_threshold: 0.0,
            _pad: [0.0; 3],
        }
    }
}

/// Adds a sinusoidal offset to one axis as a function of the other.
///
/// The horizontal axis is aspect-corrected and the space rotated by
/// `angle` about the surface center before the wave is applied:
/// `axis += amplitude·sin(orthogonal·period + time·time_scale)`.
pub fn wavy(uv: Vec2, u: &WavyUniforms) -> Vec2 {
    let [w, h] = u.resolution;
    let aspect = if w > 0.0 && h > 0.0 { w / h } else { 1.0 };

    let mut p = Vec2::new(uv.x * aspect, uv.y);
    p = p.rotate_about(Vec2::new(aspect, 1.0) * 0.5, u.angle);

    let phase = u.time * u.time_scale;
    if u.orientation > 0.0 {
        p.x += u.amplitude * (p.y * u.period + phase).sin();
    } else {
        p.y += u.amplitude * (p.x * u.period + phase).sin();
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(u: WavyUniforms) -> WavyUniforms {
        WavyUniforms { resolution: [100.0, 100.0], ..u }
    }

    #[test]
    fn horizontal_wave_offsets_x_by_y() {
        let u = square(WavyUniforms { amplitude: 0.2, period: 3.0, ..Default::default() });
        let out = wavy(Vec2::new(0.5, 0.25), &u);
        assert!((out.x - (0.5 + 0.2 * (0.25f32 * 3.0).sin())).abs() < 1e-6);
        assert_eq!(out.y, 0.25);
    }

    #[test]
    fn vertical_wave_offsets_y_by_x() {
        let u = square(WavyUniforms {
            amplitude: 0.2,
            period: 3.0,
            orientation: -1.0,
            ..Default::default()
        });
        let out = wavy(Vec2::new(0.25, 0.5), &u);
        assert_eq!(out.x, 0.25);
        assert!((out.y - (0.5 + 0.2 * (0.25f32 * 3.0).sin())).abs() < 1e-6);
    }

    #[test]
    fn time_advances_the_phase() {
        let u = square(WavyUniforms {
            amplitude: 1.0,
            period: 0.0,
            time: 1.0,
            time_scale: 0.5,
            ..Default::default()
        });
        // period 0 isolates the phase: x += sin(0.5).
        let out = wavy(Vec2::new(0.0, 0.9), &u);
        assert!((out.x - 0.5f32.sin()).abs() < 1e-6);
    }

    #[test]
    fn rotation_happens_before_the_wave() {
        // A half-turn about the center maps (0.25, 0.5) to (0.75, 0.5);
        // the wave then reads the rotated y.
        let u = square(WavyUniforms {
            amplitude: 0.0,
            angle: std::f32::consts::PI,
            ..Default::default()
        });
        let out = wavy(Vec2::new(0.25, 0.5), &u);
        assert!((out.x - 0.75).abs() < 1e-6);
        assert!((out.y - 0.5).abs() < 1e-6);
    }
}
