use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::paint::Color;

/// Uniform block for the four-color blend.
///
/// Corner colors live in the block directly; this family samples no stop
/// table.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FourColorUniforms {
    pub resolution: [f32; 2],
    /// Pivot of the sampling-coordinate rotation.
    pub center: [f32; 2],
    pub time: f32,
    pub time_scale: f32,
    pub _pad: [f32; 2],
    pub top_left: [f32; 4],
    pub top_right: [f32; 4],
    pub bottom_left: [f32; 4],
    pub bottom_right: [f32; 4],
}

impl Default for FourColorUniforms {
    fn default() -> Self {
        Self {
            resolution: [0.0, 0.0],
            center: [0.5, 0.5],
            time: 0.0,
            time_scale: 0.1,
            _pad: [0.0; 2],
            top_left: [0.0; 4],
            top_right: [0.0; 4],
            bottom_left: [0.0; 4],
            bottom_right: [0.0; 4],
        }
    }
}

#[inline]
fn corner(c: [f32; 4]) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// Bilinear blend of four corner colors with a spinning sample coordinate.
///
/// The *coordinate* is rotated by `time·time_scale` about `center` (so the
/// whole blend field appears to turn), then the top pair and bottom pair
/// are blended along x and the two intermediates along y. Blend factors
/// are deliberately unclamped outside the unit square, matching GPU `mix`.
pub fn four_color(uv: Vec2, u: &FourColorUniforms) -> Color {
    let center = Vec2::new(u.center[0], u.center[1]);
    let p = uv.rotate_about(center, u.time * u.time_scale);

    let top = corner(u.top_left).lerp(corner(u.top_right), p.x);
    let bottom = corner(u.bottom_left).lerp(corner(u.bottom_right), p.x);
    top.lerp(bottom, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners() -> FourColorUniforms {
        FourColorUniforms {
            resolution: [100.0, 100.0],
            top_left: [1.0, 0.0, 0.0, 1.0],
            top_right: [0.0, 1.0, 0.0, 1.0],
            bottom_left: [0.0, 0.0, 1.0, 1.0],
            bottom_right: [1.0, 1.0, 1.0, 1.0],
            ..Default::default()
        }
    }

    #[test]
    fn static_field_hits_corners_at_time_zero() {
        let u = corners();
        assert_eq!(four_color(Vec2::new(0.0, 0.0), &u), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(four_color(Vec2::new(1.0, 0.0), &u), Color::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(four_color(Vec2::new(0.0, 1.0), &u), Color::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(four_color(Vec2::new(1.0, 1.0), &u), Color::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn center_is_the_average_of_all_corners() {
        let u = corners();
        let c = four_color(Vec2::new(0.5, 0.5), &u);
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.5).abs() < 1e-6);
        assert!((c.b - 0.5).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_pivot_is_a_fixed_point() {
        // With time applied, the center color must not change: the pivot
        // maps to itself under rotation.
        let still = corners();
        let spun = FourColorUniforms { time: 3.0, time_scale: 0.7, ..still };
        let a = four_color(Vec2::new(0.5, 0.5), &still);
        let b = four_color(Vec2::new(0.5, 0.5), &spun);
        assert!((a.r - b.r).abs() < 1e-5);
        assert!((a.g - b.g).abs() < 1e-5);
        assert!((a.b - b.b).abs() < 1e-5);
    }
}
