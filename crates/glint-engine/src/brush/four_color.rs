use crate::coords::{Resolution, Vec2};
use crate::paint::Color;
use crate::render::FillShader;
use crate::shader::FourColorProgram;
use crate::warp;

/// Corner colors and motion fields of the four-color blend.
///
/// This family samples no stop table, so there is no sampler half: the
/// preset record is the complete configuration.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FourColorParams {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_left: Color,
    pub bottom_right: Color,
    pub time_scale: f32,
    pub center: Vec2,
}

impl Default for FourColorParams {
    fn default() -> Self {
        Self {
            top_left: Color::TRANSPARENT,
            top_right: Color::TRANSPARENT,
            bottom_left: Color::TRANSPARENT,
            bottom_right: Color::TRANSPARENT,
            time_scale: 0.1,
            center: Vec2::new(0.5, 0.5),
        }
    }
}

/// Spinning bilinear blend of four corner colors.
#[derive(Debug, Clone)]
pub struct FourColorBrush {
    program: FourColorProgram,
}

impl FourColorBrush {
    pub fn new(params: &FourColorParams) -> Self {
        let mut program = FourColorProgram::new();
        program.set_top_left(params.top_left);
        program.set_top_right(params.top_right);
        program.set_bottom_left(params.bottom_left);
        program.set_bottom_right(params.bottom_right);
        program.set_time_scale(params.time_scale);
        program.set_center(params.center);
        Self { program }
    }

    pub fn prepare(&mut self, resolution: Resolution) {
        self.program.set_resolution(resolution);
    }

    pub fn set_time(&mut self, time: f32) {
        self.program.set_time(time);
    }

    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.program.set_time_scale(time_scale);
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.program.set_center(center);
    }

    pub fn set_top_left(&mut self, color: Color) {
        self.program.set_top_left(color);
    }

    pub fn set_top_right(&mut self, color: Color) {
        self.program.set_top_right(color);
    }

    pub fn set_bottom_left(&mut self, color: Color) {
        self.program.set_bottom_left(color);
    }

    pub fn set_bottom_right(&mut self, color: Color) {
        self.program.set_bottom_right(color);
    }

    #[inline]
    pub fn program(&self) -> &FourColorProgram {
        &self.program
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut FourColorProgram {
        &mut self.program
    }
}

impl FillShader for FourColorBrush {
    fn resolution(&self) -> Resolution {
        let [w, h] = self.program.uniforms().resolution;
        Resolution::new(w, h)
    }

    fn shade(&self, frag_coord: Vec2) -> Color {
        let u = self.program.uniforms();
        let uv = super::normalize(frag_coord, self.resolution());
        warp::four_color(uv, u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_center_is_the_corner_average() {
        let params = FourColorParams {
            top_left: Color::new(1.0, 0.0, 0.0, 1.0),
            top_right: Color::new(0.0, 1.0, 0.0, 1.0),
            bottom_left: Color::new(0.0, 0.0, 1.0, 1.0),
            bottom_right: Color::new(1.0, 1.0, 1.0, 1.0),
            ..Default::default()
        };
        let mut b = FourColorBrush::new(&params);
        b.prepare(Resolution::new(100.0, 100.0));
        b.set_time(0.0);
        let c = b.shade(Vec2::new(50.0, 50.0));
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.5).abs() < 1e-6);
        assert!((c.b - 0.5).abs() < 1e-6);
    }
}
