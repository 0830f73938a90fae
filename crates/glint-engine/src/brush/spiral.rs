use crate::coords::{Resolution, Vec2};
use crate::paint::{Color, Sampler};
use crate::render::FillShader;
use crate::shader::{Direction, SpiralProgram};
use crate::warp;

/// Tunable fields of the spiral effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpiralParams {
    pub time_scale: f32,
    /// Spiral tightness — turns per unit radius.
    pub threshold: f32,
    pub direction: Direction,
    pub center: Vec2,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            time_scale: 0.5,
            threshold: 2.0,
            direction: Direction::Out,
            center: Vec2::new(0.5, 0.5),
        }
    }
}

/// Animated spiral gradient: the spiral warp feeding a horizontal sampler.
#[derive(Debug, Clone)]
pub struct SpiralBrush {
    program: SpiralProgram,
    sampler: Sampler,
}

impl SpiralBrush {
    pub fn new(sampler: Sampler, params: &SpiralParams) -> Self {
        let mut program = SpiralProgram::new();
        program.set_time_scale(params.time_scale);
        program.set_threshold(params.threshold);
        program.set_direction(params.direction);
        program.set_center(params.center);
        Self { program, sampler }
    }

    /// Binds the surface resolution; a no-op when the size is unchanged.
    pub fn prepare(&mut self, resolution: Resolution) {
        self.program.set_resolution(resolution);
    }

    pub fn set_time(&mut self, time: f32) {
        self.program.set_time(time);
    }

    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.program.set_time_scale(time_scale);
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.program.set_threshold(threshold);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.program.set_direction(direction);
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.program.set_center(center);
    }

    pub fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    #[inline]
    pub fn program(&self) -> &SpiralProgram {
        &self.program
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut SpiralProgram {
        &mut self.program
    }
}

impl FillShader for SpiralBrush {
    fn resolution(&self) -> Resolution {
        let [w, h] = self.program.uniforms().resolution;
        Resolution::new(w, h)
    }

    fn shade(&self, frag_coord: Vec2) -> Color {
        let u = self.program.uniforms();
        let uv = super::normalize(frag_coord, self.resolution());
        self.sampler.sample(warp::spiral(uv, u))
    }
}
