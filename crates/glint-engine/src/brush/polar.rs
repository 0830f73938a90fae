use crate::coords::{Resolution, Vec2};
use crate::paint::{Color, Sampler};
use crate::render::FillShader;
use crate::shader::{Direction, PolarProgram, RotationDirection};
use crate::warp;

/// Tunable fields of the polar/flower effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolarParams {
    pub rotation_time_scale: f32,
    pub in_out_time_scale: f32,
    pub petals: f32,
    pub petal_influence: f32,
    pub wobble: f32,
    pub direction: Direction,
    pub rotation_direction: RotationDirection,
    pub center: Vec2,
}

impl Default for PolarParams {
    fn default() -> Self {
        Self {
            rotation_time_scale: 0.5,
            in_out_time_scale: 0.1,
            petals: 5.0,
            petal_influence: 1.0,
            wobble: 0.0,
            direction: Direction::Out,
            rotation_direction: RotationDirection::CounterClockwise,
            center: Vec2::new(0.5, 0.5),
        }
    }
}

/// Animated flower gradient: the polar warp feeding a horizontal sampler.
#[derive(Debug, Clone)]
pub struct PolarBrush {
    program: PolarProgram,
    sampler: Sampler,
}

impl PolarBrush {
    pub fn new(sampler: Sampler, params: &PolarParams) -> Self {
        let mut program = PolarProgram::new();
        program.set_rotation_time_scale(params.rotation_time_scale);
        program.set_in_out_time_scale(params.in_out_time_scale);
        program.set_petals(params.petals);
        program.set_petal_influence(params.petal_influence);
        program.set_wobble(params.wobble);
        program.set_direction(params.direction);
        program.set_rotation_direction(params.rotation_direction);
        program.set_center(params.center);
        Self { program, sampler }
    }

    pub fn prepare(&mut self, resolution: Resolution) {
        self.program.set_resolution(resolution);
    }

    pub fn set_time(&mut self, time: f32) {
        self.program.set_time(time);
    }

    pub fn set_rotation_time_scale(&mut self, scale: f32) {
        self.program.set_rotation_time_scale(scale);
    }

    pub fn set_in_out_time_scale(&mut self, scale: f32) {
        self.program.set_in_out_time_scale(scale);
    }

    pub fn set_petals(&mut self, petals: f32) {
        self.program.set_petals(petals);
    }

    pub fn set_petal_influence(&mut self, influence: f32) {
        self.program.set_petal_influence(influence);
    }

    pub fn set_wobble(&mut self, wobble: f32) {
        self.program.set_wobble(wobble);
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.program.set_direction(direction);
    }

    pub fn set_rotation_direction(&mut self, rotation: RotationDirection) {
        self.program.set_rotation_direction(rotation);
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.program.set_center(center);
    }

    pub fn set_sampler(&mut self, sampler: Sampler) {
        self.sampler = sampler;
    }

    #[inline]
    pub fn program(&self) -> &PolarProgram {
        &self.program
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut PolarProgram {
        &mut self.program
    }
}

impl FillShader for PolarBrush {
    fn resolution(&self) -> Resolution {
        let [w, h] = self.program.uniforms().resolution;
        Resolution::new(w, h)
    }

    fn shade(&self, frag_coord: Vec2) -> Color {
        let u = self.program.uniforms();
        let uv = super::normalize(frag_coord, self.resolution());
        self.sampler.sample(warp::polar(uv, u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Orientation, TileMode};

    #[test]
    fn reissuing_the_same_params_each_frame_is_free() {
        let sampler = Sampler::unit(
            Orientation::Horizontal,
            &[Color::RED, Color::CYAN],
            TileMode::Mirror,
            false,
        )
        .unwrap();
        let params = PolarParams { petals: 13.0, wobble: 0.3, ..Default::default() };
        let mut b = PolarBrush::new(sampler, &params);
        let writes = b.program().writes();
        for _ in 0..5 {
            b.set_petals(params.petals);
            b.set_wobble(params.wobble);
            b.set_center(params.center);
        }
        assert_eq!(b.program().writes(), writes);
    }
}
