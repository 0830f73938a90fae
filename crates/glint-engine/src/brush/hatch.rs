use crate::coords::{Resolution, Vec2};
use crate::paint::{Color, Orientation, Sampler};
use crate::render::FillShader;
use crate::shader::HatchProgram;
use crate::warp;

/// Tunable fields of the hatch effect.
///
/// `orientation` and `bounds` also shape the sampler this family is bound
/// to; the stripe axis always follows the bound sampler's orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HatchParams {
    pub time_scale: f32,
    pub amplitude: f32,
    /// Zig-zag pairs across the unit interval.
    pub peaks: f32,
    /// Rotation of the whole pattern, radians.
    pub angle: f32,
    pub orientation: Orientation,
    pub bounds: (f32, f32),
}

impl Default for HatchParams {
    fn default() -> Self {
        Self {
            time_scale: 0.5,
            amplitude: 0.1,
            peaks: 4.0,
            angle: 0.0,
            orientation: Orientation::Horizontal,
            bounds: (0.0, 1.0),
        }
    }
}

/// Animated braid gradient: the hatch warp feeding an oriented sampler.
#[derive(Debug, Clone)]
pub struct HatchBrush {
    program: HatchProgram,
    sampler: Sampler,
}

impl HatchBrush {
    pub fn new(sampler: Sampler, params: &HatchParams) -> Self {
        let mut program = HatchProgram::new();
        program.set_time_scale(params.time_scale);
        program.set_amplitude(params.amplitude);
        program.set_peaks(params.peaks);
        program.set_angle(params.angle);
        program.set_orientation(sampler.orientation());
        Self { program, sampler }
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

    pub fn set_amplitude(&mut self, amplitude: f32) {
        self.program.set_amplitude(amplitude);
    }

    pub fn set_peaks(&mut self, peaks: f32) {
        self.program.set_peaks(peaks);
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.program.set_angle(angle);
    }

    /// Swaps the sampler; the stripe axis follows its orientation.
    pub fn set_sampler(&mut self, sampler: Sampler) {
        self.program.set_orientation(sampler.orientation());
        self.sampler = sampler;
    }

    #[inline]
    pub fn program(&self) -> &HatchProgram {
        &self.program
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut HatchProgram {
        &mut self.program
    }
}

impl FillShader for HatchBrush {
    fn resolution(&self) -> Resolution {
        let [w, h] = self.program.uniforms().resolution;
        Resolution::new(w, h)
    }

    fn shade(&self, frag_coord: Vec2) -> Color {
        let u = self.program.uniforms();
        let uv = super::normalize(frag_coord, self.resolution());
        self.sampler.sample(warp::hatch(uv, u))
    }
}
