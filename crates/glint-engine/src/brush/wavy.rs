use crate::coords::{Resolution, Vec2};
use crate::paint::{Color, Orientation, Sampler};
use crate::render::FillShader;
use crate::shader::WavyProgram;
use crate::warp;

/// Tunable fields of the wavy effect.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WavyParams {
    pub time_scale: f32,
    pub amplitude: f32,
    pub period: f32,
    /// Rotation of the whole pattern, radians.
    pub angle: f32,
    /// Samples with alpha below this become fully transparent.
    pub alpha_threshold: f32,
    pub orientation: Orientation,
    pub bounds: (f32, f32),
}

impl Default for WavyParams {
    fn default() -> Self {
        Self {
            time_scale: 0.5,
            amplitude: 0.1,
            period: 2.0,
            angle: 0.0,
            alpha_threshold: 0.0,
            orientation: Orientation::Horizontal,
            bounds: (0.0, 1.0),
        }
    }
}

/// Animated wave gradient: the wavy warp feeding an oriented sampler.
#[derive(Debug, Clone)]
pub struct WavyBrush {
    program: WavyProgram,
    sampler: Sampler,
}

impl WavyBrush {
    pub fn new(sampler: Sampler, params: &WavyParams) -> Self {
        let mut program = WavyProgram::new();
        program.set_time_scale(params.time_scale);
        program.set_amplitude(params.amplitude);
        program.set_period(params.period);
        program.set_angle(params.angle);
        program.set_alpha_threshold(params.alpha_threshold);
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

    pub fn set_period(&mut self, period: f32) {
        self.program.set_period(period);
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.program.set_angle(angle);
    }

    pub fn set_alpha_threshold(&mut self, threshold: f32) {
        self.program.set_alpha_threshold(threshold);
    }

    /// Swaps the sampler; the wave axis follows its orientation.
    pub fn set_sampler(&mut self, sampler: Sampler) {
        self.program.set_orientation(sampler.orientation());
        self.sampler = sampler;
    }

    #[inline]
    pub fn program(&self) -> &WavyProgram {
        &self.program
    }

    #[inline]
    pub fn program_mut(&mut self) -> &mut WavyProgram {
        &mut self.program
    }
}

impl FillShader for WavyBrush {
    fn resolution(&self) -> Resolution {
        let [w, h] = self.program.uniforms().resolution;
        Resolution::new(w, h)
    }

    fn shade(&self, frag_coord: Vec2) -> Color {
        let u = self.program.uniforms();
        let uv = super::normalize(frag_coord, self.resolution());
        let color = self.sampler.sample(warp::wavy(uv, u));
        if color.a < u.alpha_threshold {
            Color::TRANSPARENT
        } else {
            color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::TileMode;

    fn sampler() -> Sampler {
        Sampler::unit(
            Orientation::Vertical,
            &[Color::new(1.0, 0.0, 0.0, 0.4), Color::new(0.0, 0.0, 1.0, 0.4)],
            TileMode::Clamp,
            false,
        )
        .unwrap()
    }

    #[test]
    fn alpha_cutoff_discards_faint_samples() {
        let params = WavyParams { amplitude: 0.0, ..Default::default() };
        let mut faint = WavyBrush::new(sampler(), &params);
        faint.prepare(Resolution::new(100.0, 100.0));
        assert_eq!(faint.shade(Vec2::new(50.0, 50.0)).a, 0.4);

        faint.set_alpha_threshold(0.5);
        assert_eq!(faint.shade(Vec2::new(50.0, 50.0)), Color::TRANSPARENT);
    }
}
