use crate::coords::{Resolution, Vec2};
use crate::paint::Color;
use crate::render::FillShader;
use crate::shader::WavesProgram;
use crate::warp;

/// Decorative waves distortion wrapped around arbitrary content.
///
/// The content is any [`FillShader`]; the wrapper displaces the sample
/// coordinate with the waves warp before delegating, so the content
/// appears to shimmer. Content and wrapper share the bound resolution.
#[derive(Debug, Clone)]
pub struct WavesEffect<C: FillShader> {
    program: WavesProgram,
    content: C,
}

impl<C: FillShader> WavesEffect<C> {
    pub fn new(content: C) -> Self {
        Self {
            program: WavesProgram::new(),
            content,
        }
    }

    pub fn prepare(&mut self, resolution: Resolution) {
        self.program.set_resolution(resolution);
    }

    pub fn set_time(&mut self, time: f32) {
        self.program.set_time(time);
    }

    #[inline]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[inline]
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    #[inline]
    pub fn program(&self) -> &WavesProgram {
        &self.program
    }
}

impl<C: FillShader> FillShader for WavesEffect<C> {
    fn resolution(&self) -> Resolution {
        let [w, h] = self.program.uniforms().resolution;
        Resolution::new(w, h)
    }

    fn shade(&self, frag_coord: Vec2) -> Color {
        let res = self.resolution();
        let uv = super::normalize(frag_coord, res);
        let warped = warp::waves(uv, self.program.uniforms());
        self.content
            .shade(Vec2::new(warped.x * res.width, warped.y * res.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(Color);

    impl FillShader for Flat {
        fn resolution(&self) -> Resolution {
            Resolution::new(100.0, 100.0)
        }
        fn shade(&self, _frag: Vec2) -> Color {
            self.0
        }
    }

    #[test]
    fn uniform_content_passes_through_unchanged() {
        let mut fx = WavesEffect::new(Flat(Color::MAGENTA));
        fx.prepare(Resolution::new(100.0, 100.0));
        fx.set_time(2.5);
        assert_eq!(fx.shade(Vec2::new(30.0, 70.0)), Color::MAGENTA);
    }
}
