//! Rendering seam.
//!
//! [`FillShader`] is the contract a host renderer consumes: "fill the
//! whole surface with this procedurally computed color field". On a GPU
//! host it corresponds to a fragment program re-parameterized per frame;
//! [`rasterize`] is the CPU evaluation of the same field, used by tests
//! and the demo.

use crate::coords::{Resolution, Vec2};
use crate::paint::Color;

/// A renderable full-surface color field.
///
/// `shade` must be pure given the current parameter state: no call-order
/// dependence, no hidden globals. Mutation happens through the owning
/// brush between frames, never during a sample pass.
pub trait FillShader {
    /// The resolution the effect is currently bound to.
    fn resolution(&self) -> Resolution;

    /// Evaluates the field at a fragment coordinate in device pixels.
    fn shade(&self, frag_coord: Vec2) -> Color;
}

/// Evaluates `effect` at every pixel center and packs straight-alpha RGBA8
/// in row-major order.
///
/// The effect is expected to be prepared for `width × height`; a mismatch
/// is a caller contract violation and only earns a one-time debug notice.
pub fn rasterize(effect: &dyn FillShader, width: u32, height: u32) -> Vec<u8> {
    let bound = effect.resolution();
    if bound != Resolution::new(width as f32, height as f32) {
        log::debug!(
            "rasterizing {}x{} against an effect bound to {}x{}",
            width,
            height,
            bound.width,
            bound.height
        );
    }

    let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        for x in 0..width {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            pixels.extend_from_slice(&effect.shade(frag).to_rgba8());
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(Color, Resolution);

    impl FillShader for Flat {
        fn resolution(&self) -> Resolution {
            self.1
        }
        fn shade(&self, _frag: Vec2) -> Color {
            self.0
        }
    }

    #[test]
    fn rasterize_fills_every_pixel() {
        let flat = Flat(Color::new(1.0, 0.0, 0.0, 1.0), Resolution::new(4.0, 3.0));
        let px = rasterize(&flat, 4, 3);
        assert_eq!(px.len(), 4 * 3 * 4);
        assert!(px.chunks(4).all(|c| c == [255, 0, 0, 255]));
    }
}
