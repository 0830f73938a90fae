//! Brush objects.
//!
//! A brush binds one parameter store to one sampler and is the mutable,
//! long-lived resource a surface holds across frames: constructed once
//! per effect-configuration identity, re-created when the sampler's
//! identity-affecting inputs change (colors, tile mode, hard flag),
//! mutated in place otherwise. Callers re-issue setters and `set_time`
//! every frame; `prepare` binds the surface resolution and is cheap on an
//! unchanged size. Brushes perform no reconciliation of parameters a
//! caller forgot to update.

mod four_color;
mod hatch;
mod polar;
mod spiral;
mod waves;
mod wavy;

pub use four_color::{FourColorBrush, FourColorParams};
pub use hatch::{HatchBrush, HatchParams};
pub use polar::{PolarBrush, PolarParams};
pub use spiral::{SpiralBrush, SpiralParams};
pub use waves::WavesEffect;
pub use wavy::{WavyBrush, WavyParams};

use crate::coords::{Resolution, Vec2};

/// Fragment coordinate → normalized surface coordinate.
#[inline]
pub(crate) fn normalize(frag: Vec2, resolution: Resolution) -> Vec2 {
    Vec2::new(frag.x / resolution.width, frag.y / resolution.height)
}
