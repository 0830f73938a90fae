//! Coordinate warp functions.
//!
//! Each family is a pure function from a normalized surface coordinate
//! plus its uniform block to a warped sample coordinate (or, for
//! four-color, directly to a blended color). The uniform blocks are
//! `#[repr(C)]` and `bytemuck::Pod` so a GPU backend can upload them
//! verbatim; the CPU path reads the same memory.
//!
//! Temporal sign conventions (applied uniformly across families):
//! - `Direction` flips only the in/out *time* term (In = +1, Out = -1);
//!   it is never a spatial mirror.
//! - `RotationDirection` flips only the rotation time term
//!   (CounterClockwise = +1, Clockwise = -1), applied exactly once.
//! - `Orientation` selects a spatial axis and never touches time.

mod four_color;
mod hatch;
mod polar;
mod spiral;
mod waves;
mod wavy;

pub use four_color::{four_color, FourColorUniforms};
pub use hatch::{hatch, HatchUniforms};
pub use polar::{polar, PolarUniforms};
pub use spiral::{spiral, SpiralUniforms};
pub use waves::{waves, WavesUniforms};
pub use wavy::{wavy, WavyUniforms};

use crate::coords::Vec2;

/// Scales the shorter axis of a recentered coordinate up so radial warps
/// stay circular on anisotropic surfaces. No-op when the resolution is
/// degenerate.
#[inline]
pub(crate) fn correct_radial_aspect(mut p: Vec2, resolution: [f32; 2]) -> Vec2 {
    let [w, h] = resolution;
    if w <= 0.0 || h <= 0.0 {
        return p;
    }
    if w < h {
        p.y *= h / w;
    } else {
        p.x *= w / h;
    }
    p
}
