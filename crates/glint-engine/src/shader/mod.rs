//! Per-family shader parameter stores ("programs").
//!
//! Every setter follows the same contract: compare the new value against
//! the cached uniform, and only on change write the block, count the
//! write, and raise the dirty flag. Call sites re-issue every parameter
//! unconditionally each frame, so the equality gate is what keeps the
//! backend from seeing redundant state pushes. `take_dirty()` is the
//! re-upload signal; the write counter exists so the push contract is
//! observable in tests.

mod four_color;
mod hatch;
mod polar;
mod spiral;
mod waves;
mod wavy;

pub use four_color::FourColorProgram;
pub use hatch::HatchProgram;
pub use polar::PolarProgram;
pub use spiral::SpiralProgram;
pub use waves::WavesProgram;
pub use wavy::WavyProgram;

/// Temporal sign of an effect's in/out term.
///
/// This flips only the time contribution (spiraling or blooming inward vs
/// outward as time advances); it is never a spatial mirror.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Direction {
    In,
    #[default]
    Out,
}

impl Direction {
    /// Uniform encoding: In = +1, Out = -1.
    #[inline]
    pub fn encode(self) -> f32 {
        if self == Direction::In { 1.0 } else { -1.0 }
    }
}

/// Rotational handedness of an effect's rotation time term.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum RotationDirection {
    Clockwise,
    #[default]
    CounterClockwise,
}

impl RotationDirection {
    /// Uniform encoding: CounterClockwise = +1, Clockwise = -1.
    #[inline]
    pub fn encode(self) -> f32 {
        if self == RotationDirection::CounterClockwise { 1.0 } else { -1.0 }
    }
}
