//! Built-in effect configurations.
//!
//! Each warp family ships a small table of curated presets: a palette
//! description plus a ready-made parameter record. The tables are data,
//! not behavior — callers build the sampler and brush themselves, which
//! keeps the construction error path (`SamplerError`) in one place.

mod palettes;
mod tables;

pub use palettes::{BLOSSOM, EMBER, LAGOON, MOSS, NEON, PLUM, PRISM};
pub use tables::{
    four_color_presets, hatch_presets, polar_presets, spiral_presets, wavy_presets,
    FourColorPreset,
};

use crate::paint::{Color, Orientation, Sampler, SamplerError, TileMode};

/// Identity-affecting sampler inputs, in table form.
///
/// Changing any of these means a new sampler (and brush); they are the
/// inputs [`Sampler`] treats as immutable after construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplerConfig {
    pub colors: &'static [Color],
    pub tile_mode: TileMode,
    pub hard: bool,
}

impl SamplerConfig {
    pub const fn new(colors: &'static [Color], tile_mode: TileMode, hard: bool) -> Self {
        Self { colors, tile_mode, hard }
    }

    /// Builds the sampler over an explicit domain.
    pub fn sampler(
        &self,
        orientation: Orientation,
        bounds: (f32, f32),
    ) -> Result<Sampler, SamplerError> {
        Sampler::new(orientation, bounds, self.colors, self.tile_mode, self.hard)
    }

    /// Builds the sampler over the full unit domain.
    pub fn unit_sampler(&self, orientation: Orientation) -> Result<Sampler, SamplerError> {
        Sampler::unit(orientation, self.colors, self.tile_mode, self.hard)
    }
}

/// One preset entry: the sampler recipe plus the family's parameters.
///
/// The four-color family is the exception — it samples no table, so its
/// entries are [`FourColorPreset`] records instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Preset<P> {
    pub sampler: SamplerConfig,
    pub params: P,
}
