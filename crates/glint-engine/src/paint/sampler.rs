use crate::coords::Vec2;

use super::{Color, SamplerError, StopTable, TileMode};

/// Which surface axis maps onto the stop table's 1-D domain.
///
/// Purely spatial: orientation never flips a time term.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Uniform encoding: `1.0` horizontal, `-1.0` vertical.
    #[inline]
    pub fn encode(self) -> f32 {
        if self == Orientation::Horizontal { 1.0 } else { -1.0 }
    }
}

/// A bound 1-D color sampler: stop table + orientation + domain bounds.
///
/// The relevant axis of a surface coordinate is mapped linearly from
/// `[b0, b1]` onto the table's `[0, 1]` domain; outside it, the table's
/// tile mode governs. Immutable once constructed — callers rebuild (not
/// mutate) when colors, tile mode, or the hard flag change, and brushes
/// are re-created alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampler {
    table: StopTable,
    orientation: Orientation,
    bounds: (f32, f32),
}

impl Sampler {
    pub fn new(
        orientation: Orientation,
        bounds: (f32, f32),
        colors: &[Color],
        tile: TileMode,
        hard: bool,
    ) -> Result<Self, SamplerError> {
        if bounds.0 == bounds.1 {
            return Err(SamplerError::DegenerateBounds { at: bounds.0 });
        }
        Ok(Self {
            table: StopTable::build(colors, tile, hard)?,
            orientation,
            bounds,
        })
    }

    /// Sampler over the full unit domain, the common case.
    pub fn unit(
        orientation: Orientation,
        colors: &[Color],
        tile: TileMode,
        hard: bool,
    ) -> Result<Self, SamplerError> {
        Self::new(orientation, (0.0, 1.0), colors, tile, hard)
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[inline]
    pub fn bounds(&self) -> (f32, f32) {
        self.bounds
    }

    #[inline]
    pub fn table(&self) -> &StopTable {
        &self.table
    }

    /// Resolves a (possibly warped) surface coordinate to a color.
    #[inline]
    pub fn sample(&self, uv: Vec2) -> Color {
        let p = match self.orientation {
            Orientation::Horizontal => uv.x,
            Orientation::Vertical => uv.y,
        };
        let (b0, b1) = self.bounds;
        self.table.eval((p - b0) / (b1 - b0))
    }
}
