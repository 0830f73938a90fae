use super::{Color, SamplerError};

/// Tiling behavior for positions outside the `[0, 1]` table domain.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TileMode {
    /// Saturate to the nearest endpoint color.
    Clamp,
    /// Wrap `pos mod 1`.
    Repeat,
    /// Reflect with a triangle wave: `1 - |1 - (pos mod 2)|`.
    Mirror,
}

impl TileMode {
    /// Maps an arbitrary position back into the `[0, 1]` domain.
    #[inline]
    pub fn apply(self, pos: f32) -> f32 {
        match self {
            TileMode::Clamp => pos.clamp(0.0, 1.0),
            TileMode::Repeat => pos.rem_euclid(1.0),
            TileMode::Mirror => 1.0 - (1.0 - pos.rem_euclid(2.0)).abs(),
        }
    }
}

/// A single gradient stop. `t` lies in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// A 1-D piecewise color ramp over `[0, 1]` with a tiling rule outside it.
///
/// Built once from an ordered color list; immutable afterwards. Positions
/// are monotonically non-decreasing by construction. Soft tables
/// interpolate linearly between neighbors in straight color space; hard
/// tables hold each color constant on `[i/N, (i+1)/N)` with a step at each
/// boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct StopTable {
    stops: Vec<ColorStop>,
    tile: TileMode,
}

impl StopTable {
    /// N stops at `i/(N-1)`, linear interpolation between neighbors.
    pub fn soft(colors: &[Color], tile: TileMode) -> Result<Self, SamplerError> {
        Self::require_colors(colors)?;
        let last = (colors.len() - 1) as f32;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| ColorStop::new(i as f32 / last, color))
            .collect();
        Ok(Self { stops, tile })
    }

    /// 2N stops, each color doubled at `i/N` and `(i+1)/N`, yielding a step
    /// function with no interpolation ramp across boundaries.
    pub fn hard(colors: &[Color], tile: TileMode) -> Result<Self, SamplerError> {
        Self::require_colors(colors)?;
        let step = 1.0 / colors.len() as f32;
        let mut stops = Vec::with_capacity(colors.len() * 2);
        for (i, &color) in colors.iter().enumerate() {
            stops.push(ColorStop::new(i as f32 * step, color));
            stops.push(ColorStop::new((i + 1) as f32 * step, color));
        }
        Ok(Self { stops, tile })
    }

    /// Dispatches on the hard-transition flag.
    pub fn build(colors: &[Color], tile: TileMode, hard: bool) -> Result<Self, SamplerError> {
        if hard {
            Self::hard(colors, tile)
        } else {
            Self::soft(colors, tile)
        }
    }

    fn require_colors(colors: &[Color]) -> Result<(), SamplerError> {
        if colors.len() < 2 {
            return Err(SamplerError::TooFewColors { count: colors.len() });
        }
        Ok(())
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn tile_mode(&self) -> TileMode {
        self.tile
    }

    /// Evaluates the ramp at `pos`, tiling first.
    ///
    /// Segments are half-open on the left (`[a.t, b.t)` resolves against
    /// `a..b`), so a duplicated stop position yields the *right-hand* color
    /// exactly at the boundary — hard tables step at `i/N`, not after it.
    pub fn eval(&self, pos: f32) -> Color {
        let pos = self.tile.apply(pos);

        // stops is non-empty by construction (>= 4 hard, >= 2 soft).
        let first = self.stops[0];
        if pos <= first.t {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if pos < b.t {
                if b.t <= a.t {
                    continue;
                }
                return a.color.lerp(b.color, (pos - a.t) / (b.t - a.t));
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::from_argb(0xff98117f);
    const B: Color = Color::from_argb(0xff520759);

    fn two_soft() -> StopTable {
        StopTable::soft(&[A, B], TileMode::Clamp).unwrap()
    }

    fn two_hard() -> StopTable {
        StopTable::hard(&[A, B], TileMode::Clamp).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn rejects_single_color() {
        assert_eq!(
            StopTable::soft(&[A], TileMode::Clamp),
            Err(SamplerError::TooFewColors { count: 1 })
        );
        assert_eq!(
            StopTable::hard(&[], TileMode::Repeat),
            Err(SamplerError::TooFewColors { count: 0 })
        );
    }

    #[test]
    fn soft_places_stops_evenly() {
        let t = StopTable::soft(&[A, B, A], TileMode::Clamp).unwrap();
        let pos: Vec<f32> = t.stops().iter().map(|s| s.t).collect();
        assert_eq!(pos, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn hard_doubles_every_stop() {
        let t = two_hard();
        let pos: Vec<f32> = t.stops().iter().map(|s| s.t).collect();
        assert_eq!(pos, vec![0.0, 0.5, 0.5, 1.0]);
    }

    // ── endpoint invariant ────────────────────────────────────────────────

    #[test]
    fn soft_endpoints_are_exact() {
        let t = two_soft();
        assert_eq!(t.eval(0.0), A);
        assert_eq!(t.eval(1.0), B);
    }

    #[test]
    fn hard_endpoints_are_exact() {
        let t = two_hard();
        assert_eq!(t.eval(0.0), A);
        assert_eq!(t.eval(1.0), B);
    }

    // ── hard vs soft boundary ─────────────────────────────────────────────

    #[test]
    fn hard_table_steps_at_midpoint() {
        let t = two_hard();
        assert_eq!(t.eval(0.49999), A);
        assert_eq!(t.eval(0.50001), B);
        // Left-closed segments: the boundary itself already shows the next color.
        assert_eq!(t.eval(0.5), B);
    }

    #[test]
    fn soft_table_is_continuous_at_midpoint() {
        let t = two_soft();
        let lo = t.eval(0.49999);
        let hi = t.eval(0.50001);
        assert!((lo.r - hi.r).abs() < 1e-4);
        assert!((lo.g - hi.g).abs() < 1e-4);
        assert!((lo.b - hi.b).abs() < 1e-4);
    }

    // ── tile modes ────────────────────────────────────────────────────────

    #[test]
    fn repeat_wraps_mod_one() {
        let t = StopTable::soft(&[A, B], TileMode::Repeat).unwrap();
        assert_eq!(t.eval(1.3), t.eval(0.3));
    }

    #[test]
    fn mirror_reflects() {
        let t = StopTable::soft(&[A, B], TileMode::Mirror).unwrap();
        let mirrored = t.eval(1.3);
        let direct = t.eval(0.7);
        assert!((mirrored.r - direct.r).abs() < 1e-6);
        assert!((mirrored.g - direct.g).abs() < 1e-6);
        assert!((mirrored.b - direct.b).abs() < 1e-6);
    }

    #[test]
    fn clamp_saturates() {
        let t = two_soft();
        assert_eq!(t.eval(1.3), t.eval(1.0));
        assert_eq!(t.eval(-0.5), t.eval(0.0));
    }

    #[test]
    fn hard_clamp_at_one_is_last_color() {
        // The hard layout always ends with an explicit stop at exactly 1.0,
        // so clamp saturation lands on the final color.
        let t = StopTable::hard(&[A, B, A], TileMode::Clamp).unwrap();
        assert_eq!(t.eval(1.0), A);
        assert_eq!(t.eval(5.0), A);
    }
}
