/// Straight-alpha RGBA color, channels in `[0, 1]`.
///
/// Invariant:
/// - components are *not* premultiplied by alpha.
///
/// Rationale:
/// - gradient stop interpolation is specified per channel in straight
///   space, so a stop table can be evaluated without (un)premultiplying
///   at every lookup. Hosts that blend in premultiplied space convert at
///   the upload boundary.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from a packed `0xAARRGGBB` value.
    ///
    /// This is the preferred constructor for palette literals.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xff) as f32 / 255.0,
            g: ((argb >> 8) & 0xff) as f32 / 255.0,
            b: (argb & 0xff) as f32 / 255.0,
            a: ((argb >> 24) & 0xff) as f32 / 255.0,
        }
    }

    /// Per-channel linear interpolation in straight space.
    ///
    /// `t` is not clamped; callers that feed unclamped blend factors (the
    /// four-color warp does) get linear extrapolation, matching GPU `mix`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Packs into 8-bit RGBA, clamping each channel to `[0, 1]`.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        #[inline]
        fn chan(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
        }
        [chan(self.r), chan(self.g), chan(self.b), chan(self.a)]
    }
}
