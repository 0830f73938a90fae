/// Surface size in device pixels.
///
/// Warps treat this as the basis for converting fragment coordinates to
/// normalized `[0, 1]` space and for aspect correction. Aspect ratio is
/// always derived from width/height at the point of use, never cached.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Resolution {
    pub width: f32,
    pub height: f32,
}

impl Resolution {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width over height. Only meaningful for a valid resolution.
    #[inline]
    pub fn aspect(self) -> f32 {
        self.width / self.height
    }
}
