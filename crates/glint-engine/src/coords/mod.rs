//! Coordinate types.
//!
//! Surface coordinates are normalized to `[0, 1] × [0, 1]` with a top-left
//! origin; the raw pixel [`Resolution`] travels alongside because several
//! warps need it for aspect correction.

mod resolution;
mod vec2;

pub use resolution::Resolution;
pub use vec2::Vec2;
