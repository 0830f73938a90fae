//! Color sampling model.
//!
//! Scope:
//! - color representation (straight-alpha RGBA)
//! - 1-D color stop tables with soft or hard transitions and tiling
//! - oriented samplers mapping a surface axis onto the table domain
//!
//! Coordinate types remain in `coords`.

mod color;
mod error;
mod sampler;
mod stops;

pub use color::Color;
pub use error::SamplerError;
pub use sampler::{Orientation, Sampler};
pub use stops::{ColorStop, StopTable, TileMode};
