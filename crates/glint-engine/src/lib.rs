//! Glint engine crate.
//!
//! Procedural, animated gradient fields: a family of coordinate-warp
//! functions (spiral, polar, hatch, wavy, four-color) feeding 1-D color
//! samplers, driven once per frame by a pausable time source.
//!
//! The evaluation backend is deliberately abstract: each warp family keeps
//! its tunables in a GPU-upload-shaped uniform block behind an
//! equality-gated parameter store, and the [`render::FillShader`] trait is
//! the "evaluate fragment program" seam a host renderer plugs into.

pub mod coords;
pub mod paint;
pub mod warp;
pub mod shader;
pub mod brush;
pub mod render;
pub mod time;
pub mod presets;

pub mod logging;
