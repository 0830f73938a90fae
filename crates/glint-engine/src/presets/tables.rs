//! The curated preset tables.

use crate::brush::{FourColorParams, HatchParams, PolarParams, SpiralParams, WavyParams};
use crate::coords::Vec2;
use crate::paint::{Color, Orientation, TileMode};
use crate::shader::{Direction, RotationDirection};

use super::{palettes, Preset, SamplerConfig};

const fn soft(colors: &'static [Color], tile_mode: TileMode) -> SamplerConfig {
    SamplerConfig::new(colors, tile_mode, false)
}

const fn hard(colors: &'static [Color], tile_mode: TileMode) -> SamplerConfig {
    SamplerConfig::new(colors, tile_mode, true)
}

pub fn spiral_presets() -> Vec<Preset<SpiralParams>> {
    vec![
        Preset {
            sampler: hard(palettes::PLUM, TileMode::Mirror),
            params: SpiralParams { threshold: 4.0, ..Default::default() },
        },
        Preset {
            sampler: soft(palettes::PRISM, TileMode::Mirror),
            params: SpiralParams {
                time_scale: 0.1,
                threshold: 1.0,
                direction: Direction::In,
                ..Default::default()
            },
        },
        Preset {
            sampler: hard(palettes::BLOSSOM, TileMode::Mirror),
            params: SpiralParams {
                threshold: 4.0,
                center: Vec2::new(0.25, 0.25),
                ..Default::default()
            },
        },
        Preset {
            sampler: soft(palettes::NEON, TileMode::Mirror),
            params: SpiralParams {
                time_scale: 0.1,
                threshold: 2.0,
                direction: Direction::In,
                center: Vec2::new(0.75, 0.75),
            },
        },
    ]
}

pub fn polar_presets() -> Vec<Preset<PolarParams>> {
    vec![
        Preset {
            sampler: soft(palettes::EMBER, TileMode::Mirror),
            params: PolarParams {
                rotation_direction: RotationDirection::Clockwise,
                in_out_time_scale: 0.1,
                rotation_time_scale: 0.3,
                ..Default::default()
            },
        },
        Preset {
            sampler: hard(palettes::BLOSSOM, TileMode::Mirror),
            params: PolarParams {
                petals: 13.0,
                rotation_time_scale: 0.1,
                petal_influence: 0.35,
                wobble: 0.3,
                in_out_time_scale: 0.5,
                ..Default::default()
            },
        },
        Preset {
            sampler: soft(palettes::PRISM, TileMode::Mirror),
            params: PolarParams {
                petals: 7.0,
                rotation_time_scale: 0.1,
                petal_influence: 0.35,
                center: Vec2::new(0.25, 0.25),
                ..Default::default()
            },
        },
        Preset {
            sampler: soft(palettes::LAGOON, TileMode::Mirror),
            params: PolarParams {
                petals: 3.0,
                rotation_time_scale: 0.1,
                petal_influence: 1.0,
                wobble: 1.0,
                in_out_time_scale: 0.5,
                ..Default::default()
            },
        },
        Preset {
            sampler: hard(palettes::NEON, TileMode::Mirror),
            params: PolarParams {
                petals: 5.0,
                rotation_time_scale: 0.1,
                petal_influence: 0.3,
                wobble: 0.0,
                in_out_time_scale: 0.5,
                ..Default::default()
            },
        },
    ]
}

pub fn hatch_presets() -> Vec<Preset<HatchParams>> {
    vec![
        Preset {
            sampler: soft(palettes::PRISM, TileMode::Mirror),
            params: HatchParams {
                amplitude: 0.5,
                peaks: 8.0,
                orientation: Orientation::Vertical,
                ..Default::default()
            },
        },
        Preset {
            sampler: hard(palettes::PRISM, TileMode::Mirror),
            params: HatchParams {
                amplitude: 0.5,
                peaks: 10.0,
                orientation: Orientation::Horizontal,
                ..Default::default()
            },
        },
    ]
}

pub fn wavy_presets() -> Vec<Preset<WavyParams>> {
    vec![
        Preset {
            sampler: soft(palettes::BLOSSOM, TileMode::Mirror),
            params: WavyParams { amplitude: 0.5, period: 6.0, ..Default::default() },
        },
        Preset {
            sampler: hard(palettes::EMBER, TileMode::Clamp),
            params: WavyParams {
                orientation: Orientation::Vertical,
                amplitude: 0.1,
                period: 3.0,
                bounds: (0.35, 0.65),
                ..Default::default()
            },
        },
        Preset {
            sampler: hard(palettes::LAGOON, TileMode::Clamp),
            params: WavyParams {
                orientation: Orientation::Vertical,
                amplitude: 0.1,
                period: 6.0,
                bounds: (0.2, 0.5),
                ..Default::default()
            },
        },
    ]
}

/// Four-color entry. No sampler half; the corner record is the whole
/// configuration, so these carry a display name instead.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FourColorPreset {
    pub name: &'static str,
    pub params: FourColorParams,
}

fn corners(name: &'static str, tl: u32, tr: u32, bl: u32, br: u32) -> FourColorPreset {
    FourColorPreset {
        name,
        params: FourColorParams {
            top_left: Color::from_argb(tl),
            top_right: Color::from_argb(tr),
            bottom_left: Color::from_argb(bl),
            bottom_right: Color::from_argb(br),
            ..Default::default()
        },
    }
}

pub fn four_color_presets() -> Vec<FourColorPreset> {
    vec![
        corners("Sunset Heat", 0xfffb5607, 0xffffb703, 0xff8338ec, 0xffff006e),
        corners("Deep Ocean", 0xff0b132b, 0xff2ec4b6, 0xff5bc0eb, 0xff1c2541),
        corners("Cotton Candy", 0xffaed9e0, 0xffb8f2e6, 0xffffc8dd, 0xffffa6c1),
        corners("Forest & Gold", 0xff0b3d2e, 0xfff2c14e, 0xff95d5b2, 0xff2d6a4f),
        corners("Cyberpunk Night", 0xff0b0f2b, 0xff00f5d4, 0xff9b5de5, 0xfff15bb5),
        corners("Desert Sky", 0xffffddd2, 0xff90e0ef, 0xffe29578, 0xff3a86ff),
        corners("Monochrome & Accent", 0xff111827, 0xffffffff, 0xffe5e7eb, 0xff60a5fa),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── table integrity ──

    #[test]
    fn every_sampler_recipe_builds() {
        for p in spiral_presets() {
            p.sampler.unit_sampler(Orientation::Horizontal).unwrap();
        }
        for p in polar_presets() {
            p.sampler.unit_sampler(Orientation::Horizontal).unwrap();
        }
        for p in hatch_presets() {
            p.sampler
                .sampler(p.params.orientation, p.params.bounds)
                .unwrap();
        }
        for p in wavy_presets() {
            p.sampler
                .sampler(p.params.orientation, p.params.bounds)
                .unwrap();
        }
    }

    #[test]
    fn four_color_entries_are_opaque_and_named() {
        let presets = four_color_presets();
        assert_eq!(presets.len(), 7);
        for p in presets {
            assert!(!p.name.is_empty());
            for c in [
                p.params.top_left,
                p.params.top_right,
                p.params.bottom_left,
                p.params.bottom_right,
            ] {
                assert_eq!(c.a, 1.0);
            }
        }
    }
}
