//! Shared color palettes the preset tables draw from.

use crate::paint::Color;

/// Two-tone magenta/plum, the fallback palette.
pub const PLUM: &[Color] = &[Color::from_argb(0xff98117f), Color::from_argb(0xff520759)];

/// Loud five-stop rainbow-ish ramp.
pub const PRISM: &[Color] = &[
    Color::from_argb(0xffff00ff),
    Color::RED,
    Color::YELLOW,
    Color::WHITE,
    Color::CYAN,
];

/// Warm amber-to-dark-red ramp.
pub const EMBER: &[Color] = &[
    Color::from_argb(0xfff8b500),
    Color::from_argb(0xfff2722b),
    Color::from_argb(0xffd90429),
    Color::from_argb(0xff8d0801),
];

/// Pale cyan into deep teal.
pub const LAGOON: &[Color] = &[
    Color::from_argb(0xffe0f7fa),
    Color::from_argb(0xff80deea),
    Color::from_argb(0xff00acc1),
    Color::from_argb(0xff006064),
];

/// Mint/cyan into violet/indigo.
pub const NEON: &[Color] = &[
    Color::from_argb(0xff00f5a0),
    Color::from_argb(0xff00d9e9),
    Color::from_argb(0xff8a2be2),
    Color::from_argb(0xff4b0082),
];

/// Pinks, light to saturated.
pub const BLOSSOM: &[Color] = &[
    Color::from_argb(0xffff8fab),
    Color::from_argb(0xfffb6f92),
    Color::from_argb(0xfff72585),
    Color::from_argb(0xffb5179e),
];

/// Lime into near-black olive.
pub const MOSS: &[Color] = &[
    Color::from_argb(0xffaacc00),
    Color::from_argb(0xff6b9d02),
    Color::from_argb(0xff436400),
    Color::from_argb(0xff1e2d00),
];
