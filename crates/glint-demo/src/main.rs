//! Renders every built-in preset to a PNG.
//!
//! CPU stand-in for a GPU host: drives the pausable clock a few frames,
//! binds each preset to a brush, and rasterizes one still per entry into
//! `demo-out/`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use glint_engine::brush::{
    FourColorBrush, HatchBrush, PolarBrush, SpiralBrush, WavesEffect, WavyBrush,
};
use glint_engine::coords::Resolution;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::paint::Orientation;
use glint_engine::presets;
use glint_engine::render::{rasterize, FillShader};
use glint_engine::time::AnimatedClock;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 180;

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        env_filter: Some("info".into()),
        ..Default::default()
    });

    let out = PathBuf::from("demo-out");
    std::fs::create_dir_all(&out).context("creating output directory")?;

    // Deterministic timeline: ninety 60 Hz frames, with a pause in the
    // middle to exercise the freeze path.
    let mut clock = AnimatedClock::new(false);
    let mut time = 0.0f32;
    for frame in 0..60 {
        time = clock.tick(frame as f64 / 60.0);
    }
    clock.pause();
    clock.tick(10.0);
    clock.resume();
    for frame in 60..90 {
        time = clock.tick(frame as f64 / 60.0);
    }
    log::info!("animation time after 90 frames: {time:.3}s");

    let resolution = Resolution::new(WIDTH as f32, HEIGHT as f32);

    for (i, preset) in presets::spiral_presets().iter().enumerate() {
        let sampler = preset.sampler.unit_sampler(Orientation::Horizontal)?;
        let mut brush = SpiralBrush::new(sampler, &preset.params);
        brush.prepare(resolution);
        brush.set_time(time);
        save(&brush, &out.join(format!("spiral-{i}.png")))?;
    }

    for (i, preset) in presets::polar_presets().iter().enumerate() {
        let sampler = preset.sampler.unit_sampler(Orientation::Horizontal)?;
        let mut brush = PolarBrush::new(sampler, &preset.params);
        brush.prepare(resolution);
        brush.set_time(time);
        save(&brush, &out.join(format!("polar-{i}.png")))?;
    }

    for (i, preset) in presets::hatch_presets().iter().enumerate() {
        let sampler = preset
            .sampler
            .sampler(preset.params.orientation, preset.params.bounds)?;
        let mut brush = HatchBrush::new(sampler, &preset.params);
        brush.prepare(resolution);
        brush.set_time(time);
        save(&brush, &out.join(format!("hatch-{i}.png")))?;
    }

    for (i, preset) in presets::wavy_presets().iter().enumerate() {
        let sampler = preset
            .sampler
            .sampler(preset.params.orientation, preset.params.bounds)?;
        let mut brush = WavyBrush::new(sampler, &preset.params);
        brush.prepare(resolution);
        brush.set_time(time);
        save(&brush, &out.join(format!("wavy-{i}.png")))?;
    }

    for preset in presets::four_color_presets() {
        let mut brush = FourColorBrush::new(&preset.params);
        brush.prepare(resolution);
        brush.set_time(time);
        let slug: String = preset
            .name
            .to_lowercase()
            .split_whitespace()
            .filter(|word| *word != "&")
            .collect::<Vec<_>>()
            .join("-");
        save(&brush, &out.join(format!("four-color-{slug}.png")))?;
    }

    // Waves wrapping a four-color field, the layered-effect path.
    let base = presets::four_color_presets()[0];
    let mut waved = WavesEffect::new(FourColorBrush::new(&base.params));
    waved.content_mut().prepare(resolution);
    waved.content_mut().set_time(time);
    waved.prepare(resolution);
    waved.set_time(time);
    save(&waved, &out.join("waves-over-four-color.png"))?;

    log::info!("wrote stills to {}", out.display());
    Ok(())
}

fn save(effect: &dyn FillShader, path: &Path) -> Result<()> {
    let pixels = rasterize(effect, WIDTH, HEIGHT);
    let img = image::RgbaImage::from_raw(WIDTH, HEIGHT, pixels)
        .context("pixel buffer size mismatch")?;
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
