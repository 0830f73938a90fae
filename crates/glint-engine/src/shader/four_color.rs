use crate::coords::{Resolution, Vec2};
use crate::paint::Color;
use crate::warp::FourColorUniforms;

/// Parameter store for the four-color blend.
#[derive(Debug, Clone)]
pub struct FourColorProgram {
    block: FourColorUniforms,
    writes: u64,
    dirty: bool,
}

impl FourColorProgram {
    pub fn new() -> Self {
        Self {
            block: FourColorUniforms::default(),
            writes: 0,
            dirty: true,
        }
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        let v = [resolution.width, resolution.height];
        if self.block.resolution == v {
            return;
        }
        self.block.resolution = v;
        self.push();
    }

    pub fn set_center(&mut self, center: Vec2) {
        let v = [center.x, center.y];
        if self.block.center == v {
            return;
        }
        self.block.center = v;
        self.push();
    }

    pub fn set_time(&mut self, time: f32) {
        if self.block.time == time {
            return;
        }
        self.block.time = time;
        self.push();
    }

    pub fn set_time_scale(&mut self, time_scale: f32) {
        if self.block.time_scale == time_scale {
            return;
        }
        self.block.time_scale = time_scale;
        self.push();
    }

    pub fn set_top_left(&mut self, color: Color) {
        Self::set_corner(
            &mut self.block.top_left,
            color,
            &mut self.writes,
            &mut self.dirty,
        );
    }

    pub fn set_top_right(&mut self, color: Color) {
        Self::set_corner(
            &mut self.block.top_right,
            color,
            &mut self.writes,
            &mut self.dirty,
        );
    }

    pub fn set_bottom_left(&mut self, color: Color) {
        Self::set_corner(
            &mut self.block.bottom_left,
            color,
            &mut self.writes,
            &mut self.dirty,
        );
    }

    pub fn set_bottom_right(&mut self, color: Color) {
        Self::set_corner(
            &mut self.block.bottom_right,
            color,
            &mut self.writes,
            &mut self.dirty,
        );
    }

    fn set_corner(slot: &mut [f32; 4], color: Color, writes: &mut u64, dirty: &mut bool) {
        let v = [color.r, color.g, color.b, color.a];
        if *slot == v {
            return;
        }
        *slot = v;
        *writes += 1;
        *dirty = true;
    }

    fn push(&mut self) {
        self.writes += 1;
        self.dirty = true;
    }

    #[inline]
    pub fn uniforms(&self) -> &FourColorUniforms {
        &self.block
    }

    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for FourColorProgram {
    fn default() -> Self {
        Self::new()
    }
}
