use crate::coords::{Resolution, Vec2};
use crate::warp::SpiralUniforms;

use super::Direction;

/// Parameter store for the spiral warp.
///
/// Holds the cached uniform block; every setter is a no-op when the value
/// is unchanged. Resolution is a field like any other, set once per
/// surface-size change.
#[derive(Debug, Clone)]
pub struct SpiralProgram {
    block: SpiralUniforms,
    direction: Direction,
    writes: u64,
    dirty: bool,
}

impl SpiralProgram {
    pub fn new() -> Self {
        Self {
            block: SpiralUniforms::default(),
            direction: Direction::Out,
            writes: 0,
            // A fresh block has never been uploaded.
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

    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction == direction {
            return;
        }
        self.direction = direction;
        self.block.direction = direction.encode();
        self.push();
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        if self.block.threshold == threshold {
            return;
        }
        self.block.threshold = threshold;
        self.push();
    }

    fn push(&mut self) {
        self.writes += 1;
        self.dirty = true;
    }

    #[inline]
    pub fn uniforms(&self) -> &SpiralUniforms {
        &self.block
    }

    /// Total uniform writes that actually happened (equality-gated).
    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Returns and clears the re-upload signal.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl Default for SpiralProgram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_value_pushes_once() {
        let mut p = SpiralProgram::new();
        let before = p.writes();
        p.set_threshold(4.0);
        p.set_threshold(4.0);
        assert_eq!(p.writes(), before + 1);
        assert_eq!(p.uniforms().threshold, 4.0);
    }

    #[test]
    fn default_value_does_not_push() {
        let mut p = SpiralProgram::new();
        p.set_direction(Direction::Out);
        assert_eq!(p.writes(), 0);
    }

    #[test]
    fn take_dirty_clears_until_next_write() {
        let mut p = SpiralProgram::new();
        assert!(p.take_dirty());
        assert!(!p.take_dirty());
        p.set_time(1.0);
        assert!(p.take_dirty());
        p.set_time(1.0);
        assert!(!p.take_dirty());
    }

    #[test]
    fn resolution_setter_is_idempotent() {
        let mut p = SpiralProgram::new();
        p.set_resolution(Resolution::new(320.0, 180.0));
        let once = p.writes();
        p.set_resolution(Resolution::new(320.0, 180.0));
        assert_eq!(p.writes(), once);
        p.set_resolution(Resolution::new(320.0, 181.0));
        assert_eq!(p.writes(), once + 1);
    }
}
