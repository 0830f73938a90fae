use crate::coords::{Resolution, Vec2};
use crate::warp::PolarUniforms;

use super::{Direction, RotationDirection};

/// Parameter store for the polar/flower warp.
#[derive(Debug, Clone)]
pub struct PolarProgram {
    block: PolarUniforms,
    direction: Direction,
    rotation_direction: RotationDirection,
    writes: u64,
    dirty: bool,
}

impl PolarProgram {
    pub fn new() -> Self {
        Self {
            block: PolarUniforms::default(),
            direction: Direction::Out,
            rotation_direction: RotationDirection::CounterClockwise,
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

    pub fn set_rotation_time_scale(&mut self, scale: f32) {
        if self.block.rotation_time_scale == scale {
            return;
        }
        self.block.rotation_time_scale = scale;
        self.push();
    }

    pub fn set_in_out_time_scale(&mut self, scale: f32) {
        if self.block.in_out_time_scale == scale {
            return;
        }
        self.block.in_out_time_scale = scale;
        self.push();
    }

    pub fn set_petals(&mut self, petals: f32) {
        if self.block.petals == petals {
            return;
        }
        self.block.petals = petals;
        self.push();
    }

    pub fn set_petal_influence(&mut self, influence: f32) {
        if self.block.petal_influence == influence {
            return;
        }
        self.block.petal_influence = influence;
        self.push();
    }

    pub fn set_wobble(&mut self, wobble: f32) {
        if self.block.wobble == wobble {
            return;
        }
        self.block.wobble = wobble;
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

    pub fn set_rotation_direction(&mut self, rotation: RotationDirection) {
        if self.rotation_direction == rotation {
            return;
        }
        self.rotation_direction = rotation;
        self.block.rotation_direction = rotation.encode();
        self.push();
    }

    fn push(&mut self) {
        self.writes += 1;
        self.dirty = true;
    }

    #[inline]
    pub fn uniforms(&self) -> &PolarUniforms {
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

impl Default for PolarProgram {
    fn default() -> Self {
        Self::new()
    }
}
