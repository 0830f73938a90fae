use crate::coords::Resolution;
use crate::paint::Orientation;
use crate::warp::WavyUniforms;

/// Parameter store for the wavy warp.
#[derive(Debug, Clone)]
pub struct WavyProgram {
    block: WavyUniforms,
    orientation: Orientation,
    writes: u64,
    dirty: bool,
}

impl WavyProgram {
    pub fn new() -> Self {
        Self {
            block: WavyUniforms::default(),
            orientation: Orientation::Horizontal,
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

    pub fn set_amplitude(&mut self, amplitude: f32) {
        if self.block.amplitude == amplitude {
            return;
        }
        self.block.amplitude = amplitude;
        self.push();
    }

    pub fn set_period(&mut self, period: f32) {
        if self.block.period == period {
            return;
        }
        self.block.period = period;
        self.push();
    }

    pub fn set_angle(&mut self, angle: f32) {
        if self.block.angle == angle {
            return;
        }
        self.block.angle = angle;
        self.push();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        self.block.orientation = orientation.encode();
        self.push();
    }

    pub fn set_alpha_threshold(&mut self, threshold: f32) {
        if self.block.alpha_threshold == threshold {
            return;
        }
        self.block.alpha_threshold = threshold;
        self.push();
    }

    fn push(&mut self) {
        self.writes += 1;
        self.dirty = true;
    }

    #[inline]
    pub fn uniforms(&self) -> &WavyUniforms {
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

impl Default for WavyProgram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_push_once() {
        let mut p = WavyProgram::new();
        p.set_amplitude(0.5);
        p.set_amplitude(0.5);
        p.set_period(6.0);
        p.set_period(6.0);
        assert_eq!(p.writes(), 2);
    }
}
