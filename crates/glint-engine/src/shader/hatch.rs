use crate::coords::Resolution;
use crate::paint::Orientation;
use crate::warp::HatchUniforms;

/// Parameter store for the hatch warp.
#[derive(Debug, Clone)]
pub struct HatchProgram {
    block: HatchUniforms,
    orientation: Orientation,
    peaks: f32,
    writes: u64,
    dirty: bool,
}

impl HatchProgram {
    pub fn new() -> Self {
        Self {
            block: HatchUniforms::default(),
            orientation: Orientation::Horizontal,
            peaks: 4.0,
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

    /// A peak is one up-down zig-zag pair, so it spans two stripes.
    pub fn set_peaks(&mut self, peaks: f32) {
        if self.peaks == peaks {
            return;
        }
        self.peaks = peaks;
        self.block.stripes = peaks * 2.0;
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

    fn push(&mut self) {
        self.writes += 1;
        self.dirty = true;
    }

    #[inline]
    pub fn uniforms(&self) -> &HatchUniforms {
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

impl Default for HatchProgram {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peaks_double_into_stripes() {
        let mut p = HatchProgram::new();
        p.set_peaks(8.0);
        assert_eq!(p.uniforms().stripes, 16.0);
        let writes = p.writes();
        p.set_peaks(8.0);
        assert_eq!(p.writes(), writes);
    }

    #[test]
    fn orientation_encodes_into_the_block() {
        let mut p = HatchProgram::new();
        p.set_orientation(Orientation::Vertical);
        assert_eq!(p.uniforms().orientation, -1.0);
        assert_eq!(p.writes(), 1);
    }
}
