use crate::coords::Resolution;
use crate::warp::WavesUniforms;

/// Parameter store for the waves distortion. Only resolution and time are
/// tunable; the displacement frequencies are fixed.
#[derive(Debug, Clone)]
pub struct WavesProgram {
    block: WavesUniforms,
    writes: u64,
    dirty: bool,
}

impl WavesProgram {
    pub fn new() -> Self {
        Self {
            block: WavesUniforms::default(),
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

    fn push(&mut self) {
        self.writes += 1;
        self.dirty = true;
    }

    #[inline]
    pub fn uniforms(&self) -> &WavesUniforms {
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

impl Default for WavesProgram {
    fn default() -> Self {
        Self::new()
    }
}
