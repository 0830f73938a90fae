use std::time::Instant;

/// Accumulated animation time with pause support.
///
/// The clock integrates deltas between successive `tick` timestamps
/// rather than reading the timestamps directly, so pausing freezes the
/// accumulated value and resuming continues from it without a jump:
/// `resume` clears the delta baseline, making the first post-resume tick
/// contribute zero regardless of how long the pause lasted.
///
/// Timestamps are caller-supplied seconds from any monotonic source
/// ([`WallClock`] in production, plain literals in tests).
#[derive(Debug, Clone)]
pub struct AnimatedClock {
    elapsed: f64,
    last: Option<f64>,
    paused: bool,
}

impl AnimatedClock {
    /// Creates a clock at zero elapsed time.
    pub fn new(paused: bool) -> Self {
        Self {
            elapsed: 0.0,
            last: None,
            paused,
        }
    }

    /// Advances the clock to `now` and returns the accumulated seconds.
    ///
    /// While paused the accumulated value is returned unchanged and the
    /// timestamp is ignored. The first tick after construction or after
    /// `resume` establishes the baseline and contributes no delta.
    pub fn tick(&mut self, now: f64) -> f32 {
        if self.paused {
            return self.elapsed as f32;
        }
        let delta = now - self.last.unwrap_or(now);
        self.elapsed += delta;
        self.last = Some(now);
        self.elapsed as f32
    }

    /// Freezes the accumulated time.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Unfreezes the clock. The next tick re-baselines instead of
    /// swallowing the pause interval.
    pub fn resume(&mut self) {
        self.last = None;
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Accumulated animation seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

impl Default for AnimatedClock {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Monotonic seconds-since-construction source for [`AnimatedClock`].
#[derive(Debug, Clone)]
pub struct WallClock {
    epoch: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }

    /// Seconds elapsed since this clock was created.
    pub fn now_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas_between_ticks() {
        let mut clock = AnimatedClock::new(false);
        assert_eq!(clock.tick(10.0), 0.0);
        assert_eq!(clock.tick(11.0), 1.0);
        assert_eq!(clock.tick(12.0), 2.0);
    }

    #[test]
    fn paused_clock_ignores_timestamps() {
        let mut clock = AnimatedClock::new(false);
        clock.tick(0.0);
        clock.tick(2.0);
        clock.pause();
        assert_eq!(clock.tick(50.0), 2.0);
        assert_eq!(clock.tick(90.0), 2.0);
    }

    #[test]
    fn resume_does_not_jump_over_the_pause() {
        let mut clock = AnimatedClock::new(false);
        clock.tick(0.0);
        clock.tick(2.0);
        clock.pause();
        clock.tick(100.0);
        clock.resume();
        // First post-resume tick re-baselines: no delta.
        assert_eq!(clock.tick(100.0), 2.0);
        assert_eq!(clock.tick(100.5), 2.5);
    }

    #[test]
    fn starts_paused_when_asked() {
        let mut clock = AnimatedClock::new(true);
        assert!(clock.is_paused());
        assert_eq!(clock.tick(7.0), 0.0);
        clock.resume();
        clock.tick(7.0);
        assert_eq!(clock.tick(8.0), 1.0);
    }
}
