//! Time subsystem.
//!
//! Provides the pausable animation time the warp families consume,
//! without coupling to any particular runtime. Intended usage:
//! - one `AnimatedClock` per animated surface
//! - call `tick(now)` once per presented frame with a monotonic
//!   timestamp and feed the returned seconds to the brush's `set_time`

mod animated_clock;

pub use animated_clock::{AnimatedClock, WallClock};
